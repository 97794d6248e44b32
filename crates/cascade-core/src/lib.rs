pub mod config;
pub mod error;
pub mod navigator;
pub mod page;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use navigator::{NavCommand, PageChange, PageNavigator};
pub use page::{Page, ScrollMetrics};
