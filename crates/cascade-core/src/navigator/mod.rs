//! Waterfall page navigation for the cascade deck viewer.
//!
//! One page fills the viewport at a time; every input source (wheel,
//! swipe, keyboard, programmatic command) funnels into single-step
//! cursor transitions on [`PageNavigator`], debounced by a time-based
//! lock so one physical gesture never skips pages.
//!
//! # Layout
//!
//! - `guard` - cooldown lock engaged by accepted step transitions
//! - `visibility` - pure projection of per-page display state
//! - `state` - the navigator itself (cursor, observers, operations)
//! - `wheel` - continuous-delta adapter with overflow pass-through
//! - `swipe` - drag-gesture adapter (start/end positions)
//!
//! # Usage
//!
//! ```ignore
//! use cascade_core::{PageNavigator, NavCommand};
//!
//! let mut nav = PageNavigator::new(pages, Duration::from_millis(600))?;
//! nav.on_page_change(|change| println!("page {}", change.current_index));
//!
//! nav.advance();              // step forward, false while locked
//! nav.jump_to(0);             // direct jump, bypasses the lock
//! nav.apply(NavCommand::Last);
//! ```

pub mod guard;
pub mod state;
pub mod swipe;
pub mod visibility;
pub mod wheel;

#[cfg(test)]
pub(crate) mod testutil;

pub use state::{NavCommand, PageChange, PageNavigator};
pub use swipe::SwipeTracker;
pub use visibility::Visibility;
pub use wheel::{WheelAdapter, WheelDisposition};
