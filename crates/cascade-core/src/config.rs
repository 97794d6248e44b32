use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            navigator: NavigatorConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Timing and gesture tuning for the page navigator.
///
/// The cooldown and the wheel throttle are two independent timers with
/// different defaults. Collapsing them would change observable timing,
/// so both stay configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Cooldown after an accepted step transition, in milliseconds
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    /// Minimum gap between wheel-triggered transitions, in milliseconds
    #[serde(default = "default_wheel_throttle_ms")]
    pub wheel_throttle_ms: u64,
    /// Distance from a scroll extreme still counted as the boundary, in rows
    #[serde(default = "default_boundary_tolerance")]
    pub boundary_tolerance: u32,
    /// Minimum drag distance interpreted as a swipe, in rows
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: u32,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
            wheel_throttle_ms: default_wheel_throttle_ms(),
            boundary_tolerance: default_boundary_tolerance(),
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

impl NavigatorConfig {
    #[inline]
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    #[inline]
    pub fn wheel_throttle(&self) -> Duration {
        Duration::from_millis(self.wheel_throttle_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the page indicator dots on the right edge
    #[serde(default = "default_true")]
    pub show_indicator: bool,
    /// Show one-line peeks of the previous/next page titles
    #[serde(default = "default_true")]
    pub show_peek: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_indicator: default_true(),
            show_peek: default_true(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_cooldown_ms() -> u64 {
    600
}

fn default_wheel_throttle_ms() -> u64 {
    400
}

fn default_boundary_tolerance() -> u32 {
    2
}

fn default_swipe_threshold() -> u32 {
    3
}

fn default_tick_rate() -> u64 {
    100
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/cascade/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("cascade")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.navigator.cooldown_ms, 600);
        assert_eq!(config.navigator.wheel_throttle_ms, 400);
        assert_eq!(config.navigator.boundary_tolerance, 2);
        assert_eq!(config.navigator.swipe_threshold, 3);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_durations() {
        let config = NavigatorConfig::default();
        assert_eq!(config.cooldown(), Duration::from_millis(600));
        assert_eq!(config.wheel_throttle(), Duration::from_millis(400));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [navigator]
            cooldown_ms = 800
            "#,
        )
        .unwrap();
        assert_eq!(config.navigator.cooldown_ms, 800);
        assert_eq!(config.navigator.wheel_throttle_ms, 400);
        assert!(config.ui.show_indicator);
    }
}
