use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from taskdeck.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

/// UI color overrides from [ui.colors]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

/// Timer windows from [timing], in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Simulated latency before an add/update commits
    #[serde(default = "default_save_delay_ms")]
    pub save_delay_ms: u64,
    /// How long a toast stays on screen
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            save_delay_ms: default_save_delay_ms(),
            toast_ms: default_toast_ms(),
        }
    }
}

fn default_save_delay_ms() -> u64 {
    500
}

fn default_toast_ms() -> u64 {
    3000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_timings() {
        let config = AppConfig::default();
        assert_eq!(config.timing.save_delay_ms, 500);
        assert_eq!(config.timing.toast_ms, 3000);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("[timing]\nsave_delay_ms = 50\n").unwrap();
        assert_eq!(config.timing.save_delay_ms, 50);
        assert_eq!(config.timing.toast_ms, 3000);
    }
}
