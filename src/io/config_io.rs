use std::fs;
use std::path::{Path, PathBuf};

use crate::model::AppConfig;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "taskdeck.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load the app config. With an explicit `path`, the file must exist and
/// parse. Without one, a missing `taskdeck.toml` silently yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(CONFIG_FILE), false),
    };

    if !required && !path.exists() {
        return Ok(AppConfig::default());
    }

    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read { path, source: e })?;
    let config: AppConfig = toml::from_str(&text)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_missing_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        assert!(matches!(
            load_config(Some(&missing)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("taskdeck.toml");
        fs::write(&path, "timing = \"fast\"").unwrap();
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn reads_timing_and_colors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("taskdeck.toml");
        fs::write(
            &path,
            r##"
[timing]
save_delay_ms = 250

[ui.colors]
highlight = "#FB4196"
"##,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.timing.save_delay_ms, 250);
        assert_eq!(config.timing.toast_ms, 3000);
        assert_eq!(
            config.ui.colors.get("highlight").map(String::as_str),
            Some("#FB4196")
        );
    }
}
