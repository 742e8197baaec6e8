use std::path::Path;

use crate::error::ConfigError;
use crate::game::COLS;

/// Presentation-layer options. Board dimensions are fixed constants and
/// intentionally absent here.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Column the selector starts on after launch and reset.
    pub starting_column: usize,
    /// Draw pieces as plain ASCII instead of unicode discs.
    pub ascii_pieces: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tick_rate_ms: 100,
            starting_column: 3, // middle of the board
            ascii_pieces: false,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be > 0".into(),
            ));
        }
        if self.ui.starting_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.starting_column must be < {COLS}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[ui]
tick_rate_ms = 50
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 50);
        // Other fields should be defaults
        assert_eq!(config.ui.starting_column, 3);
        assert!(!config.ui.ascii_pieces);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.starting_column, 3);
    }

    #[test]
    fn test_validation_rejects_zero_tick_rate() {
        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_starting_column_off_board() {
        let mut config = AppConfig::default();
        config.ui.starting_column = COLS;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ui]
starting_column = 0
ascii_pieces = true
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ui.starting_column, 0);
        assert!(config.ui.ascii_pieces);
        // Others are defaults
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[ui]\nstarting_column = 7\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
