//! # Configuration Management for protowrap
//!
//! This crate provides the configuration structures that tune how
//! timestamps collapse into absence during conversion.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{ConversionConfig, TimestampConfig, ZeroInstant};
//!
//! let config = ConversionConfig::new(TimestampConfig::new(true, ZeroInstant::CommonEra));
//! assert_eq!(config.timestamp.zero_instant.seconds(), -62_135_596_800);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [timestamp]
//! collapse_zero_instant = true
//! zero_instant = "unix_epoch"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::ConversionConfig;
//!
//! // Load from PROTOWRAP_CONFIG or ./protowrap.toml, defaults otherwise
//! let config = ConversionConfig::load()?;
//!
//! // Or load from custom path
//! let config = ConversionConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./protowrap.toml";
const CONFIG_PATH_ENV: &str = "PROTOWRAP_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete conversion configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
    pub timestamp: TimestampConfig,
}

/// Timestamp conversion configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimestampConfig {
    /// Treat the zero instant as "not set" in both directions
    pub collapse_zero_instant: bool,

    /// Which instant counts as zero
    pub zero_instant: ZeroInstant,
}

/// The instant that stands for an unset timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroInstant {
    /// 1970-01-01T00:00:00Z
    #[default]
    UnixEpoch,
    /// 0001-01-01T00:00:00Z
    CommonEra,
}

impl ZeroInstant {
    /// Seconds of this instant relative to the Unix epoch; nanos are always zero
    pub const fn seconds(self) -> i64 {
        match self {
            ZeroInstant::UnixEpoch => 0,
            ZeroInstant::CommonEra => -62_135_596_800,
        }
    }
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            collapse_zero_instant: true,
            zero_instant: ZeroInstant::UnixEpoch,
        }
    }
}

impl TimestampConfig {
    /// Create a new timestamp configuration
    pub const fn new(collapse_zero_instant: bool, zero_instant: ZeroInstant) -> Self {
        Self {
            collapse_zero_instant,
            zero_instant,
        }
    }

    /// Whether `seconds`/`nanos` must collapse to absence
    pub const fn is_zero(&self, seconds: i64, nanos: i32) -> bool {
        self.collapse_zero_instant && seconds == self.zero_instant.seconds() && nanos == 0
    }
}

impl ConversionConfig {
    /// Create a new conversion configuration
    pub const fn new(timestamp: TimestampConfig) -> Self {
        Self { timestamp }
    }

    /// Load configuration from the TOML file named in the environment (or `.env`),
    /// then `./protowrap.toml`, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        let config_path = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Some(path),
            Err(env::VarError::NotPresent) => None,
            Err(e) => return Err(e.into()),
        };

        Self::resolve(config_path.as_deref(), Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Pick the config source: an explicit path must exist, otherwise
    /// `default_path` is read when present, otherwise defaults apply
    fn resolve(config_path: Option<&str>, default_path: &Path) -> Result<Self, ConfigError> {
        match config_path {
            Some(config_path) => {
                if !Path::new(config_path).exists() {
                    return Err(ConfigError::Invalid(format!(
                        "{} points to missing file {}",
                        CONFIG_PATH_ENV, config_path
                    )));
                }
                #[cfg(feature = "debug-logging")]
                tracing::debug!(path = %config_path, "loading conversion config from environment");
                Self::from_file(config_path)
            }
            None if default_path.exists() => {
                #[cfg(feature = "debug-logging")]
                tracing::debug!(path = %default_path.display(), "loading conversion config");
                Self::from_file(default_path)
            }
            None => {
                #[cfg(feature = "debug-logging")]
                tracing::debug!("no conversion config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[test]
    fn test_defaults() {
        let config = ConversionConfig::default();
        assert!(config.timestamp.collapse_zero_instant);
        assert_eq!(config.timestamp.zero_instant, ZeroInstant::UnixEpoch);
        assert!(config.timestamp.is_zero(0, 0));
        assert!(!config.timestamp.is_zero(0, 1));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ConversionConfig::from_toml_str("").unwrap();
        assert_eq!(config, ConversionConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = ConversionConfig::from_toml_str(
            r#"
            [timestamp]
            zero_instant = "common_era"
            "#,
        )
        .unwrap();
        assert!(config.timestamp.collapse_zero_instant);
        assert_eq!(config.timestamp.zero_instant, ZeroInstant::CommonEra);
        assert!(config.timestamp.is_zero(-62_135_596_800, 0));
        assert!(!config.timestamp.is_zero(0, 0));
    }

    #[test]
    fn test_collapse_disabled() {
        let config = ConversionConfig::from_toml_str(
            r#"
            [timestamp]
            collapse_zero_instant = false
            "#,
        )
        .unwrap();
        assert!(!config.timestamp.is_zero(0, 0));
    }

    #[test]
    fn test_rejects_unknown_values() {
        let err = ConversionConfig::from_toml_str(
            r#"
            [timestamp]
            zero_instant = "year_zero"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));

        let err = ConversionConfig::from_toml_str("[timestamps]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_file() {
        let path = env::temp_dir().join(format!("protowrap-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[timestamp]\ncollapse_zero_instant = false\n").unwrap();

        let config = ConversionConfig::from_file(&path).unwrap();
        assert!(!config.timestamp.collapse_zero_instant);

        std::fs::remove_file(&path).unwrap();
    }

    // Tests touching PROTOWRAP_CONFIG share the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("protowrap-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_missing_env_path() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var(CONFIG_PATH_ENV, "/nonexistent/protowrap.toml");

        let result = ConversionConfig::load();
        env::remove_var(CONFIG_PATH_ENV);

        match result {
            Err(ConfigError::Invalid(msg)) => {
                assert!(msg.contains("/nonexistent/protowrap.toml"));
            }
            other => panic!("expected Invalid error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_env_path() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = temp_config("env", "[timestamp]\nzero_instant = \"common_era\"\n");
        env::set_var(CONFIG_PATH_ENV, &path);

        let result = ConversionConfig::load();
        env::remove_var(CONFIG_PATH_ENV);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(result.unwrap().timestamp.zero_instant, ZeroInstant::CommonEra);
    }

    #[test]
    fn test_load_unset_env_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::remove_var(CONFIG_PATH_ENV);

        // No .env and no ./protowrap.toml in the crate directory
        let config = ConversionConfig::load().unwrap();
        assert_eq!(config, ConversionConfig::default());
    }

    #[test]
    fn test_resolve_default_path() {
        let path = temp_config("default", "[timestamp]\ncollapse_zero_instant = false\n");

        let config = ConversionConfig::resolve(None, &path);
        std::fs::remove_file(&path).unwrap();

        assert!(!config.unwrap().timestamp.collapse_zero_instant);
    }

    #[test]
    fn test_resolve_nothing_found() {
        let missing = env::temp_dir().join("protowrap-absent-default.toml");
        let config = ConversionConfig::resolve(None, &missing).unwrap();
        assert_eq!(config, ConversionConfig::default());
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let explicit = temp_config("explicit", "[timestamp]\nzero_instant = \"common_era\"\n");
        let default = temp_config("fallback", "[timestamp]\ncollapse_zero_instant = false\n");

        let config = ConversionConfig::resolve(explicit.to_str(), &default);
        std::fs::remove_file(&explicit).unwrap();
        std::fs::remove_file(&default).unwrap();

        let config = config.unwrap();
        assert_eq!(config.timestamp.zero_instant, ZeroInstant::CommonEra);
        assert!(config.timestamp.collapse_zero_instant);
    }

    #[test]
    fn test_from_missing_file() {
        let err = ConversionConfig::from_file("/nonexistent/protowrap.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
