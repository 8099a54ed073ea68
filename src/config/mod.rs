use serde::Deserialize;
use std::path::{Path, PathBuf};
use ::config::{Config, ConfigError, Environment, File};

/// Configuration for application logging
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Directory for daily log files; logs go to stderr when unset
    pub directory: Option<PathBuf>,
}

/// Output format for command results
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

/// Configuration for command output
#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Main settings struct that contains all configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Logging-related settings
    pub logging: LoggingConfig,
    /// Output-related settings
    pub output: OutputConfig,
}

impl Settings {
    /// Loads settings from `config_dir`, in the following order of precedence
    /// (highest to lowest):
    /// 1. Environment variables prefixed with CATPRINT_
    /// 2. Local config file (local.toml) if present
    /// 3. Default config file (default.toml) if present
    /// 4. Built-in defaults
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        Self::load_with(config_dir, Some(Self::environment()))
    }

    /// The CATPRINT_ environment layer, e.g. `CATPRINT_OUTPUT_FORMAT=json`.
    pub fn environment() -> Environment {
        Environment::with_prefix("CATPRINT").separator("_")
    }

    /// Like [`Settings::load`], with an explicit environment layer.
    /// `None` skips environment overrides entirely.
    pub fn load_with(config_dir: &Path, environment: Option<Environment>) -> Result<Self, ConfigError> {
        let default_config = config_dir.join("default.toml");
        let local_config = config_dir.join("local.toml");

        let mut builder = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("output.format", "table")?
            .add_source(File::from(default_config).required(false))
            .add_source(File::from(local_config).required(false));

        if let Some(environment) = environment {
            builder = builder.add_source(environment);
        }

        let settings = builder.build()?.try_deserialize::<Settings>()?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            _ => Err(ConfigError::Message(
                format!("Invalid logging level: {}. Must be one of: error, warn, info, debug, trace",
                    self.logging.level)
            )),
        }?;

        // Create log directory if configured and doesn't exist
        if let Some(log_dir) = &self.logging.directory {
            if !log_dir.exists() {
                std::fs::create_dir_all(log_dir).map_err(|e| {
                    ConfigError::Message(format!(
                        "Failed to create log directory at {}: {}",
                        log_dir.display(), e
                    ))
                })?;
            }
        }

        Ok(())
    }
}
