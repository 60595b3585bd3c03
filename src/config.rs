use crate::error::CostModelError;
use crate::estimator::UsageParameters;
use crate::summary::SUMMARY_FILENAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `AVCOST__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "AVCOST";

pub const DEFAULT_CONFIG_FILE: &str = "avcost.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub export: ExportConfig,
    pub calculator: CalculatorConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            filename: SUMMARY_FILENAME.to_string(),
        }
    }
}

impl ExportConfig {
    /// Where an exported summary is written
    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// Initial slider positions for the calculator
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub hours: u32,
    pub users: u32,
    pub data_gb: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            hours: 50,
            users: 1,
            data_gb: 50,
        }
    }
}

impl CalculatorConfig {
    pub fn usage(&self) -> UsageParameters {
        UsageParameters::new(self.hours, self.users, self.data_gb)
    }
}

/// Load configuration from an optional TOML file layered with environment
/// variables. A missing file is not an error; every field has a default.
pub fn load_config(path: &Path) -> Result<Config, CostModelError> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<(), CostModelError> {
    match cfg.logging.level.to_ascii_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        other => return Err(invalid(format!("Invalid log level: {}", other))),
    }

    match cfg.logging.format.as_str() {
        "text" | "json" => {}
        other => {
            return Err(invalid(format!(
                "Invalid log format: {} (expected text or json)",
                other
            )))
        }
    }

    if cfg.export.filename.trim().is_empty() {
        return Err(invalid("Export filename cannot be empty".to_string()));
    }

    if cfg.export.filename.contains('/') || cfg.export.filename.contains('\\') {
        return Err(invalid(format!(
            "Export filename '{}' must not contain path separators; use export.directory",
            cfg.export.filename
        )));
    }

    Ok(())
}

fn invalid(message: String) -> CostModelError {
    CostModelError::Config(message)
}
