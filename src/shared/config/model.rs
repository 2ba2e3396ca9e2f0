use std::env;

use serde::{Deserialize, Serialize};

use crate::engine::aggregate::SortOrder;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub grouping: GroupingConfig,
    pub loader: LoaderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            stdout_level: "warn".to_string(),
            file_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Cap on distinct buckets per run; unset means unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_groups: Option<usize>,
    /// Direction used for `--group-by field` when no `:asc|:desc` suffix is given.
    pub default_sort_order: SortOrder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub sample_rows: usize,
    pub sample_seed: u64,
    /// Forces the delimiter for text input instead of sniffing it from the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            sample_rows: 200,
            sample_seed: 7,
            delimiter: None,
        }
    }
}

impl LoaderConfig {
    /// The delimiter override as a byte, if it is a single-byte character.
    pub fn delimiter_byte(&self) -> Option<u8> {
        self.delimiter
            .filter(char::is_ascii)
            .map(|c| c as u8)
    }
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("REPORT_WIZARD_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(config::Environment::with_prefix("REPORT_WIZARD").separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
