use crate::filter::SizeFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_small() -> i64 {
    SizeFilter::SMALL.threshold()
}

fn default_large() -> i64 {
    SizeFilter::LARGE.threshold()
}

/// Size thresholds for the two reports. An order is reported when its size is
/// strictly greater than the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_small")]
    pub small: i64,
    #[serde(default = "default_large")]
    pub large: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            small: default_small(),
            large: default_large(),
        }
    }
}

/// Settings for the report runner.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReportConfig {
    /// JSON file holding the orders to report on.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// CSV file to write; orders are logged when unset.
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl ReportConfig {
    /// Loads settings from an optional file, then `ORDERS_*` environment
    /// variables (nested keys use `__`, e.g. `ORDERS_THRESHOLDS__SMALL`).
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix("ORDERS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }
}
