use serde::{Deserialize, Serialize};

use crate::constants::{CSV_FIELD_SEPARATOR, DEFAULT_MINIMUM_OS_VERSION, VERBOSITY_NORMAL};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub filter: FilterConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub delimiter: char,
}

/// Controls which routers survive the eligibility stage.
///
/// `header_row` keeps the first loaded row out of every comparison, filter
/// and rendered line, which is how inventory exports carry their column
/// titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub minimum_os_version: f64,
    pub header_row: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbosity: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: CSV_FIELD_SEPARATOR,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            minimum_os_version: DEFAULT_MINIMUM_OS_VERSION,
            header_row: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbosity: VERBOSITY_NORMAL.to_string(),
        }
    }
}
