pub mod model;


use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::{CSV_QUOTE_CHAR, VERBOSITY_NORMAL, VERBOSITY_SILENT, VERBOSITY_VERBOSE};

// Re-export main types
pub use self::model::{Config, FilterConfig, InputConfig, LoggingConfig};

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let minimum = self.filter.minimum_os_version;
        if !minimum.is_finite() || minimum < 0.0 {
            anyhow::bail!("minimum_os_version must be a finite number >= 0, got {}", minimum);
        }

        let delimiter = self.input.delimiter;
        if delimiter == CSV_QUOTE_CHAR || delimiter.is_whitespace() || delimiter.is_control() {
            anyhow::bail!("delimiter cannot be a quote, whitespace or control character");
        }

        if !matches!(
            self.logging.verbosity.as_str(),
            VERBOSITY_SILENT | VERBOSITY_NORMAL | VERBOSITY_VERBOSE
        ) {
            anyhow::bail!("verbosity must be 'silent', 'normal', or 'verbose'");
        }

        Ok(())
    }
}
