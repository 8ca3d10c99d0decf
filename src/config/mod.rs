#[cfg(feature = "cli")]
pub mod args;
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::NegativeHexWidth;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use toml_config::{validate_hex_bits, FileConfig};

#[cfg(feature = "cli")]
pub use args::CliConfig;

/// Effective settings after merging the config file with command-line overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output_dir: String,
    pub negative_hex_width: NegativeHexWidth,
    pub store_path: String,
    pub monitor: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_file_config(&FileConfig::default())
    }
}

impl Settings {
    pub fn from_file_config(file: &FileConfig) -> Self {
        Self {
            output_dir: file.output.dir.clone(),
            negative_hex_width: file.convert.negative_hex_width(),
            store_path: file.store.path.clone(),
            monitor: file.monitoring_enabled(),
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_negative_hex_width(mut self, width: NegativeHexWidth) -> Self {
        self.negative_hex_width = width;
        self
    }

    pub fn with_store_path(mut self, store_path: impl Into<String>) -> Self {
        self.store_path = store_path.into();
        self
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("output_dir", &self.output_dir)?;
        validate_path("store_path", &self.store_path)?;
        if let NegativeHexWidth::Fixed { bits } = self.negative_hex_width {
            validate_hex_bits("hex_bits", bits)?;
        }
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn negative_hex_width(&self) -> NegativeHexWidth {
        self.negative_hex_width
    }

    fn store_path(&self) -> &str {
        &self.store_path
    }
}
