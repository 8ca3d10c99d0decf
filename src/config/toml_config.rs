use crate::domain::model::{NegativeHexWidth, DEFAULT_NEGATIVE_HEX_BITS};
use crate::utils::error::{BatchError, Result};
use crate::utils::validation::{validate_multiple_of, validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_DIR: &str = "./results";
pub const DEFAULT_STORE_PATH: &str = "reservations.json";

/// Optional settings file; every section may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub store: StoreConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HexWidthMode {
    #[default]
    Fixed,
    ByteAligned,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    #[serde(default)]
    pub negative_hex_width: HexWidthMode,
    #[serde(default = "default_hex_bits")]
    pub hex_bits: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_hex_bits() -> u32 {
    DEFAULT_NEGATIVE_HEX_BITS
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            negative_hex_width: HexWidthMode::default(),
            hex_bits: default_hex_bits(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl ConvertConfig {
    pub fn negative_hex_width(&self) -> NegativeHexWidth {
        hex_width(self.negative_hex_width, self.hex_bits)
    }
}

pub fn hex_width(mode: HexWidthMode, bits: u32) -> NegativeHexWidth {
    match mode {
        HexWidthMode::Fixed => NegativeHexWidth::Fixed { bits },
        HexWidthMode::ByteAligned => NegativeHexWidth::ByteAligned,
    }
}

pub fn validate_hex_bits(field_name: &str, bits: u32) -> Result<()> {
    validate_range(field_name, bits, 4, 128)?;
    validate_multiple_of(field_name, bits, 4)
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| BatchError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().is_some_and(|m| m.enabled)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output.dir", &self.output.dir)?;
        validate_path("store.path", &self.store.path)?;
        if self.convert.negative_hex_width == HexWidthMode::Fixed {
            validate_hex_bits("convert.hex_bits", self.convert.hex_bits)?;
        }
        Ok(())
    }
}
