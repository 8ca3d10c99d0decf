pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod store;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::{ConvertPipeline, SalesPipeline, StatisticsPipeline, WordCountPipeline};
pub use config::{cli::LocalStorage, Settings};
pub use core::convert::{convert_to_binary, convert_to_hexadecimal, BaseConverter};
pub use core::engine::{BatchEngine, RunSummary};
pub use domain::model::{ConversionResult, NegativeHexWidth};
pub use store::JsonStore;
pub use utils::error::{BatchError, Result};
