pub mod convert;
pub mod engine;
pub mod input;
pub mod sales;
pub mod statistics;
pub mod word_count;

pub use crate::domain::model::{ConversionResult, NegativeHexWidth, ParsedLines};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
