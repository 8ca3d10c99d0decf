pub mod convert_pipeline;
pub mod report;
pub mod sales_pipeline;
pub mod statistics_pipeline;
pub mod word_count_pipeline;

pub use convert_pipeline::ConvertPipeline;
pub use sales_pipeline::SalesPipeline;
pub use statistics_pipeline::StatisticsPipeline;
pub use word_count_pipeline::WordCountPipeline;
