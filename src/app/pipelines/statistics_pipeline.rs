use crate::app::pipelines::report::{publish, ReportBuilder};
use crate::core::input::{decode_text, parse_lines};
use crate::core::statistics::summarize;
use crate::core::{ConfigProvider, ParsedLines, Pipeline, Storage};
use crate::domain::model::StatisticsSummary;
use crate::utils::error::{BatchError, Result};
use std::time::Duration;

pub const STATISTICS_RESULTS_FILE: &str = "StatisticsResults.txt";

pub struct StatisticsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    input: String,
}

impl<S: Storage, C: ConfigProvider> StatisticsPipeline<S, C> {
    pub fn new(storage: S, config: C, input: impl Into<String>) -> Self {
        Self {
            storage,
            config,
            input: input.into(),
        }
    }
}

pub fn render_statistics_report(summary: &StatisticsSummary, elapsed: Duration) -> String {
    let mode = summary
        .mode
        .map(|m| format!("{:.6}", m))
        .unwrap_or_else(|| "N/A".to_string());

    let mut builder = ReportBuilder::new("STATISTICS RESULTS");
    builder
        .blank()
        .line(format!("Count:              {}", summary.count))
        .line(format!("Mean:               {:.6}", summary.mean))
        .line(format!("Median:             {:.6}", summary.median))
        .line(format!("Mode:               {}", mode))
        .line(format!("Variance:           {:.6}", summary.variance))
        .line(format!("Standard deviation: {:.6}", summary.std_dev))
        .blank()
        .elapsed(elapsed, 6)
        .double_rule();
    builder.build()
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for StatisticsPipeline<S, C> {
    type Extracted = ParsedLines<f64>;
    type Transformed = StatisticsSummary;

    fn name(&self) -> &str {
        "descriptive statistics"
    }

    async fn extract(&self) -> Result<ParsedLines<f64>> {
        tracing::info!("Reading data from '{}'", self.input);
        let bytes = self.storage.read_file(&self.input).await?;
        Ok(parse_lines(&decode_text(&bytes)))
    }

    async fn transform(&self, data: ParsedLines<f64>) -> Result<StatisticsSummary> {
        if data.values.is_empty() {
            return Err(BatchError::NoValidInput {
                source_kind: "numbers".to_string(),
                path: self.input.clone(),
            });
        }

        tracing::info!("Loaded {} valid numbers", data.values.len());
        Ok(summarize(&data.values))
    }

    async fn load(&self, result: StatisticsSummary, elapsed: Duration) -> Result<String> {
        let report = render_statistics_report(&result, elapsed);
        publish(&self.storage, &self.config, STATISTICS_RESULTS_FILE, &report).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::core::engine::BatchEngine;
    use crate::testing::MockStorage;

    #[tokio::test]
    async fn test_statistics_report() {
        let storage = MockStorage::new();
        storage
            .put("data.txt", b"2\n4\n4\n4\nbad\n5\n5\n7\n9\n")
            .await;

        let config = Settings::default().with_output_dir("res/");
        let pipeline = StatisticsPipeline::new(storage.clone(), config, "data.txt");
        let summary = BatchEngine::new(pipeline).run().await.unwrap();
        assert_eq!(summary.output_path, "res/StatisticsResults.txt");

        let text =
            String::from_utf8(storage.get_file("res/StatisticsResults.txt").await.unwrap()).unwrap();
        assert!(text.contains("Count:              8"));
        assert!(text.contains("Mean:               5.000000"));
        assert!(text.contains("Median:             4.500000"));
        assert!(text.contains("Mode:               4.000000"));
        assert!(text.contains("Variance:           4.571429"));
        assert!(text.contains("Standard deviation: 2.000000"));
    }

    #[tokio::test]
    async fn test_empty_file_fails() {
        let storage = MockStorage::new();
        storage.put("data.txt", b"\n\n").await;
        let pipeline = StatisticsPipeline::new(storage, Settings::default(), "data.txt");
        assert!(matches!(
            BatchEngine::new(pipeline).run().await,
            Err(BatchError::NoValidInput { .. })
        ));
    }

    #[test]
    fn test_fractional_mode_keeps_decimals() {
        let summary = summarize(&[2.5, 1.0, 2.5]);
        let text = render_statistics_report(&summary, Duration::ZERO);
        assert!(text.contains("Mode:               2.500000"));
    }

    #[test]
    fn test_mode_without_repeats_renders_na() {
        let summary = summarize(&[1.0, 2.0]);
        let text = render_statistics_report(&summary, Duration::ZERO);
        assert!(text.contains("Mode:               N/A"));
    }
}
