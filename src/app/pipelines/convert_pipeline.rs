use crate::app::pipelines::report::{publish, ReportBuilder};
use crate::core::convert::BaseConverter;
use crate::core::input::{decode_text, parse_lines};
use crate::core::{ConfigProvider, ParsedLines, Pipeline, Storage};
use crate::domain::model::ConversionReport;
use crate::utils::error::{BatchError, Result};
use std::time::Duration;

pub const CONVERSION_RESULTS_FILE: &str = "ConversionResults.txt";

pub struct ConvertPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    input: String,
}

impl<S: Storage, C: ConfigProvider> ConvertPipeline<S, C> {
    pub fn new(storage: S, config: C, input: impl Into<String>) -> Self {
        Self {
            storage,
            config,
            input: input.into(),
        }
    }
}

pub fn render_conversion_report(report: &ConversionReport, elapsed: Duration) -> String {
    let mut builder = ReportBuilder::new("CONVERSION RESULTS");
    builder
        .blank()
        .line(format!("Numbers processed: {}", report.results.len()))
        .line(format!("Errors found: {}", report.invalid_count))
        .rule()
        .blank()
        .line(format!(
            "{:<15} {:<25} {:<15}",
            "Decimal", "Binario", "Hexadecimal"
        ))
        .rule();

    for result in &report.results {
        builder.line(format!(
            "{:<15} {:<25} {:<15}",
            result.decimal, result.binary, result.hexadecimal
        ));
    }

    builder.rule().elapsed(elapsed, 6).double_rule();
    builder.build()
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ConvertPipeline<S, C> {
    type Extracted = ParsedLines<i64>;
    type Transformed = ConversionReport;

    fn name(&self) -> &str {
        "number conversion"
    }

    async fn extract(&self) -> Result<ParsedLines<i64>> {
        tracing::info!("Reading numbers from '{}'", self.input);
        let bytes = self.storage.read_file(&self.input).await?;
        Ok(parse_lines(&decode_text(&bytes)))
    }

    async fn transform(&self, data: ParsedLines<i64>) -> Result<ConversionReport> {
        if data.values.is_empty() {
            return Err(BatchError::NoValidInput {
                source_kind: "numbers".to_string(),
                path: self.input.clone(),
            });
        }

        let converter = BaseConverter::new(self.config.negative_hex_width());
        tracing::debug!(
            "Converting {} numbers (negative hex width: {:?})",
            data.values.len(),
            converter.negative_hex_width()
        );

        let results = data.values.iter().map(|&n| converter.convert(n)).collect();
        tracing::info!("Processed {} valid numbers", data.values.len());

        Ok(ConversionReport {
            results,
            invalid_count: data.invalid_count,
        })
    }

    async fn load(&self, result: ConversionReport, elapsed: Duration) -> Result<String> {
        let report = render_conversion_report(&result, elapsed);
        publish(&self.storage, &self.config, CONVERSION_RESULTS_FILE, &report).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::core::engine::BatchEngine;
    use crate::domain::model::NegativeHexWidth;
    use crate::testing::MockStorage;

    fn settings() -> Settings {
        Settings::default().with_output_dir("out")
    }

    #[tokio::test]
    async fn test_conversion_report_written_in_input_order() {
        let storage = MockStorage::new();
        storage.put("numbers.txt", b"5\n\n-1\nabc\n255\n0\n").await;

        let pipeline = ConvertPipeline::new(storage.clone(), settings(), "numbers.txt");
        let summary = BatchEngine::new(pipeline).run().await.unwrap();
        assert_eq!(summary.output_path, "out/ConversionResults.txt");

        let written = storage.get_file("out/ConversionResults.txt").await.unwrap();
        let text = String::from_utf8(written).unwrap();
        assert!(text.contains("Numbers processed: 4"));
        assert!(text.contains("Errors found: 1"));

        let rows: Vec<Vec<&str>> = text
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .filter(|cols| cols.len() == 3 && cols[0].parse::<i64>().is_ok())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec!["5", "101", "5"],
                vec!["-1", "11111111", "FFFFFFFFFF"],
                vec!["255", "11111111", "FF"],
                vec!["0", "0", "0"],
            ]
        );
    }

    #[tokio::test]
    async fn test_no_valid_numbers_is_an_error() {
        let storage = MockStorage::new();
        storage.put("numbers.txt", b"abc\n\nxyz\n").await;

        let pipeline = ConvertPipeline::new(storage.clone(), settings(), "numbers.txt");
        let result = BatchEngine::new(pipeline).run().await;

        assert!(matches!(result, Err(BatchError::NoValidInput { .. })));
        assert!(storage.get_file("out/ConversionResults.txt").await.is_none());
    }

    #[tokio::test]
    async fn test_missing_input_file() {
        let pipeline = ConvertPipeline::new(MockStorage::new(), settings(), "missing.txt");
        let result = BatchEngine::new(pipeline).run().await;
        assert!(matches!(result, Err(BatchError::IoError(_))));
    }

    #[tokio::test]
    async fn test_byte_aligned_hex_setting() {
        let storage = MockStorage::new();
        let config = settings().with_negative_hex_width(NegativeHexWidth::ByteAligned);
        let pipeline = ConvertPipeline::new(storage, config, "numbers.txt");

        let report = pipeline
            .transform(ParsedLines {
                values: vec![-5],
                invalid_count: 0,
            })
            .await
            .unwrap();
        assert_eq!(report.results[0].hexadecimal, "FB");
    }

    #[test]
    fn test_table_header_alignment() {
        let report = ConversionReport {
            results: vec![],
            invalid_count: 0,
        };
        let text = render_conversion_report(&report, Duration::ZERO);
        assert!(text.contains(&format!("{:<15} {:<25} {:<15}", "Decimal", "Binario", "Hexadecimal")));
        assert!(text.contains("Execution time: 0.000000 seconds"));
    }
}
