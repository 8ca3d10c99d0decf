use crate::app::pipelines::report::{publish, ReportBuilder};
use crate::core::input::decode_text;
use crate::core::word_count::WordCounter;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::WordFrequency;
use crate::utils::error::{BatchError, Result};
use std::time::Duration;

pub const WORD_COUNT_RESULTS_FILE: &str = "WordCountResults.txt";

#[derive(Debug, Clone)]
pub struct WordCountReport {
    pub frequencies: Vec<WordFrequency>,
    pub total_words: usize,
}

pub struct WordCountPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    input: String,
}

impl<S: Storage, C: ConfigProvider> WordCountPipeline<S, C> {
    pub fn new(storage: S, config: C, input: impl Into<String>) -> Self {
        Self {
            storage,
            config,
            input: input.into(),
        }
    }
}

pub fn render_word_count_report(report: &WordCountReport, elapsed: Duration) -> String {
    let mut builder = ReportBuilder::new("WORD FREQUENCY RESULTS");
    builder
        .blank()
        .line(format!("Total words: {}", report.total_words))
        .line(format!("Distinct words: {}", report.frequencies.len()))
        .elapsed(elapsed, 6)
        .blank()
        .line(format!("{:<30} {:>10}", "Palabra", "Frecuencia"))
        .rule();

    for frequency in &report.frequencies {
        builder.line(format!("{:<30} {:>10}", frequency.word, frequency.count));
    }

    builder.rule().double_rule();
    builder.build()
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for WordCountPipeline<S, C> {
    type Extracted = String;
    type Transformed = WordCountReport;

    fn name(&self) -> &str {
        "word count"
    }

    async fn extract(&self) -> Result<String> {
        tracing::info!("Reading text from '{}'", self.input);
        let bytes = self.storage.read_file(&self.input).await?;
        Ok(decode_text(&bytes))
    }

    async fn transform(&self, text: String) -> Result<WordCountReport> {
        let mut counter = WordCounter::new();
        for line in text.lines() {
            counter.add_line(line);
        }

        if counter.distinct_words() == 0 {
            return Err(BatchError::NoValidInput {
                source_kind: "words".to_string(),
                path: self.input.clone(),
            });
        }

        let total_words = counter.total_words();
        tracing::info!("Found {} distinct words", counter.distinct_words());
        Ok(WordCountReport {
            frequencies: counter.into_sorted(),
            total_words,
        })
    }

    async fn load(&self, result: WordCountReport, elapsed: Duration) -> Result<String> {
        let report = render_word_count_report(&result, elapsed);
        publish(&self.storage, &self.config, WORD_COUNT_RESULTS_FILE, &report).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::core::engine::BatchEngine;
    use crate::testing::MockStorage;

    #[tokio::test]
    async fn test_word_count_report() {
        let storage = MockStorage::new();
        storage
            .put("text.txt", "The cat, the DOG.\n\tthe end — fin\n".as_bytes())
            .await;

        let pipeline =
            WordCountPipeline::new(storage.clone(), Settings::default().with_output_dir("out"), "text.txt");
        BatchEngine::new(pipeline).run().await.unwrap();

        let text = String::from_utf8(storage.get_file("out/WordCountResults.txt").await.unwrap()).unwrap();
        assert!(text.contains("Total words: 7"));
        assert!(text.contains("Distinct words: 5"));

        let the_row = format!("{:<30} {:>10}", "the", 3);
        let cat_row = format!("{:<30} {:>10}", "cat", 1);
        let the_at = text.find(&the_row).unwrap();
        let cat_at = text.find(&cat_row).unwrap();
        assert!(the_at < cat_at);
    }

    #[tokio::test]
    async fn test_punctuation_only_file_fails() {
        let storage = MockStorage::new();
        storage.put("text.txt", b"... !!! ---\n").await;
        let pipeline = WordCountPipeline::new(storage, Settings::default(), "text.txt");
        assert!(matches!(
            BatchEngine::new(pipeline).run().await,
            Err(BatchError::NoValidInput { .. })
        ));
    }
}
