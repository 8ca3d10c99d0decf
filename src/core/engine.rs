use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: String,
    pub elapsed: Duration,
}

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();
        tracing::info!("Starting {}", self.pipeline.name());

        tracing::debug!("Extracting data...");
        let extracted = self.pipeline.extract().await?;
        self.monitor.log_stats("Extract");

        tracing::debug!("Transforming data...");
        let transformed = match self.pipeline.transform(extracted).await {
            Ok(transformed) => transformed,
            Err(e) => {
                // Elapsed time is reported even when the run produced nothing.
                println!("Execution time: {:.6} seconds", started.elapsed().as_secs_f64());
                self.monitor.log_final_stats();
                return Err(e);
            }
        };
        self.monitor.log_stats("Transform");

        let elapsed = started.elapsed();

        tracing::debug!("Loading results...");
        let output_path = self.pipeline.load(transformed, elapsed).await?;
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        tracing::info!("Results saved to: {}", output_path);
        Ok(RunSummary {
            output_path,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BatchError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct MockPipeline {
        values: Vec<i64>,
        loaded: AtomicBool,
    }

    impl MockPipeline {
        fn new(values: Vec<i64>) -> Self {
            Self {
                values,
                loaded: AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl Pipeline for MockPipeline {
        type Extracted = Vec<i64>;
        type Transformed = i64;

        fn name(&self) -> &str {
            "mock"
        }

        async fn extract(&self) -> Result<Vec<i64>> {
            Ok(self.values.clone())
        }

        async fn transform(&self, data: Vec<i64>) -> Result<i64> {
            if data.is_empty() {
                return Err(BatchError::NoValidInput {
                    source_kind: "numbers".to_string(),
                    path: "mock".to_string(),
                });
            }
            Ok(data.iter().sum())
        }

        async fn load(&self, result: i64, _elapsed: Duration) -> Result<String> {
            self.loaded.store(true, Ordering::SeqCst);
            Ok(format!("sum-{}", result))
        }
    }

    #[tokio::test]
    async fn test_run_goes_through_all_phases() {
        let engine = BatchEngine::new(MockPipeline::new(vec![1, 2, 3]));
        let summary = engine.run().await.unwrap();
        assert_eq!(summary.output_path, "sum-6");
        assert!(engine.pipeline.loaded.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_transform_failure_skips_load() {
        let engine = BatchEngine::new(MockPipeline::new(vec![]));
        let result = engine.run().await;
        assert!(matches!(result, Err(BatchError::NoValidInput { .. })));
        assert!(!engine.pipeline.loaded.load(Ordering::SeqCst));
    }
}
