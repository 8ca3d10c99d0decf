use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::time::Duration;

/// Width of the `=` and `-` rules framing every report.
pub const RULE_WIDTH: usize = 25;

#[derive(Debug, Default)]
pub struct ReportBuilder {
    lines: Vec<String>,
}

impl ReportBuilder {
    pub fn new(title: &str) -> Self {
        let mut report = Self::default();
        report.double_rule().line(title).double_rule();
        report
    }

    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(text.into());
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    pub fn rule(&mut self) -> &mut Self {
        self.line("-".repeat(RULE_WIDTH))
    }

    pub fn double_rule(&mut self) -> &mut Self {
        self.line("=".repeat(RULE_WIDTH))
    }

    pub fn elapsed(&mut self, elapsed: Duration, precision: usize) -> &mut Self {
        self.line(format!(
            "Execution time: {:.*} seconds",
            precision,
            elapsed.as_secs_f64()
        ))
    }

    pub fn build(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

pub fn output_file<C: ConfigProvider>(config: &C, file_name: &str) -> String {
    format!("{}/{}", config.output_dir().trim_end_matches('/'), file_name)
}

/// Prints the report and writes it under the configured output directory.
pub async fn publish<S: Storage, C: ConfigProvider>(
    storage: &S,
    config: &C,
    file_name: &str,
    report: &str,
) -> Result<String> {
    println!("{}", report);

    let path = output_file(config, file_name);
    storage.write_file(&path, report.as_bytes()).await?;
    tracing::debug!("Report written to {} ({} bytes)", path, report.len());
    Ok(path)
}
