use crate::app::pipelines::report::{publish, ReportBuilder};
use crate::core::sales::{build_price_catalogue, compute_sales};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::SalesReport;
use crate::utils::error::{BatchError, Result};
use serde_json::Value;
use std::time::Duration;

pub const SALES_RESULTS_FILE: &str = "SalesResults.txt";

#[derive(Debug, Clone)]
pub struct SalesInput {
    pub catalogue: Vec<Value>,
    pub sales: Vec<Value>,
}

pub struct SalesPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    catalogue_path: String,
    sales_path: String,
}

impl<S: Storage, C: ConfigProvider> SalesPipeline<S, C> {
    pub fn new(
        storage: S,
        config: C,
        catalogue_path: impl Into<String>,
        sales_path: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            config,
            catalogue_path: catalogue_path.into(),
            sales_path: sales_path.into(),
        }
    }

    async fn read_json_array(&self, path: &str) -> Result<Vec<Value>> {
        let bytes = self.storage.read_file(path).await?;
        match serde_json::from_slice::<Value>(&bytes)? {
            Value::Array(items) => Ok(items),
            _ => Err(BatchError::InvalidInput {
                message: format!("{} must contain a JSON array", path),
            }),
        }
    }
}

pub fn render_sales_report(report: &SalesReport, elapsed: Duration) -> String {
    let mut builder = ReportBuilder::new("TOTAL SALES COST");
    builder.elapsed(elapsed, 4).double_rule().blank();

    for line in &report.lines {
        builder.line(format!(
            "{:<30} {:>5}     x     ${:>10.2}     =     ${:>12.2}",
            line.product, line.quantity, line.unit_price, line.subtotal
        ));
    }

    builder
        .blank()
        .double_rule()
        .line(format!("TOTAL: ${:.2}", report.total))
        .rule()
        .elapsed(elapsed, 4)
        .double_rule();
    builder.build()
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SalesPipeline<S, C> {
    type Extracted = SalesInput;
    type Transformed = SalesReport;

    fn name(&self) -> &str {
        "sales total"
    }

    async fn extract(&self) -> Result<SalesInput> {
        tracing::info!("Loading price catalogue from '{}'", self.catalogue_path);
        let catalogue = self.read_json_array(&self.catalogue_path).await?;

        tracing::info!("Loading sales from '{}'", self.sales_path);
        let sales = self.read_json_array(&self.sales_path).await?;

        Ok(SalesInput { catalogue, sales })
    }

    async fn transform(&self, input: SalesInput) -> Result<SalesReport> {
        let prices = build_price_catalogue(&input.catalogue);
        tracing::debug!("Catalogue holds {} priced products", prices.len());

        let report = compute_sales(&prices, &input.sales);
        tracing::info!(
            "Priced {} sales ({} skipped), total {:.2}",
            report.lines.len(),
            report.skipped,
            report.total
        );
        Ok(report)
    }

    async fn load(&self, result: SalesReport, elapsed: Duration) -> Result<String> {
        let report = render_sales_report(&result, elapsed);
        publish(&self.storage, &self.config, SALES_RESULTS_FILE, &report).await
    }
}
