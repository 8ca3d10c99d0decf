use crate::domain::model::{SaleLine, SalesReport};
use serde_json::Value;
use std::collections::HashMap;

pub type PriceCatalogue = HashMap<String, f64>;

/// Maps each catalogue entry's `title` to its `price`.
/// Entries without a usable title or price are logged and skipped.
pub fn build_price_catalogue(items: &[Value]) -> PriceCatalogue {
    let mut prices = PriceCatalogue::new();

    for item in items {
        let title = item.get("title").and_then(Value::as_str).filter(|t| !t.is_empty());
        let price = item.get("price");

        match (title, price) {
            (Some(title), Some(price)) if !price.is_null() => match parse_price(price) {
                Some(value) => {
                    prices.insert(title.to_string(), value);
                }
                None => tracing::warn!("Invalid price in catalogue item: {}", item),
            },
            _ => tracing::debug!("Catalogue item without title or price skipped: {}", item),
        }
    }

    prices
}

pub fn compute_sales(catalogue: &PriceCatalogue, sales: &[Value]) -> SalesReport {
    let mut report = SalesReport::default();

    for sale in sales {
        let (product, quantity) = match (sale.get("Product"), sale.get("Quantity")) {
            (Some(product), Some(quantity)) if !product.is_null() && !quantity.is_null() => {
                (product, quantity)
            }
            _ => {
                tracing::warn!("Sale with missing values skipped: {}", sale);
                report.skipped += 1;
                continue;
            }
        };

        let Some(quantity) = parse_quantity(quantity) else {
            tracing::warn!("Sale with invalid quantity skipped: {}", sale);
            report.skipped += 1;
            continue;
        };

        let Some(product) = product.as_str() else {
            tracing::warn!("Sale with invalid product skipped: {}", sale);
            report.skipped += 1;
            continue;
        };

        let Some(&unit_price) = catalogue.get(product) else {
            tracing::warn!("Product not found in catalogue: '{}'", product);
            report.skipped += 1;
            continue;
        };

        let subtotal = unit_price * quantity as f64;
        report.total += subtotal;
        report.lines.push(SaleLine {
            product: product.to_string(),
            quantity,
            unit_price,
            subtotal,
        });
    }

    report
}

fn parse_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Integers, floats (truncated toward zero) and integer strings.
fn parse_quantity(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
