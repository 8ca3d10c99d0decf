use crate::domain::model::StatisticsSummary;
use std::collections::HashMap;

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    }
}

/// Most frequent value, ties going to the one seen first.
/// `None` when no value repeats.
pub fn mode(data: &[f64]) -> Option<f64> {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    let mut first_seen: Vec<f64> = Vec::new();

    for &value in data {
        let count = counts.entry(frequency_key(value)).or_insert(0);
        if *count == 0 {
            first_seen.push(value);
        }
        *count += 1;
    }

    let max_frequency = counts.values().copied().max().unwrap_or(0);
    if max_frequency <= 1 {
        return None;
    }

    first_seen
        .into_iter()
        .find(|value| counts.get(&frequency_key(*value)) == Some(&max_frequency))
}

/// Sample variance (divisor `n - 1`); zero for fewer than two values.
pub fn sample_variance(data: &[f64], mean: f64) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    sum_squared_diff(data, mean) / (data.len() - 1) as f64
}

/// Population standard deviation (divisor `n`).
pub fn population_std_dev(data: &[f64], mean: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    (sum_squared_diff(data, mean) / data.len() as f64).sqrt()
}

pub fn summarize(data: &[f64]) -> StatisticsSummary {
    let mean = mean(data);
    StatisticsSummary {
        count: data.len(),
        mean,
        median: median(data),
        mode: mode(data),
        variance: sample_variance(data, mean),
        std_dev: population_std_dev(data, mean),
    }
}

fn sum_squared_diff(data: &[f64], mean: f64) -> f64 {
    data.iter().map(|value| (value - mean).powi(2)).sum()
}

// -0.0 and 0.0 count as the same value
fn frequency_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}
