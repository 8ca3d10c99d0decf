use crate::domain::model::ParsedLines;
use std::str::FromStr;

/// Parses one value per non-blank line, counting and logging the lines that fail.
pub fn parse_lines<T: FromStr>(content: &str) -> ParsedLines<T> {
    let mut parsed = ParsedLines::default();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<T>() {
            Ok(value) => parsed.values.push(value),
            Err(_) => {
                parsed.invalid_count += 1;
                tracing::warn!("Invalid value on line {}: '{}' - skipped", index + 1, line);
            }
        }
    }

    if parsed.invalid_count > 0 {
        tracing::info!("Total invalid entries skipped: {}", parsed.invalid_count);
    }

    parsed
}

/// Input files are read as UTF-8, replacing invalid sequences.
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
