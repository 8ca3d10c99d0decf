use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Width used when a negative number is rendered in hexadecimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegativeHexWidth {
    /// Always `bits` wide, sign-extended with `F` digits.
    Fixed { bits: u32 },
    /// Same byte-aligned width the binary rendering picks for the magnitude.
    ByteAligned,
}

pub const DEFAULT_NEGATIVE_HEX_BITS: u32 = 40;

impl Default for NegativeHexWidth {
    fn default() -> Self {
        NegativeHexWidth::Fixed {
            bits: DEFAULT_NEGATIVE_HEX_BITS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub decimal: i64,
    pub binary: String,
    pub hexadecimal: String,
}

/// Values parsed from a line-oriented text file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLines<T> {
    pub values: Vec<T>,
    pub invalid_count: usize,
}

impl<T> Default for ParsedLines<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            invalid_count: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub results: Vec<ConversionResult>,
    pub invalid_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Option<f64>,
    pub variance: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleLine {
    pub product: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SalesReport {
    pub lines: Vec<SaleLine>,
    pub total: f64,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub hotel_id: String,
    pub name: String,
    pub location: String,
    pub rooms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "activa")]
    Active,
    #[serde(rename = "cancelada")]
    Cancelled,
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReservationStatus::Active => write!(f, "activa"),
            ReservationStatus::Cancelled => write!(f, "cancelada"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: String,
    pub customer_id: String,
    pub hotel_id: String,
    pub check_in: String,
    pub check_out: String,
    pub status: ReservationStatus,
}

/// Whole contents of the reservation data file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub hotels: BTreeMap<String, Hotel>,
    #[serde(default)]
    pub customers: BTreeMap<String, Customer>,
    #[serde(default)]
    pub reservations: BTreeMap<String, Reservation>,
}
