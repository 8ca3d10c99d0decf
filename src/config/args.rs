use crate::config::toml_config::{hex_width, FileConfig, HexWidthMode};
use crate::config::Settings;
use crate::domain::model::{NegativeHexWidth, DEFAULT_NEGATIVE_HEX_BITS};
use crate::utils::error::{BatchError, Result};
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "batchkit")]
#[command(about = "Small batch tools: number conversion, statistics, word count, sales totals and hotel reservations")]
#[command(version)]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Directory where result files are written
    #[arg(long, global = true)]
    pub output_dir: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HexWidthArg {
    Fixed,
    ByteAligned,
}

impl From<HexWidthArg> for HexWidthMode {
    fn from(arg: HexWidthArg) -> Self {
        match arg {
            HexWidthArg::Fixed => HexWidthMode::Fixed,
            HexWidthArg::ByteAligned => HexWidthMode::ByteAligned,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert one integer per line to binary and hexadecimal
    Convert {
        input: String,

        /// Width used for negative hexadecimal values
        #[arg(long, value_enum)]
        hex_width: Option<HexWidthArg>,

        /// Bit width for the fixed negative hexadecimal mode
        #[arg(long)]
        hex_bits: Option<u32>,
    },
    /// Mean, median, mode, variance and standard deviation of one number per line
    Stats { input: String },
    /// Frequency of each distinct word in a text file
    Words { input: String },
    /// Total cost of a sales log priced against a catalogue
    Sales { catalogue: String, sales: String },
    /// Manage hotels
    Hotel {
        #[arg(long)]
        store: Option<String>,
        #[command(subcommand)]
        action: HotelAction,
    },
    /// Manage customers
    Customer {
        #[arg(long)]
        store: Option<String>,
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// Manage reservations
    Reservation {
        #[arg(long)]
        store: Option<String>,
        #[command(subcommand)]
        action: ReservationAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum HotelAction {
    Create {
        hotel_id: String,
        name: String,
        location: String,
        rooms: u32,
    },
    Delete {
        hotel_id: String,
    },
    Show {
        hotel_id: String,
    },
    /// Change fields with repeated `--set key=value`
    Modify {
        hotel_id: String,
        #[arg(long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },
    /// Rooms not taken by an active reservation
    Rooms {
        hotel_id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CustomerAction {
    Create {
        customer_id: String,
        name: String,
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    Delete {
        customer_id: String,
    },
    Show {
        customer_id: String,
    },
    Modify {
        customer_id: String,
        #[arg(long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ReservationAction {
    Create {
        reservation_id: String,
        customer_id: String,
        hotel_id: String,
        /// DD/MM/YYYY
        check_in: String,
        /// DD/MM/YYYY
        check_out: String,
    },
    Cancel {
        reservation_id: String,
    },
    Show {
        reservation_id: String,
    },
}

fn parse_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

impl CliConfig {
    /// Loads the settings file (if any) and applies command-line overrides.
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        file.validate()?;

        let mut settings = Settings::from_file_config(&file);
        if let Some(dir) = &self.output_dir {
            settings = settings.with_output_dir(dir.clone());
        }
        if self.monitor {
            settings.monitor = true;
        }

        match &self.command {
            Command::Convert {
                hex_width: width,
                hex_bits,
                ..
            } => {
                settings.negative_hex_width =
                    override_hex_width(settings.negative_hex_width, *width, *hex_bits)?;
            }
            Command::Hotel {
                store: Some(store), ..
            }
            | Command::Customer {
                store: Some(store), ..
            }
            | Command::Reservation {
                store: Some(store), ..
            } => {
                settings = settings.with_store_path(store.clone());
            }
            _ => {}
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// `--hex-bits` only applies to the fixed width; pairing it with a
/// byte-aligned width is rejected.
fn override_hex_width(
    current: NegativeHexWidth,
    mode: Option<HexWidthArg>,
    bits: Option<u32>,
) -> Result<NegativeHexWidth> {
    let current_mode = match current {
        NegativeHexWidth::Fixed { .. } => HexWidthMode::Fixed,
        NegativeHexWidth::ByteAligned => HexWidthMode::ByteAligned,
    };
    let current_bits = match current {
        NegativeHexWidth::Fixed { bits } => bits,
        NegativeHexWidth::ByteAligned => DEFAULT_NEGATIVE_HEX_BITS,
    };

    let mode = mode.map(HexWidthMode::from).unwrap_or(current_mode);
    if let (HexWidthMode::ByteAligned, Some(bits)) = (mode, bits) {
        return Err(BatchError::InvalidConfigValueError {
            field: "hex_bits".to_string(),
            value: bits.to_string(),
            reason: "only applies to the fixed negative hex width".to_string(),
        });
    }

    Ok(hex_width(mode, bits.unwrap_or(current_bits)))
}
