use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No valid {source_kind} found in {path}")]
    NoValidInput { source_kind: String, path: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("{path} holds a record that cannot be read: {reason}")]
    UnreadableRecord { path: String, reason: String },

    #[error("{kind} '{id}' already exists")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("No rooms available in hotel '{hotel_id}'")]
    NoRoomsAvailable { hotel_id: String },

    #[error("Reservation '{reservation_id}' is already cancelled")]
    AlreadyCancelled { reservation_id: String },

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    System,
    Configuration,
    Processing,
    Domain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that ended with an error of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl BatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BatchError::IoError(_)
            | BatchError::SerializationError(_)
            | BatchError::TomlError(_) => ErrorCategory::System,
            BatchError::ConfigError { .. } | BatchError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            BatchError::NoValidInput { .. }
            | BatchError::InvalidInput { .. }
            | BatchError::UnreadableRecord { .. } => ErrorCategory::Processing,
            BatchError::DuplicateId { .. }
            | BatchError::NotFound { .. }
            | BatchError::NoRoomsAvailable { .. }
            | BatchError::AlreadyCancelled { .. }
            | BatchError::InvalidDate { .. } => ErrorCategory::Domain,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::System => ErrorSeverity::Critical,
            ErrorCategory::Configuration | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Domain => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BatchError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the input file path is correct".to_string()
            }
            BatchError::IoError(_) => {
                "Check file permissions and that the output directory is writable".to_string()
            }
            BatchError::SerializationError(_) => {
                "Make sure the file contains valid JSON".to_string()
            }
            BatchError::TomlError(_) => "Make sure the configuration file is valid TOML".to_string(),
            BatchError::ConfigError { .. } | BatchError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line flags".to_string()
            }
            BatchError::NoValidInput { .. } => {
                "Provide an input file with at least one valid entry".to_string()
            }
            BatchError::InvalidInput { .. } => "Correct the input and try again".to_string(),
            BatchError::UnreadableRecord { .. } => {
                "Fix or remove the offending record; the data file was left unchanged".to_string()
            }
            BatchError::DuplicateId { .. } => "Use a different identifier".to_string(),
            BatchError::NotFound { kind, .. } => {
                format!("Create the {} first or check the identifier", kind.to_lowercase())
            }
            BatchError::NoRoomsAvailable { .. } => {
                "Cancel an active reservation or choose another hotel".to_string()
            }
            BatchError::AlreadyCancelled { .. } => "No action is needed".to_string(),
            BatchError::InvalidDate { .. } => "Use the DD/MM/YYYY date format".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::System => format!("System error: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Processing => format!("Processing failed: {}", self),
            ErrorCategory::Domain => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BatchError>;
