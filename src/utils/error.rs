use thiserror::Error;

#[derive(Error, Debug)]
pub enum DilutionError {
    #[error("Division by zero in {operation}: {divisor} is 0")]
    DivisionByZero {
        operation: &'static str,
        divisor: &'static str,
    },

    #[error("Invalid arguments: exactly one unknown term expected, found {unknowns}")]
    InvalidArguments { unknowns: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DilutionError {
    /// Short message for end users, without the debug detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            DilutionError::DivisionByZero { divisor, .. } => {
                format!(
                    "Cannot compute a result because {} is zero",
                    divisor.replace('_', " ")
                )
            }
            DilutionError::InvalidArguments { .. } => {
                "The dilution equation needs exactly one unknown value".to_string()
            }
            DilutionError::IoError(e) => format!("Could not read a file: {}", e),
            DilutionError::SerializationError(e) => {
                format!("Could not render the result: {}", e)
            }
            DilutionError::ConfigError { message } => {
                format!("Invalid configuration: {}", message)
            }
            DilutionError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DilutionError::DivisionByZero { .. } => {
                "Use a non-zero syringe volume (and non-zero volumes or concentrations as divisors)"
            }
            DilutionError::InvalidArguments { .. } => {
                "Leave exactly one of the four dilution terms unspecified"
            }
            DilutionError::IoError(_) => "Check that the config file exists and is readable",
            DilutionError::SerializationError(_) => "Retry with --format text",
            DilutionError::ConfigError { .. } | DilutionError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or pass --target explicitly"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DilutionError>;
