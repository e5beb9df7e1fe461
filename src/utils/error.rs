use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Format error: {message}")]
    FormatError { message: String },

    #[error("Number out of range: {value} (allowed {min}..={max})")]
    RangeError { value: i64, min: i64, max: i64 },

    #[error("Invalid operator: {operator}")]
    OperatorError { operator: String },

    #[error("Non-positive result: {value}")]
    NonPositiveResultError { value: i64 },

    #[error("Division by zero")]
    DivisionByZeroError,

    #[error("Arithmetic overflow: {lhs} {operator} {rhs}")]
    ArithmeticOverflowError {
        lhs: i64,
        operator: String,
        rhs: i64,
    },

    #[error("Invalid value for Roman numeral: {value}")]
    OutOfNumeralRangeError { value: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The line or one of its tokens was rejected.
    Input,
    /// The expression was well formed but could not be computed.
    Arithmetic,
    Configuration,
    System,
}

impl CalcError {
    pub fn format(message: impl Into<String>) -> Self {
        CalcError::FormatError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::FormatError { .. }
            | CalcError::RangeError { .. }
            | CalcError::OperatorError { .. } => ErrorCategory::Input,
            CalcError::NonPositiveResultError { .. }
            | CalcError::DivisionByZeroError
            | CalcError::ArithmeticOverflowError { .. }
            | CalcError::OutOfNumeralRangeError { .. } => ErrorCategory::Arithmetic,
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Message printed after `Error:` on stdout.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::FormatError { message } => message.clone(),
            CalcError::RangeError { value, min, max } => {
                format!("number {} is out of range, use numbers from {} to {}", value, min, max)
            }
            CalcError::OperatorError { operator } => {
                format!("invalid operator '{}', use one of: +, -, *, /", operator)
            }
            CalcError::NonPositiveResultError { value } => {
                format!("result {} is not positive, subtraction must produce a positive number", value)
            }
            CalcError::DivisionByZeroError => "division by zero".to_string(),
            CalcError::ArithmeticOverflowError { lhs, operator, rhs } => {
                format!("{} {} {} overflows a 64-bit integer", lhs, operator, rhs)
            }
            CalcError::OutOfNumeralRangeError { value } => {
                format!("invalid value {}: Roman numerals cover 1 to 3999", value)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Arithmetic => 1,
            ErrorCategory::Configuration | ErrorCategory::System => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
