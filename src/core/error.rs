//! Error handling and error types for grid construction.
//!
//! Every fallible operation in the crate returns [`Result`], so failures
//! propagate with `?` straight to the caller. Nothing here is retried.

use std::io;
use thiserror::Error;

/// Main error type for the grid-creator library.
#[derive(Error, Debug)]
pub enum GridError {
    /// Configuration errors, including unsupported border selection types
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Offending value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Not enough feature values to build borders from
    #[error("Insufficient data: need at least {required} values, got {actual}")]
    InsufficientData {
        /// Minimum number of values needed
        required: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// Numerical problems in the input (NaN or infinite values)
    #[error("Numerical error: {message}")]
    Numerical {
        /// Description of the problem
        message: String,
    },

    /// File I/O errors
    #[error("I/O error: {source}")]
    Io {
        /// Underlying error
        #[from]
        source: io::Error,
    },

    /// JSON deserialization errors
    #[error("JSON error: {source}")]
    Json {
        /// Underlying error
        #[from]
        source: serde_json::Error,
    },

    /// TOML deserialization errors
    #[error("TOML error: {source}")]
    Toml {
        /// Underlying error
        #[from]
        source: toml::de::Error,
    },
}

/// Type alias for Results using GridError
pub type Result<T> = std::result::Result<T, GridError>;

impl GridError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        GridError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        GridError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an insufficient data error
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        GridError::InsufficientData { required, actual }
    }

    /// Create a numerical error
    pub fn numerical<S: Into<String>>(message: S) -> Self {
        GridError::Numerical {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable.
    ///
    /// All grid errors come from bad input or bad configuration, so retrying
    /// the same call cannot succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            GridError::Config { .. } => false,
            GridError::InvalidParameter { .. } => false,
            GridError::InsufficientData { .. } => false,
            GridError::Numerical { .. } => false,
            GridError::Io { .. } => false,
            GridError::Json { .. } => false,
            GridError::Toml { .. } => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            GridError::Config { .. } => "config",
            GridError::InvalidParameter { .. } => "invalid_parameter",
            GridError::InsufficientData { .. } => "insufficient_data",
            GridError::Numerical { .. } => "numerical",
            GridError::Io { .. } => "io",
            GridError::Json { .. } => "json",
            GridError::Toml { .. } => "toml",
        }
    }
}

/// Build a [`GridError::Config`] from a message or a format string.
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::core::error::GridError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::GridError::config(format!($fmt, $($arg)*))
    };
}

/// Return early with `$err` when `$cond` is false.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
