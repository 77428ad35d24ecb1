use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-level errors for clockpane
#[derive(Error, Debug)]
pub enum AppError {
    /// The date/time format pattern was rejected by the formatting engine
    #[error("Invalid date/time format pattern: {pattern}")]
    Format { pattern: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn format(pattern: impl Into<String>) -> Self {
        Self::Format {
            pattern: pattern.into(),
        }
    }
}
