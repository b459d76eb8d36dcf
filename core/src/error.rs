use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateError {
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Selection {index} is out of range: expected 1..={len}")]
    OutOfRange { index: i64, len: usize },

    #[error("Need at least {needed} points to fit a trend, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RateError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field:  field.into(),
            reason: reason.into(),
        }
    }

    /// Stable tag surfaced at the JSON boundary.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. }     => "invalid_input",
            Self::OutOfRange { .. }       => "out_of_range",
            Self::InsufficientData { .. } => "insufficient_data",
            Self::Serialization(_)        => "serialization",
            Self::Other(_)                => "other",
        }
    }
}

pub type RateResult<T> = Result<T, RateError>;
