use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeiFacilError {
    #[error("Invalid parameter: {field}: {reason}")]
    InvalidParameter { field: String, reason: String },

    #[error("Unknown calculator: {0}")]
    UnknownCalculator(String),

    #[error("Numeric overflow in {context}")]
    Overflow { context: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl LeiFacilError {
    /// Shorthand for the validation failures every calculator reports.
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        LeiFacilError::InvalidParameter {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for LeiFacilError {
    fn from(e: serde_json::Error) -> Self {
        LeiFacilError::SerializationError(e.to_string())
    }
}
