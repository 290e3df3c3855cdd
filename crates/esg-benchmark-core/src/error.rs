use thiserror::Error;

#[derive(Debug, Error)]
pub enum EsgBenchError {
    #[error("Unknown metric: '{key}' is not in the metric catalog")]
    UnknownMetric { key: String },

    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for EsgBenchError {
    fn from(e: serde_json::Error) -> Self {
        EsgBenchError::SerializationError(e.to_string())
    }
}
