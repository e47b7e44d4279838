use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown industry: {0}")]
    UnknownIndustry(String),

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Invalid benchmark band for {metric} in {industry}: {reason}")]
    InvalidBand {
        industry: String,
        metric: String,
        reason: String,
    },

    #[error("Invalid display format '{spec}': {reason}")]
    InvalidFormat { spec: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BenchmarkError {
    fn from(e: serde_json::Error) -> Self {
        BenchmarkError::SerializationError(e.to_string())
    }
}
