//! Configuration errors.

/// Errors raised when validating engine configuration or keyword sets.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("threshold `{name}` out of range: {value} (expected 0.0..=1.0)")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("similarity weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },

    #[error("tolerance `{name}` must be positive, got {value}")]
    NonPositiveTolerance { name: &'static str, value: f64 },

    #[error("invalid keyword set `{name}`: {message}")]
    InvalidKeywords { name: String, message: String },
}
