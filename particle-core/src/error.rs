use thiserror::Error;

/// Rejected engine configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("force cap must not be negative, got {0}")]
    NegativeForceCap(f64),

    #[error("friction must lie in [0, 1], got {0}")]
    FrictionOutOfRange(f64),

    #[error("jitter spread must not be negative, got {0}")]
    NegativeJitterSpread(f64),

    #[error("display width range is invalid: min {min} max {max}")]
    InvalidWidthRange { min: f64, max: f64 },
}
