use thiserror::Error;

/// Top-level error type used across the entire workspace.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color input: {0}")]
    Validation(String),

    #[error("value out of range for an RGB value: {0}")]
    RgbRange(f64),

    #[error("value out of range for an alpha value: {0}")]
    AlphaRange(f64),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T, E = ColorError> = std::result::Result<T, E>;
