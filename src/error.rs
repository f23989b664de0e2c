use thiserror::Error;

/// Everything that can go wrong while building or editing a [`Color`](crate::Color).
///
/// Every failing operation leaves the color it was called on untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Backing integer does not fit in 32 bits.
    #[error("value {0} is outside the 32-bit color range")]
    Range(i128),
    /// Input kind the normalizer does not accept (e.g. a boolean).
    #[error("invalid value type: {0}")]
    InvalidType(&'static str),
    /// Numeric input outside the range of its form.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// String input that is not a percentage.
    #[error("invalid format: {0:?} is not a percentage")]
    InvalidFormat(String),
    #[error("invalid conversion target: {0:?}")]
    InvalidTarget(String),
    #[error("unknown color name: {0:?}")]
    UnknownName(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;
