use thiserror::Error;

/// Errors produced while parsing or formatting a duration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsError {
    #[error("input is longer than {} characters", crate::parse::MAX_INPUT_LEN)]
    InputTooLong,
    #[error("invalid duration format")]
    InvalidFormat,
    #[error("duration is NaN")]
    NotANumber,
    #[error("duration is infinite")]
    Infinite,
    #[error("duration is negative")]
    Negative,
}

pub type Result<T> = std::result::Result<T, MsError>;

/// Reject values the formatters cannot render.
pub(crate) fn ensure_finite(ms: f64) -> Result<()> {
    if ms.is_nan() {
        return Err(MsError::NotANumber);
    }
    if ms.is_infinite() {
        return Err(MsError::Infinite);
    }
    Ok(())
}
