use thiserror::Error;

/// Per-selection failure. Every pipeline stage reports one of these; the
/// command loop turns them into skip-counter increments and keeps going.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("selection range is out of bounds")]
    InvalidRange,

    #[error("selection does not match the source pattern")]
    NoMatch,

    #[error("invalid integer: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("invalid number: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("value is not finite")]
    NonFinite,

    #[error("replacement rejected by the host")]
    Replace,
}
