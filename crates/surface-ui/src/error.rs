use thiserror::Error;

/// Rejected style token or out-of-range style value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unknown density `{0}`, expected default, comfortable or compact")]
    UnknownDensity(String),
    #[error("elevation {0} is out of range (0..={max})", max = crate::styles::MAX_ELEVATION)]
    ElevationOutOfRange(u32),
    #[error("elevation `{0}` is not a number")]
    InvalidElevation(String),
    #[error("unknown variant `{0}`")]
    UnknownVariant(String),
    #[error("unknown position `{0}`")]
    UnknownPosition(String),
    #[error("unknown location token `{0}`")]
    UnknownLocation(String),
    #[error("unknown card tag `{0}`")]
    UnknownTag(String),
}
