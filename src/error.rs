use thiserror::Error;

/// Errors produced while building signals or evaluating links.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VideoError {
    // Signal input
    #[error("invalid numeric input: {field} must be a positive integer (got {value})")]
    InvalidInput { field: &'static str, value: u32 },

    #[error("{timing} timing is undefined at {refresh_rate} Hz (vertical blank exceeds frame time)")]
    DegenerateTiming {
        timing: &'static str,
        refresh_rate: u32,
    },

    #[error("signal bandwidth does not fit in 64 bits")]
    SignalOverflow,

    // Units
    #[error("cannot express a speed as a percentage of zero bandwidth")]
    ZeroBandwidth,

    // Catalog lookups
    #[error("unknown color depth: {0} (expected 8, 10, 12 or 16)")]
    UnknownColorDepth(String),

    #[error("unknown timing standard: {0}")]
    UnknownTiming(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("unknown {family} version: {version}")]
    UnknownLinkVersion {
        family: &'static str,
        version: String,
    },
}

pub type Result<T> = std::result::Result<T, VideoError>;
