use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("Failed to read input: {0}")]
    InputRead(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    OutputWrite(#[source] std::io::Error),

    // Container errors
    #[error("Corrupt container: {0}")]
    Corrupt(#[from] Corruption),

    // Internal errors
    #[error("Reference out of packable range: distance={distance} (1-4096), length={length} (1-16)")]
    InvalidPacking { distance: usize, length: usize },

    #[error("Round-trip verification failed: first difference at byte {offset}")]
    RoundTripMismatch { offset: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error describes a malformed container
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::Corrupt(_))
    }

    /// Corruption reason, if this error describes a malformed container
    pub fn corruption(&self) -> Option<&Corruption> {
        match self {
            Error::Corrupt(c) => Some(c),
            _ => None,
        }
    }
}

/// Reasons a container was rejected during parsing or decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Corruption {
    #[error("container is {len} bytes, shorter than the 8-byte header count")]
    TruncatedPrefix { len: usize },

    #[error("header count {header_count} exceeds the {available} bytes following the prefix")]
    HeaderOverrun { header_count: u64, available: usize },

    #[error("reference at data offset {offset} reaches back {distance} bytes but only {available} have been produced")]
    DistanceOutOfRange { distance: usize, available: usize, offset: usize },

    #[error("data ends at offset {offset}: token needs {needed} bytes, {remaining} remain")]
    TruncatedData { offset: usize, needed: usize, remaining: usize },

    #[error("header bits exhausted after {consumed} of {total} data bytes")]
    TrailingData { consumed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
