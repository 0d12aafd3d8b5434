//! Error types shared by the field, code and decoder modules.

use thiserror::Error;

/// Result type for BCH operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a received word could not be corrected.
///
/// These are expected decode outcomes: the received word lies outside the
/// decoding sphere of every codeword, so the syndromes do not describe any
/// error pattern of weight `t` or less.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFailure {
    /// Berlekamp-Massey needed an LFSR longer than `t`
    LocatorDegreeExceeded { length: usize, t: usize },
    /// Chien search found a different number of roots than the locator degree
    RootCountMismatch { degree: usize, roots: usize },
    /// The locator's true degree differs from the register length
    DegenerateLocator { degree: usize, length: usize },
}

impl std::fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeFailure::LocatorDegreeExceeded { length, t } => write!(
                f,
                "error locator needs {} errors, code corrects at most {}",
                length, t
            ),
            DecodeFailure::RootCountMismatch { degree, roots } => write!(
                f,
                "error locator of degree {} has {} roots in the field",
                degree, roots
            ),
            DecodeFailure::DegenerateLocator { degree, length } => write!(
                f,
                "error locator degree {} differs from register length {}",
                degree, length
            ),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid code configuration: {0}")]
    InvalidConfiguration(String),

    #[error("codeword length {length} does not match expected length {expected}")]
    LengthMismatch { length: usize, expected: usize },

    #[error("uncorrectable codeword: {0}")]
    Uncorrectable(DecodeFailure),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("division by zero in GF(2^m)")]
    DivisionByZero,
}

impl Error {
    /// True for the decode-failure outcome, false for misuse of the API
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, Error::Uncorrectable(_))
    }
}

impl From<DecodeFailure> for Error {
    fn from(failure: DecodeFailure) -> Self {
        Error::Uncorrectable(failure)
    }
}
