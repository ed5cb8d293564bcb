//! Secret sharing errors.

use math_lib::errors::{InterpolationError, Overflow};
use thiserror::Error;

/// A coordinate does not fit the record's fixed-width field.
///
/// Only elements in [2^256, p) trigger this; the generator resamples abscissas so the
/// shares it produces always encode.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("share coordinate does not fit the record's 32-byte field")]
pub struct ValueTooLarge;

impl From<Overflow> for ValueTooLarge {
    fn from(_: Overflow) -> Self {
        Self
    }
}

/// A share record failed to decode.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// Fewer bytes than a full record were available.
    #[error("share record is truncated")]
    TruncatedRecord,

    /// The magic bytes did not match.
    #[error("share record magic bytes mismatch")]
    BadMagic,

    /// The format version byte is not recognized.
    #[error("unrecognized share record version {0}")]
    UnknownVersion(u8),
}

/// Share generation failure.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The parameters don't describe a usable threshold scheme.
    #[error("invalid parameters: threshold and share count must be at least 2, and the threshold cannot exceed the share count")]
    InvalidParameters,

    /// A share could not be written to its sink.
    #[error("failed writing share: {0}")]
    Io(#[from] std::io::Error),

    /// A share could not be serialized.
    #[error(transparent)]
    Encode(#[from] ValueTooLarge),
}

/// Secret recovery failure.
#[derive(Error, Debug)]
pub enum ReconstructError {
    /// Fewer shares than the threshold, or a threshold below two.
    #[error("invalid threshold: at least two shares, and no fewer than the threshold, are required")]
    InvalidThreshold,

    /// A share record failed its integrity checks.
    #[error("corrupt share: {0}")]
    CorruptShare(#[from] DecodeError),

    /// Two shares carry the same abscissa.
    #[error("two shares carry the same abscissa")]
    DuplicateShare,

    /// A share could not be read from its source.
    #[error("failed reading share: {0}")]
    Io(#[from] std::io::Error),

    /// The interpolation failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    /// The recovered value does not fit a 32-byte secret.
    #[error("recovered value does not fit a 32-byte secret")]
    SecretOverflow,
}
