//! Binary share record codec.
//!
//! A record is exactly 67 bytes, fixed-width, no delimiters:
//!
//! | bytes | content                                       |
//! |-------|-----------------------------------------------|
//! | 0-1   | magic `0xb6 0x94`                             |
//! | 2     | format version, currently `0x01`              |
//! | 3-34  | x, little-endian, zero-padded to 32 bytes     |
//! | 35-66 | y, little-endian, zero-padded to 32 bytes     |
//!
//! The decoder dispatches on the version byte so a future format extends the match
//! instead of replacing the codec.

use crate::{
    errors::{DecodeError, ValueTooLarge},
    share::Share,
};
use math_lib::element::{FieldElement, ELEMENT_BYTES};

/// The magic bytes leading every share record.
pub const MAGIC: [u8; 2] = [0xb6, 0x94];

/// The record format version this codec produces.
pub const FORMAT_VERSION: u8 = 0x01;

/// The exact size of a serialized share record.
pub const RECORD_BYTES: usize = 3 + 2 * ELEMENT_BYTES;

/// Encodes a share into its fixed-size record.
///
/// Coordinates at or above 2^256 do not fit the 32-byte fields and are rejected rather
/// than truncated.
pub fn encode(share: &Share) -> Result<[u8; RECORD_BYTES], ValueTooLarge> {
    let mut record = [0u8; RECORD_BYTES];
    record[0..2].copy_from_slice(&MAGIC);
    record[2] = FORMAT_VERSION;
    record[3..3 + ELEMENT_BYTES].copy_from_slice(&share.x().to_le_bytes()?);
    record[3 + ELEMENT_BYTES..].copy_from_slice(&share.y().to_le_bytes()?);
    Ok(record)
}

/// Decodes a share from the first 67 bytes of `bytes`.
///
/// Fails, never panics, on a short input, a magic mismatch or an unrecognized version.
pub fn decode(bytes: &[u8]) -> Result<Share, DecodeError> {
    let record: &[u8; RECORD_BYTES] = bytes
        .get(..RECORD_BYTES)
        .and_then(|record| record.try_into().ok())
        .ok_or(DecodeError::TruncatedRecord)?;
    if record[..2] != MAGIC {
        return Err(DecodeError::BadMagic);
    }
    match record[2] {
        FORMAT_VERSION => {
            let mut x = [0u8; ELEMENT_BYTES];
            let mut y = [0u8; ELEMENT_BYTES];
            x.copy_from_slice(&record[3..3 + ELEMENT_BYTES]);
            y.copy_from_slice(&record[3 + ELEMENT_BYTES..]);
            Ok(Share::new(FieldElement::from_le_bytes(&x), FieldElement::from_le_bytes(&y)))
        }
        version => Err(DecodeError::UnknownVersion(version)),
    }
}
