//! Encoding utilities — lowercase hex.
//!
//! Digests travel as raw bytes inside the kernel; the string surface
//! (`balloon_hash`, `verify`) is lowercase hex with no prefix and no
//! separators, `2 * DIGEST_LENGTH` characters for SHA-256.

use crate::errors::BalloonError;

/// Encode bytes to a lowercase hex string.
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode a hex string to bytes. Accepts upper- and lowercase digits.
///
/// # Errors
/// Returns `BalloonError::InvalidParameter` on odd-length or non-hex input.
pub fn from_hex(encoded: &str) -> Result<Vec<u8>, BalloonError> {
    if !encoded.len().is_multiple_of(2) {
        return Err(BalloonError::InvalidParameter(
            "odd-length hex string".into(),
        ));
    }
    (0..encoded.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&encoded[i..i + 2], 16)
                .map_err(|e| BalloonError::InvalidParameter(format!("invalid hex: {e}")))
        })
        .collect()
}
