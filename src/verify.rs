//! Constant-time digest verification.
//!
//! Recomputes the digest for the supplied parameters, hex-encodes it, and
//! compares against the expected string without short-circuiting on the
//! first differing byte. Length is the only public quantity the comparison
//! branches on; a wrong-length candidate is simply unequal.
//!
//! Matching is exact byte equality, so the expected string must be
//! lowercase hex with no prefix.

use digest::{Digest, Output};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::balloon::balloon_with_digest;
use crate::encoding::to_hex;
use crate::errors::BalloonError;
use crate::parallel::balloon_m_with_digest;

/// Constant-time equality over the hex encodings.
fn hex_eq(expected: &str, actual: &str) -> bool {
    expected.as_bytes().ct_eq(actual.as_bytes()).into()
}

/// Check `expected_hex` against a freshly computed Balloon digest, with an
/// arbitrary [`Digest`] implementation.
///
/// # Errors
/// `BalloonError::InvalidParameter` if any cost is zero.
pub fn verify_with_digest<D: Digest>(
    expected_hex: &str,
    password: &[u8],
    salt: &[u8],
    space_cost: u64,
    time_cost: u64,
    delta: u64,
) -> Result<bool, BalloonError> {
    let digest = balloon_with_digest::<D>(password, salt, space_cost, time_cost, delta)?;
    Ok(hex_eq(expected_hex, &to_hex(digest.as_slice())))
}

/// Check `expected_hex` against a freshly computed M-core digest, with an
/// arbitrary [`Digest`] implementation.
///
/// # Errors
/// `BalloonError::InvalidParameter` if any cost is zero;
/// `BalloonError::Worker` if a lane panics.
pub fn verify_m_with_digest<D: Digest>(
    expected_hex: &str,
    password: &[u8],
    salt: &[u8],
    space_cost: u64,
    time_cost: u64,
    parallel_cost: u64,
    delta: u64,
) -> Result<bool, BalloonError>
where
    Output<D>: Send,
{
    let digest = balloon_m_with_digest::<D>(
        password,
        salt,
        space_cost,
        time_cost,
        parallel_cost,
        delta,
    )?;
    Ok(hex_eq(expected_hex, &to_hex(digest.as_slice())))
}

/// Check `expected_hex` against a freshly computed SHA-256 Balloon digest.
///
/// # Errors
/// `BalloonError::InvalidParameter` if any cost is zero.
pub fn verify(
    expected_hex: &str,
    password: &[u8],
    salt: &[u8],
    space_cost: u64,
    time_cost: u64,
    delta: u64,
) -> Result<bool, BalloonError> {
    verify_with_digest::<Sha256>(expected_hex, password, salt, space_cost, time_cost, delta)
}

/// Check `expected_hex` against a freshly computed SHA-256 M-core digest.
///
/// # Errors
/// `BalloonError::InvalidParameter` if any cost is zero;
/// `BalloonError::Worker` if a lane panics.
pub fn verify_m(
    expected_hex: &str,
    password: &[u8],
    salt: &[u8],
    space_cost: u64,
    time_cost: u64,
    parallel_cost: u64,
    delta: u64,
) -> Result<bool, BalloonError> {
    verify_m_with_digest::<Sha256>(
        expected_hex,
        password,
        salt,
        space_cost,
        time_cost,
        parallel_cost,
        delta,
    )
}
