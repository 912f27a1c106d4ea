//! Single-instance Balloon kernel — expand, mix, extract.
//!
//! Implements the memory-hard construction of Boneh, Corrigan-Gibbs, and
//! Schechter (2016) over a pluggable byte-oriented digest.
//!
//! ## Algorithm
//! ```text
//! buf[0] = H(0, password, salt); cnt = 1
//! expand:  for s in 1..space_cost { buf[s] = H(cnt, buf[s-1]); cnt += 1 }
//! mix:     for t in 0..time_cost, s in 0..space_cost:
//!              buf[s] = H(cnt, buf[s-1], buf[s]); cnt += 1    (s-1 wraps at 0)
//!              for i in 0..delta:
//!                  idx   = H(t, s, i)                          (no counter)
//!                  other = decode_le(H(cnt, salt, idx)) mod space_cost; cnt += 1
//!                  buf[s] = H(cnt, buf[s], buf[other]); cnt += 1
//! extract: buf[space_cost - 1]
//! ```
//! The counter makes every digest input unique within a run; it advances
//! once per digest invocation that consumes it, exactly `1 + 2 * delta`
//! times per `(t, s)` pair. The `(t, s, i)` lookup seed is the one digest
//! that does not consume it. Deviating from this schedule changes every
//! output, so the loops below follow it literally.

use digest::{Digest, Output};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::constants::{DEFAULT_DELTA, DEFAULT_SPACE_COST, DEFAULT_TIME_COST};
use crate::encoding::to_hex;
use crate::errors::BalloonError;
use crate::hash::{
    hash_args, reduce_le,
    HashArg::{Bytes, Int},
};

/// Reject zero costs before any buffer is allocated.
///
/// Returns `space_cost` as a usable buffer length. A `space_cost` that does
/// not fit in `usize` cannot be allocated and is rejected with the same
/// error kind.
pub(crate) fn check_costs(
    space_cost: u64,
    time_cost: u64,
    delta: u64,
) -> Result<usize, BalloonError> {
    if space_cost == 0 {
        return Err(BalloonError::InvalidParameter(
            "space_cost must be at least 1".into(),
        ));
    }
    if time_cost == 0 {
        return Err(BalloonError::InvalidParameter(
            "time_cost must be at least 1".into(),
        ));
    }
    if delta == 0 {
        return Err(BalloonError::InvalidParameter(
            "delta must be at least 1".into(),
        ));
    }
    usize::try_from(space_cost).map_err(|_| {
        BalloonError::InvalidParameter("space_cost exceeds addressable memory".into())
    })
}

/// Balloon digest over an arbitrary [`Digest`] implementation.
///
/// Runs strictly sequentially on the calling thread and holds
/// `space_cost` digest-sized blocks in memory for the duration of the
/// call. The buffer is zeroised before it is freed.
///
/// # Errors
/// `BalloonError::InvalidParameter` if any cost is zero.
pub fn balloon_with_digest<D: Digest>(
    password: &[u8],
    salt: &[u8],
    space_cost: u64,
    time_cost: u64,
    delta: u64,
) -> Result<Output<D>, BalloonError> {
    let space = check_costs(space_cost, time_cost, delta)?;

    let mut buf: Vec<Output<D>> = Vec::with_capacity(space);
    buf.push(hash_args::<D>(&[Int(0), Bytes(password), Bytes(salt)]));
    let mut cnt: u64 = 1;

    // Expand: hash-chain the seed block across the whole buffer.
    for s in 1..space {
        let block = hash_args::<D>(&[Int(cnt), Bytes(buf[s - 1].as_slice())]);
        cnt += 1;
        buf.push(block);
    }

    // Mix: time_cost rounds of dependent and pseudo-random rereferencing.
    for t in 0..time_cost {
        for s in 0..space {
            let prev = (s + space - 1) % space;
            buf[s] = hash_args::<D>(&[
                Int(cnt),
                Bytes(buf[prev].as_slice()),
                Bytes(buf[s].as_slice()),
            ]);
            cnt += 1;

            for i in 0..delta {
                let idx_seed = hash_args::<D>(&[Int(t), Int(s as u64), Int(i)]);
                let other_raw =
                    hash_args::<D>(&[Int(cnt), Bytes(salt), Bytes(idx_seed.as_slice())]);
                cnt += 1;

                // Full-block little-endian decode; self-reference is fine.
                let other = reduce_le(other_raw.as_slice(), space_cost) as usize;
                buf[s] = hash_args::<D>(&[
                    Int(cnt),
                    Bytes(buf[s].as_slice()),
                    Bytes(buf[other].as_slice()),
                ]);
                cnt += 1;
            }
        }
    }

    // Extract: the last block is the digest.
    let out = buf[space - 1].clone();
    for block in &mut buf {
        block.as_mut_slice().zeroize();
    }
    Ok(out)
}

/// Balloon digest with SHA-256 blocks.
///
/// Returns the raw 32-byte digest; hex encoding is the caller's business
/// (or use [`balloon_hash`]).
///
/// # Errors
/// `BalloonError::InvalidParameter` if any cost is zero.
pub fn balloon(
    password: &[u8],
    salt: &[u8],
    space_cost: u64,
    time_cost: u64,
    delta: u64,
) -> Result<[u8; 32], BalloonError> {
    balloon_with_digest::<Sha256>(password, salt, space_cost, time_cost, delta).map(Into::into)
}

/// Balloon hash with the default costs (16 blocks, 20 rounds, delta 4),
/// returned as 64 lowercase hex characters.
pub fn balloon_hash(password: &[u8], salt: &[u8]) -> Result<String, BalloonError> {
    let digest = balloon(
        password,
        salt,
        DEFAULT_SPACE_COST,
        DEFAULT_TIME_COST,
        DEFAULT_DELTA,
    )?;
    Ok(to_hex(&digest))
}
