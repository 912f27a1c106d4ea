//! M-core driver — independent Balloon lanes, XOR-combined.
//!
//! Each lane runs the full single-instance algorithm over a per-lane salt
//! (`salt || LE8(lane + 1)`, one-based). Lanes share no mutable state and
//! run on their own OS threads; the combining XOR is commutative, so lane
//! completion order cannot influence the output. The combined block is
//! finalised as `H(password, salt, combined)` with no counter.
//!
//! A panicked lane aborts the whole call with `BalloonError::Worker`;
//! partial lane results are never combined.

use std::thread;

use digest::{Digest, Output};
use sha2::Sha256;

use crate::balloon::{balloon_with_digest, check_costs};
use crate::constants::{
    DEFAULT_DELTA, DEFAULT_PARALLEL_COST, DEFAULT_SPACE_COST, DEFAULT_TIME_COST,
};
use crate::encoding::to_hex;
use crate::errors::BalloonError;
use crate::hash::{hash_args, le8, xor_into, HashArg::Bytes};

/// Per-lane salt: `salt || LE8(lane + 1)`. Lane numbering is one-based in
/// the derived salts even though lanes are indexed from zero.
pub(crate) fn lane_salt(salt: &[u8], lane: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(salt.len() + 8);
    out.extend_from_slice(salt);
    out.extend_from_slice(&le8(lane + 1));
    out
}

/// M-core Balloon digest over an arbitrary [`Digest`] implementation.
///
/// Holds `parallel_cost` buffers of `space_cost` blocks concurrently, one
/// per lane.
///
/// # Errors
/// `BalloonError::InvalidParameter` if any cost is zero;
/// `BalloonError::Worker` if a lane panics.
pub fn balloon_m_with_digest<D: Digest>(
    password: &[u8],
    salt: &[u8],
    space_cost: u64,
    time_cost: u64,
    parallel_cost: u64,
    delta: u64,
) -> Result<Output<D>, BalloonError>
where
    Output<D>: Send,
{
    check_costs(space_cost, time_cost, delta)?;
    if parallel_cost == 0 {
        return Err(BalloonError::InvalidParameter(
            "parallel_cost must be at least 1".into(),
        ));
    }

    let lane_outputs = thread::scope(|scope| {
        let workers: Vec<_> = (0..parallel_cost)
            .map(|lane| {
                let salt_p = lane_salt(salt, lane);
                scope.spawn(move || {
                    balloon_with_digest::<D>(password, &salt_p, space_cost, time_cost, delta)
                })
            })
            .collect();

        // Join every worker before combining anything.
        workers
            .into_iter()
            .map(|worker| match worker.join() {
                Ok(result) => result,
                Err(_) => Err(BalloonError::Worker("balloon lane panicked".into())),
            })
            .collect::<Result<Vec<_>, BalloonError>>()
    })?;

    let mut combined = lane_outputs[0].clone();
    for lane_out in &lane_outputs[1..] {
        xor_into(combined.as_mut_slice(), lane_out.as_slice());
    }

    Ok(hash_args::<D>(&[
        Bytes(password),
        Bytes(salt),
        Bytes(combined.as_slice()),
    ]))
}

/// M-core Balloon digest with SHA-256 blocks.
///
/// # Errors
/// `BalloonError::InvalidParameter` if any cost is zero;
/// `BalloonError::Worker` if a lane panics.
pub fn balloon_m(
    password: &[u8],
    salt: &[u8],
    space_cost: u64,
    time_cost: u64,
    parallel_cost: u64,
    delta: u64,
) -> Result<[u8; 32], BalloonError> {
    balloon_m_with_digest::<Sha256>(password, salt, space_cost, time_cost, parallel_cost, delta)
        .map(Into::into)
}

/// M-core Balloon hash with the default costs (16 blocks, 20 rounds,
/// 4 lanes, delta 4), returned as 64 lowercase hex characters.
pub fn balloon_m_hash(password: &[u8], salt: &[u8]) -> Result<String, BalloonError> {
    let digest = balloon_m(
        password,
        salt,
        DEFAULT_SPACE_COST,
        DEFAULT_TIME_COST,
        DEFAULT_PARALLEL_COST,
        DEFAULT_DELTA,
    )?;
    Ok(to_hex(&digest))
}
