//! Algorithm constants — digest geometry and friendly-wrapper defaults.
//!
//! The default costs are the ones fixed by `balloon_hash` and
//! `balloon_m_hash`. The low-level functions take every cost explicitly.

/// SHA-256 digest length in bytes; the block size of the default kernel.
pub const DIGEST_LENGTH: usize = 32;

/// Length of a hex-encoded SHA-256 digest in characters.
pub const HEX_DIGEST_LENGTH: usize = 64;

/// Blocks held in memory by the friendly wrappers.
pub const DEFAULT_SPACE_COST: u64 = 16;

/// Mix rounds performed by the friendly wrappers.
pub const DEFAULT_TIME_COST: u64 = 20;

/// Pseudo-random dependencies per block per round in the friendly wrappers.
pub const DEFAULT_DELTA: u64 = 4;

/// Lanes spawned by `balloon_m_hash`.
pub const DEFAULT_PARALLEL_COST: u64 = 4;
