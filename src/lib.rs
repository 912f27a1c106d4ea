//! Balloon memory-hard password hashing.
//!
//! This crate implements the Balloon hashing function of Boneh,
//! Corrigan-Gibbs, and Schechter (2016): a three-phase (expand, mix,
//! extract) construction that derives a fixed-length digest from a
//! password and salt while deliberately holding a configurable number of
//! digest-sized blocks in memory, raising the cost of brute force on
//! custom hardware. The M-core variant runs independent instances over
//! per-lane salts on parallel threads and XOR-combines their outputs.
//!
//! The kernel is generic over any [`digest::Digest`] implementation
//! (`*_with_digest`); the plain functions fix SHA-256 with 32-byte blocks.
//! Verification is constant-time over the hex encodings.
//!
//! Salt generation is the caller's responsibility: use a CSPRNG and a
//! fresh salt per password.
//!
//! ```
//! use balloon_core::{balloon, balloon_hash, verify};
//!
//! let digest = balloon(b"hunter42", b"examplesalt", 16, 20, 4)?;
//! let hex = balloon_hash(b"hunter42", b"examplesalt")?;
//! assert_eq!(hex, balloon_core::encoding::to_hex(&digest));
//! assert!(verify(&hex, b"hunter42", b"examplesalt", 16, 20, 4)?);
//! # Ok::<(), balloon_core::BalloonError>(())
//! ```

pub mod balloon;
pub mod constants;
pub mod encoding;
pub mod errors;
pub mod hash;
pub mod parallel;
pub mod verify;

pub use balloon::{balloon, balloon_hash, balloon_with_digest};
pub use errors::BalloonError;
pub use parallel::{balloon_m, balloon_m_hash, balloon_m_with_digest};
pub use verify::{verify, verify_m, verify_m_with_digest, verify_with_digest};
