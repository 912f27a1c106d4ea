//! Error types for balloon-core.
//!
//! The hashing kernel itself has no recoverable failure modes: every byte
//! string is a valid password or salt, including the empty string. Errors
//! exist only at the rim, before any hashing starts (rejected cost
//! parameters) or when an M-core lane dies mid-run.

/// Unified error type for all balloon-core operations.
#[derive(Debug, thiserror::Error)]
pub enum BalloonError {
    /// A cost parameter is zero, or does not fit in addressable memory.
    /// Raised synchronously, before any buffer is allocated.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An M-core lane worker panicked. Fatal to the whole call; partial
    /// lane results are never combined into an output.
    #[error("worker failure: {0}")]
    Worker(String),
}
