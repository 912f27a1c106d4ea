//! Hash-primitive adapter — concatenate-then-digest over mixed arguments,
//! plus the integer and XOR helpers the kernel is built from.
//!
//! ## Algorithm
//! ```text
//! H(args...) = digest(encode(arg_0) || encode(arg_1) || ...)
//! encode(u64 v)    = 8 bytes, little-endian
//! encode(bytes b)  = b, untouched
//! ```
//! No separators, length prefixes, or domain tags. Digest reproducibility
//! against the reference construction depends on the concatenation being
//! raw, so none may be added.

use digest::{Digest, Output};

/// One argument to [`hash_args`]: a 64-bit counter/index or a byte string.
#[derive(Clone, Copy)]
pub enum HashArg<'a> {
    /// Encoded as 8 bytes little-endian before digesting.
    Int(u64),
    /// Fed to the digest as-is.
    Bytes(&'a [u8]),
}

/// `H(args...)` — encode, concatenate in order, digest.
pub fn hash_args<D: Digest>(args: &[HashArg<'_>]) -> Output<D> {
    let mut hasher = D::new();
    for arg in args {
        match arg {
            HashArg::Int(v) => hasher.update(v.to_le_bytes()),
            HashArg::Bytes(b) => hasher.update(b),
        }
    }
    hasher.finalize()
}

/// Canonical 8-byte little-endian encoding of a 64-bit integer.
///
/// Every integer the construction hashes (counter, round, block index,
/// lookup seed, lane number) uses this encoding.
pub fn le8(v: u64) -> [u8; 8] {
    v.to_le_bytes()
}

/// XOR `src` into `acc` in place. Operands must be equal-length blocks.
pub(crate) fn xor_into(acc: &mut [u8], src: &[u8]) {
    debug_assert_eq!(acc.len(), src.len());
    for (a, s) in acc.iter_mut().zip(src) {
        *a ^= s;
    }
}

/// Interpret `block` as an unsigned little-endian integer of arbitrary
/// width and reduce it modulo `modulus`.
///
/// The whole block participates in the reduction, most significant byte
/// first. Truncating to the low 8 bytes would pick different lookup
/// indices than the reference construction.
pub(crate) fn reduce_le(block: &[u8], modulus: u64) -> u64 {
    debug_assert!(modulus >= 1);
    let m = u128::from(modulus);
    let mut acc: u128 = 0;
    for &byte in block.iter().rev() {
        acc = (acc << 8 | u128::from(byte)) % m;
    }
    acc as u64
}
