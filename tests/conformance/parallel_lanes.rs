//! M-core lane-structure invariants.

use sha2::{Digest, Sha256};

use balloon_core::{balloon, balloon_m};

/// `salt || LE8(lane + 1)`, the per-lane salt derivation.
fn lane_salt(salt: &[u8], lane: u64) -> Vec<u8> {
    let mut out = salt.to_vec();
    out.extend_from_slice(&(lane + 1).to_le_bytes());
    out
}

/// `H(password, salt, block)` — the M-core finaliser.
fn finalise(password: &[u8], salt: &[u8], block: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(password);
    hasher.update(salt);
    hasher.update(block);
    hasher.finalize().into()
}

#[test]
fn single_lane_reduces_to_finalised_balloon() {
    let lane = balloon(b"password", &lane_salt(b"salt", 0), 4, 3, 3).unwrap();
    assert_eq!(
        balloon_m(b"password", b"salt", 4, 3, 1, 3).unwrap(),
        finalise(b"password", b"salt", &lane)
    );
}

#[test]
fn lanes_combine_by_xor() {
    let lanes: Vec<[u8; 32]> = (0..3)
        .map(|p| balloon(b"password", &lane_salt(b"salt", p), 4, 2, 3).unwrap())
        .collect();

    let mut combined = [0u8; 32];
    for lane in &lanes {
        for (acc, byte) in combined.iter_mut().zip(lane) {
            *acc ^= byte;
        }
    }

    assert_eq!(
        balloon_m(b"password", b"salt", 4, 2, 3, 3).unwrap(),
        finalise(b"password", b"salt", &combined)
    );
}

#[test]
fn combine_order_does_not_matter() {
    let lanes: Vec<[u8; 32]> = (0..4)
        .map(|p| balloon(b"p", &lane_salt(b"s", p), 3, 2, 3).unwrap())
        .collect();

    let mut forward = [0u8; 32];
    for lane in lanes.iter() {
        for (acc, byte) in forward.iter_mut().zip(lane) {
            *acc ^= byte;
        }
    }
    let mut backward = [0u8; 32];
    for lane in lanes.iter().rev() {
        for (acc, byte) in backward.iter_mut().zip(lane) {
            *acc ^= byte;
        }
    }
    assert_eq!(forward, backward);
}

#[test]
fn lane_salts_are_distinct_per_lane() {
    // Lane 0 of a 2-lane run must not collide with the plain salt or with
    // lane 1; the one-based LE8 suffix keeps the lane inputs disjoint.
    assert_ne!(lane_salt(b"salt", 0), b"salt".to_vec());
    assert_ne!(lane_salt(b"salt", 0), lane_salt(b"salt", 1));
}

#[test]
fn m_core_differs_from_single_core() {
    let single = balloon(b"password", b"salt", 4, 3, 3).unwrap();
    let m = balloon_m(b"password", b"salt", 4, 3, 1, 3).unwrap();
    assert_ne!(single, m);
}
