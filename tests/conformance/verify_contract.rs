//! Verify round-trip and rejection invariants.

use balloon_core::encoding::to_hex;
use balloon_core::{balloon, balloon_m, verify, verify_m, BalloonError};

#[test]
fn every_digest_round_trips() {
    for (space, time, delta) in [(1, 1, 1), (2, 1, 3), (5, 3, 2), (16, 2, 4)] {
        let hex = to_hex(&balloon(b"pw", b"na", space, time, delta).unwrap());
        assert!(
            verify(&hex, b"pw", b"na", space, time, delta).unwrap(),
            "round trip failed for ({space}, {time}, {delta})"
        );
    }
}

#[test]
fn m_core_digest_round_trips() {
    let hex = to_hex(&balloon_m(b"pw", b"na", 4, 2, 3, 3).unwrap());
    assert!(verify_m(&hex, b"pw", b"na", 4, 2, 3, 3).unwrap());
}

#[test]
fn any_single_nibble_flip_rejected() {
    let hex = to_hex(&balloon(b"pw", b"na", 3, 2, 3).unwrap());
    for pos in [0, 17, 63] {
        let mut tampered: Vec<char> = hex.chars().collect();
        tampered[pos] = if tampered[pos] == 'f' { 'e' } else { 'f' };
        let tampered: String = tampered.into_iter().collect();
        assert!(
            !verify(&tampered, b"pw", b"na", 3, 2, 3).unwrap(),
            "flip at {pos} not rejected"
        );
    }
}

#[test]
fn cross_parameter_digests_rejected() {
    let hex = to_hex(&balloon(b"pw", b"na", 3, 2, 3).unwrap());
    assert!(!verify(&hex, b"pw", b"na", 3, 3, 3).unwrap());
    assert!(!verify(&hex, b"pW", b"na", 3, 2, 3).unwrap());
    assert!(!verify(&hex, b"pw", b"nb", 3, 2, 3).unwrap());
}

#[test]
fn single_core_digest_fails_m_core_verify() {
    let hex = to_hex(&balloon(b"pw", b"na", 3, 2, 3).unwrap());
    assert!(!verify_m(&hex, b"pw", b"na", 3, 2, 1, 3).unwrap());
}

#[test]
fn zero_parameters_are_errors_not_false() {
    for result in [
        verify("00", b"pw", b"na", 0, 1, 1),
        verify("00", b"pw", b"na", 1, 0, 1),
        verify("00", b"pw", b"na", 1, 1, 0),
        verify_m("00", b"pw", b"na", 1, 1, 0, 1),
    ] {
        assert!(matches!(result, Err(BalloonError::InvalidParameter(_))));
    }
}
