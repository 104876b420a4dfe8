//! Tests for the format validator

use ds2save::format::{is_valid, MAGIC};

#[test]
fn test_exact_signature_is_valid() {
    assert!(is_valid(&MAGIC));
    assert!(is_valid(&[0x44, 0x65, 0x76, 0x69, 0x00, 0xFF]));
}

#[test]
fn test_short_buffers_are_invalid() {
    assert!(!is_valid(&[]));
    assert!(!is_valid(&[0x44]));
    assert!(!is_valid(&[0x44, 0x65, 0x76]));
}

#[test]
fn test_single_bit_flip_is_invalid() {
    for byte in 0..4 {
        for bit in 0..8 {
            let mut buf = MAGIC.to_vec();
            buf.extend_from_slice(&[0u8; 16]);
            buf[byte] ^= 1 << bit;
            assert!(!is_valid(&buf), "byte {byte} bit {bit}");
        }
    }
}

#[test]
fn test_signature_must_be_at_start() {
    let mut buf = vec![0u8];
    buf.extend_from_slice(&MAGIC);
    assert!(!is_valid(&buf));
}
