//! Integration tests across the public API and the stored JSON boundary.

use notelock::{
    base64_decode, decode_envelope, encode_envelope, open, seal, CryptoError,
    AES_GCM_IV_LENGTH, DEFAULT_ITERATIONS, SALT_LENGTH,
};
use serde_json::Value;

// ============================================================================
// Helpers
// ============================================================================

/// Replace one top-level field in an encoded envelope.
fn mutate_field(encoded: &str, field: &str, value: Value) -> String {
    let mut record: Value = serde_json::from_str(encoded).unwrap();
    record[field] = value;
    serde_json::to_string(&record).unwrap()
}

/// Flip one byte inside a base64-encoded field of an encoded envelope.
fn flip_byte_in_field(encoded: &str, field: &str, index: usize) -> String {
    let record: Value = serde_json::from_str(encoded).unwrap();
    let mut bytes = base64_decode(record[field].as_str().unwrap()).unwrap();
    bytes[index] ^= 0x01;
    mutate_field(
        encoded,
        field,
        Value::String(notelock::base64_encode(&bytes)),
    )
}

// ============================================================================
// Concrete scenario
// ============================================================================

#[test]
fn seal_then_open_hello_world() {
    let envelope = seal("correct-password", "hello world").unwrap();

    assert_eq!(envelope.version, 1);
    assert_eq!(envelope.salt.len(), SALT_LENGTH);
    assert_eq!(envelope.iv.len(), AES_GCM_IV_LENGTH);
    assert!(!envelope.ciphertext.is_empty());
    assert_eq!(envelope.iterations, DEFAULT_ITERATIONS);

    assert_eq!(open("correct-password", &envelope).unwrap(), "hello world");
    assert!(matches!(
        open("wrong-password", &envelope).unwrap_err(),
        CryptoError::DecryptionFailed
    ));
}

// ============================================================================
// Stored JSON boundary
// ============================================================================

#[test]
fn stored_record_round_trips_byte_for_byte() {
    let envelope = seal("password", "a note worth keeping").unwrap();
    let encoded = encode_envelope(&envelope).unwrap();
    let decoded = decode_envelope(&encoded).unwrap();
    assert_eq!(decoded, envelope);
    assert_eq!(open("password", &decoded).unwrap(), "a note worth keeping");
}

#[test]
fn stored_record_has_wire_field_names() {
    let envelope = seal("password", "note").unwrap();
    let record: Value = serde_json::from_str(&encode_envelope(&envelope).unwrap()).unwrap();

    assert_eq!(record["version"], 1);
    assert_eq!(record["iterations"], DEFAULT_ITERATIONS);
    let salt = base64_decode(record["salt"].as_str().unwrap()).unwrap();
    let iv = base64_decode(record["iv"].as_str().unwrap()).unwrap();
    assert_eq!(salt.len(), SALT_LENGTH);
    assert_eq!(iv.len(), AES_GCM_IV_LENGTH);
}

#[test]
fn legacy_record_without_iterations_opens() {
    let envelope = seal("password", "legacy note").unwrap();
    // DEFAULT_ITERATIONS envelopes predate the stored field; dropping it
    // must decode to the same work factor.
    let mut record: Value =
        serde_json::from_str(&encode_envelope(&envelope).unwrap()).unwrap();
    record.as_object_mut().unwrap().remove("iterations");

    let decoded = decode_envelope(&serde_json::to_string(&record).unwrap()).unwrap();
    assert_eq!(decoded.iterations, DEFAULT_ITERATIONS);
    assert_eq!(open("password", &decoded).unwrap(), "legacy note");
}

// ============================================================================
// Tampering through the stored form
// ============================================================================

#[test]
fn flipped_ciphertext_byte_fails_to_open() {
    let envelope = seal("password", "secret").unwrap();
    let encoded = encode_envelope(&envelope).unwrap();
    let tampered = flip_byte_in_field(&encoded, "ciphertext", 0);
    let decoded = decode_envelope(&tampered).unwrap();
    assert!(matches!(
        open("password", &decoded).unwrap_err(),
        CryptoError::DecryptionFailed
    ));
}

#[test]
fn flipped_iv_byte_fails_to_open() {
    let envelope = seal("password", "secret").unwrap();
    let encoded = encode_envelope(&envelope).unwrap();
    let tampered = flip_byte_in_field(&encoded, "iv", 3);
    let decoded = decode_envelope(&tampered).unwrap();
    assert!(matches!(
        open("password", &decoded).unwrap_err(),
        CryptoError::DecryptionFailed
    ));
}

#[test]
fn flipped_salt_byte_fails_to_open() {
    let envelope = seal("password", "secret").unwrap();
    let encoded = encode_envelope(&envelope).unwrap();
    let tampered = flip_byte_in_field(&encoded, "salt", 7);
    let decoded = decode_envelope(&tampered).unwrap();
    assert!(matches!(
        open("password", &decoded).unwrap_err(),
        CryptoError::DecryptionFailed
    ));
}

#[test]
fn unknown_version_is_rejected_before_decryption() {
    let envelope = seal("password", "secret").unwrap();
    let encoded = encode_envelope(&envelope).unwrap();
    let bumped = mutate_field(&encoded, "version", Value::from(2));
    let decoded = decode_envelope(&bumped).unwrap();
    assert!(matches!(
        open("password", &decoded).unwrap_err(),
        CryptoError::UnsupportedVersion(2)
    ));
}

#[test]
fn altered_iterations_fails_authentication() {
    // The stored count feeds key derivation, so rewriting it yields a
    // different key and the tag no longer verifies.
    let envelope = seal("password", "secret").unwrap();
    let encoded = encode_envelope(&envelope).unwrap();
    let altered = mutate_field(&encoded, "iterations", Value::from(100_000));
    let decoded = decode_envelope(&altered).unwrap();
    assert!(matches!(
        open("password", &decoded).unwrap_err(),
        CryptoError::DecryptionFailed
    ));
}
