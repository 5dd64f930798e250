//! Envelope record and format constants.

use serde::{Deserialize, Serialize};

use crate::base64::base64_bytes;

/// AES-256 key size in bytes.
pub const AES_KEY_LENGTH: usize = 32;

/// AES-GCM nonce size in bytes.
pub const AES_GCM_IV_LENGTH: usize = 12;

/// AES-GCM authentication tag size in bytes.
pub const AES_GCM_TAG_LENGTH: usize = 16;

/// Key-derivation salt size in bytes.
pub const SALT_LENGTH: usize = 16;

/// PBKDF2 iteration count used for new envelopes.
///
/// Raising this affects new seals only; existing envelopes open with the
/// count recorded in their `iterations` field.
pub const DEFAULT_ITERATIONS: u32 = 200_000;

/// Envelope format version written by `seal`.
pub const CURRENT_VERSION: u32 = 1;

/// Envelope format versions this codec can open.
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// A sealed note: everything needed to attempt decryption except the password.
///
/// Byte fields cross the text boundary as standard (padded) base64. The
/// record is handed to the storage layer as-is; this crate never persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Format version, currently always 1.
    pub version: u32,
    /// Per-encryption random KDF salt, 16 bytes.
    #[serde(with = "base64_bytes")]
    pub salt: Vec<u8>,
    /// Per-encryption random AES-GCM nonce, 12 bytes.
    #[serde(with = "base64_bytes")]
    pub iv: Vec<u8>,
    /// Cipher output with the 16-byte GCM tag appended.
    #[serde(with = "base64_bytes")]
    pub ciphertext: Vec<u8>,
    /// PBKDF2 work factor recorded at seal time. Envelopes written before
    /// this field existed decode with the 200,000 default.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}
