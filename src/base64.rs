//! Standard (padded) base64 for envelope byte fields.

use base64ct::{Base64, Encoding};

use crate::error::CryptoError;

/// Encode bytes as standard base64 with padding.
pub fn base64_encode(data: &[u8]) -> String {
    Base64::encode_string(data)
}

/// Decode standard base64 with padding.
pub fn base64_decode(data: &str) -> Result<Vec<u8>, CryptoError> {
    Base64::decode_vec(data).map_err(|e| CryptoError::Decode(format!("invalid base64: {}", e)))
}

/// Serde adapter: `Vec<u8>` as a base64 string.
pub(crate) mod base64_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{base64_decode, base64_encode};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&base64_encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        base64_decode(&text).map_err(serde::de::Error::custom)
    }
}
