//! Envelope JSON encode/decode for the storage boundary.

use crate::error::CryptoError;
use crate::types::Envelope;

/// Encode an Envelope as the stored JSON record.
pub fn encode_envelope(envelope: &Envelope) -> Result<String, CryptoError> {
    serde_json::to_string(envelope).map_err(|e| CryptoError::Encode(format!("{}", e)))
}

/// Decode the stored JSON record into an Envelope.
pub fn decode_envelope(data: &str) -> Result<Envelope, CryptoError> {
    serde_json::from_str(data).map_err(|e| CryptoError::Decode(format!("{}", e)))
}
