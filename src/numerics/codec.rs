// src/numerics/codec.rs
// Binary encoding of numerics types through serde + bincode.

use bincode::config;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Errors raised while encoding or decoding numerics values.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Encoding failed: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Decoding failed: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Trailing bytes: decoded {consumed} of {total} bytes")]
    TrailingBytes { consumed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;

/// Encode a value with bincode's standard configuration.
///
/// Vectors are written as tuples of their components and quaternions as
/// `(s, v)`, so a `Quaternion<f32>` is the same byte stream as a `[f32; 4]`.
pub fn to_bytes<V: Serialize>(value: &V) -> Result<Vec<u8>> {
    let bytes = bincode::serde::encode_to_vec(value, config::standard())?;
    tracing::debug!(len = bytes.len(), "encoded numerics value");
    Ok(bytes)
}

/// Decode a value previously written by [`to_bytes`].
///
/// The whole input must be consumed.
pub fn from_bytes<V: DeserializeOwned>(bytes: &[u8]) -> Result<V> {
    let (value, consumed) = bincode::serde::decode_from_slice(bytes, config::standard())?;
    if consumed != bytes.len() {
        return Err(CodecError::TrailingBytes {
            consumed,
            total: bytes.len(),
        });
    }
    tracing::debug!(len = consumed, "decoded numerics value");
    Ok(value)
}
