//! Size-capped decoding of exactly one JSON value.
//!
//! A body is accepted only when it holds a single JSON value (object, array,
//! or scalar) optionally surrounded by whitespace. Anything after the first
//! value is rejected with [`JsonError::MultipleValues`], even when the first
//! value alone would have decoded cleanly.

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::error::JsonError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of request body bytes read before decoding is abandoned.
pub const MAX_BODY_BYTES: usize = 1_048_576;

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Read at most `limit` bytes from `reader`.
///
/// One byte past the limit is requested so an oversized body is detected
/// without draining the rest of the stream.
pub fn read_limited<R: Read>(reader: R, limit: usize) -> Result<Vec<u8>, JsonError> {
    let mut buf = Vec::new();
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    reader.take(cap).read_to_end(&mut buf)?;

    if buf.len() > limit {
        return Err(JsonError::BodyTooLarge { limit });
    }
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode exactly one JSON value from an in-memory body.
pub fn decode_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, JsonError> {
    if bytes.iter().all(|b| is_json_whitespace(*b)) {
        return Err(JsonError::EmptyBody);
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = T::deserialize(&mut de).map_err(JsonError::from_decode)?;

    // Only whitespace may follow the first value.
    de.end().map_err(|_| JsonError::MultipleValues)?;

    Ok(value)
}

/// Read up to `limit` bytes from `reader` and decode exactly one JSON value.
///
/// The reader is consumed; on failure nothing about its position is
/// guaranteed.
pub fn decode_single<T, R>(reader: R, limit: usize) -> Result<T, JsonError>
where
    T: DeserializeOwned,
    R: Read,
{
    let bytes = read_limited(reader, limit)?;
    decode_slice(&bytes)
}

fn is_json_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
