use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body is not valid {encoding} text")]
    InvalidText { encoding: String },
    #[error("response body is not valid JSON: {message}")]
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },
}

/// Decode a response body into a JSON value.
///
/// A UTF-8 or UTF-16 byte order mark selects the encoding; without one the
/// body must be UTF-8. No replacement characters are substituted.
pub fn decode_json(bytes: &[u8]) -> Result<Value, DecodeError> {
    let text = decode_text(bytes)?;
    serde_json::from_str(&text).map_err(|err| DecodeError::InvalidJson {
        line: err.line(),
        column: err.column(),
        message: err.to_string(),
    })
}

fn decode_text(bytes: &[u8]) -> Result<Cow<'_, str>, DecodeError> {
    match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => decode_with(&bytes[bom_len..], encoding),
        None => decode_with(bytes, UTF_8),
    }
}

fn decode_with<'a>(bytes: &'a [u8], enc: &'static Encoding) -> Result<Cow<'a, str>, DecodeError> {
    enc.decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| DecodeError::InvalidText {
            encoding: enc.name().to_string(),
        })
}
