use std::fmt;

use feed_core::SchemaViolation;

use crate::decode::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

/// The request did not produce a usable response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportKind {
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::HttpStatus(code) => write!(f, "http status {code}"),
            TransportKind::Timeout => write!(f, "timeout"),
            TransportKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            TransportKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            TransportKind::Network => write!(f, "network error"),
        }
    }
}

/// Every way a feed lookup can fail. An empty single-item lookup is not an
/// error; see `FeedClient::get_episode`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("schema violation: {0}")]
    Schema(#[from] SchemaViolation),
    #[error("invalid feed base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl FeedError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FeedError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FeedError::Decode(_))
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, FeedError::Schema(_))
    }

    pub fn transport_kind(&self) -> Option<&TransportKind> {
        match self {
            FeedError::Transport(err) => Some(&err.kind),
            _ => None,
        }
    }
}
