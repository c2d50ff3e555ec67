//! Feed client: HTTP fetch, body decoding and validation of publisher feeds.
mod client;
mod decode;
mod endpoints;
mod fetch;
mod types;

pub use client::FeedClient;
pub use decode::{decode_json, DecodeError};
pub use endpoints::{FeedEndpoints, DEFAULT_FEED_BASE};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{FeedError, FetchMetadata, FetchOutput, TransportError, TransportKind};
