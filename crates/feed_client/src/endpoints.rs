use url::Url;

use crate::FeedError;

/// Origin of the publisher this client reads from.
pub const DEFAULT_FEED_BASE: &str = "https://feed.c1xpod.com";

/// URLs of the collection and single-item documents under a feed base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEndpoints {
    base: Url,
}

impl FeedEndpoints {
    pub fn new(base: &str) -> Result<Self, FeedError> {
        let parsed = Url::parse(base).map_err(|err| FeedError::InvalidBaseUrl {
            url: base.to_string(),
            reason: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(FeedError::InvalidBaseUrl {
                url: base.to_string(),
                reason: "url cannot carry a path".to_string(),
            });
        }
        Ok(Self { base: parsed })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/json`
    pub fn collection(&self) -> Url {
        self.with_segments(&["json"])
    }

    /// `{base}/i/{id}/json`; `id` is sent as one percent-encoded segment.
    pub fn item(&self, id: &str) -> Url {
        self.with_segments(&["i", id, "json"])
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        // Cannot fail: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
