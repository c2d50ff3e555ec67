use feed_core::{matches_slug, validate_feed, Episode, Feed};
use feed_logging::{feed_debug, feed_info, feed_warn};
use url::Url;

use crate::decode::decode_json;
use crate::endpoints::FeedEndpoints;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::FeedError;

/// Read-only client for a publisher's JSON feed.
///
/// Every call is a single uncached round trip; nothing is retried.
#[derive(Debug, Clone)]
pub struct FeedClient<F = ReqwestFetcher> {
    endpoints: FeedEndpoints,
    fetcher: F,
}

impl FeedClient<ReqwestFetcher> {
    pub fn new(feed_base: &str, settings: FetchSettings) -> Result<Self, FeedError> {
        let endpoints = FeedEndpoints::new(feed_base)?;
        Ok(Self::with_fetcher(endpoints, ReqwestFetcher::new(settings)))
    }
}

impl<F: Fetcher> FeedClient<F> {
    pub fn with_fetcher(endpoints: FeedEndpoints, fetcher: F) -> Self {
        Self { endpoints, fetcher }
    }

    pub fn endpoints(&self) -> &FeedEndpoints {
        &self.endpoints
    }

    /// The whole validated collection document.
    pub async fn get_feed(&self) -> Result<Feed, FeedError> {
        self.load(&self.endpoints.collection()).await
    }

    /// All episodes, in the order the publisher listed them.
    pub async fn get_episodes(&self) -> Result<Vec<Episode>, FeedError> {
        Ok(self.get_feed().await?.into_episodes())
    }

    /// A single episode by publisher id.
    ///
    /// `Ok(None)` means the publisher returned no items for `id`; it is not
    /// an error.
    pub async fn get_episode(&self, id: &str) -> Result<Option<Episode>, FeedError> {
        let feed = self.load(&self.endpoints.item(id)).await?;
        if feed.items.len() > 1 {
            feed_debug!(
                "single-item lookup for {id:?} returned {} items; using the first",
                feed.items.len()
            );
        }
        Ok(feed.into_episodes().into_iter().next())
    }

    /// Scan the collection for the episode whose derived slug equals `slug`.
    ///
    /// Unlike `id_from_slug` followed by `get_episode`, this is exact for ids
    /// containing `-`, at the cost of downloading the whole feed.
    pub async fn find_episode_by_slug(&self, slug: &str) -> Result<Option<Episode>, FeedError> {
        let episodes = self.get_episodes().await?;
        Ok(episodes
            .into_iter()
            .find(|episode| matches_slug(episode, slug)))
    }

    async fn load(&self, url: &Url) -> Result<Feed, FeedError> {
        feed_debug!("GET {url}");
        let output = self.fetcher.fetch(url).await.inspect_err(|err| {
            feed_warn!("fetching {url} failed: {err}");
        })?;
        feed_debug!(
            "received {} bytes from {} ({} redirects, content type {:?})",
            output.metadata.byte_len,
            output.metadata.final_url,
            output.metadata.redirect_count,
            output.metadata.content_type
        );

        let json = decode_json(&output.bytes).inspect_err(|err| {
            feed_warn!("body from {url} is not JSON: {err}");
        })?;
        let feed = validate_feed(&json).inspect_err(|err| {
            feed_warn!("feed from {url} failed validation: {err}");
        })?;

        feed_info!("loaded {} episode(s) from {url}", feed.items.len());
        Ok(feed)
    }
}
