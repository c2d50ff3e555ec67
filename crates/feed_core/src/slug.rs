use url::Url;

use crate::model::Episode;

/// Display slug for an episode: the last non-empty path segment of its web URL.
///
/// Falls back to the episode id when the URL does not parse or has no path
/// segments. Derived on every call so it always tracks the publisher's URL.
pub fn slug_for(episode: &Episode) -> String {
    Url::parse(&episode.extension.web_url)
        .ok()
        .and_then(|url| last_path_segment(&url))
        .unwrap_or_else(|| episode.id.clone())
}

/// Recover an episode id from a slug by taking its last `-`-separated token.
///
/// This is only the inverse of [`slug_for`] when the publisher appends the id
/// as the final token of the slug and the id contains no `-`. Callers that
/// need exact matches for hyphenated ids should compare derived slugs
/// instead.
pub fn id_from_slug(slug: &str) -> &str {
    slug.rsplit('-').next().unwrap_or(slug)
}

/// Whether `slug` is the slug currently derived for `episode`.
pub fn matches_slug(episode: &Episode, slug: &str) -> bool {
    slug_for(episode) == slug
}

fn last_path_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .rfind(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
}
