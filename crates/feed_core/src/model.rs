use chrono::{DateTime, FixedOffset};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feed {
    pub version: String,
    pub title: String,
    pub home_page_url: String,
    pub feed_url: String,
    pub description: String,
    pub icon: String,
    pub favicon: String,
    pub authors: Vec<Author>,
    pub language: String,
    /// Episodes in the publisher's declared order.
    pub items: Vec<Episode>,
    #[serde(rename = "_microfeed")]
    pub extension: FeedExtension,
}

impl Feed {
    pub fn episode(&self, id: &str) -> Option<&Episode> {
        self.items.iter().find(|episode| episode.id == id)
    }

    pub fn into_episodes(self) -> Vec<Episode> {
        self.items
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedExtension {
    pub microfeed_version: String,
    pub base_url: String,
    pub categories: Vec<Category>,
    pub subscribe_methods: Vec<SubscribeMethod>,
    pub description_text: String,
    #[serde(rename = "itunes:title")]
    pub itunes_title: String,
    pub copyright: String,
    #[serde(rename = "itunes:type")]
    pub itunes_type: String,
    pub items_sort_order: String,
}

/// A node of the category tree. Nesting stops at one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Category {
    Group {
        name: String,
        categories: Vec<LeafCategory>,
    },
    Leaf {
        name: String,
    },
}

impl Category {
    pub fn name(&self) -> &str {
        match self {
            Category::Group { name, .. } | Category::Leaf { name } => name,
        }
    }

    pub fn children(&self) -> &[LeafCategory] {
        match self {
            Category::Group { categories, .. } => categories,
            Category::Leaf { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafCategory {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscribeMethod {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub image: String,
    pub enabled: bool,
    pub editable: bool,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub attachments: Vec<Attachment>,
    pub url: String,
    pub content_html: String,
    pub content_text: String,
    pub date_published: String,
    #[serde(rename = "_microfeed")]
    pub extension: EpisodeExtension,
}

impl Episode {
    /// Publication time, if `date_published` is RFC 3339.
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.date_published.trim()).ok()
    }

    /// First paragraph of the plain-text body.
    pub fn summary(&self) -> &str {
        self.content_text
            .split("\n\n")
            .next()
            .unwrap_or_default()
            .trim()
    }

    pub fn primary_attachment(&self) -> Option<&Attachment> {
        self.attachments.first()
    }

    /// The `v=` query value of the episode's YouTube URL.
    pub fn youtube_video_id(&self) -> Option<&str> {
        let url = self.extension.youtube_url.as_deref()?;
        let (_, rest) = url.split_once("v=")?;
        let id = rest.split('&').next().unwrap_or(rest);
        (!id.is_empty()).then_some(id)
    }
}

/// Numeric fields are `f64`: publishers emit fractional durations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub url: String,
    pub mime_type: String,
    #[serde(rename = "size_in_byte")]
    pub size_in_bytes: f64,
    pub duration_in_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeExtension {
    pub is_audio: bool,
    pub is_document: bool,
    pub is_external_url: bool,
    pub is_video: bool,
    pub is_image: bool,
    /// Canonical page for the episode; slugs are derived from its path.
    pub web_url: String,
    pub json_url: String,
    pub rss_url: String,
    pub guid: String,
    pub status: String,
    pub duration_hhmmss: String,
    #[serde(rename = "itunes:title", skip_serializing_if = "Option::is_none")]
    pub itunes_title: Option<String>,
    #[serde(rename = "itunes:episodeType", skip_serializing_if = "Option::is_none")]
    pub itunes_episode_type: Option<String>,
    #[serde(rename = "itunes:episode", skip_serializing_if = "Option::is_none")]
    pub itunes_episode: Option<f64>,
    #[serde(rename = "itunes:explicit", skip_serializing_if = "Option::is_none")]
    pub itunes_explicit: Option<bool>,
    #[serde(rename = "spotify:url", skip_serializing_if = "Option::is_none")]
    pub spotify_url: Option<String>,
    #[serde(rename = "youtube:url", skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    pub date_published_short: String,
    pub date_published_ms: f64,
}
