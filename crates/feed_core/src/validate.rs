//! Structural validation of feed documents.
//!
//! Fields are checked in declaration order and the first mismatch is
//! reported. Unknown fields are ignored so publisher additions do not break
//! ingestion.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::{FieldPath, JsonKind, SchemaViolation};
use crate::model::{
    Attachment, Author, Category, Episode, EpisodeExtension, Feed, FeedExtension, LeafCategory,
    SubscribeMethod,
};

/// Key the publisher uses for its extension block.
pub const EXTENSION_KEY: &str = "_microfeed";
/// Alternate extension key, read when [`EXTENSION_KEY`] is absent.
pub const EXTENSION_KEY_ALIAS: &str = "_feed_ext";

type Result<T> = std::result::Result<T, SchemaViolation>;

/// Validate a whole feed document and build the typed [`Feed`].
pub fn validate_feed(json: &Value) -> Result<Feed> {
    let root = Object::at(json, FieldPath::root())?;

    let version = root.string("version")?;
    let title = root.string("title")?;
    let home_page_url = root.string("home_page_url")?;
    let feed_url = root.string("feed_url")?;
    let description = root.string("description")?;
    let icon = root.string("icon")?;
    let favicon = root.string("favicon")?;
    let authors = root.array("authors", |value, path| {
        let author = Object::at(value, path)?;
        Ok(Author {
            name: author.string("name")?,
        })
    })?;
    let language = root.string("language")?;
    let items = root.array("items", episode_at)?;
    ensure_unique_ids(&items, &root.path.key("items"))?;
    let extension = feed_extension(&root.extension()?)?;

    Ok(Feed {
        version,
        title,
        home_page_url,
        feed_url,
        description,
        icon,
        favicon,
        authors,
        language,
        items,
        extension,
    })
}

/// Validate a single feed item on its own.
pub fn validate_episode(json: &Value) -> Result<Episode> {
    episode_at(json, FieldPath::root())
}

fn episode_at(value: &Value, path: FieldPath) -> Result<Episode> {
    let item = Object::at(value, path)?;

    Ok(Episode {
        id: item.string("id")?,
        title: item.string("title")?,
        attachments: item.array("attachments", attachment_at)?,
        url: item.string("url")?,
        content_html: item.string("content_html")?,
        content_text: item.string("content_text")?,
        date_published: item.string("date_published")?,
        extension: episode_extension(&item.extension()?)?,
    })
}

fn attachment_at(value: &Value, path: FieldPath) -> Result<Attachment> {
    let attachment = Object::at(value, path)?;

    Ok(Attachment {
        url: attachment.string("url")?,
        mime_type: attachment.string("mime_type")?,
        size_in_bytes: attachment.number("size_in_byte")?,
        duration_in_seconds: attachment.number("duration_in_seconds")?,
    })
}

fn episode_extension(ext: &Object<'_>) -> Result<EpisodeExtension> {
    Ok(EpisodeExtension {
        is_audio: ext.boolean("is_audio")?,
        is_document: ext.boolean("is_document")?,
        is_external_url: ext.boolean("is_external_url")?,
        is_video: ext.boolean("is_video")?,
        is_image: ext.boolean("is_image")?,
        web_url: ext.string("web_url")?,
        json_url: ext.string("json_url")?,
        rss_url: ext.string("rss_url")?,
        guid: ext.string("guid")?,
        status: ext.string("status")?,
        duration_hhmmss: ext.string("duration_hhmmss")?,
        itunes_title: ext.opt_string("itunes:title")?,
        itunes_episode_type: ext.opt_string("itunes:episodeType")?,
        itunes_episode: ext.opt_number("itunes:episode")?,
        itunes_explicit: ext.opt_boolean("itunes:explicit")?,
        spotify_url: ext.opt_string("spotify:url")?,
        youtube_url: ext.opt_string("youtube:url")?,
        date_published_short: ext.string("date_published_short")?,
        date_published_ms: ext.number("date_published_ms")?,
    })
}

fn feed_extension(ext: &Object<'_>) -> Result<FeedExtension> {
    Ok(FeedExtension {
        microfeed_version: ext.string("microfeed_version")?,
        base_url: ext.string("base_url")?,
        categories: ext.array("categories", category_at)?,
        subscribe_methods: ext.array("subscribe_methods", subscribe_method_at)?,
        description_text: ext.string("description_text")?,
        itunes_title: ext.string("itunes:title")?,
        copyright: ext.string("copyright")?,
        itunes_type: ext.string("itunes:type")?,
        items_sort_order: ext.string("items_sort_order")?,
    })
}

/// A node is a group when it carries a well-formed nested list; any other
/// node with a valid `name` is a leaf.
fn category_at(value: &Value, path: FieldPath) -> Result<Category> {
    let node = Object::at(value, path)?;
    let name = node.string("name")?;
    if !node.has("categories") {
        return Ok(Category::Leaf { name });
    }
    let nested = node.array("categories", |value, path| {
        let leaf = Object::at(value, path)?;
        Ok(LeafCategory {
            name: leaf.string("name")?,
        })
    });
    match nested {
        Ok(categories) => Ok(Category::Group { name, categories }),
        Err(_) => Ok(Category::Leaf { name }),
    }
}

fn subscribe_method_at(value: &Value, path: FieldPath) -> Result<SubscribeMethod> {
    let method = Object::at(value, path)?;

    Ok(SubscribeMethod {
        name: method.string("name")?,
        kind: method.string("type")?,
        url: method.string("url")?,
        image: method.string("image")?,
        enabled: method.boolean("enabled")?,
        editable: method.boolean("editable")?,
        id: method.string("id")?,
    })
}

fn ensure_unique_ids(items: &[Episode], items_path: &FieldPath) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for (index, episode) in items.iter().enumerate() {
        if !seen.insert(episode.id.as_str()) {
            return Err(SchemaViolation::DuplicateId {
                path: items_path.index(index).key("id"),
                id: episode.id.clone(),
            });
        }
    }
    Ok(())
}

/// A JSON object together with its location in the document.
struct Object<'a> {
    map: &'a Map<String, Value>,
    path: FieldPath,
}

impl<'a> Object<'a> {
    fn at(value: &'a Value, path: FieldPath) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => Err(SchemaViolation::WrongKind {
                path,
                expected: JsonKind::Object,
                found: JsonKind::of(other),
            }),
        }
    }

    fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    fn extension(&self) -> Result<Object<'a>> {
        let key = if self.has(EXTENSION_KEY) || !self.has(EXTENSION_KEY_ALIAS) {
            EXTENSION_KEY
        } else {
            EXTENSION_KEY_ALIAS
        };
        let value = self.required(key, JsonKind::Object)?;
        Object::at(value, self.path.key(key))
    }

    fn required(&self, key: &str, expected: JsonKind) -> Result<&'a Value> {
        self.map.get(key).ok_or_else(|| SchemaViolation::Missing {
            path: self.path.key(key),
            expected,
        })
    }

    /// Absent is `Ok(None)`; present but mismatched is an error.
    fn optional<T>(
        &self,
        key: &str,
        expected: JsonKind,
        extract: impl Fn(&'a Value) -> Option<T>,
    ) -> Result<Option<T>> {
        match self.map.get(key) {
            None => Ok(None),
            Some(value) => extract(value)
                .map(Some)
                .ok_or_else(|| self.wrong_kind(key, expected, value)),
        }
    }

    fn typed<T>(
        &self,
        key: &str,
        expected: JsonKind,
        extract: impl Fn(&'a Value) -> Option<T>,
    ) -> Result<T> {
        let value = self.required(key, expected)?;
        extract(value).ok_or_else(|| self.wrong_kind(key, expected, value))
    }

    fn wrong_kind(&self, key: &str, expected: JsonKind, value: &Value) -> SchemaViolation {
        SchemaViolation::WrongKind {
            path: self.path.key(key),
            expected,
            found: JsonKind::of(value),
        }
    }

    fn string(&self, key: &str) -> Result<String> {
        self.typed(key, JsonKind::String, as_string)
    }

    fn opt_string(&self, key: &str) -> Result<Option<String>> {
        self.optional(key, JsonKind::String, as_string)
    }

    fn boolean(&self, key: &str) -> Result<bool> {
        self.typed(key, JsonKind::Boolean, Value::as_bool)
    }

    fn opt_boolean(&self, key: &str) -> Result<Option<bool>> {
        self.optional(key, JsonKind::Boolean, Value::as_bool)
    }

    fn number(&self, key: &str) -> Result<f64> {
        self.typed(key, JsonKind::Number, Value::as_f64)
    }

    fn opt_number(&self, key: &str) -> Result<Option<f64>> {
        self.optional(key, JsonKind::Number, Value::as_f64)
    }

    fn array<T>(
        &self,
        key: &str,
        mut element: impl FnMut(&'a Value, FieldPath) -> Result<T>,
    ) -> Result<Vec<T>> {
        let value = self.required(key, JsonKind::Array)?;
        let Value::Array(values) = value else {
            return Err(self.wrong_kind(key, JsonKind::Array, value));
        };
        let path = self.path.key(key);
        values
            .iter()
            .enumerate()
            .map(|(index, value)| element(value, path.index(index)))
            .collect()
    }
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(ToOwned::to_owned)
}

