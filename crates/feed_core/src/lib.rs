//! Feed core: typed podcast feed model, schema validation and slug helpers.
mod error;
mod model;
mod slug;
mod validate;

pub use error::{FieldPath, JsonKind, PathSegment, SchemaViolation};
pub use model::{
    Attachment, Author, Category, Episode, EpisodeExtension, Feed, FeedExtension, LeafCategory,
    SubscribeMethod,
};
pub use slug::{id_from_slug, matches_slug, slug_for};
pub use validate::{validate_episode, validate_feed, EXTENSION_KEY, EXTENSION_KEY_ALIAS};
