use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Kind of JSON value, as expected by the schema or found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a value inside the feed document, e.g. `items[2]._microfeed.web_url`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, key: &str) -> Self {
        self.with(PathSegment::Key(key.to_string()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.with(PathSegment::Index(index))
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    fn with(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// First structural mismatch found while validating a feed document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("missing required field `{path}` (expected {expected})")]
    Missing { path: FieldPath, expected: JsonKind },
    #[error("field `{path}` has the wrong kind: expected {expected}, found {found}")]
    WrongKind {
        path: FieldPath,
        expected: JsonKind,
        found: JsonKind,
    },
    #[error("duplicate episode id `{id}` at `{path}`")]
    DuplicateId { path: FieldPath, id: String },
}

impl SchemaViolation {
    pub fn path(&self) -> &FieldPath {
        match self {
            SchemaViolation::Missing { path, .. }
            | SchemaViolation::WrongKind { path, .. }
            | SchemaViolation::DuplicateId { path, .. } => path,
        }
    }

    /// The kind the schema asked for; `None` for uniqueness violations.
    pub fn expected(&self) -> Option<JsonKind> {
        match self {
            SchemaViolation::Missing { expected, .. }
            | SchemaViolation::WrongKind { expected, .. } => Some(*expected),
            SchemaViolation::DuplicateId { .. } => None,
        }
    }
}
