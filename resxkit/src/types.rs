//! Core document types for resxkit.
//! Loaders decode into these; the diff/merge/sort operations work on them in memory.

use std::fmt::Display;

use serde::Serialize;

use crate::error::Error;

/// Comment token that excludes an entry from translation.
pub const SKIP_TOKEN: &str = "!SKIP";

/// Comment token that forces an entry into the new-strings diff.
pub const EDIT_TOKEN: &str = "!EDIT";

/// One localization file (corresponds to a `.resx` document).
///
/// `entries` are the `data` children of the document root, in document order.
/// Every other root child is kept verbatim in `headers` so a loaded document can be
/// written back without losing its schema and `resheader` blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ResourceDocument {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,

    pub entries: Vec<ResourceEntry>,
}

impl ResourceDocument {
    pub fn new(entries: Vec<ResourceEntry>) -> Self {
        Self {
            headers: Vec::new(),
            entries,
        }
    }

    /// Returns the first entry named `name`. Duplicate names are not an error; the first one wins.
    pub fn find_entry(&self, name: &str) -> Option<&ResourceEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries carrying the whitespace marker and no type: the usual input of the collectors.
    pub fn candidate_strings(&self) -> impl Iterator<Item = &ResourceEntry> {
        self.entries
            .iter()
            .filter(|e| crate::classify::is_candidate_string(e))
    }

    /// Entries classified as translatable strings.
    pub fn translatable_strings(&self) -> impl Iterator<Item = &ResourceEntry> {
        self.entries
            .iter()
            .filter(|e| crate::classify::is_translatable_string(e))
    }
}

/// A non-entry child of the document root (`resheader`, `assembly`, `metadata`, schema,
/// comments), stored as the raw XML it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub raw: String,
}

/// Whether an entry is plain text or a typed (non-string) resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// No `type` attribute.
    String,

    /// A `type` attribute is present; holds its value (e.g. a `ResXFileRef` type name).
    Typed(String),
}

impl EntryKind {
    pub fn is_typed(&self) -> bool {
        matches!(self, EntryKind::Typed(_))
    }
}

/// Control tokens found in an entry comment.
///
/// Matching is an ASCII case-insensitive substring search, so `"reviewed, !edit later"`
/// sets `edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ControlTokens {
    pub skip: bool,
    pub edit: bool,
}

impl ControlTokens {
    pub fn parse(comment: &str) -> Self {
        let upper = comment.to_ascii_uppercase();
        ControlTokens {
            skip: upper.contains(SKIP_TOKEN),
            edit: upper.contains(EDIT_TOKEN),
        }
    }
}

/// A single localizable unit of a [`ResourceDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    /// Key of the entry. Unique by convention, never enforced.
    pub name: String,

    /// Raw value of the whitespace-preserve attribute. Its presence is what matters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,

    pub kind: EntryKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Content of the entry; `path;type[;...]` for typed file references.
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,

    #[serde(skip)]
    tokens: ControlTokens,
}

impl ResourceEntry {
    /// Creates an entry with no value, comment or whitespace marker.
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            space: None,
            kind,
            mime_type: None,
            value: None,
            comment: None,
            tokens: ControlTokens::default(),
        }
    }

    /// Creates a plain string entry with `xml:space="preserve"`.
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            space: Some("preserve".to_string()),
            kind: EntryKind::String,
            mime_type: None,
            value: Some(value.into()),
            comment: None,
            tokens: ControlTokens::default(),
        }
    }

    /// Creates a typed entry, e.g. a file reference whose value is `path;type`.
    pub fn typed(
        name: impl Into<String>,
        type_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            space: None,
            kind: EntryKind::Typed(type_name.into()),
            mime_type: None,
            value: Some(value.into()),
            comment: None,
            tokens: ControlTokens::default(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.set_comment(Some(comment.into()));
        self
    }

    pub fn with_space(mut self, space: Option<String>) -> Self {
        self.space = space;
        self
    }

    pub fn with_value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Replaces the comment and re-reads its control tokens.
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.tokens = comment
            .as_deref()
            .map(ControlTokens::parse)
            .unwrap_or_default();
        self.comment = comment;
    }

    pub fn tokens(&self) -> ControlTokens {
        self.tokens
    }

    pub fn preserves_space(&self) -> bool {
        self.space.is_some()
    }

    pub fn is_typed(&self) -> bool {
        self.kind.is_typed()
    }

    /// The value, with an absent value read as empty.
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    /// Parses the `path;type` value of a typed entry. Returns `None` for plain strings.
    pub fn file_reference(&self) -> Result<Option<FileReference<'_>>, Error> {
        if !self.is_typed() {
            return Ok(None);
        }
        FileReference::parse(&self.name, self.value_or_empty()).map(Some)
    }
}

impl Display for ResourceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ResourceEntry {{ name: {}, value: {}, kind: {:?} }}",
            self.name,
            self.value_or_empty(),
            self.kind
        )
    }
}

/// The `path;type[;...]` encoding used by typed file-reference values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileReference<'a> {
    /// Field 0.
    pub path: &'a str,
    /// Field 1.
    pub type_name: &'a str,
}

impl<'a> FileReference<'a> {
    /// Splits `value` on `;`. Fewer than two fields is an error naming the entry.
    pub fn parse(name: &str, value: &'a str) -> Result<Self, Error> {
        let mut fields = value.split(';');
        match (fields.next(), fields.next()) {
            (Some(path), Some(type_name)) => Ok(FileReference { path, type_name }),
            _ => Err(Error::MalformedFileReference {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

/// A separately supplied set of preferred translations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HintsDocument {
    pub hints: Vec<Hint>,
}

/// One hint: the `name` of the entry to correct and its `preferred` value.
///
/// Both parts are optional here so a malformed hints file still loads; they are
/// required when the hints are merged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Hint {
    pub name: Option<String>,
    pub preferred: Option<String>,
}

impl Hint {
    pub fn new(name: impl Into<String>, preferred: impl Into<String>) -> Self {
        Hint {
            name: Some(name.into()),
            preferred: Some(preferred.into()),
        }
    }
}
