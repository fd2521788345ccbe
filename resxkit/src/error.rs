//! All error types for the resxkit crate.
//!
//! These are returned from the fallible operations (loading, saving, merging hints, sorting).
//! A target document that cannot be loaded is *not* an error for the collectors, see
//! [`crate::collect::TargetDocument`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("invalid hint #{index}: {reason}")]
    InvalidHint { index: usize, reason: String },

    #[error("malformed file reference in `{name}`: `{value}` (expected `path;type[;...]`)")]
    MalformedFileReference { name: String, value: String },

    #[error("invalid culture `{0}`")]
    InvalidCulture(String),
}

impl Error {
    /// Creates a new hint error for the hint at `index` (zero based, document order).
    pub fn invalid_hint(index: usize, reason: impl Into<String>) -> Self {
        Error::InvalidHint {
            index,
            reason: reason.into(),
        }
    }
}
