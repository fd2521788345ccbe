//! Options for strict/lenient loading of `.resx` documents.

/// Load behavior options for [`crate::ResourceDocument`] loading APIs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadOptions {
    /// Rejects `data` elements without a `name` attribute instead of skipping them.
    pub strict: bool,
}

impl LoadOptions {
    /// Creates default (lenient) load options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
