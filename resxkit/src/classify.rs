//! Entry classification: which entries are translatable strings.

use crate::types::ResourceEntry;

/// Names starting with this prefix are never classified as strings.
pub const RESERVED_PREFIX: &str = ">>";

/// Whitespace marker present and no `type` attribute.
///
/// This is the part of the classification shared by every collector; callers decide
/// separately how to treat the reserved prefix and the `!SKIP` token.
pub fn is_candidate_string(entry: &ResourceEntry) -> bool {
    entry.preserves_space() && !entry.is_typed()
}

/// Returns `true` when `entry` is a plain string eligible for translation.
///
/// All of the following must hold:
/// - the entry carries the whitespace-preserve marker,
/// - it has no `type` attribute,
/// - its name does not start with [`RESERVED_PREFIX`],
/// - its comment does not contain `!SKIP` (any case).
pub fn is_translatable_string(entry: &ResourceEntry) -> bool {
    is_candidate_string(entry)
        && !entry.name.starts_with(RESERVED_PREFIX)
        && !entry.tokens().skip
}
