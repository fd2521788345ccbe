//! Diffing a source document against its translated counterpart.
//!
//! Both collectors take the source entries (usually [`ResourceDocument::translatable_strings`])
//! and a [`TargetDocument`]. A target that could not be loaded is the normal state of a
//! brand-new locale, so it never fails the call: every source entry is reported instead.

use std::{collections::HashSet, path::Path};

use log::{debug, warn};

use crate::{
    classify::is_candidate_string,
    traits::Parser,
    types::{ResourceDocument, ResourceEntry},
};

/// Result of trying to load the translated counterpart of a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetDocument {
    Loaded(ResourceDocument),
    /// Missing, unreadable or malformed. Holds the reason for diagnostics.
    Unavailable(String),
}

impl TargetDocument {
    /// Loads the `.resx` file at `path`. Never fails; errors become [`TargetDocument::Unavailable`].
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match ResourceDocument::read_from(path) {
            Ok(document) => TargetDocument::Loaded(document),
            Err(e) => {
                warn!("target {} unavailable: {}", path.display(), e);
                TargetDocument::Unavailable(e.to_string())
            }
        }
    }

    pub fn document(&self) -> Option<&ResourceDocument> {
        match self {
            TargetDocument::Loaded(document) => Some(document),
            TargetDocument::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, TargetDocument::Loaded(_))
    }
}

/// Source entries that still need a translation in `target`.
///
/// With a loaded target, keeps the candidate strings that are either absent from the
/// target (exact name match) or flagged `!EDIT`. `!SKIP` is not checked here, so a
/// forced edit is never dropped. With an unavailable target the input is returned as is.
pub fn new_strings<'a, I>(source: I, target: &TargetDocument) -> Vec<&'a ResourceEntry>
where
    I: IntoIterator<Item = &'a ResourceEntry>,
{
    let Some(document) = target.document() else {
        return source.into_iter().collect();
    };

    let existing: HashSet<&str> = document.entries.iter().map(|e| e.name.as_str()).collect();
    let result: Vec<_> = source
        .into_iter()
        .filter(|entry| is_candidate_string(entry))
        .filter(|entry| entry.tokens().edit || !existing.contains(entry.name.as_str()))
        .collect();
    debug!("{} new strings", result.len());
    result
}

/// Source entries whose translation exists in `target` but is blank.
///
/// Only candidate strings without `!SKIP` are considered. The counterpart is the first
/// target entry with the same name; an empty or absent value counts as blank. With an
/// unavailable target the input is returned as is.
pub fn empty_strings<'a, I>(source: I, target: &TargetDocument) -> Vec<&'a ResourceEntry>
where
    I: IntoIterator<Item = &'a ResourceEntry>,
{
    let Some(document) = target.document() else {
        return source.into_iter().collect();
    };

    let result: Vec<_> = source
        .into_iter()
        .filter(|entry| is_candidate_string(entry) && !entry.tokens().skip)
        .filter(|entry| {
            document
                .find_entry(&entry.name)
                .is_some_and(|translated| translated.value_or_empty().is_empty())
        })
        .collect();
    debug!("{} empty strings", result.len());
    result
}

/// Loads the target at `target_path` and runs [`new_strings`].
pub fn collect_new_strings<'a, I, P>(source: I, target_path: P) -> Vec<&'a ResourceEntry>
where
    I: IntoIterator<Item = &'a ResourceEntry>,
    P: AsRef<Path>,
{
    new_strings(source, &TargetDocument::load(target_path))
}

/// Loads the target at `target_path` and runs [`empty_strings`].
pub fn collect_empty_strings<'a, I, P>(source: I, target_path: P) -> Vec<&'a ResourceEntry>
where
    I: IntoIterator<Item = &'a ResourceEntry>,
    P: AsRef<Path>,
{
    empty_strings(source, &TargetDocument::load(target_path))
}
