#![forbid(unsafe_code)]
//! Maintenance toolkit for .NET `.resx` localization resources.
//!
//! Works on an already-loaded [`ResourceDocument`] and answers the questions a translation
//! pipeline asks about it:
//!
//! - which entries are translatable strings ([`classify::is_translatable_string`]),
//! - which of them are new or changed compared to a translated file ([`collect::new_strings`]),
//! - which have a blank translation ([`collect::empty_strings`]),
//! - how to force-correct translations from a hints file ([`hints::merge_hints`]),
//! - and how to order entries so regenerated files diff cleanly ([`sort::sort_data`]).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resxkit::{ResourceDocument, collect, formats::target_path_for, sort, traits::Parser};
//!
//! let source = ResourceDocument::read_from("Resources/Strings.resx")?;
//! let target_path = target_path_for("Resources/Strings.resx", "fr")?;
//!
//! for entry in collect::collect_new_strings(source.translatable_strings(), &target_path) {
//!     println!("needs translation: {}", entry.name);
//! }
//!
//! let mut target = ResourceDocument::read_from(&target_path)?;
//! sort::sort_data(&mut target)?;
//! target.write_to(&target_path)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Comment tokens
//!
//! - `!SKIP` anywhere in a comment (any case) keeps an entry out of translation.
//! - `!EDIT` anywhere in a comment (any case) reports an entry as new even when it is
//!   already translated.

pub mod classify;
pub mod collect;
pub mod error;
pub mod formats;
pub mod hints;
pub mod load_options;
pub mod sort;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    classify::is_translatable_string,
    collect::{
        TargetDocument, collect_empty_strings, collect_new_strings, empty_strings, new_strings,
    },
    error::Error,
    hints::merge_hints,
    load_options::LoadOptions,
    sort::sort_data,
    types::{
        ControlTokens, EntryKind, FileReference, Header, Hint, HintsDocument, ResourceDocument,
        ResourceEntry,
    },
};
