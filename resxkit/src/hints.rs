//! Merging preferred translations ("hints") into a document.

use log::debug;

use crate::{
    error::Error,
    types::{Hint, HintsDocument, ResourceDocument},
};

/// Overwrites entry values in `root` with the preferred values from `hints`.
///
/// For each hint, the first entry with the hint's name whose value differs from the
/// (trimmed) preferred value is updated. Hints with no such entry are ignored. Returns how
/// many entries changed, so merging the same hints twice yields `0` the second time.
///
/// Every hint must carry a name and a preferred value; otherwise the call fails with
/// [`Error::InvalidHint`] before any entry is touched.
pub fn merge_hints(root: &mut ResourceDocument, hints: &HintsDocument) -> Result<usize, Error> {
    let resolved = hints
        .hints
        .iter()
        .enumerate()
        .map(|(index, hint)| resolve_hint(index, hint))
        .collect::<Result<Vec<_>, _>>()?;

    let mut changed = 0;
    for (name, preferred) in resolved {
        let target = root
            .entries
            .iter_mut()
            .find(|e| e.name == name && e.value_or_empty() != preferred);
        if let Some(entry) = target {
            entry.value = Some(preferred.to_string());
            changed += 1;
        }
    }

    debug!("merged {} of {} hints", changed, hints.hints.len());
    Ok(changed)
}

fn resolve_hint(index: usize, hint: &Hint) -> Result<(&str, &str), Error> {
    let name = hint
        .name
        .as_deref()
        .ok_or_else(|| Error::invalid_hint(index, "missing `name` attribute"))?;
    let preferred = hint
        .preferred
        .as_deref()
        .ok_or_else(|| Error::invalid_hint(index, format!("`{name}` has no `preferred` element")))?;
    Ok((name, preferred.trim()))
}
