//! Canonical, diff-friendly ordering of document entries.

use log::debug;

use crate::{
    error::Error,
    types::{FileReference, ResourceDocument, ResourceEntry},
};

/// Reorders the entries of `document` in place.
///
/// Plain strings come first, ordered by name. Typed entries follow, ordered by the type
/// field of their `path;type` value, then the path field, then the name. All comparisons
/// are ordinal (byte order of the UTF-8 text), so the result depends only on the entries
/// and not on their previous order.
///
/// A typed entry whose value has fewer than two `;`-separated fields makes the call fail
/// with [`Error::MalformedFileReference`]; the document is left untouched in that case.
pub fn sort_data(document: &mut ResourceDocument) -> Result<(), Error> {
    let mut file_keys = Vec::new();
    for entry in document.entries.iter().filter(|e| e.is_typed()) {
        file_keys.push(file_sort_key(entry)?);
    }

    let (mut strings, files): (Vec<_>, Vec<_>) = std::mem::take(&mut document.entries)
        .into_iter()
        .partition(|e| !e.is_typed());

    strings.sort_by(|a, b| a.name.cmp(&b.name));

    let mut files: Vec<_> = file_keys.into_iter().zip(files).collect();
    files.sort_by(|(a, _), (b, _)| a.cmp(b));

    debug!(
        "sorted {} strings and {} typed entries",
        strings.len(),
        files.len()
    );
    document.entries = strings;
    document
        .entries
        .extend(files.into_iter().map(|(_, entry)| entry));
    Ok(())
}

/// `(type, path, name)` of a typed entry.
fn file_sort_key(entry: &ResourceEntry) -> Result<(String, String, String), Error> {
    let reference = FileReference::parse(&entry.name, entry.value_or_empty())?;
    Ok((
        reference.type_name.to_string(),
        reference.path.to_string(),
        entry.name.clone(),
    ))
}
