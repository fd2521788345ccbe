//! File formats read and written by resxkit.
//!
//! - `.resx` resource documents ([`crate::ResourceDocument`])
//! - hints documents ([`crate::HintsDocument`])

pub mod hints;
pub mod resx;

use std::{
    io::BufRead,
    path::{Path, PathBuf},
};

use quick_xml::{Reader, events::Event};
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// Derives the path of the translated counterpart of `source` for `culture`.
///
/// Follows the satellite naming convention: `Strings.resx` becomes `Strings.fr-FR.resx`
/// next to the source file.
pub fn target_path_for<P: AsRef<Path>>(source: P, culture: &str) -> Result<PathBuf, Error> {
    culture
        .parse::<LanguageIdentifier>()
        .map_err(|_| Error::InvalidCulture(culture.to_string()))?;

    let source = source.as_ref();
    let (Some(stem), Some(extension)) = (
        source.file_stem().and_then(|s| s.to_str()),
        source.extension().and_then(|s| s.to_str()),
    ) else {
        return Err(Error::InvalidResource(format!(
            "cannot derive a target file name from {}",
            source.display()
        )));
    };

    Ok(source.with_file_name(format!("{stem}.{culture}.{extension}")))
}

/// Reads the text content of the element whose start tag was just consumed, up to its end tag.
/// Nested elements are skipped.
pub(crate) fn read_text<R: BufRead>(xml_reader: &mut Reader<R>) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut text = String::new();
    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e)),
            Event::Start(e) => skip_element(&e.to_end().into_owned(), xml_reader)?,
            Event::End(_) => break,
            Event::Eof => {
                return Err(Error::InvalidResource(
                    "unexpected end of document inside an element".to_string(),
                ));
            }
            _ => {}
        }
        buf.clear();
    }
    Ok(text)
}

pub(crate) fn skip_element<R: BufRead>(
    end: &quick_xml::events::BytesEnd<'_>,
    xml_reader: &mut Reader<R>,
) -> Result<(), Error> {
    let mut buf = Vec::new();
    xml_reader.read_to_end_into(end.name(), &mut buf)?;
    Ok(())
}
