//! Support for .NET `.resx` resource documents.
//!
//! Every `data` child of the root element becomes a [`ResourceEntry`]; all other root
//! children are kept verbatim as [`Header`]s. Attributes are matched on their local name,
//! so `xml:space` and a bare `space` are the same marker.

use std::io::{BufRead, Write};

use log::warn;
use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{
    error::Error,
    formats::{read_text, skip_element},
    load_options::LoadOptions,
    traits::Parser,
    types::{EntryKind, Header, ResourceDocument, ResourceEntry},
};

impl Parser for ResourceDocument {
    /// Parse from any reader, with default (lenient) options.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        Self::from_reader_with_options(reader, &LoadOptions::default())
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new(&mut writer);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        write_indent(&mut xml_writer, 0)?;
        xml_writer.write_event(Event::Start(BytesStart::new("root")))?;

        for header in &self.headers {
            write_indent(&mut xml_writer, 1)?;
            xml_writer.get_mut().write_all(header.raw.as_bytes())?;
        }
        for entry in &self.entries {
            write_indent(&mut xml_writer, 1)?;
            write_entry(&mut xml_writer, entry)?;
        }

        write_indent(&mut xml_writer, 0)?;
        xml_writer.write_event(Event::End(BytesEnd::new("root")))?;
        write_indent(&mut xml_writer, 0)?;
        Ok(())
    }
}

impl ResourceDocument {
    /// Parse from any reader.
    pub fn from_reader_with_options<R: BufRead>(
        reader: R,
        options: &LoadOptions,
    ) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);

        let mut buf = Vec::new();
        let mut document = ResourceDocument::default();
        let mut seen_root = false;
        let mut in_root = false;

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Start(_) if !in_root => {
                    if seen_root {
                        return Err(Error::InvalidResource(
                            "more than one root element".to_string(),
                        ));
                    }
                    seen_root = true;
                    in_root = true;
                }
                Event::Empty(_) if !in_root => {
                    seen_root = true;
                }
                Event::Start(e) if e.local_name().as_ref() == b"data" => {
                    let entry = parse_entry(&e, Some(&mut xml_reader), options)?;
                    document.entries.extend(entry);
                }
                Event::Empty(e) if e.local_name().as_ref() == b"data" => {
                    let entry = parse_entry::<R>(&e, None, options)?;
                    document.entries.extend(entry);
                }
                Event::Start(e) => {
                    let header = capture_header(Event::Start(e), Some(&mut xml_reader))?;
                    document.headers.push(header);
                }
                Event::Empty(e) => {
                    document
                        .headers
                        .push(capture_header::<R>(Event::Empty(e), None)?);
                }
                Event::Comment(e) if in_root => {
                    document
                        .headers
                        .push(capture_header::<R>(Event::Comment(e), None)?);
                }
                Event::End(_) => in_root = false,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !seen_root {
            return Err(Error::InvalidResource("document has no root element".to_string()));
        }
        if in_root {
            return Err(Error::InvalidResource(
                "unexpected end of document inside the root element".to_string(),
            ));
        }
        Ok(document)
    }

    /// Parse from file path.
    pub fn read_from_with_options<P: AsRef<std::path::Path>>(
        path: P,
        options: &LoadOptions,
    ) -> Result<Self, Error> {
        let file = std::fs::File::open(path)?;
        Self::from_reader_with_options(std::io::BufReader::new(file), options)
    }
}

/// Reads one `data` element. `xml_reader` is `None` for a self-closing element.
fn parse_entry<R: BufRead>(
    start: &BytesStart,
    xml_reader: Option<&mut Reader<R>>,
    options: &LoadOptions,
) -> Result<Option<ResourceEntry>, Error> {
    let mut name = None;
    let mut space = None;
    let mut type_name = None;
    let mut mime_type = None;

    for attr in start.attributes().with_checks(false) {
        let attr = attr?;
        let value = attr.unescape_value()?.into_owned();
        match attr.key.local_name().as_ref() {
            b"name" => name = Some(value),
            b"space" => space = Some(value),
            b"type" => type_name = Some(value),
            b"mimetype" => mime_type = Some(value),
            _ => {}
        }
    }

    let mut value = None;
    let mut comment = None;
    if let Some(xml_reader) = xml_reader {
        let mut buf = Vec::new();
        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"value" => value = Some(read_text(xml_reader)?),
                    b"comment" => comment = Some(read_text(xml_reader)?),
                    _ => skip_element(&e.to_end().into_owned(), xml_reader)?,
                },
                Event::Empty(e) => match e.local_name().as_ref() {
                    b"value" => value = Some(String::new()),
                    b"comment" => comment = Some(String::new()),
                    _ => {}
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(Error::InvalidResource(
                        "unexpected end of document inside `data`".to_string(),
                    ));
                }
                _ => {}
            }
            buf.clear();
        }
    }

    let Some(name) = name else {
        if options.strict {
            return Err(Error::InvalidResource("data tag missing 'name'".to_string()));
        }
        warn!("skipping data element without a name");
        return Ok(None);
    };

    let kind = match type_name {
        Some(type_name) => EntryKind::Typed(type_name),
        None => EntryKind::String,
    };
    let mut entry = ResourceEntry::new(name, kind)
        .with_space(space)
        .with_value(value);
    entry.mime_type = mime_type;
    entry.set_comment(comment);
    Ok(Some(entry))
}

/// Re-serializes a non-`data` root child (and everything nested in it) verbatim.
fn capture_header<R: BufRead>(
    first: Event<'_>,
    xml_reader: Option<&mut Reader<R>>,
) -> Result<Header, Error> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(first)?;

    if let Some(xml_reader) = xml_reader {
        let mut depth = 1usize;
        let mut buf = Vec::new();
        while depth > 0 {
            let event = xml_reader.read_event_into(&mut buf)?;
            match &event {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth -= 1,
                Event::Eof => {
                    return Err(Error::InvalidResource(
                        "unexpected end of document inside a header element".to_string(),
                    ));
                }
                _ => {}
            }
            writer.write_event(event)?;
            buf.clear();
        }
    }

    let raw = String::from_utf8(writer.into_inner())
        .map_err(|e| Error::InvalidResource(e.to_string()))?;
    Ok(Header { raw })
}

fn write_indent<W: Write>(xml_writer: &mut Writer<W>, level: usize) -> Result<(), Error> {
    let indent = format!("\n{}", "  ".repeat(level));
    xml_writer.write_event(Event::Text(BytesText::new(&indent)))?;
    Ok(())
}

fn write_entry<W: Write>(xml_writer: &mut Writer<W>, entry: &ResourceEntry) -> Result<(), Error> {
    let mut elem = BytesStart::new("data");
    elem.push_attribute(("name", entry.name.as_str()));
    if let Some(space) = &entry.space {
        elem.push_attribute(("xml:space", space.as_str()));
    }
    if let EntryKind::Typed(type_name) = &entry.kind {
        elem.push_attribute(("type", type_name.as_str()));
    }
    if let Some(mime_type) = &entry.mime_type {
        elem.push_attribute(("mimetype", mime_type.as_str()));
    }

    if entry.value.is_none() && entry.comment().is_none() {
        xml_writer.write_event(Event::Empty(elem))?;
        return Ok(());
    }

    xml_writer.write_event(Event::Start(elem))?;
    if let Some(value) = &entry.value {
        write_indent(xml_writer, 2)?;
        write_text_element(xml_writer, "value", value)?;
    }
    if let Some(comment) = entry.comment() {
        write_indent(xml_writer, 2)?;
        write_text_element(xml_writer, "comment", comment)?;
    }
    write_indent(xml_writer, 1)?;
    xml_writer.write_event(Event::End(BytesEnd::new("data")))?;
    Ok(())
}

fn write_text_element<W: Write>(
    xml_writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), Error> {
    if text.is_empty() {
        xml_writer.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }
    xml_writer.write_event(Event::Start(BytesStart::new(name)))?;
    xml_writer.write_event(Event::Text(BytesText::new(text)))?;
    xml_writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
