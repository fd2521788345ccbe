//! Support for hints documents: preferred translations keyed by entry name.
//!
//! ```xml
//! <hints>
//!   <hint name="Greeting">
//!     <preferred>Bonjour</preferred>
//!   </hint>
//! </hints>
//! ```
//!
//! Element names of the root and its children are not checked; every child of the root is
//! one hint. The `preferred` text is trimmed as a whole; whitespace between its text,
//! CDATA and comment parts is kept.

use std::io::{BufRead, Write};

use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{
    error::Error,
    formats::{read_text, skip_element},
    traits::Parser,
    types::{Hint, HintsDocument},
};

impl Parser for HintsDocument {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);

        let mut buf = Vec::new();
        let mut hints = Vec::new();
        let mut seen_root = false;
        let mut in_root = false;

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Start(_) if !in_root => {
                    seen_root = true;
                    in_root = true;
                }
                Event::Empty(_) if !in_root => seen_root = true,
                Event::Start(e) => hints.push(parse_hint(&e, Some(&mut xml_reader))?),
                Event::Empty(e) => hints.push(parse_hint::<R>(&e, None)?),
                Event::End(_) => in_root = false,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !seen_root || in_root {
            return Err(Error::InvalidResource(
                "hints document has no complete root element".to_string(),
            ));
        }
        Ok(HintsDocument { hints })
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new_with_indent(&mut writer, b' ', 2);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Start(BytesStart::new("hints")))?;
        for hint in &self.hints {
            let mut elem = BytesStart::new("hint");
            if let Some(name) = &hint.name {
                elem.push_attribute(("name", name.as_str()));
            }
            let Some(preferred) = &hint.preferred else {
                xml_writer.write_event(Event::Empty(elem))?;
                continue;
            };
            xml_writer.write_event(Event::Start(elem))?;
            xml_writer.write_event(Event::Start(BytesStart::new("preferred")))?;
            xml_writer.write_event(Event::Text(BytesText::new(preferred)))?;
            xml_writer.write_event(Event::End(BytesEnd::new("preferred")))?;
            xml_writer.write_event(Event::End(BytesEnd::new("hint")))?;
        }
        xml_writer.write_event(Event::End(BytesEnd::new("hints")))?;
        Ok(())
    }
}

fn parse_hint<R: BufRead>(
    start: &BytesStart,
    xml_reader: Option<&mut Reader<R>>,
) -> Result<Hint, Error> {
    let mut hint = Hint::default();
    for attr in start.attributes().with_checks(false) {
        let attr = attr?;
        if attr.key.local_name().as_ref() == b"name" {
            hint.name = Some(attr.unescape_value()?.into_owned());
        }
    }

    if let Some(xml_reader) = xml_reader {
        let mut buf = Vec::new();
        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Start(e) if e.local_name().as_ref() == b"preferred" => {
                    hint.preferred = Some(read_text(xml_reader)?.trim().to_string());
                }
                Event::Start(e) => skip_element(&e.to_end().into_owned(), xml_reader)?,
                Event::Empty(e) if e.local_name().as_ref() == b"preferred" => {
                    hint.preferred = Some(String::new());
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(Error::InvalidResource(
                        "unexpected end of document inside a hint".to_string(),
                    ));
                }
                _ => {}
            }
            buf.clear();
        }
    }
    Ok(hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hints() {
        let xml = r#"
        <hints>
            <hint name="Greeting">
                <preferred>
                    Bonjour
                </preferred>
                <source>Hello</source>
            </hint>
            <entry name="Farewell"><preferred>Au revoir</preferred></entry>
            <hint name="Blank"><preferred /></hint>
            <hint name="NoPreferred" />
            <hint><preferred>orphan</preferred></hint>
        </hints>
        "#;
        let document = HintsDocument::from_str(xml).unwrap();
        assert_eq!(
            document.hints,
            vec![
                Hint::new("Greeting", "Bonjour"),
                Hint::new("Farewell", "Au revoir"),
                Hint::new("Blank", ""),
                Hint {
                    name: Some("NoPreferred".to_string()),
                    preferred: None,
                },
                Hint {
                    name: None,
                    preferred: Some("orphan".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_preferred_keeps_inner_whitespace() {
        let xml = r#"<hints>
            <hint name="A"><preferred>  a <![CDATA[<b>]]> c  </preferred></hint>
            <hint name="B"><preferred>x <!-- note --> y</preferred></hint>
        </hints>"#;
        let document = HintsDocument::from_str(xml).unwrap();
        assert_eq!(document.hints[0].preferred.as_deref(), Some("a <b> c"));
        assert_eq!(document.hints[1].preferred.as_deref(), Some("x  y"));
    }

    #[test]
    fn test_unterminated_hints_is_error() {
        assert!(HintsDocument::from_str("<hints><hint name=\"A\">").is_err());
        assert!(HintsDocument::from_str("").is_err());
    }

    #[test]
    fn test_round_trip_serialization() {
        let document = HintsDocument {
            hints: vec![
                Hint::new("Greeting", "Bonjour & bienvenue"),
                Hint {
                    name: Some("Missing".to_string()),
                    preferred: None,
                },
            ],
        };
        let mut out = Vec::new();
        document.to_writer(&mut out).unwrap();
        let reparsed = HintsDocument::from_str(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(reparsed, document);
    }
}
