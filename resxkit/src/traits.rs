//! Loading and saving documents.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use tempfile::NamedTempFile;

use crate::error::Error;

/// XML (de)serialization shared by [`crate::ResourceDocument`] and [`crate::HintsDocument`].
///
/// Implementors provide [`Parser::from_reader`] and [`Parser::to_writer`]; the path and
/// string variants are derived from those.
///
/// ```rust,no_run
/// use resxkit::{ResourceDocument, traits::Parser};
/// let mut document = ResourceDocument::read_from("Strings.resx")?;
/// resxkit::sort_data(&mut document)?;
/// document.write_to("Strings.resx")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser: Sized {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>;

    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(s))
    }

    /// Saves to `path` through a temporary file in the same directory, so an in-place
    /// rewrite never leaves a half-written document behind.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        if let Ok(metadata) = std::fs::metadata(path) {
            file.as_file().set_permissions(metadata.permissions())?;
        }
        {
            let mut writer = BufWriter::new(file.as_file_mut());
            self.to_writer(&mut writer)?;
            writer.flush()?;
        }
        file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
