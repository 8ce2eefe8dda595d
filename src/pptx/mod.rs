//! PPTX output: the `Serializer` boundary and its Office Open XML writer
//!
//! - `xml`: slide content (shapes, text, tables) as DrawingML
//! - `package`: the fixed parts around the slides

mod package;
mod xml;

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::deck::Presentation;
use crate::errors::WriteError;
use crate::log::{debug, trace};

/// Turns a finished deck into bytes in some container format.
pub trait Serializer {
    fn write<W: Write + Seek>(&self, deck: &Presentation, out: W) -> Result<(), WriteError>;
}

/// Writes decks as `.pptx` (a zip of XML parts).
#[derive(Debug, Clone, Copy)]
pub struct PptxWriter {
    compression: CompressionMethod,
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self { compression: CompressionMethod::Deflated }
    }
}

impl PptxWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store parts uncompressed.
    pub fn stored(mut self) -> Self {
        self.compression = CompressionMethod::Stored;
        self
    }

    /// Serialize into memory.
    pub fn to_bytes(&self, deck: &Presentation) -> Result<Vec<u8>, WriteError> {
        let mut cursor = Cursor::new(Vec::new());
        self.write(deck, &mut cursor)?;
        Ok(cursor.into_inner())
    }

    fn options(&self) -> SimpleFileOptions {
        // Fixed timestamp: the same deck always yields the same bytes
        SimpleFileOptions::default()
            .compression_method(self.compression)
            .last_modified_time(DateTime::default())
    }
}

impl Serializer for PptxWriter {
    fn write<W: Write + Seek>(&self, deck: &Presentation, out: W) -> Result<(), WriteError> {
        let options = self.options();
        let mut zip = ZipWriter::new(out);
        let slides = deck.slides();

        for (name, part) in package::fixed_parts(deck.canvas(), deck.theme(), slides.len())? {
            trace!("writing part {name}");
            zip.start_file(name, options)?;
            zip.write_all(part.as_bytes())?;
        }

        let slide_rels = package::slide_rels()?;
        for (i, slide) in slides.iter().enumerate() {
            let n = i + 1;
            trace!(shapes = slide.len(), "writing slide {n}");
            zip.start_file(format!("ppt/slides/slide{n}.xml"), options)?;
            zip.write_all(xml::slide(slide)?.as_bytes())?;
            zip.start_file(format!("ppt/slides/_rels/slide{n}.xml.rels"), options)?;
            zip.write_all(slide_rels.as_bytes())?;
        }

        zip.finish()?;
        debug!(slides = slides.len(), "pptx package complete");
        Ok(())
    }
}

/// Serialize `deck` into a temporary file next to `path`, then move it over
/// `path`. On any failure the temporary file is removed and `path` is left
/// untouched.
pub(crate) fn save<S: Serializer>(serializer: &S, deck: &Presentation, path: &Path) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_err = |source| WriteError::Io { path: path.to_path_buf(), source };

    let mut staged = NamedTempFile::new_in(dir).map_err(io_err)?;
    serializer.write(deck, staged.as_file_mut())?;
    staged.as_file_mut().flush().map_err(io_err)?;
    staged.as_file().sync_all().map_err(io_err)?;

    // Temp files are created 0600
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        staged.as_file().set_permissions(Permissions::from_mode(0o644)).map_err(io_err)?;
    }

    let file = staged
        .persist(path)
        .map_err(|e| WriteError::Persist { path: path.to_path_buf(), source: e.error })?;
    debug!(
        bytes = file.metadata().map(|m| m.len()).unwrap_or_default(),
        "saved {}",
        path.display()
    );
    drop(file);
    Ok(())
}
