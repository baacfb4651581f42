//! LDraw model assembly and serialization.
//!
//! A model is a three-line header followed by one `1 ...` line per placed
//! part, with `0 STEP` markers between groups:
//!
//! ```text
//! 0 Cylinder
//! 0 Name: cylinder.ldr
//! 0 Author: ldshape
//! 0 STEP
//! 1 27 20.0 24.0 20.0 1 0 0 0 1 0 0 0 1 6222.dat
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{LdShapeError, Result};
use crate::geometry::ShapeKind;
use crate::placement::{PlacementRecord, Placements};

/// Author written into every model header.
pub const AUTHOR: &str = env!("CARGO_PKG_NAME");

/// File extension of generated models.
pub const MODEL_EXTENSION: &str = "ldr";

/// Header metadata of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelHeader {
    pub label: String,
    pub name: String,
    pub author: String,
}

impl ModelHeader {
    /// Header for `kind` with the given model name.
    #[must_use]
    pub fn new(kind: ShapeKind, name: impl Into<String>) -> Self {
        Self {
            label: kind.label(),
            name: name.into(),
            author: AUTHOR.to_string(),
        }
    }

    /// Header for `kind` named after the default model file, e.g. `pyramid.ldr`.
    #[must_use]
    pub fn for_kind(kind: ShapeKind) -> Self {
        Self::new(kind, default_file_name(kind))
    }
}

/// Default model file name for `kind`.
#[must_use]
pub fn default_file_name(kind: ShapeKind) -> String {
    format!("{}.{MODEL_EXTENSION}", kind.name())
}

/// One line of the model body.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEntry {
    Step,
    Part(PlacementRecord),
}

/// A complete model, ready to be written once.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    header: ModelHeader,
    entries: Vec<ModelEntry>,
}

impl Model {
    /// Interleaves `placements` with step markers.
    ///
    /// Rings get a marker before each ring. Layers get a marker whenever a
    /// record's y differs from the previous record's y.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn new(header: ModelHeader, placements: &Placements) -> Self {
        let mut entries = Vec::with_capacity(placements.len() * 2);
        match placements {
            Placements::Rings(rings) => {
                for ring in rings {
                    entries.push(ModelEntry::Step);
                    entries.extend(ring.iter().copied().map(ModelEntry::Part));
                }
            }
            Placements::Layers(records) => {
                let mut previous_y = None;
                for record in records {
                    if previous_y != Some(record.position.y) {
                        entries.push(ModelEntry::Step);
                        previous_y = Some(record.position.y);
                    }
                    entries.push(ModelEntry::Part(*record));
                }
            }
        }
        Self { header, entries }
    }

    #[must_use]
    pub fn header(&self) -> &ModelHeader {
        &self.header
    }

    #[must_use]
    pub fn entries(&self) -> &[ModelEntry] {
        &self.entries
    }

    pub fn records(&self) -> impl Iterator<Item = &PlacementRecord> {
        self.entries.iter().filter_map(|entry| match entry {
            ModelEntry::Part(record) => Some(record),
            ModelEntry::Step => None,
        })
    }

    #[must_use]
    pub fn part_count(&self) -> usize {
        self.records().count()
    }

    /// True when there is nothing to save.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.part_count() == 0
    }

    /// Serializes the model to `writer`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }

    /// Writes the model to the file at `path`, replacing any existing file.
    ///
    /// Parent directories are not created.
    ///
    /// # Errors
    ///
    /// Returns [`LdShapeError::OutputWrite`] if `path` is a directory, its
    /// parent does not exist, or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<SavedModel> {
        let path = std::path::absolute(path).map_err(|source| output_error(path, source))?;
        if path.is_dir() {
            return Err(output_error(
                &path,
                io::Error::other("target is a directory"),
            ));
        }

        let file = File::create(&path).map_err(|source| output_error(&path, source))?;
        self.write_to(BufWriter::new(file))
            .map_err(|source| output_error(&path, source))?;

        Ok(SavedModel {
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            directory: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            parts: self.part_count(),
        })
    }
}

fn output_error(path: &Path, source: io::Error) -> LdShapeError {
    LdShapeError::OutputWrite {
        path: path.to_path_buf(),
        source,
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "0 {}", self.header.label)?;
        writeln!(f, "0 Name: {}", self.header.name)?;
        writeln!(f, "0 Author: {}", self.header.author)?;
        for entry in &self.entries {
            match entry {
                ModelEntry::Step => writeln!(f, "0 STEP")?,
                ModelEntry::Part(record) => write_record(f, record)?,
            }
        }
        Ok(())
    }
}

fn write_record(f: &mut fmt::Formatter<'_>, record: &PlacementRecord) -> fmt::Result {
    let p = record.position;
    // adding 0.0 turns -0.0 into 0.0
    write!(
        f,
        "1 {} {:.1} {:.1} {:.1}",
        record.color,
        p.x + 0.0,
        p.y + 0.0,
        p.z + 0.0
    )?;
    let rotation = record.rotation();
    for row in 0..3 {
        for col in 0..3 {
            write!(f, " {}", rotation[(row, col)] + 0.0)?;
        }
    }
    writeln!(f, " {}", record.part.id)
}

/// Where a model was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedModel {
    pub file_name: String,
    pub directory: PathBuf,
    pub parts: usize,
}

impl fmt::Display for SavedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Saved {} in {}", self.file_name, self.directory.display())
    }
}
