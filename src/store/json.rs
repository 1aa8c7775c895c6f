use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::app::Result;
use crate::domain::RecordKind;

/// Writes each record collection as a pretty-printed JSON array, one file per kind.
///
/// Files are replaced in place on every write.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, kind: RecordKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Serialize `records` in order to the file for `kind`, returning its path.
    pub fn write<T: Serialize>(&self, kind: RecordKind, records: &[T]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(kind);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;

        debug!(path = %path.display(), count = records.len(), "Wrote {}", kind);
        Ok(path)
    }
}
