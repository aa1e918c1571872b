//! Transaction file discovery in the data directory

use std::fs::{self, File};
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Read-only view of the directory holding transaction files
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    extension: String,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// File names with the configured extension, sorted alphabetically.
    ///
    /// A missing data directory lists as empty.
    pub fn list_files(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            debug!("Data directory {} does not exist", self.dir.display());
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.push(name.to_string());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Resolve a file identifier to a path inside the data directory.
    ///
    /// The identifier must be a bare file name naming an existing regular file.
    pub fn resolve(&self, file_id: &str) -> Result<PathBuf> {
        let not_found = || Error::NotFound(format!("File not found: {}", file_id));

        let mut components = Path::new(file_id).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return Err(not_found()),
        }

        let path = self.dir.join(file_id);
        if !path.is_file() {
            return Err(not_found());
        }
        Ok(path)
    }

    /// Resolve and open a file for reading
    pub fn open(&self, file_id: &str) -> Result<File> {
        let path = self.resolve(file_id)?;
        Ok(File::open(path)?)
    }
}
