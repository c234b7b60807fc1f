use std::io;
use std::path::{
    Path,
    PathBuf,
};

use crate::fs::FileSystem;

/// Reads and writes artifact files next to their catalogs.
#[derive(Debug, Clone)]
pub struct ArtifactStore<F> {
    fs: F,
    /// Extension (without the dot) given to artifact files.
    extension: String,
}

impl<F: FileSystem> ArtifactStore<F> {
    pub fn new(fs: F, extension: impl Into<String>) -> Self {
        Self { fs, extension: extension.into() }
    }

    /// Catalog path with its extension replaced by the artifact extension.
    ///
    /// `languages/fr_FR.mo` → `languages/fr_FR.json`
    #[must_use]
    pub fn artifact_path(&self, catalog_path: &Path) -> PathBuf {
        catalog_path.with_extension(&self.extension)
    }

    pub fn exists(&self, artifact_path: &Path) -> bool {
        self.fs.exists(artifact_path)
    }

    pub fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.fs.read(path)
    }

    pub fn write(&self, artifact_path: &Path, contents: &[u8]) -> io::Result<()> {
        self.fs.write(artifact_path, contents)
    }

    pub fn delete(&self, artifact_path: &Path) -> io::Result<()> {
        self.fs.delete(artifact_path)
    }

    /// Modification time of a source catalog, in epoch seconds.
    pub fn modified_time(&self, path: &Path) -> io::Result<i64> {
        self.fs.modified_time(path)
    }
}
