use std::path::PathBuf;

use thiserror::Error;

use crate::artifact::CodecError;
use crate::catalog::CatalogError;

/// Failures of a cache load. Callers fall back to their own translations on any of them.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Catalog '{}' is unreadable: {source}", path.display())]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },

    #[error("Failed to write artifact '{}': {source}", path.display())]
    ArtifactWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl CacheError {
    pub(super) fn catalog_unreadable(path: &std::path::Path, source: impl Into<CatalogError>) -> Self {
        Self::CatalogUnreadable { path: path.to_path_buf(), source: source.into() }
    }
}
