//! Validation and regeneration of translation artifacts.
//!
//! A load goes through two phases: [`TranslationCache::validate`] classifies the
//! artifact next to a catalog as fresh, stale or missing, and
//! [`TranslationCache::regenerate`] rebuilds it from the catalog.
//! [`TranslationCache::resolve`] composes them.
mod error;

pub use error::CacheError;

use std::path::Path;

use crate::artifact::{
    Artifact,
    ArtifactCodec,
    ArtifactStore,
    CatalogMetadata,
};
use crate::catalog::CatalogReader;
use crate::config::CacheSettings;
use crate::fs::FileSystem;
use crate::types::TranslationTable;

/// State of the artifact derived from a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// The artifact is at least as new as the catalog.
    Fresh(Artifact),
    /// The catalog changed after the artifact was written, or the artifact is unusable.
    Stale,
    Missing,
}

/// Serves translation tables from artifacts, regenerating them from catalogs as needed.
///
/// Holds no state between calls besides its collaborators.
#[derive(Debug, Clone)]
pub struct TranslationCache<F, R> {
    store: ArtifactStore<F>,
    reader: R,
    codec: ArtifactCodec,
    /// Written to the artifact's `generator` field.
    generator: String,
    /// Written to the artifact's `domain` field, whatever domain is being loaded.
    artifact_domain: String,
    /// Plural rule for catalogs without a `Plural-Forms` header.
    default_plural_forms: String,
}

impl<F: FileSystem, R: CatalogReader> TranslationCache<F, R> {
    /// Creates a cache with the default settings.
    pub fn new(fs: F, reader: R) -> Self {
        Self::with_settings(fs, reader, &CacheSettings::default())
    }

    pub fn with_settings(fs: F, reader: R, settings: &CacheSettings) -> Self {
        Self {
            store: ArtifactStore::new(fs, settings.artifact_extension.clone()),
            reader,
            codec: ArtifactCodec::new(settings.pretty_print),
            generator: settings.generator.clone(),
            artifact_domain: settings.artifact_domain.clone(),
            default_plural_forms: settings.default_plural_forms.clone(),
        }
    }

    /// Returns the up-to-date table for a catalog.
    ///
    /// A fresh artifact is decoded and returned without touching the catalog contents.
    /// A stale artifact is deleted and regenerated in the same call; a missing one is
    /// generated. Nothing is written when the catalog cannot be decoded.
    pub fn resolve(
        &self,
        domain: &str,
        catalog_path: &Path,
        locale: &str,
    ) -> Result<TranslationTable, CacheError> {
        match self.validate(catalog_path)? {
            Validity::Fresh(artifact) => {
                tracing::debug!(
                    domain,
                    path = %catalog_path.display(),
                    revision = artifact.metadata.revision_time,
                    "Translation artifact is fresh"
                );
                Ok(artifact.messages)
            }
            Validity::Stale => {
                let artifact_path = self.store.artifact_path(catalog_path);
                tracing::debug!(domain, path = %artifact_path.display(), "Translation artifact is stale");
                if let Err(e) = self.store.delete(&artifact_path) {
                    tracing::warn!(path = %artifact_path.display(), "Failed to delete stale artifact: {e}");
                }
                self.regenerate(domain, catalog_path, locale)
            }
            Validity::Missing => {
                tracing::debug!(domain, path = %catalog_path.display(), "Translation artifact is missing");
                self.regenerate(domain, catalog_path, locale)
            }
        }
    }

    /// Classifies the artifact belonging to `catalog_path`.
    ///
    /// Unreadable or undecodable artifacts are reported as [`Validity::Stale`].
    pub fn validate(&self, catalog_path: &Path) -> Result<Validity, CacheError> {
        let artifact_path = self.store.artifact_path(catalog_path);
        if !self.store.exists(&artifact_path) {
            return Ok(Validity::Missing);
        }

        let artifact = match self.store.read(&artifact_path) {
            Ok(bytes) => match self.codec.decode(&bytes) {
                Ok(artifact) => artifact,
                Err(e) => {
                    tracing::warn!(path = %artifact_path.display(), "Discarding undecodable artifact: {e}");
                    return Ok(Validity::Stale);
                }
            },
            Err(e) => {
                tracing::warn!(path = %artifact_path.display(), "Failed to read artifact: {e}");
                return Ok(Validity::Stale);
            }
        };

        let catalog_time = self
            .store
            .modified_time(catalog_path)
            .map_err(|e| CacheError::catalog_unreadable(catalog_path, e))?;

        if catalog_time > artifact.metadata.revision_time {
            Ok(Validity::Stale)
        } else {
            Ok(Validity::Fresh(artifact))
        }
    }

    /// Rebuilds the artifact from the catalog and returns its table.
    ///
    /// The artifact's revision time is the catalog's modification time, so the result
    /// stays fresh until the catalog changes again.
    pub fn regenerate(
        &self,
        domain: &str,
        catalog_path: &Path,
        locale: &str,
    ) -> Result<TranslationTable, CacheError> {
        let bytes = self
            .store
            .read(catalog_path)
            .map_err(|e| CacheError::catalog_unreadable(catalog_path, e))?;
        let catalog = self
            .reader
            .read_catalog(&bytes)
            .map_err(|e| CacheError::catalog_unreadable(catalog_path, e))?;
        let revision_time = self
            .store
            .modified_time(catalog_path)
            .map_err(|e| CacheError::catalog_unreadable(catalog_path, e))?;

        let plural_rule =
            catalog.plural_forms().unwrap_or(self.default_plural_forms.as_str()).to_string();
        let artifact = Artifact {
            metadata: CatalogMetadata {
                revision_time,
                generator: self.generator.clone(),
                domain: self.artifact_domain.clone(),
                locale: locale.to_string(),
                plural_rule,
            },
            messages: catalog.entries.into_iter().collect(),
        };

        let encoded = self.codec.encode(&artifact)?;
        let artifact_path = self.store.artifact_path(catalog_path);
        self.store
            .write(&artifact_path, &encoded)
            .map_err(|source| CacheError::ArtifactWriteFailed { path: artifact_path.clone(), source })?;

        tracing::info!(
            domain,
            locale,
            path = %artifact_path.display(),
            entries = artifact.messages.len(),
            revision = revision_time,
            "Regenerated translation artifact"
        );
        Ok(artifact.messages)
    }
}
