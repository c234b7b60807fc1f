//! Discovery of compiled catalogs below a directory.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

use crate::config::CacheSettings;

/// Domain used for catalogs named after their locale only (`fr_FR.mo`).
pub const DEFAULT_DOMAIN: &str = "default";

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Invalid catalog pattern '{pattern}': {source}")]
    InvalidCatalogPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// A catalog found on disk, with the domain and locale inferred from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLocation {
    pub path: PathBuf,
    pub domain: String,
    pub locale: String,
}

impl CatalogLocation {
    /// Infers domain and locale from a `{domain}-{locale}.mo` or `{locale}.mo` name.
    ///
    /// The locale is everything after the last `-`, so `my-plugin-de_DE.mo` belongs to
    /// `my-plugin`.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        let (domain, locale) = match stem.rsplit_once('-') {
            Some((domain, locale)) if !domain.is_empty() => (domain, locale),
            Some((_, locale)) => (DEFAULT_DOMAIN, locale),
            None => (DEFAULT_DOMAIN, stem),
        };
        if locale.is_empty() {
            return None;
        }

        let (domain, locale) = (domain.to_string(), locale.to_string());
        Some(Self { path, domain, locale })
    }
}

/// Walks a directory for catalogs matching the configured patterns.
#[derive(Debug, Clone)]
pub struct CatalogScanner {
    /// Directory the walk starts from; patterns are relative to it
    root: PathBuf,
    /// `catalogPattern`
    include_set: GlobSet,
    /// `excludePatterns`
    exclude_set: GlobSet,
    /// Files with any other extension are never catalogs
    catalog_extension: String,
}

impl CatalogScanner {
    pub fn new(root: PathBuf, settings: &CacheSettings) -> Result<Self, ScanError> {
        let include_set =
            Self::build_glob_set(std::slice::from_ref(&settings.catalog_pattern), |pattern, source| {
                ScanError::InvalidCatalogPattern { pattern, source }
            })?;
        let exclude_set = Self::build_glob_set(&settings.exclude_patterns, |pattern, source| {
            ScanError::InvalidExcludePattern { pattern, source }
        })?;

        let catalog_extension = settings.catalog_extension.clone();
        Ok(Self { root, include_set, exclude_set, catalog_extension })
    }

    /// Compiles `patterns` into one set, reporting the first invalid pattern.
    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, ScanError>
    where
        F: Fn(String, globset::Error) -> ScanError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns every matching catalog, sorted by path.
    #[must_use]
    pub fn find_catalogs(&self) -> Vec<CatalogLocation> {
        tracing::debug!(root = %self.root.display(), "Scanning for catalogs");
        let mut found = Vec::new();

        for result in WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_exclude(true)
            .follow_links(false)
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(self.catalog_extension.as_str())
            {
                continue;
            }
            let Ok(relative_path) = path.strip_prefix(&self.root) else {
                continue;
            };
            if !self.include_set.is_match(relative_path) || self.exclude_set.is_match(relative_path) {
                continue;
            }

            match CatalogLocation::from_path(path.to_path_buf()) {
                Some(location) => found.push(location),
                None => tracing::debug!(path = %path.display(), "Skipping catalog without locale"),
            }
        }

        found.sort_by(|a, b| a.path.cmp(&b.path));
        found
    }
}
