//! Entry points for a host's translation hooks.
//!
//! The host calls [`TextDomainHooks::load_textdomain`] whenever it would load a
//! catalog for a domain, and the `gettext*` methods for every translated string,
//! passing the translation it computed itself as the fallback.

use std::path::{
    Path,
    PathBuf,
};

use crate::cache::TranslationCache;
use crate::catalog::CatalogReader;
use crate::fs::FileSystem;
use crate::registry::DomainRegistry;

/// Rewrites the catalog path requested for a domain before it is loaded.
pub type CatalogPathFilter = Box<dyn Fn(&Path, &str) -> PathBuf + Send + Sync>;

/// Notified with the domain and the (filtered) catalog path right before each load.
pub type LoadObserver = Box<dyn Fn(&str, &Path) + Send + Sync>;

/// Owns the cache and the process-wide registry behind the host hooks.
///
/// Loading never fails from the host's point of view: any cache error is logged and
/// the domain simply keeps whatever translations it already had.
pub struct TextDomainHooks<F, R> {
    /// Resolves catalogs to tables
    cache: TranslationCache<F, R>,
    /// Every domain loaded so far
    registry: DomainRegistry,
    /// Applied to the catalog path before each load
    catalog_filter: Option<CatalogPathFilter>,
    /// Called before each load, whether or not it succeeds
    load_observer: Option<LoadObserver>,
}

impl<F: FileSystem, R: CatalogReader> TextDomainHooks<F, R> {
    pub fn new(cache: TranslationCache<F, R>) -> Self {
        Self { cache, registry: DomainRegistry::new(), catalog_filter: None, load_observer: None }
    }

    #[must_use]
    pub fn with_catalog_filter(mut self, filter: CatalogPathFilter) -> Self {
        self.catalog_filter = Some(filter);
        self
    }

    #[must_use]
    pub fn with_load_observer(mut self, observer: LoadObserver) -> Self {
        self.load_observer = Some(observer);
        self
    }

    /// Resolves the catalog's table and merges it into the domain.
    ///
    /// Returns `false` when no translations could be loaded; the host should then fall
    /// back to reading the catalog itself.
    pub fn load_textdomain(&mut self, domain: &str, catalog_path: &Path, locale: &str) -> bool {
        let catalog_path = self
            .catalog_filter
            .as_ref()
            .map_or_else(|| catalog_path.to_path_buf(), |filter| filter(catalog_path, domain));
        if let Some(observer) = &self.load_observer {
            observer(domain, &catalog_path);
        }

        match self.cache.resolve(domain, &catalog_path, locale) {
            Ok(table) => {
                self.registry.load(domain, table);
                true
            }
            Err(e) => {
                tracing::warn!(domain, locale, "Falling back to default translations: {e}");
                false
            }
        }
    }

    /// Translation of `text`, or `fallback` when the domain has none.
    #[must_use]
    pub fn gettext<'a>(&'a self, domain: &str, text: &str, fallback: &'a str) -> &'a str {
        self.registry.lookup_plain(domain, text).unwrap_or(fallback)
    }

    #[must_use]
    pub fn gettext_with_context<'a>(
        &'a self,
        domain: &str,
        context: &str,
        text: &str,
        fallback: &'a str,
    ) -> &'a str {
        self.registry.lookup_contextual(domain, context, text).unwrap_or(fallback)
    }

    #[must_use]
    pub fn ngettext<'a>(
        &'a self,
        domain: &str,
        single: &str,
        plural: &str,
        count: u64,
        fallback: &'a str,
    ) -> &'a str {
        self.registry.lookup_plural(domain, single, plural, count).unwrap_or(fallback)
    }

    #[must_use]
    pub const fn registry(&self) -> &DomainRegistry {
        &self.registry
    }
}

impl<F, R> std::fmt::Debug for TextDomainHooks<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextDomainHooks")
            .field("cache", &"<TranslationCache>")
            .field("registry", &self.registry)
            .field("catalog_filter", &self.catalog_filter.as_ref().map(|_| "<filter>"))
            .field("load_observer", &self.load_observer.as_ref().map(|_| "<observer>"))
            .finish()
    }
}
