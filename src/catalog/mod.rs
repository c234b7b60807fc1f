//! Compiled message catalog input.
mod error;
mod mo;

pub use error::CatalogError;
pub use mo::MoCatalogReader;

use std::collections::BTreeMap;

use crate::types::TranslationVariants;

/// Decoded contents of a compiled catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Header entries (e.g. `Plural-Forms`) from the catalog's metadata message.
    pub headers: BTreeMap<String, String>,
    /// Message key to translated forms. Never contains the metadata key.
    pub entries: BTreeMap<String, TranslationVariants>,
}

impl Catalog {
    /// Value of the `Plural-Forms` header, if the catalog declares one.
    #[must_use]
    pub fn plural_forms(&self) -> Option<&str> {
        self.headers.get("Plural-Forms").map(String::as_str)
    }
}

/// Decodes raw catalog bytes.
pub trait CatalogReader {
    fn read_catalog(&self, bytes: &[u8]) -> Result<Catalog, CatalogError>;
}

impl<R: CatalogReader + ?Sized> CatalogReader for &R {
    fn read_catalog(&self, bytes: &[u8]) -> Result<Catalog, CatalogError> {
        (**self).read_catalog(bytes)
    }
}
