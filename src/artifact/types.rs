use crate::types::TranslationTable;

/// Plural rule recorded when the catalog declares none.
pub const DEFAULT_PLURAL_FORMS: &str = "nplurals=2; plural=n != 1;";

/// Catalog-level facts stored alongside the translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMetadata {
    /// Catalog modification time (epoch seconds) the artifact was derived from.
    pub revision_time: i64,
    pub generator: String,
    pub domain: String,
    pub locale: String,
    /// `Plural-Forms` expression. Stored, never evaluated.
    pub plural_rule: String,
}

/// Persisted form of one catalog: metadata plus its translation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub metadata: CatalogMetadata,
    pub messages: TranslationTable,
}
