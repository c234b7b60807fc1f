//! Core types used throughout the project.

use std::collections::BTreeMap;

/// Reserved key of the catalog metadata row. Never present in a [`TranslationTable`].
pub const METADATA_KEY: &str = "";

/// Ordered translated forms for one key: index 0 is the singular/default form,
/// index 1 the plural form.
pub type TranslationVariants = Vec<String>;

/// Builds the key of a contextual entry.
///
/// Context and text are concatenated without a separator, so `("menu", "File")`
/// and `("men", "uFile")` address the same entry.
#[must_use]
pub fn contextual_key(context: &str, text: &str) -> String {
    let mut key = String::with_capacity(context.len() + text.len());
    key.push_str(context);
    key.push_str(text);
    key
}

/// Translations of one domain, keyed by source text (or context + text).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    /// Sorted so that equal tables iterate (and serialize) identically.
    entries: BTreeMap<String, TranslationVariants>,
}

impl TranslationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the variants it replaced.
    ///
    /// The metadata key and empty variant lists are rejected (`None` is returned and
    /// the table is left untouched).
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        variants: TranslationVariants,
    ) -> Option<TranslationVariants> {
        let key = key.into();
        if key == METADATA_KEY || variants.is_empty() {
            return None;
        }
        self.entries.insert(key, variants)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TranslationVariants> {
        self.entries.get(key)
    }

    /// Returns the form at `index` for `key`, if both exist.
    #[must_use]
    pub fn form(&self, key: &str, index: usize) -> Option<&str> {
        self.entries.get(key).and_then(|variants| variants.get(index)).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves every entry of `other` into `self`; entries of `other` win on collision.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationVariants)> {
        self.entries.iter().map(|(key, variants)| (key.as_str(), variants))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, TranslationVariants)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, TranslationVariants)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, variants) in iter {
            table.insert(key, variants);
        }
        table
    }
}

impl IntoIterator for TranslationTable {
    type Item = (String, TranslationVariants);
    type IntoIter = std::collections::btree_map::IntoIter<String, TranslationVariants>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
