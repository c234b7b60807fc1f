//! Per-domain translation tables and the lookups served from them.

use std::collections::HashMap;

use crate::types::{
    TranslationTable,
    contextual_key,
};

/// Loaded translations, keyed by domain.
///
/// Meant to live for the whole process: domains are created on their first load and
/// grow with every later load, but are never removed. Lookups never fail; `None`
/// means "no override" and the caller keeps its own translation.
#[derive(Debug, Clone, Default)]
pub struct DomainRegistry {
    /// Domain name → merged table
    domains: HashMap<String, TranslationTable>,
}

impl DomainRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `table` into the domain's table; entries of `table` win on collision.
    pub fn load(&mut self, domain: &str, table: TranslationTable) {
        let entries = table.len();
        if let Some(existing) = self.domains.get_mut(domain) {
            existing.merge(table);
            tracing::debug!(domain, entries, total = existing.len(), "Merged translations");
        } else {
            self.domains.insert(domain.to_string(), table);
            tracing::debug!(domain, entries, "Registered translation domain");
        }
    }

    /// Singular form of `text`.
    #[must_use]
    pub fn lookup_plain(&self, domain: &str, text: &str) -> Option<&str> {
        self.domains.get(domain)?.form(text, 0)
    }

    /// Singular form of `text` under `context`.
    #[must_use]
    pub fn lookup_contextual(&self, domain: &str, context: &str, text: &str) -> Option<&str> {
        self.domains.get(domain)?.form(&contextual_key(context, text), 0)
    }

    /// Form 0 of `single` when `count == 1`, form 1 otherwise.
    ///
    /// Only `single` selects the entry; `_plural` is accepted to mirror the usual
    /// plural lookup signature. The catalog's plural rule is not evaluated.
    #[must_use]
    pub fn lookup_plural(
        &self,
        domain: &str,
        single: &str,
        _plural: &str,
        count: u64,
    ) -> Option<&str> {
        let index = usize::from(count != 1);
        self.domains.get(domain)?.form(single, index)
    }

    #[must_use]
    pub fn is_loaded(&self, domain: &str) -> bool {
        self.domains.contains_key(domain)
    }

    #[must_use]
    pub fn table(&self, domain: &str) -> Option<&TranslationTable> {
        self.domains.get(domain)
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn table(entries: Vec<(&str, Vec<&str>)>) -> TranslationTable {
        entries
            .into_iter()
            .map(|(key, forms)| (key, forms.into_iter().map(str::to_string).collect()))
            .collect()
    }

    #[googletest::test]
    fn lookup_plain_hits_and_misses() {
        let mut registry = DomainRegistry::new();
        registry.load("plugin", table(vec![("Hello", vec!["Bonjour"])]));

        expect_that!(registry.lookup_plain("plugin", "Hello"), some(eq("Bonjour")));
        expect_that!(registry.lookup_plain("plugin", "Bye"), none());
    }

    #[googletest::test]
    fn lookup_contextual_concatenates_context_and_text() {
        let mut registry = DomainRegistry::new();
        registry.load("plugin", table(vec![("menuFile", vec!["Fichier"])]));

        expect_that!(registry.lookup_contextual("plugin", "menu", "File"), some(eq("Fichier")));
        expect_that!(registry.lookup_contextual("plugin", "men", "uFile"), some(eq("Fichier")));
        expect_that!(registry.lookup_contextual("plugin", "", "File"), none());
    }

    #[rstest]
    #[case(1, Some("1 item"))]
    #[case(0, Some("%d items"))]
    #[case(5, Some("%d items"))]
    fn test_lookup_plural(#[case] count: u64, #[case] expected: Option<&str>) {
        let mut registry = DomainRegistry::new();
        registry.load("plugin", table(vec![("item", vec!["1 item", "%d items"])]));

        assert_eq!(registry.lookup_plural("plugin", "item", "items", count), expected);
    }

    #[googletest::test]
    fn lookup_plural_ignores_plural_argument() {
        let mut registry = DomainRegistry::new();
        registry.load("plugin", table(vec![("item", vec!["1 item", "%d items"])]));

        expect_that!(registry.lookup_plural("plugin", "item", "whatever", 2), some(eq("%d items")));
        expect_that!(registry.lookup_plural("plugin", "items", "items", 2), none());
    }

    #[googletest::test]
    fn lookup_plural_without_plural_form_is_no_override() {
        let mut registry = DomainRegistry::new();
        registry.load("plugin", table(vec![("Hello", vec!["Bonjour"])]));

        expect_that!(registry.lookup_plural("plugin", "Hello", "Hellos", 1), some(eq("Bonjour")));
        expect_that!(registry.lookup_plural("plugin", "Hello", "Hellos", 3), none());
    }

    #[googletest::test]
    fn load_merges_and_newest_wins() {
        let mut registry = DomainRegistry::new();
        registry.load("plugin", table(vec![("A", vec!["x"])]));
        registry.load("plugin", table(vec![("B", vec!["y"])]));

        expect_that!(registry.lookup_plain("plugin", "A"), some(eq("x")));
        expect_that!(registry.lookup_plain("plugin", "B"), some(eq("y")));

        registry.load("plugin", table(vec![("A", vec!["z"])]));

        expect_that!(registry.lookup_plain("plugin", "A"), some(eq("z")));
        expect_that!(registry.table("plugin").map(TranslationTable::len), some(eq(2)));
    }

    #[googletest::test]
    fn domains_are_isolated() {
        let mut registry = DomainRegistry::new();
        registry.load("plugin", table(vec![("Hello", vec!["Bonjour"])]));
        registry.load("theme", table(vec![("Hello", vec!["Salut"])]));

        expect_that!(registry.lookup_plain("plugin", "Hello"), some(eq("Bonjour")));
        expect_that!(registry.lookup_plain("theme", "Hello"), some(eq("Salut")));
        expect_that!(registry.domains().count(), eq(2));
    }

    #[googletest::test]
    fn unknown_domain_is_no_override() {
        let registry = DomainRegistry::new();

        expect_that!(registry.is_loaded("plugin"), eq(false));
        expect_that!(registry.lookup_plain("plugin", "Hello"), none());
        expect_that!(registry.lookup_contextual("plugin", "menu", "File"), none());
        expect_that!(registry.lookup_plural("plugin", "item", "items", 2), none());
    }
}
