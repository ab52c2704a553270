//! Prefix → namespace registry (OBO `idspace` declarations).
//!
//! A registered prefix bypasses the OBO PURL minting rules: its local parts
//! are appended directly to the declared namespace.

use std::collections::BTreeMap;

/// Known prefix → namespace-IRI mappings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PrefixRegistry {
    namespaces: BTreeMap<String, String>,
}

impl PrefixRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the namespace for `prefix`.
    pub fn insert(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.namespaces.insert(prefix.into(), namespace.into());
    }

    /// The namespace registered for `prefix`.
    #[must_use]
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }

    /// Finds the registered namespace that `iri` starts with, preferring the
    /// longest. Returns `(prefix, remainder)`; an IRI equal to a namespace
    /// (empty remainder) does not match.
    #[must_use]
    pub fn resolve<'a>(&'a self, iri: &'a str) -> Option<(&'a str, &'a str)> {
        self.namespaces
            .iter()
            .filter_map(|(prefix, namespace)| {
                iri.strip_prefix(namespace.as_str())
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (prefix.as_str(), namespace.len(), rest))
            })
            .max_by_key(|&(_, len, _)| len)
            .map(|(prefix, _, rest)| (prefix, rest))
    }

    /// Iterates `(prefix, namespace)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.namespaces
            .iter()
            .map(|(prefix, namespace)| (prefix.as_str(), namespace.as_str()))
    }

    /// Number of registered prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Whether no prefixes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

impl<P: Into<String>, N: Into<String>> FromIterator<(P, N)> for PrefixRegistry {
    fn from_iter<T: IntoIterator<Item = (P, N)>>(iter: T) -> Self {
        let mut registry = Self::new();
        for (prefix, namespace) in iter {
            registry.insert(prefix, namespace);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_namespace_wins() {
        let registry: PrefixRegistry = [
            ("EX", "http://example.org/"),
            ("EXT", "http://example.org/terms#"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            registry.resolve("http://example.org/terms#widget"),
            Some(("EXT", "widget"))
        );
        assert_eq!(registry.resolve("http://example.org/thing"), Some(("EX", "thing")));
        assert_eq!(registry.resolve("http://example.org/"), None);
        assert_eq!(registry.resolve("http://other.org/thing"), None);
    }

    #[test]
    fn insert_replaces() {
        let mut registry = PrefixRegistry::new();
        registry.insert("FOO", "http://a.org/");
        registry.insert("FOO", "http://b.org/");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.namespace("FOO"), Some("http://b.org/"));
    }
}
