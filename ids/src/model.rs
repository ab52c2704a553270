//! Core identifier model types.
//!
//! These types represent the two identifier vocabularies the codec moves
//! between: compact OBO identifiers (`GO:0008150`) and IRIs
//! (`http://purl.obolibrary.org/obo/GO_0008150`). Both are thin wrappers
//! around owned strings; equality and ordering are exact string comparisons.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::registry::PrefixRegistry;

/// The OBO PURL stem under which compact identifiers are minted.
pub const OBO_BASE: &str = "http://purl.obolibrary.org/obo/";

#[allow(clippy::expect_used)]
fn absolute_iri_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("valid regex"))
}

#[allow(clippy::expect_used)]
fn joined_local_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^_]*$").expect("valid regex"))
}

/// A compact OBO identifier: `[PREFIX ":"] LOCAL`.
///
/// The prefix never contains a colon, but the local part may
/// (`MGI:MGI:1` has prefix `MGI` and local part `MGI:1`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CompactId(String);

impl CompactId {
    /// Wraps a compact identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier and returns the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Splits on the first colon into `(prefix, local)`.
    ///
    /// Without a colon the prefix is `None` and the whole token is local.
    #[must_use]
    pub fn split(&self) -> (Option<&str>, &str) {
        match self.0.split_once(':') {
            Some((prefix, local)) => (Some(prefix), local),
            None => (None, &self.0),
        }
    }

    /// The prefix, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.split().0
    }

    /// The local part (the whole token when unprefixed).
    #[must_use]
    pub fn local(&self) -> &str {
        self.split().1
    }

    /// Whether the identifier carries an explicit prefix.
    #[must_use]
    pub fn is_prefixed(&self) -> bool {
        self.0.contains(':')
    }
}

impl fmt::Display for CompactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CompactId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CompactId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// An IRI, held verbatim.
///
/// No syntax validation is performed: codec output is constructed, not
/// parsed, and foreign IRIs are carried through as given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Iri(String);

impl Iri {
    /// Wraps an IRI string.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Returns the IRI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the IRI and returns the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether `s` starts with a URI scheme followed by `://`.
    #[must_use]
    pub fn is_absolute(s: &str) -> bool {
        absolute_iri_pattern().is_match(s)
    }

    /// The namespace part.
    ///
    /// With a `#` this is everything before the first `#`; otherwise it is
    /// everything up to and including the last `/`. Empty when the IRI has
    /// neither.
    #[must_use]
    pub fn namespace(&self) -> &str {
        if let Some((namespace, _)) = self.0.split_once('#') {
            return namespace;
        }
        match self.0.rfind('/') {
            Some(slash) => &self.0[..=slash],
            None => "",
        }
    }

    /// The substring after the first `#`, if any.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.0.split_once('#').map(|(_, fragment)| fragment)
    }

    /// The last `/`-separated segment of the namespace, ignoring a trailing
    /// slash.
    #[must_use]
    pub fn namespace_token(&self) -> &str {
        let namespace = self.namespace().trim_end_matches('/');
        namespace.rsplit('/').next().unwrap_or(namespace)
    }

    /// The last `/`-separated segment of the whole IRI.
    #[must_use]
    pub fn last_segment(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self(iri)
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self(iri.to_owned())
    }
}

/// How a prefixed local part is attached to the base stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalForm {
    /// No underscore in the local part: `base + PREFIX "_" LOCAL`.
    Joined,
    /// Underscore in the local part: `base + PREFIX "#_" LOCAL`.
    Fragment,
}

impl LocalForm {
    /// Classifies a local part.
    #[must_use]
    pub fn classify(local: &str) -> Self {
        if joined_local_pattern().is_match(local) {
            LocalForm::Joined
        } else {
            LocalForm::Fragment
        }
    }

    /// The separator placed between prefix and local part.
    #[must_use]
    pub fn separator(self) -> &'static str {
        match self {
            LocalForm::Joined => "_",
            LocalForm::Fragment => "#_",
        }
    }
}

/// Read-only input to the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixContext {
    /// IRI stem that prefixed identifiers are minted under.
    pub base: String,
    /// Default prefix for unprefixed identifiers (the OBO `ontology:` tag).
    pub current_ontology: Option<String>,
    /// Prefixes with an explicit namespace (OBO `idspace:` declarations).
    pub registry: PrefixRegistry,
}

impl PrefixContext {
    /// A context rooted at [`OBO_BASE`] with no current ontology and an
    /// empty registry.
    #[must_use]
    pub fn obo() -> Self {
        Self {
            base: OBO_BASE.to_owned(),
            current_ontology: None,
            registry: PrefixRegistry::new(),
        }
    }

    /// Sets the current ontology id.
    #[must_use]
    pub fn with_ontology(mut self, ontology: impl Into<String>) -> Self {
        self.current_ontology = Some(ontology.into());
        self
    }

    /// Replaces the prefix registry.
    #[must_use]
    pub fn with_registry(mut self, registry: PrefixRegistry) -> Self {
        self.registry = registry;
        self
    }
}

impl Default for PrefixContext {
    fn default() -> Self {
        Self::obo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_first_colon() {
        let id = CompactId::new("MGI:MGI:1");
        assert_eq!(id.split(), (Some("MGI"), "MGI:1"));
        assert!(id.is_prefixed());

        let bare = CompactId::new("part_of");
        assert_eq!(bare.split(), (None, "part_of"));
        assert_eq!(bare.prefix(), None);
        assert_eq!(bare.local(), "part_of");
    }

    #[test]
    fn namespace_and_fragment() {
        let iri = Iri::new("http://purl.obolibrary.org/obo/OBO_REL#_part_of");
        assert_eq!(iri.namespace(), "http://purl.obolibrary.org/obo/OBO_REL");
        assert_eq!(iri.fragment(), Some("_part_of"));
        assert_eq!(iri.namespace_token(), "OBO_REL");

        let iri = Iri::new("http://purl.obolibrary.org/obo/GO_001");
        assert_eq!(iri.namespace(), "http://purl.obolibrary.org/obo/");
        assert_eq!(iri.fragment(), None);
        assert_eq!(iri.last_segment(), "GO_001");

        assert_eq!(Iri::new("_:genid1").namespace(), "");
    }

    #[test]
    fn absolute_detection() {
        assert!(Iri::is_absolute("http://purl.obolibrary.org/testont"));
        assert!(Iri::is_absolute("https://example.org/x"));
        assert!(!Iri::is_absolute("GO:001"));
        assert!(!Iri::is_absolute("MGI:MGI:1"));
        assert!(!Iri::is_absolute("_:genid1"));
    }

    #[test]
    fn local_form_dispatch() {
        assert_eq!(LocalForm::classify("001"), LocalForm::Joined);
        assert_eq!(LocalForm::classify("MGI%3A1"), LocalForm::Joined);
        assert_eq!(LocalForm::classify("FOO_002"), LocalForm::Fragment);
        assert_eq!(LocalForm::Fragment.separator(), "#_");
    }
}
