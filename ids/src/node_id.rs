//! Anonymous node identifiers.
//!
//! Blank graph nodes are labelled `_:genid<N>`, where `N` is drawn from a
//! monotonically increasing counter owned by a [`NodeIdGenerator`]. The
//! counter only reflects how many labels were issued; it is never reset or
//! rolled back.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::model::Iri;

/// Marker every node id starts with.
pub const NODE_ID_MARKER: &str = "_:";

/// Substring that identifies generator-issued labels.
pub const GENID: &str = "genid";

/// Stem of shared (unified) anonymous labels.
pub const SHARED_GENID: &str = "genid-nodeid-";

/// A label for an anonymous graph node. Always starts with `_:`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(String);

impl NodeId {
    /// Wraps `raw`, prepending `_:` unless already present.
    fn wrap(raw: &str) -> Self {
        if raw.starts_with(NODE_ID_MARKER) {
            Self(raw.to_owned())
        } else {
            Self(format!("{NODE_ID_MARKER}{raw}"))
        }
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// `genid<n>`: the label body without the `_:` marker, as written in
    /// `rdf:nodeID` attributes.
    #[must_use]
    pub fn node_string(n: u64) -> String {
        format!("{GENID}{n}")
    }

    /// Whether a string label looks anonymous: it starts with `_:` or
    /// contains `genid` anywhere.
    ///
    /// Permissive on purpose. A named identifier that happens to contain
    /// `genid` is reported as anonymous.
    #[must_use]
    pub fn is_anonymous(candidate: &str) -> bool {
        candidate.starts_with(NODE_ID_MARKER) || candidate.contains(GENID)
    }

    /// Whether an IRI's namespace marks it as anonymous: the namespace is
    /// non-empty and contains `genid`.
    ///
    /// This is not the same test as [`NodeId::is_anonymous`]; `_:genid1`
    /// has an empty namespace and is not anonymous by this predicate.
    #[must_use]
    pub fn is_anonymous_iri(iri: &Iri) -> bool {
        let namespace = iri.namespace();
        !namespace.is_empty() && namespace.contains(GENID)
    }

    /// Whether `candidate` is a shared anonymous label built by
    /// [`NodeId::shared_iri`].
    #[must_use]
    pub fn is_shared(candidate: &str) -> bool {
        candidate.contains(SHARED_GENID)
    }

    /// Rebuilds `raw` as a shared anonymous label:
    /// `_:genid-nodeid-<raw without any "genid">`.
    ///
    /// Used to unify independently generated labels that denote the same
    /// node, e.g. the `rdf:nodeID` values of one RDF/XML document.
    #[must_use]
    pub fn shared_iri(raw: &str) -> String {
        format!("{NODE_ID_MARKER}{SHARED_GENID}{}", raw.replace(GENID, ""))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issues unique anonymous node ids.
///
/// Each generator owns its counter. [`NodeIdGenerator::global`] is the
/// process-wide instance; tests build their own so they start from zero.
#[derive(Debug, Default)]
pub struct NodeIdGenerator {
    counter: AtomicU64,
}

impl NodeIdGenerator {
    /// Creates a generator whose first id is `_:genid1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// The process-wide generator.
    pub fn global() -> &'static NodeIdGenerator {
        static GLOBAL: NodeIdGenerator = NodeIdGenerator::new();
        &GLOBAL
    }

    /// Issues the next id. Concurrent callers never see the same value.
    pub fn next_id(&self) -> NodeId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let id = NodeId(format!("{NODE_ID_MARKER}{}", NodeId::node_string(n)));
        trace!(node_id = %id, "issued anonymous node id");
        id
    }

    /// Wraps a caller-supplied label, or issues a fresh id when `raw` is
    /// `None` or empty.
    ///
    /// Supplied labels are not checked against issued ones.
    pub fn node_id(&self, raw: Option<&str>) -> NodeId {
        match raw {
            Some(raw) if !raw.is_empty() => NodeId::wrap(raw),
            _ => self.next_id(),
        }
    }

    /// Number of ids issued so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_in_sequence() {
        let generator = NodeIdGenerator::new();
        assert_eq!(generator.next_id().as_str(), "_:genid1");
        assert_eq!(generator.next_id().as_str(), "_:genid2");
        assert_eq!(generator.issued(), 2);
    }

    #[test]
    fn supplied_labels_are_marked() {
        let generator = NodeIdGenerator::new();
        assert_eq!(generator.node_id(Some("b0")).as_str(), "_:b0");
        assert_eq!(generator.node_id(Some("_:b0")).as_str(), "_:b0");
        assert_eq!(generator.issued(), 0);

        assert_eq!(generator.node_id(Some("")).as_str(), "_:genid1");
        assert_eq!(generator.node_id(None).as_str(), "_:genid2");
    }

    #[test]
    fn equality_and_order_follow_the_label() {
        let generator = NodeIdGenerator::new();
        assert_eq!(generator.node_id(Some("x")), generator.node_id(Some("_:x")));
        // Lexicographic, not numeric.
        assert!(NodeId::wrap("genid10") < NodeId::wrap("genid9"));
    }

    #[test]
    fn string_and_iri_checks_disagree() {
        assert!(NodeId::is_anonymous("_:genid1"));
        assert!(!NodeId::is_anonymous_iri(&Iri::new("_:genid1")));

        let iri = Iri::new("http://example.org/genid/node#x");
        assert!(NodeId::is_anonymous_iri(&iri));
        assert!(NodeId::is_anonymous(iri.as_str()));

        // The string check is permissive.
        assert!(NodeId::is_anonymous("GO:genidase"));
        assert!(!NodeId::is_anonymous("GO:0008150"));
    }

    #[test]
    fn shared_labels() {
        assert_eq!(NodeId::shared_iri("genid42"), "_:genid-nodeid-42");
        assert_eq!(NodeId::shared_iri("b7"), "_:genid-nodeid-b7");
        assert!(NodeId::is_shared(&NodeId::shared_iri("genid42")));
        assert!(!NodeId::is_shared("_:genid42"));
        assert_eq!(NodeId::node_string(3), "genid3");
    }
}
