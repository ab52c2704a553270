//! Compact identifier ↔ IRI codec.
//!
//! Forward conversion mints OBO PURLs:
//!
//! | Compact id        | IRI                                               |
//! |-------------------|---------------------------------------------------|
//! | `GO:001`          | `http://purl.obolibrary.org/obo/GO_001`           |
//! | `My_Ont:FOO_002`  | `http://purl.obolibrary.org/obo/My_Ont#_FOO_002`  |
//! | `MGI:MGI:1`       | `http://purl.obolibrary.org/obo/MGI_MGI%3A1`      |
//! | `003` (in `test`) | `http://purl.obolibrary.org/obo/test#003`         |
//!
//! Reverse conversion is best effort. Unprefixed identifiers lose the
//! ontology prefix they were defaulted to (`test#003` comes back as `003`),
//! and IRIs that were not minted by these rules come back unchanged.

use tracing::debug;

use crate::error::CodecError;
use crate::model::{CompactId, Iri, LocalForm, PrefixContext};

const ESCAPED_COLON: &str = "%3A";

/// Percent-encodes the colons inside a local part.
fn escape_local(local: &str) -> String {
    local.replace(':', ESCAPED_COLON)
}

/// Restores colons escaped by [`escape_local`]. Other percent sequences are
/// left alone.
fn unescape_local(local: &str) -> String {
    local.replace(ESCAPED_COLON, ":").replace("%3a", ":")
}

/// Converts between compact identifiers and IRIs under a fixed
/// [`PrefixContext`].
#[derive(Debug, Clone, Default)]
pub struct Codec {
    ctx: PrefixContext,
}

impl Codec {
    /// Creates a codec over `ctx`.
    #[must_use]
    pub fn new(ctx: PrefixContext) -> Self {
        Self { ctx }
    }

    /// The context this codec resolves against.
    #[must_use]
    pub fn context(&self) -> &PrefixContext {
        &self.ctx
    }

    /// Converts a compact identifier to an IRI.
    ///
    /// Absolute IRIs pass through unchanged. Unprefixed identifiers are
    /// placed in the current ontology's fragment namespace.
    ///
    /// An unprefixed identifier that starts with `_` lands in the same
    /// `#_` fragment shape as a prefixed one: `_foo` in ontology `test`
    /// becomes `.../test#_foo`, which [`Codec::from_iri`] reads back as
    /// `test:foo`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::EmptyId`] for an empty token and
    /// [`CodecError::MissingOntologyId`] for an unprefixed token when the
    /// context has no current ontology.
    pub fn to_iri(&self, compact_id: &str) -> Result<Iri, CodecError> {
        if compact_id.is_empty() {
            return Err(CodecError::EmptyId);
        }
        if Iri::is_absolute(compact_id) {
            debug!(id = compact_id, "absolute IRI passed through");
            return Ok(Iri::new(compact_id));
        }

        let base = &self.ctx.base;
        let Some((prefix, local)) = compact_id.split_once(':') else {
            let ontology = self.ctx.current_ontology.as_deref().ok_or_else(|| {
                CodecError::MissingOntologyId {
                    id: compact_id.to_owned(),
                }
            })?;
            return Ok(Iri::new(format!("{base}{ontology}#{compact_id}")));
        };

        let local = escape_local(local);
        if let Some(namespace) = self.ctx.registry.namespace(prefix) {
            return Ok(Iri::new(format!("{namespace}{local}")));
        }

        let form = LocalForm::classify(&local);
        Ok(Iri::new(format!("{base}{prefix}{}{local}", form.separator())))
    }

    /// Recovers a compact identifier from an IRI.
    ///
    /// Never fails: an IRI that does not have a recognized shape is returned
    /// as its own string form. The shape rules apply to any IRI, not only to
    /// those under the base stem.
    ///
    /// A path IRI is split at the last underscore of its last segment
    /// whatever the trailing part looks like, so `.../a_b_c` reads as
    /// `a_b:c`; this is what lets `a_b:c` round-trip.
    #[must_use]
    pub fn from_iri(&self, iri: &Iri) -> CompactId {
        let raw = iri.as_str();
        if let Some((prefix, rest)) = self.ctx.registry.resolve(raw) {
            return CompactId::new(format!("{prefix}:{}", unescape_local(rest)));
        }
        if let Some(fragment) = iri.fragment() {
            let token = iri.namespace_token();
            if let Some(local) = fragment.strip_prefix('_') {
                if !token.is_empty() {
                    return CompactId::new(format!("{token}:{}", unescape_local(local)));
                }
            } else if self.ctx.current_ontology.as_deref() == Some(token) {
                return CompactId::new(unescape_local(fragment));
            }
            debug!(iri = raw, "unrecognized fragment passed through");
            return CompactId::new(raw);
        }

        match iri.last_segment().rsplit_once('_') {
            Some((prefix, local)) if !prefix.is_empty() && !local.is_empty() => {
                CompactId::new(format!("{prefix}:{}", unescape_local(local)))
            }
            _ => {
                debug!(iri = raw, "unrecognized path passed through");
                CompactId::new(raw)
            }
        }
    }

    /// Whether `compact_id` survives `to_iri` followed by `from_iri`.
    #[must_use]
    pub fn round_trips(&self, compact_id: &str) -> bool {
        self.to_iri(compact_id)
            .map(|iri| self.from_iri(&iri).as_str() == compact_id)
            .unwrap_or(false)
    }
}
