//! Error types for identifier conversion and context configuration.
//!
//! Malformed identifiers are never errors: the codec converts them on a
//! best-effort basis. Only a missing precondition (an empty token, or an
//! unprefixed token with no ontology to default to) fails.

use thiserror::Error;

/// Failure converting a compact identifier to an IRI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The compact identifier was the empty string.
    #[error("compact identifier is empty")]
    EmptyId,

    /// An unprefixed identifier was converted without a current ontology id.
    #[error("cannot resolve unprefixed identifier `{id}`: no current ontology id is set")]
    MissingOntologyId {
        /// The unprefixed identifier.
        id: String,
    },
}

/// Failure loading a codec configuration file.
#[cfg(feature = "config")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// Path of the configuration file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// An idspace maps a prefix to something that is not an absolute IRI.
    #[error("idspace `{prefix}` maps to `{namespace}`, which is not an absolute IRI")]
    InvalidNamespace {
        /// The idspace prefix.
        prefix: String,
        /// The rejected namespace.
        namespace: String,
    },
}
