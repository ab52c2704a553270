//! TOML configuration for a [`PrefixContext`].
//!
//! ```toml
//! ontology = "test"
//! base = "http://purl.obolibrary.org/obo/"
//!
//! [idspaces]
//! FOO = "http://example.org/foo#"
//! ```
//!
//! Every key is optional; an empty file yields [`PrefixContext::obo`].

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::model::{Iri, PrefixContext, OBO_BASE};
use crate::registry::PrefixRegistry;

/// Deserialized codec configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Current ontology id used for unprefixed identifiers.
    #[serde(default)]
    pub ontology: Option<String>,
    /// Base stem; defaults to [`OBO_BASE`].
    #[serde(default)]
    pub base: Option<String>,
    /// Prefixes mapped to explicit namespaces.
    #[serde(default)]
    pub idspaces: PrefixRegistry,
}

impl Config {
    /// Parses and validates a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::InvalidNamespace`] for an idspace that is not an
    /// absolute IRI.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        debug!(
            path = %path.display(),
            idspaces = config.idspaces.len(),
            "loaded codec configuration"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (prefix, namespace) in self.idspaces.iter() {
            if !Iri::is_absolute(namespace) {
                return Err(ConfigError::InvalidNamespace {
                    prefix: prefix.to_owned(),
                    namespace: namespace.to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Builds the codec context described by this configuration.
    #[must_use]
    pub fn into_context(self) -> PrefixContext {
        PrefixContext {
            base: self.base.unwrap_or_else(|| OBO_BASE.to_owned()),
            current_ontology: self.ontology,
            registry: self.idspaces,
        }
    }
}
