//! OBO identifier translation encoded as typed Rust data.
//!
//! The `obo-ids` crate converts between the compact `PREFIX:LOCAL`
//! identifiers written in OBO flat files and the OBO PURL IRIs used in the
//! OWL graph representation, and it mints and recognizes labels for
//! anonymous (blank) graph nodes.
//!
//! # Entry Point
//!
//! ```
//! use obo_ids::{Codec, Iri, PrefixContext};
//!
//! let codec = Codec::new(PrefixContext::obo().with_ontology("test"));
//! let iri = codec.to_iri("GO:001").unwrap();
//! assert_eq!(iri.as_str(), "http://purl.obolibrary.org/obo/GO_001");
//! assert_eq!(codec.from_iri(&iri).as_str(), "GO:001");
//! ```
//!
//! # Anonymous Nodes
//!
//! ```
//! use obo_ids::{NodeId, NodeIdGenerator};
//!
//! let generator = NodeIdGenerator::new();
//! let node = generator.next_id();
//! assert_eq!(node.as_str(), "_:genid1");
//! assert!(NodeId::is_anonymous(node.as_str()));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod codec;
#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod model;
pub mod node_id;
pub mod registry;

pub use codec::Codec;
#[cfg(feature = "config")]
pub use config::Config;
pub use error::CodecError;
#[cfg(feature = "config")]
pub use error::ConfigError;
pub use model::{CompactId, Iri, LocalForm, PrefixContext, OBO_BASE};
pub use node_id::{NodeId, NodeIdGenerator};
pub use registry::PrefixRegistry;
