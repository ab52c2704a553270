//! `obo-ids` — Converts between compact OBO identifiers and IRIs, and issues
//! anonymous node ids.
//!
//! **Usage:**
//! ```
//! obo-ids to-iri <ID>... [--ontology <ID>] [--config <path>] [--json]
//! obo-ids from-iri <IRI>... [--ontology <ID>] [--config <path>] [--json]
//! obo-ids genid [--count <N>] [--json]
//! obo-ids classify <LABEL>... [--json]
//! ```
//!
//! Exits non-zero if any identifier could not be converted.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use obo_ids::{Codec, Config, Iri, NodeId, NodeIdGenerator, PrefixContext};
use serde_json::{json, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Translate OBO identifiers.
#[derive(Parser)]
#[command(name = "obo-ids", about = "Translate between OBO compact identifiers and IRIs")]
struct Cli {
    /// Log conversion decisions to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Print one JSON document instead of tab-separated lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert compact identifiers to IRIs.
    ToIri {
        /// Compact identifiers (`GO:0008150`, `part_of`, ...).
        #[arg(required = true)]
        ids: Vec<String>,
        #[command(flatten)]
        context: ContextArgs,
    },
    /// Recover compact identifiers from IRIs.
    FromIri {
        /// IRIs to convert.
        #[arg(required = true)]
        iris: Vec<String>,
        #[command(flatten)]
        context: ContextArgs,
    },
    /// Issue fresh anonymous node ids.
    Genid {
        /// Number of ids to issue.
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },
    /// Report whether labels look anonymous.
    Classify {
        /// Labels or IRIs to classify.
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

/// Codec context options shared by the conversion subcommands.
#[derive(Args)]
struct ContextArgs {
    /// Current ontology id for unprefixed identifiers (overrides the config file).
    #[arg(long)]
    ontology: Option<String>,

    /// TOML file with `ontology`, `base` and `[idspaces]`.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ContextArgs {
    fn into_codec(self) -> Result<Codec> {
        let mut ctx = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
                .into_context(),
            None => PrefixContext::obo(),
        };
        if let Some(ontology) = self.ontology {
            ctx.current_ontology = Some(ontology);
        }
        debug!(
            base = %ctx.base,
            ontology = ?ctx.current_ontology,
            idspaces = ctx.registry.len(),
            "codec context"
        );
        Ok(Codec::new(ctx))
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn to_iri(codec: &Codec, ids: &[String], as_json: bool) -> Result<()> {
    let mut failures = 0usize;
    let mut rows = Vec::with_capacity(ids.len());
    for id in ids {
        match codec.to_iri(id) {
            Ok(iri) => {
                if as_json {
                    rows.push(json!({ "id": id, "iri": iri }));
                } else {
                    println!("{id}\t{iri}");
                }
            }
            Err(err) => {
                failures += 1;
                debug!(id = %id, "conversion failed: {err}");
                if as_json {
                    rows.push(json!({ "id": id, "error": err.to_string() }));
                } else {
                    eprintln!("{id}\terror: {err}");
                }
            }
        }
    }
    if as_json {
        print_json(&Value::Array(rows))?;
    }
    if failures > 0 {
        bail!("{failures} of {} identifiers could not be converted", ids.len());
    }
    Ok(())
}

fn from_iri(codec: &Codec, iris: &[String], as_json: bool) -> Result<()> {
    let mut rows = Vec::with_capacity(iris.len());
    for raw in iris {
        let iri = Iri::new(raw.as_str());
        let id = codec.from_iri(&iri);
        if as_json {
            let recognized = id.as_str() != raw.as_str();
            rows.push(json!({ "iri": iri, "id": id, "recognized": recognized }));
        } else {
            println!("{iri}\t{id}");
        }
    }
    if as_json {
        print_json(&Value::Array(rows))?;
    }
    Ok(())
}

fn genid(count: usize, as_json: bool) -> Result<()> {
    let generator = NodeIdGenerator::global();
    let ids: Vec<NodeId> = (0..count).map(|_| generator.next_id()).collect();
    if as_json {
        print_json(&json!(ids))?;
    } else {
        for id in &ids {
            println!("{id}");
        }
    }
    Ok(())
}

fn classify(labels: &[String], as_json: bool) -> Result<()> {
    let mut rows = Vec::with_capacity(labels.len());
    for label in labels {
        let anonymous = NodeId::is_anonymous(label);
        let anonymous_iri = NodeId::is_anonymous_iri(&Iri::new(label.as_str()));
        let shared = NodeId::is_shared(label);
        if as_json {
            rows.push(json!({
                "label": label,
                "anonymous": anonymous,
                "anonymous_iri": anonymous_iri,
                "shared": shared,
            }));
        } else {
            let kind = if anonymous { "anonymous" } else { "named" };
            println!("{label}\t{kind}\tiri:{anonymous_iri}\tshared:{shared}");
        }
    }
    if as_json {
        print_json(&Value::Array(rows))?;
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{out}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::ToIri { ids, context } => to_iri(&context.into_codec()?, &ids, cli.json),
        Command::FromIri { iris, context } => from_iri(&context.into_codec()?, &iris, cli.json),
        Command::Genid { count } => genid(count, cli.json),
        Command::Classify { labels } => classify(&labels, cli.json),
    }
}
