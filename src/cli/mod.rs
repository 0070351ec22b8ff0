//! Command-line interface for assembly-params.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **name**: Resolve a parameter number to its canonical name
//! - **describe**: Print the long or short description of one parameter
//! - **show**: Print one parameter, all of them (`*`), or the numbered index
//! - **catalog**: List or export the parameter catalog
//!
//! ## Usage
//!
//! ```text
//! # Which parameter is number 7?
//! assembly-params name 7
//!
//! # Full explanation with examples
//! assembly-params describe clust_threshold
//!
//! # One-line summaries of every parameter
//! assembly-params show '*' --short
//!
//! # Numbered index
//! assembly-params show
//!
//! # JSON output for scripting
//! assembly-params catalog list --format json
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog::store::ParameterRegistry;

pub mod catalog;
pub mod lookup;
pub mod show;

#[derive(Parser)]
#[command(name = "assembly-params")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Look up documentation for RAD-seq assembly parameters")]
#[command(
    long_about = "assembly-params explains the numbered parameters of a RAD-seq assembly pipeline.\n\nEach parameter can be addressed by its number (e.g. 7) or its name (e.g. datatype) and has:\n- A one-line summary\n- A long explanation with usage examples"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to custom parameter catalog file (defaults to embedded)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the canonical name of a parameter
    Name(lookup::NameArgs),

    /// Print the description of a parameter
    Describe(lookup::DescribeArgs),

    /// Print one parameter, all parameters ('*'), or the index (no key)
    Show(show::ShowArgs),

    /// Manage the parameter catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load the registry named by `--catalog`, or borrow the embedded one.
///
/// # Errors
///
/// Returns an error if the custom catalog cannot be read or fails validation.
pub fn load_registry(path: Option<&Path>) -> anyhow::Result<Cow<'static, ParameterRegistry>> {
    let registry = match path {
        Some(path) => {
            let registry = ParameterRegistry::load_from_file(path)?;
            tracing::info!(
                "Loaded catalog {} with {} parameters",
                path.display(),
                registry.len()
            );
            Cow::Owned(registry)
        }
        None => Cow::Borrowed(crate::catalog::registry()),
    };
    Ok(registry)
}
