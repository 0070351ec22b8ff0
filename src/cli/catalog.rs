use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::ParameterRegistry;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all parameters with their one-line summaries
    List {
        /// Only list parameters whose name contains this text
        #[arg(long)]
        filter: Option<String>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run(
    args: CatalogArgs,
    registry: &ParameterRegistry,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { filter } => run_list(registry, filter.as_deref(), format, verbose),
        CatalogCommands::Export { output, force } => run_export(registry, output, force),
    }
}

fn run_list(
    registry: &ParameterRegistry,
    name_filter: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let filtered: Vec<_> = registry
        .iter()
        .filter(|e| {
            name_filter.map_or(true, |f| {
                e.canonical_name.to_lowercase().contains(&f.to_lowercase())
            })
        })
        .collect();

    if verbose {
        eprintln!(
            "Listing {} of {} parameters",
            filtered.len(),
            registry.len()
        );
    }

    match format {
        OutputFormat::Text => {
            // Calculate column widths dynamically
            let key_width = filtered
                .iter()
                .map(|e| e.key.as_str().len())
                .max()
                .unwrap_or(3)
                .max(3);
            let name_width = filtered
                .iter()
                .map(|e| e.canonical_name.len())
                .max()
                .unwrap_or(4)
                .max(4);
            let desc_width = filtered
                .iter()
                .map(|e| e.short_description.chars().count())
                .max()
                .unwrap_or(11)
                .max(11);

            println!("Assembly Parameters ({} parameters)\n", filtered.len());
            println!(
                "{:>key_w$}  {:<name_w$}  {}",
                "Key",
                "Name",
                "Description",
                key_w = key_width,
                name_w = name_width,
            );
            println!("{}", "-".repeat(key_width + name_width + desc_width + 4));

            for e in &filtered {
                println!(
                    "{:>key_w$}  {:<name_w$}  {}",
                    e.key.as_str(),
                    e.canonical_name,
                    e.short_description,
                    key_w = key_width,
                    name_w = name_width,
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = filtered
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "key": e.key,
                        "name": e.canonical_name,
                        "short_description": e.short_description,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("key\tname\tshort_description");
            for e in &filtered {
                println!("{}\t{}\t{}", e.key, e.canonical_name, e.short_description);
            }
        }
    }

    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
fn run_export(registry: &ParameterRegistry, output: PathBuf, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "Output file {} already exists. Use --force to overwrite.",
            output.display()
        );
    }

    let json = registry.to_json()?;
    std::fs::write(&output, json)?;

    eprintln!(
        "Exported {} parameters to {}",
        registry.len(),
        output.display()
    );
    Ok(())
}
