use clap::Args;

use crate::catalog::render::{print_descriptions, Selection};
use crate::catalog::store::ParameterRegistry;
use crate::cli::OutputFormat;
use crate::core::entry::ParameterEntry;
use crate::core::types::ParamKey;

#[derive(Args)]
pub struct ShowArgs {
    /// Parameter number or name, '*' for all parameters, or omit for the index
    pub key: Option<String>,

    /// Print one-line summaries instead of full explanations
    #[arg(short, long)]
    pub short: bool,
}

/// Execute show subcommand
///
/// # Errors
///
/// Returns an error if a specific key was given and is not a registered parameter.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: ShowArgs,
    registry: &ParameterRegistry,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let key = args.key.unwrap_or_default();

    match format {
        OutputFormat::Text => {
            print_descriptions(registry, key.as_str(), args.short)?;
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = select(registry, &key)?
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "key": e.key,
                        "name": e.canonical_name,
                        "description": e.description(args.short),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("key\tname\tshort_description");
            for e in select(registry, &key)? {
                println!("{}\t{}\t{}", e.key, e.canonical_name, e.short_description);
            }
        }
    }

    Ok(())
}

/// Entries for structured output; the index view lists every entry
fn select<'a>(
    registry: &'a ParameterRegistry,
    key: &str,
) -> anyhow::Result<Vec<&'a ParameterEntry>> {
    let selected = match Selection::from(ParamKey::from(key)) {
        Selection::One(key) => vec![registry.lookup(key)?],
        Selection::All | Selection::Index => registry.iter().collect(),
    };
    Ok(selected)
}
