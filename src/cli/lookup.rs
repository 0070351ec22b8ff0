use clap::Args;

use crate::catalog::store::ParameterRegistry;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct NameArgs {
    /// Parameter number or name
    #[arg(required = true)]
    pub key: String,
}

#[derive(Args)]
pub struct DescribeArgs {
    /// Parameter number or name
    #[arg(required = true)]
    pub key: String,

    /// Print the one-line summary instead of the full explanation
    #[arg(short, long)]
    pub short: bool,
}

/// Execute name subcommand
///
/// # Errors
///
/// Returns an error if the key is not a registered parameter.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_name(
    args: NameArgs,
    registry: &ParameterRegistry,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let entry = registry.lookup(args.key.as_str())?;

    match format {
        OutputFormat::Text => println!("{}", entry.canonical_name),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": entry.key,
                "name": entry.canonical_name,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("key\tname");
            println!("{}\t{}", entry.key, entry.canonical_name);
        }
    }

    Ok(())
}

/// Execute describe subcommand
///
/// # Errors
///
/// Returns an error if the key is not a registered parameter.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_describe(
    args: DescribeArgs,
    registry: &ParameterRegistry,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let entry = registry.lookup(args.key.as_str())?;

    match format {
        OutputFormat::Text => println!("{}", entry.description(args.short)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
        OutputFormat::Tsv => {
            println!("key\tname\tshort_description");
            println!(
                "{}\t{}\t{}",
                entry.key, entry.canonical_name, entry.short_description
            );
        }
    }

    Ok(())
}
