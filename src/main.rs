use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod core;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("assembly_params=debug,info")
    } else {
        EnvFilter::new("assembly_params=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let registry = cli::load_registry(cli.catalog.as_deref())?;

    match cli.command {
        cli::Commands::Name(args) => {
            cli::lookup::run_name(args, &registry, cli.format)?;
        }
        cli::Commands::Describe(args) => {
            cli::lookup::run_describe(args, &registry, cli.format)?;
        }
        cli::Commands::Show(args) => {
            cli::show::run(args, &registry, cli.format)?;
        }
        cli::Commands::Catalog(args) => {
            cli::catalog::run(args, &registry, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
