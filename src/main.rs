//! Filekit CLI - Read, write and append JSON, CSV, YAML and plain-text files

use clap::Parser;
use filekit::cli::{commands, Cli, Commands};
use filekit::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> filekit::Result<()> {
    let overrides = cli.overrides();
    let cwd = cli.cwd.as_deref();

    match &cli.command {
        Some(Commands::Read { path }) => commands::read::run(cwd, path, &overrides),
        Some(Commands::Write { path, data }) => {
            commands::write::run(cwd, path, data.as_deref(), &overrides)
        }
        Some(Commands::Append { path, data }) => {
            commands::append::run(cwd, path, data.as_deref(), &overrides)
        }
        Some(Commands::Formats { json }) => commands::formats::run(*json),
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
