use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use context_languages::ContextConfig;
use log::debug;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "enclosing-context")]
#[command(
    about = "Find the function or class enclosing a line range, and check sources for syntax errors",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML configuration file (selection policy, structural kinds)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the structural unit enclosing a line range
    Find(commands::find::Command),

    /// Check that a source file parses without syntax errors
    Check(commands::check::Command),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "error" };
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(default_filter));

    let config = match &cli.config {
        Some(path) => ContextConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration '{}'", path.display()))?,
        None => ContextConfig::default(),
    };
    debug!("Using configuration: {:?}", config);

    match &cli.command {
        Commands::Find(args) => {
            commands::find::handler(args, &config)?;
        }
        Commands::Check(args) => {
            if !commands::check::handler(args, &config)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
