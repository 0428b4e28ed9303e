use anyhow::Result;
use clap::Args;
use context_languages::ContextConfig;
use std::path::PathBuf;

use super::{load_source, OutputFormat};

#[derive(Args, Debug)]
pub struct Command {
    /// Source file to check
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Language of the file, inferred from its extension when omitted
    #[arg(long)]
    language: Option<String>,

    /// List every syntax error instead of stopping at the first
    #[arg(long)]
    all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

/// Print the check result; returns whether the file is valid.
pub fn handler(args: &Command, config: &ContextConfig) -> Result<bool> {
    let (output, valid) = run(args, config)?;
    println!("{output}");
    Ok(valid)
}

fn run(args: &Command, config: &ContextConfig) -> Result<(String, bool)> {
    let (source, analyzer) = load_source(&args.file, args.language.as_deref(), config)?;

    if args.all {
        let errors = analyzer.syntax_errors(&source)?;
        return Ok((args.format.render(&errors)?, errors.is_empty()));
    }

    let result = analyzer.dry_run(&source);
    Ok((args.format.render(&result)?, result.valid))
}
