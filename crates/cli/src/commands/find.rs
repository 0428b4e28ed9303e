use anyhow::Result;
use clap::Args;
use context_languages::{ContextConfig, SelectionPolicy};
use std::path::PathBuf;

use super::{load_source, OutputFormat};

#[derive(Args, Debug)]
pub struct Command {
    /// Source file to analyze
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// First line of the range (1-based)
    #[arg(long)]
    start: usize,

    /// Last line of the range (1-based), defaults to --start
    #[arg(long)]
    end: Option<usize>,

    /// Language of the file, inferred from its extension when omitted
    #[arg(long)]
    language: Option<String>,

    /// Which unit wins when several nested ones contain the range
    #[arg(long, value_enum)]
    policy: Option<Policy>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Policy {
    Outermost,
    Innermost,
}

impl From<Policy> for SelectionPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Outermost => SelectionPolicy::Outermost,
            Policy::Innermost => SelectionPolicy::Innermost,
        }
    }
}

pub fn handler(args: &Command, config: &ContextConfig) -> Result<()> {
    println!("{}", run(args, config)?);
    Ok(())
}

fn run(args: &Command, config: &ContextConfig) -> Result<String> {
    let config = match args.policy {
        Some(policy) => config.clone().with_policy(policy.into()),
        None => config.clone(),
    };
    let (source, analyzer) = load_source(&args.file, args.language.as_deref(), &config)?;

    let end = args.end.unwrap_or(args.start);
    let result = analyzer.find_enclosing_context(&source, args.start, end);
    args.format.render(&result)
}
