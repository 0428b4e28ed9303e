pub mod check;
pub mod find;

use anyhow::{anyhow, Context, Result};
use context_languages::{ContextConfig, GrammarFactory, LanguageAnalyzer};
use log::debug;
use serde::Serialize;
use std::path::Path;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(match self {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
        })
    }
}

/// Read `file` and pick an analyzer for it, by explicit language or by extension.
pub fn load_source(
    file: &Path,
    language: Option<&str>,
    config: &ContextConfig,
) -> Result<(String, LanguageAnalyzer)> {
    let analyzer = match language {
        Some(language) => GrammarFactory::create(language, config)
            .ok_or_else(|| anyhow!("Unsupported language: {language}"))?,
        None => GrammarFactory::for_path(file, config).ok_or_else(|| {
            anyhow!(
                "Cannot infer the language of '{}', pass --language",
                file.display()
            )
        })?,
    };
    debug!("Analyzing '{}' as {}", file.display(), analyzer.grammar());
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read '{}'", file.display()))?;
    Ok((source, analyzer))
}
