//! YAML configuration for context analyzers.

use context_core::{
    ContextError, ContextResult, GrammarProvider, ResolverConfig, SelectionPolicy,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::LanguageGrammar;

/// Per-language adjustments to the built-in structural kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LanguageOverride {
    /// Replaces the preset's kinds entirely when set.
    pub structural_kinds: Option<Vec<String>>,
    /// Added on top of the preset (or replacement) kinds.
    pub extra_kinds: Vec<String>,
}

/// Configuration for creating analyzers.
///
/// ```yaml
/// policy: innermost
/// languages:
///   python:
///     extra_kinds: [decorated_definition]
///   rust:
///     structural_kinds: [function_item]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContextConfig {
    /// Tie-break policy among nested candidates.
    pub policy: SelectionPolicy,
    /// Overrides keyed by language name or alias.
    pub languages: BTreeMap<String, LanguageOverride>,
}

impl ContextConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> ContextResult<Self> {
        let config: ContextConfig =
            serde_yaml::from_str(yaml).map_err(|e| ContextError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file.
    pub fn from_file(path: &Path) -> ContextResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Replace the selection policy.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Every override key must name a built-in language, and no language
    /// may be named twice (e.g. by both `py` and `python`).
    fn validate(&self) -> ContextResult<()> {
        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
        for name in self.languages.keys() {
            let preset = crate::presets::preset_by_name(name).ok_or_else(|| {
                ContextError::Config(format!("unknown language '{name}' in configuration"))
            })?;
            if let Some(previous) = seen.insert(preset.name, name.as_str()) {
                return Err(ContextError::Config(format!(
                    "language '{}' is configured twice, as '{previous}' and '{name}'",
                    preset.name
                )));
            }
        }
        Ok(())
    }

    /// The override for `grammar`, if one is configured.
    fn override_for(&self, grammar: &LanguageGrammar) -> Option<&LanguageOverride> {
        self.languages
            .iter()
            .find(|(name, _)| grammar.preset().matches_name(name))
            .map(|(_, language)| language)
    }

    /// Resolver configuration for `grammar`: preset kinds, adjusted by any
    /// override, and the configured policy.
    pub fn resolver_config(&self, grammar: &LanguageGrammar) -> ResolverConfig {
        let mut kinds = grammar.structural_kinds();
        if let Some(language) = self.override_for(grammar) {
            if let Some(replacement) = &language.structural_kinds {
                kinds = replacement.iter().cloned().collect();
            }
            kinds.extend(language.extra_kinds.iter().cloned());
        }
        ResolverConfig::new(kinds).with_policy(self.policy)
    }
}
