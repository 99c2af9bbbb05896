//! Shared configuration loader for the swordtex tools
//!
//! `defaults/swordtex.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer
//! user-specific files on top of those defaults via [`Loader`] before
//! deserializing into [`SwordtexConfig`]. The parsers themselves take all
//! parameters explicitly; configuration exists so that callers (the CLI,
//! a UI shell) own the ambient choices (selected module, locale, option
//! filters) and thread them down.

use crate::strongs::Lexicon;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/swordtex.default.toml");

/// Top-level configuration consumed by swordtex applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SwordtexConfig {
    pub api: ApiConfig,
    pub lexicon: LexiconConfig,
}

/// Parameters of the text-search API collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub default_module: String,
    pub locale: String,
    pub option_filters: String,
}

/// Lexicon module names and the default pair-table source side.
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
    pub hebrew_module: String,
    pub greek_module: String,
    pub default_source: SourceSide,
}

/// Which namespace is the source side of a pair-table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceSide {
    Hebrew,
    Greek,
}

impl SourceSide {
    pub fn lexicon(self) -> Lexicon {
        match self {
            SourceSide::Hebrew => Lexicon::Hebrew,
            SourceSide::Greek => Lexicon::Greek,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SwordtexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SwordtexConfig, ConfigError> {
    Loader::new().build()
}
