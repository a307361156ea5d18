// std imports
use std::{include_str, path::Path};

// third-party imports
use clap::ValueEnum;
use config::{Config, File, FileFormat};
use lexkit::TokenType;
use serde::Deserialize;

// local imports
use crate::{error::*, syntax};

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.toml");

pub const CONFIG_ENV: &str = "SECTIONAL_CONFIG";

// ---

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub discard: Vec<String>,
    pub output: OutputFormat,
    pub color: ColorOption,
}

impl Settings {
    /// Loads the embedded defaults, overlaid by the file named in `SECTIONAL_CONFIG`
    /// if it exists, and then by `extra` which must exist.
    pub fn load(extra: Option<&Path>) -> Result<Self> {
        let env = std::env::var(CONFIG_ENV).ok().filter(|name| !name.is_empty());
        Self::load_from(env.as_deref(), extra)
    }

    fn load_from(optional: Option<&str>, extra: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        if let Some(name) = optional {
            log::debug!("looking for settings in {}", name);
            builder = builder.add_source(File::with_name(name).format(FileFormat::Toml).required(false));
        }

        if let Some(path) = extra {
            log::debug!("loading settings from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Resolves the configured discard list into token types.
    pub fn discard_types(&self) -> Result<Vec<TokenType>> {
        self.discard.iter().map(|name| resolve_token_type(name)).collect()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            discard: syntax::DEFAULT_DISCARD.iter().map(|ty| ty.name().to_owned()).collect(),
            output: OutputFormat::Debug,
            color: ColorOption::Auto,
        }
    }
}

// ---

/// Looks up a token type by name, failing with the list of known names.
pub fn resolve_token_type(name: &str) -> Result<TokenType> {
    syntax::token_type(name).ok_or_else(|| Error::UnknownTokenType {
        name: name.to_owned(),
        known: syntax::TOKEN_TYPES.iter().map(|ty| ty.name().to_owned()).collect(),
    })
}

// ---

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Debug,
    Json,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ColorOption {
    Auto,
    Always,
    Never,
}
