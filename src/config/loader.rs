// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! Later layers win:
//!
//! ```text
//!  <workdir>/mcbranch.toml     ConfigSource::Discovered  (skipped when absent)
//!  --config FILE ...           ConfigSource::File        (must exist)
//!  inline TOML                 ConfigSource::Inline
//!  MCBRANCH_<SECTION>__<KEY>   environment
//!  command-line flags          set()
//!        |
//!        v
//!   build() --> Config (validated)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::{File, FileFormat};

use super::Config;
use crate::error::{ConfigError, Result};

/// A TOML layer that contributed to the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `mcbranch.toml` found in the working tree.
    Discovered(PathBuf),
    /// A file named with `--config`.
    File(PathBuf),
    /// TOML text handed over directly.
    Inline,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discovered(path) => write!(f, "[found] {}", path.display()),
            Self::File(path) => write!(f, "[--config] {}", path.display()),
            Self::Inline => f.write_str("[inline]"),
        }
    }
}

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

fn parse_error(e: impl fmt::Display) -> ConfigError {
    ConfigError::ParseError {
        message: e.to_string(),
    }
}

/// Collects configuration layers, then merges and validates them in `build`.
pub struct ConfigLoader {
    builder: Builder,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Uses `path` when it exists; a missing file is not an error.
    #[must_use]
    pub fn discover(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.is_file() {
            self.builder = self
                .builder
                .add_source(File::from(path).format(FileFormat::Toml));
            self.sources.push(ConfigSource::Discovered(path.to_path_buf()));
        }
        self
    }

    /// Adds a file that must exist when `build` runs.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.sources.push(ConfigSource::File(path.to_path_buf()));
        self
    }

    #[must_use]
    pub fn inline(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables, e.g. `MCBRANCH_WORKFLOW__BRANCH`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Overrides `key` (dotted, e.g. `global.pause`) above every other layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be parsed as a config path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(parse_error)?;
        Ok(self)
    }

    /// TOML layers added so far, in load order.
    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Numbered lines for the `options` listing.
    #[must_use]
    pub fn describe_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }

    /// Merges every layer into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if a `--config` file is missing or not valid TOML, if
    /// the merged values do not fit [`Config`], or if validation rejects them.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let config: Config = builder
            .build()
            .map_err(parse_error)?
            .try_deserialize()
            .map_err(parse_error)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
