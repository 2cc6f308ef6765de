// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for mcbranch.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. mcbranch.toml (working directory)
//! 3. --config FILE (repeatable)
//! 4. MCBRANCH_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MCBRANCH_WORKFLOW__BRANCH=Saves  → workflow.branch = "Saves"
//! MCBRANCH_TRANSFER__ATTEMPTS=5    → transfer.attempts = 5
//! MCBRANCH_GLOBAL__PAUSE=false     → global.pause = false
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, RemoteConfig, StateConfig, TransferConfig, WorkflowConfig};

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "mcbranch.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "MCBRANCH";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Branch, folder and commit messages.
    pub workflow: WorkflowConfig,
    /// Remote name and web URL base.
    pub remote: RemoteConfig,
    /// Busy-file retry settings.
    pub transfer: TransferConfig,
    /// Transient record location.
    pub state: StateConfig,
}

impl Config {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().inline(content).build()
    }

    /// Checks values that deserialize fine but cannot drive a workflow.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.workflow.validate()?;
        self.transfer.validate()?;
        if self.remote.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "remote".to_string(),
                key: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file",
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("global.pause", self.global.pause.to_string());

        options.insert("workflow.branch", self.workflow.branch.clone());
        options.insert("workflow.folder", self.workflow.folder.clone());
        options.insert(
            "workflow.publish_message",
            self.workflow.publish_message.clone(),
        );
        options.insert(
            "workflow.restore_message_prefix",
            self.workflow.restore_message_prefix.clone(),
        );

        options.insert("remote.name", self.remote.name.clone());
        options.insert("remote.web_base", self.remote.web_base.clone());

        options.insert("transfer.attempts", self.transfer.attempts.to_string());
        options.insert("transfer.delay_ms", self.transfer.delay_ms.to_string());

        options.insert(
            "state.dir",
            self.state.resolved_dir().display().to_string(),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
