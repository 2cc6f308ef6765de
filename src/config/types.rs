// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for mcbranch.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, WorkflowConfig, RemoteConfig, TransferConfig, StateConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::utility::fs::RetryPolicy;

/// Branch every save is pushed to.
pub const DEFAULT_BRANCH: &str = "Minecraft_branch";

/// Folder that is saved and restored.
pub const DEFAULT_FOLDER: &str = "servidor_minecraft";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file (no file logging when unset).
    pub log_file: Option<PathBuf>,
    /// Wait for Enter after reporting a result.
    pub pause: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            pause: true,
        }
    }
}

/// Names and messages shared by the publish and restore workflows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkflowConfig {
    /// The single branch that holds the latest save.
    pub branch: String,
    /// The managed subfolder of the working tree.
    pub folder: String,
    /// Commit message used when publishing.
    pub publish_message: String,
    /// Commit message prefix used when restoring; the source repo name is appended.
    pub restore_message_prefix: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            folder: DEFAULT_FOLDER.to_string(),
            publish_message: format!("Save branch for your {DEFAULT_FOLDER}"),
            restore_message_prefix: "Add files from".to_string(),
        }
    }
}

impl WorkflowConfig {
    /// Commit message for a restore from `repo_name`.
    #[must_use]
    pub fn restore_message(&self, repo_name: &str) -> String {
        format!("{} {repo_name}", self.restore_message_prefix)
    }

    /// Rejects names git or the filesystem cannot use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty branch, an empty folder
    /// or a folder that is not a single path component.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.branch.trim().is_empty() {
            return Err(invalid("workflow", "branch", "must not be empty"));
        }
        if self.folder.trim().is_empty() {
            return Err(invalid("workflow", "folder", "must not be empty"));
        }
        if self.folder.contains(['/', '\\']) || self.folder == "." || self.folder == ".." {
            return Err(invalid(
                "workflow",
                "folder",
                "must be a single directory name",
            ));
        }
        Ok(())
    }
}

/// Remote the workflows push to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteConfig {
    /// Remote name (`origin`).
    pub name: String,
    /// Base of the web URL printed after a publish.
    pub web_base: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            name: "origin".to_string(),
            web_base: "https://github.com".to_string(),
        }
    }
}

/// Busy-file retry settings for file transfer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransferConfig {
    /// Total copy attempts per file.
    pub attempts: u32,
    /// Delay between attempts, in milliseconds.
    pub delay_ms: u64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay_ms: 1000,
        }
    }
}

impl TransferConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `attempts` is zero.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.attempts == 0 {
            return Err(invalid("transfer", "attempts", "must be at least 1"));
        }
        Ok(())
    }

    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.attempts, Duration::from_millis(self.delay_ms))
    }
}

/// Where the transient repository record is written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StateConfig {
    /// Directory for the record file; the system temp directory when unset.
    pub dir: Option<PathBuf>,
}

impl StateConfig {
    #[must_use]
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
