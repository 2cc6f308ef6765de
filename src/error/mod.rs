// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          McbError (16 bytes)
//!                 |
//!   +--------+----+----+--------+
//!   |        |         |        |
//!   v        v         v        v
//!  Git     State    Process    Fs
//!  Box      Box       Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Git      Gix, CommandFailed, NotARepository, InvalidReference, InvalidPath
//!   State    Io, Json
//!   Process  ExecutableNotFound, SpawnFailed
//!   Fs       NotFound, Busy, Io
//!
//! ConfigError stands alone: config loading reports through anyhow.
//! ```

use std::path::Path;
use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`McbError`].
pub type McbResult<T> = std::result::Result<T, McbError>;

/// Top-level application error type.
///
/// All sub-errors are boxed, so the enum is a tag plus one pointer.
#[derive(Debug, Error)]
pub enum McbError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Transient state record error.
    #[error("state error: {0}")]
    State(#[from] Box<StateError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for McbError {
                fn from(err: $error) -> Self {
                    McbError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    StateError => State,
    ProcessError => Process,
    FsError => Fs,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The working directory is not inside a git work tree.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },

    /// Git command exited with a non-zero status.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Repository reference could not be parsed.
    #[error("invalid repository reference '{reference}': {message}")]
    InvalidReference { reference: String, message: String },

    /// Path cannot be passed to git as UTF-8.
    #[error("invalid path for git: {0}")]
    InvalidPath(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- State Errors ---

/// Transient state record errors.
#[derive(Debug, Error)]
pub enum StateError {
    /// Reading or writing the record file failed.
    #[error("I/O error on state file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The record file does not hold a valid record.
    #[error("malformed state file '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// File stayed busy for every copy attempt.
    #[error("'{path}' is still busy after {attempts} attempts: {source}")]
    Busy {
        path: String,
        attempts: u32,
        #[source]
        source: std::io::Error,
    },

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Wraps an I/O error with the path it happened on.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

impl StateError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
