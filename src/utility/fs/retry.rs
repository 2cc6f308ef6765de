// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bounded retry for files that are momentarily in use.
//!
//! An editor or the OS can still hold a file open right after the operator
//! saved it; copying it then fails with a "busy" error that clears on its own.

use std::future::Future;
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::error::{FsError, McbResult};

/// How often and how patiently a busy file is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

impl RetryPolicy {
    /// `attempts` counts the first try; zero is treated as one.
    #[must_use]
    pub const fn new(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts: if attempts == 0 { 1 } else { attempts },
            delay,
        }
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

/// Whether an I/O error means "file in use, try again later".
#[must_use]
pub fn is_busy(err: &io::Error) -> bool {
    if matches!(
        err.kind(),
        io::ErrorKind::ExecutableFileBusy | io::ErrorKind::ResourceBusy
    ) {
        return true;
    }
    // ERROR_SHARING_VIOLATION, ERROR_LOCK_VIOLATION
    #[cfg(windows)]
    {
        matches!(err.raw_os_error(), Some(32 | 33))
    }
    #[cfg(not(windows))]
    {
        false
    }
}

/// Runs `op` until it succeeds, retrying busy errors per `policy`.
///
/// `path` only labels log lines and errors.
///
/// # Errors
///
/// Returns `FsError::Busy` when every attempt failed with a busy error, and
/// `FsError::Io` immediately for any other error.
pub async fn retry_when_busy<T, F, Fut>(path: &Path, policy: RetryPolicy, mut op: F) -> McbResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<T>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if is_busy(&err) => {
                if attempt >= policy.attempts() {
                    return Err(FsError::Busy {
                        path: path.display().to_string(),
                        attempts: attempt,
                        source: err,
                    }
                    .into());
                }
                warn!(
                    path = %path.display(),
                    attempt,
                    delay_ms = policy.delay().as_millis(),
                    "file busy, retrying"
                );
                tokio::time::sleep(policy.delay()).await;
                attempt += 1;
            }
            Err(err) => return Err(FsError::io(path, err).into()),
        }
    }
}
