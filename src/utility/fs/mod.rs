// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities with busy-file retry.
//!
//! ```text
//! copy:  copy_dir_contents()  dirs replaced whole, files overwritten
//!        move_dir()           rename, copy+remove across devices
//!        remove_entry()       rm -rf that ignores missing paths
//! retry: retry_when_busy()    ETXTBSY/EBUSY -> sleep(delay), N attempts
//! ```

pub mod copy;
pub mod retry;

pub use copy::{copy_dir_contents, move_dir, remove_entry};
pub use retry::{RetryPolicy, is_busy, retry_when_busy};

#[cfg(test)]
mod tests;
