// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   copy:   copy_dir_contents(), move_dir(), remove_entry()
//!   retry:  RetryPolicy, retry_when_busy(), is_busy()
//! ```

pub mod fs;
