// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)         cmd (handlers) ---> ui
//!                |             branch / link        prompt, gradient
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |         workflow          |
//!              |     publish / restore     |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!                git        state   utility::fs
//!              gix/CLI      JSON    copy, retry
//!
//!   +-----------------------------------------+
//!   |  foundation   config, error, logging    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod state;
pub mod ui;
pub mod utility;
pub mod workflow;
