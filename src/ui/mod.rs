// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operator-facing terminal I/O.
//!
//! ```text
//! Operator::prompt()   "Enter the repository link: " -> trimmed line
//! Operator::success()  green -> azure -> magenta
//! Operator::pause()    wait for Enter
//! error_text()         red -> orange (stderr, printed by main)
//! ```
//!
//! Colors are dropped when `NO_COLOR` is set.

pub mod gradient;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Stdout, Write};

pub use gradient::{Rgb, paint};

/// Prompt shown by `link` when no `--repo` is given.
pub const REPO_PROMPT: &str = "Enter the repository link: ";

const PAUSE_PROMPT: &str = "Press Enter to continue...";

/// Whether output should be colored.
#[must_use]
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// `text` in the error gradient, or unchanged when `color` is false.
#[must_use]
pub fn error_text(text: &str, color: bool) -> String {
    if color {
        paint(text, gradient::ERROR)
    } else {
        text.to_string()
    }
}

/// Reads operator input and writes operator-facing messages.
pub struct Operator<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl Operator<io::StdinLock<'static>, Stdout> {
    /// Operator on the process stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color_enabled())
    }
}

impl<R: BufRead, W: Write> Operator<R, W> {
    pub const fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Shows `text` and returns the next input line, trimmed. End of input
    /// yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing the prompt or reading input fails.
    pub fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Writes `text` in the success gradient.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn success(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "{}", paint(text, gradient::SUCCESS))
        } else {
            writeln!(self.output, "{text}")
        }
    }

    /// Writes `text` unstyled.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Waits for Enter. Does nothing when `enabled` is false.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing the prompt or reading input fails.
    pub fn pause(&mut self, enabled: bool) -> io::Result<()> {
        if !enabled {
            return Ok(());
        }
        self.prompt(PAUSE_PROMPT).map(drop)
    }
}
