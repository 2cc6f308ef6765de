// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Truecolor text gradients.
//!
//! ```text
//! "Failed"  F   a   i   l   e   d
//!           red ----------> orange     ESC[38;2;R;G;Bm per character
//! ```

use std::fmt::Write;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Red to orange.
pub const ERROR: &[Rgb] = &[Rgb::new(255, 0, 0), Rgb::new(255, 128, 0)];

/// Green to azure to magenta.
pub const SUCCESS: &[Rgb] = &[
    Rgb::new(0, 255, 0),
    Rgb::new(0, 128, 255),
    Rgb::new(255, 0, 255),
];

const RESET: &str = "\x1b[0m";

/// Color of character `index` out of `len` when `stops` are spread evenly
/// over the text. The first character gets the first stop, the last
/// character the last stop.
#[must_use]
pub fn color_at(stops: &[Rgb], index: usize, len: usize) -> Rgb {
    let (Some(&first), Some(&last)) = (stops.first(), stops.last()) else {
        return Rgb::new(255, 255, 255);
    };
    if stops.len() == 1 || len <= 1 {
        return first;
    }
    if index + 1 >= len {
        return last;
    }

    let segments = stops.len() - 1;
    let span = len - 1;
    let scaled = index * segments;
    let segment = (scaled / span).min(segments - 1);
    let offset = scaled - segment * span;

    let from = stops[segment];
    let to = stops[segment + 1];
    Rgb::new(
        lerp(from.r, to.r, offset, span),
        lerp(from.g, to.g, offset, span),
        lerp(from.b, to.b, offset, span),
    )
}

fn lerp(from: u8, to: u8, offset: usize, span: usize) -> u8 {
    let from = i64::from(from);
    let to = i64::from(to);
    let offset = i64::try_from(offset).unwrap_or(i64::MAX);
    let span = i64::try_from(span).unwrap_or(i64::MAX).max(1);
    let value = from + (to - from) * offset / span;
    u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
}

/// Paints `text` with a gradient over `stops`. Whitespace is passed through
/// uncolored but still advances the gradient.
#[must_use]
pub fn paint(text: &str, stops: &[Rgb]) -> String {
    let len = text.chars().count();
    if len == 0 {
        return String::new();
    }

    let mut out = String::with_capacity(text.len() * 20);
    for (index, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            out.push(ch);
            continue;
        }
        let Rgb { r, g, b } = color_at(stops, index, len);
        let _ = write!(out, "\x1b[38;2;{r};{g};{b}m{ch}");
    }
    out.push_str(RESET);
    out
}
