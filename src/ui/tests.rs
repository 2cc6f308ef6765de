// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::gradient::{self, Rgb, color_at};
use super::{Operator, REPO_PROMPT, error_text, paint};
use std::io::Cursor;

fn operator<'a>(
    input: &str,
    out: &'a mut Vec<u8>,
    color: bool,
) -> Operator<Cursor<Vec<u8>>, &'a mut Vec<u8>> {
    Operator::new(Cursor::new(input.as_bytes().to_vec()), out, color)
}

fn written(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("operator output is UTF-8")
}

#[test]
fn test_color_at_hits_every_stop() {
    let stops = gradient::SUCCESS;
    assert_eq!(color_at(stops, 0, 5), Rgb::new(0, 255, 0));
    assert_eq!(color_at(stops, 2, 5), Rgb::new(0, 128, 255));
    assert_eq!(color_at(stops, 4, 5), Rgb::new(255, 0, 255));
}

#[test]
fn test_color_at_interpolates() {
    let stops = &[Rgb::new(0, 0, 0), Rgb::new(200, 100, 50)];
    assert_eq!(color_at(stops, 1, 3), Rgb::new(100, 50, 25));
}

#[test]
fn test_success_midpoints() {
    // halfway between green and azure, then between azure and magenta
    assert_eq!(color_at(gradient::SUCCESS, 1, 5), Rgb::new(0, 192, 127));
    assert_eq!(color_at(gradient::SUCCESS, 3, 5), Rgb::new(127, 64, 255));
}

#[test]
fn test_color_at_degenerate_inputs() {
    assert_eq!(color_at(&[], 0, 3), Rgb::new(255, 255, 255));
    assert_eq!(color_at(gradient::ERROR, 0, 1), Rgb::new(255, 0, 0));
    assert_eq!(color_at(&[Rgb::new(1, 2, 3)], 7, 9), Rgb::new(1, 2, 3));
}

#[test]
fn test_paint_two_characters() {
    assert_eq!(
        paint("ok", gradient::ERROR),
        "\x1b[38;2;255;0;0mo\x1b[38;2;255;128;0mk\x1b[0m"
    );
}

#[test]
fn test_paint_passes_whitespace_and_empty() {
    let painted = paint("a b", gradient::ERROR);
    assert!(painted.contains("ma \x1b["), "{painted:?}");
    assert_eq!(paint("", gradient::ERROR), "");
}

#[test]
fn test_error_text_without_color() {
    insta::assert_snapshot!(error_text("push rejected", false), @"push rejected");
}

#[test]
fn test_prompt_trims_input() {
    let mut out = Vec::new();
    let mut op = operator("  https://github.com/steve/survival.git \r\n", &mut out, false);
    let answer = op.prompt(REPO_PROMPT).unwrap();
    assert_eq!(answer, "https://github.com/steve/survival.git");
    insta::assert_snapshot!(written(out), @"Enter the repository link: ");
}

#[test]
fn test_prompt_at_end_of_input_is_empty() {
    let mut out = Vec::new();
    let mut op = operator("", &mut out, false);
    assert_eq!(op.prompt(REPO_PROMPT).unwrap(), "");
}

#[test]
fn test_pause_disabled_reads_nothing() {
    let mut out = Vec::new();
    let mut op = operator("first\nsecond\n", &mut out, false);
    op.pause(false).unwrap();
    assert_eq!(op.prompt("> ").unwrap(), "first");
    op.pause(true).unwrap();

    insta::assert_snapshot!(written(out), @"> Press Enter to continue...");
}

#[test]
fn test_success_plain_and_colored() {
    let mut out = Vec::new();
    let mut op = operator("", &mut out, false);
    op.success("done").unwrap();
    op.say("bye").unwrap();
    assert_eq!(written(out), "done\nbye\n");

    let mut out = Vec::new();
    let mut op = operator("", &mut out, true);
    op.success("done").unwrap();
    let painted = written(out);
    assert!(painted.starts_with("\x1b[38;2;0;255;0md"), "{painted:?}");
    assert!(painted.ends_with("\x1b[0m\n"), "{painted:?}");
}
