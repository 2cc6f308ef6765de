// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use super::loader::{ConfigLoader, ConfigSource};
use crate::logging::LogLevel;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.workflow.branch, "Minecraft_branch");
    assert_eq!(config.workflow.folder, "servidor_minecraft");
    assert_eq!(config.remote.name, "origin");
    assert_eq!(config.transfer.attempts, 3);
    assert_eq!(config.transfer.delay_ms, 1000);
    assert!(config.global.pause);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_overrides_defaults() {
    let config = Config::parse(
        r#"
        [workflow]
        branch = "Saves"

        [transfer]
        attempts = 5
        delay_ms = 250

        [state]
        dir = "/var/tmp/mcbranch"
        "#,
    )
    .unwrap();

    assert_eq!(config.workflow.branch, "Saves");
    assert_eq!(config.workflow.folder, "servidor_minecraft");

    let policy = config.transfer.retry_policy();
    assert_eq!(policy.attempts(), 5);
    assert_eq!(policy.delay(), Duration::from_millis(250));
    assert_eq!(
        config.state.resolved_dir(),
        PathBuf::from("/var/tmp/mcbranch")
    );
}

#[test]
fn test_unknown_key_is_rejected() {
    let result = Config::parse("[workflow]\nbranches = \"typo\"\n");
    assert!(result.is_err(), "unknown keys should be rejected");
}

#[test]
fn test_zero_attempts_is_rejected() {
    let err = Config::parse("[transfer]\nattempts = 0\n").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'attempts' in section '[transfer]': must be at least 1"
    );
}

#[test]
fn test_nested_folder_is_rejected() {
    let err = Config::parse("[workflow]\nfolder = \"a/b\"\n").unwrap_err();
    assert!(err.to_string().contains("single directory name"), "{err}");
}

#[test]
fn test_log_level_out_of_range_is_rejected() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_restore_message() {
    let config = Config::default();
    insta::assert_snapshot!(
        config.workflow.restore_message("survival-world"),
        @"Add files from survival-world"
    );
}

#[test]
fn test_format_options_is_sorted() {
    let config = Config::default();
    let lines = config.format_options();
    let keys: Vec<_> = lines
        .iter()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
    assert!(
        lines
            .iter()
            .any(|l| l.starts_with("workflow.branch") && l.ends_with("= Minecraft_branch"))
    );
}

#[test]
fn test_loader_lists_sources_in_order() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("extra.toml");
    std::fs::write(&path, "[remote]\nname = \"upstream\"\n").unwrap();

    let loader = ConfigLoader::new()
        .discover(temp.path().join("mcbranch.toml"))
        .file(&path)
        .inline("[global]\npause = false\n");
    assert_eq!(
        loader.sources(),
        [ConfigSource::File(path.clone()), ConfigSource::Inline]
    );
    let lines = loader.describe_sources();
    assert_eq!(lines[0], format!("1. [--config] {}", path.display()));
    assert_eq!(lines[1], "2. [inline]");

    let config = loader.build().unwrap();
    assert_eq!(config.remote.name, "upstream");
    assert!(!config.global.pause);
}

#[test]
fn test_loader_discovered_file_is_overridden_by_config_file() {
    let temp = tempfile::tempdir().unwrap();
    let found = temp.path().join("mcbranch.toml");
    let extra = temp.path().join("extra.toml");
    std::fs::write(&found, "[workflow]\nfolder = \"world\"\nbranch = \"Saves\"\n").unwrap();
    std::fs::write(&extra, "[workflow]\nbranch = \"Backups\"\n").unwrap();

    let loader = ConfigLoader::new().discover(&found).file(&extra);
    assert_eq!(loader.sources()[0], ConfigSource::Discovered(found.clone()));
    assert!(loader.describe_sources()[0].starts_with("1. [found] "));

    let config = loader.build().unwrap();
    assert_eq!(config.workflow.folder, "world");
    assert_eq!(config.workflow.branch, "Backups");
}

#[test]
fn test_loader_missing_config_file_fails() {
    let temp = tempfile::tempdir().unwrap();
    let err = ConfigLoader::new()
        .file(temp.path().join("absent.toml"))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("failed to parse config"), "{err}");
}

#[test]
fn test_loader_set_override() {
    let config = ConfigLoader::new()
        .set("workflow.folder", "world")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.workflow.folder, "world");
}
