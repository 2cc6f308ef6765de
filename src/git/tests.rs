// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::GitError;
use crate::git::RepoRef;
use crate::git::cmd::point_remote;
use crate::git::query::{ensure_work_tree, is_git_repo};
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn git(args: &[&str], cwd: &std::path::Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_repo_ref_https() {
    let repo = RepoRef::parse("https://github.com/steve/survival.git").unwrap();
    assert_eq!(repo.owner(), Some("steve"));
    assert_eq!(repo.repo_name(), "survival");
    insta::assert_snapshot!(
        repo.branch_url("https://github.com", "Minecraft_branch"),
        @"https://github.com/steve/survival/tree/Minecraft_branch"
    );
}

#[test]
fn test_repo_ref_ssh_scp_style() {
    let repo = RepoRef::parse("git@github.com:steve/survival.git").unwrap();
    assert_eq!(repo.owner(), Some("steve"));
    assert_eq!(repo.repo_name(), "survival");
}

#[test]
fn test_repo_ref_trims_and_ignores_trailing_slash() {
    let repo = RepoRef::parse("  https://github.com/alex/creative/  ").unwrap();
    assert_eq!(repo.url(), "https://github.com/alex/creative/");
    assert_eq!(repo.owner(), Some("alex"));
    assert_eq!(repo.repo_name(), "creative");
}

#[test]
fn test_repo_ref_only_strips_git_suffix() {
    let repo = RepoRef::parse("https://github.com/alex/my.gitworld").unwrap();
    assert_eq!(repo.repo_name(), "my.gitworld");
}

#[test]
fn test_repo_ref_without_owner() {
    let repo = RepoRef::parse("survival").unwrap();
    assert_eq!(repo.owner(), None);
    insta::assert_snapshot!(
        repo.branch_url("https://github.com/", "Minecraft_branch"),
        @"https://github.com/survival/tree/Minecraft_branch"
    );
}

#[test]
fn test_repo_ref_rejects_empty() {
    for input in ["", "   ", "/", ".git", "git@host:/.git"] {
        let result = RepoRef::parse(input);
        assert!(
            matches!(result, Err(GitError::InvalidReference { .. })),
            "{input:?} should be rejected, got {result:?}"
        );
    }
}

#[test]
fn test_repo_ref_displays_trimmed_link() {
    let repo = RepoRef::parse(" https://github.com/steve/survival.git\n").unwrap();
    assert_eq!(repo.to_string(), "https://github.com/steve/survival.git");
}

#[test]
fn test_ensure_work_tree() {
    let temp = temp_dir();
    let err = ensure_work_tree(temp.path()).unwrap_err();
    assert!(err.to_string().contains("not a git repository"), "{err}");

    git(&["init", "--quiet"], temp.path());
    assert!(is_git_repo(temp.path()));
    ensure_work_tree(temp.path()).unwrap();
}

#[test]
fn test_point_remote_adds_then_updates() {
    let temp = temp_dir();
    git(&["init", "--quiet"], temp.path());

    point_remote(temp.path(), "origin", "https://github.com/a/one.git").unwrap();
    assert_eq!(
        git(&["remote", "get-url", "origin"], temp.path()),
        "https://github.com/a/one.git"
    );

    point_remote(temp.path(), "origin", "https://github.com/a/two.git").unwrap();
    assert_eq!(
        git(&["remote", "get-url", "origin"], temp.path()),
        "https://github.com/a/two.git"
    );
}
