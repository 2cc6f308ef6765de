// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{RetryPolicy, copy_dir_contents, is_busy, move_dir, remove_entry, retry_when_busy};
use crate::error::{FsError, McbError};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn quick_policy() -> RetryPolicy {
    RetryPolicy::new(3, Duration::from_millis(20))
}

fn busy() -> io::Error {
    io::Error::from(io::ErrorKind::ExecutableFileBusy)
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("failed to read file")
}

#[test]
fn test_is_busy_classification() {
    assert!(is_busy(&busy()));
    assert!(is_busy(&io::Error::from(io::ErrorKind::ResourceBusy)));
    assert!(!is_busy(&io::Error::from(io::ErrorKind::PermissionDenied)));
    assert!(!is_busy(&io::Error::from(io::ErrorKind::NotFound)));
}

#[test]
fn test_retry_policy_zero_attempts_means_one() {
    let policy = RetryPolicy::new(0, Duration::ZERO);
    assert_eq!(policy.attempts(), 1);
    assert_eq!(RetryPolicy::default().delay(), Duration::from_secs(1));
}

#[tokio::test]
async fn test_retry_succeeds_on_third_attempt() {
    let policy = quick_policy();
    let mut calls = 0;
    let start = Instant::now();

    let result = retry_when_busy(Path::new("server.jar"), policy, || {
        calls += 1;
        let attempt = calls;
        async move { if attempt < 3 { Err(busy()) } else { Ok(attempt) } }
    })
    .await;

    assert_eq!(result.unwrap(), 3);
    assert_eq!(calls, 3);
    assert!(
        start.elapsed() >= policy.delay() * 2,
        "should wait between attempts, took {:?}",
        start.elapsed()
    );
}

#[tokio::test]
async fn test_retry_exhausted_propagates_busy() {
    let mut calls = 0;

    let result: Result<(), McbError> =
        retry_when_busy(Path::new("server.jar"), quick_policy(), || {
            calls += 1;
            async { Err(busy()) }
        })
        .await;

    assert_eq!(calls, 3);
    match result {
        Err(McbError::Fs(err)) => {
            assert!(
                matches!(*err, FsError::Busy { attempts: 3, .. }),
                "unexpected error: {err}"
            );
        }
        other => panic!("expected busy error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_retry_other_error_is_not_retried() {
    let mut calls = 0;

    let result: Result<(), McbError> =
        retry_when_busy(Path::new("server.jar"), quick_policy(), || {
            calls += 1;
            async { Err(io::Error::from(io::ErrorKind::PermissionDenied)) }
        })
        .await;

    assert_eq!(calls, 1);
    assert!(matches!(result, Err(McbError::Fs(ref err)) if matches!(**err, FsError::Io { .. })));
}

#[tokio::test]
async fn test_copy_replaces_directories_and_overwrites_files() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    let dst = temp.path().join("dst");

    std::fs::create_dir_all(src.join("world/region")).unwrap();
    std::fs::write(src.join("world/region/r.0.0.mca"), "new region").unwrap();
    std::fs::write(src.join("server.properties"), "motd=new").unwrap();

    std::fs::create_dir_all(dst.join("world/playerdata")).unwrap();
    std::fs::write(dst.join("world/playerdata/steve.dat"), "old player").unwrap();
    std::fs::write(dst.join("server.properties"), "motd=old").unwrap();
    std::fs::write(dst.join("ops.json"), "[]").unwrap();

    copy_dir_contents(&src, &dst, quick_policy()).await.unwrap();

    // directory replaced wholesale
    assert!(!dst.join("world/playerdata").exists());
    assert_eq!(read(&dst.join("world/region/r.0.0.mca")), "new region");
    // file overwritten in place
    assert_eq!(read(&dst.join("server.properties")), "motd=new");
    // unrelated file kept
    assert_eq!(read(&dst.join("ops.json")), "[]");
}

#[tokio::test]
async fn test_copy_replaces_file_with_same_named_directory() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    let dst = temp.path().join("dst");

    std::fs::create_dir_all(src.join("logs")).unwrap();
    std::fs::write(src.join("logs/latest.log"), "started").unwrap();
    std::fs::create_dir_all(&dst).unwrap();
    std::fs::write(dst.join("logs"), "not a directory").unwrap();

    copy_dir_contents(&src, &dst, quick_policy()).await.unwrap();

    assert!(dst.join("logs").is_dir());
    assert_eq!(read(&dst.join("logs/latest.log")), "started");
}

#[tokio::test]
async fn test_copy_missing_source_fails() {
    let temp = temp_dir();
    let result = copy_dir_contents(
        &temp.path().join("missing"),
        &temp.path().join("dst"),
        quick_policy(),
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_move_dir_replaces_destination() {
    let temp = temp_dir();
    let src = temp.path().join("clone/servidor_minecraft");
    let dst = temp.path().join("servidor_minecraft");

    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(src.join("level.dat"), "restored").unwrap();
    std::fs::create_dir_all(&dst).unwrap();
    std::fs::write(dst.join("stale.dat"), "stale").unwrap();

    move_dir(&src, &dst, quick_policy()).await.unwrap();

    assert!(!src.exists());
    assert!(!dst.join("stale.dat").exists());
    assert_eq!(read(&dst.join("level.dat")), "restored");
}

#[tokio::test]
async fn test_remove_entry_ignores_missing() {
    let temp = temp_dir();
    remove_entry(&temp.path().join("nothing-here")).await.unwrap();

    let file = temp.path().join("file.txt");
    std::fs::write(&file, "x").unwrap();
    remove_entry(&file).await.unwrap();
    assert!(!file.exists());
}
