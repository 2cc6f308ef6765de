// mcbranch: Minecraft server branch helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, trace};

use super::retry::{RetryPolicy, retry_when_busy};
use crate::error::{FsError, McbResult};

/// Copies all contents of `src` into `dst`, creating `dst` if needed.
///
/// Subdirectories replace any same-named entry in `dst` wholesale; files are
/// copied over same-named files in place and other `dst` entries are kept.
/// A busy file is retried according to `policy`.
///
/// # Example
/// ```no_run
/// use mcbranch::utility::fs::{RetryPolicy, copy_dir_contents};
/// use std::path::Path;
///
/// # async fn example() -> mcbranch::error::McbResult<()> {
/// copy_dir_contents(
///     Path::new("/backup/servidor_minecraft"),
///     Path::new("servidor_minecraft"),
///     RetryPolicy::default(),
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
/// # Errors
///
/// Returns `FsError::Busy` if a file stays busy for every attempt, or
/// `FsError::Io` for any other failure.
pub async fn copy_dir_contents(src: &Path, dst: &Path, policy: RetryPolicy) -> McbResult<()> {
    fs::create_dir_all(dst)
        .await
        .map_err(|e| FsError::io(dst, e))?;

    let mut entries = fs::read_dir(src).await.map_err(|e| FsError::io(src, e))?;

    while let Some(entry) = entries.next_entry().await.map_err(|e| FsError::io(src, e))? {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            remove_entry(&dst_path).await?;
            trace!(from = %src_path.display(), to = %dst_path.display(), "copy tree");
            Box::pin(copy_dir_contents(&src_path, &dst_path, policy)).await?;
        } else {
            retry_when_busy(&src_path, policy, || fs::copy(&src_path, &dst_path)).await?;
        }
    }

    Ok(())
}

/// Moves directory `src` to `dst`, removing whatever `dst` held before.
///
/// Falls back to copy-then-delete when `src` and `dst` live on different
/// filesystems.
///
/// # Errors
///
/// Returns `FsError` if removal, rename or the fallback copy fails.
pub async fn move_dir(src: &Path, dst: &Path, policy: RetryPolicy) -> McbResult<()> {
    remove_entry(dst).await?;

    match fs::rename(src, dst).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            debug!(
                from = %src.display(),
                to = %dst.display(),
                "rename crosses devices, copying instead"
            );
            copy_dir_contents(src, dst, policy).await?;
            fs::remove_dir_all(src)
                .await
                .map_err(|e| FsError::io(src, e))?;
            Ok(())
        }
        Err(e) => Err(FsError::io(src, e).into()),
    }
}

/// Removes a file or directory tree. A missing path is not an error.
///
/// # Errors
///
/// Returns `FsError::Io` if the entry exists but cannot be removed.
pub async fn remove_entry(path: &Path) -> McbResult<()> {
    let metadata = match fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(FsError::io(path, e).into()),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };
    result.map_err(|e| FsError::io(path, e).into())
}
