use crate::error::{ArchiveError, ArchiveErrorExt};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

static TMP_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Writes `bytes` to `target` atomically within `budget`.
///
/// 1. Data is written to a unique temporary file next to `target` (`.forgetmp.<pid>.<id>`).
/// 2. The file is synced to hardware (`fsync`).
/// 3. The temporary file is renamed to `target`, replacing any previous archive.
///
/// Parent directories are created as needed. On failure, on timeout, and when the returned
/// future is dropped before completion, the temporary file is removed and `target` is left
/// untouched.
///
/// # Errors
///
/// * [`ArchiveError::InvalidTarget`] if `target` has no file name.
/// * [`ArchiveError::Timeout`] if the write does not finish within `budget`.
/// * [`ArchiveError::Io`] for any filesystem failure.
pub async fn persist(
    target: impl AsRef<Path>,
    bytes: &[u8],
    budget: Duration,
) -> Result<(), ArchiveError> {
    let target = target.as_ref();
    let temp = unique_tmp_path(target)?;
    let mut guard = TempGuard { path: Some(temp.clone()) };

    with_budget(budget, write_atomic(target, &temp, bytes)).await?;

    guard.disarm();
    debug!(path = %target.display(), bytes = bytes.len(), "Archive saved atomically");
    Ok(())
}

async fn with_budget<F>(budget: Duration, write: F) -> Result<(), ArchiveError>
where
    F: Future<Output = Result<(), ArchiveError>>,
{
    tokio::time::timeout(budget, write)
        .await
        .map_err(|_| ArchiveError::Timeout { budget_ms: budget.as_millis(), context: None })?
}

async fn write_atomic(target: &Path, temp: &Path, bytes: &[u8]) -> Result<(), ArchiveError> {
    if let Some(parent) = target.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .context(format!("Failed to create {}", parent.display()))?;
    }

    {
        let mut file = fs::OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(temp)
            .await
            .context(format!("Temp creation failed: {}", temp.display()))?;
        file.write_all(bytes).await.context("Write failed")?;
        file.sync_all().await.context("Hardware sync failed")?;
    }

    fs::rename(temp, target).await.context(format!(
        "Atomic swap failed: {} -> {}",
        temp.display(),
        target.display()
    ))?;

    if let Some(parent) = target.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        sync_dir(parent).await;
    }
    Ok(())
}

async fn sync_dir(path: &Path) {
    match fs::File::open(path).await {
        Ok(dir) => {
            if let Err(err) = dir.sync_all().await {
                warn!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => warn!(path = %path.display(), error = %err, "Directory open failed"),
    }
}

fn unique_tmp_path(target: &Path) -> Result<PathBuf, ArchiveError> {
    let file_name = target.file_name().and_then(|name| name.to_str()).ok_or_else(|| {
        ArchiveError::InvalidTarget {
            message: format!("no file name in {}", target.display()).into(),
            context: None,
        }
    })?;
    let counter = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    Ok(target.with_file_name(format!("{file_name}.forgetmp.{}.{counter}", std::process::id())))
}

/// Removes the temporary file unless the write completed.
struct TempGuard {
    path: Option<PathBuf>,
}

impl TempGuard {
    fn disarm(&mut self) {
        self.path = None;
    }
}

impl Drop for TempGuard {
    fn drop(&mut self) {
        if let Some(path) = self.path.take() {
            match std::fs::remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "Temporary archive removed"),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {},
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Temporary archive not removed");
                },
            }
        }
    }
}
