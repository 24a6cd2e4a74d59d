use std::fmt;
use std::io;
use std::path::Path;

use backoff::LinearBackoff;
use futures::future::BoxFuture;

use crate::config::CleanupConfig;

type Remover = for<'a> fn(&'a Path) -> BoxFuture<'a, io::Result<()>>;

/// Best-effort, forced removal of temporary paths.
#[derive(Clone)]
pub struct Cleanup {
    backoff: LinearBackoff,
    remover: Remover,
}

impl Cleanup {
    pub fn new(config: &CleanupConfig) -> Self {
        Self::with_remover(config, remove_boxed)
    }

    pub(crate) fn with_remover(config: &CleanupConfig, remover: Remover) -> Self {
        Self {
            backoff: LinearBackoff::new(config.retry_delay).max_retries(config.max_retries),
            remover,
        }
    }

    /// Remove `path` recursively. A missing path counts as removed.
    ///
    /// Transient failures are retried with a linear delay, whatever error is
    /// left after that is returned.
    pub async fn try_remove(&self, path: &Path) -> io::Result<()> {
        let mut backoff = self.backoff.clone();

        loop {
            match (self.remover)(path).await {
                Ok(()) => return Ok(()),
                Err(err) if is_transient(&err) => {
                    if !backoff.wait().await {
                        return Err(err);
                    }

                    debug!(
                        message = "Remove temporary path failed, retrying",
                        ?path,
                        ?err,
                        attempt = backoff.attempts()
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Like `try_remove` but never fails, the error is logged and dropped.
    pub async fn remove(&self, path: &Path) {
        match self.try_remove(path).await {
            Ok(()) => debug!(message = "Temporary path removed", ?path),
            Err(err) => warn!(message = "Remove temporary path failed", ?path, ?err),
        }
    }
}

impl fmt::Debug for Cleanup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cleanup")
            .field("backoff", &self.backoff)
            .finish_non_exhaustive()
    }
}

fn remove_boxed(path: &Path) -> BoxFuture<'_, io::Result<()>> {
    Box::pin(remove_path(path))
}

async fn remove_path(path: &Path) -> io::Result<()> {
    // symlink_metadata, so a link is removed instead of followed
    let result = match tokio::fs::symlink_metadata(path).await {
        Ok(metadata) if metadata.is_dir() => tokio::fs::remove_dir_all(path).await,
        Ok(_) => tokio::fs::remove_file(path).await,
        Err(err) => Err(err),
    };

    match result {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        result => result,
    }
}

fn is_transient(err: &io::Error) -> bool {
    if out_of_descriptors(err) {
        return true;
    }

    matches!(
        err.kind(),
        io::ErrorKind::ResourceBusy
            | io::ErrorKind::DirectoryNotEmpty
            | io::ErrorKind::PermissionDenied
            | io::ErrorKind::Interrupted
    )
}

// EMFILE and ENFILE have no ErrorKind of their own
#[cfg(unix)]
fn out_of_descriptors(err: &io::Error) -> bool {
    matches!(err.raw_os_error(), Some(libc::EMFILE | libc::ENFILE))
}

#[cfg(not(unix))]
fn out_of_descriptors(_err: &io::Error) -> bool {
    false
}
