use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;

use futures::FutureExt;

use crate::cleanup::Cleanup;

/// Run `callback` with `path`, then remove `path` no matter how the callback
/// finished.
///
/// The callback's value or error is returned unchanged and a panic is resumed
/// once the path is gone. Cleanup failures are logged, never returned.
pub async fn run<F, Fut, T, E>(cleanup: &Cleanup, path: PathBuf, callback: F) -> Result<T, E>
where
    F: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let task_path = path.clone();
    let outcome = AssertUnwindSafe(async move { callback(task_path).await })
        .catch_unwind()
        .await;

    cleanup.remove(&path).await;

    match outcome {
        Ok(result) => result,
        Err(reason) => std::panic::resume_unwind(reason),
    }
}
