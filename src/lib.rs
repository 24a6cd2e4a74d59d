//! Uniquely named temporary files and directories.
//!
//! Paths live under the platform temporary directory (or a configured root)
//! and carry 128 hex characters of OS randomness in their name. The `*_task`
//! functions hand a path to a callback and remove it afterwards, whether the
//! callback succeeded, failed or panicked.

mod cleanup;
mod config;
mod error;
mod name;
mod options;
mod task;
mod temporary;
mod write;

#[macro_use]
extern crate tracing;

use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::sync::LazyLock;

use futures::Stream;
use tokio::io::AsyncRead;

// re-export
pub use cleanup::Cleanup;
pub use config::{CleanupConfig, Config, root_temporary_directory};
pub use error::{Error, Result};
pub use options::{DirectoryOptions, FileOptions};
pub use temporary::Temporary;

static DEFAULT: LazyLock<Temporary> = LazyLock::new(Temporary::default);

/// Get a temporary file path you can write to.
pub fn temporary_file(options: &FileOptions) -> Result<PathBuf> {
    DEFAULT.file(options)
}

/// Get a temporary file path for the duration of `callback`.
pub async fn temporary_file_task<F, Fut, T, E>(options: &FileOptions, callback: F) -> Result<T, E>
where
    F: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<Error>,
{
    DEFAULT.file_task(options, callback).await
}

/// Create a temporary directory and return its path.
pub fn temporary_directory(options: &DirectoryOptions) -> Result<PathBuf> {
    DEFAULT.directory(options)
}

/// Create a temporary directory for the duration of `callback`.
pub async fn temporary_directory_task<F, Fut, T, E>(
    options: &DirectoryOptions,
    callback: F,
) -> Result<T, E>
where
    F: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<Error>,
{
    DEFAULT.directory_task(options, callback).await
}

/// Write `content` to a temporary file and return its path.
pub async fn temporary_write(content: impl AsRef<[u8]>, options: &FileOptions) -> Result<PathBuf> {
    DEFAULT.write(content, options).await
}

/// Write a stream of chunks to a temporary file and return its path.
pub async fn temporary_write_stream<S, B>(stream: S, options: &FileOptions) -> Result<PathBuf>
where
    S: Stream<Item = io::Result<B>>,
    B: AsRef<[u8]>,
{
    DEFAULT.write_stream(stream, options).await
}

/// Copy a reader into a temporary file and return its path.
pub async fn temporary_write_reader<R>(reader: R, options: &FileOptions) -> Result<PathBuf>
where
    R: AsyncRead + Unpin,
{
    DEFAULT.write_reader(reader, options).await
}

/// Write `content` to a temporary file for the duration of `callback`.
pub async fn temporary_write_task<F, Fut, T, E>(
    content: impl AsRef<[u8]>,
    options: &FileOptions,
    callback: F,
) -> Result<T, E>
where
    F: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<Error>,
{
    DEFAULT.write_task(content, options, callback).await
}

/// Write a stream of chunks to a temporary file for the duration of
/// `callback`.
pub async fn temporary_write_stream_task<S, B, F, Fut, T, E>(
    stream: S,
    options: &FileOptions,
    callback: F,
) -> Result<T, E>
where
    S: Stream<Item = io::Result<B>>,
    B: AsRef<[u8]>,
    F: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<Error>,
{
    DEFAULT
        .write_stream_task(stream, options, callback)
        .await
}

/// Blocking version of `temporary_write`.
pub fn temporary_write_sync(content: impl AsRef<[u8]>, options: &FileOptions) -> Result<PathBuf> {
    DEFAULT.write_sync(content, options)
}
