use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncWriteExt};

use crate::error::{Error, Result};
use crate::options::FileOptions;
use crate::task;
use crate::temporary::Temporary;

impl Temporary {
    /// Write `content` to a temporary file and return its path.
    pub async fn write(&self, content: impl AsRef<[u8]>, options: &FileOptions) -> Result<PathBuf> {
        let path = self.file(options)?;

        match tokio::fs::write(&path, content).await {
            Ok(()) => {
                debug!(message = "Temporary file written", ?path);
                Ok(path)
            }
            Err(err) => Err(Error::Write { path, err }),
        }
    }

    /// Write every chunk of `stream` to a temporary file and return its path.
    ///
    /// The first error the stream yields is returned as is, inside
    /// `Error::Write`. Whatever was written up to that point stays on disk.
    pub async fn write_stream<S, B>(&self, stream: S, options: &FileOptions) -> Result<PathBuf>
    where
        S: Stream<Item = io::Result<B>>,
        B: AsRef<[u8]>,
    {
        let path = self.file(options)?;

        match write_chunks(&path, stream).await {
            Ok(written) => {
                debug!(message = "Temporary file written", ?path, written);
                Ok(path)
            }
            Err(err) => Err(Error::Write { path, err }),
        }
    }

    /// Copy `reader` into a temporary file until EOF and return its path.
    pub async fn write_reader<R>(&self, mut reader: R, options: &FileOptions) -> Result<PathBuf>
    where
        R: AsyncRead + Unpin,
    {
        let path = self.file(options)?;

        let result = async {
            let mut file = File::create(&path).await?;
            let written = tokio::io::copy(&mut reader, &mut file).await?;
            file.flush().await?;

            Ok::<_, io::Error>(written)
        }
        .await;

        match result {
            Ok(written) => {
                debug!(message = "Temporary file written", ?path, written);
                Ok(path)
            }
            Err(err) => Err(Error::Write { path, err }),
        }
    }

    /// Blocking version of `write`.
    pub fn write_sync(&self, content: impl AsRef<[u8]>, options: &FileOptions) -> Result<PathBuf> {
        let path = self.file(options)?;

        match std::fs::write(&path, content) {
            Ok(()) => {
                debug!(message = "Temporary file written", ?path);
                Ok(path)
            }
            Err(err) => Err(Error::Write { path, err }),
        }
    }

    /// Write `content` to a temporary file, pass its path to `callback` and
    /// remove it once the callback is done.
    ///
    /// The callback is not run, and nothing is removed, if the write fails.
    /// With the `name` option only the file is removed, not its directory.
    pub async fn write_task<F, Fut, T, E>(
        &self,
        content: impl AsRef<[u8]>,
        options: &FileOptions,
        callback: F,
    ) -> Result<T, E>
    where
        F: FnOnce(PathBuf) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<Error>,
    {
        let path = self.write(content, options).await?;
        task::run(self.cleanup(), path, callback).await
    }

    /// `write_task` for streamed content.
    pub async fn write_stream_task<S, B, F, Fut, T, E>(
        &self,
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
        let path = self.write_stream(stream, options).await?;
        task::run(self.cleanup(), path, callback).await
    }
}

async fn write_chunks<S, B>(path: &Path, stream: S) -> io::Result<u64>
where
    S: Stream<Item = io::Result<B>>,
    B: AsRef<[u8]>,
{
    let mut file = File::create(path).await?;
    let mut stream = std::pin::pin!(stream);
    let mut written = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        let chunk = chunk.as_ref();

        file.write_all(chunk).await?;
        written += chunk.len() as u64;
    }

    // tokio's File buffers the last write in the background
    file.flush().await?;

    Ok(written)
}
