use std::future::Future;
use std::path::{Component, Path, PathBuf};

use crate::cleanup::Cleanup;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::name::random_name;
use crate::options::{DirectoryOptions, FileKind, FileOptions, push_extension};
use crate::task;

/// Hands out unique temporary paths under one root directory.
///
/// Nothing is shared between calls, every path carries its own random name,
/// so a `Temporary` can be used from any number of tasks at once.
#[derive(Clone, Debug)]
pub struct Temporary {
    root: PathBuf,
    cleanup: Cleanup,
}

impl Default for Temporary {
    fn default() -> Self {
        let config = Config::default();

        Self {
            root: config.root().to_path_buf(),
            cleanup: Cleanup::new(&config.cleanup),
        }
    }
}

impl Temporary {
    pub fn new(config: Config) -> Result<Self> {
        let root = config.root();
        if root.as_os_str().is_empty() || !root.is_absolute() {
            return Err(Error::InvalidRoot(root.to_path_buf()));
        }

        Ok(Self {
            root: root.to_path_buf(),
            cleanup: Cleanup::new(&config.cleanup),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn cleanup(&self) -> &Cleanup {
        &self.cleanup
    }

    /// A random path under the root, nothing is created on disk.
    fn random_path(&self, prefix: &str, extension: Option<&str>) -> Result<PathBuf> {
        let mut name = random_name(prefix)?;
        if let Some(extension) = extension {
            push_extension(&mut name, extension);
        }

        Ok(join_confined(&self.root, name))
    }

    /// Get a temporary file path you can write to.
    ///
    /// Only the `name` option touches the disk: it creates a fresh directory
    /// and returns the name inside it.
    pub fn file(&self, options: &FileOptions) -> Result<PathBuf> {
        match options.kind()? {
            FileKind::Named(name) => {
                let dir = self.directory(&DirectoryOptions::default())?;
                Ok(join_confined(&dir, name))
            }
            FileKind::Random(extension) => self.random_path("", extension),
        }
    }

    /// Get a temporary file path, pass it to `callback` and remove it once
    /// the callback is done.
    ///
    /// With the `name` option only the file is removed, the directory created
    /// to hold it stays behind.
    pub async fn file_task<F, Fut, T, E>(
        &self,
        options: &FileOptions,
        callback: F,
    ) -> Result<T, E>
    where
        F: FnOnce(PathBuf) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<Error>,
    {
        let path = self.file(options)?;
        task::run(&self.cleanup, path, callback).await
    }

    /// Create a temporary directory and return its path.
    ///
    /// The root is expected to exist already, it is never created.
    pub fn directory(&self, options: &DirectoryOptions) -> Result<PathBuf> {
        let path = self.random_path(&options.prefix, None)?;

        match std::fs::create_dir(&path) {
            Ok(()) => {
                debug!(message = "Temporary directory created", ?path);
                Ok(path)
            }
            Err(err) => Err(Error::CreateDirectory { path, err }),
        }
    }

    /// Create a temporary directory, pass it to `callback` and remove it with
    /// everything inside once the callback is done.
    pub async fn directory_task<F, Fut, T, E>(
        &self,
        options: &DirectoryOptions,
        callback: F,
    ) -> Result<T, E>
    where
        F: FnOnce(PathBuf) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<Error>,
    {
        let path = self.directory(options)?;
        task::run(&self.cleanup, path, callback).await
    }
}

/// `base` joined with the normal components of `segment` only. Root, prefix
/// and `..` components are dropped so the result never leaves `base`.
fn join_confined(base: &Path, segment: impl AsRef<Path>) -> PathBuf {
    let mut path = base.to_path_buf();
    for component in segment.as_ref().components() {
        if let Component::Normal(part) = component {
            path.push(part);
        }
    }

    path
}
