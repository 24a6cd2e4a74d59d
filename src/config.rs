use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_max_retries() -> u32 {
    2
}

const fn default_retry_delay() -> Duration {
    Duration::from_millis(100)
}

static ROOT_TEMPORARY_DIRECTORY: LazyLock<PathBuf> = LazyLock::new(resolve_root);

/// The platform temporary directory, absolute and with symlinks resolved
/// when possible. Resolved once per process.
pub fn root_temporary_directory() -> &'static Path {
    &ROOT_TEMPORARY_DIRECTORY
}

fn resolve_root() -> PathBuf {
    let dir = std::env::temp_dir();
    let dir = std::path::absolute(&dir).unwrap_or(dir);

    match dir.canonicalize() {
        Ok(resolved) => resolved,
        Err(err) => {
            debug!(
                message = "Resolve temporary directory failed, use it as is",
                ?dir,
                ?err
            );

            dir
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory every temporary path is created in. The platform temporary
    /// directory is used if not set.
    pub root: Option<PathBuf>,

    pub cleanup: CleanupConfig,
}

impl Config {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            cleanup: CleanupConfig::default(),
        }
    }

    pub fn root(&self) -> &Path {
        self.root
            .as_deref()
            .unwrap_or_else(|| root_temporary_directory())
    }
}

/// How scoped tasks remove their paths.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CleanupConfig {
    /// How many times a removal blocked by a transient error is retried.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// The n-th retry waits `retry_delay * n`.
    #[serde(default = "default_retry_delay", with = "humanize::duration::serde")]
    pub retry_delay: Duration,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay: default_retry_delay(),
        }
    }
}
