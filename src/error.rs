use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("the `name` and `extension` options are mutually exclusive")]
    InvalidOptions,

    #[error("temporary root {0:?} must be a non-empty absolute path")]
    InvalidRoot(PathBuf),

    #[error("generate random name failed: {0}")]
    Random(io::Error),

    #[error("could not create temporary directory {path:?}: {err}")]
    CreateDirectory { path: PathBuf, err: io::Error },

    #[error("could not write temporary file {path:?}: {err}")]
    Write { path: PathBuf, err: io::Error },
}

impl Error {
    /// The underlying I/O error, if this failure came from the filesystem,
    /// the content source or the OS random generator.
    #[cfg(test)]
    pub(crate) fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::InvalidOptions | Error::InvalidRoot(_) => None,
            Error::Random(err) => Some(err),
            Error::CreateDirectory { err, .. } | Error::Write { err, .. } => Some(err),
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidOptions | Error::InvalidRoot(_) => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
            Error::Random(err) => err,
            Error::CreateDirectory { err, .. } | Error::Write { err, .. } => err,
        }
    }
}
