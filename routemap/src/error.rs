use std::fmt;
use std::io;
use std::path::Path;

/// Broad category of a [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The route export does not exist.
    NotFound,
    /// The route export is not a JSON array.
    Parse,
    /// Any other read or write failure.
    Io,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: msg.into(),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Parse,
            message: msg.into(),
        }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: msg.into(),
        }
    }

    /// Maps a failed read of `path`, keeping "missing file" distinct.
    pub(crate) fn from_read(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::not_found(format!("route file not found: {}", path.display()))
        } else {
            Self::io(format!("failed to read {}: {}", path.display(), err))
        }
    }

    pub(crate) fn from_write(path: &Path, err: io::Error) -> Self {
        Self::io(format!("failed to write {}: {}", path.display(), err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
