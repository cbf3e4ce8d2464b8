use std::io;

/// Errors that can occur while resolving the command-line argument into HTML.
///
/// The `Display` output of each variant is the exact line printed on stderr.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum InputError {
    /// The path existed when checked but was gone by the time it was read.
    #[error("Error: File not found: {path}")]
    NotFound { path: String },
    #[error("Error: Permission denied: {path}")]
    PermissionDenied { path: String },
    #[error("Error: Expected a file but got a directory: {path}")]
    IsDirectory { path: String },
    #[error("Error reading file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl InputError {
    /// Classify an I/O error raised while reading `path`.
    pub(crate) fn from_io(path: &str, error: io::Error) -> Self {
        let path = path.to_string();
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::IsADirectory => Self::IsDirectory { path },
            _ => Self::ReadFailed { path, source: error },
        }
    }
}

/// A string that is not one of an option's accepted choices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{option} must be one of {allowed}, got \"{value}\"")]
pub struct ParseChoiceError {
    pub option: &'static str,
    pub allowed: String,
    pub value: String,
}
