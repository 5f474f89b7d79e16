/// Errors from the package-reading layer.
use std::path::PathBuf;

use thiserror::Error;

/// Typed failures while opening an OPC package.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Nothing exists at the given path.
    #[error("could not open '{}': no such file", path.display())]
    NotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The file exists but could not be opened for reading.
    #[error("could not open '{}': {source}", path.display())]
    Io {
        /// The path that was requested.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a readable ZIP archive.
    #[error("could not open '{}': not a valid package ({source})", path.display())]
    Archive {
        /// The path that was requested.
        path: PathBuf,
        /// Error reported by the ZIP reader.
        #[source]
        source: zip::result::ZipError,
    },

    /// The ZIP archive lacks the content types part every package carries.
    #[error("could not open '{}': not a valid package (missing {part})", path.display())]
    NotAPackage {
        /// The path that was requested.
        path: PathBuf,
        /// Name of the part that was expected.
        part: &'static str,
    },
}

impl PackageError {
    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Io { .. } => "io_error",
            Self::Archive { .. } => "invalid_archive",
            Self::NotAPackage { .. } => "not_a_package",
        }
    }
}
