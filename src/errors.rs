/// Errors surfaced at the process boundary.
use thiserror::Error;

use crate::package::PackageError;

/// Everything that can end a `docxjson` invocation unsuccessfully.
#[derive(Debug, Error)]
pub enum AppError {
    /// No file argument was supplied.
    #[error("usage: {tool} <file.docx>")]
    Usage {
        /// Binary name shown in the usage line.
        tool: &'static str,
    },

    /// The package could not be opened.
    #[error(transparent)]
    Package(#[from] PackageError),

    /// Writing the status payload to stdout failed (closed pipe, full disk).
    #[error("could not write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Exit code mapping for `AppError` variants.
impl AppError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 2,
            Self::Package(_) | Self::Output(_) => 1,
        }
    }

    /// The usage error for this binary.
    #[must_use]
    pub fn usage() -> Self {
        Self::Usage {
            tool: env!("CARGO_PKG_NAME"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_usage_exit_code() {
        assert_eq!(AppError::usage().exit_code(), 2);
    }

    #[test]
    fn test_usage_message() {
        assert_eq!(AppError::usage().to_string(), "usage: docxjson <file.docx>");
    }

    #[test]
    fn test_package_errors_exit_one() {
        let err = AppError::from(PackageError::NotFound {
            path: PathBuf::from("missing.docx"),
        });
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("missing.docx"));
    }

    #[test]
    fn test_unreadable_package_exit_one() {
        let err = AppError::from(PackageError::Io {
            path: PathBuf::from("locked.docx"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("locked.docx"));
    }

    #[test]
    fn test_output_error_exit_one() {
        let err = AppError::Output(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(err.exit_code(), 1);
        assert_ne!(err.exit_code(), AppError::usage().exit_code());
    }
}
