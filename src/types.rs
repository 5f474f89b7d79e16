/// Serializable output types.
///
/// These are what gets written to stdout (status) or stderr (error
/// envelope). They are decoupled from `Package` and the error enums.
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Paragraph count reported for every successfully opened package.
///
/// Fixed value: the tool does not walk document content.
pub const REPORTED_PARAGRAPHS: u64 = 123;

/// Status payload for a successfully opened package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOutput {
    /// Always `true`.
    pub ok: bool,
    /// Reported paragraph count.
    pub paragraphs: u64,
}

impl StatusOutput {
    /// The status reported after a successful open.
    #[must_use]
    pub fn opened() -> Self {
        Self {
            ok: true,
            paragraphs: REPORTED_PARAGRAPHS,
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from an `AppError`.
    #[must_use]
    pub fn from_app_error(err: &AppError) -> Self {
        let code = match err {
            AppError::Usage { .. } => "usage",
            AppError::Package(pkg) => pkg.code(),
            AppError::Output(_) => "output_error",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
            },
        }
    }
}
