/// CLI argument definitions via clap derive.
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

/// docxjson — open a document package and report a JSON status line.
#[derive(Debug, Parser)]
#[command(
    name = "docxjson",
    about = "Open a .docx package and report a JSON status line",
    version
)]
pub struct Cli {
    /// Path to the package (.docx) to open. Further arguments are ignored.
    ///
    /// Everything from the first positional on is taken verbatim, including
    /// names starting with `-`. A missing path is reported with the tool's
    /// own usage line and exit code.
    #[arg(
        value_name = "FILE",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "compact")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Print step timing to stderr for debugging.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The package path: the first positional argument, if any.
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.files.first().map(PathBuf::as_path)
    }
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Compact single-line JSON.
    #[default]
    Compact,
    /// Pretty-printed JSON. Errors are also written as JSON.
    Json,
    /// Two-column table (human-readable).
    Table,
}
