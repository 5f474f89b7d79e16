/// Output formatting: compact/pretty JSON and table modes.
use std::io::{self, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::OutputFormat;
use crate::errors::AppError;
use crate::types::{ErrorOutput, StatusOutput};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    /// When true, print step timings to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Status ---

/// Write the status payload to stdout as a single flushed write.
///
/// # Errors
///
/// Returns the I/O error if stdout cannot be written.
pub fn write_status(status: &StatusOutput, ctx: &OutputCtx) -> io::Result<()> {
    let rendered = render_status(status, ctx.format)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes())?;
    out.flush()
}

/// Render the status payload, newline-terminated.
fn render_status(status: &StatusOutput, format: OutputFormat) -> io::Result<String> {
    let body = match format {
        OutputFormat::Compact => to_json(status, false)?,
        OutputFormat::Json => to_json(status, true)?,
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(["OK", "PARAGRAPHS"]);
            table.add_row([
                if status.ok { "yes" } else { "no" },
                &status.paragraphs.to_string(),
            ]);
            table.to_string()
        }
    };
    Ok(format!("{body}\n"))
}

// --- Error output ---

/// Write an error to stderr.
///
/// The usage error is always the bare usage line. Other errors are a JSON
/// envelope under `--output json`, `error: <message>` otherwise.
pub fn write_error(err: &AppError, ctx: &OutputCtx) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = out.write_all(render_error(err, ctx.format).as_bytes());
}

fn render_error(err: &AppError, format: OutputFormat) -> String {
    if let AppError::Usage { .. } = err {
        return format!("{err}\n");
    }
    match format {
        OutputFormat::Json => {
            let envelope = ErrorOutput::from_app_error(err);
            let s = to_json(&envelope, true).unwrap_or_default();
            format!("{s}\n")
        }
        OutputFormat::Compact | OutputFormat::Table => format!("error: {err}\n"),
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helper ---

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> io::Result<String> {
    let s = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    s.map_err(io::Error::other)
}
