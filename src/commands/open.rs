/// Open a package and report its status.
use std::path::Path;

use log::debug;

use crate::cli::OutputCtx;
use crate::cli::output::write_status;
use crate::errors::AppError;
use crate::package::Package;
use crate::types::StatusOutput;

/// Run `docxjson <file>`.
///
/// The package stays open until the status has been written, then is
/// released on return. Nothing reaches stdout unless the open succeeded.
///
/// # Errors
///
/// Returns `AppError::Usage` when no file is given, `AppError::Package` when
/// the file cannot be opened as a package, and `AppError::Output` when stdout
/// cannot be written.
pub fn run(file: Option<&Path>, ctx: &OutputCtx) -> Result<(), AppError> {
    let path = file.ok_or_else(AppError::usage)?;

    let _t_open = ctx.timer("open_package");
    let package = Package::open(path)?;
    drop(_t_open);

    debug!("reporting status for {}", package.path().display());

    let _t_write = ctx.timer("write_status");
    write_status(&StatusOutput::opened(), ctx).map_err(AppError::Output)?;
    drop(_t_write);

    drop(package);
    Ok(())
}
