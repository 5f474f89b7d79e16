/// Read-only access to ZIP-based document packages.
pub mod errors;
pub mod reader;

pub use errors::PackageError;
pub use reader::Package;
