/// Command implementations.
pub mod open;
