//! Test fixtures for extract files.
//!
//! - `extract` - Extract file kinds and their standard header rows
//! - `factory` - CSV data rows with predictable test values

pub mod extract;
pub mod factory;
