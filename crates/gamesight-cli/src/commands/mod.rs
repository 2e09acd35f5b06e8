//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod analyze;
pub mod anticheat;
pub mod catalog;
pub mod find;

use anyhow::Result;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
