//! Anti-cheat detection by well-known file names
//!
//! The catalog is data: it ships built in but can be replaced by a JSON file
//! without touching the scan logic.

mod scanner;
mod signature;

pub use scanner::*;
pub use signature::*;
