//! Main executable discovery for game installations
//!
//! Scans a fixed list of conventional folders (one level each), drops
//! installers and support tools by name, and ranks what is left with an
//! additive score. See [`constants`] for the weights.

pub mod constants;
mod finder;
mod score;

pub use finder::*;
pub use score::*;
