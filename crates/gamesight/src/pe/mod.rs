pub mod layout;
mod header;
mod machine;

#[cfg(test)]
pub mod mock;

pub use header::*;
pub use machine::Architecture;

#[cfg(test)]
pub use mock::PeImageBuilder;
