//! Integrations with external crates.

/// Date and time scalars backed by [chrono](https://github.com/chronotope/chrono) types.
pub mod chrono;
#[doc(hidden)]
pub mod serde;
