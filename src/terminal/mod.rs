//! Shared terminal utilities: box drawing and ANSI helpers.

mod output;

pub use output::*;
