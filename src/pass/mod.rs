//! Password generation core.

pub mod charset;
mod error;
mod generate;
mod request;

pub use charset::{CharacterClass, CharacterClassSet};
pub use error::{GenerateError, InvalidRequest};
pub use generate::{Password, generate, generate_from, generate_with, shuffle};
pub use request::{DEFAULT_LENGTH, GenerationRequest, MAX_LENGTH, MIN_LENGTH};
