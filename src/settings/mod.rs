//! Run settings.
//!
//! Built from command-line flags each run and never written to disk.

use passforge::entropy::EntropySource;
use passforge::pass::{CharacterClassSet, DEFAULT_LENGTH, GenerationRequest};

#[derive(Debug, Clone)]
pub struct Settings {
    pub pass_length: usize,
    pub classes: CharacterClassSet,
    pub number_of_passwords: usize,
    pub source: EntropySource,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.pass_length, self.classes)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            classes: CharacterClassSet::all(),
            number_of_passwords: 1,
            source: EntropySource::default(),
            to_clipboard: false,
        }
    }
}
