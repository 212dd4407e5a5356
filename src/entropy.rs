//! Random source selection.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropySource {
    /// Thread-local ChaCha CSPRNG, seeded and periodically reseeded from the OS.
    #[default]
    Thread,
    /// Every draw read straight from the operating system.
    Os,
}

impl EntropySource {
    pub fn name(self) -> &'static str {
        match self {
            EntropySource::Thread => "thread CSPRNG",
            EntropySource::Os => "OS random",
        }
    }

    /// Longer description for the help and summary boxes.
    pub fn info(self) -> &'static str {
        match self {
            EntropySource::Thread => "ChaCha12 generator, seeded from the OS",
            EntropySource::Os => "OS getrandom on every draw",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            EntropySource::Thread => EntropySource::Os,
            EntropySource::Os => EntropySource::Thread,
        }
    }
}

impl fmt::Display for EntropySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
