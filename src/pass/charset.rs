//! Character classes and the fill pool built from them.

use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Lookup order used for guaranteed-inclusion draws and pool layout.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE.as_bytes(),
            CharacterClass::Lowercase => LOWERCASE.as_bytes(),
            CharacterClass::Numbers => NUMBERS.as_bytes(),
            CharacterClass::Symbols => SYMBOLS.as_bytes(),
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase",
            CharacterClass::Lowercase => "Lowercase",
            CharacterClass::Numbers => "Numbers",
            CharacterClass::Symbols => "Symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Four independent class flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClassSet {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharacterClassSet {
    pub const fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        }
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.set(class, true);
        self
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        let flag = match class {
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Numbers => &mut self.numbers,
            CharacterClass::Symbols => &mut self.symbols,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.set(class, !self.contains(class));
    }

    /// Enabled classes in lookup order.
    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |&class| self.contains(class))
    }

    pub fn count(&self) -> usize {
        self.enabled().count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Build the fill pool: every enabled alphabet, concatenated.
    pub fn pool(&self) -> Vec<u8> {
        let mut chars = Vec::with_capacity(self.pool_len());
        for class in self.enabled() {
            chars.extend_from_slice(class.alphabet());
        }
        chars
    }

    pub fn pool_len(&self) -> usize {
        self.enabled().map(|class| class.alphabet().len()).sum()
    }

    pub fn pool_contains(&self, c: char) -> bool {
        self.enabled().any(|class| class.contains(c))
    }
}

/// Password entropy in bits for a uniformly drawn password.
pub fn entropy_bits(length: usize, pool_len: usize) -> f64 {
    if pool_len == 0 {
        return 0.0;
    }
    length as f64 * (pool_len as f64).log2()
}

pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
