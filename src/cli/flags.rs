use clap::Parser;

use passforge::entropy::EntropySource;
use passforge::pass::{CharacterClassSet, DEFAULT_LENGTH};

use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(
    name = "passforge",
    version,
    about = "Generate passwords from selected character classes",
    long_about = r#"
Generate passwords from uppercase letters, lowercase letters, numbers and
symbols. Every enabled class appears at least once in each password.

Run without arguments (or with -i) for the interactive form; pass flags
for one-shot generation.

Examples:
  passforge -l 20              One password, 20 characters
  passforge -l 12 -n 5         Five passwords
  passforge --no-symbols       Letters and digits only
  passforge -b                 Copy to clipboard instead of printing
"#
)]
pub struct CliFlags {
    /// Characters per password (4 to 64)
    #[arg(short, long, env = "PASSFORGE_LENGTH", default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// How many passwords to generate
    #[arg(short, long, default_value_t = 1)]
    pub number: usize,

    /// Exclude uppercase letters (A-Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude lowercase letters (a-z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude numbers (0-9)
    #[arg(long)]
    pub no_numbers: bool,

    /// Exclude symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Read every random value from the operating system
    #[arg(short, long)]
    pub urandom: bool,

    /// Suppress everything except passwords and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive form
    #[arg(short, long)]
    pub interactive: bool,
}

impl CliFlags {
    pub fn classes(&self) -> CharacterClassSet {
        CharacterClassSet {
            uppercase: !self.no_uppercase,
            lowercase: !self.no_lowercase,
            numbers: !self.no_numbers,
            symbols: !self.no_symbols,
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            pass_length: self.length,
            classes: self.classes(),
            number_of_passwords: self.number,
            source: if self.urandom {
                EntropySource::Os
            } else {
                EntropySource::Thread
            },
            to_clipboard: self.clipboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("passforge").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let flags = parse(&[]);
        let settings = flags.settings();
        assert_eq!(settings.pass_length, 16);
        assert_eq!(settings.number_of_passwords, 1);
        assert_eq!(settings.classes, CharacterClassSet::all());
        assert_eq!(settings.source, EntropySource::Thread);
        assert!(!settings.to_clipboard);
    }

    #[test]
    fn class_flags_disable_classes() {
        let flags = parse(&["--no-symbols", "--no-uppercase"]);
        let classes = flags.classes();
        assert!(!classes.symbols);
        assert!(!classes.uppercase);
        assert!(classes.lowercase && classes.numbers);
    }

    #[test]
    fn short_flags() {
        let flags = parse(&["-l", "32", "-n", "3", "-b", "-u", "-q"]);
        assert_eq!(flags.length, 32);
        assert_eq!(flags.number, 3);
        assert!(flags.clipboard && flags.quiet);
        assert_eq!(flags.settings().source, EntropySource::Os);
    }

    #[test]
    fn rejects_non_numeric_length() {
        let result = CliFlags::try_parse_from(["passforge", "-l", "abc"]);
        assert!(result.is_err());
    }
}
