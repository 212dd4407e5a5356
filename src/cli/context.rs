//! CLI context - bundles settings and clipboard state.

use std::io::{self, BufWriter, ErrorKind, Write};
use std::process::ExitCode;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, info};
use zeroize::Zeroizing;

use passforge::form::{MSG_NO_CLASSES, MSG_TOO_LONG, MSG_TOO_SHORT, Notice};
use passforge::pass::{self, GenerateError, MAX_LENGTH, MIN_LENGTH};

use super::CliFlags;
use super::prompts::Prompts;
use crate::settings::Settings;

pub const MSG_NO_PASSWORDS: &str = "Number of passwords must be at least 1.";
pub const MSG_CLIPBOARD_LIMIT: &str = "At most 1000 passwords can be copied to the clipboard.";

/// Clipboard output is joined in memory, so its count is capped.
pub const MAX_CLIPBOARD_PASSWORDS: usize = 1000;

/// How a one-shot run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The user declined the terminal fallback, or output failed.
    Aborted,
    /// Flags were rejected before anything was generated.
    Invalid,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Completed => 0,
            Outcome::Aborted => 1,
            Outcome::Invalid => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Build a context from parsed flags, rejecting requests the generator
    /// would refuse or the form would clamp.
    pub fn new(flags: &CliFlags) -> Result<Self, Notice> {
        let settings = flags.settings();
        validate(&settings)?;
        Ok(Self {
            settings,
            clipboard: None,
        })
    }

    pub fn run<W: Write>(&mut self, prompts: &mut Prompts<W>) -> Outcome {
        if !self.open_clipboard(prompts) {
            return Outcome::Aborted;
        }

        let request = self.settings.request();
        info!(
            "generating {} password(s): length={} classes={} source={}",
            self.settings.number_of_passwords,
            request.length,
            request.classes.count(),
            self.settings.source
        );

        if self.clipboard.is_some() {
            self.copy(prompts)
        } else {
            let stdout = io::stdout();
            let result = self.write_passwords(&mut BufWriter::new(stdout.lock()));
            finish(result, prompts)
        }
    }

    /// False when the clipboard is unavailable and the user declined to
    /// print instead.
    fn open_clipboard<W: Write>(&mut self, prompts: &mut Prompts<W>) -> bool {
        if !self.settings.to_clipboard {
            return true;
        }
        match ClipboardContext::new() {
            Ok(c) => {
                self.clipboard = Some(c);
                true
            }
            Err(e) => {
                debug!("clipboard unavailable: {e}");
                let fallback = prompts.print_instead(&mut io::stdin().lock());
                self.settings.to_clipboard = false;
                fallback
            }
        }
    }

    /// Generate and write one password per line. Nothing is collected, so
    /// memory stays flat for any `-n`.
    fn write_passwords<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let request = self.settings.request();
        for _ in 0..self.settings.number_of_passwords {
            let password =
                pass::generate_from(self.settings.source, &request).map_err(io::Error::other)?;
            writeln!(out, "{}", password.as_str())?;
        }
        out.flush()
    }

    /// Newline-joined passwords for the clipboard, allocated once up front
    /// so no unzeroized copy is left behind by growth.
    fn joined(&self) -> Result<Zeroizing<String>, GenerateError> {
        let request = self.settings.request();
        let count = self.settings.number_of_passwords;
        let mut joined = Zeroizing::new(String::with_capacity(count * (request.length + 1)));
        for i in 0..count {
            if i > 0 {
                joined.push('\n');
            }
            let password = pass::generate_from(self.settings.source, &request)?;
            joined.push_str(password.as_str());
        }
        Ok(joined)
    }

    fn copy<W: Write>(&mut self, prompts: &mut Prompts<W>) -> Outcome {
        let joined = match self.joined() {
            Ok(joined) => joined,
            Err(e) => {
                prompts.error(&e.to_string());
                return Outcome::Invalid;
            }
        };
        let Some(ctx) = self.clipboard.as_mut() else {
            return Outcome::Aborted;
        };

        match ctx.set_contents(joined.as_str().to_owned()) {
            Ok(()) => {
                prompts.copied(self.settings.number_of_passwords);
                Outcome::Completed
            }
            Err(e) => {
                prompts.error(&format!("Clipboard error: {e}"));
                prompts.warn("Printing to terminal instead.");
                let stdout = io::stdout();
                let mut out = stdout.lock();
                let result = writeln!(out, "{}", joined.as_str()).and_then(|()| out.flush());
                finish(result, prompts)
            }
        }
    }
}

/// A closed pipe (`passforge -n 100 | head`) is a normal end of output.
fn finish<W: Write>(result: io::Result<()>, prompts: &mut Prompts<W>) -> Outcome {
    match result {
        Ok(()) => Outcome::Completed,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
            Outcome::Completed
        }
        Err(e) => {
            prompts.error(&e.to_string());
            Outcome::Aborted
        }
    }
}

fn validate(settings: &Settings) -> Result<(), Notice> {
    if settings.classes.is_empty() {
        return Err(Notice::error(MSG_NO_CLASSES));
    }
    if settings.pass_length < MIN_LENGTH {
        return Err(Notice::error(MSG_TOO_SHORT));
    }
    if settings.pass_length > MAX_LENGTH {
        return Err(Notice::error(MSG_TOO_LONG));
    }
    if settings.number_of_passwords == 0 {
        return Err(Notice::error(MSG_NO_PASSWORDS));
    }
    if settings.to_clipboard && settings.number_of_passwords > MAX_CLIPBOARD_PASSWORDS {
        return Err(Notice::error(MSG_CLIPBOARD_LIMIT));
    }
    Ok(())
}
