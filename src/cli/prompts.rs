//! Messages for one-shot mode.
//!
//! Everything here goes to stderr so stdout carries nothing but passwords.
//! Quiet mode drops warnings and confirmations; errors always get through.

use std::io::{self, BufRead, Stderr, Write};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use passforge::form::{Level, MSG_COPIED, Notice};

pub struct Prompts<W: Write = Stderr> {
    out: W,
    quiet: bool,
    interactive: bool,
}

impl Prompts {
    pub fn stderr(quiet: bool) -> Self {
        Self::new(io::stderr(), quiet, io::stdin().is_tty())
    }
}

impl<W: Write> Prompts<W> {
    pub fn new(out: W, quiet: bool, interactive: bool) -> Self {
        Self {
            out,
            quiet,
            interactive,
        }
    }

    pub fn warn(&mut self, msg: &str) {
        if !self.quiet {
            let _ = writeln!(self.out, "{}", msg.yellow());
        }
    }

    pub fn error(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{}", msg.red());
    }

    fn confirm(&mut self, msg: &str) {
        if !self.quiet {
            let _ = writeln!(self.out, "{msg}");
        }
    }

    pub fn notice(&mut self, notice: &Notice) {
        match notice.level {
            Level::Error => self.error(&notice.message),
            Level::Success => self.confirm(&notice.message),
        }
    }

    pub fn copied(&mut self, count: usize) {
        if count == 1 {
            self.confirm(MSG_COPIED);
        } else {
            self.confirm(&format!("{count} passwords copied to Clipboard"));
        }
    }

    /// Ask whether to print when the clipboard cannot be opened. Without
    /// someone to answer (quiet, or stdin is not a terminal) the answer is
    /// yes. An unreadable answer also counts as yes.
    pub fn print_instead<R: BufRead>(&mut self, input: &mut R) -> bool {
        if self.quiet || !self.interactive {
            return true;
        }

        let _ = write!(self.out, "Clipboard unavailable. Print to terminal instead? [Y/n]: ");
        let _ = self.out.flush();

        let mut answer = String::new();
        if input.read_line(&mut answer).is_err() || accepts(&answer) {
            let _ = writeln!(self.out);
            return true;
        }
        let _ = writeln!(self.out, "\nAborted.");
        false
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn accepts(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "" | "y" | "yes"
    )
}
