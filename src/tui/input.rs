use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::terminal::{flush, reset_terminal};

/// Longest length entry accepted; anything beyond is clamped by the form.
const MAX_DIGITS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
}

impl Key {
    fn from_event(event: KeyEvent) -> Option<Self> {
        match event.code {
            KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Esc => Some(Key::Esc),
            _ => None,
        }
    }
}

/// Restore the terminal and leave with the interrupt exit code.
pub fn interrupt() -> ! {
    reset_terminal();
    println!();
    std::process::exit(130);
}

/// Terminal in raw mode for as long as this lives.
struct RawInput;

impl RawInput {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawInput)
    }

    /// Next key press. Ctrl+C never returns.
    fn next_press(&mut self) -> io::Result<KeyEvent> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                interrupt();
            }
            return Ok(key);
        }
    }
}

impl Drop for RawInput {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Wait for a single key press. `None` when the terminal cannot be read.
pub fn read_key() -> Option<Key> {
    let mut input = RawInput::enter().ok()?;
    loop {
        if let Some(key) = Key::from_event(input.next_press().ok()?) {
            return Some(key);
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Edit {
    Continue,
    Submit,
    Cancel,
}

fn edit(digits: &mut String, key: KeyEvent) -> Edit {
    match key.code {
        KeyCode::Enter => return Edit::Submit,
        KeyCode::Esc => return Edit::Cancel,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => digits.clear(),
        KeyCode::Backspace => {
            digits.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() && digits.len() < MAX_DIGITS => digits.push(c),
        _ => {}
    }
    Edit::Continue
}

/// Read a number with in-place editing. `None` when cancelled with Esc.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let mut digits = initial_value.to_string();
    let Ok(mut input) = RawInput::enter() else {
        return Some(initial_value);
    };

    print!("{prompt}: {digits}");
    flush();

    let mut shown = digits.len();
    let submitted = loop {
        let Ok(key) = input.next_press() else {
            break true;
        };
        match edit(&mut digits, key) {
            Edit::Continue => {
                print!("\r{prompt}: {}\r{prompt}: {digits}", " ".repeat(shown + 1));
                flush();
                shown = digits.len();
            }
            Edit::Submit => break true,
            Edit::Cancel => break false,
        }
    };

    drop(input);
    println!();
    submitted.then(|| parse_digits(&digits))
}

/// Empty input counts as zero so the form reports it as too short.
fn parse_digits(digits: &str) -> usize {
    digits.parse().unwrap_or(0)
}
