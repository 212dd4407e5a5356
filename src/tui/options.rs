use copypasta::ClipboardContext;
use log::debug;

use passforge::form::{Form, Notice};
use passforge::pass::CharacterClass;

use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

use super::{Key, get_numeric_input, print_form, print_help, read_key};

/// What the loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Generate,
    Copy,
    EditLength,
    Toggle(CharacterClass),
    SwitchSource,
    Help,
    Quit,
    Ignore,
}

pub fn action_for(key: Key) -> Action {
    match key {
        Key::Enter => Action::Generate,
        Key::Char('g') => Action::Generate,
        Key::Char('c') => Action::Copy,
        Key::Char('l') => Action::EditLength,
        Key::Char('1') => Action::Toggle(CharacterClass::Uppercase),
        Key::Char('2') => Action::Toggle(CharacterClass::Lowercase),
        Key::Char('3') => Action::Toggle(CharacterClass::Numbers),
        Key::Char('4') => Action::Toggle(CharacterClass::Symbols),
        Key::Char('u') => Action::SwitchSource,
        Key::Char('h') | Key::Char('?') => Action::Help,
        Key::Char('q') | Key::Esc => Action::Quit,
        Key::Char(_) => Action::Ignore,
    }
}

pub fn form_loop(settings: &Settings) {
    reset_terminal();

    let mut form = Form::new(settings.pass_length, settings.classes);
    let mut source = settings.source;
    let mut clipboard: Option<ClipboardContext> = None;
    let mut notice: Option<Notice> = None;

    loop {
        clear();
        print_form(&form, source, notice.as_ref());

        let Some(key) = read_key() else {
            debug!("terminal input closed");
            break;
        };

        notice = match action_for(key) {
            Action::Generate => form.generate(source),
            Action::Copy => copy(&form, &mut clipboard),
            Action::EditLength => {
                println!();
                get_numeric_input("Length", form.length()).and_then(|n| form.set_length(n))
            }
            Action::Toggle(class) => {
                form.toggle(class);
                None
            }
            Action::SwitchSource => {
                source = source.toggled();
                None
            }
            Action::Help => {
                show_help();
                None
            }
            Action::Quit => break,
            Action::Ignore => None,
        };
    }

    clear();
}

fn show_help() {
    clear();
    print_help();
    let _ = read_key();
}

/// The clipboard context is kept for the whole session; on X11 the copied
/// text lives only as long as its owner.
fn copy(form: &Form, clipboard: &mut Option<ClipboardContext>) -> Option<Notice> {
    form.password()?;

    if clipboard.is_none() {
        match ClipboardContext::new() {
            Ok(ctx) => *clipboard = Some(ctx),
            Err(e) => return Some(Notice::error(format!("Clipboard unavailable: {e}"))),
        }
    }

    clipboard.as_mut().and_then(|ctx| form.copy(ctx))
}
