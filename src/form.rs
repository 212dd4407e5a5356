//! Form state shared by the interactive and one-shot front ends.
//!
//! Holds the current options and the last generated password, enforces the
//! caller side of the generator contract (length bounds, at least one class)
//! and reports outcomes as [`Notice`]s instead of printing them.

use copypasta::ClipboardProvider;
use log::{debug, warn};

use crate::entropy::EntropySource;
use crate::pass::{
    self, CharacterClass, CharacterClassSet, DEFAULT_LENGTH, GenerationRequest, MAX_LENGTH,
    MIN_LENGTH, Password,
};

pub const MSG_NO_CLASSES: &str = "Please select at least one character type.";
pub const MSG_TOO_SHORT: &str = "Password length must be at least 4.";
pub const MSG_TOO_LONG: &str = "Password length must be at most 64.";
pub const MSG_COPIED: &str = "Password copied to Clipboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

#[derive(Debug)]
pub struct Form {
    length: usize,
    classes: CharacterClassSet,
    generated: Option<(GenerationRequest, Password)>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, CharacterClassSet::all())
    }
}

impl Form {
    pub fn new(length: usize, classes: CharacterClassSet) -> Self {
        let mut form = Self {
            length: DEFAULT_LENGTH,
            classes,
            generated: None,
        };
        form.set_length(length);
        form
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> CharacterClassSet {
        self.classes
    }

    pub fn password(&self) -> Option<&Password> {
        self.generated.as_ref().map(|(_, password)| password)
    }

    /// Options the current password was built from. Unlike [`Form::request`]
    /// this does not follow later toggles or length edits.
    pub fn generated_request(&self) -> Option<&GenerationRequest> {
        self.generated.as_ref().map(|(request, _)| request)
    }

    /// Snapshot of the current options.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.classes)
    }

    /// Set the length, clamping into `MIN_LENGTH..=MAX_LENGTH`.
    pub fn set_length(&mut self, length: usize) -> Option<Notice> {
        if length < MIN_LENGTH {
            self.length = MIN_LENGTH;
            Some(Notice::error(MSG_TOO_SHORT))
        } else if length > MAX_LENGTH {
            self.length = MAX_LENGTH;
            Some(Notice::error(MSG_TOO_LONG))
        } else {
            self.length = length;
            None
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.classes.toggle(class);
    }

    /// Replace the password with a fresh one. On rejection the previous
    /// password is kept.
    pub fn generate(&mut self, source: EntropySource) -> Option<Notice> {
        if self.classes.is_empty() {
            return Some(Notice::error(MSG_NO_CLASSES));
        }
        if self.length < MIN_LENGTH {
            return Some(Notice::error(MSG_TOO_SHORT));
        }

        let request = self.request();
        match pass::generate_from(source, &request) {
            Ok(password) => {
                self.generated = Some((request, password));
                None
            }
            Err(e) => Some(Notice::error(e.to_string())),
        }
    }

    /// Copy the current password. Failures are reported, never fatal.
    pub fn copy<C: ClipboardProvider + ?Sized>(&self, clipboard: &mut C) -> Option<Notice> {
        let password = self.password()?;

        match clipboard.set_contents(password.as_str().to_owned()) {
            Ok(()) => {
                debug!("password copied to clipboard");
                Some(Notice::success(MSG_COPIED))
            }
            Err(e) => {
                warn!("clipboard write failed: {e}");
                Some(Notice::error(format!("Clipboard error: {e}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[derive(Default)]
    struct FakeClipboard {
        contents: Option<String>,
        fail: bool,
    }

    impl ClipboardProvider for FakeClipboard {
        fn get_contents(&mut self) -> Result<String, Box<dyn Error + Send + Sync + 'static>> {
            self.contents.clone().ok_or_else(|| "empty".into())
        }

        fn set_contents(
            &mut self,
            contents: String,
        ) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
            if self.fail {
                return Err("no display".into());
            }
            self.contents = Some(contents);
            Ok(())
        }
    }

    #[test]
    fn defaults_are_length_16_with_all_classes() {
        let form = Form::default();
        assert_eq!(form.length(), 16);
        assert_eq!(form.classes(), CharacterClassSet::all());
        assert!(form.password().is_none());
    }

    #[test]
    fn short_length_is_clamped_with_notice() {
        let mut form = Form::default();
        let notice = form.set_length(2).unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.message, MSG_TOO_SHORT);
        assert_eq!(form.length(), 4);
    }

    #[test]
    fn long_length_is_clamped_with_notice() {
        let mut form = Form::default();
        assert_eq!(form.set_length(100).unwrap().message, MSG_TOO_LONG);
        assert_eq!(form.length(), 64);
        assert_eq!(form.set_length(64), None);
        assert_eq!(form.set_length(4), None);
        assert_eq!(form.length(), 4);
    }

    #[test]
    fn generate_fills_password() {
        let mut form = Form::default();
        form.set_length(20);
        assert_eq!(form.generate(EntropySource::Thread), None);
        assert_eq!(form.password().map(|p| p.len()), Some(20));
    }

    #[test]
    fn generate_without_classes_keeps_previous_password() {
        let mut form = Form::default();
        form.generate(EntropySource::Thread);
        let before = form.password().unwrap().as_str().to_owned();

        for class in CharacterClass::ALL {
            form.toggle(class);
        }
        let notice = form.generate(EntropySource::Thread).unwrap();
        assert_eq!(notice, Notice::error(MSG_NO_CLASSES));
        assert_eq!(form.password().unwrap().as_str(), before);
    }

    #[test]
    fn generated_request_ignores_later_edits() {
        let mut form = Form::new(64, CharacterClassSet::all());
        form.generate(EntropySource::Thread);

        form.toggle(CharacterClass::Symbols);
        form.set_length(8);
        let generated = *form.generated_request().unwrap();
        assert_eq!(generated, GenerationRequest::new(64, CharacterClassSet::all()));
        assert_eq!(generated.classes.pool_len(), 91);
        assert_eq!(form.request().classes.pool_len(), 62);

        for class in [
            CharacterClass::Uppercase,
            CharacterClass::Lowercase,
            CharacterClass::Numbers,
        ] {
            form.toggle(class);
        }
        assert!(form.request().classes.is_empty());
        assert_eq!(form.generated_request().unwrap().classes.pool_len(), 91);
        assert_eq!(form.password().map(|p| p.len()), Some(64));
    }

    #[test]
    fn request_reflects_toggles() {
        let mut form = Form::new(8, CharacterClassSet::all());
        form.toggle(CharacterClass::Symbols);
        let request = form.request();
        assert_eq!(request.length, 8);
        assert!(!request.classes.symbols);
        assert_eq!(request.classes.count(), 3);
    }

    #[test]
    fn copy_without_password_is_silent() {
        let form = Form::default();
        let mut clipboard = FakeClipboard::default();
        assert_eq!(form.copy(&mut clipboard), None);
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn copy_writes_password_and_confirms() {
        let mut form = Form::default();
        form.generate(EntropySource::Thread);
        let mut clipboard = FakeClipboard::default();

        assert_eq!(form.copy(&mut clipboard), Some(Notice::success(MSG_COPIED)));
        assert_eq!(
            clipboard.contents.as_deref(),
            form.password().map(|p| p.as_str())
        );
    }

    #[test]
    fn copy_failure_is_reported_and_keeps_password() {
        let mut form = Form::default();
        form.generate(EntropySource::Thread);
        let mut clipboard = FakeClipboard {
            fail: true,
            ..Default::default()
        };

        let notice = form.copy(&mut clipboard).unwrap();
        assert!(notice.is_error());
        assert!(notice.message.contains("no display"));
        assert!(form.password().is_some());
    }
}
