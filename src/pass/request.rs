//! Immutable generation request.

use super::charset::CharacterClassSet;
use super::error::InvalidRequest;

/// Shortest length the front ends accept.
pub const MIN_LENGTH: usize = 4;
/// Longest length the front ends accept.
pub const MAX_LENGTH: usize = 64;
pub const DEFAULT_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: CharacterClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: CharacterClassSet) -> Self {
        Self { length, classes }
    }

    /// Core precondition. The 4..=64 range is a front-end rule and is not
    /// checked here.
    pub fn validate(&self) -> Result<(), InvalidRequest> {
        let required = self.classes.count();
        if required == 0 {
            return Err(InvalidRequest::NoClasses);
        }
        if self.length < required {
            return Err(InvalidRequest::TooShort {
                length: self.length,
                required,
            });
        }
        Ok(())
    }

    /// Number of characters drawn from the fill pool.
    pub fn fill_count(&self) -> usize {
        self.length.saturating_sub(self.classes.count())
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharacterClassSet::all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharacterClass;

    #[test]
    fn default_request_is_valid() {
        let request = GenerationRequest::default();
        assert_eq!(request.length, 16);
        assert_eq!(request.classes, CharacterClassSet::all());
        assert_eq!(request.validate(), Ok(()));
        assert_eq!(request.fill_count(), 12);
    }

    #[test]
    fn rejects_empty_class_set() {
        let request = GenerationRequest::new(8, CharacterClassSet::none());
        assert_eq!(request.validate(), Err(InvalidRequest::NoClasses));
    }

    #[test]
    fn length_equal_to_class_count_is_valid() {
        let classes = CharacterClassSet::none()
            .with(CharacterClass::Uppercase)
            .with(CharacterClass::Numbers);
        let request = GenerationRequest::new(2, classes);
        assert_eq!(request.validate(), Ok(()));
        assert_eq!(request.fill_count(), 0);
    }

    #[test]
    fn rejects_length_below_class_count() {
        let request = GenerationRequest::new(3, CharacterClassSet::all());
        assert_eq!(
            request.validate(),
            Err(InvalidRequest::TooShort {
                length: 3,
                required: 4
            })
        );
    }
}
