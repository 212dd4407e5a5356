use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] InvalidRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("no character class enabled")]
    NoClasses,
    #[error("length {length} is shorter than the {required} enabled character classes")]
    TooShort { length: usize, required: usize },
}
