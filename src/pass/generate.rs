//! Password generation.

use std::fmt;
use std::ops::Deref;

use log::debug;
use rand::Rng;
use zeroize::{Zeroize, Zeroizing};

use super::error::GenerateError;
use super::request::GenerationRequest;
use crate::entropy::EntropySource;

/// A generated password. Zeroized on drop; `Debug` never shows the content.
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}

/// Generate with the default source (thread-local CSPRNG).
pub fn generate(request: &GenerationRequest) -> Result<Password, GenerateError> {
    generate_from(EntropySource::default(), request)
}

pub fn generate_from(
    source: EntropySource,
    request: &GenerationRequest,
) -> Result<Password, GenerateError> {
    match source {
        EntropySource::Thread => generate_with(&mut rand::thread_rng(), request),
        EntropySource::Os => generate_with(&mut rand::rngs::OsRng, request),
    }
}

/// Generate a password from `rng`.
///
/// One character is drawn from each enabled class, the rest from the fill
/// pool, and the combined buffer is shuffled so the guaranteed characters
/// have no fixed position.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    request: &GenerationRequest,
) -> Result<Password, GenerateError> {
    request.validate()?;

    let classes = &request.classes;
    let pool = classes.pool();
    let mut buf: Vec<u8> = Vec::with_capacity(request.length);

    for class in classes.enabled() {
        buf.push(random_byte(class.alphabet(), rng));
    }
    buf.extend((0..request.fill_count()).map(|_| random_byte(&pool, rng)));

    shuffle(&mut buf, rng);

    debug!(
        "generated password: length={} classes={} pool={}",
        buf.len(),
        classes.count(),
        pool.len()
    );

    let password = buf.iter().map(|&b| b as char).collect::<String>();
    buf.zeroize();
    Ok(Password(Zeroizing::new(password)))
}

#[inline]
fn random_byte<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}

/// Fisher–Yates: every position gets a fresh uniform index in `0..=i`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
