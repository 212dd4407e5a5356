mod context;
mod flags;
mod prompts;

use std::process::ExitCode;

use context::{Context, Outcome};
pub use flags::CliFlags;
use prompts::Prompts;

/// One-shot mode: validate flags, generate, print or copy.
///
/// Exits 0 on success, 1 when the user declines the terminal fallback or
/// output fails, 2 when the flags are rejected.
pub fn run(flags: &CliFlags) -> ExitCode {
    let mut prompts = Prompts::stderr(flags.quiet);

    let outcome = match Context::new(flags) {
        Ok(mut ctx) => ctx.run(&mut prompts),
        Err(notice) => {
            prompts.notice(&notice);
            Outcome::Invalid
        }
    };
    outcome.into()
}
