//! Interactive terminal form.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

use crate::settings::Settings;

/// Run the form until the user quits.
pub fn run(settings: &Settings) {
    form_loop(settings);
}
