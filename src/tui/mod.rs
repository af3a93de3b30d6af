//! Interactive password form.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

use std::io;

use crate::cli;
use crate::rng::{Generator, Source};
use crate::settings::Settings;

/// Run TUI interactive mode.
pub fn run() -> io::Result<()> {
    if !cli::is_interactive() {
        return Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "interactive mode needs a terminal on stdin; pass flags (e.g. -l 12) for client mode",
        ));
    }
    // Only the generator source is taken from saved settings; the form
    // always opens in its default state.
    let source = match Settings::load_from_file() {
        Ok(s) => Source::from_urandom_flag(s.use_urandom),
        Err(e) => {
            log::warn!("settings load failed: {e}");
            Source::default()
        }
    };
    let mut rng = Generator::new(source);
    gen_form_menu(&mut rng)
}
