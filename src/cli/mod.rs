//! Flag-driven generation.

mod context;
mod flags;
mod parse;
pub mod prompts;
mod quiet;

pub use context::{Context, Exit};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};
pub use quiet::is_interactive;

/// Run CLI mode and exit with its status code.
pub fn run(args: Vec<String>) -> ! {
    let code = match Context::new(args) {
        Ok(mut ctx) => match ctx.run() {
            Ok(()) | Err(Exit::Done) => 0,
            Err(Exit::Usage(msg)) => {
                prompts::error(&msg);
                2
            }
            Err(Exit::Failed(msg)) => {
                prompts::error(&msg);
                1
            }
        },
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Run with --help for usage.");
            2
        }
    };
    std::process::exit(code)
}
