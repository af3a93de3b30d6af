use std::env;

mod cli;
mod exits;
mod form;
mod pass;
mod rng;
mod settings;
mod terminal;
mod tui;

fn init_logging() {
    let env = env_logger::Env::new().filter_or("PASSFORM_LOG", "warn");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn main() {
    init_logging();
    exits::reset_terminal();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            if let Err(e) = tui::run() {
                log::error!("interactive mode failed: {e}");
                cli::prompts::error(&e.to_string());
                std::process::exit(1);
            }
        }
        _ => cli::run(args),
    }
}
