//! CLI frontend for Claude Facts: prints a random fact, the full list, or
//! the usage screen.

mod commands;
mod mode;

use std::process;

use log::debug;

use mode::Mode;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mode = Mode::from_args(std::env::args_os().skip(1));
    debug!("running in {mode:?} mode");

    let result = match mode {
        Mode::Help => commands::help::run(),
        Mode::List => commands::list::run(),
        Mode::Random => commands::random::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
