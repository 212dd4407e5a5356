use std::env;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::tty::IsTty;
use env_logger::Env;

mod cli;
mod exits;
mod settings;
mod terminal;
mod tui;

use cli::CliFlags;

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let flags = CliFlags::parse();

    let bare = env::args().len() == 1 && io::stdin().is_tty();
    if bare || flags.interactive {
        tui::run(&flags.settings());
        ExitCode::SUCCESS
    } else {
        cli::run(&flags)
    }
}
