//! pairs - memory-matching card game for the terminal
//!
//! Run with: cargo run -- [--seed N] [--music] [--log-file pairs.log]

mod app;
mod cli;
mod ui;

use std::{fs::File, path::Path};

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};

use app::App;
use cli::Cli;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // The terminal belongs to the UI, so logs only ever go to a file
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut app = App::new(cli.game_config(), cli.music_config());
    if cli.music {
        app.request_music();
    }

    let mut terminal = ratatui::init();
    let res = app.run(&mut terminal);
    ratatui::restore();
    res
}

fn init_logging(path: &Path) -> EyreResult<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .wrap_err("failed to install logger")
}
