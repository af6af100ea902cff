//! signal_lab - terminal signal generator, recorder and analyzer
//!
//! Run with: cargo run
//! Set RUST_LOG (e.g. RUST_LOG=signal_lab=debug) to write a log file.

mod app;
mod ui;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use std::{fs::File, sync::Mutex};
use tracing_subscriber::EnvFilter;

use app::App;
use signal_lab::LabConfig;

/// Log destination; the terminal itself belongs to the UI.
const LOG_FILE: &str = "signal_lab.log";

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_tracing()?;

    App::new(LabConfig::default()).run()
}

fn init_tracing() -> EyreResult<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = File::create(LOG_FILE).wrap_err("failed to create log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
