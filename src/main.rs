//! assetgen - generate a module that re-exports every asset in a directory.

mod asset;
mod cli;
mod config;
mod error;
mod generator;
mod logger;
mod shutdown;
mod utils;
mod watch;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::GenConfig;
use utils::count_noun;
use watch::{ChangeWatcher, NotifySource};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = GenConfig::from_cli(&cli)?;
    debug!("config"; "root: {}", config.root().display());
    debug!("config"; "output: {}", config.output().display());
    debug!("config"; "extensions: {}", config.extensions());

    // Initial pass: any failure ends the process
    match generator::generate(&config) {
        Ok(report) => log!("gen"; "generated exports in {} ({})",
            report.output.display(), count_noun(report.assets, "asset")),
        Err(e) => {
            log!("error"; "{}", e.into_report());
            std::process::exit(1);
        }
    }

    if config.watch() {
        let shutdown_rx = shutdown::setup_shutdown_handler()?;
        ChangeWatcher::new(&config).run(&mut NotifySource, shutdown_rx)?;
    }

    Ok(())
}
