//! # `forge` command-line front end
//!
//! Thin shell over the [`forge`] facade: it loads settings and project documents, installs the
//! logger, runs one command and renders its report. Reports go to the writer handed to
//! [`run`] (stdout in the binary); logs go to stderr.

pub mod args;
pub mod commands;

use crate::args::{Cli, Command};
use anyhow::Context;
use forge::kernel::config::load_config;
use forge::kernel::settings::ForgeSettings;
use forge_logger::{Logger, parse_level, with_verbosity};
use std::io::Write;
use std::process::ExitCode;

/// Loads settings, installs the logger, and runs the selected command.
///
/// Returns [`ExitCode::FAILURE`] when a configuration is rejected or compilation fails.
///
/// # Errors
/// Returns an error for unreadable settings or documents, logger setup failures, failed
/// archive writes, and report output failures.
pub async fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let settings: ForgeSettings =
        load_config(cli.settings.as_deref()).context("Settings are malformed")?;
    let _log = init_logger(&settings, cli.verbose)?;

    match cli.command {
        Command::Compile { config, output, json } => {
            commands::compile(&settings, &config, output.as_deref(), json, out).await
        },
        Command::Validate { config, json } => commands::validate(&config, json, out),
        Command::Tiers { json } => commands::tiers(json, out),
        Command::Features { json } => commands::features(json, out),
    }
}

fn init_logger(settings: &ForgeSettings, verbosity: u8) -> anyhow::Result<Logger> {
    let level = with_verbosity(parse_level(&settings.logging.level)?, verbosity);
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);

    let logger = match &settings.logging.dir {
        Some(dir) => builder.path(dir).json(settings.logging.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
