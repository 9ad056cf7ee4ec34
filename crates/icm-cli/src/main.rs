//! ICM Codebook CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use anyhow::Context;
use tracing::level_filters::LevelFilter;

use icm_cli::logging::{LogConfig, LogFormat, init_logging};
use icm_model::Catalog;

mod cli;
mod commands;
mod output;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_find, run_sample, run_search, run_subsets};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let catalog = match load_catalog(&cli) {
        Ok(catalog) => catalog,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let exit_code = match &cli.command {
        Command::Find(args) => match run_find(&catalog, args) {
            Ok(found) => {
                if found {
                    0
                } else {
                    1
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Search(args) => report(run_search(&catalog, args)),
        Command::Sample(args) => report(run_sample(&catalog, args)),
        Command::Subsets(args) => report(run_subsets(&catalog, args)),
    };
    std::process::exit(exit_code);
}

fn report(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Load the whole catalog up front; any load failure aborts startup.
fn load_catalog(cli: &Cli) -> anyhow::Result<Catalog> {
    match &cli.data_dir {
        Some(dir) => icm_data::load_from_dir(dir)
            .with_context(|| format!("load catalog from {}", dir.display())),
        None => icm_data::load_default().context("load catalog"),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
