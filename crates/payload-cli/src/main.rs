//! Payload card CLI.

use clap::{ColorChoice, Parser};
use payload_cli::commands::{run_card, run_chart, run_nationalities};
use payload_cli::logging::{LogConfig, LogFormat, init_logging};
use payload_cli::render::RenderOptions;
use payload_cli::settings::{Settings, load_settings};
use payload_cli::types::ViewRequest;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, DatasetArgs, LogFormatArg, LogLevelArg, ViewArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let options = render_options(&settings, cli.color.color);
    let result = match &cli.command {
        Command::Card(args) => run_card(&view_request(args), &options),
        Command::Chart(args) => run_chart(&view_request(args)),
        Command::Nationalities(args) => run_nationalities(&dataset_request(args), &options),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn dataset_request(args: &DatasetArgs) -> ViewRequest {
    ViewRequest {
        dataset: args.dataset.clone(),
        ..ViewRequest::default()
    }
}

fn view_request(args: &ViewArgs) -> ViewRequest {
    ViewRequest {
        nationality: args.nationality.clone(),
        sort: args.sort.map(|key| (key.into(), args.order.into())),
        clicks: args.clicks.iter().map(|&key| key.into()).collect(),
        ..dataset_request(&args.dataset)
    }
}

fn render_options(settings: &Settings, color: ColorChoice) -> RenderOptions {
    RenderOptions {
        mass_format: settings.display.mass_format(),
        table_width: settings.display.table_width,
        bar_width: settings.chart.bar_width,
        color,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_ansi(with_ansi)
        .with_target(level_filter >= LevelFilter::DEBUG)
        .with_timestamps(cli.log_timestamps);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}
