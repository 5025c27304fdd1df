//! Datastandard report CLI.

use clap::{ColorChoice, Parser};
use dstd_cli::commands::{
    ReportFormat, ReportRequest, exit_code, print_report_summary, run_categories, run_report,
};
use dstd_cli::logging::{LogConfig, LogFormat, init_logging};
use dstd_output::OutputFormat;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ReportArgs, ReportFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Report(args) => match run_report(&report_request(args)) {
            Ok(summary) => {
                print_report_summary(&summary);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                exit_code(&error)
            }
        },
        Command::Categories(args) => match run_categories(args.datastandard.as_deref()) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                exit_code(&error)
            }
        },
    };
    std::process::exit(exit_code);
}

fn report_request(args: ReportArgs) -> ReportRequest {
    ReportRequest {
        datastandard: args.source.datastandard,
        category_id: args.category_id,
        format: match args.format {
            ReportFormatArg::Table => ReportFormat::Table,
            ReportFormatArg::Csv => ReportFormat::Serialized(OutputFormat::Csv),
            ReportFormatArg::Json => ReportFormat::Serialized(OutputFormat::Json),
        },
        output: args.output,
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
