//! snc - the Sindarin compiler front end.
//!
//! Parses command-line arguments with clap, initializes logging, loads
//! configuration and hands the inputs to a [`Session`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use snc_drv::{Config, EmitType, Options, OutputFormat, Session};

/// Log filters selected by `--log-level`.
const LOG_LEVELS: [&str; 5] = ["off", "error", "warn", "info", "trace"];

/// snc - Sindarin compiler
///
/// Lexes Sindarin source files and dumps their token streams.
#[derive(Parser, Debug)]
#[command(name = "snc")]
#[command(author = "Sindarin Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sindarin compiler front end", long_about = None)]
struct Cli {
    /// Source files to process
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// What to produce
    #[arg(long, value_enum, default_value_t = EmitType::Tokens)]
    emit: EmitType,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Path to configuration file
    #[arg(short, long, env = "SNC_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Log level: 0 none, 1 error, 2 warn, 3 info, 4 trace
    #[arg(short = 'l', long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=4))]
    log_level: u8,

    /// Disable color output
    #[arg(long)]
    no_color: bool,

    /// Longest accepted numeric literal (default: from config)
    #[arg(long)]
    max_number_len: Option<usize>,

    /// Width of a tab in leading indentation (default: from config)
    #[arg(long)]
    tab_width: Option<u32>,
}

impl Cli {
    /// Merges the flags over the file configuration.
    fn into_options(self, config: &Config) -> Options {
        let mut options = Options::from_config(config);
        options.inputs = self.files;
        options.emit = self.emit;
        options.output = self.output;
        if let Some(format) = self.format {
            options.format = format;
        }
        match self.jobs {
            Some(0) => options.jobs = num_cpus::get(),
            Some(jobs) => options.jobs = jobs,
            None => {},
        }
        if let Some(max) = self.max_number_len {
            options.lexer.max_number_len = max;
        }
        if let Some(width) = self.tab_width {
            options.lexer.tab_width = width;
        }
        options
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_level, cli.no_color)?;

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    let options = cli.into_options(&config);

    let session = Session::new(options)?;
    session.run()?;
    Ok(())
}

/// Initialize the logging system.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and
/// `--log-level` picks from [`LOG_LEVELS`]. Logs go to stderr so they never
/// mix with a token dump on stdout.
fn init_logging(verbose: bool, level: u8, no_color: bool) -> anyhow::Result<()> {
    let default = if verbose {
        "debug"
    } else {
        LOG_LEVELS[usize::from(level).min(LOG_LEVELS.len() - 1)]
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

fn load_config(config_path: Option<&Path>) -> snc_drv::Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_files() {
        let cli = Cli::parse_from(["snc", "a.sn", "b.sn"]);
        assert_eq!(cli.files, vec![PathBuf::from("a.sn"), PathBuf::from("b.sn")]);
        assert_eq!(cli.emit, EmitType::Tokens);
        assert_eq!(cli.log_level, 1);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_requires_files() {
        assert!(Cli::try_parse_from(["snc"]).is_err());
    }

    #[test]
    fn test_cli_parse_format_and_output() {
        let cli = Cli::parse_from(["snc", "--format", "json", "-o", "out.json", "a.sn"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_cli_rejects_unknown_emit() {
        assert!(Cli::try_parse_from(["snc", "--emit", "ast", "a.sn"]).is_err());
    }

    #[test]
    fn test_cli_log_level_range() {
        let cli = Cli::parse_from(["snc", "-l", "4", "a.sn"]);
        assert_eq!(cli.log_level, 4);
        assert!(Cli::try_parse_from(["snc", "-l", "5", "a.sn"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.output.jobs = 2;
        config.lexer.max_number_len = 10;
        let cli = Cli::parse_from([
            "snc",
            "--max-number-len",
            "20",
            "--tab-width",
            "4",
            "-j",
            "3",
            "a.sn",
        ]);
        let options = cli.into_options(&config);
        assert_eq!(options.lexer.max_number_len, 20);
        assert_eq!(options.lexer.tab_width, 4);
        assert_eq!(options.jobs, 3);
        assert_eq!(options.inputs, vec![PathBuf::from("a.sn")]);
    }

    #[test]
    fn test_config_used_without_flags() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.output.jobs = 2;
        let options = Cli::parse_from(["snc", "a.sn"]).into_options(&config);
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.jobs, 2);
    }
}
