//! CLI argument definitions for pagewire.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pagewire",
    version,
    about = "Headless landing-page behavior: navigation, form validation, submission",
    long_about = "Run the landing-page controllers against a headless document.\n\n\
                  Validate form fixtures against the contact-form rules, list the\n\
                  rule set, or replay an event script on the demo page."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the fields of a form fixture.
    Validate(ValidateArgs),

    /// List the validation rules in precedence order.
    Rules,

    /// Replay an event script against the demo landing page.
    Simulate(SimulateArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// TOML file with one `[[field]]` table per form control.
    #[arg(value_name = "FORM")]
    pub fixture: PathBuf,
}

#[derive(Parser)]
pub struct SimulateArgs {
    /// TOML event script (`[[step]]` tables). Without it the page is only started.
    #[arg(long = "script", value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// TOML file overriding the default element selectors.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the final page state as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
