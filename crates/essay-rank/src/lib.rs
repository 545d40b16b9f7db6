//! Library interface for the `essay-rank` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a
//! library, primarily for testing. The actual entry point is in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//! - [`server`] - The HTTP surface (feature `server`)

pub mod commands;

#[cfg(feature = "server")]
pub mod server;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                      Log filter (e.g., debug, essay_rank=trace)
    ESSAY_RANK_LOG_DIR            Directory for JSONL log files
    ESSAY_RANK_DEFAULT_TOP_WORDS  Word count used when -n is omitted
    ESSAY_RANK_SERVER_PORT        Port for the serve command
";

/// Command-line interface definition for essay-rank.
#[derive(Parser)]
#[command(name = "essay-rank")]
#[command(about = "Rank the most frequent words in an essay", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank the most frequent words in an essay file
    Rank(commands::rank::RankArgs),

    /// Start the HTTP API server
    #[cfg(feature = "server")]
    Serve(commands::serve::ServeArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}
