//! Info command implementation

use clap::Args;
use essay_rank_core::config::{
    Config, ConfigSources, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct InfoReport {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: &'static str,
    default_top_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_word_len: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<u64>,
    server_host: String,
    server_port: u16,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!("executing info command");

    let report = InfoReport {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        config_file: sources.primary_file().map(ToString::to_string),
        log_level: config.log_level.as_str(),
        default_top_words: config.default_top_words,
        min_word_len: config.min_word_len,
        max_input_bytes: config.input_limit(),
        server_host: config
            .server_host
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
        server_port: config.server_port.unwrap_or(DEFAULT_SERVER_PORT),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", report.name.bold(), report.version);
    if !report.description.is_empty() {
        println!("{}", report.description);
    }
    println!();
    match report.config_file {
        Some(ref file) => println!("config file:      {file}"),
        None => println!("config file:      (defaults)"),
    }
    println!("log level:        {}", report.log_level);
    println!("default words:    {}", report.default_top_words);
    if let Some(min) = report.min_word_len {
        println!("min word length:  {min}");
    }
    match report.max_input_bytes {
        Some(limit) => println!("input limit:      {limit} bytes"),
        None => println!("input limit:      disabled"),
    }
    println!(
        "server:           {}:{}",
        report.server_host, report.server_port
    );

    Ok(())
}
