//! Rank command — top-N word frequencies for one essay file.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use essay_rank_core::{Config, engine};

/// Arguments for the `rank` subcommand.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Essay file to analyze.
    pub file: Utf8PathBuf,

    /// How many words to return (falls back to the configured default).
    #[arg(short = 'n', long = "count")]
    pub count: Option<usize>,

    /// Drop words shorter than this many characters before counting.
    #[arg(long)]
    pub min_word_len: Option<usize>,
}

/// Rank the most frequent words in a file and print the result.
#[instrument(name = "cmd_rank", skip_all, fields(file = %args.file))]
pub fn cmd_rank(args: RankArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, count = ?args.count, "executing rank command");

    let limit = args.count.unwrap_or(config.default_top_words);
    let min_word_len = args.min_word_len.or(config.min_word_len);

    let report = engine::rank_file(&args.file, limit, min_word_len, config.input_limit())
        .with_context(|| format!("failed to rank {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (i, entry) in report.words.iter().enumerate() {
        println!("{:>3}. {} {}", i + 1, entry.word.bold(), entry.count);
    }
    println!(
        "({} words, {} distinct)",
        report.total_words, report.distinct_words
    );

    Ok(())
}
