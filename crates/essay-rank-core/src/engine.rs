//! The ranking pipeline: load, tokenize, count, rank.
//!
//! Everything here is request-scoped. Each call builds its own frequency
//! table and discards it with the result, so concurrent callers never
//! share mutable state.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::LoadResult;
use crate::frequency::FrequencyTable;
use crate::loader;
use crate::rank::{self, RankedWord};
use crate::tokenizer;

/// The result of ranking an essay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankReport {
    /// Top words, highest count first.
    pub words: Vec<RankedWord>,
    /// Total number of words counted.
    pub total_words: usize,
    /// Number of distinct words in the essay.
    pub distinct_words: usize,
}

/// Rank the most frequent words in a text.
///
/// `min_word_len` drops words shorter than the given number of
/// characters before counting; `None` counts everything.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn rank_text(text: &str, limit: usize, min_word_len: Option<usize>) -> RankReport {
    let words = match min_word_len {
        Some(min) => tokenizer::tokenize_with_min_len(text, min),
        None => tokenizer::tokenize(text),
    };
    let table = FrequencyTable::from_words(words);
    let ranked = rank::top_words(&table, limit);
    tracing::debug!(
        total = table.total_words(),
        distinct = table.distinct_words(),
        returned = ranked.len(),
        "essay ranked"
    );

    RankReport {
        words: ranked,
        total_words: table.total_words(),
        distinct_words: table.distinct_words(),
    }
}

/// Load an essay from disk and rank its most frequent words.
#[tracing::instrument(skip_all, fields(path = %path, limit = limit))]
pub fn rank_file(
    path: &Utf8Path,
    limit: usize,
    min_word_len: Option<usize>,
    max_bytes: Option<u64>,
) -> LoadResult<RankReport> {
    let text = loader::load_essay(path, max_bytes)?;
    Ok(rank_text(&text, limit, min_word_len))
}
