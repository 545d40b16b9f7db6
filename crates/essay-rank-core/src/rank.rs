//! Top-N word ranking.
//!
//! Ordering is count descending, then first-occurrence index ascending.
//! The first-occurrence index is unique per word, so the ordering is
//! total and repeated runs over identical input produce identical output.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::error::{RankError, RankResult};
use crate::frequency::FrequencyTable;

/// One entry of a ranked result: a word and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWord {
    /// The normalized word.
    pub word: String,
    /// Number of occurrences in the input.
    pub count: usize,
}

/// Select the `limit` highest-ranked words from a frequency table.
///
/// A `limit` of 0 returns an empty vector; a `limit` beyond the number
/// of distinct words returns every word, with no padding.
pub fn top_words(table: &FrequencyTable, limit: usize) -> Vec<RankedWord> {
    if limit == 0 || table.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(&str, usize, usize)> = table
        .iter()
        .map(|(word, stat)| (word, stat.count, stat.first_seen))
        .collect();
    ranked.sort_unstable_by_key(|&(_, count, first_seen)| (Reverse(count), first_seen));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(word, count, _)| RankedWord {
            word: word.to_string(),
            count,
        })
        .collect()
}

/// Validate a raw signed count from an external caller.
///
/// Negative values are rejected rather than clamped; zero is valid and
/// means "return nothing".
pub const fn validate_count(raw: i64) -> RankResult<usize> {
    if raw < 0 {
        return Err(RankError::InvalidCount { value: raw });
    }
    Ok(raw as usize)
}
