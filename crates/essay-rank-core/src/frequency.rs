//! Word-frequency counting.

use std::collections::HashMap;

/// Per-word occurrence statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordStat {
    /// Number of occurrences.
    pub count: usize,
    /// Index of the word's first occurrence in the token sequence.
    ///
    /// Unique per word by construction; the ranker uses it as the
    /// deterministic tie-break among equal counts.
    pub first_seen: usize,
}

/// A mapping from word to occurrence statistics, built in a single pass.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: HashMap<String, WordStat>,
    total: usize,
}

impl FrequencyTable {
    /// Build a table from an ordered word sequence.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut entries: HashMap<String, WordStat> = HashMap::new();
        let mut total = 0;
        for (index, word) in words.into_iter().enumerate() {
            entries
                .entry(word)
                .and_modify(|stat| stat.count += 1)
                .or_insert(WordStat {
                    count: 1,
                    first_seen: index,
                });
            total += 1;
        }
        Self { entries, total }
    }

    /// Total number of words counted (sum of all counts).
    pub const fn total_words(&self) -> usize {
        self.total
    }

    /// Number of distinct words in the table.
    pub fn distinct_words(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the statistics for a single word.
    pub fn get(&self, word: &str) -> Option<&WordStat> {
        self.entries.get(word)
    }

    /// Iterate over all (word, stat) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordStat)> {
        self.entries.iter().map(|(w, s)| (w.as_str(), s))
    }
}
