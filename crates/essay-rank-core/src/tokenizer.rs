//! Word tokenization.
//!
//! Any run of non-alphanumeric characters separates words; fragments are
//! lowercased and empty fragments are dropped. Numbers and single
//! characters count as words — there is no stop-word list here. Callers
//! that want the old "length >= 3" behavior pass a minimum length to
//! [`tokenize_with_min_len`].

/// Split text into normalized words, preserving first-occurrence order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Like [`tokenize`], but drops words shorter than `min_len` characters.
///
/// `min_len` of 0 or 1 keeps everything. Length is measured in `char`s,
/// not bytes, so accented words are not over-counted.
pub fn tokenize_with_min_len(text: &str, min_len: usize) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|w| w.chars().count() >= min_len)
        .collect()
}
