//! Core library for essay-rank.
//!
//! Given an essay (a UTF-8 text file) and a requested count N, this crate
//! extracts and ranks the N most frequent words. The pipeline is
//! load → tokenize → count → rank, fully deterministic: ties between
//! equal counts break on first occurrence in the text.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and management
//! - [`engine`] - The ranking pipeline and its report type
//! - [`error`] - Error types and result aliases
//! - [`frequency`] - Word-frequency table
//! - [`loader`] - Essay file loading
//! - [`rank`] - Top-N selection
//! - [`tokenizer`] - Word splitting and normalization
//!
//! # Quick Start
//!
//! ```
//! use essay_rank_core::engine;
//!
//! let report = engine::rank_text("the cat sat on the mat the cat ran", 2, None);
//! assert_eq!(report.words[0].word, "the");
//! assert_eq!(report.words[0].count, 3);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod loader;
pub mod rank;
pub mod tokenizer;

pub use config::{Config, ConfigLoader, LogLevel};
pub use engine::{RankReport, rank_file, rank_text};
pub use error::{ConfigError, ConfigResult, LoadError, LoadResult, RankError, RankResult};
pub use frequency::FrequencyTable;
pub use rank::RankedWord;
