//! **reviewmill** - Batch CLI turning scraped blog-review CSVs into ranked keyword tables
//!
//! Three chained stages: `clean` sanitizes text and segments rows into reviews,
//! `tokenize` runs morphological analysis with POS filtering, `rank` counts and
//! orders each subject's keywords. Stages communicate through CSV files.

/// Command-line interface with clap integration
pub mod cli;

/// Core processing pipeline - the three batch stages and their building blocks
pub mod core {
    /// Single-field text cleanup (entities, tags, emoji, whitespace)
    pub mod sanitize;
    pub use sanitize::Sanitizer;

    /// Boundary-marker segmentation of scrape rows into numbered reviews
    pub mod segment;
    pub use segment::{REVIEW_ID_COLUMN, SegmentError, Segmented, segment_reviews};

    /// POS and length filtering of analyzed morphemes
    pub mod filter;
    pub use filter::{FilterPolicy, filter_stems};

    /// Per-subject keyword counting and ranking
    pub mod aggregate;
    pub use aggregate::{KeywordRank, RankPolicy, rank_keywords};

    /// The `clean` stage runner
    pub mod clean;
    pub use clean::run as clean_run;

    /// The `tokenize` stage runner
    pub mod tokenize;
    pub use tokenize::run as tokenize_run;

    /// The `rank` stage runner
    pub mod rank;
    pub use rank::run as rank_run;
}

/// Morphological analysis - pluggable backends behind one trait
pub mod morph {
    /// Analyzer trait, morpheme and POS tag types, backend registry
    pub mod analyzer;
    pub use analyzer::{Analyzer, Morpheme, PosTag, get_analyzer};

    /// Word-boundary fallback backend (no dictionary required)
    pub mod words;
    pub use words::WordAnalyzer;
}

/// Infrastructure - Configuration, I/O, and the in-memory table
pub mod infra {
    /// Configuration management with TOML support and env overrides
    pub mod config;
    // self:: keeps the module from clashing with the config crate
    pub use self::config::{Config, init as config_init, load_config};

    /// CSV loading/storing with UTF-8 and EUC-KR decoding
    pub mod io;
    pub use io::{LoadError, load_table, store_table};

    /// Header-indexed string table shared by all stages
    pub mod table;
    pub use table::{Table, decode_tokens, encode_tokens};
}

// Strategic re-exports for clean CLI interface
// (`crate::core` disambiguates from the built-in core crate)
pub use crate::core::{clean_run, rank_run, tokenize_run};
pub use cli::{AppContext, Cli, Commands};
pub use infra::{Config, Table, load_config};
pub use morph::{Analyzer, Morpheme, PosTag};

// Core types for external consumers
pub use crate::core::aggregate::KeywordRank;
