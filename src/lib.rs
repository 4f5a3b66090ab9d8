//! autocorrectrs - dictionary word suggestions ranked by edit distance
//!
//! The crate exposes:
//!
//! - `distance`: case-insensitive Levenshtein distance with an early-abandoning
//!   ceiling
//! - `suggestion`: the `SuggestionEngine`, which scans every dictionary word and
//!   keeps the best matches (ascending distance, then alphabetical)
//! - `config`: the validated `Config` snapshot each query runs against
//! - `dictionary`: loaders for line-based word lists
//!
//! It also re-exports a compile-time proc-macro `include_dictionary!` (from the
//! `autocorrectrs_macros` crate) that embeds a word list as a PHF set and
//! returns a ready `SuggestionEngine`.
//!
//! Examples
//!
//! - Compile-time embedding:
//!
//! ```ignore
//! use autocorrectrs::include_dictionary;
//!
//! let engine = include_dictionary!("path/to/words.txt", max_edit_distance = 2, response_limit = 5);
//! let outcome = engine.lookup("helo");
//! ```
//!
//! - Runtime construction:
//!
//! ```
//! use autocorrectrs::{Outcome, SuggestionEngine};
//!
//! let engine = SuggestionEngine::with_settings(["cat", "cats", "bat", "cut"], 1, 10, false)?;
//! assert_eq!(
//!     engine.lookup("cot"),
//!     Outcome::Suggestions(vec!["bat".into(), "cat".into(), "cut".into()])
//! );
//! # Ok::<(), autocorrectrs::ConfigError>(())
//! ```

pub mod config;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod suggestion;

pub use config::{Config, ConfigError};
pub use dictionary::DictionaryError;
pub use distance::{edit_distance, levenshtein, DistanceCalculator};
pub use error::{Error, Result};
pub use suggestion::{Outcome, Suggestion, SuggestionEngine, TopK};

/// Re-export of the compile-time dictionary macro.
///
///   use autocorrectrs::include_dictionary;
pub use autocorrectrs_macros::include_dictionary;
