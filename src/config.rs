//! Engine configuration: the ceiling, the result cap and the valid-word rule.
//!
//! A [`Config`] is a small `Copy` value. Every query reads one snapshot of it
//! at call start, so changing settings between calls never affects a query
//! that is already running.

use thiserror::Error;

pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;
pub const DEFAULT_RESPONSE_LIMIT: usize = 10;
pub const DEFAULT_IGNORE_VALID_WORDS: bool = true;

/// Rejected configuration values. The previous configuration stays in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max edit distance must not be negative, got {0}")]
    NegativeEditDistance(i64),

    #[error("response limit must be at least 1, got {0}")]
    InvalidResponseLimit(i64),

    #[error("{field} must be a valid integer, got {value:?}")]
    NotANumber { field: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_edit_distance: usize,
    response_limit: usize,
    ignore_valid_words: bool,
}

impl Config {
    /// Validate and build a configuration. `response_limit` must be non-zero.
    pub fn new(
        max_edit_distance: usize,
        response_limit: usize,
        ignore_valid_words: bool,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.set_max_edit_distance(max_edit_distance);
        config.set_response_limit(response_limit)?;
        config.set_ignore_valid_words(ignore_valid_words);
        Ok(config)
    }

    /// Build from signed values, as supplied by form fields or other untyped input.
    pub fn from_signed(
        max_edit_distance: i64,
        response_limit: i64,
        ignore_valid_words: bool,
    ) -> Result<Self, ConfigError> {
        Self::new(
            edit_distance_from_signed(max_edit_distance)?,
            response_limit_from_signed(response_limit)?,
            ignore_valid_words,
        )
    }

    /// Used by `include_dictionary!`, which rejects a zero limit at compile time.
    #[doc(hidden)]
    pub const fn from_checked_parts(
        max_edit_distance: usize,
        response_limit: usize,
        ignore_valid_words: bool,
    ) -> Self {
        assert!(response_limit > 0, "response limit must be at least 1");
        Self {
            max_edit_distance,
            response_limit,
            ignore_valid_words,
        }
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    pub fn response_limit(&self) -> usize {
        self.response_limit
    }

    pub fn ignore_valid_words(&self) -> bool {
        self.ignore_valid_words
    }

    pub fn set_max_edit_distance(&mut self, value: usize) {
        self.max_edit_distance = value;
    }

    /// Set the result cap. Zero is rejected and leaves the current value.
    pub fn set_response_limit(&mut self, value: usize) -> Result<(), ConfigError> {
        if value == 0 {
            return Err(ConfigError::InvalidResponseLimit(0));
        }
        self.response_limit = value;
        Ok(())
    }

    pub fn set_ignore_valid_words(&mut self, value: bool) {
        self.ignore_valid_words = value;
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            response_limit: DEFAULT_RESPONSE_LIMIT,
            ignore_valid_words: DEFAULT_IGNORE_VALID_WORDS,
        }
    }
}

/// Convert a signed ceiling, rejecting negatives.
pub fn edit_distance_from_signed(value: i64) -> Result<usize, ConfigError> {
    usize::try_from(value).map_err(|_| ConfigError::NegativeEditDistance(value))
}

/// Convert a signed result cap, rejecting zero and negatives.
pub fn response_limit_from_signed(value: i64) -> Result<usize, ConfigError> {
    match usize::try_from(value) {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidResponseLimit(value)),
    }
}

/// Parse a textual max edit distance.
pub fn parse_max_edit_distance(text: &str) -> Result<usize, ConfigError> {
    edit_distance_from_signed(parse_integer("max edit distance", text)?)
}

/// Parse a textual response limit.
pub fn parse_response_limit(text: &str) -> Result<usize, ConfigError> {
    response_limit_from_signed(parse_integer("response limit", text)?)
}

fn parse_integer(field: &'static str, text: &str) -> Result<i64, ConfigError> {
    text.trim().parse::<i64>().map_err(|_| ConfigError::NotANumber {
        field,
        value: text.to_string(),
    })
}
