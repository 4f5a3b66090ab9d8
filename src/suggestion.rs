/*!
suggestion module

The suggestion engine: an owned dictionary, a [`Config`] and the ranking logic
that turns `(word, distance)` candidates into an ordered result list.

- `Suggestion` is one ranked candidate (word plus distance, for diagnostics)
- `Outcome` separates "the word is already valid" from "here are suggestions"
- `TopK` is the bounded selector used by every scan
- `SuggestionEngine` owns the dictionary and runs exhaustive scans

Ranking order: ascending distance, then ascending word text. Dictionary words
are stored lowercased, so plain string order is the case-folded order the
distance computation uses. The order never depends on set iteration order.

Two independent pruning rules apply to a query:
- the valid-word short-circuit (`lookup`), skipped when disabled in the config
- the distance ceiling (`rank`), which drops any candidate over the limit
*/

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use serde::Serialize;

use crate::config::{Config, ConfigError};
use crate::distance::DistanceCalculator;

/// A ranked candidate returned by [`SuggestionEngine::rank`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub word: String,
    /// Edit distance from the typed word to `word`.
    pub distance: usize,
}

/// Result of [`SuggestionEngine::lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "suggestions", rename_all = "snake_case")]
pub enum Outcome {
    /// The typed word is in the dictionary; no correction needed.
    ValidWord,
    /// Ranked suggestions, possibly empty.
    Suggestions(Vec<String>),
}

impl Outcome {
    pub fn is_valid_word(&self) -> bool {
        matches!(self, Outcome::ValidWord)
    }

    /// Build an outcome from [`SuggestionEngine::lookup_ranked_with`]'s
    /// result, dropping the distances.
    pub fn from_ranked(ranked: Option<Vec<Suggestion>>) -> Self {
        match ranked {
            None => Outcome::ValidWord,
            Some(ranked) => Outcome::Suggestions(ranked.into_iter().map(|s| s.word).collect()),
        }
    }

    /// The suggested words, or an empty slice for `ValidWord`.
    pub fn suggestions(&self) -> &[String] {
        match self {
            Outcome::ValidWord => &[],
            Outcome::Suggestions(words) => words,
        }
    }
}

/// Borrowed candidate used while scanning. Field order gives the ranking order
/// through the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate<'a> {
    distance: usize,
    word: &'a str,
}

impl Candidate<'_> {
    fn into_suggestion(self) -> Suggestion {
        Suggestion {
            word: self.word.to_string(),
            distance: self.distance,
        }
    }
}

/// Keeps the `k` smallest items seen so far under `Ord`.
///
/// Backed by a max-heap of at most `k` entries whose top is the worst item
/// kept, so each push is O(log k). Ties are broken by the item's own `Ord`,
/// never by arrival order, so any split of the input followed by
/// [`TopK::merge`] selects the same items.
#[derive(Debug, Clone)]
pub struct TopK<T: Ord> {
    capacity: usize,
    heap: BinaryHeap<T>,
}

impl<T: Ord> TopK<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1).min(1024)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// True if `item` would be kept by a subsequent `push`.
    pub fn admits(&self, item: &T) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.heap.len() < self.capacity {
            return true;
        }
        match self.heap.peek() {
            Some(worst) => item.cmp(worst) == Ordering::Less,
            None => true,
        }
    }

    pub fn push(&mut self, item: T) {
        if !self.admits(&item) {
            return;
        }
        self.heap.push(item);
        if self.heap.len() > self.capacity {
            self.heap.pop();
        }
    }

    /// Combine two selections of the same capacity.
    pub fn merge(mut self, other: Self) -> Self {
        for item in other.heap {
            self.push(item);
        }
        self
    }

    /// The kept items, best first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }
}

/// Exhaustive-scan suggestion engine.
///
/// The dictionary is fixed at construction. Configuration may change between
/// calls; each call works on a copy of the configuration taken when it starts.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    dictionary: HashSet<String>,
    config: Config,
}

impl SuggestionEngine {
    /// Build an engine from any word collection. Words are lowercased and
    /// deduplicated; empty entries are dropped.
    pub fn new<I, S>(words: I, config: Config) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { dictionary, config }
    }

    /// Build an engine, validating the raw settings first.
    pub fn with_settings<I, S>(
        words: I,
        max_edit_distance: usize,
        response_limit: usize,
        ignore_valid_words: bool,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let config = Config::new(max_edit_distance, response_limit, ignore_valid_words)?;
        Ok(Self::new(words, config))
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    pub fn max_edit_distance(&self) -> usize {
        self.config.max_edit_distance()
    }

    pub fn set_max_edit_distance(&mut self, value: usize) {
        self.config.set_max_edit_distance(value);
    }

    pub fn response_limit(&self) -> usize {
        self.config.response_limit()
    }

    /// Rejects zero without touching the current limit.
    pub fn set_response_limit(&mut self, value: usize) -> Result<(), ConfigError> {
        self.config.set_response_limit(value)
    }

    pub fn ignore_valid_words(&self) -> bool {
        self.config.ignore_valid_words()
    }

    pub fn set_ignore_valid_words(&mut self, value: bool) {
        self.config.set_ignore_valid_words(value);
    }

    /// Case-insensitive dictionary membership.
    pub fn contains(&self, word: &str) -> bool {
        self.dictionary.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// Dictionary words in unspecified order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.dictionary.iter().map(String::as_str)
    }

    fn short_circuits(&self, typed: &str, config: &Config) -> bool {
        config.ignore_valid_words() && self.contains(typed)
    }

    /// Look up `typed` under the current configuration.
    pub fn lookup(&self, typed: &str) -> Outcome {
        let config = self.config;
        self.lookup_with(typed, &config)
    }

    /// Look up `typed` under an explicit configuration snapshot.
    pub fn lookup_with(&self, typed: &str, config: &Config) -> Outcome {
        Outcome::from_ranked(self.lookup_ranked_with(typed, config))
    }

    /// [`SuggestionEngine::lookup_with`] keeping the distances: `None` when the
    /// valid-word short-circuit fires, otherwise the result of one
    /// [`SuggestionEngine::rank`] scan.
    pub fn lookup_ranked_with(
        &self,
        typed: &str,
        config: &Config,
    ) -> Option<Vec<Suggestion>> {
        if self.short_circuits(typed, config) {
            return None;
        }
        Some(self.rank(typed, config))
    }

    /// The best `response_limit` dictionary words within `max_edit_distance`
    /// of `typed`, with their distances. Never short-circuits on valid words.
    pub fn rank(&self, typed: &str, config: &Config) -> Vec<Suggestion> {
        let calculator = DistanceCalculator::new(typed);
        let limit = config.max_edit_distance();
        let mut top = TopK::new(config.response_limit());
        let mut row = Vec::new();

        for word in &self.dictionary {
            if let Some(candidate) = score(&calculator, word, limit, &mut row) {
                top.push(candidate);
            }
        }

        top.into_sorted_vec()
            .into_iter()
            .map(Candidate::into_suggestion)
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl SuggestionEngine {
    /// Same result as [`SuggestionEngine::lookup`], scanning the dictionary on
    /// the rayon thread pool.
    pub fn par_lookup(&self, typed: &str) -> Outcome {
        let config = self.config;
        self.par_lookup_with(typed, &config)
    }

    pub fn par_lookup_with(&self, typed: &str, config: &Config) -> Outcome {
        Outcome::from_ranked(self.par_lookup_ranked_with(typed, config))
    }

    /// Parallel [`SuggestionEngine::lookup_ranked_with`].
    pub fn par_lookup_ranked_with(
        &self,
        typed: &str,
        config: &Config,
    ) -> Option<Vec<Suggestion>> {
        if self.short_circuits(typed, config) {
            return None;
        }
        Some(self.par_rank(typed, config))
    }

    /// Parallel [`SuggestionEngine::rank`]: one `TopK` per rayon shard, merged
    /// with the same ordering.
    pub fn par_rank(&self, typed: &str, config: &Config) -> Vec<Suggestion> {
        use rayon::prelude::*;

        let calculator = DistanceCalculator::new(typed);
        let limit = config.max_edit_distance();
        let k = config.response_limit();

        self.dictionary
            .par_iter()
            .fold(
                || (TopK::new(k), Vec::new()),
                |(mut top, mut row), word| {
                    if let Some(candidate) = score(&calculator, word, limit, &mut row) {
                        top.push(candidate);
                    }
                    (top, row)
                },
            )
            .map(|(top, _)| top)
            .reduce(|| TopK::new(k), TopK::merge)
            .into_sorted_vec()
            .into_iter()
            .map(Candidate::into_suggestion)
            .collect()
    }
}

/// Dictionary words are stored lowercase, so they skip the per-call fold.
fn score<'a>(
    calculator: &DistanceCalculator,
    word: &'a str,
    limit: usize,
    row: &mut Vec<usize>,
) -> Option<Candidate<'a>> {
    calculator
        .distance_to_folded(word, Some(limit), row)
        .map(|distance| Candidate { distance, word })
}
