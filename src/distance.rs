/*!
distance module

Case-insensitive Levenshtein distance (unit-cost insertion, deletion and
substitution) with an optional ceiling.

- `edit_distance` compares two words, returning `None` once the distance is
  known to exceed the ceiling
- `levenshtein` is the unbounded form
- `DistanceCalculator` folds a query once and measures it against many
  candidates, which is what an exhaustive dictionary scan needs

Abandonment rule: after each completed DP row the minimum cell of that row is
a lower bound on every cell of every later row (each cell is derived from a
neighbour in the previous row plus a non-negative cost). If the minimum is
already above the ceiling the final cell must be too, so the comparison stops.
This only holds for the unit-cost model used here.
*/

use std::cmp::min;

/// Compute the Levenshtein distance between `a` and `b` after lowercasing both.
///
/// `limit = None` is unbounded and always yields `Some`. With `Some(limit)` the
/// result is `None` whenever the true distance is greater than `limit`.
pub fn edit_distance(a: &str, b: &str, limit: Option<usize>) -> Option<usize> {
    DistanceCalculator::new(a).distance_to(b, limit)
}

/// Unbounded case-insensitive Levenshtein distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    // usize::MAX can never be exceeded, so the bounded form always answers.
    edit_distance(a, b, None).unwrap_or(usize::MAX)
}

/// A query word folded once, ready to be compared with many candidates.
#[derive(Debug, Clone)]
pub struct DistanceCalculator {
    query: String,
    folded: Vec<char>,
}

impl DistanceCalculator {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            folded: query.to_lowercase().chars().collect(),
        }
    }

    /// The query as it was given, before case folding.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Distance from the query to `candidate`, or `None` if it exceeds `limit`.
    pub fn distance_to(&self, candidate: &str, limit: Option<usize>) -> Option<usize> {
        let candidate = candidate.to_lowercase();
        let mut row = Vec::new();
        self.distance_to_folded(&candidate, limit, &mut row)
    }

    /// Like [`DistanceCalculator::distance_to`] for a candidate that is already
    /// lowercase. `row` is scratch space reused across calls, so a scan over
    /// many candidates allocates nothing per word.
    pub fn distance_to_folded(
        &self,
        candidate: &str,
        limit: Option<usize>,
        row: &mut Vec<usize>,
    ) -> Option<usize> {
        bounded_distance(&self.folded, candidate, limit.unwrap_or(usize::MAX), row)
    }

    /// True if `candidate` is within `max_distance` edits of the query.
    pub fn is_match(&self, candidate: &str, max_distance: usize) -> bool {
        self.distance_to(candidate, Some(max_distance)).is_some()
    }
}

/// Single-row DP over folded inputs. `row[j]` holds the previous row until it
/// is overwritten; `diagonal` carries the cell above-left.
fn bounded_distance(a: &[char], b: &str, limit: usize, row: &mut Vec<usize>) -> Option<usize> {
    let within = |d: usize| if d <= limit { Some(d) } else { None };
    let b_len = b.chars().count();

    if a.is_empty() {
        return within(b_len);
    }
    if b_len == 0 {
        return within(a.len());
    }

    // The length difference is a lower bound on the distance.
    if a.len().abs_diff(b_len) > limit {
        return None;
    }

    row.clear();
    row.extend(0..=b_len);

    for (i, &ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut min_in_row = row[0];

        for (j, cb) in b.chars().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal
            } else {
                1 + min(
                    diagonal, // substitution
                    min(
                        above,  // deletion
                        row[j], // insertion
                    ),
                )
            };
            diagonal = above;
            min_in_row = min(min_in_row, row[j + 1]);
        }

        if min_in_row > limit {
            return None;
        }
    }

    within(row[b_len])
}
