//! Property-based tests for the distance function and the ranking rules.

use autocorrectrs::{edit_distance, levenshtein, Config, Outcome, SuggestionEngine};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,8}"
}

fn dict_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,6}", 1..=40)
}

// Full-matrix reference with no pruning
fn naive_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let mut matrix = vec![vec![0; b.len() + 1]; a.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        matrix[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }
    matrix[a.len()][b.len()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_identity(w in word_strategy()) {
        prop_assert_eq!(levenshtein(&w, &w), 0);
        prop_assert_eq!(levenshtein(&w, &w.to_uppercase()), 0);
    }

    #[test]
    fn prop_symmetry(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn prop_matches_reference(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b), naive_levenshtein(&a, &b));
    }

    /// Pruning never changes the within/over-limit classification.
    #[test]
    fn prop_limit_classification(a in word_strategy(), b in word_strategy(), limit in 0usize..=9) {
        let d = naive_levenshtein(&a, &b);
        let expected = if d <= limit { Some(d) } else { None };
        prop_assert_eq!(edit_distance(&a, &b, Some(limit)), expected);
    }

    #[test]
    fn prop_ranked_and_bounded(
        words in dict_strategy(),
        query in "[a-e]{0,6}",
        max in 0usize..=3,
        limit in 1usize..=8,
    ) {
        let engine = SuggestionEngine::with_settings(&words, max, limit, false).unwrap();
        let config = engine.config();
        let ranked = engine.rank(&query, &config);

        prop_assert!(ranked.len() <= limit);
        for pair in ranked.windows(2) {
            prop_assert!((pair[0].distance, &pair[0].word) < (pair[1].distance, &pair[1].word));
        }
        for s in &ranked {
            prop_assert!(s.distance <= max);
            prop_assert_eq!(s.distance, naive_levenshtein(&query, &s.word));
        }

        // Nothing better was left out
        let mut all: Vec<(usize, String)> = engine
            .words()
            .map(|w| (naive_levenshtein(&query, w), w.to_string()))
            .filter(|(d, _)| *d <= max)
            .collect();
        all.sort();
        all.truncate(limit);
        let got: Vec<(usize, String)> = ranked.into_iter().map(|s| (s.distance, s.word)).collect();
        prop_assert_eq!(got, all);
    }

    /// Storage order of the input never changes the result.
    #[test]
    fn prop_order_independent(words in dict_strategy(), query in "[a-e]{1,5}") {
        let config = Config::new(2, 5, false).unwrap();
        let forward = SuggestionEngine::new(&words, config);
        let reversed = SuggestionEngine::new(words.iter().rev(), config);
        prop_assert_eq!(forward.lookup(&query), reversed.lookup(&query));
        prop_assert_eq!(forward.lookup(&query), forward.lookup(&query));
    }

    #[test]
    fn prop_short_circuit(words in dict_strategy(), pick in any::<prop::sample::Index>()) {
        let typed = pick.get(&words).clone();
        let engine = SuggestionEngine::with_settings(&words, 2, 5, true).unwrap();
        prop_assert_eq!(engine.lookup(&typed), Outcome::ValidWord);
    }
}
