use std::sync::{Arc, RwLock};
use std::thread;

use autocorrectrs::{dictionary, Config, ConfigError, Outcome, SuggestionEngine};

#[test]
fn test_cot_scenario() {
    let engine =
        SuggestionEngine::with_settings(["cat", "cats", "bat", "cut"], 1, 10, false).unwrap();
    assert_eq!(
        engine.lookup("cot"),
        Outcome::Suggestions(vec!["bat".into(), "cat".into(), "cut".into()])
    );
}

#[test]
fn test_hello_scenarios() {
    let engine = SuggestionEngine::with_settings(["hello"], 1, 10, true).unwrap();
    assert_eq!(engine.lookup("hello"), Outcome::ValidWord);
    assert_eq!(engine.lookup("xyz"), Outcome::Suggestions(vec![]));
}

#[test]
fn test_configuration_errors_are_reported() {
    assert_eq!(
        SuggestionEngine::with_settings(["a"], 1, 0, true).unwrap_err(),
        ConfigError::InvalidResponseLimit(0)
    );
    assert_eq!(
        Config::from_signed(-1, 10, true).unwrap_err(),
        ConfigError::NegativeEditDistance(-1)
    );
}

#[test]
fn test_loaded_dictionary_end_to_end() {
    let words = dictionary::parse("5\norange\nborage\nrange\narrange\nbanana\n".as_bytes()).unwrap();
    let engine = SuggestionEngine::with_settings(&words, 1, 10, true).unwrap();
    assert_eq!(
        engine.lookup("Borange").suggestions(),
        ["borage", "orange"]
    );
    assert_eq!(engine.lookup("ORANGE"), Outcome::ValidWord);
}

#[test]
fn test_outcome_serializes_distinctly() {
    let valid = serde_json::to_value(Outcome::ValidWord).unwrap();
    assert_eq!(valid, serde_json::json!({ "outcome": "valid_word" }));

    let none = serde_json::to_value(Outcome::Suggestions(vec![])).unwrap();
    assert_eq!(
        none,
        serde_json::json!({ "outcome": "suggestions", "suggestions": [] })
    );
}

/// Queries running while settings change see either the old or the new
/// configuration in full, never a mix.
#[test]
fn test_concurrent_queries_use_a_config_snapshot() {
    let words: Vec<String> = (0..200).map(|i| format!("word{i}")).collect();
    let engine = Arc::new(RwLock::new(
        SuggestionEngine::with_settings(&words, 1, 5, false).unwrap(),
    ));

    let narrow = Config::new(1, 5, false).unwrap();
    let wide = Config::new(3, 20, false).unwrap();
    let (expected_narrow, expected_wide) = {
        let guard = engine.read().unwrap();
        (
            guard.lookup_with("word7", &narrow),
            guard.lookup_with("word7", &wide),
        )
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                (0..50)
                    .map(|_| engine.read().unwrap().lookup("word7"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let writer = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for i in 0..50 {
                let config = if i % 2 == 0 { wide } else { narrow };
                engine.write().unwrap().set_config(config);
            }
        })
    };

    writer.join().unwrap();
    for reader in readers {
        for outcome in reader.join().unwrap() {
            assert!(outcome == expected_narrow || outcome == expected_wide);
        }
    }
}
