/*!
simple_usage.rs

Example demonstrating:
- compile-time dictionary embedding using the `include_dictionary!` proc-macro
  (returns a ready `SuggestionEngine`)
- runtime construction of a `SuggestionEngine` from any word collection

Run with:
    cargo run --example simple_usage

The `include_dictionary!` path is relative to the crate root (evaluated using
`CARGO_MANIFEST_DIR`). This example uses `tests/data/words.txt`, which the
tests also use.
*/

use autocorrectrs::{include_dictionary, Config, Outcome, SuggestionEngine};

fn print_outcome(typed: &str, outcome: &Outcome) {
    match outcome {
        Outcome::ValidWord => println!("  {typed:<8} -> valid dictionary word"),
        Outcome::Suggestions(words) if words.is_empty() => {
            println!("  {typed:<8} -> no suggestions")
        }
        Outcome::Suggestions(words) => println!("  {typed:<8} -> {}", words.join(", ")),
    }
}

fn example_compile_time() {
    let engine = include_dictionary!(
        "tests/data/words.txt",
        max_edit_distance = 1,
        response_limit = 5
    );

    println!("=== Compile-time built engine ({} words) ===", engine.len());
    for typed in ["world", "helo", "appl", "zzzz"] {
        print_outcome(typed, &engine.lookup(typed));
    }
}

fn example_runtime_build() {
    println!("\n=== Runtime-built engine ===");

    let words = ["cat", "cats", "bat", "cut", "orange", "borage", "range"];
    let config = match Config::new(2, 3, true) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return;
        }
    };
    let mut engine = SuggestionEngine::new(words, config);

    print_outcome("cot", &engine.lookup("cot"));
    print_outcome("borange", &engine.lookup("borange"));

    // Distances are available for diagnostics
    let snapshot = engine.config();
    for s in engine.rank("cot", &snapshot) {
        println!("    {:<8} distance {}", s.word, s.distance);
    }

    // Invalid settings are rejected and leave the engine unchanged
    if let Err(e) = engine.set_response_limit(0) {
        println!("  rejected: {e} (limit stays {})", engine.response_limit());
    }
}

fn main() {
    println!("autocorrectrs example: compile-time macro and runtime builder\n");

    example_compile_time();
    example_runtime_build();

    println!("\nDone.");
}
