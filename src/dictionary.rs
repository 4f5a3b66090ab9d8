//! Word list loading.
//!
//! Two line-based formats are understood:
//!
//! - counted: the first line holds the number of words `n`, followed by `n`
//!   words, one per line
//! - plain: one word per line
//!
//! In both formats blank lines and `#` comments are skipped; they do not count
//! toward `n`.
//!
//! [`parse`] picks the format from the first meaningful line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary: {0}")]
    Io(#[from] io::Error),

    #[error("dictionary is missing its word count line")]
    MissingCount,

    #[error("invalid word count {0:?}")]
    InvalidCount(String),

    #[error("dictionary declares {expected} words but only {found} were present")]
    Truncated { expected: usize, found: usize },
}

/// Parse a counted word list.
pub fn parse_counted<R: BufRead>(reader: R) -> Result<Vec<String>, DictionaryError> {
    let mut lines = reader.lines();

    let count_line = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                let trimmed = line.trim();
                if !trimmed.is_empty() && !trimmed.starts_with('#') {
                    break line;
                }
            }
            None => return Err(DictionaryError::MissingCount),
        }
    };
    let expected = parse_count(&count_line)?;

    let mut words = Vec::with_capacity(expected.min(1 << 20));
    for line in lines {
        if words.len() == expected {
            break;
        }
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        words.push(trimmed.to_string());
    }
    if words.len() < expected {
        return Err(DictionaryError::Truncated {
            expected,
            found: words.len(),
        });
    }
    Ok(words)
}

/// Parse a plain word list.
pub fn parse_plain<R: BufRead>(reader: R) -> Result<Vec<String>, DictionaryError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        words.push(trimmed.to_string());
    }
    Ok(words)
}

/// Parse either format. A first meaningful line made only of ASCII digits
/// selects the counted format.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<String>, DictionaryError> {
    let text = io::read_to_string(reader)?;
    let first = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'));

    let words = match first {
        Some(line) if line.bytes().all(|b| b.is_ascii_digit()) => {
            parse_counted(text.as_bytes())?
        }
        _ => parse_plain(text.as_bytes())?,
    };
    debug!("parsed dictionary with {} words", words.len());
    Ok(words)
}

/// Open `path` and [`parse`] it.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let words = parse(BufReader::new(file))?;
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

fn parse_count(line: &str) -> Result<usize, DictionaryError> {
    let trimmed = line.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| DictionaryError::InvalidCount(trimmed.to_string()))
}
