use std::path::Path;

use crate::core::word_list::WordList;
use crate::parsing::grid_text::{read_input, ParseError};
use crate::utils::validation::{normalize_word, validate_word_count};

/// Parse a word file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::Validation` if the word limit is exceeded.
pub fn parse_word_file(path: &Path) -> Result<WordList, ParseError> {
    let content = read_input(path)?;
    parse_word_text(&content)
}

/// Parse words separated by newlines and/or commas.
///
/// Lines starting with `#` are comments. Entries are trimmed; blank ones are
/// skipped and repeats collapse as described on [`WordList`].
///
/// # Errors
///
/// Returns `ParseError::Validation` if the word limit is exceeded.
pub fn parse_word_text(text: &str) -> Result<WordList, ParseError> {
    let mut words = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        for entry in line.split(',') {
            let Some(word) = normalize_word(entry) else {
                continue;
            };

            // Check word limit for DOS protection
            validate_word_count(words.len() + 1)?;

            words.push(word);
        }
    }

    Ok(WordList::new(words))
}

/// Build a word list from command-line values, which may themselves be comma-separated
///
/// # Errors
///
/// Returns `ParseError::Validation` if the word limit is exceeded.
pub fn parse_word_args(values: &[String]) -> Result<WordList, ParseError> {
    parse_word_text(&values.join("\n"))
}
