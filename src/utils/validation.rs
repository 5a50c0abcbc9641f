//! Centralized validation and helper functions.

/// Maximum number of words accepted from a single input (DOS protection)
pub const MAX_WORDS: usize = 100_000;

/// Largest grid side accepted from the command line
pub const MAX_GRID_SIZE: usize = 1_000;

/// Security validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Grid size must be at least 1")]
    GridSizeZero,
    #[error("Grid size {0} exceeds maximum of {MAX_GRID_SIZE}")]
    GridSizeTooLarge(usize),
    #[error("Too many words: {0} exceeds maximum of {MAX_WORDS}")]
    TooManyWords(usize),
}

/// Trim a raw word entry, returning `None` if nothing is left.
///
/// # Examples
///
/// ```
/// use grid_word_finder::utils::validation::normalize_word;
///
/// assert_eq!(normalize_word("  CHILL "), Some("CHILL".to_string()));
/// assert_eq!(normalize_word("   "), None);
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_string())
    }
}

/// Validate a total word count against [`MAX_WORDS`].
///
/// Pass the count the caller would hold AFTER accepting its words, whether
/// that is one more word from a file or several inputs merged together.
///
/// # Errors
///
/// Returns `ValidationError::TooManyWords` if `count` exceeds the limit.
pub fn validate_word_count(count: usize) -> Result<usize, ValidationError> {
    if count > MAX_WORDS {
        Err(ValidationError::TooManyWords(count))
    } else {
        Ok(count)
    }
}

/// Validate a grid side length given on the command line
///
/// # Errors
///
/// Returns `ValidationError::GridSizeZero` for 0, or
/// `ValidationError::GridSizeTooLarge` above [`MAX_GRID_SIZE`].
pub fn validate_grid_size(size: usize) -> Result<usize, ValidationError> {
    match size {
        0 => Err(ValidationError::GridSizeZero),
        n if n > MAX_GRID_SIZE => Err(ValidationError::GridSizeTooLarge(n)),
        n => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_word_count() {
        assert_eq!(validate_word_count(0), Ok(0));
        assert_eq!(validate_word_count(MAX_WORDS), Ok(MAX_WORDS));
        assert_eq!(
            validate_word_count(MAX_WORDS + 1),
            Err(ValidationError::TooManyWords(MAX_WORDS + 1))
        );
    }

    #[test]
    fn test_too_many_words_message_names_limit() {
        let err = validate_word_count(MAX_WORDS + 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Too many words: {} exceeds maximum of {MAX_WORDS}", MAX_WORDS + 1)
        );
    }

    #[test]
    fn test_validate_grid_size() {
        assert_eq!(validate_grid_size(5), Ok(5));
        assert_eq!(validate_grid_size(0), Err(ValidationError::GridSizeZero));
        assert_eq!(
            validate_grid_size(MAX_GRID_SIZE + 1),
            Err(ValidationError::GridSizeTooLarge(MAX_GRID_SIZE + 1))
        );
    }

    #[test]
    fn test_normalize_word_keeps_inner_spaces() {
        assert_eq!(normalize_word(" ICE AGE "), Some("ICE AGE".to_string()));
    }
}
