//! Case-insensitive word counting over a text file

use std::path::Path;

use crate::domain::WordCount;
use crate::error::{Result, fs, validation_failed};

/// Count `word` in `content`, ignoring case.
///
/// This is a plain substring count: matches inside longer words count, and
/// matches never overlap (scanning resumes after each hit).
pub fn count_occurrences(content: &str, word: &str) -> usize {
    let needle = word.to_lowercase();
    if needle.is_empty() {
        return 0;
    }
    content.to_lowercase().matches(needle.as_str()).count()
}

/// Read the file at `path` and count `word` in it
pub fn count_word(path: &Path, word: &str) -> Result<WordCount> {
    if word.is_empty() {
        return Err(validation_failed("Word to count cannot be empty"));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;

    Ok(WordCount {
        word: word.to_string(),
        count: count_occurrences(&content, word),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_count_is_case_insensitive() {
        assert_eq!(count_occurrences("ROMEO loves romeo", "Romeo"), 2);
    }

    #[test]
    fn test_count_includes_partial_matches() {
        assert_eq!(count_occurrences("Romeos and romeo's", "romeo"), 2);
        assert_eq!(count_occurrences("the theatre, then", "the"), 3);
    }

    #[test]
    fn test_count_matches_do_not_overlap() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
    }

    #[test]
    fn test_count_no_match() {
        assert_eq!(count_occurrences("Juliet", "Romeo"), 0);
        assert_eq!(count_occurrences("", "Romeo"), 0);
    }

    #[test]
    fn test_count_word_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("romeo.txt");
        std::fs::write(&path, "O Romeo, Romeo! wherefore art thou ROMEO?").unwrap();

        let result = count_word(&path, "Romeo").unwrap();
        assert_eq!(result.word, "Romeo");
        assert_eq!(result.count, 3);
    }

    #[test]
    fn test_count_word_missing_file_is_error_not_zero() {
        let temp = TempDir::new().unwrap();
        let err = count_word(&temp.path().join("missing.txt"), "Romeo").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_count_word_rejects_empty_word() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("romeo.txt");
        std::fs::write(&path, "Romeo").unwrap();

        let err = count_word(&path, "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
