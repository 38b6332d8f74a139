// Error taxonomy
//
// Every failure here is a caller error: the distance computation itself is
// total and deterministic, so nothing is retried or recovered.

use std::path::PathBuf;

/// Errors raised by the selector, the corrector and the I/O glue.
#[derive(Debug, thiserror::Error)]
pub enum SpellmendError {
    /// A best-match search was asked to scan zero candidates.
    #[error("dictionary is empty")]
    EmptyDictionary,

    /// Input that cannot be read as a sequence of characters.
    #[error("invalid input in {source_name} (line {line}): {reason}")]
    InvalidInput {
        source_name: String,
        line: usize,
        reason: String,
    },

    /// A word list or output file could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A cost profile could not be parsed.
    #[error("invalid cost profile: {0}")]
    InvalidCostProfile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(SpellmendError::EmptyDictionary.to_string(), "dictionary is empty");

        let err = SpellmendError::InvalidInput {
            source_name: "words.txt".to_string(),
            line: 3,
            reason: "invalid UTF-8".to_string(),
        };
        assert_eq!(err.to_string(), "invalid input in words.txt (line 3): invalid UTF-8");
    }

    #[test]
    fn io_error_includes_path() {
        let err = SpellmendError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "missing.txt: not found");
    }
}
