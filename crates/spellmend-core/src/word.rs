// Character-indexed words
//
// Edit distance works on character positions, not byte offsets, so a word
// is stored as a `Vec<char>`. No normalization is applied: case and code
// points are compared literally.

use std::fmt;

/// A word as an ordered sequence of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Word {
    chars: Vec<char>,
}

impl Word {
    /// Create a word from its characters.
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }

    /// The characters of the word.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
        }
    }
}

impl From<String> for Word {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&[char]> for Word {
    fn from(chars: &[char]) -> Self {
        Self {
            chars: chars.to_vec(),
        }
    }
}

impl AsRef<[char]> for Word {
    fn as_ref(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
