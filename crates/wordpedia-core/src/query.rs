use std::fmt;

use crate::error::LookupError;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// A normalized, non-empty word to look up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWord(String);

impl QueryWord {
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        Self::parse_with(&DefaultPreprocessor, raw)
    }

    pub fn parse_with(preprocessor: &impl Preprocessor, raw: &str) -> Result<Self, LookupError> {
        let word = preprocessor.process(raw);
        if word.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        Ok(Self(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QueryWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_input() {
        assert!(matches!(QueryWord::parse("   "), Err(LookupError::EmptyQuery)));
        assert!(matches!(QueryWord::parse(""), Err(LookupError::EmptyQuery)));
    }

    #[test]
    fn keeps_case_and_normalizes() {
        let word = QueryWord::parse("  Serendipity\n").unwrap();
        assert_eq!(word.as_str(), "Serendipity");
        assert_eq!(word.to_string(), "Serendipity");
    }
}
