use serde::Deserialize;

use crate::error::LookupError;

/// Synonym and antonym candidates as returned by the generator.
///
/// Order is kept, duplicates are not removed and counts are not checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateList {
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl CandidateList {
    pub fn len(&self) -> usize {
        self.synonyms.len() + self.antonyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty() && self.antonyms.is_empty()
    }
}

// Absent and null fields both decode to an empty list
#[derive(Deserialize)]
struct CandidateJson {
    #[serde(default)]
    synonyms: Option<Vec<String>>,
    #[serde(default)]
    antonyms: Option<Vec<String>>,
}

/// Remove a surrounding markdown code fence, with or without an info string
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };

    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Decode the generator's candidate response
pub fn decode_candidates(raw: &str) -> Result<CandidateList, LookupError> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Err(LookupError::MalformedLexicalResponse(
            "empty response".to_string(),
        ));
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| LookupError::MalformedLexicalResponse(e.to_string()))?;

    // Structs also deserialize from arrays, only objects are accepted here
    if !value.is_object() {
        return Err(LookupError::MalformedLexicalResponse(
            "expected a JSON object".to_string(),
        ));
    }

    let parsed: CandidateJson = serde_json::from_value(value)
        .map_err(|e| LookupError::MalformedLexicalResponse(e.to_string()))?;

    Ok(CandidateList {
        synonyms: parsed.synonyms.unwrap_or_default(),
        antonyms: parsed.antonyms.unwrap_or_default(),
    })
}
