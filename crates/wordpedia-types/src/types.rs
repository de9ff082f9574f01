use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// API key typed by the user or taken from config
    CredentialSubmitted(Credential),
    CredentialAccepted,
    CredentialRejected(String),
    /// Raw word as typed, normalized by the backend
    Lookup(String),
    /// Normalized word, sent before any part of the lookup runs
    LookupStarted(String),
    ShowEntry(WordEntry),
    ShowFrequency {
        word: String,
        series: Option<FrequencySeries>,
    },
    ShowTables {
        word: String,
        tables: RankedTables,
    },
    LookupFailed {
        word: String,
        stage: LookupStage,
        message: String,
    },
    LookupFinished(String),
    BackendReady,
    Quit,
}

/// Which part of a lookup an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStage {
    Query,
    Definition,
    Frequency,
    Ranking,
}

impl LookupStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStage::Query => "query",
            LookupStage::Definition => "definition",
            LookupStage::Frequency => "usage frequency",
            LookupStage::Ranking => "synonyms and antonyms",
        }
    }
}

/// API key for the generative language service.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Free-text definition and origin of a word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub word: String,
    pub similarity: f64,
}

impl ScoredEntry {
    pub fn new(word: impl Into<String>, similarity: f64) -> Self {
        Self {
            word: word.into(),
            similarity,
        }
    }
}

/// Scored entries ordered by similarity, highest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedTable {
    pub entries: Vec<ScoredEntry>,
}

impl RankedTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredEntry> {
        self.entries.iter()
    }

    pub fn words(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.word.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedTables {
    pub synonyms: RankedTable,
    pub antonyms: RankedTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyPoint {
    pub year: u16,
    pub frequency: f64,
}

/// Yearly relative frequency of a word in the n-gram corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencySeries {
    pub word: String,
    pub points: Vec<FrequencyPoint>,
}

impl FrequencySeries {
    pub fn first_year(&self) -> Option<u16> {
        self.points.first().map(|p| p.year)
    }

    pub fn last_year(&self) -> Option<u16> {
        self.points.last().map(|p| p.year)
    }

    /// Point with the highest frequency, earliest year wins ties
    pub fn peak(&self) -> Option<FrequencyPoint> {
        self.points.iter().copied().fold(None, |best, p| match best {
            Some(b) if b.frequency >= p.frequency => Some(b),
            _ => Some(p),
        })
    }
}
