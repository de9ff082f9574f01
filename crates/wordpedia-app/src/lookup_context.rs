use std::sync::Arc;

use wordpedia_core::WordLookup;
use wordpedia_ngram::UsageFrequency;

/// Everything a lookup needs once the session is validated
pub struct LookupContext {
    pub lookup: WordLookup,
    pub frequency: Option<Arc<dyn UsageFrequency>>,
}

impl LookupContext {
    pub fn new(lookup: WordLookup, frequency: Option<Arc<dyn UsageFrequency>>) -> Self {
        Self { lookup, frequency }
    }
}
