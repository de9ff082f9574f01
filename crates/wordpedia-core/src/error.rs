use wordpedia_provider::ProviderError;

use crate::similarity::SimilarityError;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("API key validation failed: {0}")]
    CredentialInvalid(String),

    #[error("API key has not been validated")]
    SessionNotValidated,

    #[error("Query word is empty")]
    EmptyQuery,

    #[error("Could not read synonyms and antonyms from the generator: {0}")]
    MalformedLexicalResponse(String),

    #[error("Generation failed: {0}")]
    Generation(#[source] ProviderError),

    #[error("Embedding for '{word}' failed: {source}")]
    Embedding {
        word: String,
        #[source]
        source: ProviderError,
    },

    #[error("Scoring '{word}' failed: {source}")]
    Similarity {
        word: String,
        #[source]
        source: SimilarityError,
    },
}
