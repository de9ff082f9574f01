use std::sync::Arc;

use futures_util::stream::{self, StreamExt, TryStreamExt};
use wordpedia_config::EmbeddingFailurePolicy;
use wordpedia_config::pipeline::PipelineConfig;
use wordpedia_provider::{EmbeddingProvider, LexicalGenerator};
use wordpedia_types::{RankedTable, RankedTables, ScoredEntry};

use crate::error::LookupError;
use crate::lexical::{CandidateList, decode_candidates};
use crate::prompt::candidate_prompt;
use crate::query::QueryWord;
use crate::similarity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Synonym,
    Antonym,
}

/// Ranks generated synonyms and antonyms by similarity to the query word
pub struct RankingPipeline {
    generator: Arc<dyn LexicalGenerator>,
    embedder: Arc<dyn EmbeddingProvider>,
    config: PipelineConfig,
}

impl RankingPipeline {
    pub fn new(
        generator: Arc<dyn LexicalGenerator>,
        embedder: Arc<dyn EmbeddingProvider>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            generator,
            embedder,
            config,
        }
    }

    pub async fn rank(&self, word: &QueryWord) -> Result<RankedTables, LookupError> {
        let candidates = self.candidates(word).await?;

        let query_vector = self
            .embedder
            .embed(word.as_str())
            .await
            .map_err(|source| LookupError::Embedding {
                word: word.to_string(),
                source,
            })?;

        let scored = self.score_all(&query_vector, candidates).await?;

        let mut synonyms = Vec::new();
        let mut antonyms = Vec::new();
        for (side, entry) in scored {
            match side {
                Side::Synonym => synonyms.push(entry),
                Side::Antonym => antonyms.push(entry),
            }
        }

        tracing::debug!(
            "Ranked {} synonyms and {} antonyms for '{}' with {}",
            synonyms.len(),
            antonyms.len(),
            word,
            self.embedder.metadata().model
        );

        Ok(RankedTables {
            synonyms: rank_entries(synonyms),
            antonyms: rank_entries(antonyms),
        })
    }

    /// Ask the generator for candidates and decode them
    pub async fn candidates(&self, word: &QueryWord) -> Result<CandidateList, LookupError> {
        let prompt = candidate_prompt(word.as_str(), self.config.candidate_count);
        let raw = self
            .generator
            .generate(&prompt)
            .await
            .map_err(LookupError::Generation)?;

        let candidates = decode_candidates(&raw)?;

        let wanted = self.config.candidate_count;
        if candidates.synonyms.len() != wanted || candidates.antonyms.len() != wanted {
            tracing::debug!(
                "Asked for {wanted} candidates each, got {} synonyms and {} antonyms",
                candidates.synonyms.len(),
                candidates.antonyms.len()
            );
        }

        Ok(candidates)
    }

    /// Embed and score every candidate, at most `embedding_concurrency`
    /// requests in flight. Results keep candidate order.
    async fn score_all(
        &self,
        query_vector: &[f32],
        candidates: CandidateList,
    ) -> Result<Vec<(Side, ScoredEntry)>, LookupError> {
        let jobs = candidates
            .synonyms
            .into_iter()
            .map(|w| (Side::Synonym, w))
            .chain(candidates.antonyms.into_iter().map(|w| (Side::Antonym, w)));

        let policy = self.config.failure_policy;
        let scored: Vec<Option<(Side, ScoredEntry)>> = stream::iter(jobs)
            .map(move |(side, word)| async move {
                match self.score_candidate(query_vector, word).await {
                    Ok(entry) => Ok(Some((side, entry))),
                    Err(e) if policy == EmbeddingFailurePolicy::Lenient => {
                        tracing::warn!("Skipping candidate: {e}");
                        Ok(None)
                    }
                    Err(e) => Err(e),
                }
            })
            .buffered(self.config.embedding_concurrency.max(1))
            .try_collect()
            .await?;

        Ok(scored.into_iter().flatten().collect())
    }

    async fn score_candidate(
        &self,
        query_vector: &[f32],
        word: String,
    ) -> Result<ScoredEntry, LookupError> {
        let vector = match self.embedder.embed(&word).await {
            Ok(vector) => vector,
            Err(source) => return Err(LookupError::Embedding { word, source }),
        };

        match similarity::score(query_vector, &vector) {
            Ok(score) => Ok(ScoredEntry::new(word, score)),
            Err(source) => Err(LookupError::Similarity { word, source }),
        }
    }
}

/// Sort by similarity, highest first. Stable, so ties keep their order.
fn rank_entries(mut entries: Vec<ScoredEntry>) -> RankedTable {
    entries.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    RankedTable { entries }
}
