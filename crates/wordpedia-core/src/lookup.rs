use std::sync::Arc;

use wordpedia_config::pipeline::PipelineConfig;
use wordpedia_provider::{EmbeddingProvider, LexicalGenerator};
use wordpedia_types::{RankedTables, WordEntry};

use crate::error::LookupError;
use crate::pipeline::RankingPipeline;
use crate::prompt::definition_prompt;
use crate::query::QueryWord;
use crate::session::Session;

/// Definition and ranking lookups gated on a validated session
pub struct WordLookup {
    session: Session,
    generator: Arc<dyn LexicalGenerator>,
    pipeline: RankingPipeline,
}

impl WordLookup {
    pub fn new(
        session: Session,
        generator: Arc<dyn LexicalGenerator>,
        embedder: Arc<dyn EmbeddingProvider>,
        config: PipelineConfig,
    ) -> Self {
        let pipeline = RankingPipeline::new(generator.clone(), embedder, config);
        Self {
            session,
            generator,
            pipeline,
        }
    }

    /// Build and validate the session's credential in one step
    pub async fn connect(
        mut session: Session,
        generator: Arc<dyn LexicalGenerator>,
        embedder: Arc<dyn EmbeddingProvider>,
        config: PipelineConfig,
    ) -> Result<Self, LookupError> {
        session.validate(generator.as_ref()).await?;
        Ok(Self::new(session, generator, embedder, config))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Definition and origin prose, returned verbatim
    pub async fn describe(&self, word: &QueryWord) -> Result<WordEntry, LookupError> {
        self.session.ensure_validated()?;

        let text = self
            .generator
            .generate(&definition_prompt(word.as_str()))
            .await
            .map_err(LookupError::Generation)?;

        Ok(WordEntry {
            word: word.to_string(),
            text,
        })
    }

    pub async fn rank(&self, word: &QueryWord) -> Result<RankedTables, LookupError> {
        self.session.ensure_validated()?;
        self.pipeline.rank(word).await
    }
}
