use wordpedia_provider::LexicalGenerator;
use wordpedia_types::Credential;

use crate::error::LookupError;
use crate::prompt::VALIDATION_PROMPT;

/// Credential and its validation state for one running session.
///
/// Created by the caller when the session starts and dropped when it
/// ends; nothing is persisted.
#[derive(Debug)]
pub struct Session {
    credential: Credential,
    validated: bool,
}

impl Session {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            validated: false,
        }
    }

    pub fn is_validated(&self) -> bool {
        self.validated
    }

    /// Issue a trivial generation call with the credential
    pub async fn validate(&mut self, generator: &dyn LexicalGenerator) -> Result<(), LookupError> {
        self.validated = false;

        if self.credential.is_empty() {
            return Err(LookupError::CredentialInvalid("API key is empty".to_string()));
        }

        generator
            .generate(VALIDATION_PROMPT)
            .await
            .map_err(|e| LookupError::CredentialInvalid(e.to_string()))?;

        let metadata = generator.metadata();
        tracing::info!("API key validated with {} ({})", metadata.name, metadata.model);
        self.validated = true;
        Ok(())
    }

    pub fn ensure_validated(&self) -> Result<(), LookupError> {
        if self.validated {
            Ok(())
        } else {
            Err(LookupError::SessionNotValidated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubGenerator;

    #[tokio::test]
    async fn validates_with_working_generator() {
        let generator = StubGenerator::new("{}");
        let mut session = Session::new(Credential::new("key"));

        assert!(matches!(
            session.ensure_validated(),
            Err(LookupError::SessionNotValidated)
        ));

        session.validate(&generator).await.unwrap();
        assert!(session.is_validated());
        assert!(session.ensure_validated().is_ok());
        assert_eq!(generator.prompts(), vec![VALIDATION_PROMPT.to_string()]);
    }

    #[tokio::test]
    async fn failed_validation_blocks_session() {
        let generator = StubGenerator::failing();
        let mut session = Session::new(Credential::new("key"));

        let err = session.validate(&generator).await.unwrap_err();
        assert!(matches!(err, LookupError::CredentialInvalid(_)));
        assert!(!session.is_validated());
    }

    #[tokio::test]
    async fn empty_key_is_rejected_without_a_call() {
        let generator = StubGenerator::new("{}");
        let mut session = Session::new(Credential::new("   "));

        let err = session.validate(&generator).await.unwrap_err();
        assert!(matches!(err, LookupError::CredentialInvalid(_)));
        assert!(generator.prompts().is_empty());
    }
}
