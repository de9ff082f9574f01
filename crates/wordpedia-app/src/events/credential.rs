use kanal::AsyncSender;
use wordpedia_core::{LookupError, Session, WordLookup};
use wordpedia_types::{AppEvent, Credential};

use crate::backend::BackendFactory;
use crate::lookup_context::LookupContext;
use crate::state::AppState;

/// Validate a submitted key; `Some` only when the session is usable
pub async fn handle_credential(
    state: &AppState,
    factory: &dyn BackendFactory,
    credential: Credential,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<Option<LookupContext>> {
    let config = state.config.read().await.clone();

    let backend = match factory.build(&credential, &config) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!("Failed to set up providers: {:#}", e);
            app_to_ui_tx
                .send(AppEvent::CredentialRejected(format!("{e:#}")))
                .await?;
            return Ok(None);
        }
    };

    let connected = WordLookup::connect(
        Session::new(credential),
        backend.generator,
        backend.embedder,
        config.pipeline.clone(),
    )
    .await;

    match connected {
        Ok(lookup) => {
            app_to_ui_tx.send(AppEvent::CredentialAccepted).await?;
            Ok(Some(LookupContext::new(lookup, backend.frequency)))
        }
        Err(e) => {
            tracing::warn!("{}", e);
            let reason = match e {
                LookupError::CredentialInvalid(reason) => reason,
                other => other.to_string(),
            };
            app_to_ui_tx
                .send(AppEvent::CredentialRejected(reason))
                .await?;
            Ok(None)
        }
    }
}
