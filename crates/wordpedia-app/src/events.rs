use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use wordpedia_core::LookupError;
use wordpedia_types::{AppEvent, LookupStage};

use crate::backend::BackendFactory;
use crate::lookup_context::LookupContext;
use crate::state::AppState;

pub mod credential;
pub mod lookup;

use credential::handle_credential;
use lookup::handle_lookup;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    factory: Arc<dyn BackendFactory>,
) -> anyhow::Result<()> {
    // Session-scoped; replaced only by a successful validation
    let mut context: Option<LookupContext> = None;

    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = match ui_to_app_rx.recv().await {
            Ok(event) => event,
            Err(_) => {
                tracing::info!("[EVENT_LOOP] UI channel closed");
                return Ok(());
            }
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        match event {
            AppEvent::CredentialSubmitted(credential) => {
                let validated =
                    handle_credential(&state, factory.as_ref(), credential, &app_to_ui_tx).await?;
                if validated.is_some() {
                    context = validated;
                }
            }
            AppEvent::Lookup(word) => match &context {
                Some(ctx) => handle_lookup(ctx, word, &app_to_ui_tx).await?,
                None => {
                    tracing::warn!("Lookup for '{}' before the API key was validated", word);
                    app_to_ui_tx
                        .send(AppEvent::LookupFailed {
                            word: word.clone(),
                            stage: LookupStage::Query,
                            message: LookupError::SessionNotValidated.to_string(),
                        })
                        .await?;
                    app_to_ui_tx.send(AppEvent::LookupFinished(word)).await?;
                }
            },
            AppEvent::Quit => {
                tracing::info!("[EVENT_LOOP] Quit requested");
                return Ok(());
            }
            other => {
                // UI-only events, ignore in backend
                tracing::debug!("Ignoring UI event in backend: {:?}", std::mem::discriminant(&other));
            }
        }
    }
}
