use kanal::AsyncSender;
use wordpedia_core::QueryWord;
use wordpedia_types::{AppEvent, LookupStage};

use crate::lookup_context::LookupContext;

/// Every part of one lookup, in display order.
/// A failing part is reported and the remaining parts still run.
pub async fn handle_lookup(
    ctx: &LookupContext,
    raw: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = match QueryWord::parse(&raw) {
        Ok(word) => word,
        Err(e) => {
            app_to_ui_tx
                .send(failed(&raw, LookupStage::Query, e.to_string()))
                .await?;
            app_to_ui_tx.send(AppEvent::LookupFinished(raw)).await?;
            return Ok(());
        }
    };
    let name = word.to_string();
    tracing::info!("Looking up '{}'", name);
    app_to_ui_tx
        .send(AppEvent::LookupStarted(name.clone()))
        .await?;

    match ctx.lookup.describe(&word).await {
        Ok(entry) => app_to_ui_tx.send(AppEvent::ShowEntry(entry)).await?,
        Err(e) => {
            tracing::warn!("Definition failed: {}", e);
            app_to_ui_tx
                .send(failed(&name, LookupStage::Definition, e.to_string()))
                .await?
        }
    }

    if let Some(source) = &ctx.frequency {
        match source.lookup(word.as_str()).await {
            Ok(series) => {
                if series.is_none() {
                    tracing::debug!("No usage data for '{}'", name);
                }
                app_to_ui_tx
                    .send(AppEvent::ShowFrequency {
                        word: name.clone(),
                        series,
                    })
                    .await?
            }
            Err(e) => {
                tracing::warn!("Usage lookup failed: {:#}", e);
                app_to_ui_tx
                    .send(failed(&name, LookupStage::Frequency, format!("{e:#}")))
                    .await?
            }
        }
    }

    match ctx.lookup.rank(&word).await {
        Ok(tables) => {
            app_to_ui_tx
                .send(AppEvent::ShowTables {
                    word: name.clone(),
                    tables,
                })
                .await?
        }
        Err(e) => {
            tracing::warn!("Ranking failed: {}", e);
            app_to_ui_tx
                .send(failed(&name, LookupStage::Ranking, e.to_string()))
                .await?
        }
    }

    app_to_ui_tx.send(AppEvent::LookupFinished(name)).await?;
    Ok(())
}

fn failed(word: &str, stage: LookupStage, message: String) -> AppEvent {
    AppEvent::LookupFailed {
        word: word.to_string(),
        stage,
        message,
    }
}
