use std::io::Write;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use wordpedia_config::Config;
use wordpedia_types::{AppEvent, Credential, LookupStage};

use crate::io::{InputChannel, Prompt};
use crate::render;

const NO_KEY: &str = "No API key configured and no input to read one from. \
Set GEMINI_API_KEY or run interactively.\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Waiting for the backend to come up
    Starting,
    AwaitingCredential,
    Validating,
    Ready,
    /// A lookup is in flight
    Busy,
}

/// What the terminal should do after an event or a line of input
#[derive(Debug, Default)]
pub struct Reaction {
    pub output: String,
    pub send: Vec<AppEvent>,
    /// Input to request once output is written
    pub ask: Option<Prompt>,
    pub quit: bool,
}

impl Reaction {
    fn print(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    fn ask(output: impl Into<String>, prompt: Prompt) -> Self {
        Self {
            output: output.into(),
            ask: Some(prompt),
            ..Self::default()
        }
    }

    fn quit(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            send: vec![AppEvent::Quit],
            quit: true,
            ..Self::default()
        }
    }
}

/// Terminal presentation state, independent of real stdin/stdout
pub struct UiState {
    mode: Mode,
    configured_key: Option<Credential>,
    /// Word to look up once the key is accepted, for `--word`
    one_shot: Option<String>,
    exit_after_lookup: bool,
    input_open: bool,
    chart_width: usize,
    chart_height: usize,
}

impl UiState {
    pub fn new(config: &Config, one_shot: Option<String>) -> Self {
        let configured_key = Some(Credential::new(config.generator.api_key.as_str()))
            .filter(|key| !key.is_empty());

        Self {
            mode: Mode::Starting,
            configured_key,
            exit_after_lookup: one_shot.is_some(),
            one_shot,
            input_open: true,
            chart_width: config.ui.chart_width,
            chart_height: config.ui.chart_height,
        }
    }

    #[cfg(test)]
    fn mode(&self) -> Mode {
        self.mode
    }

    pub fn on_event(&mut self, event: AppEvent) -> Reaction {
        match event {
            AppEvent::BackendReady => {
                let mut output = format!("{}\n", render::BANNER);
                match self.configured_key.take() {
                    Some(key) => {
                        self.mode = Mode::Validating;
                        output.push_str("Validating the configured API key...\n");
                        Reaction {
                            output,
                            send: vec![AppEvent::CredentialSubmitted(key)],
                            ..Reaction::default()
                        }
                    }
                    None if !self.input_open => Reaction::quit(output + NO_KEY),
                    None => {
                        self.mode = Mode::AwaitingCredential;
                        Reaction::ask(output, Prompt::Credential)
                    }
                }
            }
            AppEvent::CredentialAccepted => {
                let output = "API Key validated successfully!\n\n";
                match self.one_shot.take() {
                    Some(word) => {
                        self.mode = Mode::Busy;
                        Reaction {
                            output: output.to_string(),
                            send: vec![AppEvent::Lookup(word)],
                            ..Reaction::default()
                        }
                    }
                    None => {
                        self.mode = Mode::Ready;
                        Reaction::ask(output, Prompt::Word)
                    }
                }
            }
            AppEvent::CredentialRejected(reason) => {
                let output = format!(
                    "API Key validation failed: {reason}\nInvalid API Key. Please try again.\n"
                );
                if self.exit_after_lookup || !self.input_open {
                    // Nothing left to do without a working key
                    return Reaction::quit(output);
                }
                self.mode = Mode::AwaitingCredential;
                Reaction::ask(output, Prompt::Credential)
            }
            AppEvent::LookupStarted(word) => {
                Reaction::print(format!("\n{}\n", render::render_header(&word)))
            }
            AppEvent::ShowEntry(entry) => {
                Reaction::print(format!("{}\n", render::render_entry(&entry)))
            }
            AppEvent::ShowFrequency { series, .. } => match series {
                Some(series) => Reaction::print(format!(
                    "{}\n",
                    render::render_chart(&series, self.chart_width, self.chart_height)
                )),
                None => Reaction::print(format!("{}\n", render::render_no_frequency())),
            },
            AppEvent::ShowTables { tables, .. } => {
                Reaction::print(format!("{}\n", render::render_tables(&tables)))
            }
            AppEvent::LookupFailed {
                word,
                stage,
                message,
            } => match stage {
                LookupStage::Query => Reaction::print(format!("{message}\n")),
                _ => Reaction::print(format!(
                    "Could not get the {} of '{}': {}\n",
                    stage.as_str(),
                    word,
                    message
                )),
            },
            AppEvent::LookupFinished(_) => {
                if self.exit_after_lookup || !self.input_open {
                    return Reaction::quit(String::new());
                }
                self.mode = Mode::Ready;
                Reaction::ask(String::new(), Prompt::Word)
            }
            other => {
                tracing::debug!("Ignoring backend event in UI: {:?}", other);
                Reaction::default()
            }
        }
    }

    pub fn on_input(&mut self, line: &str) -> Reaction {
        let line = line.trim();

        if line == ":q" || line == ":quit" {
            return Reaction::quit(String::new());
        }

        match self.mode {
            Mode::AwaitingCredential => {
                let credential = Credential::new(line);
                if credential.is_empty() {
                    return Reaction::ask("API key cannot be empty.\n", Prompt::Credential);
                }
                self.mode = Mode::Validating;
                Reaction {
                    output: "Validating API key...\n".to_string(),
                    send: vec![AppEvent::CredentialSubmitted(credential)],
                    ..Reaction::default()
                }
            }
            Mode::Ready => {
                if line.is_empty() {
                    return Reaction::ask(String::new(), Prompt::Word);
                }
                self.mode = Mode::Busy;
                Reaction {
                    output: "Fetching data...\n".to_string(),
                    send: vec![AppEvent::Lookup(line.to_string())],
                    ..Reaction::default()
                }
            }
            Mode::Starting | Mode::Validating | Mode::Busy => {
                // Input is only requested in the two modes above
                tracing::debug!("Ignoring input while {:?}", self.mode);
                Reaction::default()
            }
        }
    }

    /// Input closed. A one-shot lookup keeps running until it finishes.
    pub fn on_input_closed(&mut self) -> Reaction {
        self.input_open = false;

        let waiting = matches!(self.mode, Mode::Starting | Mode::Validating | Mode::Busy);
        if self.exit_after_lookup && waiting {
            return Reaction::default();
        }
        Reaction::quit(String::new())
    }
}

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    input: InputChannel,
    config: Arc<RwLock<Config>>,
    one_shot: Option<String>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut ui = {
        let config = config.read().await;
        UiState::new(&config, one_shot)
    };
    let mut input_open = true;

    loop {
        let reaction = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[UI] Cancelled");
                return Ok(());
            }
            event = app_to_ui_rx.recv() => match event {
                Ok(event) => ui.on_event(event),
                Err(_) => {
                    tracing::info!("[UI] Backend channel closed");
                    return Ok(());
                }
            },
            line = input.lines.recv(), if input_open => match line {
                Ok(line) => ui.on_input(&line),
                Err(_) => {
                    input_open = false;
                    ui.on_input_closed()
                }
            },
        };

        if !reaction.output.is_empty() {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(reaction.output.as_bytes())?;
            stdout.flush()?;
        }

        for event in reaction.send {
            ui_to_app_tx.send(event).await?;
        }

        if reaction.quit {
            tracing::info!("[UI] Quit");
            return Ok(());
        }

        // A finished reader closes `lines`, which ends up in `on_input_closed`
        if let Some(prompt) = reaction.ask.filter(|_| input_open) {
            if input.prompts.send(prompt).await.is_err() {
                tracing::debug!("Input reader is gone");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wordpedia_types::{RankedTables, WordEntry};

    use super::*;

    fn state(key: &str, one_shot: Option<&str>) -> UiState {
        let mut config = Config::default();
        config.generator.api_key = key.to_string();
        UiState::new(&config, one_shot.map(str::to_string))
    }

    #[test]
    fn asks_for_key_when_none_configured() {
        let mut ui = state("", None);
        let reaction = ui.on_event(AppEvent::BackendReady);

        assert!(reaction.output.contains("Wordpedia"));
        assert_eq!(reaction.ask, Some(Prompt::Credential));
        assert!(reaction.send.is_empty());
        assert_eq!(ui.mode(), Mode::AwaitingCredential);
    }

    #[test]
    fn configured_key_is_submitted_on_ready() {
        let mut ui = state("  env-key ", None);
        let reaction = ui.on_event(AppEvent::BackendReady);

        match reaction.send.as_slice() {
            [AppEvent::CredentialSubmitted(key)] => assert_eq!(key.expose(), "env-key"),
            other => panic!("unexpected events: {other:?}"),
        }
        assert_eq!(reaction.ask, None);
        assert_eq!(ui.mode(), Mode::Validating);
    }

    #[test]
    fn typed_key_then_word() {
        let mut ui = state("", None);
        ui.on_event(AppEvent::BackendReady);

        let empty = ui.on_input("   ");
        assert!(empty.send.is_empty());
        assert!(empty.output.contains("cannot be empty"));
        assert_eq!(empty.ask, Some(Prompt::Credential));

        let submitted = ui.on_input("typed-key");
        assert!(matches!(
            submitted.send.as_slice(),
            [AppEvent::CredentialSubmitted(_)]
        ));
        assert_eq!(submitted.ask, None);

        // Stray input while validating is not forwarded
        assert!(ui.on_input("happy").send.is_empty());

        let accepted = ui.on_event(AppEvent::CredentialAccepted);
        assert!(accepted.output.contains("API Key validated successfully!"));
        assert_eq!(accepted.ask, Some(Prompt::Word));
        assert_eq!(ui.mode(), Mode::Ready);

        let lookup = ui.on_input(" happy ");
        assert!(matches!(lookup.send.as_slice(), [AppEvent::Lookup(w)] if w == "happy"));
        assert_eq!(ui.mode(), Mode::Busy);

        let finished = ui.on_event(AppEvent::LookupFinished("happy".to_string()));
        assert!(!finished.quit);
        assert_eq!(finished.ask, Some(Prompt::Word));
        assert_eq!(ui.mode(), Mode::Ready);
    }

    #[test]
    fn rejected_key_asks_again() {
        let mut ui = state("", None);
        ui.on_event(AppEvent::BackendReady);
        ui.on_input("bad-key");

        let reaction = ui.on_event(AppEvent::CredentialRejected("authentication failed".to_string()));
        assert!(reaction.output.contains("API Key validation failed: authentication failed"));
        assert!(reaction.output.contains("Invalid API Key. Please try again."));
        assert!(!reaction.quit);
        assert_eq!(reaction.ask, Some(Prompt::Credential));
        assert_eq!(ui.mode(), Mode::AwaitingCredential);
    }

    #[test]
    fn one_shot_looks_up_and_quits() {
        let mut ui = state("key", Some("happy"));
        ui.on_event(AppEvent::BackendReady);

        // stdin may already be closed while the lookup runs
        assert!(!ui.on_input_closed().quit);

        let accepted = ui.on_event(AppEvent::CredentialAccepted);
        assert!(matches!(accepted.send.as_slice(), [AppEvent::Lookup(w)] if w == "happy"));
        assert_eq!(accepted.ask, None);

        let finished = ui.on_event(AppEvent::LookupFinished("happy".to_string()));
        assert!(finished.quit);
        assert!(matches!(finished.send.as_slice(), [AppEvent::Quit]));
    }

    #[test]
    fn one_shot_without_key_or_input_quits() {
        let mut ui = state("", Some("happy"));

        // EOF can arrive before the backend is up
        assert!(!ui.on_input_closed().quit);

        let ready = ui.on_event(AppEvent::BackendReady);
        assert!(ready.quit);
        assert!(ready.output.contains("No API key configured"));
        assert!(matches!(ready.send.as_slice(), [AppEvent::Quit]));
        assert_eq!(ready.ask, None);
    }

    #[test]
    fn closed_input_while_awaiting_key_quits() {
        let mut ui = state("", Some("happy"));
        ui.on_event(AppEvent::BackendReady);
        assert_eq!(ui.mode(), Mode::AwaitingCredential);

        assert!(ui.on_input_closed().quit);
    }

    #[test]
    fn one_shot_with_rejected_key_quits() {
        let mut ui = state("key", Some("happy"));
        ui.on_event(AppEvent::BackendReady);

        let reaction = ui.on_event(AppEvent::CredentialRejected("nope".to_string()));
        assert!(reaction.quit);
        assert!(reaction.output.contains("Invalid API Key"));
    }

    #[test]
    fn quit_commands_and_eof() {
        let mut ui = state("", None);
        ui.on_event(AppEvent::BackendReady);
        assert!(ui.on_input(":q").quit);
        assert!(ui.on_input(":quit").quit);
        assert!(ui.on_input_closed().quit);
    }

    #[test]
    fn header_comes_with_lookup_start() {
        let mut ui = state("", None);

        let started = ui.on_event(AppEvent::LookupStarted("happy".to_string()));
        assert!(started.output.contains("Wordpedia of happy"));

        // A failed definition still follows the header
        let failed = ui.on_event(AppEvent::LookupFailed {
            word: "happy".to_string(),
            stage: LookupStage::Definition,
            message: "rate limit exceeded".to_string(),
        });
        assert_eq!(
            failed.output,
            "Could not get the definition of 'happy': rate limit exceeded\n"
        );
    }

    #[test]
    fn results_are_rendered() {
        let mut ui = state("", None);

        let entry = ui.on_event(AppEvent::ShowEntry(WordEntry {
            word: "happy".to_string(),
            text: "Feeling pleasure.".to_string(),
        }));
        assert!(entry.output.contains("Feeling pleasure."));
        assert!(!entry.output.contains("Wordpedia of"));

        let freq = ui.on_event(AppEvent::ShowFrequency {
            word: "happy".to_string(),
            series: None,
        });
        assert!(freq.output.contains("No Ngram data found"));

        let tables = ui.on_event(AppEvent::ShowTables {
            word: "happy".to_string(),
            tables: RankedTables::default(),
        });
        assert!(tables.output.contains("Synonyms"));
    }
}
