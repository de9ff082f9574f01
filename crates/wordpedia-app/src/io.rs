use std::io::{BufRead, BufReader, Lines, Write};

use inquire::PasswordDisplayMode;
use kanal::{AsyncReceiver, AsyncSender};

/// What the terminal is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Credential,
    Word,
}

impl Prompt {
    pub fn text(self) -> &'static str {
        match self {
            Prompt::Credential => "Enter your Google Generative AI API Key:",
            Prompt::Word => "Insert a word to search:",
        }
    }
}

/// Prompts go in, answers come out. `lines` closes on EOF.
pub struct InputChannel {
    pub prompts: AsyncSender<Prompt>,
    pub lines: AsyncReceiver<String>,
}

/// Answer prompts from stdin on a dedicated thread.
///
/// On a terminal the API key is read masked; piped input is read line by line.
pub fn spawn_stdin_reader() -> anyhow::Result<InputChannel> {
    let masked = atty::is(atty::Stream::Stdin);
    spawn_prompt_reader(BufReader::new(std::io::stdin()), std::io::stdout(), masked)
}

/// Nothing is read until a prompt is requested
pub fn spawn_prompt_reader<R, W>(reader: R, mut out: W, masked: bool) -> anyhow::Result<InputChannel>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    let (prompt_tx, prompt_rx) = kanal::unbounded::<Prompt>();
    let (line_tx, line_rx) = kanal::unbounded::<String>();

    std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let mut lines = reader.lines();

            while let Ok(prompt) = prompt_rx.recv() {
                let answer = if masked && prompt == Prompt::Credential {
                    read_secret(prompt)
                } else {
                    read_line(prompt, &mut out, &mut lines)
                };

                let Some(line) = answer else {
                    break;
                };
                if line_tx.send(line).is_err() {
                    break;
                }
            }
            tracing::debug!("Input reader finished");
        })?;

    Ok(InputChannel {
        prompts: prompt_tx.to_async(),
        lines: line_rx.to_async(),
    })
}

fn read_secret(prompt: Prompt) -> Option<String> {
    let answer = inquire::Password::new(prompt.text())
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt();

    match answer {
        Ok(secret) => Some(secret),
        Err(e) => {
            // Ctrl+C or Ctrl+D at the prompt ends input
            tracing::debug!("Credential prompt ended: {}", e);
            None
        }
    }
}

fn read_line<R: BufRead, W: Write>(
    prompt: Prompt,
    out: &mut W,
    lines: &mut Lines<R>,
) -> Option<String> {
    if let Err(e) = write!(out, "{} ", prompt.text()).and_then(|_| out.flush()) {
        tracing::warn!("Failed to write prompt: {}", e);
    }

    match lines.next()? {
        Ok(line) => Some(line),
        Err(e) => {
            tracing::warn!("Failed to read input: {}", e);
            None
        }
    }
}
