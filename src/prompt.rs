//! Line-oriented terminal front end for the form.
//!
//! Lines starting with `/` are commands; anything else, including an empty
//! line, becomes the new text of the identifier field.

use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, instrument};
use crate::app_system::SystemError;
use crate::clients::FormClient;
use crate::form::{FormError, FormSnapshot};
use crate::messages::FormResult;
use crate::view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Input(String),
    Submit,
    Show,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.strip_prefix('/') {
            Some(command) => match command.trim() {
                "submit" | "s" => Self::Submit,
                "show" => Self::Show,
                "quit" | "q" => Self::Quit,
                other => Self::Unknown(other.to_string()),
            },
            None => Self::Input(line.to_string()),
        }
    }
}

type Settling<'a> = Pin<Box<dyn Future<Output = FormResult<FormSnapshot>> + 'a>>;

/// Feeds `input` to the form until `/quit` or end of input, writing every
/// render and alert to `out`.
///
/// A submission prints the loading marker and keeps reading lines; the record
/// is rendered once the form settles. A render still outstanding at the end of
/// input is written before returning.
#[instrument(skip_all)]
pub async fn run<R, W>(client: &FormClient, input: R, out: &mut W) -> Result<(), SystemError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut settling: Option<Settling<'_>> = None;

    loop {
        tokio::select! {
            Some(settled) = next_settled(&mut settling), if settling.is_some() => {
                settling = None;
                writeln!(out, "{}", view::render(&settled?))?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = Command::parse(&line);
                debug!(?command, "Command received");
                match command {
                    Command::Quit => break,
                    Command::Show => {
                        let snapshot = client.snapshot().await?;
                        writeln!(out, "{}", view::render(&snapshot))?;
                    }
                    Command::Submit => match client.submit().await {
                        Ok(token) => {
                            debug!(token, "Fetch in flight");
                            writeln!(out, "{}", view::LOADING)?;
                            // One wait covers every fetch issued before the form settles.
                            if settling.is_none() {
                                settling = Some(Box::pin(client.settled()));
                            }
                        }
                        Err(FormError::IdentifierRequired) => {
                            writeln!(out, "alert: {}", FormError::IdentifierRequired)?;
                        }
                        Err(e) => return Err(e.into()),
                    },
                    Command::Input(raw) => {
                        let outcome = client.change_input(raw).await?;
                        writeln!(out, "{}", view::field_line(outcome.field()))?;
                    }
                    Command::Unknown(name) => {
                        writeln!(out, "unknown command '/{name}' (try /submit, /show, /quit)")?;
                    }
                }
            }
        }
    }

    if let Some(pending) = settling {
        let snapshot = pending.await?;
        writeln!(out, "{}", view::render(&snapshot))?;
    }
    Ok(())
}

async fn next_settled(settling: &mut Option<Settling<'_>>) -> Option<FormResult<FormSnapshot>> {
    match settling {
        Some(pending) => Some(pending.await),
        None => None,
    }
}
