//! Interactive shell: reads lines, dispatches commands, prints replies.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::api::PokeClient;
use crate::error::{PokedexError, Result};
use crate::repl::{clean_input, Action, CommandRegistry};

/// Prompt printed before each line is read.
pub const PROMPT: &str = "Pokedex > ";

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Output of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub flow: Flow,
}

impl Reply {
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            flow: Flow::Continue,
        }
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self::lines([line.into()])
    }

    pub fn empty() -> Self {
        Self::lines(Vec::<String>::new())
    }

    pub fn exit(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            flow: Flow::Exit,
        }
    }
}

/// Pagination cursor over the location-area listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Page fetched by the next `map`; `None` restarts from the first page
    pub next: Option<String>,
    /// Page fetched by the next `mapb`; `None` on the first page
    pub previous: Option<String>,
}

// == Repl ==
/// Shell state: the API client, the command table and the pagination cursor.
#[derive(Debug)]
pub struct Repl {
    client: PokeClient,
    registry: CommandRegistry,
    session: Session,
}

impl Repl {
    pub fn new(client: PokeClient, registry: CommandRegistry) -> Self {
        let session = Session {
            next: Some(client.first_page_url()),
            previous: None,
        };
        Self {
            client,
            registry,
            session,
        }
    }

    pub fn client(&self) -> &PokeClient {
        &self.client
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // == Run ==
    /// Reads commands from `input` until end of input or `exit`, writing
    /// prompts and replies to `output`.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(output)?;
                break;
            };

            let reply = self.execute(&line).await;
            for line in &reply.lines {
                writeln!(output, "{line}")?;
            }
            if reply.flow == Flow::Exit {
                break;
            }
        }

        output.flush()
    }

    // == Execute ==
    /// Runs one input line. Command failures are reported in the reply.
    pub async fn execute(&mut self, line: &str) -> Reply {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Reply::empty();
        };

        let Some(action) = self.registry.get(name).map(|command| command.action) else {
            return Reply::line("Unknown command");
        };

        debug!(command = %name, ?args, "dispatching command");
        match self.dispatch(action, args).await {
            Ok(reply) => reply,
            Err(err) => {
                debug!(command = %name, error = %err, "command failed");
                Reply::line(error_line(&err))
            }
        }
    }

    async fn dispatch(&mut self, action: Action, args: &[String]) -> Result<Reply> {
        match action {
            Action::Exit => Ok(Reply::exit("Closing the Pokedex... Goodbye!")),
            Action::Help => Ok(self.help()),
            Action::Map => self.map().await,
            Action::MapBack => self.map_back().await,
            Action::Explore => self.explore(args).await,
        }
    }

    fn help(&self) -> Reply {
        let mut lines = vec![
            "Welcome to the Pokedex!".to_string(),
            "Usage:".to_string(),
            String::new(),
        ];
        lines.extend(
            self.registry
                .iter()
                .map(|command| format!("{}: {}", command.name, command.description)),
        );
        Reply::lines(lines)
    }

    async fn map(&mut self) -> Result<Reply> {
        let url = self
            .session
            .next
            .clone()
            .unwrap_or_else(|| self.client.first_page_url());
        self.show_page(&url).await
    }

    async fn map_back(&mut self) -> Result<Reply> {
        let Some(url) = self.session.previous.clone() else {
            return Ok(Reply::line("you're on the first page"));
        };
        self.show_page(&url).await
    }

    async fn show_page(&mut self, url: &str) -> Result<Reply> {
        let page = self.client.location_areas(url).await?;
        self.session.next = page.next;
        self.session.previous = page.previous;
        Ok(Reply::lines(page.results.into_iter().map(|area| area.name)))
    }

    async fn explore(&mut self, args: &[String]) -> Result<Reply> {
        let Some(area) = args.first() else {
            return Ok(Reply::line("Please provide a location area to explore"));
        };

        // Printed even when the fetch fails
        let mut lines = vec![format!("Exploring {area}...")];
        match self.client.location_area(area).await {
            Ok(detail) => {
                lines.push("Found Pokemon:".to_string());
                lines.extend(detail.pokemon_names().map(|name| format!(" - {name}")));
            }
            Err(err) => {
                debug!(area = %area, error = %err, "explore failed");
                lines.push(error_line(&err));
            }
        }
        Ok(Reply::lines(lines))
    }

    /// Stops the client's cache reaper and waits for it to exit.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

fn error_line(err: &PokedexError) -> String {
    format!("Error: {err}")
}
