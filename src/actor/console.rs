use std::io::Write;

use regex::Regex;
use thiserror::Error;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;

use super::BUFFER_MAX;
use crate::game::GameState;
use crate::game::MoveError;
use crate::game::COLS;
use crate::render;
use crate::repo::SessionError;

pub const HELP: &str = "\
commands:
  p(lay) N                       drop a token in column N (1-7)
  r(eset)                        start a new game with the same players
  c(onfig) NAME #RGB NAME #RGB   rename and recolor both players
  s(how)                         print the grid again
  h(elp)                         print this help
  q(uit)                         leave";

#[derive(Debug, PartialEq, Eq)]
pub enum MessageIn {
    Render {
        game: Box<GameState>,
        notice: Option<String>,
    },
    Notice(String),
}

/// Commands typed by the user. Columns are already zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOut {
    Play { col: usize },
    Reset,
    ConfigurePlayers { players: [(String, String); 2] },
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("columns are numbered from 1 to {}", COLS)]
    ColumnZero,
    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),
}

/// Parses one input line. The user numbers columns from 1, the engine from 0.
pub fn parse_command(line: &str) -> Result<Option<MessageOut>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let regex_play = Regex::new(r"^p(?:lay)?\s+(\d+)$").ok();
    let regex_config =
        Regex::new(r"^c(?:onfig)?\s+(.+?)\s+(#\S*)\s+(.+?)\s+(#\S*)$").ok();

    if let Some(caps) = regex_play.as_ref().and_then(|re| re.captures(line)) {
        // too many digits for usize is just an out of range column
        let col = caps[1].parse::<usize>().unwrap_or(usize::MAX);
        let col = col.checked_sub(1).ok_or(CommandError::ColumnZero)?;
        return Ok(Some(MessageOut::Play { col }));
    }
    if let Some(caps) = regex_config.as_ref().and_then(|re| re.captures(line)) {
        return Ok(Some(MessageOut::ConfigurePlayers {
            players: [
                (caps[1].to_string(), caps[2].to_string()),
                (caps[3].to_string(), caps[4].to_string()),
            ],
        }));
    }
    let msg = match line {
        "r" | "reset" => MessageOut::Reset,
        "s" | "show" => MessageOut::Show,
        "h" | "help" => MessageOut::Help,
        "q" | "quit" => MessageOut::Quit,
        _ => return Err(CommandError::Unknown(line.to_string())),
    };
    Ok(Some(msg))
}

/// User-facing text for a rejected request, with 1-based columns.
pub fn describe_rejection(err: &SessionError) -> String {
    match err {
        SessionError::Move(MoveError::InvalidColumn(col)) => {
            format!("There is no column {}, pick one from 1 to {COLS}.", col.saturating_add(1))
        }
        SessionError::Move(MoveError::ColumnFull(col)) => {
            format!("Column {} is full.", col + 1)
        }
        SessionError::Move(MoveError::GameOver) => {
            "The game is over, type 'reset' for a rematch.".to_string()
        }
        SessionError::Config(e) => format!("Players unchanged: {e}."),
        SessionError::UnknownSession(_) => "The game session is gone.".to_string(),
    }
}

/// Terminal front end: reads commands from stdin and prints whatever the
/// controller sends back.
pub struct ConsoleActor {
    tx_in: Sender<MessageIn>,
    tx_out: Sender<MessageOut>,
    rx_in: Receiver<MessageIn>,
    colored: bool,
}

impl ConsoleActor {
    pub fn new(tx_out: Sender<MessageOut>, colored: bool) -> Self {
        let (tx_in, rx_in) = mpsc::channel(BUFFER_MAX);
        Self {
            tx_in,
            tx_out,
            rx_in,
            colored,
        }
    }

    pub fn get_sender(&self) -> Sender<MessageIn> {
        self.tx_in.clone()
    }

    pub fn start(mut self) {
        log::debug!("Console actor started.");
        let tx_out = self.tx_out.clone();

        // stdin reader
        tokio::spawn(async move {
            let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
            while let Some(line) = lines.next().await {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::error!("Could not read stdin: {e}");
                        break;
                    }
                };
                let msg = match parse_command(&line) {
                    Ok(Some(MessageOut::Help)) => {
                        println!("{HELP}");
                        continue;
                    }
                    Ok(Some(msg)) => msg,
                    Ok(None) => continue,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };
                let quit = msg == MessageOut::Quit;
                if tx_out.send(msg).await.is_err() || quit {
                    return;
                }
            }
            // end of input
            let _ = tx_out.send(MessageOut::Quit).await;
        });

        // output
        tokio::spawn(async move {
            while let Some(msg) = self.rx_in.recv().await {
                let mut stdout = std::io::stdout();
                let written = match msg {
                    MessageIn::Render { game, notice } => {
                        render::render(&mut stdout, &game, self.colored).and_then(|_| {
                            match notice {
                                Some(notice) => writeln!(stdout, "{notice}"),
                                None => Ok(()),
                            }
                        })
                    }
                    MessageIn::Notice(notice) => writeln!(stdout, "{notice}"),
                };
                if let Err(e) = written.and_then(|_| stdout.flush()) {
                    log::error!("Could not write to stdout: {e}");
                }
            }
        });
    }
}
