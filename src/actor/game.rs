use chrono::Utc;
use tokio::sync::mpsc;
use tokio::sync::oneshot;

use super::BUFFER_MAX;
use crate::game::GameState;
use crate::game::GameStatus;
use crate::game::Position;
use crate::repo::SessionError;
use crate::repo::SessionId;
use crate::repo::SessionRepo;

#[derive(Debug)]
pub enum MessageIn {
    NewSession {
        respond_to: oneshot::Sender<SessionId>,
    },
    Play {
        session_id: SessionId,
        col: usize,
    },
    Reset {
        session_id: SessionId,
    },
    ConfigurePlayers {
        session_id: SessionId,
        players: [(String, String); 2],
    },
    Snapshot {
        session_id: SessionId,
        respond_to: oneshot::Sender<Option<GameState>>,
    },
    EndSession {
        session_id: SessionId,
    },
    QueryGetState {
        respond_to: oneshot::Sender<StatePayload>,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum MessageOut {
    MoveValid {
        session_id: SessionId,
        col: usize,
        result: Result<Position, SessionError>,
    },
    GameOverWinner {
        session_id: SessionId,
        winner: String,
    },
    GameOverDraw {
        session_id: SessionId,
    },
    GameReset {
        session_id: SessionId,
        result: Result<(), SessionError>,
    },
    PlayersConfigured {
        session_id: SessionId,
        result: Result<(), SessionError>,
    },
    SessionEnded {
        session_id: SessionId,
    },
}

/// Owns every session. Messages are handled one at a time, so two moves on
/// the same game can never interleave.
pub struct GameActor {
    tx_in: mpsc::Sender<MessageIn>,
    tx_out: mpsc::Sender<MessageOut>,
    rx: mpsc::Receiver<MessageIn>,
    repo: SessionRepo,
}

#[derive(Debug)]
pub struct StatePayload {
    pub sessions: Vec<SessionId>,
    pub num_sessions: usize,
    pub total_games_played: u128,
}

impl GameActor {
    pub fn new(tx_out: mpsc::Sender<MessageOut>) -> Self {
        let (tx, rx) = mpsc::channel(BUFFER_MAX);
        Self {
            tx_in: tx,
            tx_out,
            rx,
            repo: SessionRepo::default(),
        }
    }

    pub fn get_sender(&self) -> mpsc::Sender<MessageIn> {
        self.tx_in.clone()
    }

    pub fn start(mut self) {
        log::debug!("Game actor started.");
        tokio::spawn(async move {
            while let Some(req) = self.rx.recv().await {
                log::debug!("RECV {req:?}");
                let out = self.handle(req);
                for msg in out {
                    if self.tx_out.send(msg).await.is_err() {
                        log::info!("Game actor output channel closed, stopping.");
                        return;
                    }
                }
            }
        });
    }

    fn handle(&mut self, req: MessageIn) -> Vec<MessageOut> {
        match req {
            MessageIn::NewSession { respond_to } => {
                let session_id = self.repo.create_session();
                log::info!("New session '{session_id}' created");
                if respond_to.send(session_id).is_err() {
                    log::warn!("Session '{session_id}' created but nobody is listening");
                }
                vec![]
            }
            MessageIn::Play { session_id, col } => self.handle_play(session_id, col),
            MessageIn::Reset { session_id } => {
                let result = self.repo.reset_game(session_id).map(|_| ());
                match &result {
                    Ok(()) => log::info!("Session '{session_id}' reset"),
                    Err(e) => log::warn!("Reset refused: {e}"),
                }
                vec![MessageOut::GameReset { session_id, result }]
            }
            MessageIn::ConfigurePlayers {
                session_id,
                players: [(name1, color1), (name2, color2)],
            } => {
                let result = self.repo.get_game_mut(session_id).and_then(|game| {
                    game.configure_players(&name1, &color1, &name2, &color2)
                        .map_err(SessionError::from)
                });
                match &result {
                    Ok(()) => log::info!(
                        "Session '{session_id}' players: {name1} ({color1}) vs {name2} ({color2})"
                    ),
                    Err(e) => log::warn!("Session '{session_id}': {e}"),
                }
                vec![MessageOut::PlayersConfigured { session_id, result }]
            }
            MessageIn::Snapshot {
                session_id,
                respond_to,
            } => {
                let game = self.repo.get_game(session_id).ok().cloned();
                if respond_to.send(game).is_err() {
                    log::warn!("Snapshot of '{session_id}' dropped by requester");
                }
                vec![]
            }
            MessageIn::EndSession { session_id } => {
                let Some(session) = self.repo.delete_session(session_id) else {
                    return vec![];
                };
                let lasted = Utc::now() - session.created_at;
                log::info!(
                    "Session '{session_id}' ended after {}s",
                    lasted.num_seconds()
                );
                vec![MessageOut::SessionEnded { session_id }]
            }
            MessageIn::QueryGetState { respond_to } => {
                let sessions = self.repo.get_session_ids();
                let payload = StatePayload {
                    num_sessions: sessions.len(),
                    sessions,
                    total_games_played: self.repo.total_games_played,
                };
                if respond_to.send(payload).is_err() {
                    log::warn!("State query dropped by requester");
                }
                vec![]
            }
        }
    }

    fn handle_play(&mut self, session_id: SessionId, col: usize) -> Vec<MessageOut> {
        let game = match self.repo.get_game_mut(session_id) {
            Ok(game) => game,
            Err(e) => {
                log::warn!("{e}");
                return vec![MessageOut::MoveValid {
                    session_id,
                    col,
                    result: Err(e),
                }];
            }
        };
        let result = game.play(col).map_err(SessionError::from);
        if let Err(e) = &result {
            log::warn!("Session '{session_id}': {e}");
        }
        if log::log_enabled!(log::Level::Debug) {
            let board = game.grid().board_to_str();
            log::debug!("BOARD:\n{board}\n");
        }
        let mut out = vec![MessageOut::MoveValid {
            session_id,
            col,
            result: result.clone(),
        }];
        if result.is_err() {
            return out;
        }
        match game.status() {
            GameStatus::InProgress => {}
            GameStatus::Won(symbol) => {
                let winner = game.player_for(symbol).name.clone();
                log::info!("Game over ({session_id}). Winner: {winner}");
                self.repo.total_games_played += 1;
                out.push(MessageOut::GameOverWinner { session_id, winner });
            }
            GameStatus::Draw => {
                log::info!("Game over ({session_id}). Draw");
                self.repo.total_games_played += 1;
                out.push(MessageOut::GameOverDraw { session_id });
            }
        }
        out
    }
}
