use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use thiserror::Error;

use crate::game::ConfigError;
use crate::game::GameState;
use crate::game::MoveError;

pub type SessionId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no session with id {0}")]
    UnknownSession(SessionId),
    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
    #[error("players rejected: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug)]
pub struct Session {
    pub game: GameState,
    pub created_at: DateTime<Utc>,
}

/*

one session --- one game, replaced wholesale on reset

*/

#[derive(Default, Debug)]
pub struct SessionRepo {
    map_id_to_session: HashMap<SessionId, Session>,
    pub total_games_played: u128,
}

impl SessionRepo {
    pub fn create_session(&mut self) -> SessionId {
        let mut session_id = rand::random::<SessionId>();
        while self.map_id_to_session.contains_key(&session_id) {
            session_id = rand::random::<SessionId>();
        }
        self.map_id_to_session.insert(
            session_id,
            Session {
                game: GameState::new(),
                created_at: Utc::now(),
            },
        );
        session_id
    }

    pub fn get_game(&self, session_id: SessionId) -> Result<&GameState, SessionError> {
        self.map_id_to_session
            .get(&session_id)
            .map(|session| &session.game)
            .ok_or(SessionError::UnknownSession(session_id))
    }

    pub fn get_game_mut(&mut self, session_id: SessionId) -> Result<&mut GameState, SessionError> {
        self.map_id_to_session
            .get_mut(&session_id)
            .map(|session| &mut session.game)
            .ok_or(SessionError::UnknownSession(session_id))
    }

    pub fn get_session(&self, session_id: SessionId) -> Option<&Session> {
        self.map_id_to_session.get(&session_id)
    }

    /// Replaces the session's game with a fresh one, keeping its players.
    pub fn reset_game(&mut self, session_id: SessionId) -> Result<&GameState, SessionError> {
        let game = self.get_game_mut(session_id)?;
        *game = game.rematch();
        Ok(game)
    }

    pub fn delete_session(&mut self, session_id: SessionId) -> Option<Session> {
        self.map_id_to_session.remove(&session_id)
    }

    pub fn get_session_ids(&self) -> Vec<SessionId> {
        self.map_id_to_session.keys().cloned().collect()
    }
}
