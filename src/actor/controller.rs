use thiserror::Error;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::SendError;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot;

use super::console as c;
use super::console::ConsoleActor;
use super::game as g;
use super::game::GameActor;
use super::BUFFER_MAX;
use crate::game::Player;
use crate::repo::SessionId;

pub struct ActorController {
    state: ActorState,
    players: [Player; 2],

    rx_g_out: Receiver<g::MessageOut>,
    g_actor: GameActor,

    rx_c_out: Receiver<c::MessageOut>,
    c_actor: Option<ConsoleActor>,
}

#[derive(Clone)]
struct ActorState {
    tx_g_in: Sender<g::MessageIn>,
    tx_c_in: Sender<c::MessageIn>,
}

#[derive(Debug, Error)]
pub enum ActorSendError {
    #[error("Error sending game msg: {0}")]
    GameMessageIn(#[from] SendError<g::MessageIn>),
    #[error("Error sending console msg: {0}")]
    ConsoleMessageIn(#[from] SendError<c::MessageIn>),
    #[error("Error receiving oneshot")]
    Oneshot(#[from] oneshot::error::RecvError),
    #[error("Session {0} vanished")]
    MissingSession(SessionId),
}

impl ActorController {
    pub fn new(players: [Player; 2], colored: bool) -> Self {
        let (tx_g_out, rx_g_out) = mpsc::channel(BUFFER_MAX);
        let g_actor = GameActor::new(tx_g_out);
        let tx_g_in = g_actor.get_sender();

        let (tx_c_out, rx_c_out) = mpsc::channel(BUFFER_MAX);
        let c_actor = ConsoleActor::new(tx_c_out, colored);
        let tx_c_in = c_actor.get_sender();

        Self {
            state: ActorState { tx_g_in, tx_c_in },
            players,
            rx_g_out,
            g_actor,
            rx_c_out,
            c_actor: Some(c_actor),
        }
    }

    #[cfg(test)]
    pub fn new_no_console(
        players: [Player; 2],
        tx_c_in: Sender<c::MessageIn>,
        rx_c_out: Receiver<c::MessageOut>,
    ) -> Self {
        let (tx_g_out, rx_g_out) = mpsc::channel(BUFFER_MAX);
        let g_actor = GameActor::new(tx_g_out);
        let tx_g_in = g_actor.get_sender();

        Self {
            state: ActorState { tx_g_in, tx_c_in },
            players,
            rx_g_out,
            g_actor,
            rx_c_out,
            c_actor: None,
        }
    }

    /// Runs until the console quits or a channel breaks.
    pub async fn run_all(self) {
        log::debug!("Controller starting all actors...");
        let ActorController {
            state,
            players,
            mut rx_g_out,
            g_actor,
            mut rx_c_out,
            c_actor,
        } = self;

        g_actor.start();
        if let Some(c_actor) = c_actor {
            c_actor.start();
        } else {
            log::warn!("Console actor not started. Assuming this is a test env");
        }

        let session_id = match Self::open_session(&state, players).await {
            Ok(session_id) => session_id,
            Err(e) => {
                log::error!("{e}");
                return;
            }
        };
        log::debug!("Actor Controller started");

        loop {
            let handled = tokio::select! {
                msg = rx_c_out.recv() => match msg {
                    Some(msg) => {
                        log::debug!("RECV {msg:?} from C actor");
                        Self::handle_msg_c_out(&state, session_id, msg).await
                    }
                    // console gone, same as quitting
                    None => Ok(false),
                },
                Some(msg) = rx_g_out.recv() => {
                    log::debug!("RECV {msg:?} from G actor");
                    Self::handle_msg_g_out(&state, msg).await.map(|_| true)
                }
            };
            match handled {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    log::error!("{e}");
                    break;
                }
            }
        }
        log::info!("Terminating ActorController");
    }

    async fn open_session(
        state: &ActorState,
        players: [Player; 2],
    ) -> Result<SessionId, ActorSendError> {
        let (tx, rx) = oneshot::channel();
        state
            .tx_g_in
            .send(g::MessageIn::NewSession { respond_to: tx })
            .await?;
        let session_id = rx.await?;
        state
            .tx_g_in
            .send(g::MessageIn::ConfigurePlayers {
                session_id,
                players: players.map(|p| (p.name, p.color.to_string())),
            })
            .await?;
        Ok(session_id)
    }

    /// Returns `false` once the user quit.
    async fn handle_msg_c_out(
        state: &ActorState,
        session_id: SessionId,
        msg: c::MessageOut,
    ) -> Result<bool, ActorSendError> {
        match msg {
            c::MessageOut::Play { col } => {
                state
                    .tx_g_in
                    .send(g::MessageIn::Play { session_id, col })
                    .await?;
            }
            c::MessageOut::Reset => {
                state.tx_g_in.send(g::MessageIn::Reset { session_id }).await?;
            }
            c::MessageOut::ConfigurePlayers { players } => {
                state
                    .tx_g_in
                    .send(g::MessageIn::ConfigurePlayers {
                        session_id,
                        players,
                    })
                    .await?;
            }
            c::MessageOut::Show => {
                Self::render(state, session_id, None).await?;
            }
            c::MessageOut::Help => {
                state
                    .tx_c_in
                    .send(c::MessageIn::Notice(c::HELP.to_string()))
                    .await?;
            }
            c::MessageOut::Quit => {
                state
                    .tx_g_in
                    .send(g::MessageIn::EndSession { session_id })
                    .await?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    async fn handle_msg_g_out(state: &ActorState, msg: g::MessageOut) -> Result<(), ActorSendError> {
        match msg {
            g::MessageOut::MoveValid {
                session_id,
                col: _,
                result,
            } => {
                let notice = result.err().map(|e| c::describe_rejection(&e));
                Self::render(state, session_id, notice).await?;
            }
            g::MessageOut::GameReset { session_id, result }
            | g::MessageOut::PlayersConfigured { session_id, result } => {
                let notice = result.err().map(|e| c::describe_rejection(&e));
                Self::render(state, session_id, notice).await?;
            }
            g::MessageOut::GameOverWinner { session_id: _, winner } => {
                state
                    .tx_c_in
                    .send(c::MessageIn::Notice(format!(
                        "{winner} wins! Type 'reset' for a rematch."
                    )))
                    .await?;
            }
            g::MessageOut::GameOverDraw { session_id: _ } => {
                state
                    .tx_c_in
                    .send(c::MessageIn::Notice(
                        "The grid is full, it's a draw. Type 'reset' for a rematch.".to_string(),
                    ))
                    .await?;
            }
            g::MessageOut::SessionEnded { session_id } => {
                log::debug!("Session {session_id} closed");
            }
        }
        Ok(())
    }

    async fn render(
        state: &ActorState,
        session_id: SessionId,
        notice: Option<String>,
    ) -> Result<(), ActorSendError> {
        let (tx, rx) = oneshot::channel();
        state
            .tx_g_in
            .send(g::MessageIn::Snapshot {
                session_id,
                respond_to: tx,
            })
            .await?;
        let game = rx.await?.ok_or(ActorSendError::MissingSession(session_id))?;
        state
            .tx_c_in
            .send(c::MessageIn::Render {
                game: Box::new(game),
                notice,
            })
            .await?;
        Ok(())
    }
}
