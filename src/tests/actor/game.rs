use tokio::sync::mpsc;
use tokio::sync::oneshot;

use crate::actor::game::*;
use crate::actor::BUFFER_MAX;
use crate::game::ConfigError;
use crate::game::MoveError;
use crate::game::Position;
use crate::game::COLS;
use crate::repo::SessionError;
use crate::repo::SessionId;

async fn new_session(tx: &mpsc::Sender<MessageIn>) -> SessionId {
    let (otx, orx) = oneshot::channel();
    tx.send(MessageIn::NewSession { respond_to: otx })
        .await
        .unwrap();
    orx.await.unwrap()
}

#[tokio::test]
async fn test_move_valid_and_invalid() {
    let (tx, mut rx) = mpsc::channel(BUFFER_MAX);
    let gactor = GameActor::new(tx);
    let tx = gactor.get_sender();
    gactor.start();

    tx.send(MessageIn::Play {
        session_id: 42,
        col: 1,
    })
    .await
    .unwrap();
    let resp = rx.recv().await;
    assert_eq!(
        resp,
        Some(MessageOut::MoveValid {
            session_id: 42,
            col: 1,
            result: Err(SessionError::UnknownSession(42)),
        })
    );

    let session_id = new_session(&tx).await;

    tx.send(MessageIn::Play { session_id, col: 1 })
        .await
        .unwrap();
    let resp = rx.recv().await;
    assert_eq!(
        resp,
        Some(MessageOut::MoveValid {
            session_id,
            col: 1,
            result: Ok(Position { row: 0, col: 1 }),
        })
    );

    tx.send(MessageIn::Play {
        session_id,
        col: COLS,
    })
    .await
    .unwrap();
    let resp = rx.recv().await;
    assert_eq!(
        resp,
        Some(MessageOut::MoveValid {
            session_id,
            col: COLS,
            result: Err(SessionError::Move(MoveError::InvalidColumn(COLS))),
        })
    );

    tx.send(MessageIn::Play { session_id, col: 1 })
        .await
        .unwrap();
    let resp = rx.recv().await;
    assert_eq!(
        resp,
        Some(MessageOut::MoveValid {
            session_id,
            col: 1,
            result: Ok(Position { row: 1, col: 1 }),
        })
    );
}

#[tokio::test]
async fn test_game_over() {
    let (tx, mut rx) = mpsc::channel(BUFFER_MAX);
    let gactor = GameActor::new(tx);
    let tx = gactor.get_sender();
    gactor.start();

    let session_id = new_session(&tx).await;

    for row in 0..3 {
        for col in [0, 1] {
            tx.send(MessageIn::Play { session_id, col })
                .await
                .unwrap();
            let resp = rx.recv().await;
            assert_eq!(
                resp,
                Some(MessageOut::MoveValid {
                    session_id,
                    col,
                    result: Ok(Position { row, col }),
                })
            );
        }
    }
    tx.send(MessageIn::Play { session_id, col: 0 })
        .await
        .unwrap();
    let resp = rx.recv().await;
    assert_eq!(
        resp,
        Some(MessageOut::MoveValid {
            session_id,
            col: 0,
            result: Ok(Position { row: 3, col: 0 }),
        })
    );
    let resp = rx.recv().await;
    assert_eq!(
        resp,
        Some(MessageOut::GameOverWinner {
            session_id,
            winner: "Player 1".to_string(),
        })
    );

    tx.send(MessageIn::Play { session_id, col: 4 })
        .await
        .unwrap();
    let resp = rx.recv().await;
    assert_eq!(
        resp,
        Some(MessageOut::MoveValid {
            session_id,
            col: 4,
            result: Err(SessionError::Move(MoveError::GameOver)),
        })
    );

    let (otx, orx) = oneshot::channel();
    tx.send(MessageIn::QueryGetState { respond_to: otx })
        .await
        .unwrap();
    let state = orx.await.unwrap();
    assert_eq!(state.total_games_played, 1);
    assert_eq!(state.sessions, vec![session_id]);

    tx.send(MessageIn::Reset { session_id }).await.unwrap();
    let resp = rx.recv().await;
    assert_eq!(
        resp,
        Some(MessageOut::GameReset {
            session_id,
            result: Ok(()),
        })
    );

    let (otx, orx) = oneshot::channel();
    tx.send(MessageIn::Snapshot {
        session_id,
        respond_to: otx,
    })
    .await
    .unwrap();
    let game = orx.await.unwrap().unwrap();
    assert_eq!(game.last_move(), None);
    assert!(!game.is_over());
}

#[tokio::test]
async fn test_configure_players() {
    let (tx, mut rx) = mpsc::channel(BUFFER_MAX);
    let gactor = GameActor::new(tx);
    let tx = gactor.get_sender();
    gactor.start();

    let session_id = new_session(&tx).await;

    tx.send(MessageIn::ConfigurePlayers {
        session_id,
        players: [
            ("Ann".to_string(), "#FF0000".to_string()),
            ("Ann2".to_string(), "#ff0000".to_string()),
        ],
    })
    .await
    .unwrap();
    let resp = rx.recv().await;
    assert_eq!(
        resp,
        Some(MessageOut::PlayersConfigured {
            session_id,
            result: Err(SessionError::Config(ConfigError::DuplicateColor(
                "#ff0000".to_string()
            ))),
        })
    );

    tx.send(MessageIn::ConfigurePlayers {
        session_id,
        players: [
            ("Ann".to_string(), "#FF0000".to_string()),
            ("Bob".to_string(), "#0000FF".to_string()),
        ],
    })
    .await
    .unwrap();
    let resp = rx.recv().await;
    assert_eq!(
        resp,
        Some(MessageOut::PlayersConfigured {
            session_id,
            result: Ok(()),
        })
    );

    let (otx, orx) = oneshot::channel();
    tx.send(MessageIn::Snapshot {
        session_id,
        respond_to: otx,
    })
    .await
    .unwrap();
    let game = orx.await.unwrap().unwrap();
    assert_eq!(game.current_player().name, "Ann");
}

#[tokio::test]
async fn test_end_session() {
    let (tx, mut rx) = mpsc::channel(BUFFER_MAX);
    let gactor = GameActor::new(tx);
    let tx = gactor.get_sender();
    gactor.start();

    let session_id = new_session(&tx).await;
    tx.send(MessageIn::EndSession { session_id })
        .await
        .unwrap();
    let resp = rx.recv().await;
    assert_eq!(resp, Some(MessageOut::SessionEnded { session_id }));

    let (otx, orx) = oneshot::channel();
    tx.send(MessageIn::Snapshot {
        session_id,
        respond_to: otx,
    })
    .await
    .unwrap();
    assert_eq!(orx.await.unwrap(), None);
}
