use tokio::sync::mpsc;

use crate::actor::console::MessageIn;
use crate::actor::console::MessageOut;
use crate::actor::controller::*;
use crate::actor::BUFFER_MAX;
use crate::game::Player;
use crate::game::Position;
use crate::game::Symbol;

fn players() -> [Player; 2] {
    [
        Player::parse(1, "Alice", "#f00").unwrap(),
        Player::parse(2, "Bob", "#00f").unwrap(),
    ]
}

#[tokio::test]
async fn test_normal_game() {
    let (tx_in, mut rx_in) = mpsc::channel(BUFFER_MAX);
    let (tx_out, rx_out) = mpsc::channel(BUFFER_MAX);

    let controller = ActorController::new_no_console(players(), tx_in, rx_out);
    let handle = tokio::spawn(controller.run_all());

    // players applied on startup
    let Some(MessageIn::Render { game, notice: None }) = rx_in.recv().await else {
        panic!("controller did not render the new game");
    };
    assert_eq!(game.current_player().name, "Alice");

    for col in [2, 3, 2, 3, 2, 3] {
        tx_out.send(MessageOut::Play { col }).await.unwrap();
        let Some(MessageIn::Render { notice: None, .. }) = rx_in.recv().await else {
            panic!("move {col} was not accepted");
        };
    }

    tx_out.send(MessageOut::Play { col: 7 }).await.unwrap();
    let res = rx_in.recv().await;
    let Some(MessageIn::Render {
        game,
        notice: Some(notice),
    }) = res
    else {
        panic!("out of range column was not rejected");
    };
    assert_eq!(notice, "There is no column 8, pick one from 1 to 7.");
    assert_eq!(game.turn(), Symbol::PlayerA);

    tx_out.send(MessageOut::Play { col: 2 }).await.unwrap();
    let Some(MessageIn::Render { game, notice: None }) = rx_in.recv().await else {
        panic!("winning move was not rendered");
    };
    assert_eq!(game.last_move(), Some(Position { row: 3, col: 2 }));
    assert_eq!(game.check_winner(), Some(Symbol::PlayerA));
    assert_eq!(
        rx_in.recv().await,
        Some(MessageIn::Notice(
            "Alice wins! Type 'reset' for a rematch.".to_string()
        ))
    );

    tx_out.send(MessageOut::Reset).await.unwrap();
    let Some(MessageIn::Render { game, notice: None }) = rx_in.recv().await else {
        panic!("reset was not rendered");
    };
    assert_eq!(game.last_move(), None);
    assert_eq!(game.player_for(Symbol::PlayerB).name, "Bob");

    tx_out.send(MessageOut::Quit).await.unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_players_keep_previous() {
    let (tx_in, mut rx_in) = mpsc::channel(BUFFER_MAX);
    let (tx_out, rx_out) = mpsc::channel(BUFFER_MAX);

    let controller = ActorController::new_no_console(players(), tx_in, rx_out);
    tokio::spawn(controller.run_all());
    let _ = rx_in.recv().await;

    tx_out
        .send(MessageOut::ConfigurePlayers {
            players: [
                ("Ann".to_string(), "#123".to_string()),
                ("   ".to_string(), "#456".to_string()),
            ],
        })
        .await
        .unwrap();
    let Some(MessageIn::Render {
        game,
        notice: Some(notice),
    }) = rx_in.recv().await
    else {
        panic!("bad players were not rejected");
    };
    assert_eq!(notice, "Players unchanged: player 2 needs a name.");
    assert_eq!(game.player_for(Symbol::PlayerA).name, "Alice");
}

#[tokio::test]
async fn test_quit_ends_controller() {
    let (tx_in, mut rx_in) = mpsc::channel(BUFFER_MAX);
    let (tx_out, rx_out) = mpsc::channel(BUFFER_MAX);

    let controller = ActorController::new_no_console(players(), tx_in, rx_out);
    let handle = tokio::spawn(controller.run_all());
    let _ = rx_in.recv().await;

    drop(tx_out);
    handle.await.unwrap();
}
