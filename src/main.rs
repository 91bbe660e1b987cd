use clap::Parser;
use power4::actor::controller::ActorController;
use power4::config::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let players = args.players()?;

    let actor_controller = ActorController::new(players, !args.no_color);
    actor_controller.run_all().await;
    Ok(())
}
