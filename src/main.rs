use minesweeper_api::{build_rocket, config::ServerConfig};
use rocket::{Build, Rocket};
use tracing::info;

#[rocket::launch]
fn rocket() -> Rocket<Build> {
    tracing_subscriber::fmt::init();
    info!("Starting Minesweeper API server");

    let config = ServerConfig::from_env();
    info!("Loaded configuration: {:?}", config);

    let rocket = build_rocket(config);
    info!("Endpoints: POST /api/minesweeper/new, POST /api/minesweeper/turn");

    rocket
}
