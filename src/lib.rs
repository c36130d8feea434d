pub mod config;
pub mod cors;
pub mod data;
pub mod error;
pub mod logic;
pub mod model;
pub mod routes;
pub mod store;

use rocket::{Build, Rocket, routes};
use tracing::info;

use crate::{
    config::ServerConfig,
    cors::create_cors,
    routes::{create_game, make_turn},
    store::GameStore,
};

pub fn build_rocket(config: ServerConfig) -> Rocket<Build> {
    let store = GameStore::new(config.max_board_size);
    info!(
        "Initialized game storage, boards up to {}x{}",
        store.max_side(),
        store.max_side()
    );

    rocket::build()
        .attach(create_cors(&config))
        .manage(store)
        .mount("/api/minesweeper", routes![create_game, make_turn])
}
