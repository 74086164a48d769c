//! Catalog routes under /api.

use crate::handlers::{
    list_pokeballs, list_pokemon, list_relations, pokeballs_for_pokemon, pokemon_for_pokeball,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn pokedex_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/pokemon", get(list_pokemon))
        .route("/api/pokeballs", get(list_pokeballs))
        .route("/api/pokemonball", get(list_relations))
        .route("/api/pokemon/:pokemon_id/pokeballs", get(pokeballs_for_pokemon))
        .route("/api/pokeballs/:pokeball_id/pokemon", get(pokemon_for_pokeball))
        .with_state(state)
}
