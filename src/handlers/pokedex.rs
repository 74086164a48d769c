//! Catalog handlers: each runs exactly one query and returns the rows as a JSON array.

use crate::error::AppError;
use crate::extractors::CatalogId;
use crate::response::rows_ok;
use crate::sql::CatalogQuery;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

async fn run(state: &AppState, query: CatalogQuery) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .catalog
        .fetch(&query)
        .await
        .map_err(|e| AppError::from_store(e, query.failure_message()))?;
    Ok(rows_ok(rows))
}

/// GET /api/pokemon
pub async fn list_pokemon(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    run(&state, CatalogQuery::AllPokemon).await
}

/// GET /api/pokeballs
pub async fn list_pokeballs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    run(&state, CatalogQuery::AllPokeballs).await
}

/// GET /api/pokemonball
pub async fn list_relations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    run(&state, CatalogQuery::AllRelations).await
}

/// GET /api/pokemon/:pokemon_id/pokeballs
pub async fn pokeballs_for_pokemon(
    State(state): State<AppState>,
    CatalogId(pokemon_id): CatalogId,
) -> Result<impl IntoResponse, AppError> {
    run(&state, CatalogQuery::PokeballsForPokemon(pokemon_id)).await
}

/// GET /api/pokeballs/:pokeball_id/pokemon
pub async fn pokemon_for_pokeball(
    State(state): State<AppState>,
    CatalogId(pokeball_id): CatalogId,
) -> Result<impl IntoResponse, AppError> {
    run(&state, CatalogQuery::PokemonForPokeball(pokeball_id)).await
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
