//! In-memory catalog seeded with typed rows, answering the same queries as MySQL.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use pokedex_api::{Catalog, CatalogQuery, RowId, StoreError};
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: i64,
    pub pokemon_name: String,
    pub generation: i64,
    #[serde(rename = "HP")]
    pub hp: i64,
    pub attribute_id: i64,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokeball {
    pub id: i64,
    pub pokeball_name: String,
    pub type_id: i64,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonBall {
    pub id: i64,
    pub pokemon_id: i64,
    pub pokeball_id: i64,
}

pub fn pokemon(id: i64, name: &str) -> Pokemon {
    Pokemon {
        id,
        pokemon_name: name.to_string(),
        generation: 1,
        hp: 35,
        attribute_id: 4,
        image_url: format!("https://img.example/pokemon/{id}.png"),
    }
}

pub fn pokeball(id: i64, name: &str) -> Pokeball {
    Pokeball {
        id,
        pokeball_name: name.to_string(),
        type_id: 1,
        image_url: format!("https://img.example/balls/{id}.png"),
    }
}

#[derive(Default)]
pub struct MemoryCatalog {
    pub pokemon: Vec<Pokemon>,
    pub pokeballs: Vec<Pokeball>,
    pub links: Vec<PokemonBall>,
}

impl MemoryCatalog {
    pub fn link(mut self, pokemon_id: i64, pokeball_id: i64) -> Self {
        let id = self.links.len() as i64 + 1;
        self.links.push(PokemonBall {
            id,
            pokemon_id,
            pokeball_id,
        });
        self
    }
}

fn key_matches(key: RowId, id: i64) -> bool {
    matches!(key, RowId::Key(k) if u64::try_from(id) == Ok(k))
}

fn rows<T: Serialize>(items: impl IntoIterator<Item = T>) -> Vec<Value> {
    items
        .into_iter()
        .map(|item| serde_json::to_value(item).expect("row serializes"))
        .collect()
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Value>, StoreError> {
        Ok(match *query {
            CatalogQuery::AllPokemon => rows(&self.pokemon),
            CatalogQuery::AllPokeballs => rows(&self.pokeballs),
            CatalogQuery::AllRelations => rows(&self.links),
            CatalogQuery::PokeballsForPokemon(id) => rows(
                self.links
                    .iter()
                    .filter(|l| key_matches(id, l.pokemon_id))
                    .filter_map(|l| self.pokeballs.iter().find(|b| b.id == l.pokeball_id)),
            ),
            CatalogQuery::PokemonForPokeball(id) => rows(
                self.links
                    .iter()
                    .filter(|l| key_matches(id, l.pokeball_id))
                    .filter_map(|l| self.pokemon.iter().find(|p| p.id == l.pokemon_id)),
            ),
        })
    }
}

pub async fn get_raw(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get_raw(app, uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}
