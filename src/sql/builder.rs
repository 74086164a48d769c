//! Maps each catalog request onto exactly one SQL statement and its bound parameters.

const SELECT_POKEMON: &str =
    "SELECT id, pokemonName, generation, HP, attributeId, imageURL FROM POKEMON";

const SELECT_POKEBALLS: &str = "SELECT id, pokeballName, typeId, imageURL FROM POKEBALL";

const SELECT_RELATIONS: &str = "SELECT id, pokemonId, pokeballId FROM POKEMONBALL";

const SELECT_POKEBALLS_FOR_POKEMON: &str = "SELECT pb.id, pb.pokeballName, pb.typeId, pb.imageURL \
     FROM POKEBALL pb \
     JOIN POKEMONBALL pball ON pb.id = pball.pokeballId \
     WHERE pball.pokemonId = ?";

const SELECT_POKEMON_FOR_POKEBALL: &str =
    "SELECT p.id, p.pokemonName, p.generation, p.HP, p.attributeId, p.imageURL \
     FROM POKEMON p \
     JOIN POKEMONBALL pball ON p.id = pball.pokemonId \
     WHERE pball.pokeballId = ?";

/// Integer key taken from a path segment. A digit run wider than `u64` cannot equal any integer column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowId {
    Key(u64),
    OutOfRange,
}

impl RowId {
    /// ASCII digits only; no sign, no whitespace. `None` when `raw` is not an integer at all.
    pub fn parse(raw: &str) -> Option<RowId> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(raw.parse().map(RowId::Key).unwrap_or(RowId::OutOfRange))
    }
}

/// One read against the catalog. Ids are already validated integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogQuery {
    AllPokemon,
    AllPokeballs,
    AllRelations,
    PokeballsForPokemon(RowId),
    PokemonForPokeball(RowId),
}

/// Statement text plus positional parameters, bound in order to the `?` placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryBuf {
    pub sql: &'static str,
    pub params: Vec<u64>,
}

impl CatalogQuery {
    /// `None` when the filter id is out of range, so the result is known to be empty.
    pub fn to_sql(&self) -> Option<QueryBuf> {
        let (sql, params) = match *self {
            CatalogQuery::AllPokemon => (SELECT_POKEMON, vec![]),
            CatalogQuery::AllPokeballs => (SELECT_POKEBALLS, vec![]),
            CatalogQuery::AllRelations => (SELECT_RELATIONS, vec![]),
            CatalogQuery::PokeballsForPokemon(RowId::Key(id)) => {
                (SELECT_POKEBALLS_FOR_POKEMON, vec![id])
            }
            CatalogQuery::PokemonForPokeball(RowId::Key(id)) => {
                (SELECT_POKEMON_FOR_POKEBALL, vec![id])
            }
            CatalogQuery::PokeballsForPokemon(RowId::OutOfRange)
            | CatalogQuery::PokemonForPokeball(RowId::OutOfRange) => return None,
        };
        Some(QueryBuf { sql, params })
    }

    /// Client-facing message when the statement fails after connecting.
    pub fn failure_message(&self) -> &'static str {
        match self {
            CatalogQuery::AllPokemon => "Failed to fetch Pokémon",
            CatalogQuery::AllPokeballs => "Failed to fetch Poké Balls",
            CatalogQuery::AllRelations => "Failed to fetch Pokémon-Poké Ball relations",
            CatalogQuery::PokeballsForPokemon(_) => {
                "Failed to fetch Poké Balls for the specified Pokémon"
            }
            CatalogQuery::PokemonForPokeball(_) => {
                "Failed to fetch Pokémon for the specified Poké Ball"
            }
        }
    }
}
