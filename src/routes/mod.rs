pub mod pokedex;

pub use pokedex::pokedex_routes;
