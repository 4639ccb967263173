// Pokebat Schema - Shared creature data definitions
// This crate holds the typed creature records that the catalog decodes once at
// load time, so the battle engine never touches loosely shaped source data.

// Re-export the main types
pub use creature_data::*;
pub use pokemon_types::*;

pub mod creature_data;
pub mod pokemon_types;
