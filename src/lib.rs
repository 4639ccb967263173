//! Pokebat Battle Engine
//!
//! A two-player, turn-based creature battle: rosters are resolved against a
//! creature catalog, parties alternate Attack and Defend actions, and a
//! lock-protected session serves the battle to concurrent network clients.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod catalog;
pub mod combatant;
pub mod config;
pub mod errors;
pub mod party;
pub mod rpc;
pub mod session;
pub mod telemetry;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokebat` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the creature record and its supporting enums.
pub use schema::{CreatureStats, PokemonType};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{attack, calculate_damage, defend, submit_action};
pub use battle::snapshot::BattleSnapshot;
pub use battle::state::{BattleEvent, BattlePhase, BattleRules, BattleState, PlayerAction};

// Core runtime types for a battle.
pub use combatant::Combatant;
pub use party::{build_party, Party, PartyId, RosterPolicy};

// Creature data access.
pub use catalog::{CreatureCatalog, InMemoryCatalog};

// Orchestration and configuration.
pub use config::ServerConfig;
pub use session::BattleSession;

// Crate-specific error and result types.
pub use errors::{
    BattleError, BattleResult, CatalogError, CatalogResult, RosterError, SessionError,
    SessionResult,
};
