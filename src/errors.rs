//! Error types for the catalog, roster construction, the battle engine and
//! the session that fronts them.
//!
//! Every error exposes a stable snake_case `kind()` which the transports put
//! on the wire so clients can branch without parsing messages.

use crate::party::PartyId;
use schema::RecordError;
use thiserror::Error;

/// Errors raised while loading or querying the creature catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("creature not found: {0}")]
    NotFound(String),

    #[error("malformed creature record in {source_name}: {reason}")]
    MalformedRecord {
        source_name: String,
        reason: RecordError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error in {source_name}: {message}")]
    Json {
        source_name: String,
        message: String,
    },

    #[error("RON error in {source_name}: {message}")]
    Ron {
        source_name: String,
        message: String,
    },

    #[error("catalog bundle error: {0}")]
    Bundle(String),
}

impl CatalogError {
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::NotFound(_) => "not_found",
            CatalogError::MalformedRecord { .. } => "malformed_record",
            CatalogError::Io(_) => "io",
            CatalogError::Json { .. } => "json",
            CatalogError::Ron { .. } => "ron",
            CatalogError::Bundle(_) => "bundle",
        }
    }
}

/// Errors raised while turning creature identifiers into a party.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("{party} slot {slot} ('{identifier}') could not be resolved: {source}")]
    Unresolved {
        party: PartyId,
        slot: usize,
        identifier: String,
        source: CatalogError,
    },

    #[error("{0} has no usable creature")]
    EmptyRoster(PartyId),
}

/// Errors raised by battle engine operations. None of them mutate state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("not your turn: turn {turn} belongs to {owner}, not {party}")]
    NotYourTurn {
        party: PartyId,
        owner: PartyId,
        turn: u32,
    },

    #[error("invalid action '{0}', expected 'attack' or 'defend'")]
    InvalidAction(String),

    #[error("unknown party '{0}', expected 'player1' or 'player2'")]
    UnknownParty(String),

    #[error("the battle is already over, {winner} won")]
    BattleAlreadyOver { winner: PartyId },

    #[error("{0} has no active combatant")]
    NoActiveCombatant(PartyId),
}

impl BattleError {
    pub fn kind(&self) -> &'static str {
        match self {
            BattleError::NotYourTurn { .. } => "not_your_turn",
            BattleError::InvalidAction(_) => "invalid_action",
            BattleError::UnknownParty(_) => "unknown_party",
            BattleError::BattleAlreadyOver { .. } => "battle_already_over",
            BattleError::NoActiveCombatant(_) => "no_active_combatant",
        }
    }
}

/// Errors surfaced by `BattleSession` operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no battle has been started")]
    NoActiveBattle,

    #[error("roster resolution failed: {0}")]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("battle session lock was poisoned")]
    LockPoisoned,
}

impl SessionError {
    pub fn kind(&self) -> &'static str {
        match self {
            SessionError::NoActiveBattle => "no_active_battle",
            SessionError::Roster(_) => "roster_resolution",
            SessionError::Battle(err) => err.kind(),
            SessionError::Catalog(err) => err.kind(),
            SessionError::LockPoisoned => "lock_poisoned",
        }
    }
}

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using SessionError
pub type SessionResult<T> = Result<T, SessionError>;
