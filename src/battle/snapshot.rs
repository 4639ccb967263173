//! Serializable projection of a `BattleState` for transport.
//!
//! Field names (`player1`, `pokemon`, `hp`, `current_pokemon_index`, `turn`)
//! match what existing battle clients already decode.

use crate::battle::state::{BattlePhase, BattleState};
use crate::combatant::Combatant;
use crate::party::{Party, PartyId};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CombatantSnapshot {
    pub name: String,
    pub hp: u16,
    pub max_hp: u16,
    pub defense_boost: u16,
    pub fainted: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PartySnapshot {
    pub id: PartyId,
    pub name: String,
    pub pokemon: Vec<CombatantSnapshot>,
    pub current_pokemon_index: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BattleSnapshot {
    pub battle_id: String,
    pub player1: PartySnapshot,
    pub player2: PartySnapshot,
    pub turn: u32,
    pub phase: BattlePhase,
    /// Messages produced by the action that led to this state.
    pub log: Vec<String>,
}

impl BattleSnapshot {
    pub fn party(&self, id: PartyId) -> &PartySnapshot {
        match id {
            PartyId::Player1 => &self.player1,
            PartyId::Player2 => &self.player2,
        }
    }
}

impl From<&Combatant> for CombatantSnapshot {
    fn from(combatant: &Combatant) -> Self {
        Self {
            name: combatant.name.clone(),
            hp: combatant.current_hp(),
            max_hp: combatant.max_hp(),
            defense_boost: combatant.defense_boost(),
            fainted: combatant.is_fainted(),
        }
    }
}

impl From<&Party> for PartySnapshot {
    fn from(party: &Party) -> Self {
        Self {
            id: party.id,
            name: party.name.clone(),
            pokemon: party.combatants().iter().map(CombatantSnapshot::from).collect(),
            current_pokemon_index: party.active_index(),
        }
    }
}

impl From<&BattleState> for BattleSnapshot {
    fn from(state: &BattleState) -> Self {
        Self {
            battle_id: state.battle_id.clone(),
            player1: PartySnapshot::from(state.party(PartyId::Player1)),
            player2: PartySnapshot::from(state.party(PartyId::Player2)),
            turn: state.turn_number(),
            phase: state.phase(),
            log: state
                .last_events()
                .iter()
                .filter_map(|event| event.format(state))
                .collect(),
        }
    }
}
