use crate::errors::BattleError;
use crate::party::{Party, PartyId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two actions a party can submit on its turn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlayerAction {
    Attack,
    Defend,
}

impl FromStr for PlayerAction {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attack" => Ok(PlayerAction::Attack),
            "defend" => Ok(PlayerAction::Defend),
            _ => Err(BattleError::InvalidAction(s.to_string())),
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Attack => write!(f, "attack"),
            PlayerAction::Defend => write!(f, "defend"),
        }
    }
}

/// The single attacking move every combatant knows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub name: String,
    pub power: u16,
    pub special: bool,
}

/// Tunable numbers of the resolution rules.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleRules {
    /// Power of the canonical move, added to the attacker's attack.
    pub move_power: u16,
    /// Boost added to the defender's pending defense by one Defend.
    pub defend_boost: u16,
    /// Defense is `mass / defense_divisor`.
    pub defense_divisor: u16,
}

impl Default for BattleRules {
    fn default() -> Self {
        Self {
            move_power: 40,
            defend_boost: 100,
            defense_divisor: 10,
        }
    }
}

impl BattleRules {
    pub fn canonical_move(&self) -> Move {
        Move {
            name: "Tackle".to_string(),
            power: self.move_power,
            special: false,
        }
    }
}

/// Where the battle stands between actions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BattlePhase {
    AwaitingAction { turn_owner: PartyId },
    BattleOver { winner: PartyId },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    TurnStarted {
        turn_number: u32,
        party: PartyId,
    },
    MoveUsed {
        party: PartyId,
        attacker: String,
        move_name: String,
    },
    DefenseBoostConsumed {
        party: PartyId,
        defender: String,
        boost: u16,
    },
    DamageDealt {
        party: PartyId,
        target: String,
        damage: u16,
        remaining_hp: u16,
    },
    DefenseRaised {
        party: PartyId,
        combatant: String,
        boost: u16,
    },
    CombatantFainted {
        party: PartyId,
        combatant: String,
    },
    CombatantSwitchedIn {
        party: PartyId,
        combatant: String,
        index: usize,
    },
    PartyDefeated {
        party: PartyId,
    },
    BattleEnded {
        winner: PartyId,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string using battle context.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self, battle_state: &BattleState) -> Option<String> {
        match self {
            BattleEvent::TurnStarted { turn_number, .. } => {
                Some(format!("=== Turn {} ===", turn_number))
            }
            BattleEvent::MoveUsed {
                party,
                attacker,
                move_name,
            } => Some(format!(
                "{}'s {} used {}!",
                battle_state.party(*party).name,
                attacker,
                move_name
            )),
            BattleEvent::DefenseBoostConsumed { defender, .. } => {
                Some(format!("{} braced for the hit!", defender))
            }
            BattleEvent::DamageDealt { target, damage, .. } => {
                Some(format!("{} took {} damage!", target, damage))
            }
            BattleEvent::DefenseRaised { combatant, .. } => Some(format!(
                "{} chose to defend! Its defense will be boosted on the next attack.",
                combatant
            )),
            BattleEvent::CombatantFainted { combatant, .. } => {
                Some(format!("{} fainted!", combatant))
            }
            BattleEvent::CombatantSwitchedIn {
                party, combatant, ..
            } => Some(format!(
                "{} sent out {}!",
                battle_state.party(*party).name,
                combatant
            )),
            BattleEvent::PartyDefeated { party } => Some(format!(
                "{} has no remaining creatures!",
                battle_state.party(*party).name
            )),
            BattleEvent::BattleEnded { winner } => Some(format!(
                "{} has won the battle!",
                battle_state.party(*winner).name
            )),
        }
    }
}

/// Collects the events produced while resolving one action.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl fmt::Display for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// The authoritative state of one battle.
///
/// Only the engine mutates it; everyone else reads through the accessors or
/// a `BattleSnapshot`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BattleState {
    pub battle_id: String,
    pub(crate) parties: [Party; 2],
    pub(crate) turn_number: u32,
    pub rules: BattleRules,
    pub(crate) winner: Option<PartyId>,
    pub(crate) last_events: Vec<BattleEvent>,
}

impl BattleState {
    /// Starts a battle at turn 1, so player1 moves first.
    pub fn new(id: String, player1: Party, player2: Party, rules: BattleRules) -> Self {
        debug_assert_eq!(player1.id, PartyId::Player1);
        debug_assert_eq!(player2.id, PartyId::Player2);
        Self {
            battle_id: id,
            parties: [player1, player2],
            turn_number: 1,
            rules,
            winner: None,
            last_events: Vec::new(),
        }
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn party(&self, id: PartyId) -> &Party {
        &self.parties[Self::slot(id)]
    }

    pub(crate) fn party_mut(&mut self, id: PartyId) -> &mut Party {
        &mut self.parties[Self::slot(id)]
    }

    pub fn parties(&self) -> &[Party; 2] {
        &self.parties
    }

    pub fn winner(&self) -> Option<PartyId> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Whose move it is, derived from the turn counter's parity, or the
    /// winner once the battle has ended.
    pub fn phase(&self) -> BattlePhase {
        match self.winner {
            Some(winner) => BattlePhase::BattleOver { winner },
            None => BattlePhase::AwaitingAction {
                turn_owner: PartyId::for_turn(self.turn_number),
            },
        }
    }

    /// Events produced by the most recently accepted action.
    pub fn last_events(&self) -> &[BattleEvent] {
        &self.last_events
    }

    fn slot(id: PartyId) -> usize {
        match id {
            PartyId::Player1 => 0,
            PartyId::Player2 => 1,
        }
    }
}

impl fmt::Display for BattleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Battle {} - turn {}", self.battle_id, self.turn_number)?;
        for party in &self.parties {
            write!(f, "{}", party)?;
        }
        match self.phase() {
            BattlePhase::AwaitingAction { turn_owner } => {
                write!(f, "Waiting for {}", self.party(turn_owner).name)
            }
            BattlePhase::BattleOver { winner } => {
                write!(f, "Battle over - {} won", self.party(winner).name)
            }
        }
    }
}
