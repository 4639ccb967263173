//! A module for defining automatic action choices, used by the demo runner
//! to play both sides of a battle.

use crate::battle::engine::calculate_damage;
use crate::battle::state::{BattleState, PlayerAction};
use crate::party::PartyId;
use rand::Rng;

/// Attacks whenever that is clearly right, otherwise defends now and then.
#[derive(Debug, Clone, Copy)]
pub struct GuardingAI {
    /// Probability of defending when no rule forces an attack.
    pub defend_chance: f64,
}

impl Default for GuardingAI {
    fn default() -> Self {
        Self {
            defend_chance: 0.25,
        }
    }
}

impl GuardingAI {
    pub fn new(defend_chance: f64) -> Self {
        Self {
            defend_chance: defend_chance.clamp(0.0, 1.0),
        }
    }

    /// Inspects the battle state and decides on the next action for `party`.
    ///
    /// Attacks when the hit would knock out the opposing active combatant or
    /// when our own combatant already has a boost pending.
    pub fn decide_action<R: Rng + ?Sized>(
        &self,
        party: PartyId,
        state: &BattleState,
        rng: &mut R,
    ) -> PlayerAction {
        let (Some(own), Some(target)) = (
            state.party(party).active_combatant(),
            state.party(party.opponent()).active_combatant(),
        ) else {
            return PlayerAction::Attack;
        };

        if own.defense_boost() > 0 {
            return PlayerAction::Attack;
        }

        let rules = &state.rules;
        let roll = calculate_damage(
            own.attack,
            rules.move_power,
            target.defense(rules.defense_divisor),
            target.defense_boost(),
        );
        if roll.damage >= target.current_hp() {
            return PlayerAction::Attack;
        }

        if rng.random_bool(self.defend_chance) {
            PlayerAction::Defend
        } else {
            PlayerAction::Attack
        }
    }
}
