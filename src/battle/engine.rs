//! Resolution rules: turn ownership, attack, defend, faint handling and win
//! detection.
//!
//! Every accepted action advances the turn counter by exactly one. A rejected
//! action returns an error and leaves the state untouched.

use crate::battle::state::{BattleEvent, BattleState, EventBus, PlayerAction};
use crate::errors::{BattleError, BattleResult};
use crate::party::PartyId;

/// Outcome of the damage formula for one hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRoll {
    pub damage: u16,
    pub boost_consumed: u16,
}

/// `offense + power - defense`, reduced by the defender's pending boost.
///
/// When a boost is consumed the result is floored at 1; otherwise it is
/// only clamped at 0.
pub fn calculate_damage(offense: u16, power: u16, defense: u16, boost: u16) -> DamageRoll {
    let base = i32::from(offense) + i32::from(power) - i32::from(defense);

    let damage = if boost > 0 {
        (base - i32::from(boost)).max(1)
    } else {
        base.max(0)
    };

    DamageRoll {
        damage: u16::try_from(damage).unwrap_or(u16::MAX),
        boost_consumed: boost,
    }
}

/// Checks that `party` may act right now.
pub fn validate_turn(state: &BattleState, party: PartyId) -> BattleResult<()> {
    if let Some(winner) = state.winner() {
        return Err(BattleError::BattleAlreadyOver { winner });
    }

    let owner = PartyId::for_turn(state.turn_number());
    if owner != party {
        return Err(BattleError::NotYourTurn {
            party,
            owner,
            turn: state.turn_number(),
        });
    }
    Ok(())
}

/// Validates and resolves one action for `party`.
pub fn submit_action(
    state: &mut BattleState,
    party: PartyId,
    action: PlayerAction,
) -> BattleResult<EventBus> {
    match action {
        PlayerAction::Attack => attack(state, party),
        PlayerAction::Defend => defend(state, party),
    }
}

/// The acting party's active combatant hits the opponent's active combatant
/// with the canonical move.
pub fn attack(state: &mut BattleState, party: PartyId) -> BattleResult<EventBus> {
    validate_turn(state, party)?;
    let opponent = party.opponent();

    let attacker = state
        .party(party)
        .active_combatant()
        .ok_or(BattleError::NoActiveCombatant(party))?;
    let defender = state
        .party(opponent)
        .active_combatant()
        .ok_or(BattleError::NoActiveCombatant(opponent))?;

    let move_used = state.rules.canonical_move();
    let offense = if move_used.special {
        attacker.special
    } else {
        attacker.attack
    };
    let attacker_name = attacker.name.clone();
    let defense = defender.defense(state.rules.defense_divisor);

    // All checks passed: from here on the action is accepted.
    let mut bus = EventBus::new();
    bus.push(BattleEvent::TurnStarted {
        turn_number: state.turn_number,
        party,
    });
    bus.push(BattleEvent::MoveUsed {
        party,
        attacker: attacker_name.clone(),
        move_name: move_used.name.clone(),
    });

    let defending_party = state.party_mut(opponent);
    let Some(defender) = defending_party.active_combatant_mut() else {
        return Err(BattleError::NoActiveCombatant(opponent));
    };
    let boost = defender.consume_defense_boost();
    let roll = calculate_damage(offense, move_used.power, defense, boost);
    if roll.boost_consumed > 0 {
        bus.push(BattleEvent::DefenseBoostConsumed {
            party: opponent,
            defender: defender.name.clone(),
            boost: roll.boost_consumed,
        });
    }

    let fainted = defender.take_damage(roll.damage);
    let defender_name = defender.name.clone();
    bus.push(BattleEvent::DamageDealt {
        party: opponent,
        target: defender_name.clone(),
        damage: roll.damage,
        remaining_hp: defender.current_hp(),
    });

    tracing::debug!(
        battle = %state.battle_id,
        turn = state.turn_number,
        attacker = %attacker_name,
        defender = %defender_name,
        damage = roll.damage,
        boost = roll.boost_consumed,
        "{} attacked {} with {}",
        attacker_name,
        defender_name,
        move_used.name
    );

    if fainted {
        tracing::info!(battle = %state.battle_id, party = %opponent, combatant = %defender_name, "combatant fainted");
        bus.push(BattleEvent::CombatantFainted {
            party: opponent,
            combatant: defender_name,
        });

        let defending_party = state.party_mut(opponent);
        if let Some(index) = defending_party.advance_active() {
            let replacement = defending_party.combatants()[index].name.clone();
            bus.push(BattleEvent::CombatantSwitchedIn {
                party: opponent,
                combatant: replacement,
                index,
            });
        }
    }

    if !state.party(opponent).has_remaining() {
        state.winner = Some(party);
        tracing::info!(battle = %state.battle_id, winner = %party, "battle over");
        bus.push(BattleEvent::PartyDefeated { party: opponent });
        bus.push(BattleEvent::BattleEnded { winner: party });
    }

    finish_action(state, &bus);
    Ok(bus)
}

/// The acting party's active combatant braces, stacking the defend boost
/// onto whatever it already has pending.
pub fn defend(state: &mut BattleState, party: PartyId) -> BattleResult<EventBus> {
    validate_turn(state, party)?;

    let boost = state.rules.defend_boost;
    let turn_number = state.turn_number;
    let Some(defender) = state.party_mut(party).active_combatant_mut() else {
        return Err(BattleError::NoActiveCombatant(party));
    };
    defender.raise_defense_boost(boost);
    let combatant = defender.name.clone();
    let pending = defender.defense_boost();

    tracing::debug!(
        battle = %state.battle_id,
        turn = turn_number,
        combatant = %combatant,
        boost = pending,
        "{} chose to defend",
        combatant
    );

    let mut bus = EventBus::new();
    bus.push(BattleEvent::TurnStarted { turn_number, party });
    bus.push(BattleEvent::DefenseRaised {
        party,
        combatant,
        boost: pending,
    });

    finish_action(state, &bus);
    Ok(bus)
}

fn finish_action(state: &mut BattleState, bus: &EventBus) {
    state.turn_number += 1;
    state.last_events = bus.events().to_vec();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::plain_hit(50, 40, 10, 0, 80)]
    #[case::boost_floors_at_one(50, 40, 10, 100, 1)]
    #[case::boost_partially_absorbs(90, 40, 10, 100, 20)]
    #[case::heavy_defender_without_boost(5, 40, 200, 0, 0)]
    #[case::heavy_defender_with_boost(5, 40, 200, 100, 1)]
    fn test_calculate_damage(
        #[case] offense: u16,
        #[case] power: u16,
        #[case] defense: u16,
        #[case] boost: u16,
        #[case] expected: u16,
    ) {
        let roll = calculate_damage(offense, power, defense, boost);
        assert_eq!(roll.damage, expected);
        assert_eq!(roll.boost_consumed, boost);
    }
}
