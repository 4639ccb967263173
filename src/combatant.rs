use schema::CreatureStats;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single creature's mutable in-battle state.
///
/// Attack, special and speed are copied from the catalog and never change
/// during a battle. `current_hp` stays within `0..=max_hp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    current_hp: u16,
    max_hp: u16,
    pub attack: u16,
    pub special: u16,
    pub speed: u16,
    pub mass: u16,
    defense_boost: u16,
    placeholder: bool,
}

impl Combatant {
    /// Creates a fresh combatant at full hit points with no defense boost.
    pub fn from_stats(stats: &CreatureStats) -> Self {
        Self {
            name: stats.display_name(),
            current_hp: stats.hp,
            max_hp: stats.hp,
            attack: stats.attack,
            special: stats.special,
            speed: stats.speed,
            mass: stats.mass,
            defense_boost: 0,
            placeholder: false,
        }
    }

    /// An already-fainted stand-in for a creature the catalog could not
    /// resolve. It can never become active.
    pub fn placeholder(identifier: &str) -> Self {
        Self {
            name: identifier.trim().to_string(),
            current_hp: 0,
            max_hp: 0,
            attack: 0,
            special: 0,
            speed: 0,
            mass: 0,
            defense_boost: 0,
            placeholder: true,
        }
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    pub fn defense_boost(&self) -> u16 {
        self.defense_boost
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Defense derived from mass: `mass / divisor`, floored.
    pub fn defense(&self, divisor: u16) -> u16 {
        self.mass / divisor.max(1)
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Applies damage, flooring hit points at 0.
    /// Returns true if this damage caused the combatant to faint.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        let was_fainted = self.is_fainted();
        self.current_hp = self.current_hp.saturating_sub(damage);
        !was_fainted && self.is_fainted()
    }

    /// Stacks `amount` onto the pending defense boost.
    pub fn raise_defense_boost(&mut self, amount: u16) {
        self.defense_boost = self.defense_boost.saturating_add(amount);
    }

    /// Removes and returns the pending defense boost.
    pub fn consume_defense_boost(&mut self) -> u16 {
        std::mem::take(&mut self.defense_boost)
    }

    #[cfg(test)]
    pub(crate) fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.max_hp);
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{} HP)", self.name, self.current_hp, self.max_hp)?;
        if self.defense_boost > 0 {
            write!(f, " [guarding +{}]", self.defense_boost)?;
        }
        if self.placeholder {
            write!(f, " [unresolved]")?;
        }
        Ok(())
    }
}
