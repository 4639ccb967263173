use crate::catalog::CreatureCatalog;
use crate::combatant::Combatant;
use crate::errors::{BattleError, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one side of the battle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PartyId {
    Player1,
    Player2,
}

impl PartyId {
    pub const BOTH: [PartyId; 2] = [PartyId::Player1, PartyId::Player2];

    pub fn opponent(self) -> PartyId {
        match self {
            PartyId::Player1 => PartyId::Player2,
            PartyId::Player2 => PartyId::Player1,
        }
    }

    /// Turn ownership is a pure function of parity: odd turns belong to
    /// player1, even turns to player2.
    pub fn for_turn(turn: u32) -> PartyId {
        if turn % 2 == 1 {
            PartyId::Player1
        } else {
            PartyId::Player2
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PartyId::Player1 => "player1",
            PartyId::Player2 => "player2",
        }
    }

    pub fn default_display_name(self) -> &'static str {
        match self {
            PartyId::Player1 => "Player 1",
            PartyId::Player2 => "Player 2",
        }
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartyId {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "player1" => Ok(PartyId::Player1),
            "player2" => Ok(PartyId::Player2),
            _ => Err(BattleError::UnknownParty(s.to_string())),
        }
    }
}

/// What to do with a roster slot whose creature the catalog cannot resolve.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RosterPolicy {
    /// Reject the whole battle-creation request.
    #[default]
    Reject,
    /// Fill the slot with an already-fainted placeholder combatant.
    Placeholder,
}

impl FromStr for RosterPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(RosterPolicy::Reject),
            "placeholder" => Ok(RosterPolicy::Placeholder),
            other => Err(format!("unknown roster policy '{}'", other)),
        }
    }
}

/// One side's ordered roster of combatants plus its identity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    combatants: Vec<Combatant>,
    // Lowest index with hit points left, or `combatants.len()` once every
    // combatant has fainted.
    active_index: usize,
}

impl Party {
    pub fn new(id: PartyId, name: String, combatants: Vec<Combatant>) -> Self {
        let active_index = combatants
            .iter()
            .position(|c| !c.is_fainted())
            .unwrap_or(combatants.len());

        Party {
            id,
            name,
            combatants,
            active_index,
        }
    }

    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Get the currently active combatant, if any remain.
    pub fn active_combatant(&self) -> Option<&Combatant> {
        self.combatants.get(self.active_index)
    }

    /// Get the currently active combatant mutably.
    pub fn active_combatant_mut(&mut self) -> Option<&mut Combatant> {
        self.combatants.get_mut(self.active_index)
    }

    /// True while at least one combatant has hit points left.
    pub fn has_remaining(&self) -> bool {
        self.combatants.iter().any(|c| !c.is_fainted())
    }

    /// Moves the active slot forward to the next combatant with hit points
    /// left, or past the end when none remains. Never moves backwards.
    ///
    /// Returns the new active index when a replacement was found.
    pub fn advance_active(&mut self) -> Option<usize> {
        let next = self
            .combatants
            .iter()
            .enumerate()
            .skip(self.active_index + 1)
            .find(|(_, c)| !c.is_fainted())
            .map(|(i, _)| i);

        self.active_index = next.unwrap_or(self.combatants.len());
        next
    }

    #[cfg(test)]
    pub(crate) fn combatants_mut(&mut self) -> &mut [Combatant] {
        &mut self.combatants
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.id)?;
        for (i, combatant) in self.combatants.iter().enumerate() {
            let marker = if i == self.active_index { "*" } else { " " };
            writeln!(f, " {}{}. {}", marker, i + 1, combatant)?;
        }
        Ok(())
    }
}

/// Resolves every identifier through the catalog and builds a party with
/// each combatant at full hit points.
///
/// Unresolvable identifiers are handled according to `policy`. A party that
/// ends up with no usable combatant is always rejected.
pub fn build_party(
    catalog: &dyn CreatureCatalog,
    id: PartyId,
    display_name: &str,
    identifiers: &[String],
    policy: RosterPolicy,
) -> Result<Party, RosterError> {
    let mut combatants = Vec::with_capacity(identifiers.len());

    for (slot, identifier) in identifiers.iter().enumerate() {
        match catalog.lookup(identifier) {
            Ok(stats) => combatants.push(Combatant::from_stats(&stats)),
            Err(source) => match policy {
                RosterPolicy::Reject => {
                    return Err(RosterError::Unresolved {
                        party: id,
                        slot,
                        identifier: identifier.clone(),
                        source,
                    });
                }
                RosterPolicy::Placeholder => {
                    tracing::warn!(
                        party = %id,
                        slot,
                        identifier = %identifier,
                        error = %source,
                        "unresolved creature replaced by a fainted placeholder"
                    );
                    combatants.push(Combatant::placeholder(identifier));
                }
            },
        }
    }

    let party = Party::new(id, display_name.to_string(), combatants);
    if !party.has_remaining() {
        return Err(RosterError::EmptyRoster(id));
    }
    Ok(party)
}
