use crate::battle::state::{BattleRules, BattleState};
use crate::catalog::InMemoryCatalog;
use crate::combatant::Combatant;
use crate::errors::BattleResult;
use crate::party::{Party, PartyId};
use schema::{CreatureStats, PokemonType};

/// A builder for creating test combatants with common defaults.
///
/// Defaults: 100 max HP at full health, attack 50, mass 100 (defense 10).
///
/// # Example
/// ```ignore
/// let combatant = TestCombatantBuilder::new("Pikachu")
///     .with_attack(55)
///     .with_hp(5)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    name: String,
    max_hp: u16,
    current_hp: Option<u16>,
    attack: u16,
    mass: u16,
}

impl TestCombatantBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            max_hp: 100,
            current_hp: None,
            attack: 50,
            mass: 100,
        }
    }

    pub fn with_max_hp(mut self, max_hp: u16) -> Self {
        self.max_hp = max_hp;
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn with_attack(mut self, attack: u16) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_mass(mut self, mass: u16) -> Self {
        self.mass = mass;
        self
    }

    pub fn build(self) -> Combatant {
        let stats = CreatureStats {
            number: 0,
            name: self.name,
            height: 10,
            mass: self.mass,
            hp: self.max_hp,
            attack: self.attack,
            special: self.attack,
            speed: 50,
            types: vec![PokemonType::Normal],
            abilities: Vec::new(),
        };
        let mut combatant = Combatant::from_stats(&stats);
        if let Some(hp) = self.current_hp {
            combatant.set_hp(hp);
        }
        combatant
    }
}

/// Catalog record with the given battle numbers; special mirrors attack.
pub fn creature(number: u16, name: &str, hp: u16, attack: u16, mass: u16) -> CreatureStats {
    CreatureStats {
        number,
        name: name.to_string(),
        height: 5,
        mass,
        hp,
        attack,
        special: attack,
        speed: 50,
        types: vec![PokemonType::Normal],
        abilities: Vec::new(),
    }
}

/// A small catalog with real first-generation base stats.
pub fn test_catalog() -> InMemoryCatalog {
    InMemoryCatalog::from_stats(vec![
        creature(1, "bulbasaur", 45, 49, 69),
        creature(4, "charmander", 39, 52, 85),
        creature(7, "squirtle", 44, 48, 90),
        creature(25, "pikachu", 35, 55, 60),
        creature(39, "jigglypuff", 115, 45, 55),
        creature(52, "meowth", 40, 45, 42),
        creature(122, "mr-mime", 40, 45, 545),
        creature(143, "snorlax", 160, 110, 4600),
    ])
}

pub fn create_test_party(id: PartyId, combatants: Vec<Combatant>) -> Party {
    Party::new(id, id.default_display_name().to_string(), combatants)
}

/// Creates a battle at turn 1 with default rules.
pub fn create_test_battle(p1: Vec<Combatant>, p2: Vec<Combatant>) -> BattleState {
    BattleState::new(
        "test_battle".to_string(),
        create_test_party(PartyId::Player1, p1),
        create_test_party(PartyId::Player2, p2),
        BattleRules::default(),
    )
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
