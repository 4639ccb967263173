#[cfg(test)]
mod tests {
    use crate::battle::engine::{attack, defend};
    use crate::battle::state::BattleEvent;
    use crate::battle::tests::common::{assert_ok, create_test_battle, TestCombatantBuilder};
    use crate::party::PartyId;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defend_raises_boost_without_damage() {
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("Pikachu").build()],
            vec![TestCombatantBuilder::new("Squirtle").build()],
        );

        let event_bus = assert_ok(defend(&mut battle_state, PartyId::Player1));

        let defender = battle_state.party(PartyId::Player1).active_combatant().unwrap();
        assert_eq!(defender.defense_boost(), 100);
        assert_eq!(defender.current_hp(), defender.max_hp());
        let opponent = battle_state.party(PartyId::Player2).active_combatant().unwrap();
        assert_eq!(opponent.current_hp(), opponent.max_hp());
        assert_eq!(battle_state.turn_number(), 2);
        assert!(event_bus.events().contains(&BattleEvent::DefenseRaised {
            party: PartyId::Player1,
            combatant: "Pikachu".to_string(),
            boost: 100,
        }));
    }

    #[test]
    fn test_boost_reduces_damage_to_floor_of_one() {
        // Arrange: player1 attacks (turn 1), player2 defends (turn 2)
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("Pikachu")
                .with_attack(50)
                .with_max_hp(300)
                .build()],
            vec![TestCombatantBuilder::new("Squirtle")
                .with_max_hp(200)
                .with_mass(100)
                .build()],
        );
        assert_ok(attack(&mut battle_state, PartyId::Player1));
        assert_ok(defend(&mut battle_state, PartyId::Player2));

        // Act: 80 - 100 = -20, clamped to 1
        let event_bus = assert_ok(attack(&mut battle_state, PartyId::Player1));

        // Assert
        let defender = battle_state.party(PartyId::Player2).active_combatant().unwrap();
        assert_eq!(defender.current_hp(), 200 - 80 - 1);
        assert_eq!(defender.defense_boost(), 0);
        assert!(event_bus.events().contains(&BattleEvent::DefenseBoostConsumed {
            party: PartyId::Player2,
            defender: "Squirtle".to_string(),
            boost: 100,
        }));
    }

    #[test]
    fn test_boost_is_consumed_exactly_once() {
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("Pikachu")
                .with_max_hp(300)
                .with_mass(100)
                .build()],
            vec![TestCombatantBuilder::new("Squirtle")
                .with_max_hp(300)
                .with_mass(100)
                .build()],
        );

        assert_ok(defend(&mut battle_state, PartyId::Player1)); // turn 1
        assert_ok(attack(&mut battle_state, PartyId::Player2)); // turn 2: boosted hit
        let after_boosted_hit = battle_state
            .party(PartyId::Player1)
            .active_combatant()
            .unwrap()
            .current_hp();
        assert_eq!(after_boosted_hit, 299);

        assert_ok(attack(&mut battle_state, PartyId::Player1)); // turn 3
        assert_ok(attack(&mut battle_state, PartyId::Player2)); // turn 4: no boost left

        let pikachu = battle_state.party(PartyId::Player1).active_combatant().unwrap();
        assert_eq!(pikachu.defense_boost(), 0);
        assert_eq!(pikachu.current_hp(), 299 - 80);
    }

    #[test]
    fn test_partial_absorption_keeps_remaining_damage() {
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("Snorlax")
                .with_attack(150)
                .with_max_hp(300)
                .build()],
            vec![TestCombatantBuilder::new("Squirtle")
                .with_max_hp(300)
                .with_mass(100)
                .build()],
        );
        assert_ok(attack(&mut battle_state, PartyId::Player1)); // 150 + 40 - 10 = 180
        assert_ok(defend(&mut battle_state, PartyId::Player2));

        assert_ok(attack(&mut battle_state, PartyId::Player1)); // 180 - 100 = 80

        let defender = battle_state.party(PartyId::Player2).active_combatant().unwrap();
        assert_eq!(defender.current_hp(), 300 - 180 - 80);
    }

    #[test]
    fn test_repeated_defends_stack_until_hit() {
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("Pikachu").with_attack(250).build()],
            vec![TestCombatantBuilder::new("Squirtle")
                .with_max_hp(500)
                .with_mass(100)
                .build()],
        );

        assert_ok(defend(&mut battle_state, PartyId::Player1));
        assert_ok(defend(&mut battle_state, PartyId::Player2));
        assert_ok(defend(&mut battle_state, PartyId::Player1));
        assert_ok(defend(&mut battle_state, PartyId::Player2));
        assert_eq!(
            battle_state
                .party(PartyId::Player2)
                .active_combatant()
                .unwrap()
                .defense_boost(),
            200
        );

        // 250 + 40 - 10 - 200 = 80
        assert_ok(attack(&mut battle_state, PartyId::Player1));
        let squirtle = battle_state.party(PartyId::Player2).active_combatant().unwrap();
        assert_eq!(squirtle.current_hp(), 420);
        assert_eq!(squirtle.defense_boost(), 0);
    }

    #[test]
    fn test_boost_stays_with_the_combatant_that_defended() {
        // A boosted combatant that faints takes its boost with it; the
        // replacement starts unboosted.
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("Snorlax")
                .with_attack(200)
                .with_max_hp(500)
                .build()],
            vec![
                TestCombatantBuilder::new("Squirtle").with_max_hp(50).build(),
                TestCombatantBuilder::new("Meowth").build(),
            ],
        );
        assert_ok(defend(&mut battle_state, PartyId::Player1));
        assert_ok(defend(&mut battle_state, PartyId::Player2));

        // 200 + 40 - 10 - 100 = 130 >= 50
        assert_ok(attack(&mut battle_state, PartyId::Player1));

        let party2 = battle_state.party(PartyId::Player2);
        assert!(party2.combatants()[0].is_fainted());
        assert_eq!(party2.active_combatant().unwrap().name, "Meowth");
        assert_eq!(party2.active_combatant().unwrap().defense_boost(), 0);
    }
}
