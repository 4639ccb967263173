#[cfg(test)]
mod tests {
    use crate::battle::engine::attack;
    use crate::battle::state::BattleEvent;
    use crate::battle::tests::common::{assert_ok, create_test_battle, TestCombatantBuilder};
    use crate::party::PartyId;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_plain_attack_damage() {
        // Arrange: attack 50 vs mass 100 (defense 10)
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("Pikachu").with_attack(50).build()],
            vec![TestCombatantBuilder::new("Squirtle")
                .with_max_hp(200)
                .with_mass(100)
                .build()],
        );

        // Act
        let event_bus = assert_ok(attack(&mut battle_state, PartyId::Player1));

        // Assert: 50 + 40 - 10 = 80
        let defender = battle_state.party(PartyId::Player2).active_combatant().unwrap();
        assert_eq!(defender.current_hp(), 120);
        assert_eq!(battle_state.turn_number(), 2);
        assert!(event_bus.events().contains(&BattleEvent::DamageDealt {
            party: PartyId::Player2,
            target: "Squirtle".to_string(),
            damage: 80,
            remaining_hp: 120,
        }));
    }

    #[test]
    fn test_attack_leaves_attacker_untouched() {
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("Pikachu").build()],
            vec![TestCombatantBuilder::new("Squirtle").with_max_hp(200).build()],
        );
        let attacker_before = battle_state
            .party(PartyId::Player1)
            .active_combatant()
            .cloned();

        assert_ok(attack(&mut battle_state, PartyId::Player1));

        assert_eq!(
            battle_state.party(PartyId::Player1).active_combatant().cloned(),
            attacker_before
        );
    }

    #[test]
    fn test_attack_only_hits_the_active_combatant() {
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("Pikachu").build()],
            vec![
                TestCombatantBuilder::new("Squirtle").with_max_hp(200).build(),
                TestCombatantBuilder::new("Meowth").build(),
            ],
        );

        assert_ok(attack(&mut battle_state, PartyId::Player1));

        let bench = &battle_state.party(PartyId::Player2).combatants()[1];
        assert_eq!(bench.current_hp(), bench.max_hp());
    }

    #[rstest]
    #[case::light_defender(100, 100, 130)]
    #[case::defense_cancels_power(20, 600, 0)]
    #[case::defense_exceeds_offense(5, 2000, 0)]
    fn test_unboosted_damage_clamps_at_zero(
        #[case] attack_stat: u16,
        #[case] defender_mass: u16,
        #[case] expected_damage: u16,
    ) {
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("Attacker")
                .with_attack(attack_stat)
                .build()],
            vec![TestCombatantBuilder::new("Defender")
                .with_max_hp(300)
                .with_mass(defender_mass)
                .build()],
        );

        assert_ok(attack(&mut battle_state, PartyId::Player1));

        let defender = battle_state.party(PartyId::Player2).active_combatant().unwrap();
        assert_eq!(defender.current_hp(), 300 - expected_damage);
        // Accepted even when no damage lands
        assert_eq!(battle_state.turn_number(), 2);
    }

    #[test]
    fn test_attack_event_sequence() {
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("Pikachu").build()],
            vec![TestCombatantBuilder::new("Squirtle").with_max_hp(200).build()],
        );

        let event_bus = assert_ok(attack(&mut battle_state, PartyId::Player1));
        event_bus.print_debug_with_message("Events for test_attack_event_sequence:");

        assert_eq!(
            event_bus.events(),
            &[
                BattleEvent::TurnStarted {
                    turn_number: 1,
                    party: PartyId::Player1,
                },
                BattleEvent::MoveUsed {
                    party: PartyId::Player1,
                    attacker: "Pikachu".to_string(),
                    move_name: "Tackle".to_string(),
                },
                BattleEvent::DamageDealt {
                    party: PartyId::Player2,
                    target: "Squirtle".to_string(),
                    damage: 80,
                    remaining_hp: 120,
                },
            ]
        );
        assert_eq!(battle_state.last_events(), event_bus.events());
    }
}
