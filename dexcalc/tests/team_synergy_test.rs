#[cfg(test)]
mod team_synergy_tests {
    use dexcalc::{
        Type,
        config::SynergyRules,
        synergy::{
            PLACEHOLDER_OFFENSIVE_SCORE,
            analyze_team_type_synergy,
            analyze_team_type_synergy_with_rules,
        },
        types::parse_types_lenient,
    };
    use dexcalc_test_utils::{
        assert_shared_weakness,
        assert_uncovered,
        setup_test_environment,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn six_fire_weak_members_share_weakness() {
        setup_test_environment();
        let team = vec![vec![Type::Grass]; 6];
        let synergy = analyze_team_type_synergy(&team);
        assert_shared_weakness(&synergy, Type::Fire, 6);
        assert_shared_weakness(&synergy, Type::Flying, 6);
    }

    #[test]
    fn two_fire_weak_members_are_below_threshold() {
        setup_test_environment();
        let synergy = analyze_team_type_synergy(&[
            vec![Type::Grass],
            vec![Type::Steel],
            vec![Type::Water],
        ]);
        assert_eq!(synergy.weakness_counts.get(&Type::Fire), Some(&2));
        assert!(!synergy.shared_weaknesses.contains_key(&Type::Fire));
    }

    #[test]
    fn threshold_does_not_scale_with_team_size() {
        setup_test_environment();
        let mut team = vec![vec![Type::Grass]; 3];
        team.extend(vec![vec![Type::Water]; 3]);
        let synergy = analyze_team_type_synergy(&team);
        assert_shared_weakness(&synergy, Type::Fire, 3);
    }

    #[test]
    fn balanced_team_scores_perfect_defense() {
        setup_test_environment();
        let team = [
            vec![Type::Steel, Type::Fairy],
            vec![Type::Water, Type::Ground],
            vec![Type::Fire, Type::Flying],
            vec![Type::Normal, Type::Ghost],
            vec![Type::Grass, Type::Poison],
            vec![Type::Dragon, Type::Fighting],
        ];
        let synergy = analyze_team_type_synergy(&team);
        assert!(synergy.shared_weaknesses.is_empty(), "{:?}", synergy.shared_weaknesses);
        assert!(synergy.uncovered_types.is_empty(), "{:?}", synergy.uncovered_types);
        assert_eq!(synergy.defensive_score, 100);
        assert_eq!(synergy.offensive_score, PLACEHOLDER_OFFENSIVE_SCORE);
    }

    #[test]
    fn monotype_team_is_penalized() {
        setup_test_environment();
        let team = vec![vec![Type::Normal]; 6];
        let synergy = analyze_team_type_synergy(&team);
        assert_shared_weakness(&synergy, Type::Fighting, 6);
        assert_uncovered(&synergy, Type::Fire);
        // Normal is only immune to ghost.
        assert_eq!(synergy.uncovered_types.len(), 17);
        assert_eq!(synergy.defensive_score, 0);
    }

    #[test]
    fn custom_penalties() {
        setup_test_environment();
        let team = vec![vec![Type::Normal]; 6];
        let synergy = analyze_team_type_synergy_with_rules(
            &team,
            &SynergyRules {
                shared_weakness_penalty: 10,
                uncovered_type_penalty: 1,
                max_score: 50,
                ..Default::default()
            },
        );
        assert_eq!(synergy.defensive_score, 50 - 10 - 17);
    }

    #[test]
    fn analyzes_team_from_type_names() {
        setup_test_environment();
        let team = [
            parse_types_lenient(["fire", "flying"]),
            parse_types_lenient(["Water"]),
            parse_types_lenient(["water", "shadow"]),
        ];
        let synergy = analyze_team_type_synergy(&team);
        assert_shared_weakness(&synergy, Type::Electric, 3);
    }
}
