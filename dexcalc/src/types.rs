use std::str::FromStr;

use dexcalc_data::{
    Type,
    TypeChart,
};
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::error::CalcError;

/// Calculates the damage multiplier of an attacking type against a Mon with the given types.
///
/// Multipliers of each defending type multiply together, so the result is one of 0, 0.25, 0.5,
/// 1, 2, or 4 for at most two types. An empty type list is neutral.
pub fn calculate_type_effectiveness(attacking: Type, defending: &[Type]) -> f32 {
    calculate_type_effectiveness_with_chart(TypeChart::standard(), attacking, defending)
}

/// Same as [`calculate_type_effectiveness`], with an explicit chart.
pub fn calculate_type_effectiveness_with_chart(
    chart: &TypeChart,
    attacking: Type,
    defending: &[Type],
) -> f32 {
    defending.iter().fold(1f32, |multiplier, defending| {
        multiplier * chart.effectiveness(attacking, *defending).multiplier()
    })
}

/// The defensive profile of a Mon against every attacking type.
///
/// Neutral matchups are omitted. Entries are in canonical type order.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct TypeMatchups {
    pub weaknesses: IndexMap<Type, f32>,
    pub resistances: IndexMap<Type, f32>,
    pub immunities: Vec<Type>,
}

impl TypeMatchups {
    /// Checks if the Mon takes more than normal damage from the type.
    pub fn is_weak_to(&self, typ: Type) -> bool {
        self.weaknesses.contains_key(&typ)
    }

    /// Checks if the Mon resists or is immune to the type.
    pub fn resists_or_immune(&self, typ: Type) -> bool {
        self.resistances.contains_key(&typ) || self.immunities.contains(&typ)
    }
}

/// Calculates the weaknesses, resistances, and immunities of a Mon with the given types.
pub fn get_type_matchups(types: &[Type]) -> TypeMatchups {
    get_type_matchups_with_chart(TypeChart::standard(), types)
}

/// Same as [`get_type_matchups`], with an explicit chart.
pub fn get_type_matchups_with_chart(chart: &TypeChart, types: &[Type]) -> TypeMatchups {
    let mut matchups = TypeMatchups::default();
    for attacking in Type::all() {
        let multiplier = calculate_type_effectiveness_with_chart(chart, attacking, types);
        if multiplier == 0f32 {
            matchups.immunities.push(attacking);
        } else if multiplier > 1f32 {
            matchups.weaknesses.insert(attacking, multiplier);
        } else if multiplier < 1f32 {
            matchups.resistances.insert(attacking, multiplier);
        }
    }
    matchups
}

/// Parses type names, failing on the first unknown name.
pub fn parse_types<I, S>(names: I) -> Result<Vec<Type>, CalcError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            Type::from_str(name.trim()).map_err(|_| CalcError::UnknownType(name.to_owned()))
        })
        .collect()
}

/// Parses type names, skipping unknown names.
///
/// A skipped name contributes nothing to later calculations, which is the same as neutral
/// effectiveness.
pub fn parse_types_lenient<I, S>(names: I) -> Vec<Type>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref();
            match Type::from_str(name.trim()) {
                Ok(typ) => Some(typ),
                Err(_) => {
                    debug!("ignoring unknown type name {name:?}");
                    None
                }
            }
        })
        .collect()
}

/// Same as [`calculate_type_effectiveness`], but for type names.
///
/// An unknown attacking type is neutral against everything. Unknown defending types are ignored.
pub fn type_effectiveness_by_name<S>(attacking: &str, defending: &[S]) -> f32
where
    S: AsRef<str>,
{
    let attacking = match Type::from_str(attacking.trim()) {
        Ok(typ) => typ,
        Err(_) => {
            debug!("unknown attacking type name {attacking:?} is neutral");
            return 1f32;
        }
    };
    calculate_type_effectiveness(attacking, &parse_types_lenient(defending))
}

/// Same as [`get_type_matchups`], but for type names. Unknown names are ignored.
pub fn type_matchups_by_name<S>(types: &[S]) -> TypeMatchups
where
    S: AsRef<str>,
{
    get_type_matchups(&parse_types_lenient(types))
}

#[cfg(test)]
mod types_test {
    use ahash::HashMap;
    use dexcalc_data::{
        Type,
        TypeChart,
        TypeEffectiveness,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        error::CalcError,
        types::{
            calculate_type_effectiveness,
            calculate_type_effectiveness_with_chart,
            get_type_matchups,
            parse_types,
            parse_types_lenient,
            type_effectiveness_by_name,
            type_matchups_by_name,
        },
    };

    #[test]
    fn multiplies_across_defending_types() {
        assert_eq!(
            calculate_type_effectiveness(Type::Fire, &[Type::Grass, Type::Bug]),
            4f32
        );
        assert_eq!(
            calculate_type_effectiveness(Type::Fire, &[Type::Grass, Type::Water]),
            1f32
        );
        assert_eq!(
            calculate_type_effectiveness(Type::Fire, &[Type::Water, Type::Rock]),
            0.25
        );
        assert_eq!(
            calculate_type_effectiveness(Type::Ground, &[Type::Electric, Type::Flying]),
            0f32
        );
        assert_eq!(calculate_type_effectiveness(Type::Normal, &[Type::Ghost]), 0f32);
        assert_eq!(calculate_type_effectiveness(Type::Dragon, &[]), 1f32);
    }

    #[test]
    fn duplicate_defending_types_multiply() {
        assert_eq!(
            calculate_type_effectiveness(Type::Water, &[Type::Fire, Type::Fire]),
            4f32
        );
    }

    #[test]
    fn results_are_reachable_multipliers() {
        let reachable = [0f32, 0.25, 0.5, 1f32, 2f32, 4f32];
        for attacking in Type::all() {
            for primary in Type::all() {
                for secondary in Type::all() {
                    let multiplier =
                        calculate_type_effectiveness(attacking, &[primary, secondary]);
                    assert!(
                        reachable.contains(&multiplier),
                        "{attacking} vs {primary}/{secondary} = {multiplier}"
                    );
                }
            }
        }
    }

    #[test]
    fn uses_custom_chart() {
        let chart = TypeChart::from_filled(HashMap::from_iter([(
            Type::Fire,
            HashMap::from_iter([(Type::Water, TypeEffectiveness::Strong)]),
        )]));
        assert_eq!(
            calculate_type_effectiveness_with_chart(&chart, Type::Fire, &[Type::Water]),
            2f32
        );
        assert_eq!(
            calculate_type_effectiveness_with_chart(&chart, Type::Fire, &[Type::Grass]),
            1f32
        );
    }

    #[test]
    fn buckets_single_type_matchups() {
        let matchups = get_type_matchups(&[Type::Electric]);
        assert_eq!(
            matchups.weaknesses.into_iter().collect::<Vec<_>>(),
            [(Type::Ground, 2f32)]
        );
        assert_eq!(
            matchups.resistances.into_iter().collect::<Vec<_>>(),
            [
                (Type::Flying, 0.5),
                (Type::Steel, 0.5),
                (Type::Electric, 0.5),
            ]
        );
        assert!(matchups.immunities.is_empty());
    }

    #[test]
    fn buckets_dual_type_matchups() {
        let matchups = get_type_matchups(&[Type::Ground, Type::Flying]);
        assert_eq!(matchups.weaknesses.get(&Type::Ice), Some(&4f32));
        assert_eq!(matchups.weaknesses.get(&Type::Water), Some(&2f32));
        assert_eq!(matchups.weaknesses.get(&Type::Grass), None);
        assert!(matchups.resists_or_immune(Type::Electric));
        assert!(matchups.resists_or_immune(Type::Ground));
        assert_eq!(matchups.immunities, [Type::Ground, Type::Electric]);

        let matchups = get_type_matchups(&[Type::Normal, Type::Ghost]);
        assert_eq!(
            matchups.immunities,
            [Type::Normal, Type::Fighting, Type::Ghost]
        );
        assert_eq!(
            matchups.weaknesses.into_iter().collect::<Vec<_>>(),
            [(Type::Dark, 2f32)]
        );
    }

    #[test]
    fn neutral_matchups_are_omitted() {
        for types in [vec![], vec![Type::Water], vec![Type::Steel, Type::Fairy]] {
            let matchups = get_type_matchups(&types);
            let listed = matchups.weaknesses.len()
                + matchups.resistances.len()
                + matchups.immunities.len();
            let neutral = Type::all()
                .into_iter()
                .filter(|attacking| calculate_type_effectiveness(*attacking, &types) == 1f32)
                .count();
            assert_eq!(listed + neutral, 18);
        }
    }

    #[test]
    fn parses_types_strictly() {
        assert_eq!(
            parse_types(["Fire", " flying "]),
            Ok(vec![Type::Fire, Type::Flying])
        );
        assert_eq!(
            parse_types(["fire", "shadow"]),
            Err(CalcError::UnknownType("shadow".to_owned()))
        );
    }

    #[test]
    fn lenient_names_degrade_to_neutral() {
        assert_eq!(
            parse_types_lenient(["shadow", "grass", "???"]),
            [Type::Grass]
        );
        assert_eq!(type_effectiveness_by_name("fire", &["grass", "bug"]), 4f32);
        assert_eq!(type_effectiveness_by_name("fire", &["grass", "shadow"]), 2f32);
        assert_eq!(type_effectiveness_by_name("shadow", &["ghost"]), 1f32);
        assert_eq!(
            type_matchups_by_name(&["electric", "shadow"]),
            get_type_matchups(&[Type::Electric])
        );
    }
}
