use dexcalc::{
    Type,
    synergy::TeamTypeSynergy,
};
use pretty_assertions::assert_eq;

/// [`assert`]s that the team shares a weakness to the type with the given number of weak members.
#[track_caller]
pub fn assert_shared_weakness(synergy: &TeamTypeSynergy, typ: Type, members: usize) {
    assert_eq!(
        synergy.shared_weaknesses.get(&typ).copied(),
        Some(members),
        "expected {members} members weak to {typ} in {:?}",
        synergy.shared_weaknesses
    );
}

/// [`assert`]s that no team member resists or is immune to the type.
#[track_caller]
pub fn assert_uncovered(synergy: &TeamTypeSynergy, typ: Type) {
    assert!(
        synergy.uncovered_types.contains(&typ),
        "expected {typ} to be uncovered in {:?}",
        synergy.uncovered_types
    );
}
