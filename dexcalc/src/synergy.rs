use ahash::{
    HashSet,
    HashSetExt,
};
use dexcalc_data::{
    Type,
    TypeChart,
};
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::{
    config::SynergyRules,
    types::get_type_matchups_with_chart,
};

/// Offensive score reported until offensive coverage feeds into synergy analysis.
///
/// This value is not computed. Do not read it as a measure of the team's offense.
pub const PLACEHOLDER_OFFENSIVE_SCORE: u32 = 100;

/// Type synergy of a whole team.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTypeSynergy {
    /// Attacking types that enough members are weak to, with the number of weak members.
    pub shared_weaknesses: IndexMap<Type, usize>,
    /// Attacking types that no member resists or is immune to.
    pub uncovered_types: Vec<Type>,
    pub defensive_score: u32,
    /// Always [`PLACEHOLDER_OFFENSIVE_SCORE`].
    pub offensive_score: u32,
    /// Number of weak members for every attacking type at least one member is weak to.
    pub weakness_counts: IndexMap<Type, usize>,
}

/// Analyzes the defensive type synergy of a team, where each member is a list of types.
pub fn analyze_team_type_synergy<T>(team: &[T]) -> TeamTypeSynergy
where
    T: AsRef<[Type]>,
{
    analyze_team_type_synergy_with_rules(team, &SynergyRules::default())
}

/// Same as [`analyze_team_type_synergy`], with explicit scoring rules.
pub fn analyze_team_type_synergy_with_rules<T>(team: &[T], rules: &SynergyRules) -> TeamTypeSynergy
where
    T: AsRef<[Type]>,
{
    analyze_team_type_synergy_with_chart(TypeChart::standard(), team, rules)
}

/// Same as [`analyze_team_type_synergy_with_rules`], with an explicit chart.
pub fn analyze_team_type_synergy_with_chart<T>(
    chart: &TypeChart,
    team: &[T],
    rules: &SynergyRules,
) -> TeamTypeSynergy
where
    T: AsRef<[Type]>,
{
    let mut weakness_counts = IndexMap::<Type, usize>::new();
    let mut covered = HashSet::new();
    for member in team {
        let matchups = get_type_matchups_with_chart(chart, member.as_ref());
        for typ in matchups.weaknesses.keys() {
            *weakness_counts.entry(*typ).or_default() += 1;
        }
        covered.extend(matchups.resistances.keys().copied());
        covered.extend(matchups.immunities.iter().copied());
    }
    weakness_counts.sort_unstable_keys();

    let shared_weaknesses = weakness_counts
        .iter()
        .filter(|(_, count)| **count >= rules.shared_weakness_threshold)
        .map(|(typ, count)| (*typ, *count))
        .collect::<IndexMap<_, _>>();
    let uncovered_types = Type::all()
        .into_iter()
        .filter(|typ| !covered.contains(typ))
        .collect::<Vec<_>>();

    let penalty = rules
        .shared_weakness_penalty
        .saturating_mul(shared_weaknesses.len() as u32)
        .saturating_add(
            rules
                .uncovered_type_penalty
                .saturating_mul(uncovered_types.len() as u32),
        );
    let defensive_score = rules.max_score.saturating_sub(penalty);
    debug!(
        "team of {} has {} shared weaknesses and {} uncovered types, defensive score {defensive_score}",
        team.len(),
        shared_weaknesses.len(),
        uncovered_types.len(),
    );

    TeamTypeSynergy {
        shared_weaknesses,
        uncovered_types,
        defensive_score,
        offensive_score: PLACEHOLDER_OFFENSIVE_SCORE,
        weakness_counts,
    }
}
