use std::fmt::{
    self,
    Display,
};

use dexcalc_data::{
    Type,
    TypeChart,
};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

use crate::types::calculate_type_effectiveness_with_chart;

/// A combination of one or two defending types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefendingTypes {
    pub primary: Type,
    pub secondary: Option<Type>,
}

impl DefendingTypes {
    pub fn single(primary: Type) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn dual(primary: Type, secondary: Type) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// The types as a list, for effectiveness calculations.
    pub fn types(&self) -> Vec<Type> {
        [Some(self.primary), self.secondary]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Every single type, followed by every ordered pair of distinct types.
    pub fn all() -> impl Iterator<Item = DefendingTypes> {
        Type::all().into_iter().map(Self::single).chain(
            Type::all()
                .into_iter()
                .cartesian_product(Type::all())
                .filter(|(primary, secondary)| primary != secondary)
                .map(|(primary, secondary)| Self::dual(primary, secondary)),
        )
    }
}

impl Display for DefendingTypes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{secondary}", self.primary),
            None => write!(f, "{}", self.primary),
        }
    }
}

impl Serialize for DefendingTypes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Defending type combinations grouped by how well a moveset hits them.
///
/// Each bucket maps an attacking type to the combinations it hits best. Every combination is
/// listed exactly once across all buckets.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffensiveCoverage {
    pub super_effective: IndexMap<Type, Vec<DefendingTypes>>,
    pub neutral: IndexMap<Type, Vec<DefendingTypes>>,
    pub not_very_effective: IndexMap<Type, Vec<DefendingTypes>>,
    pub no_effect: IndexMap<Type, Vec<DefendingTypes>>,
}

impl OffensiveCoverage {
    fn bucket_mut(&mut self, multiplier: f32) -> &mut IndexMap<Type, Vec<DefendingTypes>> {
        if multiplier > 1f32 {
            &mut self.super_effective
        } else if multiplier == 1f32 {
            &mut self.neutral
        } else if multiplier > 0f32 {
            &mut self.not_very_effective
        } else {
            &mut self.no_effect
        }
    }

    /// The number of combinations in all buckets.
    pub fn len(&self) -> usize {
        [
            &self.super_effective,
            &self.neutral,
            &self.not_very_effective,
            &self.no_effect,
        ]
        .into_iter()
        .flat_map(|bucket| bucket.values())
        .map(|combinations| combinations.len())
        .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Calculates how well a set of move types covers every defending type combination.
///
/// For each combination, the move type with the highest multiplier is credited. When several
/// move types tie, the first one in `move_types` is credited.
pub fn calculate_offensive_coverage(move_types: &[Type]) -> OffensiveCoverage {
    calculate_offensive_coverage_with_chart(TypeChart::standard(), move_types)
}

/// Same as [`calculate_offensive_coverage`], with an explicit chart.
pub fn calculate_offensive_coverage_with_chart(
    chart: &TypeChart,
    move_types: &[Type],
) -> OffensiveCoverage {
    let mut coverage = OffensiveCoverage::default();
    for defending in DefendingTypes::all() {
        let types = defending.types();
        let mut best: Option<(Type, f32)> = None;
        for attacking in move_types {
            let multiplier = calculate_type_effectiveness_with_chart(chart, *attacking, &types);
            if best.is_none_or(|(_, best)| multiplier > best) {
                best = Some((*attacking, multiplier));
            }
        }
        if let Some((attacking, multiplier)) = best {
            coverage
                .bucket_mut(multiplier)
                .entry(attacking)
                .or_default()
                .push(defending);
        }
    }
    coverage
}
