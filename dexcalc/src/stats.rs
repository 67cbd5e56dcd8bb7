use dexcalc_data::{
    Nature,
    Stat,
    Stats,
};
use num::Integer;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    config::{
        MAX_IV,
        MAX_STAT_EV,
    },
    error::CalcError,
};

/// Calculates a single stat from its base value, IV, EV, level, and nature.
///
/// All divisions floor, matching the games bit for bit. The nature multiplier is applied to the
/// integer stat, not to any intermediate value. A base HP of 1 always produces 1 HP.
///
/// Inputs are not clamped to competitive ranges; that is the caller's responsibility.
pub fn calculate_stat(
    stat: Stat,
    base: i32,
    iv: i32,
    ev: i32,
    level: i32,
    nature: Option<Nature>,
) -> i32 {
    if stat == Stat::HP && base == 1 {
        return 1;
    }
    let value = 2 * base + iv + Integer::div_floor(&ev, &4);
    let value = Integer::div_floor(&(value * level), &100);
    if stat == Stat::HP {
        value + level + 10
    } else {
        apply_nature(stat, value + 5, nature)
    }
}

/// Applies a nature's 10% increase or decrease to a calculated stat, flooring the result.
pub fn apply_nature(stat: Stat, value: i32, nature: Option<Nature>) -> i32 {
    match nature {
        Some(nature) => scale_by_tenths(value, nature.multiplier_for(stat)),
        None => value,
    }
}

fn scale_by_tenths(value: i32, tenths: u8) -> i32 {
    Integer::div_floor(&(value * tenths as i32), &10)
}

/// Calculates all six stats.
pub fn calculate_all_stats(
    base_stats: &Stats<i32>,
    ivs: &Stats<i32>,
    evs: &Stats<i32>,
    level: i32,
    nature: Option<Nature>,
) -> Stats<i32> {
    base_stats.map(|stat, base| {
        calculate_stat(stat, base, ivs.get(stat), evs.get(stat), level, nature)
    })
}

/// Looks up a nature by name, failing for unknown names.
///
/// Use [`Nature::from_name`] to treat unknown names as neutral instead.
pub fn parse_nature(name: &str) -> Result<Nature, CalcError> {
    Nature::from_name(name).ok_or_else(|| CalcError::UnknownNature(name.to_owned()))
}

/// The lowest and highest value a stat can reach at a level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatRange {
    pub min: i32,
    pub max: i32,
}

impl StatRange {
    /// Checks if a value is in range.
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Calculates the range of a stat at a level.
///
/// The minimum uses 0 IVs, 0 EVs, and a hindering nature. The maximum uses 31 IVs, 252 EVs, and
/// a beneficial nature. HP is unaffected by natures.
pub fn calculate_stat_range(stat: Stat, base: i32, level: i32) -> StatRange {
    let min = calculate_stat(stat, base, 0, 0, level, None);
    let max = calculate_stat(stat, base, MAX_IV, MAX_STAT_EV, level, None);
    if stat == Stat::HP {
        return StatRange { min, max };
    }
    StatRange {
        min: scale_by_tenths(min, 9),
        max: scale_by_tenths(max, 11),
    }
}

/// Calculates the range of all six stats at a level.
pub fn calculate_all_stat_ranges(base_stats: &Stats<i32>, level: i32) -> Stats<StatRange> {
    base_stats.map(|stat, base| calculate_stat_range(stat, base, level))
}
