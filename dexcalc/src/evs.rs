use dexcalc_data::{
    Nature,
    Stat,
    Stats,
};
use log::{
    debug,
    trace,
};
use num::Integer;
use serde::Serialize;
use thiserror::Error;

use crate::{
    config::EvRules,
    error::ValidationError,
    stats::calculate_stat,
};

/// How seriously a validation problem should be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The spread is illegal.
    Error,
    /// The spread is legal but wastes EVs.
    Warning,
}

/// A single problem found in an EV spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EvSpreadProblem {
    #[error("Total EVs ({total}) exceed the maximum of {limit}")]
    TotalExceedsLimit { total: i32, limit: i32 },
    #[error("{} EVs ({value}) exceed the maximum of {limit}", .stat.display_name())]
    StatExceedsLimit { stat: Stat, value: i32, limit: i32 },
    #[error("{} EVs ({value}) cannot be negative", .stat.display_name())]
    Negative { stat: Stat, value: i32 },
    #[error(
        "{} EVs ({value}) are not a multiple of {step}; {wasted} EVs are wasted",
        .stat.display_name()
    )]
    Wasted {
        stat: Stat,
        value: i32,
        step: i32,
        wasted: i32,
    },
}

impl EvSpreadProblem {
    /// The severity of the problem.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Wasted { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// The result of validating an EV spread.
///
/// Every problem is reported, not just the first. Wasted EVs are listed alongside hard
/// violations and also make the spread invalid; use [`EvSpreadProblem::severity`] to tell them
/// apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvSpreadValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    #[serde(skip)]
    pub problems: Vec<EvSpreadProblem>,
}

impl EvSpreadValidation {
    fn from_problems(problems: Vec<EvSpreadProblem>) -> Self {
        Self {
            valid: problems.is_empty(),
            errors: problems.iter().map(|problem| problem.to_string()).collect(),
            problems,
        }
    }

    /// Checks if any problem is a hard violation, ignoring warnings.
    pub fn has_errors(&self) -> bool {
        self.problems
            .iter()
            .any(|problem| problem.severity() == Severity::Error)
    }

    /// Converts the result into a [`Result`] for propagation.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.valid {
            Ok(())
        } else {
            Err(ValidationError::from_iter(self.errors))
        }
    }
}

/// The number of EVs that can still be assigned, never negative.
pub fn remaining_evs(evs: &Stats<i32>) -> i32 {
    remaining_evs_with_rules(evs, &EvRules::default())
}

/// Same as [`remaining_evs`], with explicit limits.
pub fn remaining_evs_with_rules(evs: &Stats<i32>, rules: &EvRules) -> i32 {
    (rules.ev_limit - evs.sum()).max(0)
}

/// Validates an EV spread against the standard limits.
pub fn validate_ev_spread(evs: &Stats<i32>) -> EvSpreadValidation {
    validate_ev_spread_with_rules(evs, &EvRules::default())
}

/// Same as [`validate_ev_spread`], with explicit limits.
pub fn validate_ev_spread_with_rules(evs: &Stats<i32>, rules: &EvRules) -> EvSpreadValidation {
    let mut problems = Vec::new();

    let total = evs.sum();
    if total > rules.ev_limit {
        problems.push(EvSpreadProblem::TotalExceedsLimit {
            total,
            limit: rules.ev_limit,
        });
    }

    let step = rules.effective_step();
    for (stat, value) in evs {
        if value > rules.max_stat_ev {
            problems.push(EvSpreadProblem::StatExceedsLimit {
                stat,
                value,
                limit: rules.max_stat_ev,
            });
        }
        if value < 0 {
            problems.push(EvSpreadProblem::Negative { stat, value });
        }
        let wasted = value.rem_euclid(step);
        if value != rules.max_stat_ev && wasted != 0 {
            problems.push(EvSpreadProblem::Wasted {
                stat,
                value,
                step,
                wasted,
            });
        }
    }

    EvSpreadValidation::from_problems(problems)
}

/// Finds the fewest EVs needed for a stat to reach `target`.
///
/// Binary searches the EV range for the smallest investment meeting the target, then rounds up
/// to a multiple of 4. If the target cannot be reached, returns the maximum (252) as a best
/// effort.
pub fn optimize_evs_for_stat(
    target: i32,
    base: i32,
    iv: i32,
    level: i32,
    nature: Option<Nature>,
    stat: Stat,
) -> i32 {
    optimize_evs_for_stat_with_rules(target, base, iv, level, nature, stat, &EvRules::default())
}

/// Same as [`optimize_evs_for_stat`], with explicit limits.
pub fn optimize_evs_for_stat_with_rules(
    target: i32,
    base: i32,
    iv: i32,
    level: i32,
    nature: Option<Nature>,
    stat: Stat,
    rules: &EvRules,
) -> i32 {
    let max = rules.max_stat_ev;
    let reaches = |ev| calculate_stat(stat, base, iv, ev, level, nature) >= target;

    if !reaches(max) {
        debug!("{stat} cannot reach {target} with {max} EVs (base {base}, level {level})");
        return max;
    }

    let mut low = 0;
    let mut high = max;
    while low < high {
        let mid = low + (high - low) / 2;
        if reaches(mid) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    // Never rounds below `low`, which already meets the target.
    let step = rules.effective_step();
    let rounded = (Integer::div_ceil(&low, &step) * step).min(max);
    trace!("{stat} reaches {target} with {low} EVs, rounded to {rounded}");
    rounded
}
