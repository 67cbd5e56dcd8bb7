use anyhow::{
    Context,
    Result,
};
use log::debug;
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::CalcError;

/// Maximum number of EVs across all stats.
pub const EV_LIMIT: i32 = 510;

/// Maximum number of EVs in a single stat.
pub const MAX_STAT_EV: i32 = 252;

/// Number of EVs that make up one point of a stat.
pub const EV_STEP: i32 = 4;

/// Maximum IV in a single stat.
pub const MAX_IV: i32 = 31;

/// Maximum level.
pub const MAX_LEVEL: i32 = 100;

/// Limits applied when validating and optimizing EV spreads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvRules {
    pub ev_limit: i32,
    pub max_stat_ev: i32,
    pub ev_step: i32,
}

impl Default for EvRules {
    fn default() -> Self {
        Self {
            ev_limit: EV_LIMIT,
            max_stat_ev: MAX_STAT_EV,
            ev_step: EV_STEP,
        }
    }
}

impl EvRules {
    /// The EV step used in calculations.
    ///
    /// A non-positive step behaves as 1, so unvalidated rules never divide by zero.
    pub fn effective_step(&self) -> i32 {
        self.ev_step.max(1)
    }

    /// Checks that the limits are internally consistent.
    pub fn validate(&self) -> Result<(), CalcError> {
        if self.ev_step <= 0 {
            return Err(CalcError::invalid_rules(format!(
                "EV Step = {} must be positive",
                self.ev_step
            )));
        }
        if self.max_stat_ev < 0 || self.ev_limit < 0 {
            return Err(CalcError::invalid_rules("EV limits cannot be negative"));
        }
        if self.max_stat_ev > self.ev_limit {
            return Err(CalcError::invalid_rules(format!(
                "Max Stat EV = {} exceeds EV Limit = {}",
                self.max_stat_ev, self.ev_limit
            )));
        }
        Ok(())
    }
}

/// Weights for team synergy scoring.
///
/// The shared weakness threshold is an absolute member count; it does not scale with team size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SynergyRules {
    pub shared_weakness_threshold: usize,
    pub shared_weakness_penalty: u32,
    pub uncovered_type_penalty: u32,
    pub max_score: u32,
}

impl Default for SynergyRules {
    fn default() -> Self {
        Self {
            shared_weakness_threshold: 3,
            shared_weakness_penalty: 15,
            uncovered_type_penalty: 5,
            max_score: 100,
        }
    }
}

impl SynergyRules {
    /// Checks that the scoring rules are usable.
    pub fn validate(&self) -> Result<(), CalcError> {
        if self.shared_weakness_threshold == 0 {
            return Err(CalcError::invalid_rules(
                "Shared Weakness Threshold must be at least 1",
            ));
        }
        Ok(())
    }
}

/// All tunable rules for the calculators.
///
/// Every field has a default, so a partial JSON object only overrides what it names.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcRules {
    pub ev: EvRules,
    pub synergy: SynergyRules,
}

impl CalcRules {
    /// Parses and validates rules from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Self = serde_json::from_str(json).context("failed to parse calculator rules")?;
        rules.validate().context("calculator rules are invalid")?;
        debug!("loaded calculator rules: {rules:?}");
        Ok(rules)
    }

    /// Checks that the rules are internally consistent.
    pub fn validate(&self) -> Result<(), CalcError> {
        self.ev.validate()?;
        self.synergy.validate()
    }
}
