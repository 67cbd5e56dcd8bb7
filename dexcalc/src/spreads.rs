use dexcalc_data::{
    Nature,
    Stats,
};
use serde::Serialize;

/// A named EV spread and nature, commonly used as a starting point for a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitiveSpread {
    pub name: &'static str,
    pub description: &'static str,
    pub evs: Stats<i32>,
    pub nature: Nature,
}

const fn evs(hp: i32, atk: i32, def: i32, spa: i32, spd: i32, spe: i32) -> Stats<i32> {
    Stats {
        hp,
        atk,
        def,
        spa,
        spd,
        spe,
    }
}

const COMPETITIVE_SPREADS: [CompetitiveSpread; 8] = [
    CompetitiveSpread {
        name: "Physical Sweeper",
        description: "Maximum Attack and Speed for fast physical attackers.",
        evs: evs(0, 252, 0, 0, 4, 252),
        nature: Nature::Jolly,
    },
    CompetitiveSpread {
        name: "Special Sweeper",
        description: "Maximum Special Attack and Speed for fast special attackers.",
        evs: evs(0, 0, 0, 252, 4, 252),
        nature: Nature::Timid,
    },
    CompetitiveSpread {
        name: "Physical Wall",
        description: "Maximum HP and Defense to absorb physical hits.",
        evs: evs(252, 0, 252, 0, 4, 0),
        nature: Nature::Impish,
    },
    CompetitiveSpread {
        name: "Special Wall",
        description: "Maximum HP and Special Defense to absorb special hits.",
        evs: evs(252, 0, 4, 0, 252, 0),
        nature: Nature::Careful,
    },
    CompetitiveSpread {
        name: "Bulky Attacker",
        description: "Maximum HP and Attack for slower physical attackers.",
        evs: evs(252, 252, 0, 0, 4, 0),
        nature: Nature::Adamant,
    },
    CompetitiveSpread {
        name: "Bulky Special Attacker",
        description: "Maximum HP and Special Attack for slower special attackers.",
        evs: evs(252, 0, 0, 252, 4, 0),
        nature: Nature::Modest,
    },
    CompetitiveSpread {
        name: "Mixed Attacker",
        description: "Split investment in both attacking stats with maximum Speed.",
        evs: evs(0, 128, 0, 128, 0, 252),
        nature: Nature::Hasty,
    },
    CompetitiveSpread {
        name: "Trick Room Attacker",
        description: "Maximum HP and Attack with minimum Speed for Trick Room teams.",
        evs: evs(252, 252, 4, 0, 0, 0),
        nature: Nature::Brave,
    },
];

/// All competitive spread presets.
pub fn competitive_spreads() -> &'static [CompetitiveSpread] {
    &COMPETITIVE_SPREADS
}

/// Looks up a competitive spread preset by name, ignoring case.
pub fn find_competitive_spread(name: &str) -> Option<&'static CompetitiveSpread> {
    let name = name.trim();
    COMPETITIVE_SPREADS
        .iter()
        .find(|spread| spread.name.eq_ignore_ascii_case(name))
}
