use core::str::FromStr;

use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::mons::Stat;

/// A Mon's nature, which increases one stat by 10% and decreases another by 10%.
///
/// Hardy, Docile, Serious, Bashful, and Quirky are neutral: they change nothing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Nature {
    #[string = "Hardy"]
    Hardy,
    #[string = "Lonely"]
    Lonely,
    #[string = "Adamant"]
    Adamant,
    #[string = "Naughty"]
    Naughty,
    #[string = "Brave"]
    Brave,
    #[string = "Bold"]
    Bold,
    #[string = "Docile"]
    Docile,
    #[string = "Impish"]
    Impish,
    #[string = "Lax"]
    Lax,
    #[string = "Relaxed"]
    Relaxed,
    #[string = "Modest"]
    Modest,
    #[string = "Mild"]
    Mild,
    #[string = "Bashful"]
    Bashful,
    #[string = "Rash"]
    Rash,
    #[string = "Quiet"]
    Quiet,
    #[string = "Calm"]
    Calm,
    #[string = "Gentle"]
    Gentle,
    #[string = "Careful"]
    Careful,
    #[string = "Quirky"]
    Quirky,
    #[string = "Sassy"]
    Sassy,
    #[string = "Timid"]
    Timid,
    #[string = "Hasty"]
    Hasty,
    #[string = "Jolly"]
    Jolly,
    #[string = "Naive"]
    Naive,
    #[string = "Serious"]
    Serious,
}

impl Nature {
    /// All natures, grouped by the stat they increase.
    pub const fn all() -> [Nature; 25] {
        [
            Self::Hardy,
            Self::Lonely,
            Self::Adamant,
            Self::Naughty,
            Self::Brave,
            Self::Bold,
            Self::Docile,
            Self::Impish,
            Self::Lax,
            Self::Relaxed,
            Self::Modest,
            Self::Mild,
            Self::Bashful,
            Self::Rash,
            Self::Quiet,
            Self::Calm,
            Self::Gentle,
            Self::Careful,
            Self::Quirky,
            Self::Sassy,
            Self::Timid,
            Self::Hasty,
            Self::Jolly,
            Self::Naive,
            Self::Serious,
        ]
    }

    /// Looks up a nature by name, ignoring case and surrounding whitespace.
    ///
    /// Unknown names produce [`None`], which calculations treat as a neutral nature.
    pub fn from_name(name: &str) -> Option<Nature> {
        Self::from_str(name.trim()).ok()
    }

    /// Finds the nature that increases and decreases the given stats.
    ///
    /// Equal stats select a neutral nature. HP is never affected by a nature, so it yields
    /// [`None`].
    pub fn from_effects(increased: Stat, decreased: Stat) -> Option<Nature> {
        if increased == Stat::HP || decreased == Stat::HP {
            return None;
        }
        if increased == decreased {
            return Some(Self::from_raw_pair(increased, decreased));
        }
        Self::all()
            .into_iter()
            .find(|nature| {
                nature.increases() == Some(increased) && nature.decreases() == Some(decreased)
            })
    }

    /// The stat increased by the nature, if any.
    pub fn increases(&self) -> Option<Stat> {
        let (boosts, drops) = self.raw_pair();
        (boosts != drops).then_some(boosts)
    }

    /// The stat decreased by the nature, if any.
    pub fn decreases(&self) -> Option<Stat> {
        let (boosts, drops) = self.raw_pair();
        (boosts != drops).then_some(drops)
    }

    /// Checks if the nature changes no stats.
    pub fn is_neutral(&self) -> bool {
        self.increases().is_none()
    }

    /// The multiplier applied to the given stat, in tenths.
    pub fn multiplier_for(&self, stat: Stat) -> u8 {
        if self.increases() == Some(stat) {
            11
        } else if self.decreases() == Some(stat) {
            9
        } else {
            10
        }
    }

    // Natures form a 5x5 grid; the diagonal is neutral.
    fn raw_pair(&self) -> (Stat, Stat) {
        let boosts = match self {
            Self::Hardy | Self::Lonely | Self::Adamant | Self::Naughty | Self::Brave => Stat::Atk,
            Self::Bold | Self::Docile | Self::Impish | Self::Lax | Self::Relaxed => Stat::Def,
            Self::Modest | Self::Mild | Self::Bashful | Self::Rash | Self::Quiet => Stat::SpAtk,
            Self::Calm | Self::Gentle | Self::Careful | Self::Quirky | Self::Sassy => Stat::SpDef,
            Self::Timid | Self::Hasty | Self::Jolly | Self::Naive | Self::Serious => Stat::Spe,
        };
        let drops = match self {
            Self::Hardy | Self::Bold | Self::Modest | Self::Calm | Self::Timid => Stat::Atk,
            Self::Lonely | Self::Docile | Self::Mild | Self::Gentle | Self::Hasty => Stat::Def,
            Self::Adamant | Self::Impish | Self::Bashful | Self::Careful | Self::Jolly => {
                Stat::SpAtk
            }
            Self::Naughty | Self::Lax | Self::Rash | Self::Quirky | Self::Naive => Stat::SpDef,
            Self::Brave | Self::Relaxed | Self::Quiet | Self::Sassy | Self::Serious => Stat::Spe,
        };
        (boosts, drops)
    }

    fn from_raw_pair(boosts: Stat, drops: Stat) -> Nature {
        Self::all()
            .into_iter()
            .find(|nature| nature.raw_pair() == (boosts, drops))
            .unwrap_or(Self::Hardy)
    }
}
