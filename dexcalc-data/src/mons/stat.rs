use core::{
    fmt::Debug,
    iter::Sum,
    str::FromStr,
};

use anyhow::{
    Error,
    Result,
};
use hashbrown::HashMap;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single stat.
///
/// Parsing accepts the short names, display names, the hyphenated names used by remote data
/// sources (`special-attack`), and the camelCase keys of [`Stats`] (`specialAttack`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "spatk"]
    #[alias = "Sp.Atk"]
    #[alias = "Special Attack"]
    #[alias = "special-attack"]
    #[alias = "specialAttack"]
    SpAtk,
    #[string = "spd"]
    #[alias = "spdef"]
    #[alias = "Sp.Def"]
    #[alias = "Special Defense"]
    #[alias = "special-defense"]
    #[alias = "specialDefense"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
}

impl Stat {
    /// All stats, in canonical order.
    pub const fn all() -> [Stat; 6] {
        [
            Self::HP,
            Self::Atk,
            Self::Def,
            Self::SpAtk,
            Self::SpDef,
            Self::Spe,
        ]
    }

    /// Human-readable name, used in validation messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HP => "HP",
            Self::Atk => "Attack",
            Self::Def => "Defense",
            Self::SpAtk => "Special Attack",
            Self::SpDef => "Special Defense",
            Self::Spe => "Speed",
        }
    }
}

fn next_stat_for_iterator(stat: Stat) -> Option<Stat> {
    match stat {
        Stat::HP => Some(Stat::Atk),
        Stat::Atk => Some(Stat::Def),
        Stat::Def => Some(Stat::SpAtk),
        Stat::SpAtk => Some(Stat::SpDef),
        Stat::SpDef => Some(Stat::Spe),
        Stat::Spe => None,
    }
}

/// A map of values for each stat.
pub type StatMap<T> = HashMap<Stat, T>;

/// A partial spread of stat values, where missing stats are treated as zero.
pub type PartialStats = StatMap<i32>;

/// A value for each of the six stats.
///
/// The same record holds base stats, IVs, EVs, and calculated stats. Serialized keys are
/// `hp`, `attack`, `defense`, `specialAttack`, `specialDefense`, and `speed`. Deserialization
/// also accepts the hyphenated and short key names.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats<T> {
    #[serde(default)]
    pub hp: T,
    #[serde(default, rename = "attack", alias = "atk")]
    pub atk: T,
    #[serde(default, rename = "defense", alias = "def")]
    pub def: T,
    #[serde(
        default,
        rename = "specialAttack",
        alias = "special-attack",
        alias = "spa"
    )]
    pub spa: T,
    #[serde(
        default,
        rename = "specialDefense",
        alias = "special-defense",
        alias = "spd"
    )]
    pub spd: T,
    #[serde(default, rename = "speed", alias = "spe")]
    pub spe: T,
}

impl<T> Stats<T> {
    /// Creates a record with the same value in every slot.
    pub fn uniform(value: T) -> Self
    where
        T: Copy,
    {
        Self {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> T
    where
        T: Copy,
    {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the given value in the record.
    pub fn set(&mut self, stat: Stat, value: T) {
        let stat = match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *stat = value;
    }

    /// Creates an iterator over all stat entries, in canonical order.
    pub fn entries<'s>(&'s self) -> StatsEntries<'s, T> {
        StatsEntries::new(self)
    }

    /// Creates an iterator over all stat values, in canonical order.
    pub fn values<'s>(&'s self) -> impl Iterator<Item = T> + 's
    where
        T: Copy,
    {
        self.entries().map(|(_, value)| value)
    }

    /// Sums up all values in the record.
    pub fn sum(&self) -> T
    where
        T: Copy + Sum<T>,
    {
        self.values().sum()
    }

    /// Maps every slot to a new value.
    pub fn map<U, F>(&self, mut f: F) -> Stats<U>
    where
        T: Copy,
        F: FnMut(Stat, T) -> U,
    {
        Stats {
            hp: f(Stat::HP, self.hp),
            atk: f(Stat::Atk, self.atk),
            def: f(Stat::Def, self.def),
            spa: f(Stat::SpAtk, self.spa),
            spd: f(Stat::SpDef, self.spd),
            spe: f(Stat::Spe, self.spe),
        }
    }

    /// Builds a record from named entries, translating stat names from any supported naming
    /// convention.
    ///
    /// Unknown names are an error. Missing stats are left at their default value.
    pub fn from_named<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: Default,
    {
        let mut out = Self::default();
        for (name, value) in entries {
            let name = name.as_ref();
            let stat = Stat::from_str(name.trim())
                .map_err(|_| Error::msg(format!("unknown stat name: {name}")))?;
            out.set(stat, value);
        }
        Ok(out)
    }
}

/// Iterator over the entries of a [`Stats`] record.
pub struct StatsEntries<'s, T> {
    stats: &'s Stats<T>,
    next_stat: Option<Stat>,
}

impl<'s, T> StatsEntries<'s, T> {
    fn new(stats: &'s Stats<T>) -> Self {
        Self {
            stats,
            next_stat: Some(Stat::HP),
        }
    }
}

impl<'s, T> Iterator for StatsEntries<'s, T>
where
    T: Copy,
{
    type Item = (Stat, T);

    fn next(&mut self) -> Option<Self::Item> {
        let stat = self.next_stat?;
        let value = self.stats.get(stat);
        self.next_stat = next_stat_for_iterator(stat);
        Some((stat, value))
    }
}

impl<'s, T> IntoIterator for &'s Stats<T>
where
    T: Copy,
{
    type IntoIter = StatsEntries<'s, T>;
    type Item = (Stat, T);
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<T> From<&StatMap<T>> for Stats<T>
where
    T: Copy + Default,
{
    fn from(value: &StatMap<T>) -> Self {
        Self::from_iter(value.iter().map(|(stat, value)| (*stat, *value)))
    }
}

impl<T> FromIterator<(Stat, T)> for Stats<T>
where
    T: Default,
{
    fn from_iter<I: IntoIterator<Item = (Stat, T)>>(iter: I) -> Self {
        let mut out = Self::default();
        for (stat, value) in iter {
            out.set(stat, value);
        }
        out
    }
}
