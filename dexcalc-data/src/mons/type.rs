use std::{
    fmt,
    sync::LazyLock,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use anyhow::{
    Context,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental type of a species or move, which determines weaknesses and resistances.
#[derive(
    Debug,
    Default,
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
pub enum Type {
    #[string = "normal"]
    #[default]
    Normal,
    #[string = "fighting"]
    Fighting,
    #[string = "flying"]
    Flying,
    #[string = "poison"]
    Poison,
    #[string = "ground"]
    Ground,
    #[string = "rock"]
    Rock,
    #[string = "bug"]
    Bug,
    #[string = "ghost"]
    Ghost,
    #[string = "steel"]
    Steel,
    #[string = "fire"]
    Fire,
    #[string = "water"]
    Water,
    #[string = "grass"]
    Grass,
    #[string = "electric"]
    Electric,
    #[string = "psychic"]
    Psychic,
    #[string = "ice"]
    Ice,
    #[string = "dragon"]
    Dragon,
    #[string = "dark"]
    Dark,
    #[string = "fairy"]
    Fairy,
}

impl Type {
    /// All 18 types, in canonical order.
    pub const fn all() -> [Type; 18] {
        [
            Self::Normal,
            Self::Fighting,
            Self::Flying,
            Self::Poison,
            Self::Ground,
            Self::Rock,
            Self::Bug,
            Self::Ghost,
            Self::Steel,
            Self::Fire,
            Self::Water,
            Self::Grass,
            Self::Electric,
            Self::Psychic,
            Self::Ice,
            Self::Dragon,
            Self::Dark,
            Self::Fairy,
        ]
    }
}

/// Type effectiveness of one type against another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// The damage multiplier.
    pub fn multiplier(self) -> f32 {
        self.into()
    }
}

impl From<f32> for TypeEffectiveness {
    fn from(value: f32) -> Self {
        if value < 0f32 || (value).abs() < f32::EPSILON {
            Self::None
        } else if value < 0.5 || (value - 0.5).abs() < f32::EPSILON {
            Self::Weak
        } else if value < 1f32 || (value - 1f32).abs() < f32::EPSILON {
            Self::Normal
        } else {
            Self::Strong
        }
    }
}

impl From<TypeEffectiveness> for f32 {
    fn from(value: TypeEffectiveness) -> Self {
        match value {
            TypeEffectiveness::None => 0f32,
            TypeEffectiveness::Weak => 0.5,
            TypeEffectiveness::Normal => 1f32,
            TypeEffectiveness::Strong => 2f32,
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Weak => serializer.serialize_f32(self.multiplier()),
            _ => serializer.serialize_u32(self.multiplier() as u32),
        }
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }

    fn visit_f32<E>(self, v: f32) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_f32(TypeEffectivenessVisitor)
    }
}

/// A type table, which contains type effectiveness information for types against some other value.
///
/// The key here is the attacking type.
pub type TypeTable<T> = HashMap<Type, HashMap<T, TypeEffectiveness>>;

/// A type chart, which contains type effectiveness information for attacking types against
/// defending types.
///
/// The chart is sparse: any pair that is missing is [`TypeEffectiveness::Normal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Type>,
}

static STANDARD_TYPE_CHART: LazyLock<TypeChart> = LazyLock::new(|| {
    let mut types = TypeTable::new();
    for attacking in Type::all() {
        let row = Type::all()
            .into_iter()
            .filter_map(|defending| {
                let effectiveness = standard_effectiveness(attacking, defending);
                (effectiveness != TypeEffectiveness::Normal).then_some((defending, effectiveness))
            })
            .collect::<HashMap<_, _>>();
        types.insert(attacking, row);
    }
    TypeChart::from_filled(types)
});

impl TypeChart {
    pub fn new() -> Self {
        Self {
            types: TypeTable::new(),
        }
    }

    pub fn from_filled(types: TypeTable<Type>) -> Self {
        Self { types }
    }

    /// The standard type chart used by all current games.
    pub fn standard() -> &'static TypeChart {
        &STANDARD_TYPE_CHART
    }

    /// Parses a type chart from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse type chart")
    }

    /// The effectiveness of an attacking type against a single defending type.
    pub fn effectiveness(&self, attacking: Type, defending: Type) -> TypeEffectiveness {
        self.types
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or_default()
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::new()
    }
}

fn standard_effectiveness(attacking: Type, defending: Type) -> TypeEffectiveness {
    use Type::*;
    use TypeEffectiveness::{
        None as Immune,
        Normal as Neutral,
        Strong,
        Weak,
    };

    match (attacking, defending) {
        (Normal, Rock | Steel) => Weak,
        (Normal, Ghost) => Immune,
        (Normal, _) => Neutral,

        (Fighting, Normal | Rock | Steel | Ice | Dark) => Strong,
        (Fighting, Flying | Poison | Bug | Psychic | Fairy) => Weak,
        (Fighting, Ghost) => Immune,
        (Fighting, _) => Neutral,

        (Flying, Fighting | Bug | Grass) => Strong,
        (Flying, Rock | Steel | Electric) => Weak,
        (Flying, _) => Neutral,

        (Poison, Grass | Fairy) => Strong,
        (Poison, Poison | Ground | Rock | Ghost) => Weak,
        (Poison, Steel) => Immune,
        (Poison, _) => Neutral,

        (Ground, Poison | Rock | Steel | Fire | Electric) => Strong,
        (Ground, Bug | Grass) => Weak,
        (Ground, Flying) => Immune,
        (Ground, _) => Neutral,

        (Rock, Flying | Bug | Fire | Ice) => Strong,
        (Rock, Fighting | Ground | Steel) => Weak,
        (Rock, _) => Neutral,

        (Bug, Grass | Psychic | Dark) => Strong,
        (Bug, Fighting | Flying | Poison | Ghost | Steel | Fire | Fairy) => Weak,
        (Bug, _) => Neutral,

        (Ghost, Ghost | Psychic) => Strong,
        (Ghost, Dark) => Weak,
        (Ghost, Normal) => Immune,
        (Ghost, _) => Neutral,

        (Steel, Rock | Ice | Fairy) => Strong,
        (Steel, Steel | Fire | Water | Electric) => Weak,
        (Steel, _) => Neutral,

        (Fire, Bug | Steel | Grass | Ice) => Strong,
        (Fire, Rock | Fire | Water | Dragon) => Weak,
        (Fire, _) => Neutral,

        (Water, Ground | Rock | Fire) => Strong,
        (Water, Water | Grass | Dragon) => Weak,
        (Water, _) => Neutral,

        (Grass, Ground | Rock | Water) => Strong,
        (Grass, Flying | Poison | Bug | Steel | Fire | Grass | Dragon) => Weak,
        (Grass, _) => Neutral,

        (Electric, Flying | Water) => Strong,
        (Electric, Grass | Electric | Dragon) => Weak,
        (Electric, Ground) => Immune,
        (Electric, _) => Neutral,

        (Psychic, Fighting | Poison) => Strong,
        (Psychic, Steel | Psychic) => Weak,
        (Psychic, Dark) => Immune,
        (Psychic, _) => Neutral,

        (Ice, Flying | Ground | Grass | Dragon) => Strong,
        (Ice, Steel | Fire | Water | Ice) => Weak,
        (Ice, _) => Neutral,

        (Dragon, Dragon) => Strong,
        (Dragon, Steel) => Weak,
        (Dragon, Fairy) => Immune,
        (Dragon, _) => Neutral,

        (Dark, Ghost | Psychic) => Strong,
        (Dark, Fighting | Dark | Fairy) => Weak,
        (Dark, _) => Neutral,

        (Fairy, Fighting | Dragon | Dark) => Strong,
        (Fairy, Poison | Steel | Fire) => Weak,
        (Fairy, _) => Neutral,
    }
}
