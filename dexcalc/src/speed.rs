use std::cmp::Ordering;

use dexcalc_data::{
    Nature,
    Stat,
};
use log::trace;
use num::Integer;
use serde::{
    Deserialize,
    Serialize,
};

use crate::stats::calculate_stat;

/// Battle effects that modify speed.
///
/// Effects are applied in a fixed order by [`apply_speed_modifiers`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpeedModifiers {
    /// Speed stages, applied as `(2 + stages) / 2`. Not clamped.
    pub speed_stages: i8,
    pub choice_scarf: bool,
    pub tailwind: bool,
    pub sticky_web: bool,
    pub paralysis: bool,
    /// Reverses turn order; does not change the speed value itself.
    pub trick_room: bool,
}

/// The direction in which speed values determine turn order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpeedOrder {
    /// Higher speed moves first.
    #[default]
    Descending,
    /// Lower speed moves first, as under Trick Room.
    Ascending,
}

/// A Mon's effective speed, along with the direction that speed is ordered in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeedTier {
    pub value: i32,
    pub order: SpeedOrder,
}

impl SpeedTier {
    /// Encodes the tier as a single integer that sorts highest-first in either order.
    ///
    /// Under Trick Room the value is negated, so a NEGATIVE result means "lower is faster". Callers
    /// comparing these integers must check the sign before reading the magnitude as a speed stat.
    pub fn sign_encoded(&self) -> i32 {
        match self.order {
            SpeedOrder::Descending => self.value,
            SpeedOrder::Ascending => -self.value,
        }
    }

    /// Checks if this tier moves strictly before `other`.
    pub fn outspeeds(&self, other: &SpeedTier) -> bool {
        compare_speed_tiers(self, other) == Ordering::Less
    }
}

/// An object that can be placed in turn order by speed.
pub trait SpeedOrderable {
    fn speed_tier(&self) -> SpeedTier;
}

impl SpeedOrderable for SpeedTier {
    fn speed_tier(&self) -> SpeedTier {
        *self
    }
}

impl<T> SpeedOrderable for &'_ T
where
    T: SpeedOrderable,
{
    #[inline]
    fn speed_tier(&self) -> SpeedTier {
        (*self).speed_tier()
    }
}

/// Compares two tiers by turn order. [`Ordering::Less`] means `a` moves first.
///
/// The order direction of `a` decides the comparison; tiers calculated for the same field always
/// share a direction.
pub fn compare_speed_tiers(a: &SpeedTier, b: &SpeedTier) -> Ordering {
    match a.order {
        // Higher speed first.
        SpeedOrder::Descending => b.value.cmp(&a.value),
        // Lower speed first.
        SpeedOrder::Ascending => a.value.cmp(&b.value),
    }
}

/// Sorts items into turn order. Speed ties keep their input order.
pub fn sort_by_speed<T>(items: &mut [T])
where
    T: SpeedOrderable,
{
    items.sort_by(|a, b| compare_speed_tiers(&a.speed_tier(), &b.speed_tier()));
}

/// Applies speed modifiers to a calculated speed stat, flooring after every step.
///
/// Order: stages, Choice Scarf (x1.5), Tailwind (x2), Sticky Web (x0.5), paralysis (x0.5).
///
/// Stages multiply by `(2 + stages) / 2` for any stage count, so stage -2 zeroes the speed and
/// lower stages go negative.
pub fn apply_speed_modifiers(speed: i32, modifiers: &SpeedModifiers) -> i32 {
    let stages = modifiers.speed_stages as i32;
    let mut speed = Integer::div_floor(&(speed * (2 + stages)), &2);
    if modifiers.choice_scarf {
        speed = Integer::div_floor(&(speed * 3), &2);
    }
    if modifiers.tailwind {
        speed *= 2;
    }
    if modifiers.sticky_web {
        speed = Integer::div_floor(&speed, &2);
    }
    if modifiers.paralysis {
        speed = Integer::div_floor(&speed, &2);
    }
    speed
}

/// Calculates a Mon's speed tier under the given battle modifiers.
pub fn calculate_speed_tier(
    base_speed: i32,
    iv: i32,
    ev: i32,
    level: i32,
    nature: Option<Nature>,
    modifiers: &SpeedModifiers,
) -> SpeedTier {
    let speed = calculate_stat(Stat::Spe, base_speed, iv, ev, level, nature);
    let value = apply_speed_modifiers(speed, modifiers);
    trace!("speed {speed} modified to {value} by {modifiers:?}");
    SpeedTier {
        value,
        order: if modifiers.trick_room {
            SpeedOrder::Ascending
        } else {
            SpeedOrder::Descending
        },
    }
}

/// Same as [`calculate_speed_tier`], but returns the sign-encoded integer.
///
/// WARNING: under Trick Room the result is negative and lower speeds move first. See
/// [`SpeedTier::sign_encoded`].
pub fn calculate_speed_tier_signed(
    base_speed: i32,
    iv: i32,
    ev: i32,
    level: i32,
    nature: Option<Nature>,
    modifiers: &SpeedModifiers,
) -> i32 {
    calculate_speed_tier(base_speed, iv, ev, level, nature, modifiers).sign_encoded()
}

#[cfg(test)]
mod speed_test {
    use dexcalc_data::Nature;
    use pretty_assertions::assert_eq;

    use crate::speed::{
        SpeedModifiers,
        SpeedOrder,
        SpeedTier,
        apply_speed_modifiers,
        calculate_speed_tier,
        calculate_speed_tier_signed,
        sort_by_speed,
    };

    fn tier(value: i32) -> SpeedTier {
        SpeedTier {
            value,
            order: SpeedOrder::Descending,
        }
    }

    #[test]
    fn applies_choice_scarf_after_nature() {
        let scarf = SpeedModifiers {
            choice_scarf: true,
            ..Default::default()
        };
        assert_eq!(
            calculate_speed_tier(130, 31, 252, 50, Some(Nature::Timid), &Default::default()),
            tier(200)
        );
        assert_eq!(
            calculate_speed_tier(130, 31, 252, 50, Some(Nature::Timid), &scarf),
            tier(300)
        );
    }

    #[test]
    fn applies_stages() {
        let with_stages = |speed_stages| SpeedModifiers {
            speed_stages,
            ..Default::default()
        };
        assert_eq!(apply_speed_modifiers(101, &with_stages(0)), 101);
        assert_eq!(apply_speed_modifiers(101, &with_stages(1)), 151);
        assert_eq!(apply_speed_modifiers(101, &with_stages(2)), 202);
        assert_eq!(apply_speed_modifiers(101, &with_stages(6)), 404);
        assert_eq!(apply_speed_modifiers(101, &with_stages(-1)), 50);
    }

    #[test]
    fn stages_are_not_clamped() {
        let with_stages = |speed_stages| SpeedModifiers {
            speed_stages,
            ..Default::default()
        };
        assert_eq!(apply_speed_modifiers(101, &with_stages(8)), 505);
        assert_eq!(apply_speed_modifiers(101, &with_stages(12)), 707);
        assert_eq!(apply_speed_modifiers(101, &with_stages(-2)), 0);
        // 101 * -1 / 2 floors to -51.
        assert_eq!(apply_speed_modifiers(101, &with_stages(-3)), -51);
    }

    #[test]
    fn applies_modifiers_in_order_flooring_each_step() {
        let all = SpeedModifiers {
            speed_stages: 1,
            choice_scarf: true,
            tailwind: true,
            sticky_web: true,
            paralysis: true,
            trick_room: false,
        };
        // 101 -> 151 -> 226 -> 452 -> 226 -> 113.
        assert_eq!(apply_speed_modifiers(101, &all), 113);

        let halved = SpeedModifiers {
            sticky_web: true,
            paralysis: true,
            ..Default::default()
        };
        // Flooring each step: 101 -> 50 -> 25, not 101 / 4 rounded once.
        assert_eq!(apply_speed_modifiers(101, &halved), 25);
        assert_eq!(apply_speed_modifiers(103, &halved), 25);
    }

    #[test]
    fn trick_room_reverses_order_without_changing_value() {
        let trick_room = SpeedModifiers {
            trick_room: true,
            ..Default::default()
        };
        let result = calculate_speed_tier(130, 31, 252, 50, Some(Nature::Timid), &trick_room);
        assert_eq!(result.value, 200);
        assert_eq!(result.order, SpeedOrder::Ascending);
        assert_eq!(result.sign_encoded(), -200);
        assert_eq!(
            calculate_speed_tier_signed(130, 31, 252, 50, Some(Nature::Timid), &trick_room),
            -200
        );
        assert_eq!(
            calculate_speed_tier_signed(130, 31, 252, 50, Some(Nature::Timid), &Default::default()),
            200
        );
    }

    #[test]
    fn sorts_into_turn_order() {
        let mut tiers = vec![tier(100), tier(200), tier(150), tier(200)];
        sort_by_speed(&mut tiers);
        assert_eq!(
            tiers.iter().map(|tier| tier.value).collect::<Vec<_>>(),
            [200, 200, 150, 100]
        );

        let mut tiers = tiers
            .into_iter()
            .map(|tier| SpeedTier {
                order: SpeedOrder::Ascending,
                ..tier
            })
            .collect::<Vec<_>>();
        sort_by_speed(&mut tiers);
        assert_eq!(
            tiers.iter().map(|tier| tier.value).collect::<Vec<_>>(),
            [100, 150, 200, 200]
        );
    }

    #[test]
    fn outspeeds_is_strict() {
        assert!(tier(101).outspeeds(&tier(100)));
        assert!(!tier(100).outspeeds(&tier(100)));
        let slow = SpeedTier {
            value: 30,
            order: SpeedOrder::Ascending,
        };
        let fast = SpeedTier {
            value: 130,
            order: SpeedOrder::Ascending,
        };
        assert!(slow.outspeeds(&fast));
    }
}
