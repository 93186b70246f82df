//! Weapon catalog
//!
//! A weapon is base damage plus a damage type; the type matters only
//! through enemy weakness rules.

use serde::Serialize;

use crate::core::types::{DamageType, WeaponId};

/// An immutable weapon record
///
/// Names are `&'static str`, so records serialize for logging but are never
/// deserialized; content is compiled in, not loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Weapon {
    pub id: WeaponId,
    pub name: &'static str,
    /// Base damage, always positive
    pub damage: i32,
    pub damage_type: DamageType,
}

/// All weapons in the game
pub static WEAPON_LIBRARY: &[Weapon] = &[
    Weapon {
        id: WeaponId::Sword,
        name: "Sword",
        damage: 3,
        damage_type: DamageType::Slashing,
    },
    Weapon {
        id: WeaponId::Club,
        name: "Club",
        damage: 3,
        damage_type: DamageType::Bludgeoning,
    },
    Weapon {
        id: WeaponId::Dagger,
        name: "Dagger",
        damage: 2,
        damage_type: DamageType::Piercing,
    },
    Weapon {
        id: WeaponId::Axe,
        name: "Axe",
        damage: 4,
        damage_type: DamageType::Slashing,
    },
    Weapon {
        id: WeaponId::Spear,
        name: "Spear",
        damage: 3,
        damage_type: DamageType::Piercing,
    },
    Weapon {
        id: WeaponId::LegendarySword,
        name: "Legendary Sword",
        damage: 10,
        damage_type: DamageType::Slashing,
    },
];
