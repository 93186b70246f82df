//! Character class catalog
//!
//! A class contributes hit points per level, a starting weapon, and three
//! level perks. Perks at levels 1-2 are capability unlocks whose effect
//! lives entirely in the combat formulas keyed off the level count; level 3
//! always grants +1 to the class's signature attribute (see `progression`).

use serde::Serialize;

use crate::core::types::{ClassId, WeaponId};

/// An immutable class record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSpec {
    pub id: ClassId,
    pub name: &'static str,
    /// Max-HP gained per level in this class (stamina is added on top)
    pub hp_per_level: i32,
    pub starting_weapon: WeaponId,
    /// Perk descriptions for levels 1..=3, shown in level-up menus
    pub perks: [&'static str; 3],
}

impl ClassSpec {
    /// Description of the perk gained at `level` (1..=3)
    pub fn perk_description(&self, level: u32) -> &'static str {
        self.perks
            .get(level.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("-")
    }
}

/// All character classes in the game
pub static CLASS_LIBRARY: &[ClassSpec] = &[
    ClassSpec {
        id: ClassId::Warrior,
        name: "Warrior",
        hp_per_level: 5,
        starting_weapon: WeaponId::Sword,
        perks: [
            "Surge: on your first turn of a fight, bonus damage equal to your weapon's damage",
            "Shield: if your STR exceeds the enemy's, incoming damage -3",
            "STR +1",
        ],
    },
    ClassSpec {
        id: ClassId::Barbarian,
        name: "Barbarian",
        hp_per_level: 6,
        starting_weapon: WeaponId::Club,
        perks: [
            "Rage: +2 damage on your first 3 turns, -1 afterwards",
            "Stone skin: incoming damage reduced by your STA",
            "STA +1",
        ],
    },
    ClassSpec {
        id: ClassId::Rogue,
        name: "Rogue",
        hp_per_level: 4,
        starting_weapon: WeaponId::Dagger,
        perks: [
            "Sneak attack: +1 damage when your DEX exceeds the target's",
            "DEX +1",
            "Poison: +1 damage on your 2nd turn, +2 on your 3rd, and so on",
        ],
    },
];
