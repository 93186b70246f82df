//! Mutable player state
//!
//! One `Player` lives for a whole session. Combat borrows it, progression
//! mutates it, the campaign controller owns it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::ClassSpec;
use crate::core::types::{Attributes, ClassId, WeaponId};

/// Player character state
///
/// Invariants: `0 <= hp <= max_hp`, and the sum of class levels never
/// exceeds the level cap (enforced by `progression::level_up`, the only
/// place levels are raised).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub attributes: Attributes,
    pub weapon: WeaponId,
    pub hp: i32,
    pub max_hp: i32,
    levels: HashMap<ClassId, u32>,
}

impl Player {
    /// Create a fresh character: level 1 in `class`, its starting weapon,
    /// and `hp_per_level + stamina` max HP
    pub fn new(name: String, attributes: Attributes, class: &ClassSpec) -> Self {
        let max_hp = class.hp_per_level + attributes.stamina;
        let mut levels = HashMap::new();
        levels.insert(class.id, 1);
        Self {
            name,
            attributes,
            weapon: class.starting_weapon,
            hp: max_hp,
            max_hp,
            levels,
        }
    }

    /// Accumulated levels in one class
    pub fn class_level(&self, class: ClassId) -> u32 {
        self.levels.get(&class).copied().unwrap_or(0)
    }

    /// Sum of all class levels
    pub fn total_level(&self) -> u32 {
        self.levels.values().sum()
    }

    /// Raise one class level and return the new per-class level
    ///
    /// Callers check the level cap first; this only bumps the counter.
    pub(crate) fn raise_class_level(&mut self, class: ClassId) -> u32 {
        let entry = self.levels.entry(class).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Apply damage, flooring HP at zero
    pub fn take_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount).max(0);
    }

    /// Restore HP to the maximum
    pub fn heal_full(&mut self) {
        self.hp = self.max_hp;
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}
