//! Immutable reference data: weapons, character classes, enemies
//!
//! The catalog is populated once at startup and only ever read afterwards.
//! Lookups are fallible: a miss means the data shipped with the binary is
//! inconsistent, not that the caller did something recoverable.

pub mod classes;
pub mod enemies;
pub mod weapons;

pub use classes::ClassSpec;
pub use enemies::EnemyTemplate;
pub use weapons::Weapon;

use std::collections::HashMap;

use crate::core::error::{GameError, Result};
use crate::core::types::{ClassId, EnemyId, WeaponId};

/// Read-only registry of all game entities
#[derive(Debug, Clone)]
pub struct Catalog {
    weapons: HashMap<WeaponId, Weapon>,
    classes: HashMap<ClassId, ClassSpec>,
    enemies: HashMap<EnemyId, EnemyTemplate>,
}

impl Catalog {
    /// Empty catalog - tests build partial catalogs from this
    pub fn empty() -> Self {
        Self {
            weapons: HashMap::new(),
            classes: HashMap::new(),
            enemies: HashMap::new(),
        }
    }

    /// The standard game content
    pub fn standard() -> Self {
        let mut catalog = Self::empty();
        for weapon in weapons::WEAPON_LIBRARY {
            catalog.add_weapon(weapon.clone());
        }
        for class in classes::CLASS_LIBRARY {
            catalog.add_class(class.clone());
        }
        for enemy in enemies::ENEMY_LIBRARY {
            catalog.add_enemy(enemy.clone());
        }
        catalog
    }

    pub fn add_weapon(&mut self, weapon: Weapon) {
        self.weapons.insert(weapon.id, weapon);
    }

    pub fn add_class(&mut self, class: ClassSpec) {
        self.classes.insert(class.id, class);
    }

    pub fn add_enemy(&mut self, enemy: EnemyTemplate) {
        self.enemies.insert(enemy.id, enemy);
    }

    pub fn weapon(&self, id: WeaponId) -> Result<&Weapon> {
        self.weapons.get(&id).ok_or(GameError::UnknownWeapon(id))
    }

    pub fn class(&self, id: ClassId) -> Result<&ClassSpec> {
        self.classes.get(&id).ok_or(GameError::UnknownClass(id))
    }

    pub fn enemy(&self, id: EnemyId) -> Result<&EnemyTemplate> {
        self.enemies.get(&id).ok_or(GameError::UnknownEnemy(id))
    }

    /// All enemy ids, in a stable order (the campaign shuffles its own copy)
    pub fn enemy_ids(&self) -> Vec<EnemyId> {
        let mut ids: Vec<EnemyId> = self.enemies.keys().copied().collect();
        ids.sort_by_key(|id| format!("{id:?}"));
        ids
    }
}
