//! Enemy catalog
//!
//! Templates are immutable; each encounter tracks its own current-HP
//! counter derived from `max_hp`. Weakness and attack quirks keyed off
//! `EnemyId` live in `combat`.

use serde::Serialize;

use crate::core::types::{Attributes, EnemyId, WeaponId};

/// An immutable enemy template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnemyTemplate {
    pub id: EnemyId,
    pub name: &'static str,
    pub max_hp: i32,
    /// Flat damage of the enemy's weapon (enemies don't swap gear)
    pub weapon_damage: i32,
    pub attributes: Attributes,
    /// Weapon offered to the player on victory, if any
    pub reward_weapon: Option<WeaponId>,
}

/// All enemies in the game
pub static ENEMY_LIBRARY: &[EnemyTemplate] = &[
    EnemyTemplate {
        id: EnemyId::Goblin,
        name: "Goblin",
        max_hp: 5,
        weapon_damage: 2,
        attributes: Attributes {
            strength: 1,
            dexterity: 1,
            stamina: 1,
        },
        reward_weapon: Some(WeaponId::Dagger),
    },
    EnemyTemplate {
        id: EnemyId::Skeleton,
        name: "Skeleton",
        max_hp: 10,
        weapon_damage: 2,
        attributes: Attributes {
            strength: 2,
            dexterity: 2,
            stamina: 1,
        },
        reward_weapon: Some(WeaponId::Club),
    },
    EnemyTemplate {
        id: EnemyId::Slime,
        name: "Slime",
        max_hp: 8,
        weapon_damage: 1,
        attributes: Attributes {
            strength: 3,
            dexterity: 1,
            stamina: 2,
        },
        reward_weapon: Some(WeaponId::Spear),
    },
    EnemyTemplate {
        id: EnemyId::Ghost,
        name: "Ghost",
        max_hp: 6,
        weapon_damage: 3,
        attributes: Attributes {
            strength: 1,
            dexterity: 3,
            stamina: 1,
        },
        reward_weapon: Some(WeaponId::Sword),
    },
    EnemyTemplate {
        id: EnemyId::Golem,
        name: "Golem",
        max_hp: 10,
        weapon_damage: 1,
        attributes: Attributes {
            strength: 3,
            dexterity: 1,
            stamina: 3,
        },
        reward_weapon: Some(WeaponId::Axe),
    },
    EnemyTemplate {
        id: EnemyId::Dragon,
        name: "Dragon",
        max_hp: 20,
        weapon_damage: 4,
        attributes: Attributes {
            strength: 3,
            dexterity: 3,
            stamina: 3,
        },
        reward_weapon: Some(WeaponId::LegendarySword),
    },
];
