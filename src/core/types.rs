//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Weapon identifier - keys into the weapon catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponId {
    Sword,
    Club,
    Dagger,
    Axe,
    Spear,
    LegendarySword,
}

/// Character class identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassId {
    Rogue,
    Warrior,
    Barbarian,
}

impl ClassId {
    /// All classes, in menu order
    pub const ALL: [ClassId; 3] = [ClassId::Warrior, ClassId::Barbarian, ClassId::Rogue];
}

/// Enemy identifier - keys into the enemy catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyId {
    Goblin,
    Skeleton,
    Slime,
    Ghost,
    Golem,
    Dragon,
}

/// Weapon damage category - drives enemy weakness rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    Slashing,
    Bludgeoning,
    Piercing,
}

impl DamageType {
    /// Display label for prompts and summaries
    pub fn label(&self) -> &'static str {
        match self {
            DamageType::Slashing => "Slashing",
            DamageType::Bludgeoning => "Bludgeoning",
            DamageType::Piercing => "Piercing",
        }
    }
}

/// The three combat attributes shared by players and enemies
///
/// Attribute generation always produces values >= 1; combat math relies
/// on that (the hit-roll range must be non-empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i32,
    pub dexterity: i32,
    pub stamina: i32,
}

impl Attributes {
    pub fn new(strength: i32, dexterity: i32, stamina: i32) -> Self {
        Self {
            strength,
            dexterity,
            stamina,
        }
    }
}
