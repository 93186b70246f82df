//! Leveling and perks
//!
//! A character holds at most [`LEVEL_CAP`] levels across all classes.
//! Perks at levels 1-2 are capability unlocks: no stat changes, their whole
//! effect is the level-count checks inside `combat`. Level 3 in any class
//! grants +1 to that class's signature attribute.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::core::error::Result;
use crate::core::types::ClassId;
use crate::player::Player;

/// Maximum total levels across all classes
pub const LEVEL_CAP: u32 = 3;

/// Stat change granted by a perk, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerkEffect {
    /// Capability unlock only; combat reads the level count directly
    None,
    Strength(i32),
    Dexterity(i32),
    Stamina(i32),
}

/// Stat effect of reaching `level` (1..=3) in `class`
///
/// Tagged-variant dispatch instead of per-class polymorphism: the whole
/// perk table is one match.
pub fn perk_effect(class: ClassId, level: u32) -> PerkEffect {
    match (class, level) {
        (ClassId::Rogue, 2) => PerkEffect::Dexterity(1),
        (ClassId::Warrior, 3) => PerkEffect::Strength(1),
        (ClassId::Barbarian, 3) => PerkEffect::Stamina(1),
        _ => PerkEffect::None,
    }
}

/// Result of a level-up attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LevelUpOutcome {
    /// Total level already at the cap; nothing was changed
    CapReached,
    Applied {
        class: ClassId,
        new_level: u32,
        max_hp: i32,
        perk: &'static str,
    },
}

/// One row of the level-up menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelUpPreview {
    pub class: ClassId,
    pub class_name: &'static str,
    pub current_level: u32,
    pub next_level: u32,
    /// What reaching `next_level` would grant
    pub perk: &'static str,
}

/// Menu rows for every class the player could level into
pub fn next_level_previews(player: &Player, catalog: &Catalog) -> Result<Vec<LevelUpPreview>> {
    let mut previews = Vec::with_capacity(ClassId::ALL.len());
    for class_id in ClassId::ALL {
        let class = catalog.class(class_id)?;
        let current_level = player.class_level(class_id);
        let next_level = current_level + 1;
        previews.push(LevelUpPreview {
            class: class_id,
            class_name: class.name,
            current_level,
            next_level,
            perk: class.perk_description(next_level),
        });
    }
    Ok(previews)
}

/// Grant one level in `class`, or report the cap
///
/// On success: the class counter rises, max HP grows by
/// `hp_per_level + stamina` (stamina read before the perk, so a Barbarian
/// reaching level 3 doesn't count its own +1), the player fully heals, and
/// the level perk applies. At the cap this is a no-op by design, not an
/// error.
pub fn level_up(player: &mut Player, class: ClassId, catalog: &Catalog) -> Result<LevelUpOutcome> {
    if player.total_level() >= LEVEL_CAP {
        return Ok(LevelUpOutcome::CapReached);
    }
    let spec = catalog.class(class)?;

    let new_level = player.raise_class_level(class);
    player.max_hp += spec.hp_per_level + player.attributes.stamina;
    player.heal_full();

    match perk_effect(class, new_level) {
        PerkEffect::None => {}
        PerkEffect::Strength(delta) => player.attributes.strength += delta,
        PerkEffect::Dexterity(delta) => player.attributes.dexterity += delta,
        PerkEffect::Stamina(delta) => player.attributes.stamina += delta,
    }

    tracing::debug!(?class, new_level, max_hp = player.max_hp, "level up");

    Ok(LevelUpOutcome::Applied {
        class,
        new_level,
        max_hp: player.max_hp,
        perk: spec.perk_description(new_level),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Attributes;

    fn fresh(class: ClassId) -> (Player, Catalog) {
        let catalog = Catalog::standard();
        let player = Player::new(
            "Tester".to_string(),
            Attributes::new(2, 2, 2),
            catalog.class(class).unwrap(),
        );
        (player, catalog)
    }

    #[test]
    fn level_up_grows_hp_and_heals() {
        let (mut player, catalog) = fresh(ClassId::Warrior);
        player.take_damage(3);
        let before_max = player.max_hp;
        let outcome = level_up(&mut player, ClassId::Warrior, &catalog).unwrap();
        // Warrior hp_per_level 5 + stamina 2
        assert_eq!(player.max_hp, before_max + 7);
        assert_eq!(player.hp, player.max_hp);
        assert_eq!(
            outcome,
            LevelUpOutcome::Applied {
                class: ClassId::Warrior,
                new_level: 2,
                max_hp: player.max_hp,
                perk: "Shield: if your STR exceeds the enemy's, incoming damage -3",
            }
        );
    }

    #[test]
    fn early_levels_change_no_attributes() {
        let (mut player, catalog) = fresh(ClassId::Warrior);
        let before = player.attributes;
        level_up(&mut player, ClassId::Warrior, &catalog).unwrap();
        level_up(&mut player, ClassId::Barbarian, &catalog).unwrap();
        assert_eq!(player.attributes, before);
    }

    #[test]
    fn rogue_gets_dex_at_two_and_only_a_poison_unlock_at_three() {
        let (mut player, catalog) = fresh(ClassId::Rogue);
        level_up(&mut player, ClassId::Rogue, &catalog).unwrap();
        // Rogue level 2 is the DEX perk
        assert_eq!(player.attributes.dexterity, 3);
        level_up(&mut player, ClassId::Rogue, &catalog).unwrap();
        assert_eq!(player.class_level(ClassId::Rogue), 3);
        assert_eq!(player.attributes.dexterity, 3);
    }

    #[test]
    fn barbarian_hp_formula_reads_stamina_before_the_perk() {
        let (mut player, catalog) = fresh(ClassId::Barbarian);
        level_up(&mut player, ClassId::Barbarian, &catalog).unwrap();
        let before_max = player.max_hp;
        level_up(&mut player, ClassId::Barbarian, &catalog).unwrap();
        // Level 3: +6 hp_per_level + 2 old stamina, then STA becomes 3
        assert_eq!(player.max_hp, before_max + 8);
        assert_eq!(player.attributes.stamina, 3);
    }

    #[test]
    fn cap_reached_is_a_noop() {
        let (mut player, catalog) = fresh(ClassId::Warrior);
        level_up(&mut player, ClassId::Rogue, &catalog).unwrap();
        level_up(&mut player, ClassId::Barbarian, &catalog).unwrap();
        assert_eq!(player.total_level(), LEVEL_CAP);

        let snapshot = (player.attributes, player.max_hp, player.hp);
        let outcome = level_up(&mut player, ClassId::Warrior, &catalog).unwrap();
        assert_eq!(outcome, LevelUpOutcome::CapReached);
        assert_eq!(player.total_level(), LEVEL_CAP);
        assert_eq!((player.attributes, player.max_hp, player.hp), snapshot);
    }

    #[test]
    fn previews_cover_all_classes_in_menu_order() {
        let (player, catalog) = fresh(ClassId::Warrior);
        let previews = next_level_previews(&player, &catalog).unwrap();
        let classes: Vec<ClassId> = previews.iter().map(|p| p.class).collect();
        assert_eq!(classes, ClassId::ALL.to_vec());
        let warrior = &previews[0];
        assert_eq!(warrior.current_level, 1);
        assert_eq!(warrior.next_level, 2);
    }
}
