//! Attack damage: class bonuses, enemy weaknesses, enemy attack quirks

use crate::catalog::{EnemyTemplate, Weapon};
use crate::core::types::{ClassId, DamageType, EnemyId};
use crate::player::Player;

/// Player damage split into its two components
///
/// The split matters: the Slime weakness discards `weapon_part` entirely,
/// while every class bonus (including the Warrior surge, which is *sized*
/// by the weapon's damage) accumulates into `other_part`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffenseParts {
    pub weapon_part: i32,
    pub other_part: i32,
}

impl OffenseParts {
    pub fn total(&self) -> i32 {
        self.weapon_part + self.other_part
    }
}

/// Compute the player's offense for their `turn`-th turn of the fight
/// (turns count from 1)
pub fn player_offense_parts(
    player: &Player,
    enemy: &EnemyTemplate,
    weapon: &Weapon,
    turn: u32,
) -> OffenseParts {
    let weapon_part = weapon.damage;
    let mut other_part = player.attributes.strength;

    // Rogue 1+: sneak attack on a dexterity edge
    if player.class_level(ClassId::Rogue) >= 1
        && player.attributes.dexterity > enemy.attributes.dexterity
    {
        other_part += 1;
    }
    // Rogue 3: poison ramps from the second turn on
    if player.class_level(ClassId::Rogue) >= 3 && turn >= 2 {
        other_part += (turn - 1) as i32;
    }
    // Warrior 1+: first-turn surge, sized by the weapon but kept in
    // other_part so it lands even through the Slime rule
    if player.class_level(ClassId::Warrior) >= 1 && turn == 1 {
        other_part += weapon.damage;
    }
    // Barbarian 1+: rage burns out after three turns
    if player.class_level(ClassId::Barbarian) >= 1 {
        other_part += if turn <= 3 { 2 } else { -1 };
    }

    OffenseParts {
        weapon_part,
        other_part,
    }
}

/// Resolve the enemy's weakness (or resistance) against the split offense
///
/// Exactly one rule applies per enemy; the default clamp covers everyone
/// without a special rule. Never returns a negative value.
pub fn apply_enemy_weakness(enemy: &EnemyTemplate, weapon: &Weapon, parts: OffenseParts) -> i32 {
    let total = parts.total();
    match enemy.id {
        EnemyId::Skeleton if weapon.damage_type == DamageType::Bludgeoning => total * 2,
        EnemyId::Slime if weapon.damage_type == DamageType::Slashing => parts.other_part.max(0),
        EnemyId::Golem => (total - enemy.attributes.stamina).max(0),
        _ => total.max(0),
    }
}

/// Raw damage of an enemy hit on the enemy's `enemy_turn`-th turn
/// (turns count from 1); mitigation is applied separately
pub fn enemy_raw_damage(enemy: &EnemyTemplate, player: &Player, enemy_turn: u32) -> i32 {
    let mut raw = enemy.weapon_damage + enemy.attributes.strength;
    if enemy.id == EnemyId::Ghost && enemy.attributes.dexterity > player.attributes.dexterity {
        raw += 1;
    }
    if enemy.id == EnemyId::Dragon && enemy_turn % 3 == 0 {
        raw += 3;
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::types::{Attributes, WeaponId};
    use crate::progression::level_up;

    fn player_with_levels(attributes: Attributes, levels: &[ClassId]) -> Player {
        let catalog = Catalog::standard();
        let (first, rest) = levels.split_first().expect("at least one level");
        let mut player = Player::new(
            "Tester".to_string(),
            attributes,
            catalog.class(*first).unwrap(),
        );
        for class in rest {
            level_up(&mut player, *class, &catalog).unwrap();
        }
        player
    }

    #[test]
    fn offense_is_weapon_plus_strength_without_perks() {
        let catalog = Catalog::standard();
        // Warrior perks only fire on turn 1; turn 2 is the bare baseline
        let player = player_with_levels(Attributes::new(2, 1, 1), &[ClassId::Warrior]);
        let enemy = catalog.enemy(EnemyId::Goblin).unwrap();
        let weapon = catalog.weapon(player.weapon).unwrap();
        let parts = player_offense_parts(&player, enemy, weapon, 2);
        assert_eq!(parts.weapon_part, 3);
        assert_eq!(parts.other_part, 2);
    }

    #[test]
    fn warrior_surge_fires_only_on_first_turn() {
        let catalog = Catalog::standard();
        let player = player_with_levels(Attributes::new(2, 2, 2), &[ClassId::Warrior]);
        let enemy = catalog.enemy(EnemyId::Goblin).unwrap();
        let weapon = catalog.weapon(player.weapon).unwrap();
        let first = player_offense_parts(&player, enemy, weapon, 1);
        let second = player_offense_parts(&player, enemy, weapon, 2);
        assert_eq!(first.other_part, 2 + 3);
        assert_eq!(second.other_part, 2);
    }

    #[test]
    fn warrior_surge_survives_slime_rule() {
        // Spec scenario: STR 2, Sword (3, Slashing), warrior 1, vs Slime,
        // turn 1. The Slime discards weapon_part but the surge rode along
        // in other_part: damage 5.
        let catalog = Catalog::standard();
        let player = player_with_levels(Attributes::new(2, 2, 2), &[ClassId::Warrior]);
        let enemy = catalog.enemy(EnemyId::Slime).unwrap();
        let weapon = catalog.weapon(WeaponId::Sword).unwrap();
        let parts = player_offense_parts(&player, enemy, weapon, 1);
        assert_eq!(parts.weapon_part, 3);
        assert_eq!(parts.other_part, 5);
        assert_eq!(apply_enemy_weakness(enemy, weapon, parts), 5);
    }

    #[test]
    fn rogue_poison_ramps_with_turns() {
        // Spec scenario: rogue 3, turn 3, DEX 3 vs 1 -> +1 sneak +2 poison
        let catalog = Catalog::standard();
        let player = player_with_levels(
            Attributes::new(1, 3, 1),
            &[ClassId::Rogue, ClassId::Rogue, ClassId::Rogue],
        );
        let enemy = catalog.enemy(EnemyId::Goblin).unwrap();
        let weapon = catalog.weapon(player.weapon).unwrap();
        let turn3 = player_offense_parts(&player, enemy, weapon, 3);
        let baseline = player.attributes.strength;
        assert_eq!(turn3.other_part, baseline + 3);
        // No poison on turn 1, sneak bonus still applies
        let turn1 = player_offense_parts(&player, enemy, weapon, 1);
        assert_eq!(turn1.other_part, baseline + 1);
    }

    #[test]
    fn rogue_sneak_needs_strict_dex_edge() {
        let catalog = Catalog::standard();
        // DEX 1 equals the Goblin's: no bonus
        let player = player_with_levels(Attributes::new(1, 1, 1), &[ClassId::Rogue]);
        let enemy = catalog.enemy(EnemyId::Goblin).unwrap();
        let weapon = catalog.weapon(player.weapon).unwrap();
        let parts = player_offense_parts(&player, enemy, weapon, 1);
        assert_eq!(parts.other_part, player.attributes.strength);
    }

    #[test]
    fn barbarian_rage_flips_to_penalty_after_turn_three() {
        let catalog = Catalog::standard();
        let player = player_with_levels(Attributes::new(2, 1, 2), &[ClassId::Barbarian]);
        let enemy = catalog.enemy(EnemyId::Goblin).unwrap();
        let weapon = catalog.weapon(player.weapon).unwrap();
        assert_eq!(player_offense_parts(&player, enemy, weapon, 3).other_part, 4);
        assert_eq!(player_offense_parts(&player, enemy, weapon, 4).other_part, 1);
    }

    #[test]
    fn skeleton_doubles_bludgeoning() {
        let catalog = Catalog::standard();
        let enemy = catalog.enemy(EnemyId::Skeleton).unwrap();
        let club = catalog.weapon(WeaponId::Club).unwrap();
        let sword = catalog.weapon(WeaponId::Sword).unwrap();
        let parts = OffenseParts {
            weapon_part: 3,
            other_part: 2,
        };
        assert_eq!(apply_enemy_weakness(enemy, club, parts), 10);
        assert_eq!(apply_enemy_weakness(enemy, sword, parts), 5);
    }

    #[test]
    fn golem_soaks_with_stamina_regardless_of_weapon_type() {
        let catalog = Catalog::standard();
        let enemy = catalog.enemy(EnemyId::Golem).unwrap();
        let parts = OffenseParts {
            weapon_part: 2,
            other_part: 1,
        };
        for id in [WeaponId::Sword, WeaponId::Club, WeaponId::Dagger] {
            let weapon = catalog.weapon(id).unwrap();
            assert_eq!(apply_enemy_weakness(enemy, weapon, parts), 0);
        }
        let big = OffenseParts {
            weapon_part: 4,
            other_part: 2,
        };
        let axe = catalog.weapon(WeaponId::Axe).unwrap();
        assert_eq!(apply_enemy_weakness(enemy, axe, big), 3);
    }

    #[test]
    fn ghost_and_dragon_attack_quirks() {
        let catalog = Catalog::standard();
        let slow = player_with_levels(Attributes::new(1, 1, 1), &[ClassId::Warrior]);
        let quick = player_with_levels(Attributes::new(1, 3, 1), &[ClassId::Warrior]);
        let ghost = catalog.enemy(EnemyId::Ghost).unwrap();
        assert_eq!(enemy_raw_damage(ghost, &slow, 1), 3 + 1 + 1);
        assert_eq!(enemy_raw_damage(ghost, &quick, 1), 3 + 1);

        let dragon = catalog.enemy(EnemyId::Dragon).unwrap();
        assert_eq!(enemy_raw_damage(dragon, &slow, 2), 4 + 3);
        assert_eq!(enemy_raw_damage(dragon, &slow, 3), 4 + 3 + 3);
        assert_eq!(enemy_raw_damage(dragon, &slow, 6), 4 + 3 + 3);
    }
}
