//! Incoming-damage mitigation on the player's side

use crate::catalog::EnemyTemplate;
use crate::core::types::ClassId;
use crate::player::Player;

/// Reduce an enemy hit by the player's defensive perks, clamped at zero
///
/// Warrior 2+ shaves 3 off on a strength edge; Barbarian 2+ soaks the
/// player's stamina. Both can apply to the same hit.
pub fn reduce_incoming_to_player(player: &Player, enemy: &EnemyTemplate, raw: i32) -> i32 {
    let mut damage = raw;
    if player.class_level(ClassId::Warrior) >= 2
        && player.attributes.strength > enemy.attributes.strength
    {
        damage -= 3;
    }
    if player.class_level(ClassId::Barbarian) >= 2 {
        damage -= player.attributes.stamina;
    }
    damage.max(0)
}
