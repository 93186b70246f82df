//! Combat math
//!
//! Pure functions only: the single source of randomness is the
//! [`DiceRoller`] seam, so every formula here is checkable with pinned
//! inputs. Class perks act through the player's level counts, never
//! through extra state.

pub mod defense;
pub mod dice;
pub mod offense;

pub use defense::reduce_incoming_to_player;
pub use dice::{roll_hit, shuffle, DiceRoller, ScriptedDice, SeededDice};
pub use offense::{apply_enemy_weakness, enemy_raw_damage, player_offense_parts, OffenseParts};
