//! The turn engine
//!
//! One `Encounter` runs a single fight as a four-state machine. It borrows
//! the player and the catalog, owns the enemy's current HP and both turn
//! counters, and is dropped when a terminal state is reached; nothing
//! carries over between fights.

use serde::Serialize;

use crate::catalog::{Catalog, EnemyTemplate};
use crate::combat::{
    apply_enemy_weakness, enemy_raw_damage, player_offense_parts, reduce_incoming_to_player,
    roll_hit, DiceRoller,
};
use crate::core::error::{GameError, Result};
use crate::player::Player;

/// Whose turn it is, or how the fight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TurnState {
    PlayerTurn,
    EnemyTurn,
    PlayerWon,
    PlayerLost,
}

impl TurnState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnState::PlayerWon | TurnState::PlayerLost)
    }
}

/// Which side acted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Player,
    Enemy,
}

/// Structured outcome of one resolved turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub attacker: Side,
    /// The attacker's own turn count, starting at 1
    pub turn: u32,
    pub hit: bool,
    /// Damage dealt after weakness/mitigation; 0 on a miss
    pub damage: i32,
    /// Defender HP after the turn
    pub defender_hp: i32,
}

/// A single fight in progress
#[derive(Debug)]
pub struct Encounter<'a> {
    player: &'a mut Player,
    enemy: &'a EnemyTemplate,
    catalog: &'a Catalog,
    enemy_hp: i32,
    state: TurnState,
    player_turns: u32,
    enemy_turns: u32,
}

impl<'a> Encounter<'a> {
    /// Open a fight; the quicker side goes first, ties favor the player
    pub fn new(catalog: &'a Catalog, player: &'a mut Player, enemy: &'a EnemyTemplate) -> Self {
        let state = if player.attributes.dexterity >= enemy.attributes.dexterity {
            TurnState::PlayerTurn
        } else {
            TurnState::EnemyTurn
        };
        tracing::debug!(enemy = enemy.name, first = ?state, "encounter opened");
        Self {
            player,
            enemy,
            catalog,
            enemy_hp: enemy.max_hp,
            state,
            player_turns: 0,
            enemy_turns: 0,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn enemy_hp(&self) -> i32 {
        self.enemy_hp
    }

    /// Resolve one player attack; the caller obtains the attack
    /// confirmation before calling
    pub fn player_turn(&mut self, dice: &mut dyn DiceRoller) -> Result<TurnReport> {
        match self.state {
            TurnState::PlayerTurn => {}
            TurnState::EnemyTurn => return Err(GameError::OutOfTurn),
            _ => return Err(GameError::EncounterOver),
        }
        self.player_turns += 1;

        let hit = roll_hit(
            dice,
            self.player.attributes.dexterity,
            self.enemy.attributes.dexterity,
        );
        let damage = if hit {
            let weapon = self.catalog.weapon(self.player.weapon)?;
            let parts =
                player_offense_parts(self.player, self.enemy, weapon, self.player_turns);
            apply_enemy_weakness(self.enemy, weapon, parts)
        } else {
            0
        };
        self.enemy_hp = (self.enemy_hp - damage).max(0);

        self.state = if self.enemy_hp == 0 {
            TurnState::PlayerWon
        } else {
            TurnState::EnemyTurn
        };

        Ok(TurnReport {
            attacker: Side::Player,
            turn: self.player_turns,
            hit,
            damage,
            defender_hp: self.enemy_hp,
        })
    }

    /// Resolve one enemy attack
    pub fn enemy_turn(&mut self, dice: &mut dyn DiceRoller) -> Result<TurnReport> {
        match self.state {
            TurnState::EnemyTurn => {}
            TurnState::PlayerTurn => return Err(GameError::OutOfTurn),
            _ => return Err(GameError::EncounterOver),
        }
        self.enemy_turns += 1;

        let hit = roll_hit(
            dice,
            self.enemy.attributes.dexterity,
            self.player.attributes.dexterity,
        );
        let damage = if hit {
            let raw = enemy_raw_damage(self.enemy, self.player, self.enemy_turns);
            reduce_incoming_to_player(self.player, self.enemy, raw)
        } else {
            0
        };
        self.player.take_damage(damage);

        self.state = if self.player.is_defeated() {
            TurnState::PlayerLost
        } else {
            TurnState::PlayerTurn
        };

        Ok(TurnReport {
            attacker: Side::Enemy,
            turn: self.enemy_turns,
            hit,
            damage,
            defender_hp: self.player.hp,
        })
    }
}
