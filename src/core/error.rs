use thiserror::Error;

use crate::core::types::{ClassId, EnemyId, WeaponId};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Unknown weapon: {0:?}")]
    UnknownWeapon(WeaponId),

    #[error("Unknown class: {0:?}")]
    UnknownClass(ClassId),

    #[error("Unknown enemy: {0:?}")]
    UnknownEnemy(EnemyId),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Encounter is already over")]
    EncounterOver,

    #[error("Acted out of turn")]
    OutOfTurn,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
