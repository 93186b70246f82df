//! Structured output events
//!
//! The core narrates a campaign as a stream of these; the shell (or a test
//! recorder) decides how to render them. No prose lives in the core.

use serde::Serialize;

use crate::core::types::{EnemyId, WeaponId};
use crate::encounter::{Side, TurnReport};
use crate::progression::LevelUpOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CampaignEvent {
    EncounterStarted {
        enemy: EnemyId,
        enemy_name: &'static str,
        enemy_hp: i32,
        first: Side,
    },
    TurnResolved(TurnReport),
    EncounterWon {
        enemy: EnemyId,
    },
    PlayerFell,
    /// Post-victory full heal
    Healed {
        hp: i32,
        max_hp: i32,
    },
    WeaponEquipped {
        weapon: WeaponId,
        name: &'static str,
    },
    WeaponKept {
        weapon: WeaponId,
        name: &'static str,
    },
    /// Level-up applied, or the cap notification
    LevelUp(LevelUpOutcome),
    Progress {
        wins: u32,
        target: u32,
    },
    CampaignWon,
    CampaignLost,
}
