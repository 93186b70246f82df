//! Campaign controller
//!
//! Owns the player and the encounter sequence: picks enemies from a
//! shuffled pool, drives each fight through the turn engine, and applies
//! the post-victory heal / loot / level-up ritual until the win target is
//! reached or the player falls.

pub mod events;
pub mod interface;

pub use events::CampaignEvent;
pub use interface::{CampaignIo, ScriptedIo};

use crate::catalog::{Catalog, ClassSpec};
use crate::combat::{shuffle, DiceRoller};
use crate::core::config::CampaignConfig;
use crate::core::error::Result;
use crate::core::types::{Attributes, ClassId, EnemyId};
use crate::encounter::{Encounter, TurnState};
use crate::player::Player;
use crate::progression::{level_up, next_level_previews, LevelUpOutcome, LEVEL_CAP};

/// One campaign: a catalog to draw from and a win target to reach
pub struct Campaign<'a> {
    catalog: &'a Catalog,
    config: CampaignConfig,
}

impl<'a> Campaign<'a> {
    pub fn new(catalog: &'a Catalog, config: CampaignConfig) -> Self {
        Self { catalog, config }
    }

    /// Create the session's character from the collaborator's choices
    ///
    /// Attributes are each rolled uniformly in 1..=3, so every character
    /// satisfies the hit-roll precondition (dexterity >= 1).
    pub fn recruit(&self, io: &mut dyn CampaignIo, dice: &mut dyn DiceRoller) -> Result<Player> {
        let mut classes: Vec<&ClassSpec> = Vec::with_capacity(ClassId::ALL.len());
        for id in ClassId::ALL {
            classes.push(self.catalog.class(id)?);
        }
        let chosen = io.choose_starting_class(&classes);
        let class = self.catalog.class(chosen)?;
        let name = io.provide_name();

        let attributes = Attributes::new(dice.roll(1, 3), dice.roll(1, 3), dice.roll(1, 3));
        let player = Player::new(name, attributes, class);
        tracing::info!(
            name = %player.name,
            class = ?class.id,
            ?attributes,
            "recruited hero"
        );
        Ok(player)
    }

    /// Run the campaign to success (`Ok(true)`) or defeat (`Ok(false)`)
    pub fn run(
        &self,
        player: &mut Player,
        io: &mut dyn CampaignIo,
        dice: &mut dyn DiceRoller,
    ) -> Result<bool> {
        let mut pool: Vec<EnemyId> = self.catalog.enemy_ids();
        shuffle(&mut pool, dice);
        let mut next = 0;
        let mut wins = 0;

        while wins < self.config.wins_to_finish {
            if next >= pool.len() {
                shuffle(&mut pool, dice);
                next = 0;
            }
            let enemy_id = pool[next];
            next += 1;

            if !self.fight(player, enemy_id, io, dice)? {
                io.notify(&CampaignEvent::PlayerFell);
                io.notify(&CampaignEvent::CampaignLost);
                return Ok(false);
            }

            wins += 1;
            io.notify(&CampaignEvent::EncounterWon { enemy: enemy_id });
            self.spoils(player, enemy_id, io)?;
            io.notify(&CampaignEvent::Progress {
                wins,
                target: self.config.wins_to_finish,
            });
        }

        io.notify(&CampaignEvent::CampaignWon);
        Ok(true)
    }

    /// One encounter; `Ok(true)` on player victory
    fn fight(
        &self,
        player: &mut Player,
        enemy_id: EnemyId,
        io: &mut dyn CampaignIo,
        dice: &mut dyn DiceRoller,
    ) -> Result<bool> {
        let enemy = self.catalog.enemy(enemy_id)?;
        let mut encounter = Encounter::new(self.catalog, player, enemy);
        io.notify(&CampaignEvent::EncounterStarted {
            enemy: enemy_id,
            enemy_name: enemy.name,
            enemy_hp: enemy.max_hp,
            first: match encounter.state() {
                TurnState::PlayerTurn => crate::encounter::Side::Player,
                _ => crate::encounter::Side::Enemy,
            },
        });

        loop {
            match encounter.state() {
                TurnState::PlayerTurn => {
                    io.confirm_attack();
                    let report = encounter.player_turn(dice)?;
                    io.notify(&CampaignEvent::TurnResolved(report));
                }
                TurnState::EnemyTurn => {
                    let report = encounter.enemy_turn(dice)?;
                    io.notify(&CampaignEvent::TurnResolved(report));
                }
                TurnState::PlayerWon => return Ok(true),
                TurnState::PlayerLost => return Ok(false),
            }
        }
    }

    /// Post-victory ritual: heal, loot offer, one level-up invitation
    fn spoils(
        &self,
        player: &mut Player,
        enemy_id: EnemyId,
        io: &mut dyn CampaignIo,
    ) -> Result<()> {
        player.heal_full();
        io.notify(&CampaignEvent::Healed {
            hp: player.hp,
            max_hp: player.max_hp,
        });

        let enemy = self.catalog.enemy(enemy_id)?;
        if let Some(reward) = enemy.reward_weapon {
            let offered = self.catalog.weapon(reward)?;
            let current = self.catalog.weapon(player.weapon)?;
            if io.confirm_loot_swap(offered, current) {
                player.weapon = reward;
                io.notify(&CampaignEvent::WeaponEquipped {
                    weapon: reward,
                    name: offered.name,
                });
            } else {
                io.notify(&CampaignEvent::WeaponKept {
                    weapon: player.weapon,
                    name: current.name,
                });
            }
        }

        if player.total_level() >= LEVEL_CAP {
            io.notify(&CampaignEvent::LevelUp(LevelUpOutcome::CapReached));
            return Ok(());
        }
        let previews = next_level_previews(player, self.catalog)?;
        // Re-request until the collaborator names an offered class; invalid
        // choices are the collaborator's to fix, never a crash
        let class = loop {
            let chosen = io.choose_level_up_class(&previews);
            if previews.iter().any(|p| p.class == chosen) {
                break chosen;
            }
            tracing::warn!(?chosen, "level-up choice not among candidates, re-requesting");
        };
        let outcome = level_up(player, class, self.catalog)?;
        io.notify(&CampaignEvent::LevelUp(outcome));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::ScriptedDice;

    #[test]
    fn recruit_uses_scripted_choices_and_rolled_attributes() {
        let catalog = Catalog::standard();
        let campaign = Campaign::new(&catalog, CampaignConfig::default());
        let mut io = ScriptedIo::new("Brander").with_class_choices([ClassId::Barbarian]);
        let mut dice = ScriptedDice::new([2, 3, 1]);
        let player = campaign.recruit(&mut io, &mut dice).unwrap();
        assert_eq!(player.name, "Brander");
        assert_eq!(player.class_level(ClassId::Barbarian), 1);
        assert_eq!(player.attributes, Attributes::new(2, 3, 1));
        // Barbarian hp_per_level 6 + stamina 1
        assert_eq!(player.max_hp, 7);
    }
}
