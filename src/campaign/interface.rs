//! The collaborator boundary
//!
//! The core never touches stdin or stdout. Everything it needs from the
//! outside world comes through [`CampaignIo`]; everything it has to say
//! goes out as a [`CampaignEvent`]. Input validation (menu parsing,
//! re-prompting) is the implementor's job; the core re-requests when a
//! supplied choice is out of range instead of crashing.

use std::collections::VecDeque;

use crate::campaign::events::CampaignEvent;
use crate::catalog::{ClassSpec, Weapon};
use crate::core::types::ClassId;
use crate::progression::LevelUpPreview;

/// Input requests and output events between the core and its shell
pub trait CampaignIo {
    /// Pick the starting class from the menu
    fn choose_starting_class(&mut self, classes: &[&ClassSpec]) -> ClassId;

    /// Name the hero; implementors guarantee the result is non-empty
    fn provide_name(&mut self) -> String;

    /// Block until the player confirms their attack
    fn confirm_attack(&mut self);

    /// Pick a class to level into, given one preview row per class
    fn choose_level_up_class(&mut self, previews: &[LevelUpPreview]) -> ClassId;

    /// Swap the equipped weapon for the offered one?
    fn confirm_loot_swap(&mut self, offered: &Weapon, current: &Weapon) -> bool;

    /// Start another session after this one ends?
    fn confirm_restart(&mut self) -> bool;

    /// Receive one structured output event
    fn notify(&mut self, event: &CampaignEvent);
}

/// Scripted collaborator: canned choices, recorded events
///
/// Drives whole campaigns from tests. Class choices are consumed in order;
/// when the scripts run dry it falls back to the first candidate, always
/// attacks, and declines loot and restarts.
#[derive(Debug, Default)]
pub struct ScriptedIo {
    pub class_choices: VecDeque<ClassId>,
    pub loot_choices: VecDeque<bool>,
    pub name: String,
    pub events: Vec<CampaignEvent>,
}

impl ScriptedIo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_class_choices(mut self, choices: impl IntoIterator<Item = ClassId>) -> Self {
        self.class_choices = choices.into_iter().collect();
        self
    }

    pub fn with_loot_choices(mut self, choices: impl IntoIterator<Item = bool>) -> Self {
        self.loot_choices = choices.into_iter().collect();
        self
    }
}

impl CampaignIo for ScriptedIo {
    fn choose_starting_class(&mut self, classes: &[&ClassSpec]) -> ClassId {
        self.class_choices
            .pop_front()
            .unwrap_or_else(|| classes[0].id)
    }

    fn provide_name(&mut self) -> String {
        self.name.clone()
    }

    fn confirm_attack(&mut self) {}

    fn choose_level_up_class(&mut self, previews: &[LevelUpPreview]) -> ClassId {
        self.class_choices
            .pop_front()
            .unwrap_or_else(|| previews[0].class)
    }

    fn confirm_loot_swap(&mut self, _offered: &Weapon, _current: &Weapon) -> bool {
        self.loot_choices.pop_front().unwrap_or(false)
    }

    fn confirm_restart(&mut self) -> bool {
        false
    }

    fn notify(&mut self, event: &CampaignEvent) {
        self.events.push(event.clone());
    }
}
