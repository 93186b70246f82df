//! The dice seam
//!
//! All randomness in the game flows through one uniform-integer primitive,
//! so tests can substitute a scripted stream and replay whole campaigns.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform-integer generator behind every random decision
pub trait DiceRoller {
    /// Uniform draw from `[low, high]`, both ends inclusive
    ///
    /// Precondition: `low <= high`.
    fn roll(&mut self, low: i32, high: i32) -> i32;
}

/// Production roller: deterministic stream from a seed
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DiceRoller for SeededDice {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        debug_assert!(low <= high);
        self.rng.gen_range(low..=high)
    }
}

/// Test roller: replays a fixed sequence of draws
///
/// Panics when the script runs dry, which in a test is the failure you want.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<i32>,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        let value = self.rolls.pop_front().expect("dice script exhausted");
        assert!(
            (low..=high).contains(&value),
            "scripted roll {value} outside [{low}, {high}]"
        );
        value
    }
}

/// Attack roll: uniform draw in `[1, attacker_dex + defender_dex]`,
/// hit iff the draw strictly exceeds `defender_dex`
///
/// Over many trials the hit rate converges to `a / (a + d)`.
///
/// Precondition: both values >= 0 and their sum >= 1. Attribute generation
/// always produces dexterity >= 1, so the empty range is unreachable in play.
pub fn roll_hit(dice: &mut dyn DiceRoller, attacker_dex: i32, defender_dex: i32) -> bool {
    debug_assert!(attacker_dex >= 0 && defender_dex >= 0);
    debug_assert!(attacker_dex + defender_dex >= 1);
    dice.roll(1, attacker_dex + defender_dex) > defender_dex
}

/// Fisher-Yates shuffle over the dice seam
///
/// Used for the campaign's enemy pool; going through [`DiceRoller`] keeps
/// shuffling replayable from the same script or seed as the hit rolls.
pub fn shuffle<T>(items: &mut [T], dice: &mut dyn DiceRoller) {
    for i in (1..items.len()).rev() {
        let j = dice.roll(0, i as i32) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_iff_roll_beats_defender_dex() {
        // Range [1, 5], defender dex 2: 1..=2 miss, 3..=5 hit
        let mut dice = ScriptedDice::new([2, 3, 1, 5]);
        assert!(!roll_hit(&mut dice, 3, 2));
        assert!(roll_hit(&mut dice, 3, 2));
        assert!(!roll_hit(&mut dice, 3, 2));
        assert!(roll_hit(&mut dice, 3, 2));
    }

    #[test]
    fn zero_defender_dex_always_hits() {
        let mut dice = SeededDice::new(7);
        for _ in 0..100 {
            assert!(roll_hit(&mut dice, 1, 0));
        }
    }

    #[test]
    fn hit_rate_converges_to_dex_ratio() {
        let mut dice = SeededDice::new(42);
        let (attacker, defender) = (3, 1);
        let trials = 20_000;
        let hits = (0..trials)
            .filter(|_| roll_hit(&mut dice, attacker, defender))
            .count();
        let rate = hits as f64 / trials as f64;
        let expected = attacker as f64 / (attacker + defender) as f64;
        assert!(
            (rate - expected).abs() < 0.02,
            "rate {rate} too far from {expected}"
        );
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut dice = SeededDice::new(9);
        let mut items = vec![1, 2, 3, 4, 5, 6];
        shuffle(&mut items, &mut dice);
        items.sort_unstable();
        assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    #[should_panic(expected = "dice script exhausted")]
    fn scripted_dice_panic_when_empty() {
        let mut dice = ScriptedDice::new([]);
        dice.roll(1, 6);
    }
}
