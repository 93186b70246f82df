//! Campaign configuration with documented constants

/// Configuration for a campaign run
///
/// These values set the pacing of a session. The combat formulas themselves
/// are not configurable; they live in `combat` and `progression`.
#[derive(Debug, Clone)]
pub struct CampaignConfig {
    /// Number of victories that ends the campaign in success
    ///
    /// At the default (5) a session outlasts the level cap, so the last
    /// encounters are fought with a fully-leveled character.
    pub wins_to_finish: u32,

    /// Seed for the dice stream (hit rolls, attribute generation,
    /// enemy-pool shuffling)
    ///
    /// Two sessions with the same seed and the same player choices play out
    /// identically. The binary replaces this with an entropy-derived value
    /// unless a seed is given on the command line.
    pub seed: u64,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            wins_to_finish: 5,
            seed: 0,
        }
    }
}
