//! Match and bot configuration.
//!
//! - `SeatConfig`: one player at the table (name, starting dice, bot or not)
//! - `MatchConfig`: the roster plus the RNG seed
//! - `BotConfig`: thresholds and chances used by the bot policy
//!
//! All three are plain serde structs so transports can load them from any
//! format they like.

use serde::{Deserialize, Serialize};

/// Default dice per player.
pub const DEFAULT_STARTING_DICE: usize = 5;

/// Configuration for a single seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name.
    pub name: String,

    /// Dice at match start. Must be greater than 1.
    pub starting_dice: usize,

    /// Seat is played by the bot policy.
    pub bot: bool,
}

impl SeatConfig {
    /// A human seat.
    pub fn human(name: impl Into<String>, starting_dice: usize) -> Self {
        Self {
            name: name.into(),
            starting_dice,
            bot: false,
        }
    }

    /// A bot seat.
    pub fn bot(name: impl Into<String>, starting_dice: usize) -> Self {
        Self {
            name: name.into(),
            starting_dice,
            bot: true,
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seats in turn order. The first seat acts first.
    pub seats: Vec<SeatConfig>,

    /// Seed for dice and bot decisions. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Policy settings shared by every bot seat.
    pub bot: BotConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seats: vec![
                SeatConfig::human("Player", DEFAULT_STARTING_DICE),
                SeatConfig::bot("Bot", DEFAULT_STARTING_DICE),
            ],
            seed: None,
            bot: BotConfig::default(),
        }
    }
}

impl MatchConfig {
    /// One human against `bots` bots, everyone with the same dice.
    pub fn against_bots(human: impl Into<String>, bots: usize, starting_dice: usize) -> Self {
        let mut seats = vec![SeatConfig::human(human, starting_dice)];
        seats.extend((0..bots).map(|i| {
            let name = if bots == 1 {
                "Bot".to_string()
            } else {
                format!("Bot {}", i + 1)
            };
            SeatConfig::bot(name, starting_dice)
        }));
        Self {
            seats,
            ..Self::default()
        }
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the bot policy configuration.
    #[must_use]
    pub fn with_bot_config(mut self, bot: BotConfig) -> Self {
        self.bot = bot;
        self
    }
}

/// A probability band for the challenge decision.
///
/// When the estimated probability that a bid is true is at least
/// `min_probability`, the bot challenges with `challenge_chance`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChallengeBand {
    pub min_probability: f64,
    pub challenge_chance: f64,
}

impl ChallengeBand {
    pub const fn new(min_probability: f64, challenge_chance: f64) -> Self {
        Self {
            min_probability,
            challenge_chance,
        }
    }
}

/// Bot policy parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Challenge bands, highest `min_probability` first. The first band the
    /// estimate reaches applies; an estimate below every band never
    /// challenges.
    pub challenge_bands: Vec<ChallengeBand>,

    /// Chance per turn of spending the reroll.
    pub reroll_chance: f64,

    /// Most dice rerolled at once.
    pub max_reroll_dice: usize,

    /// Lower bound of the per-call bluff chance.
    pub bluff_chance_min: f64,

    /// Width of the bluff chance range above `bluff_chance_min`.
    pub bluff_chance_spread: f64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            challenge_bands: vec![
                ChallengeBand::new(0.70, 0.0),
                ChallengeBand::new(0.40, 0.10),
                ChallengeBand::new(0.20, 0.30),
                ChallengeBand::new(0.0, 0.60),
            ],
            reroll_chance: 0.10,
            max_reroll_dice: 2,
            bluff_chance_min: 0.25,
            bluff_chance_spread: 0.10,
        }
    }
}

impl BotConfig {
    /// Set the reroll chance.
    #[must_use]
    pub fn with_reroll_chance(mut self, chance: f64) -> Self {
        self.reroll_chance = chance;
        self
    }

    /// Set the bluff chance range.
    #[must_use]
    pub fn with_bluff_range(mut self, min: f64, spread: f64) -> Self {
        self.bluff_chance_min = min;
        self.bluff_chance_spread = spread;
        self
    }

    /// Challenge chance for a given probability that the bid is true.
    #[must_use]
    pub fn challenge_chance(&self, probability: f64) -> f64 {
        self.challenge_bands
            .iter()
            .find(|band| probability >= band.min_probability)
            .map(|band| band.challenge_chance)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_match() {
        let config = MatchConfig::default();
        assert_eq!(config.seats.len(), 2);
        assert!(!config.seats[0].bot);
        assert!(config.seats[1].bot);
        assert_eq!(config.seats[0].starting_dice, 5);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_against_bots() {
        let config = MatchConfig::against_bots("Alice", 3, 4).with_seed(9);
        let names: Vec<_> = config.seats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bot 1", "Bot 2", "Bot 3"]);
        assert!(config.seats.iter().all(|s| s.starting_dice == 4));
        assert_eq!(config.seed, Some(9));

        let single = MatchConfig::against_bots("Alice", 1, 5);
        assert_eq!(single.seats[1].name, "Bot");
    }

    #[test]
    fn test_challenge_bands() {
        let config = BotConfig::default();
        assert_eq!(config.challenge_chance(0.95), 0.0);
        assert_eq!(config.challenge_chance(0.70), 0.0);
        assert_eq!(config.challenge_chance(0.69), 0.10);
        assert_eq!(config.challenge_chance(0.40), 0.10);
        assert_eq!(config.challenge_chance(0.39), 0.30);
        assert_eq!(config.challenge_chance(0.20), 0.30);
        assert_eq!(config.challenge_chance(0.19), 0.60);
        assert_eq!(config.challenge_chance(0.0), 0.60);
    }

    #[test]
    fn test_bot_config_builders() {
        let config = BotConfig::default()
            .with_reroll_chance(0.5)
            .with_bluff_range(0.1, 0.0);
        assert_eq!(config.reroll_chance, 0.5);
        assert_eq!(config.bluff_chance_min, 0.1);
        assert_eq!(config.bluff_chance_spread, 0.0);
    }

    #[test]
    fn test_config_serde() {
        let config = MatchConfig::against_bots("Alice", 2, 5).with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
