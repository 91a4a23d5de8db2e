//! Match setup.
//!
//! `MatchBuilder` turns a list of seats into a ready `(RoundLogic, GameState)`
//! pair with every hand rolled for round 1.

use crate::bot::BotPolicy;
use crate::core::{
    BotConfig, GameRng, GameState, MatchConfig, Player, PlayerId, RandomSource, SeatConfig,
};
use crate::error::ConstructionError;

use super::engine::RoundLogic;

/// Builder for a new match.
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    seats: Vec<SeatConfig>,
    seed: Option<u64>,
    bot_config: BotConfig,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a full match configuration.
    pub fn from_config(config: MatchConfig) -> Self {
        Self {
            seats: config.seats,
            seed: config.seed,
            bot_config: config.bot,
        }
    }

    /// Add a human seat.
    pub fn human(self, name: impl Into<String>, starting_dice: usize) -> Self {
        self.seat(SeatConfig::human(name, starting_dice))
    }

    /// Add a bot seat.
    pub fn bot(self, name: impl Into<String>, starting_dice: usize) -> Self {
        self.seat(SeatConfig::bot(name, starting_dice))
    }

    pub fn seat(mut self, seat: SeatConfig) -> Self {
        self.seats.push(seat);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Policy settings for every bot seat.
    pub fn bot_config(mut self, config: BotConfig) -> Self {
        self.bot_config = config;
        self
    }

    /// Build with a `GameRng` from the configured seed, or from the OS if
    /// none was set.
    pub fn build(self) -> Result<(RoundLogic, GameState), ConstructionError> {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        self.build_with_rng(rng)
    }

    /// Build with an injected random source. The seed is ignored.
    pub fn build_with_rng(
        self,
        rng: impl RandomSource + Send + 'static,
    ) -> Result<(RoundLogic, GameState), ConstructionError> {
        new_match(&self.seats, &self.bot_config, rng)
    }
}

/// Create players for `seats` in order, roll round 1 and return the logic
/// and state ready for the first seat to act.
pub fn new_match(
    seats: &[SeatConfig],
    bot_config: &BotConfig,
    rng: impl RandomSource + Send + 'static,
) -> Result<(RoundLogic, GameState), ConstructionError> {
    if seats.len() < 2 {
        return Err(ConstructionError::TooFewPlayers(seats.len()));
    }
    if seats.len() > usize::from(u8::MAX) {
        return Err(ConstructionError::TooManyPlayers(seats.len()));
    }

    let players = seats
        .iter()
        .enumerate()
        .map(|(i, seat)| {
            // Bounded by the roster size check above.
            let id = PlayerId::new(i as u8);
            if seat.bot {
                Player::bot(
                    id,
                    seat.name.clone(),
                    seat.starting_dice,
                    BotPolicy::new(bot_config.clone()),
                )
            } else {
                Player::human(id, seat.name.clone(), seat.starting_dice)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut state = GameState::new(players, rng)?;
    state.start_round();

    log::debug!(
        "new match: {} players, {} dice in play",
        state.player_count(),
        state.total_dice_count()
    );
    Ok((RoundLogic::new(), state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;

    #[test]
    fn test_build_rolls_first_round() {
        let (logic, state) = MatchBuilder::new()
            .human("Alice", 5)
            .bot("Bot", 4)
            .seed(42)
            .build()
            .unwrap();

        assert!(!logic.is_match_over());
        assert_eq!(state.round(), 1);
        assert_eq!(state.total_dice_count(), 9);
        assert_eq!(state.current_player().name(), "Alice");
        assert!(state.players()[1].is_bot());
        assert!(state
            .players()
            .iter()
            .flat_map(Player::reveal_dice)
            .all(|d| (1..=6).contains(&d)));
    }

    #[test]
    fn test_same_seed_same_dice() {
        let build = || {
            MatchBuilder::from_config(MatchConfig::against_bots("Alice", 2, 5).with_seed(9))
                .build()
                .unwrap()
                .1
        };
        let a: Vec<_> = build().players().iter().map(Player::reveal_dice).collect();
        let b: Vec<_> = build().players().iter().map(Player::reveal_dice).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_roster_errors() {
        let err = MatchBuilder::new().human("Alice", 5).build().unwrap_err();
        assert_eq!(err, ConstructionError::TooFewPlayers(1));

        let err = MatchBuilder::new()
            .human("Alice", 5)
            .bot("Bot", 1)
            .build_with_rng(ScriptedRng::new(0))
            .unwrap_err();
        assert_eq!(
            err,
            ConstructionError::TooFewDice {
                player: "Bot".to_string(),
                dice: 1
            }
        );

        let mut builder = MatchBuilder::new();
        for i in 0..256 {
            builder = builder.human(format!("P{}", i), 2);
        }
        assert_eq!(
            builder.build().unwrap_err(),
            ConstructionError::TooManyPlayers(256)
        );
    }

    #[test]
    fn test_scripted_faces_land_in_roster_order() {
        let (_, state) = MatchBuilder::new()
            .human("Alice", 2)
            .human("Bob", 3)
            .build_with_rng(ScriptedRng::new(0).with_faces([1, 2, 3, 4, 5]))
            .unwrap();

        assert_eq!(state.players()[0].reveal_dice(), vec![1, 2]);
        assert_eq!(state.players()[1].reveal_dice(), vec![3, 4, 5]);
    }
}
