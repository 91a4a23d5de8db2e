//! Core engine types: dice, bids, players, state, actions, RNG, configuration.
//!
//! This module holds the data the rules operate on. Legality of actions is
//! decided in `rules`.

pub mod action;
pub mod bid;
pub mod config;
pub mod dice;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, RerollIndices};
pub use bid::Bid;
pub use config::{BotConfig, ChallengeBand, MatchConfig, SeatConfig, DEFAULT_STARTING_DICE};
pub use dice::{is_valid_face, DiceCup, Face, FACE_MAX, FACE_MIN};
pub use player::{Player, PlayerId, PlayerKind, PlayerView};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use state::GameState;
