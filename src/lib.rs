//! # liars-dice
//!
//! A Liar's Dice rules engine with a probabilistic bot opponent.
//!
//! ## Rules
//!
//! Every player rolls a private cup of dice. Players bid in turn on how many
//! dice across the whole table show a face; each bid must raise the last one
//! (higher quantity, or same quantity and higher face). Instead of bidding a
//! player may call the last bid a lie:
//!
//! - the bid holds: the challenger loses 1 die
//! - the bid fails: the bidder loses 2 dice
//! - bidding every die on the table as a 6, and being right: instant win
//!
//! A player with fewer than 2 dice is eliminated. Each player may reroll any
//! of their dice once per match and must bid right after.
//!
//! ## Architecture
//!
//! - **Logic apart from state**: `RoundLogic` validates and applies actions
//!   against a `GameState` it borrows. Rejected actions leave the state
//!   untouched.
//!
//! - **Injected randomness**: dice and bot decisions draw from a
//!   `RandomSource`. `GameRng` (ChaCha8) makes seeded matches reproducible;
//!   `ScriptedRng` fixes dice for tests.
//!
//! ## Modules
//!
//! - `core`: dice, bids, players, state, actions, RNG, configuration
//! - `rules`: the round state machine and match setup
//! - `bot`: the bot policy and its probability model
//! - `session`: text commands, per-conversation sessions, session registry
//! - `error`: setup and action errors

pub mod bot;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Bid, BotConfig, DiceCup, Face, GameRng, GameState,
    MatchConfig, Player, PlayerId, PlayerKind, PlayerView, RandomSource, ScriptedRng, SeatConfig,
};

pub use crate::bot::{BotCall, BotPolicy};

pub use crate::error::{ConstructionError, IllegalAction};

pub use crate::rules::{
    new_match, BidAccepted, BotMove, BotTurn, ChallengeResolution, LegalActions, MatchBuilder,
    Phase, RoundLogic, Verdict,
};

pub use crate::session::{
    Command, GameSession, ParseCommandError, SessionError, SessionEvent, SessionRegistry,
};
