//! Error types for match setup and turn validation.
//!
//! Two families:
//!
//! - `ConstructionError`: the roster or a dice cup could not be built.
//!   Fatal to match setup.
//! - `IllegalAction`: a submitted action was rejected. Always recoverable;
//!   the state is left exactly as it was and the same actor may retry.

use thiserror::Error;

use crate::core::{Bid, Face};

/// Failure while setting up a match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A match needs at least two players.
    #[error("a match needs at least 2 players, got {0}")]
    TooFewPlayers(usize),

    /// Player ids are `u8`.
    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),

    /// Every player starts with more than one die.
    #[error("{player} needs at least 2 starting dice, got {dice}")]
    TooFewDice { player: String, dice: usize },

    /// A dice cup cannot be empty at creation.
    #[error("a dice cup must hold at least one die")]
    EmptyCup,

    /// A session is played from a human seat.
    #[error("a session needs at least one human seat")]
    NoHumanSeat,
}

/// A rejected action. State is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalAction {
    #[error("the match is already over")]
    MatchOver,

    #[error("face must be between 1 and 6, got {0}")]
    InvalidFace(Face),

    #[error("a bid needs a quantity of at least 1")]
    InvalidQuantity,

    #[error("cannot bid {quantity} dice, only {in_play} remain in the game")]
    ExceedsDiceInPlay { quantity: usize, in_play: usize },

    #[error("bid {bid} must be higher than {standing}")]
    NotHigher { bid: Bid, standing: Bid },

    #[error("cannot call a lie before any bid has been made")]
    NoStandingBid,

    #[error("a reroll must be followed by a bid")]
    MustBidAfterReroll,

    #[error("the reroll has already been used this match")]
    RerollAlreadyUsed,

    /// The standing bid is the highest possible; only a challenge remains.
    #[error("the standing bid cannot be raised, call it a lie instead")]
    NoRaiseAvailable,

    #[error("the current player is not a bot")]
    NotBotTurn,

    #[error("it is not your turn")]
    NotYourTurn,
}
