//! Turn validation and resolution.
//!
//! `RoundLogic` is the state machine that accepts or rejects bids, rerolls
//! and challenges, resolves challenges and drives bot turns. `MatchBuilder`
//! sets up the state it operates on.
//!
//! The core types never decide legality themselves; everything that can be
//! rejected goes through here.

pub mod engine;
pub mod outcome;
pub mod setup;

pub use engine::{Phase, RoundLogic, BIDDER_PENALTY, CHALLENGER_PENALTY};
pub use outcome::{
    BidAccepted, BotMove, BotTurn, ChallengeResolution, LegalActions, RevealedHand, Verdict,
};
pub use setup::{new_match, MatchBuilder};
