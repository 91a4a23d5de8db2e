//! Automated opponents.
//!
//! `BotPolicy` decides when to challenge, when to reroll and what to bid.
//! It is embedded in `PlayerKind::Bot` and driven by
//! `RoundLogic::run_bot_turn`.

mod policy;
mod probability;

pub use policy::{most_common_face, BotCall, BotPolicy, RerollPick};
pub use probability::{binomial_tail, FACE_PROBABILITY};
