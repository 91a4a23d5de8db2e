//! The bot decision policy.
//!
//! Every decision is a function of the bot's own hand, the standing bid and
//! the number of dice on the table, plus draws from the injected random
//! source. The policy never sees other hands.

use smallvec::SmallVec;

use super::probability::{binomial_tail, FACE_PROBABILITY};
use crate::core::config::BotConfig;
use crate::core::dice::{is_valid_face, Face, FACE_MAX, FACE_MIN};
use crate::core::{Bid, RandomSource};

/// Dice positions the bot wants to reroll.
pub type RerollPick = SmallVec<[usize; 2]>;

/// What the bot does instead of sitting on a standing bid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotCall {
    /// Raise to this bid.
    Bid(Bid),
    /// Call the standing bid a lie. Also returned when no legal raise
    /// exists.
    Challenge,
}

/// Heuristic Liar's Dice bot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BotPolicy {
    config: BotConfig,
}

impl BotPolicy {
    #[must_use]
    pub fn new(config: BotConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Estimated probability that `bid` is true, given the bot's hand.
    ///
    /// Unseen dice are treated as independent fair dice, so this is
    /// `P(X >= needed)` with `X ~ Binomial(unseen, 1/6)`. Returns 1.0 when
    /// the bot's own dice already cover the bid.
    #[must_use]
    pub fn truth_probability(&self, hand: &[Face], bid: Bid, total_dice: usize) -> f64 {
        let own = hand.iter().filter(|&&f| f == bid.face).count();
        if bid.quantity <= own {
            return 1.0;
        }
        let needed = bid.quantity - own;
        let unseen = total_dice.saturating_sub(hand.len());
        binomial_tail(unseen, needed, FACE_PROBABILITY)
    }

    /// Decide whether to call the standing bid a lie.
    ///
    /// Never challenges (and never draws) when there is no bid or the bot's
    /// hand already covers it.
    pub fn should_call_lie(
        &self,
        hand: &[Face],
        bid: Bid,
        total_dice: usize,
        rng: &mut dyn RandomSource,
    ) -> bool {
        if bid.is_none() {
            return false;
        }
        let probability = self.truth_probability(hand, bid, total_dice);
        let chance = self.config.challenge_chance(probability);
        log::trace!(
            "bot sees {} as {:.3} likely, challenges with {:.2}",
            bid,
            probability,
            chance
        );
        chance > 0.0 && rng.chance(chance)
    }

    /// Decide whether to spend the reroll this turn.
    pub fn should_reroll(&self, reroll_used: bool, rng: &mut dyn RandomSource) -> bool {
        !reroll_used && rng.chance(self.config.reroll_chance)
    }

    /// Positions of dice showing 1 or the hand's lowest face, first ones
    /// first, capped at `max_reroll_dice`.
    #[must_use]
    pub fn choose_dice_to_reroll(&self, hand: &[Face]) -> RerollPick {
        let Some(&lowest) = hand.iter().min() else {
            return RerollPick::new();
        };
        hand.iter()
            .enumerate()
            .filter(|&(_, &face)| face == FACE_MIN || face == lowest)
            .map(|(i, _)| i)
            .take(self.config.max_reroll_dice)
            .collect()
    }

    /// Choose the next bid, or `BotCall::Challenge` when the standing bid
    /// is already the highest possible.
    ///
    /// Bluffs with a chance drawn from the configured range: a face the
    /// bot holds none of, one more than the standing quantity. Otherwise
    /// bids on its most common face. The result always raises `bid`.
    pub fn decide_next_call(
        &self,
        hand: &[Face],
        bid: Bid,
        total_dice: usize,
        rng: &mut dyn RandomSource,
    ) -> BotCall {
        if bid.is_max(total_dice) {
            return BotCall::Challenge;
        }

        let bluff_chance = self.config.bluff_chance_min + rng.unit() * self.config.bluff_chance_spread;
        let bluff = rng.chance(bluff_chance);

        let candidate = if bluff && !bid.is_none() {
            let missing: SmallVec<[Face; 6]> = (FACE_MIN..=FACE_MAX)
                .filter(|face| !hand.contains(face))
                .collect();
            let face = if missing.is_empty() {
                FACE_MIN + rng.index(FACE_MAX as usize) as Face
            } else {
                missing[rng.index(missing.len())]
            };
            Bid::new((bid.quantity + 1).min(total_dice), face)
        } else {
            let (face, count) = most_common_face(hand);
            Bid::new(
                (bid.quantity + 1).max(count).min(total_dice),
                bid.face.max(face),
            )
        };

        log::trace!("bot candidate {} over {} (bluff: {})", candidate, bid, bluff);
        ensure_raise(candidate, bid, total_dice)
    }
}

/// Most common face in `hand` and its count.
///
/// Faces are scanned from 1 to 6 and only a strictly greater count
/// replaces the leader, so ties go to the lowest face.
#[must_use]
pub fn most_common_face(hand: &[Face]) -> (Face, usize) {
    let mut counts = [0usize; FACE_MAX as usize + 1];
    for &face in hand.iter().filter(|&&f| is_valid_face(f)) {
        counts[face as usize] += 1;
    }

    let mut best = (FACE_MAX, 0);
    for face in FACE_MIN..=FACE_MAX {
        let count = counts[face as usize];
        if count > best.1 {
            best = (face, count);
        }
    }
    best
}

/// Keep `candidate` if it legally raises `bid`; otherwise fall back to the
/// smallest raise available, or a challenge if there is none.
fn ensure_raise(candidate: Bid, bid: Bid, total_dice: usize) -> BotCall {
    if candidate.raises(&bid) && candidate.quantity <= total_dice && is_valid_face(candidate.face) {
        return BotCall::Bid(candidate);
    }

    let face = bid.face.max(FACE_MIN);
    if bid.quantity < total_dice {
        return BotCall::Bid(Bid::new(bid.quantity + 1, face));
    }
    if bid.quantity == total_dice && bid.face < FACE_MAX {
        return BotCall::Bid(Bid::new(total_dice, bid.face + 1));
    }
    BotCall::Challenge
}
