//! Round logic: the turn-resolution state machine.
//!
//! `RoundLogic` validates actions against a `GameState` and applies them:
//! - What actions are legal right now
//! - How bids, rerolls and challenges modify state
//! - When the match is over
//!
//! The state machine is held apart from the state, so the same
//! `RoundLogic` value must be paired with one `GameState` for a match.
//!
//! ## Phases
//!
//! - `AwaitingAction`: the current player may bid, challenge (if a bid
//!   stands) or reroll (once per match).
//! - `RerollPending`: the current player rerolled and must bid next.
//! - `MatchOver`: one player remains; every action is rejected.
//!
//! Challenge resolution is transient: it either ends the match or rolls a
//! fresh round and returns to `AwaitingAction`.

use crate::bot::BotCall;
use crate::core::dice::is_valid_face;
use crate::core::{Action, Bid, Face, GameState, Player};
use crate::error::IllegalAction;

use super::outcome::{
    BidAccepted, BotMove, BotTurn, ChallengeResolution, LegalActions, RevealedHand, Verdict,
};

/// Where the state machine is between actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    AwaitingAction,
    RerollPending,
    MatchOver,
}

/// Dice lost by a challenger whose challenge was wrong.
pub const CHALLENGER_PENALTY: usize = 1;

/// Dice lost by a bidder caught lying.
pub const BIDDER_PENALTY: usize = 2;

/// The turn-resolution state machine.
#[derive(Clone, Debug, Default)]
pub struct RoundLogic {
    phase: Phase,
}

impl RoundLogic {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_match_over(&self) -> bool {
        self.phase == Phase::MatchOver
    }

    /// Actions the current player may submit.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState) -> LegalActions {
        if self.ensure_in_progress(state).is_err() {
            return LegalActions::NONE;
        }

        let total = state.total_dice_count();
        let can_raise = !state.current_bid().is_max(total);

        match self.phase {
            Phase::RerollPending => LegalActions {
                bid: can_raise,
                challenge: false,
                reroll: false,
            },
            _ => LegalActions {
                bid: can_raise,
                challenge: state.standing_bid().is_some(),
                reroll: can_raise && !state.current_player().has_used_reroll(),
            },
        }
    }

    /// Raise the standing bid and pass the turn.
    pub fn submit_bid(
        &mut self,
        state: &mut GameState,
        quantity: usize,
        face: Face,
    ) -> Result<BidAccepted, IllegalAction> {
        self.ensure_in_progress(state)?;

        if !is_valid_face(face) {
            return Err(IllegalAction::InvalidFace(face));
        }
        if quantity == 0 {
            return Err(IllegalAction::InvalidQuantity);
        }
        let in_play = state.total_dice_count();
        if quantity > in_play {
            return Err(IllegalAction::ExceedsDiceInPlay { quantity, in_play });
        }
        let bid = Bid::new(quantity, face);
        if !state.is_higher(quantity, face) {
            return Err(IllegalAction::NotHigher {
                bid,
                standing: state.current_bid(),
            });
        }

        let player = state.current_player().id();
        state.set_bid(quantity, face);
        state.record_action(player, Action::Bid(bid));
        state.advance_turn();
        self.phase = Phase::AwaitingAction;

        let next = state.current_player().id();
        log::debug!("{} bids {}, {} to act", player, bid, next);
        Ok(BidAccepted { player, bid, next })
    }

    /// Spend the current player's reroll on the dice at `indices`.
    ///
    /// Returns the player's new dice. The same player must bid next.
    pub fn submit_reroll(
        &mut self,
        state: &mut GameState,
        indices: &[usize],
    ) -> Result<Vec<Face>, IllegalAction> {
        self.ensure_in_progress(state)?;

        if state.current_bid().is_max(state.total_dice_count()) {
            return Err(IllegalAction::NoRaiseAvailable);
        }
        state.current_player_mut().use_reroll()?;

        let player = state.current_player().id();
        let dice = state.reroll_player(state.current_index(), indices);
        state.record_action(player, Action::reroll(indices));
        self.phase = Phase::RerollPending;

        log::debug!("{} rerolls {:?}", player, indices);
        Ok(dice)
    }

    /// Call the standing bid a lie and resolve it.
    pub fn submit_challenge(
        &mut self,
        state: &mut GameState,
    ) -> Result<ChallengeResolution, IllegalAction> {
        self.ensure_in_progress(state)?;

        if self.phase == Phase::RerollPending {
            return Err(IllegalAction::MustBidAfterReroll);
        }
        let Some(bid) = state.standing_bid() else {
            return Err(IllegalAction::NoStandingBid);
        };

        Ok(self.resolve_challenge(state, bid))
    }

    /// Play one full turn for the current player, who must be a bot.
    ///
    /// The bot challenges when a bid stands and either nothing can raise
    /// it or the policy doubts it. Otherwise it may reroll, then bids.
    pub fn run_bot_turn(&mut self, state: &mut GameState) -> Result<BotTurn, IllegalAction> {
        self.ensure_in_progress(state)?;

        let bid = state.current_bid();
        let total = state.total_dice_count();
        let (bot, challenge) = {
            let (policy, player, rng) = state.current_bot().ok_or(IllegalAction::NotBotTurn)?;
            let challenge = self.phase == Phase::AwaitingAction
                && !bid.is_none()
                && (bid.is_max(total)
                    || policy.should_call_lie(&player.reveal_dice(), bid, total, rng));
            (player.id(), challenge)
        };

        if challenge {
            let resolution = self.submit_challenge(state)?;
            return Ok(BotTurn {
                bot,
                rerolled: None,
                action: BotMove::Challenge(resolution),
            });
        }

        let mut rerolled = None;
        if self.phase == Phase::AwaitingAction && !bid.is_max(total) {
            let pick = {
                let (policy, player, rng) = state.current_bot().ok_or(IllegalAction::NotBotTurn)?;
                if policy.should_reroll(player.has_used_reroll(), rng) {
                    Some(policy.choose_dice_to_reroll(&player.reveal_dice()))
                } else {
                    None
                }
            };
            if let Some(pick) = pick.filter(|p| !p.is_empty()) {
                self.submit_reroll(state, &pick)?;
                rerolled = Some(pick);
            }
        }

        let call = {
            let (policy, player, rng) = state.current_bot().ok_or(IllegalAction::NotBotTurn)?;
            policy.decide_next_call(&player.reveal_dice(), bid, total, rng)
        };

        let action = match call {
            BotCall::Bid(next) => {
                let accepted = self.submit_bid(state, next.quantity, next.face)?;
                BotMove::Bid(accepted.bid)
            }
            BotCall::Challenge => BotMove::Challenge(self.submit_challenge(state)?),
        };

        Ok(BotTurn {
            bot,
            rerolled,
            action,
        })
    }

    fn ensure_in_progress(&self, state: &GameState) -> Result<(), IllegalAction> {
        if self.phase == Phase::MatchOver || state.is_game_over() {
            return Err(IllegalAction::MatchOver);
        }
        Ok(())
    }

    fn resolve_challenge(&mut self, state: &mut GameState, bid: Bid) -> ChallengeResolution {
        let total = state.total_dice_count();
        let actual = state.total_dice_for_face(bid.face);

        // Capture both sides before any elimination reshuffles the roster.
        let challenger_index = state.current_index();
        let bidder_index = state.previous_index();
        let challenger = state.current_player().id();
        let bidder = state.previous_player().id();
        let revealed: Vec<_> = state.players().iter().map(RevealedHand::of).collect();

        state.record_action(challenger, Action::Challenge);

        if bid.is_max(total) && actual == bid.quantity {
            state.retain_only(bidder);
            state.reset_bid();
            self.phase = Phase::MatchOver;

            let eliminated = revealed
                .iter()
                .map(|hand| hand.player)
                .filter(|&id| id != bidder)
                .collect();
            log::info!("{} called {} and it was exact: instant win", bidder, bid);

            return ChallengeResolution {
                bid,
                actual,
                challenger,
                bidder,
                verdict: Verdict::InstantWin,
                loser: None,
                dice_lost: 0,
                eliminated,
                winner: Some(bidder),
                revealed,
            };
        }

        let (verdict, loser_index, dice_lost) = if actual >= bid.quantity {
            (Verdict::BidTrue, challenger_index, CHALLENGER_PENALTY)
        } else {
            (Verdict::BidFalse, bidder_index, BIDDER_PENALTY)
        };

        let loser = state.player_at_mut(loser_index);
        loser.lose_dice(dice_lost);
        let loser = loser.id();

        state.reset_bid();
        let eliminated: Vec<_> = state.remove_eliminated().iter().map(Player::id).collect();
        let winner = state.winner().map(Player::id);

        log::info!(
            "{} challenged {} by {}: {} showing, {} loses {}",
            challenger,
            bid,
            bidder,
            actual,
            loser,
            dice_lost
        );

        match winner {
            Some(winner) => {
                self.phase = Phase::MatchOver;
                log::info!("match over, {} wins", winner);
            }
            None => {
                state.start_round();
                self.phase = Phase::AwaitingAction;
            }
        }

        ChallengeResolution {
            bid,
            actual,
            challenger,
            bidder,
            verdict,
            loser: Some(loser),
            dice_lost,
            eliminated,
            winner,
            revealed,
        }
    }
}
