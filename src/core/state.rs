//! Game state: roster, turn pointer, standing bid.
//!
//! ## GameState
//!
//! Complete match state:
//! - Surviving players in turn order
//! - Whose turn it is
//! - The standing bid (`Bid::NONE` between rounds)
//! - Round counter and action history
//! - The injected random source
//!
//! `GameState` only enforces its own invariants (turn index always valid,
//! roster only shrinks). Whether an action is legal is decided by
//! `RoundLogic`.

use im::Vector;

use super::action::{Action, ActionRecord};
use super::bid::Bid;
use super::dice::Face;
use super::player::{Player, PlayerId, PlayerView};
use super::rng::RandomSource;
use crate::bot::BotPolicy;
use crate::error::ConstructionError;

/// Full match state.
pub struct GameState {
    /// Surviving players in turn order.
    players: Vec<Player>,

    /// Index into `players` of whoever acts next.
    current: usize,

    /// Standing bid; `Bid::NONE` when nobody has bid this round.
    bid: Bid,

    /// Round number (starts at 1 once the first round is rolled).
    round: u32,

    /// Action sequence within the round.
    sequence: u32,

    /// Accepted actions, oldest first.
    history: Vector<ActionRecord>,

    /// Dice and bot randomness.
    rng: Box<dyn RandomSource + Send>,
}

impl GameState {
    /// Create a state for the given roster. Dice are not rolled yet; call
    /// `start_round` (the match builder does).
    pub fn new(
        players: Vec<Player>,
        rng: impl RandomSource + Send + 'static,
    ) -> Result<Self, ConstructionError> {
        if players.len() < 2 {
            return Err(ConstructionError::TooFewPlayers(players.len()));
        }
        if players.len() > 255 {
            return Err(ConstructionError::TooManyPlayers(players.len()));
        }

        Ok(Self {
            players,
            current: 0,
            bid: Bid::NONE,
            round: 0,
            sequence: 0,
            history: Vector::new(),
            rng: Box::new(rng),
        })
    }

    // === Roster ===

    /// Surviving players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of surviving players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a surviving player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Roster views as seen by `viewer`: dice are only shown for the
    /// viewer's own hand.
    #[must_use]
    pub fn players_view(&self, viewer: Option<PlayerId>) -> Vec<PlayerView> {
        self.players
            .iter()
            .map(|p| PlayerView::of(p, viewer))
            .collect()
    }

    // === Turn Order ===

    /// Whoever acts next.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Roster index of the player before the current one, wrapping.
    #[must_use]
    pub fn previous_index(&self) -> usize {
        if self.current == 0 {
            self.players.len() - 1
        } else {
            self.current - 1
        }
    }

    /// The player who acted before the current one (the standing bidder).
    #[must_use]
    pub fn previous_player(&self) -> &Player {
        &self.players[self.previous_index()]
    }

    /// Pass the turn to the next player in roster order.
    pub fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    // === Bids ===

    /// Replace the standing bid without validation.
    pub fn set_bid(&mut self, quantity: usize, face: Face) {
        self.bid = Bid::new(quantity, face);
    }

    /// Clear the standing bid back to the sentinel.
    pub fn reset_bid(&mut self) {
        self.bid = Bid::NONE;
    }

    /// The standing bid, sentinel included.
    #[must_use]
    pub fn current_bid(&self) -> Bid {
        self.bid
    }

    /// The standing bid, or `None` before the first bid of a round.
    #[must_use]
    pub fn standing_bid(&self) -> Option<Bid> {
        self.bid.standing()
    }

    /// Whether `(quantity, face)` raises the standing bid.
    #[must_use]
    pub fn is_higher(&self, quantity: usize, face: Face) -> bool {
        Bid::new(quantity, face).raises(&self.bid)
    }

    // === Aggregates ===

    /// Dice showing `face` across every surviving hand.
    #[must_use]
    pub fn total_dice_for_face(&self, face: Face) -> usize {
        self.players.iter().map(|p| p.count_face(face)).sum()
    }

    /// Dice still in play.
    #[must_use]
    pub fn total_dice_count(&self) -> usize {
        self.players.iter().map(Player::dice_count).sum()
    }

    // === Elimination ===

    /// Drop every eliminated player and return them.
    ///
    /// If the turn index no longer points into the roster it is reset to 0.
    /// Anything that depends on "the previous player" must be captured
    /// before calling this.
    pub fn remove_eliminated(&mut self) -> Vec<Player> {
        let (kept, removed): (Vec<_>, Vec<_>) = std::mem::take(&mut self.players)
            .into_iter()
            .partition(|p| !p.is_eliminated());
        self.players = kept;
        if self.current >= self.players.len() {
            self.current = 0;
        }
        removed
    }

    /// Collapse the roster to a single player (instant win).
    pub(crate) fn retain_only(&mut self, id: PlayerId) {
        self.players.retain(|p| p.id() == id);
        self.current = 0;
    }

    /// True once a single player remains.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.players.len() == 1
    }

    /// The sole survivor, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        if self.is_game_over() {
            self.players.first()
        } else {
            None
        }
    }

    // === Rounds ===

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Roll every surviving hand, clear the bid and bump the round counter.
    pub fn start_round(&mut self) {
        let rng: &mut dyn RandomSource = self.rng.as_mut();
        for player in &mut self.players {
            player.roll_all_dice(&mut *rng);
        }
        self.bid = Bid::NONE;
        self.round += 1;
        self.sequence = 0;
    }

    /// Reroll dice of the player at roster `index`.
    pub(crate) fn reroll_player(&mut self, index: usize, indices: &[usize]) -> Vec<Face> {
        let player = &mut self.players[index];
        player.reroll_selected(indices, self.rng.as_mut());
        player.reveal_dice()
    }

    pub(crate) fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    pub(crate) fn player_at_mut(&mut self, index: usize) -> &mut Player {
        &mut self.players[index]
    }

    /// The current player's policy and hand together with the random
    /// source, if the current player is a bot.
    pub(crate) fn current_bot(&mut self) -> Option<(&BotPolicy, &Player, &mut dyn RandomSource)> {
        let player = &self.players[self.current];
        let policy = player.policy()?;
        let rng: &mut dyn RandomSource = self.rng.as_mut();
        Some((policy, player, rng))
    }

    // === Action History ===

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Record an action in history.
    pub fn record_action(&mut self, player: PlayerId, action: Action) {
        let record = ActionRecord::new(player, action, self.round, self.sequence);
        self.sequence += 1;
        self.history.push_back(record);
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("players", &self.players)
            .field("current", &self.current)
            .field("bid", &self.bid)
            .field("round", &self.round)
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{GameRng, ScriptedRng};

    fn roster(dice: &[usize]) -> Vec<Player> {
        dice.iter()
            .enumerate()
            .map(|(i, &n)| Player::human(PlayerId::new(i as u8), format!("P{}", i), n).unwrap())
            .collect()
    }

    #[test]
    fn test_needs_two_players() {
        let err = GameState::new(roster(&[5]), GameRng::new(1)).unwrap_err();
        assert_eq!(err, ConstructionError::TooFewPlayers(1));
        assert!(GameState::new(roster(&[5, 5]), GameRng::new(1)).is_ok());
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut state = GameState::new(roster(&[5, 5, 5]), GameRng::new(1)).unwrap();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.previous_index(), 2);

        state.advance_turn();
        state.advance_turn();
        assert_eq!(state.current_player().id(), PlayerId::new(2));

        state.advance_turn();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_bid_ordering() {
        let mut state = GameState::new(roster(&[5, 5]), GameRng::new(1)).unwrap();
        assert_eq!(state.standing_bid(), None);
        assert!(state.is_higher(1, 1));

        state.set_bid(3, 4);
        assert_eq!(state.standing_bid(), Some(Bid::new(3, 4)));
        assert!(state.is_higher(4, 1));
        assert!(state.is_higher(3, 5));
        assert!(!state.is_higher(3, 4));
        assert!(!state.is_higher(2, 6));

        state.reset_bid();
        assert_eq!(state.current_bid(), Bid::NONE);
    }

    #[test]
    fn test_aggregates() {
        let rng = ScriptedRng::new(0).with_faces([1, 2, 2, 6, 2, 3]);
        let mut state = GameState::new(roster(&[3, 3]), rng).unwrap();
        state.start_round();

        assert_eq!(state.round(), 1);
        assert_eq!(state.total_dice_count(), 6);
        assert_eq!(state.total_dice_for_face(2), 3);
        assert_eq!(state.total_dice_for_face(5), 0);
    }

    #[test]
    fn test_remove_eliminated_clamps_index() {
        let mut state = GameState::new(roster(&[5, 5, 2]), GameRng::new(1)).unwrap();
        state.advance_turn();
        state.advance_turn();
        assert_eq!(state.current_index(), 2);

        state.player_at_mut(2).lose_dice(1);
        let removed = state.remove_eliminated();

        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id(), PlayerId::new(2));
        assert_eq!(state.player_count(), 2);
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_game_over());
        assert!(state.winner().is_none());
    }

    #[test]
    fn test_remove_eliminated_keeps_valid_index() {
        let mut state = GameState::new(roster(&[2, 5, 5]), GameRng::new(1)).unwrap();
        state.advance_turn();

        state.player_at_mut(0).lose_dice(2);
        state.remove_eliminated();

        assert_eq!(state.player_count(), 2);
        assert!(state.current_index() < state.player_count());
    }

    #[test]
    fn test_winner() {
        let mut state = GameState::new(roster(&[5, 2]), GameRng::new(1)).unwrap();
        state.player_at_mut(1).lose_dice(1);
        state.remove_eliminated();

        assert!(state.is_game_over());
        assert_eq!(state.winner().map(Player::id), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_start_round_resets_bid() {
        let mut state = GameState::new(roster(&[5, 5]), GameRng::new(3)).unwrap();
        state.start_round();
        state.set_bid(2, 2);
        state.record_action(PlayerId::new(0), Action::Bid(Bid::new(2, 2)));

        state.start_round();
        assert_eq!(state.round(), 2);
        assert_eq!(state.standing_bid(), None);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].round, 1);
        assert!(state
            .players()
            .iter()
            .all(|p| p.reveal_dice().iter().all(|d| (1..=6).contains(d))));
    }

    #[test]
    fn test_players_view() {
        let mut state = GameState::new(roster(&[5, 4]), GameRng::new(3)).unwrap();
        state.start_round();

        let view = state.players_view(Some(PlayerId::new(1)));
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].dice, None);
        assert_eq!(view[0].dice_count, 5);
        assert_eq!(view[1].dice.as_ref().map(Vec::len), Some(4));
    }
}
