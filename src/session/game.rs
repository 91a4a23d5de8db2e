//! One human playing against bots.
//!
//! `GameSession` owns a match and replays the conversation loop of a chat
//! or terminal front end: apply the human's command, then let every bot
//! act until it is the human's turn again or the match is decided.

use crate::core::{Bid, Face, GameState, MatchConfig, Player, PlayerId, PlayerView};
use crate::error::{ConstructionError, IllegalAction};
use crate::rules::{BotMove, BotTurn, ChallengeResolution, MatchBuilder, RoundLogic};

use super::command::Command;

/// Something the front end should tell the human about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    BidMade {
        player: PlayerId,
        bid: Bid,
    },
    /// `player` rerolled the dice at `indices`.
    Rerolled {
        player: PlayerId,
        indices: Vec<usize>,
    },
    Challenged(ChallengeResolution),
    /// A challenge was resolved and every survivor rolled again.
    RoundStarted {
        round: u32,
    },
    MatchOver {
        winner: PlayerId,
        name: String,
    },
}

/// A match seen from one human seat.
#[derive(Debug)]
pub struct GameSession {
    logic: RoundLogic,
    state: GameState,
    human: PlayerId,
}

impl GameSession {
    /// Set up a match. The first human seat is the session's player.
    ///
    /// If bots sit before the human, call `advance_bots` to let them open.
    pub fn new(config: MatchConfig) -> Result<Self, ConstructionError> {
        let human = config
            .seats
            .iter()
            .position(|seat| !seat.bot)
            .ok_or(ConstructionError::NoHumanSeat)?;
        let (logic, state) = MatchBuilder::from_config(config).build()?;

        Ok(Self {
            logic,
            state,
            // Seat order is id order and the builder caps seats at 255.
            human: PlayerId::new(human as u8),
        })
    }

    /// Set up a match from an already built state.
    pub fn from_parts(logic: RoundLogic, state: GameState, human: PlayerId) -> Self {
        Self {
            logic,
            state,
            human,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn human(&self) -> PlayerId {
        self.human
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn logic(&self) -> &RoundLogic {
        &self.logic
    }

    /// The human's dice; empty once eliminated.
    #[must_use]
    pub fn hand(&self) -> Vec<Face> {
        self.state
            .player(self.human)
            .map(Player::reveal_dice)
            .unwrap_or_default()
    }

    /// The table as the human sees it.
    #[must_use]
    pub fn table(&self) -> Vec<PlayerView> {
        self.state.players_view(Some(self.human))
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.logic.is_match_over() || self.state.is_game_over()
    }

    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.state.current_player().id() == self.human
    }

    // === Play ===

    /// Apply the human's command, then run bot turns until the human is to
    /// act again or the match is over.
    ///
    /// A rejected command leaves the session unchanged.
    pub fn play(&mut self, command: Command) -> Result<Vec<SessionEvent>, IllegalAction> {
        if self.is_over() {
            return Err(IllegalAction::MatchOver);
        }
        if !self.is_human_turn() {
            return Err(IllegalAction::NotYourTurn);
        }

        let mut events = Vec::new();
        match command {
            Command::Bid { quantity, face } => {
                let accepted = self.logic.submit_bid(&mut self.state, quantity, face)?;
                events.push(SessionEvent::BidMade {
                    player: accepted.player,
                    bid: accepted.bid,
                });
            }
            Command::Challenge => {
                let resolution = self.logic.submit_challenge(&mut self.state)?;
                self.push_resolution(&mut events, resolution);
            }
            Command::Reroll(indices) => {
                self.logic.submit_reroll(&mut self.state, &indices)?;
                events.push(SessionEvent::Rerolled {
                    player: self.human,
                    indices,
                });
                // Same player bids next; no bot acts yet.
                return Ok(events);
            }
        }

        events.extend(self.advance_bots()?);
        Ok(events)
    }

    /// Run bot turns until the human is to act or the match is over.
    pub fn advance_bots(&mut self) -> Result<Vec<SessionEvent>, IllegalAction> {
        let mut events = Vec::new();
        while !self.is_over() && self.state.current_player().is_bot() {
            let turn = self.logic.run_bot_turn(&mut self.state)?;
            self.push_bot_turn(&mut events, turn);
        }
        Ok(events)
    }

    fn push_bot_turn(&self, events: &mut Vec<SessionEvent>, turn: BotTurn) {
        if let Some(indices) = turn.rerolled {
            events.push(SessionEvent::Rerolled {
                player: turn.bot,
                indices: indices.to_vec(),
            });
        }
        match turn.action {
            BotMove::Bid(bid) => events.push(SessionEvent::BidMade {
                player: turn.bot,
                bid,
            }),
            BotMove::Challenge(resolution) => self.push_resolution(events, resolution),
        }
    }

    fn push_resolution(&self, events: &mut Vec<SessionEvent>, resolution: ChallengeResolution) {
        let winner = resolution
            .winner
            .map(|id| (id, resolution.name_of(id).unwrap_or_default().to_string()));
        events.push(SessionEvent::Challenged(resolution));

        match winner {
            Some((winner, name)) => events.push(SessionEvent::MatchOver { winner, name }),
            None => events.push(SessionEvent::RoundStarted {
                round: self.state.round(),
            }),
        }
    }
}
