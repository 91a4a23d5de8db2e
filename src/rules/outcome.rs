//! Values reported back to the caller after an accepted action.

use serde::{Deserialize, Serialize};

use crate::bot::RerollPick;
use crate::core::{Bid, Face, Player, PlayerId};

/// A bid was accepted and the turn passed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidAccepted {
    pub player: PlayerId,
    pub bid: Bid,
    /// Who acts next.
    pub next: PlayerId,
}

/// How a challenge came out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Enough dice showed the face; the challenger pays.
    BidTrue,
    /// Too few dice showed the face; the bidder pays.
    BidFalse,
    /// The bidder claimed every die on the table shows 6 and was right.
    InstantWin,
}

/// A hand as revealed when a challenge is resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedHand {
    pub player: PlayerId,
    pub name: String,
    pub dice: Vec<Face>,
}

impl RevealedHand {
    #[must_use]
    pub fn of(player: &Player) -> Self {
        Self {
            player: player.id(),
            name: player.name().to_string(),
            dice: player.reveal_dice(),
        }
    }
}

/// Everything that happened when a bid was called a lie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeResolution {
    /// The bid that was challenged.
    pub bid: Bid,
    /// Dice on the table showing the bid face.
    pub actual: usize,
    pub challenger: PlayerId,
    pub bidder: PlayerId,
    pub verdict: Verdict,
    /// Who lost dice; `None` on an instant win.
    pub loser: Option<PlayerId>,
    pub dice_lost: usize,
    /// Players removed from the roster by this resolution.
    pub eliminated: Vec<PlayerId>,
    /// Set once the match is decided.
    pub winner: Option<PlayerId>,
    /// Every hand as it was when the challenge was made.
    pub revealed: Vec<RevealedHand>,
}

impl ChallengeResolution {
    #[must_use]
    pub fn match_ended(&self) -> bool {
        self.winner.is_some()
    }

    /// Name of a player who took part, even if eliminated since.
    #[must_use]
    pub fn name_of(&self, id: PlayerId) -> Option<&str> {
        self.revealed
            .iter()
            .find(|hand| hand.player == id)
            .map(|hand| hand.name.as_str())
    }
}

/// The action a bot finished its turn with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BotMove {
    Bid(Bid),
    Challenge(ChallengeResolution),
}

/// A complete bot turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotTurn {
    pub bot: PlayerId,
    /// Dice positions rerolled before bidding, if the bot used its reroll.
    pub rerolled: Option<RerollPick>,
    pub action: BotMove,
}

/// Which actions the current player may submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegalActions {
    pub bid: bool,
    pub challenge: bool,
    pub reroll: bool,
}

impl LegalActions {
    /// Nothing is legal (match over).
    pub const NONE: LegalActions = LegalActions {
        bid: false,
        challenge: false,
        reroll: false,
    };
}
