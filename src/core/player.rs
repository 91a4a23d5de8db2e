//! Player identification and per-player dice.
//!
//! ## PlayerId
//!
//! Stable seat number assigned at match creation. Unlike a roster index it
//! survives eliminations.
//!
//! ## Player
//!
//! Owns a `DiceCup` and the once-per-match reroll flag. Bots carry their
//! decision policy in `PlayerKind::Bot`; the turn loop branches on
//! `is_bot()` rather than on the concrete type.

use serde::{Deserialize, Serialize};

use super::dice::{DiceCup, Face};
use super::rng::RandomSource;
use crate::bot::BotPolicy;
use crate::error::{ConstructionError, IllegalAction};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Who makes the decisions for a seat.
#[derive(Clone, Debug)]
pub enum PlayerKind {
    /// Actions arrive from outside (terminal, chat).
    Human,
    /// Actions come from the embedded policy.
    Bot(BotPolicy),
}

/// A seat at the table.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    cup: DiceCup,
    reroll_used: bool,
    kind: PlayerKind,
}

impl Player {
    /// Create a human player. Fails unless `starting_dice > 1`.
    pub fn human(
        id: PlayerId,
        name: impl Into<String>,
        starting_dice: usize,
    ) -> Result<Self, ConstructionError> {
        Self::with_kind(id, name, starting_dice, PlayerKind::Human)
    }

    /// Create a bot player. Fails unless `starting_dice > 1`.
    pub fn bot(
        id: PlayerId,
        name: impl Into<String>,
        starting_dice: usize,
        policy: BotPolicy,
    ) -> Result<Self, ConstructionError> {
        Self::with_kind(id, name, starting_dice, PlayerKind::Bot(policy))
    }

    fn with_kind(
        id: PlayerId,
        name: impl Into<String>,
        starting_dice: usize,
        kind: PlayerKind,
    ) -> Result<Self, ConstructionError> {
        let name = name.into();
        if starting_dice <= 1 {
            return Err(ConstructionError::TooFewDice {
                player: name,
                dice: starting_dice,
            });
        }
        Ok(Self {
            id,
            name,
            cup: DiceCup::new(starting_dice)?,
            reroll_used: false,
            kind,
        })
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        matches!(self.kind, PlayerKind::Bot(_))
    }

    /// The decision policy, for bots.
    #[must_use]
    pub fn policy(&self) -> Option<&BotPolicy> {
        match &self.kind {
            PlayerKind::Bot(policy) => Some(policy),
            PlayerKind::Human => None,
        }
    }

    // === Dice ===

    pub fn roll_all_dice(&mut self, rng: &mut dyn RandomSource) {
        self.cup.roll_all(rng);
    }

    /// Reroll the dice at `indices`; out-of-range indices are ignored.
    pub fn reroll_selected(&mut self, indices: &[usize], rng: &mut dyn RandomSource) {
        self.cup.roll_selected(indices, rng);
    }

    /// Copy of this player's dice.
    #[must_use]
    pub fn reveal_dice(&self) -> Vec<Face> {
        self.cup.values()
    }

    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.cup.len()
    }

    #[must_use]
    pub fn count_face(&self, face: Face) -> usize {
        self.cup.count_face(face)
    }

    pub fn lose_dice(&mut self, count: usize) {
        self.cup.remove_dice(count);
    }

    /// A player with fewer than two dice is out.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.cup.len() < 2
    }

    // === Reroll ===

    /// Spend the once-per-match reroll.
    ///
    /// Fails with `RerollAlreadyUsed` on the second call; the flag stays set.
    pub fn use_reroll(&mut self) -> Result<(), IllegalAction> {
        if self.reroll_used {
            return Err(IllegalAction::RerollAlreadyUsed);
        }
        self.reroll_used = true;
        Ok(())
    }

    #[must_use]
    pub fn has_used_reroll(&self) -> bool {
        self.reroll_used
    }
}

/// What one seat may see of another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub dice_count: usize,
    pub is_bot: bool,
    /// Only filled for the viewer's own hand.
    pub dice: Option<Vec<Face>>,
}

impl PlayerView {
    /// Build the view of `player` as seen by `viewer`.
    #[must_use]
    pub fn of(player: &Player, viewer: Option<PlayerId>) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            dice_count: player.dice_count(),
            is_bot: player.is_bot(),
            dice: (viewer == Some(player.id)).then(|| player.reveal_dice()),
        }
    }
}
