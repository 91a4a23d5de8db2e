//! Action representation and history records.
//!
//! An `Action` is what a player did on their turn; an `ActionRecord` adds
//! who did it and when. Only accepted actions are recorded.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::bid::Bid;
use super::player::PlayerId;

/// Dice positions named in a reroll.
///
/// SmallVec keeps the common case (a handful of dice) off the heap.
pub type RerollIndices = SmallVec<[usize; 4]>;

/// A complete turn action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Raise the standing bid.
    Bid(Bid),
    /// Call the standing bid a lie.
    Challenge,
    /// Reroll the dice at these positions; a bid must follow.
    Reroll(RerollIndices),
}

impl Action {
    /// Build a reroll action from any index list.
    #[must_use]
    pub fn reroll(indices: &[usize]) -> Self {
        Action::Reroll(SmallVec::from_slice(indices))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Bid(bid) => write!(f, "bid {}", bid),
            Action::Challenge => write!(f, "lie"),
            Action::Reroll(indices) => {
                write!(f, "reroll")?;
                for index in indices {
                    write!(f, " {}", index)?;
                }
                Ok(())
            }
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Showing recent bids to a transport
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when action was taken.
    pub round: u32,

    /// Sequence number within the round (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reroll_indices() {
        let action = Action::reroll(&[0, 2]);
        match &action {
            Action::Reroll(indices) => {
                assert_eq!(indices.as_slice(), &[0, 2]);
                assert!(!indices.spilled());
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Bid(Bid::new(2, 5)).to_string(), "bid 2 × 5");
        assert_eq!(Action::Challenge.to_string(), "lie");
        assert_eq!(Action::reroll(&[0, 3]).to_string(), "reroll 0 3");
    }

    #[test]
    fn test_action_record() {
        let action = Action::Bid(Bid::new(3, 4));
        let record = ActionRecord::new(PlayerId::new(0), action.clone(), 3, 5);

        assert_eq!(record.player, PlayerId::new(0));
        assert_eq!(record.action, action);
        assert_eq!(record.round, 3);
        assert_eq!(record.sequence, 5);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(PlayerId::new(1), Action::reroll(&[1, 4]), 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
