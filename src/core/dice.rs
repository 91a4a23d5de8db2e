//! Die faces and the dice cup.
//!
//! A `DiceCup` only ever shrinks: dice are rolled in place and removed from
//! the end, never added.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::error::ConstructionError;

/// A die face. Rolled dice hold `1..=6`; a cup that was never rolled holds 0.
pub type Face = u8;

/// Lowest face on a die.
pub const FACE_MIN: Face = 1;

/// Highest face on a die.
pub const FACE_MAX: Face = 6;

/// Check that a face is a real die value.
#[must_use]
pub const fn is_valid_face(face: Face) -> bool {
    face >= FACE_MIN && face <= FACE_MAX
}

/// An ordered set of dice owned by one player.
///
/// ```
/// use liars_dice::core::{DiceCup, GameRng};
///
/// let mut rng = GameRng::new(1);
/// let mut cup = DiceCup::new(5).unwrap();
/// cup.roll_all(&mut rng);
/// assert_eq!(cup.len(), 5);
///
/// cup.remove_dice(2);
/// assert_eq!(cup.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceCup {
    faces: Vec<Face>,
}

impl DiceCup {
    /// Create a cup of `count` unrolled dice.
    pub fn new(count: usize) -> Result<Self, ConstructionError> {
        if count == 0 {
            return Err(ConstructionError::EmptyCup);
        }
        Ok(Self {
            faces: vec![0; count],
        })
    }

    /// Roll every die.
    pub fn roll_all(&mut self, rng: &mut dyn RandomSource) {
        for face in &mut self.faces {
            *face = rng.roll_face();
        }
    }

    /// Roll the dice at `indices`. Indices past the end are ignored.
    pub fn roll_selected(&mut self, indices: &[usize], rng: &mut dyn RandomSource) {
        for &index in indices {
            if let Some(face) = self.faces.get_mut(index) {
                *face = rng.roll_face();
            }
        }
    }

    /// Remove up to `amount` dice from the end of the cup.
    pub fn remove_dice(&mut self, amount: usize) {
        let keep = self.faces.len().saturating_sub(amount);
        self.faces.truncate(keep);
    }

    /// Number of dice in the cup.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// True once every die has been removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Copy of the current faces.
    #[must_use]
    pub fn values(&self) -> Vec<Face> {
        self.faces.clone()
    }

    /// Number of dice showing `face`.
    #[must_use]
    pub fn count_face(&self, face: Face) -> usize {
        self.faces.iter().filter(|&&f| f == face).count()
    }
}
