//! Bids: "at least `quantity` dice across the table show `face`".

use serde::{Deserialize, Serialize};

use super::dice::{Face, FACE_MAX};

/// A claim about the whole table.
///
/// Quantity 0 is the "no bid yet" sentinel (`Bid::NONE`); real bids always
/// have a quantity of at least 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bid {
    pub quantity: usize,
    pub face: Face,
}

impl Bid {
    /// No bid has been made this round.
    pub const NONE: Bid = Bid { quantity: 0, face: 0 };

    #[must_use]
    pub const fn new(quantity: usize, face: Face) -> Self {
        Self { quantity, face }
    }

    /// True for the sentinel.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.quantity == 0
    }

    /// `Some(self)` unless this is the sentinel.
    #[must_use]
    pub const fn standing(self) -> Option<Bid> {
        if self.is_none() {
            None
        } else {
            Some(self)
        }
    }

    /// Whether this bid raises `other`.
    ///
    /// A raise needs a higher quantity, or the same quantity with a higher
    /// face. A higher face alone never makes up for a lower quantity.
    ///
    /// ```
    /// use liars_dice::core::Bid;
    ///
    /// let standing = Bid::new(3, 4);
    /// assert!(Bid::new(4, 1).raises(&standing));
    /// assert!(Bid::new(3, 5).raises(&standing));
    /// assert!(!Bid::new(2, 6).raises(&standing));
    /// assert!(!Bid::new(3, 4).raises(&standing));
    /// ```
    #[must_use]
    pub const fn raises(&self, other: &Bid) -> bool {
        self.quantity > other.quantity
            || (self.quantity == other.quantity && self.face > other.face)
    }

    /// The highest claim possible with `total_dice` on the table.
    #[must_use]
    pub const fn is_max(&self, total_dice: usize) -> bool {
        self.quantity >= total_dice && self.face == FACE_MAX
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {}", self.quantity, self.face)
    }
}
