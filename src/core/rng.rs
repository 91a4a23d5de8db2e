//! Injectable randomness for dice rolls and bot decisions.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: Everything that rolls or decides takes a `RandomSource`
//! - **Scriptable**: `ScriptedRng` replays fixed faces for scenario tests
//!
//! ## Usage
//!
//! ```
//! use liars_dice::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.roll_face();
//! assert!((1..=6).contains(&face));
//!
//! // Same seed, same rolls
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_face(), b.roll_face());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::dice::{Face, FACE_MAX, FACE_MIN};

/// Source of all randomness in a match.
///
/// Dice rolls and bot decisions draw from the same source so a seeded
/// match replays identically.
pub trait RandomSource {
    /// A uniform face in `[1, 6]`.
    fn roll_face(&mut self) -> Face;

    /// A uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// A uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// True with the given probability.
    fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl RandomSource for GameRng {
    fn roll_face(&mut self) -> Face {
        self.inner.gen_range(FACE_MIN..=FACE_MAX)
    }

    fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Random source that replays scripted values before falling back to a
/// seeded `GameRng`.
///
/// Faces are handed out in order to whatever rolls next: at match start that
/// is every player's cup in roster order, die by die. Unit draws feed
/// `unit`, `chance` and `index`.
///
/// ```
/// use liars_dice::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new(0).with_faces([6, 6, 1]);
/// assert_eq!(rng.roll_face(), 6);
/// assert_eq!(rng.roll_face(), 6);
/// assert_eq!(rng.roll_face(), 1);
/// assert_eq!(rng.draws(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    faces: VecDeque<Face>,
    units: VecDeque<f64>,
    fallback: GameRng,
    draws: usize,
}

impl ScriptedRng {
    /// Create an empty script that falls back to `GameRng::new(seed)`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            faces: VecDeque::new(),
            units: VecDeque::new(),
            fallback: GameRng::new(seed),
            draws: 0,
        }
    }

    /// Queue faces for upcoming rolls. Values are clamped into `[1, 6]`.
    #[must_use]
    pub fn with_faces(mut self, faces: impl IntoIterator<Item = Face>) -> Self {
        self.faces
            .extend(faces.into_iter().map(|f| f.clamp(FACE_MIN, FACE_MAX)));
        self
    }

    /// Queue unit draws. Values are clamped into `[0, 1)`.
    #[must_use]
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units
            .extend(units.into_iter().map(|u| u.clamp(0.0, 0.999_999)));
        self
    }

    /// Total number of values drawn so far, scripted or not.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Scripted faces not yet consumed.
    #[must_use]
    pub fn remaining_faces(&self) -> usize {
        self.faces.len()
    }
}

impl RandomSource for ScriptedRng {
    fn roll_face(&mut self) -> Face {
        self.draws += 1;
        match self.faces.pop_front() {
            Some(face) => face,
            None => self.fallback.roll_face(),
        }
    }

    fn unit(&mut self) -> f64 {
        self.draws += 1;
        match self.units.pop_front() {
            Some(unit) => unit,
            None => self.fallback.unit(),
        }
    }

    fn index(&mut self, len: usize) -> usize {
        let scaled = (self.unit() * len as f64) as usize;
        scaled.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_face(), rng2.roll_face());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_face()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_face()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_faces_in_range() {
        let mut rng = GameRng::new(3);
        for _ in 0..1000 {
            let face = rng.roll_face();
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_unit_and_index_in_range() {
        let mut rng = GameRng::new(9);
        for _ in 0..1000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
            assert!(rng.index(4) < 4);
        }
    }

    #[test]
    fn test_scripted_faces_then_fallback() {
        let mut rng = ScriptedRng::new(5).with_faces([2, 9, 0]);
        assert_eq!(rng.roll_face(), 2);
        assert_eq!(rng.roll_face(), 6); // clamped
        assert_eq!(rng.roll_face(), 1); // clamped
        assert_eq!(rng.remaining_faces(), 0);

        let mut reference = GameRng::new(5);
        assert_eq!(rng.roll_face(), reference.roll_face());
        assert_eq!(rng.draws(), 4);
    }

    #[test]
    fn test_scripted_units_drive_index_and_chance() {
        let mut rng = ScriptedRng::new(0).with_units([0.0, 0.5, 0.99, 0.05]);
        assert_eq!(rng.index(6), 0);
        assert_eq!(rng.index(6), 3);
        assert_eq!(rng.index(6), 5);
        assert!(rng.chance(0.10));
        assert_eq!(rng.draws(), 4);
    }
}
