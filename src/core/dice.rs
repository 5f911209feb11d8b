//! Dice values.
//!
//! A [`DieRoll`] is an immutable pair of die faces. Faces are validated at
//! construction, so every `DieRoll` in circulation is known to be in range
//! and downstream code never re-checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::rng::RollSource;

/// Lowest face on a die.
pub const DIE_MIN: u8 = 1;
/// Highest face on a die.
pub const DIE_MAX: u8 = 6;

/// A die face outside `DIE_MIN..=DIE_MAX` was passed to [`DieRoll::new`].
///
/// Unreachable through the round API, which only rolls via a [`RollSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("die face {0} is outside 1..=6")]
pub struct InvalidDieFace(pub u8);

/// An immutable pair of die faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieRoll {
    die1: u8,
    die2: u8,
}

impl DieRoll {
    /// Create a roll from explicit faces.
    ///
    /// Returns [`InvalidDieFace`] if either face is outside
    /// `DIE_MIN..=DIE_MAX`.
    pub fn new(die1: u8, die2: u8) -> Result<Self, InvalidDieFace> {
        for face in [die1, die2] {
            if !(DIE_MIN..=DIE_MAX).contains(&face) {
                return Err(InvalidDieFace(face));
            }
        }
        Ok(Self { die1, die2 })
    }

    /// Draw two independent faces from the given source.
    ///
    /// The source contract guarantees faces in `DIE_MIN..=DIE_MAX`.
    pub fn roll(source: &mut dyn RollSource) -> Self {
        let die1 = source.roll_die();
        let die2 = source.roll_die();
        debug_assert!((DIE_MIN..=DIE_MAX).contains(&die1));
        debug_assert!((DIE_MIN..=DIE_MAX).contains(&die2));
        Self { die1, die2 }
    }

    /// Face of the first die.
    #[must_use]
    pub fn die1(self) -> u8 {
        self.die1
    }

    /// Face of the second die.
    #[must_use]
    pub fn die2(self) -> u8 {
        self.die2
    }

    /// Sum of both faces, in `2..=12`.
    #[must_use]
    pub fn sum(self) -> u8 {
        self.die1 + self.die2
    }
}

impl std::fmt::Display for DieRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {}]", self.die1, self.die2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{DiceRng, FixedRolls};

    #[test]
    fn test_valid_faces() {
        let roll = DieRoll::new(1, 6).unwrap();
        assert_eq!(roll.die1(), 1);
        assert_eq!(roll.die2(), 6);
        assert_eq!(roll.sum(), 7);
    }

    #[test]
    fn test_invalid_faces_rejected() {
        assert_eq!(DieRoll::new(0, 3), Err(InvalidDieFace(0)));
        assert_eq!(DieRoll::new(3, 7), Err(InvalidDieFace(7)));
        assert_eq!(DieRoll::new(7, 0), Err(InvalidDieFace(7)));
    }

    #[test]
    fn test_roll_from_scripted_source() {
        let mut source = FixedRolls::new(vec![3, 4]);
        let roll = DieRoll::roll(&mut source);
        assert_eq!((roll.die1(), roll.die2()), (3, 4));
        assert_eq!(roll.sum(), 7);
    }

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = DiceRng::new(42);
        for _ in 0..200 {
            let roll = DieRoll::roll(&mut rng);
            assert!((DIE_MIN..=DIE_MAX).contains(&roll.die1()));
            assert!((DIE_MIN..=DIE_MAX).contains(&roll.die2()));
            assert!((2..=12).contains(&roll.sum()));
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let roll = DieRoll::new(2, 5).unwrap();
        let json = serde_json::to_string(&roll).unwrap();
        let back: DieRoll = serde_json::from_str(&json).unwrap();
        assert_eq!(roll, back);
    }
}
