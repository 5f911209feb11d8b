//! A single craps round.
//!
//! A [`Round`] moves through two phases:
//!
//! - **first turn**: no point yet; the come-out roll either resolves the
//!   round outright (7/11 win, 2/3/12 loss) or fixes the point
//! - **point set**: subsequent rolls resolve against the point (point wins,
//!   7 loses) or keep the round going
//!
//! There is no path back to the first-turn phase; a finished round is
//! discarded by its owner and a new one created.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::dice::DieRoll;
use crate::core::rng::RollSource;

/// Sums that win on the come-out roll.
pub const FIRST_TURN_WINS: [u8; 2] = [7, 11];
/// Sums that lose on the come-out roll.
pub const FIRST_TURN_LOSSES: [u8; 3] = [2, 3, 12];
/// The sum that loses once a point is set.
pub const LATER_TURN_LOSS: u8 = 7;

/// Result of a single roll within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The round continues.
    Ongoing,
    /// The round ended in a win.
    Won,
    /// The round ended in a loss.
    Loss,
}

impl Outcome {
    /// Whether this outcome ends the round.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::Won => write!(f, "won"),
            Outcome::Loss => write!(f, "loss"),
        }
    }
}

/// One craps round: the point (once fixed) and the most recent roll.
///
/// `point == None` encodes the first-turn phase; an explicit option rather
/// than a sentinel value, so the phase check cannot drift out of sync with
/// the point itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    point: Option<u8>,
    last_roll: Option<DieRoll>,
}

impl Round {
    /// Create a round in its first-turn phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the come-out roll has not happened yet.
    #[must_use]
    pub fn is_first_turn(&self) -> bool {
        self.point.is_none()
    }

    /// The point, once fixed by the come-out roll.
    #[must_use]
    pub fn point(&self) -> Option<u8> {
        self.point
    }

    /// The most recent roll of this round.
    #[must_use]
    pub fn last_roll(&self) -> Option<DieRoll> {
        self.last_roll
    }

    /// Roll the dice and resolve this round one step.
    ///
    /// On the first turn the point is fixed to the roll's sum before the
    /// outcome is determined. A terminal outcome means the caller discards
    /// the round.
    pub fn roll(&mut self, source: &mut dyn RollSource) -> Outcome {
        self.apply(DieRoll::roll(source))
    }

    /// Resolve this round one step with an already-drawn roll.
    pub fn apply(&mut self, roll: DieRoll) -> Outcome {
        self.last_roll = Some(roll);
        let sum = roll.sum();

        let outcome = match self.point {
            None => {
                self.point = Some(sum);
                if FIRST_TURN_WINS.contains(&sum) {
                    Outcome::Won
                } else if FIRST_TURN_LOSSES.contains(&sum) {
                    Outcome::Loss
                } else {
                    Outcome::Ongoing
                }
            }
            Some(point) => {
                if sum == point {
                    Outcome::Won
                } else if sum == LATER_TURN_LOSS {
                    Outcome::Loss
                } else {
                    Outcome::Ongoing
                }
            }
        };

        trace!(%roll, sum, point = ?self.point, %outcome, "round roll");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::FixedRolls;

    fn roll_with(round: &mut Round, die1: u8, die2: u8) -> Outcome {
        let mut source = FixedRolls::new(vec![die1, die2]);
        round.roll(&mut source)
    }

    #[test]
    fn test_first_turn_natural_win() {
        for (die1, die2) in [(3, 4), (5, 6)] {
            let mut round = Round::new();
            assert_eq!(roll_with(&mut round, die1, die2), Outcome::Won);
        }
    }

    #[test]
    fn test_first_turn_craps_loss() {
        for (die1, die2) in [(1, 1), (1, 2), (6, 6)] {
            let mut round = Round::new();
            assert_eq!(roll_with(&mut round, die1, die2), Outcome::Loss);
        }
    }

    #[test]
    fn test_first_turn_sets_point() {
        for (die1, die2) in [(2, 2), (2, 3), (3, 3), (4, 4), (4, 5), (5, 5)] {
            let mut round = Round::new();
            assert!(round.is_first_turn());
            let outcome = roll_with(&mut round, die1, die2);
            assert_eq!(outcome, Outcome::Ongoing);
            assert!(!round.is_first_turn());
            assert_eq!(round.point(), Some(die1 + die2));
        }
    }

    #[test]
    fn test_point_phase_hits_point() {
        let mut round = Round::new();
        assert_eq!(roll_with(&mut round, 2, 3), Outcome::Ongoing); // point 5
        assert_eq!(roll_with(&mut round, 4, 4), Outcome::Ongoing);
        assert_eq!(roll_with(&mut round, 1, 4), Outcome::Won);
        // Point is untouched by later rolls
        assert_eq!(round.point(), Some(5));
    }

    #[test]
    fn test_point_phase_seven_out() {
        let mut round = Round::new();
        assert_eq!(roll_with(&mut round, 2, 3), Outcome::Ongoing); // point 5
        assert_eq!(roll_with(&mut round, 3, 4), Outcome::Loss);
    }

    #[test]
    fn test_eleven_only_wins_on_first_turn() {
        let mut round = Round::new();
        assert_eq!(roll_with(&mut round, 4, 5), Outcome::Ongoing); // point 9
        assert_eq!(roll_with(&mut round, 5, 6), Outcome::Ongoing); // 11 is neutral now
    }

    #[test]
    fn test_last_roll_recorded() {
        let mut round = Round::new();
        assert_eq!(round.last_roll(), None);
        roll_with(&mut round, 2, 6);
        let last = round.last_roll().unwrap();
        assert_eq!((last.die1(), last.die2()), (2, 6));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut round = Round::new();
        roll_with(&mut round, 2, 2);
        let json = serde_json::to_string(&round).unwrap();
        let back: Round = serde_json::from_str(&json).unwrap();
        assert_eq!(round, back);
    }
}
