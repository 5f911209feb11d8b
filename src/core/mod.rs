//! Core engine types: dice, roll sources, RNG.
//!
//! This module contains the fundamental building blocks that are
//! presentation-agnostic. The game layer builds the round and ledger
//! logic on top of these.

pub mod dice;
pub mod rng;

pub use dice::{DieRoll, InvalidDieFace, DIE_MAX, DIE_MIN};
pub use rng::{DiceRng, FixedRolls, RollSource};
