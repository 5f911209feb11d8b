//! Craps game logic: the round state machine and the player ledger.
//!
//! High-level object: [`CrapsPlayer`].
//! Main operations:
//!   - `start_game` – stake the bet and make the come-out roll
//!   - `continue_game` – roll again while a point is set
//!   - `reset_game` / `reset_player` / `reinitialize` – lifecycle resets

pub mod errors;
pub mod player;
pub mod round;

pub use errors::GameError;
pub use player::CrapsPlayer;
pub use round::{Outcome, Round, FIRST_TURN_LOSSES, FIRST_TURN_WINS, LATER_TURN_LOSS};
