//! # craps-engine
//!
//! A reactive single-player craps engine: a round state machine, a
//! player ledger built on top of it, and typed broadcast channels that
//! push every state transition to the presentation layer.
//!
//! ## Design Principles
//!
//! 1. **Push, don't poll**: every ledger mutation publishes the resulting
//!    value on a matching [`Channel`] before the call returns. The
//!    presentation layer is a pure subscriber.
//!
//! 2. **Explicit composition**: the observed facade holds a plain ledger
//!    and a fixed set of channels; derived notification streams (per-die
//!    values, win/loss counters, "startable") are built with
//!    `derive`/`convert` pipelines, not inheritance or virtual dispatch.
//!
//! 3. **Single actor**: one player, one optional round, one thread.
//!    Dispatch is synchronous and in registration order; there is no
//!    locking and no background scheduling.
//!
//! 4. **No sentinels**: "no point yet" is `Option<u8>`, never a magic
//!    integer. Die faces are validated at construction.
//!
//! ## Modules
//!
//! - `core`: die rolls, roll sources, deterministic RNG
//! - `game`: the round state machine and the player ledger
//! - `observer`: broadcast channels and the observed player facade
//!
//! ## Example
//!
//! ```
//! use craps_engine::{ObservedPlayer, Outcome};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let player = ObservedPlayer::with_seed(42);
//!
//! let last_bank = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&last_bank);
//! player.on_bank.subscribe(move |bank| sink.set(*bank));
//!
//! player.set_bank(100);
//! assert_eq!(last_bank.get(), 100);
//!
//! player.set_bet(10);
//! let mut outcome = player.start_game().unwrap();
//! while outcome == Outcome::Ongoing {
//!     outcome = player.continue_game().unwrap();
//! }
//! // Every bank movement was broadcast along the way.
//! assert_eq!(last_bank.get(), player.bank());
//! ```

pub mod core;
pub mod game;
pub mod observer;

// Re-export commonly used types
pub use crate::core::{DiceRng, DieRoll, FixedRolls, InvalidDieFace, RollSource, DIE_MAX, DIE_MIN};

pub use crate::game::{
    CrapsPlayer, GameError, Outcome, Round, FIRST_TURN_LOSSES, FIRST_TURN_WINS, LATER_TURN_LOSS,
};

pub use crate::observer::{Channel, ObservedPlayer};
