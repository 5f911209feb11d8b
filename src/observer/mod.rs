//! Observation layer: broadcast channels and the observed player facade.
//!
//! ## Key Components
//!
//! - [`Channel`]: a typed synchronous broadcast primitive with
//!   predicate-filtered (`derive`) and mapped (`convert`) composition
//! - [`ObservedPlayer`]: composes a [`CrapsPlayer`] with one channel per
//!   observable fact, publishing on every state transition
//!
//! ## Design Philosophy
//!
//! The engine pushes state to the presentation layer rather than being
//! polled. Every ledger mutation publishes the resulting value on the
//! matching channel before the mutating call returns, so observers are
//! always consistent with the ledger without reading it.
//!
//! [`CrapsPlayer`]: crate::game::CrapsPlayer

pub mod channel;
pub mod player;

pub use channel::Channel;
pub use player::ObservedPlayer;
