use thiserror::Error;

/// Errors produced by the game lifecycle.
///
/// `IllegalBet` is a user-facing condition (re-prompt for a bet); the state
/// variants indicate a caller-sequencing bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("bet of {bet} is not legal against a bank of {bank}")]
    IllegalBet { bet: i64, bank: i64 },

    #[error("a round is already in progress")]
    RoundInProgress,

    #[error("no round in progress (call start_game first)")]
    NoActiveRound,
}
