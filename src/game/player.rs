//! The player ledger: bank, bet, win/loss counters, round lifecycle.
//!
//! [`CrapsPlayer`] owns zero-or-one active [`Round`] and the roll source
//! that feeds it. Monetary setters clamp rather than fail (a UI can bind
//! steppers to them without error plumbing); `start_game` is the single
//! strict gate that rejects a degenerate bet.

use tracing::debug;

use crate::core::dice::DieRoll;
use crate::core::rng::{DiceRng, RollSource};
use crate::game::errors::GameError;
use crate::game::round::{Outcome, Round};

/// What a single roll did to the active round.
///
/// Carried from the roll step to the settlement step so the observing
/// facade can publish dice and point before settlement mutates the ledger.
pub(crate) struct RollDelta {
    pub roll: DieRoll,
    pub point: u8,
    pub first_turn: bool,
    pub outcome: Outcome,
}

/// A craps player: bank, bet, counters, and the current round.
pub struct CrapsPlayer {
    bank: i64,
    bet: i64,
    round: Option<Round>,
    wins: i64,
    losses: i64,
    last_bet: i64,
    rolls: Box<dyn RollSource>,
}

impl CrapsPlayer {
    /// Create a player with an entropy-seeded roll source and empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(Box::new(DiceRng::from_entropy()))
    }

    /// Create a player whose rolls are deterministic for the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(Box::new(DiceRng::new(seed)))
    }

    /// Create a player drawing from the given roll source.
    #[must_use]
    pub fn with_source(rolls: Box<dyn RollSource>) -> Self {
        Self {
            bank: 0,
            bet: 0,
            round: None,
            wins: 0,
            losses: 0,
            last_bet: 0,
            rolls,
        }
    }

    // === Ledger state ===

    /// The player's available funds. Always non-negative.
    #[must_use]
    pub fn bank(&self) -> i64 {
        self.bank
    }

    /// Set the bank, clamped to `max(amount, 0)`.
    pub fn set_bank(&mut self, amount: i64) {
        self.bank = amount.max(0);
    }

    /// The current wager. Always in `0..=bank`.
    #[must_use]
    pub fn bet(&self) -> i64 {
        self.bet
    }

    /// Set the bet, clamped to `max(0, min(amount, bank))`.
    pub fn set_bet(&mut self, amount: i64) {
        self.bet = amount.clamp(0, self.bank);
    }

    /// Adjust the bet by a delta, with the same clamping as [`set_bet`].
    ///
    /// [`set_bet`]: CrapsPlayer::set_bet
    pub fn increment_bet(&mut self, delta: i64) {
        self.set_bet(self.bet.saturating_add(delta));
    }

    /// Rounds won so far.
    #[must_use]
    pub fn wins(&self) -> i64 {
        self.wins
    }

    /// Rounds lost so far.
    #[must_use]
    pub fn losses(&self) -> i64 {
        self.losses
    }

    /// The bet of the most recently settled round.
    #[must_use]
    pub fn last_bet(&self) -> i64 {
        self.last_bet
    }

    /// Whether a round is in progress.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.round.is_some()
    }

    /// The active round's point, if a round is in progress and has one.
    #[must_use]
    pub fn point(&self) -> Option<u8> {
        self.round.as_ref().and_then(Round::point)
    }

    /// The active round's most recent roll, if any.
    #[must_use]
    pub fn dice(&self) -> Option<DieRoll> {
        self.round.as_ref().and_then(Round::last_roll)
    }

    // === Round lifecycle ===

    /// Stake the current bet and make the come-out roll.
    ///
    /// Fails with [`GameError::IllegalBet`] if the bet is not positive or
    /// exceeds the bank, and with [`GameError::RoundInProgress`] if a round
    /// is already active. On success the bet is debited from the bank and
    /// the first roll is made and settled; the roll's outcome is returned.
    pub fn start_game(&mut self) -> Result<Outcome, GameError> {
        self.stake()?;
        let delta = self.roll_round()?;
        self.settle(delta.outcome);
        Ok(delta.outcome)
    }

    /// Roll again on the active round.
    ///
    /// Fails with [`GameError::NoActiveRound`] unless a round has been
    /// started (and therefore had its come-out roll).
    pub fn continue_game(&mut self) -> Result<Outcome, GameError> {
        self.ensure_midround()?;
        let delta = self.roll_round()?;
        self.settle(delta.outcome);
        Ok(delta.outcome)
    }

    /// Discard the active round (if any) and clear the bet.
    ///
    /// Bank and counters are untouched.
    pub fn reset_game(&mut self) {
        self.round = None;
        self.set_bet(0);
    }

    /// Reset everything: round, bet, bank, counters.
    pub fn reset_player(&mut self) {
        self.reset_game();
        self.set_bank(0);
        self.wins = 0;
        self.losses = 0;
        self.last_bet = 0;
    }

    /// Reset the player and seed the bank with a fresh amount.
    ///
    /// Fails with [`GameError::RoundInProgress`] while a round is active;
    /// use [`set_bank`] for mid-round adjustments.
    ///
    /// [`set_bank`]: CrapsPlayer::set_bank
    pub fn reinitialize(&mut self, bank_amount: i64) -> Result<(), GameError> {
        if self.is_playing() {
            return Err(GameError::RoundInProgress);
        }
        self.reset_player();
        self.set_bank(bank_amount);
        debug!(bank = self.bank, "player reinitialized");
        Ok(())
    }

    // === Internal orchestration ===
    //
    // The observing facade drives these primitives directly so it can
    // publish between the stake, roll, and settlement steps. The public
    // start_game/continue_game compose the same primitives.

    /// Validate the bet, create the round, debit the bank.
    ///
    /// Returns the debited bank value.
    pub(crate) fn stake(&mut self) -> Result<i64, GameError> {
        if self.bet <= 0 || self.bet > self.bank {
            return Err(GameError::IllegalBet {
                bet: self.bet,
                bank: self.bank,
            });
        }
        if self.round.is_some() {
            return Err(GameError::RoundInProgress);
        }

        self.round = Some(Round::new());
        self.set_bank(self.bank - self.bet);
        debug!(bank = self.bank, bet = self.bet, "round started");
        Ok(self.bank)
    }

    /// Check that a round is active and past its come-out roll.
    pub(crate) fn ensure_midround(&self) -> Result<(), GameError> {
        match &self.round {
            Some(round) if !round.is_first_turn() => Ok(()),
            _ => Err(GameError::NoActiveRound),
        }
    }

    /// Roll the active round once, without settling.
    pub(crate) fn roll_round(&mut self) -> Result<RollDelta, GameError> {
        let round = self.round.as_mut().ok_or(GameError::NoActiveRound)?;
        let roll = DieRoll::roll(self.rolls.as_mut());
        let first_turn = round.is_first_turn();
        let outcome = round.apply(roll);
        Ok(RollDelta {
            roll,
            point: round.point().unwrap_or_else(|| roll.sum()),
            first_turn,
            outcome,
        })
    }

    /// Apply a roll's outcome to the ledger.
    ///
    /// A win credits twice the bet (the stake plus even-money winnings); a
    /// loss keeps the already-debited stake. Either terminal outcome records
    /// the bet as `last_bet`, bumps the matching counter, and discards the
    /// round. An ongoing outcome leaves everything in place.
    pub(crate) fn settle(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => {
                self.set_bank(self.bank.saturating_add(self.bet.saturating_mul(2)));
                self.wins += 1;
                self.last_bet = self.bet;
                self.reset_game();
                debug!(bank = self.bank, wins = self.wins, "round won");
            }
            Outcome::Loss => {
                self.losses += 1;
                self.last_bet = self.bet;
                self.reset_game();
                debug!(bank = self.bank, losses = self.losses, "round lost");
            }
            Outcome::Ongoing => {}
        }
    }
}

impl Default for CrapsPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CrapsPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrapsPlayer")
            .field("bank", &self.bank)
            .field("bet", &self.bet)
            .field("round", &self.round)
            .field("wins", &self.wins)
            .field("losses", &self.losses)
            .field("last_bet", &self.last_bet)
            .finish_non_exhaustive()
    }
}
