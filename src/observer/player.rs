//! The observed player facade.
//!
//! [`ObservedPlayer`] composes a [`CrapsPlayer`] with one [`Channel`] per
//! observable fact. Every mutating call delegates to the ledger and then
//! publishes the resulting value(s) on the matching channel(s), so the
//! presentation layer never polls.
//!
//! ## Channels
//!
//! Primary channels are published by the facade directly; algebraic
//! channels are built from them with `derive`/`convert` at construction:
//!
//! - `on_bank`, `on_bet`, `on_point`, `on_dice`, `on_round_result`,
//!   `on_playing` — primary
//! - `on_die1`, `on_die2`, `on_dice_total` — converted off `on_dice`
//! - `on_wins`, `on_losses` — `on_round_result` filtered to the matching
//!   outcome, converted to the updated counter
//! - `on_startable` — converted off `on_playing`: no round active and a
//!   positive bank
//!
//! ## Dispatch rules
//!
//! All publishes run inline, after the ledger mutation and with its borrow
//! released, so callbacks may read the player state. Mutating the player
//! from inside a callback is unsupported and will panic on the `RefCell`
//! borrow.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::core::dice::DieRoll;
use crate::core::rng::RollSource;
use crate::game::errors::GameError;
use crate::game::player::CrapsPlayer;
use crate::game::round::Outcome;
use crate::observer::channel::Channel;

/// A [`CrapsPlayer`] whose every state transition is broadcast on typed
/// channels.
#[derive(Debug)]
pub struct ObservedPlayer {
    player: Rc<RefCell<CrapsPlayer>>,

    /// New bank value after any bank change.
    pub on_bank: Channel<i64>,
    /// New bet value after any bet change.
    pub on_bet: Channel<i64>,
    /// The point, published on the come-out roll of each round.
    pub on_point: Channel<u8>,
    /// Every roll of the dice.
    pub on_dice: Channel<DieRoll>,
    /// First die of every roll.
    pub on_die1: Channel<u8>,
    /// Second die of every roll.
    pub on_die2: Channel<u8>,
    /// Sum of every roll.
    pub on_dice_total: Channel<u8>,
    /// Terminal outcome of each round.
    pub on_round_result: Channel<Outcome>,
    /// Updated win counter, after each won round.
    pub on_wins: Channel<i64>,
    /// Updated loss counter, after each lost round.
    pub on_losses: Channel<i64>,
    /// Whether a round is active, published on each start/stop.
    pub on_playing: Channel<bool>,
    /// Whether a round could be started: no active round and bank > 0.
    pub on_startable: Channel<bool>,
}

impl ObservedPlayer {
    /// Observe a player with an entropy-seeded roll source.
    #[must_use]
    pub fn new() -> Self {
        Self::from_player(CrapsPlayer::new())
    }

    /// Observe a player whose rolls are deterministic for the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_player(CrapsPlayer::with_seed(seed))
    }

    /// Observe a player drawing from the given roll source.
    #[must_use]
    pub fn with_source(rolls: Box<dyn RollSource>) -> Self {
        Self::from_player(CrapsPlayer::with_source(rolls))
    }

    /// Wrap an existing ledger, wiring up all channels.
    #[must_use]
    pub fn from_player(player: CrapsPlayer) -> Self {
        let player = Rc::new(RefCell::new(player));

        let on_dice: Channel<DieRoll> = Channel::new();
        let on_die1 = on_dice.convert(|roll: &DieRoll| roll.die1());
        let on_die2 = on_dice.convert(|roll: &DieRoll| roll.die2());
        let on_dice_total = on_dice.convert(|roll: &DieRoll| roll.sum());

        let on_round_result: Channel<Outcome> = Channel::new();
        let ledger = Rc::clone(&player);
        let on_wins = on_round_result
            .derive(|outcome: &Outcome| *outcome == Outcome::Won)
            .convert(move |_| ledger.borrow().wins());
        let ledger = Rc::clone(&player);
        let on_losses = on_round_result
            .derive(|outcome: &Outcome| *outcome == Outcome::Loss)
            .convert(move |_| ledger.borrow().losses());

        let on_playing: Channel<bool> = Channel::new();
        let ledger = Rc::clone(&player);
        let on_startable =
            on_playing.convert(move |playing: &bool| !*playing && ledger.borrow().bank() > 0);

        Self {
            player,
            on_bank: Channel::new(),
            on_bet: Channel::new(),
            on_point: Channel::new(),
            on_dice,
            on_die1,
            on_die2,
            on_dice_total,
            on_round_result,
            on_wins,
            on_losses,
            on_playing,
            on_startable,
        }
    }

    // === Ledger state (read-through) ===

    /// The player's available funds.
    #[must_use]
    pub fn bank(&self) -> i64 {
        self.player.borrow().bank()
    }

    /// The current wager.
    #[must_use]
    pub fn bet(&self) -> i64 {
        self.player.borrow().bet()
    }

    /// Rounds won so far.
    #[must_use]
    pub fn wins(&self) -> i64 {
        self.player.borrow().wins()
    }

    /// Rounds lost so far.
    #[must_use]
    pub fn losses(&self) -> i64 {
        self.player.borrow().losses()
    }

    /// The bet of the most recently settled round.
    #[must_use]
    pub fn last_bet(&self) -> i64 {
        self.player.borrow().last_bet()
    }

    /// Whether a round is in progress.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.player.borrow().is_playing()
    }

    /// The active round's point, if any.
    #[must_use]
    pub fn point(&self) -> Option<u8> {
        self.player.borrow().point()
    }

    /// The active round's most recent roll, if any.
    #[must_use]
    pub fn dice(&self) -> Option<DieRoll> {
        self.player.borrow().dice()
    }

    // === Ledger mutations, each followed by its publishes ===

    /// Set the bank (clamped to non-negative) and publish the new value.
    pub fn set_bank(&self, amount: i64) {
        let bank = {
            let mut player = self.player.borrow_mut();
            player.set_bank(amount);
            player.bank()
        };
        self.on_bank.publish(&bank);
    }

    /// Set the bet (clamped to `0..=bank`) and publish the new value.
    pub fn set_bet(&self, amount: i64) {
        let bet = {
            let mut player = self.player.borrow_mut();
            player.set_bet(amount);
            player.bet()
        };
        self.on_bet.publish(&bet);
    }

    /// Adjust the bet by a delta and publish the new value.
    pub fn increment_bet(&self, delta: i64) {
        let bet = {
            let mut player = self.player.borrow_mut();
            player.increment_bet(delta);
            player.bet()
        };
        self.on_bet.publish(&bet);
    }

    /// Stake the bet and make the come-out roll, publishing every step.
    ///
    /// Publish order: debited bank; dice; point; then either the
    /// settlement set (see [`continue_game`]) if the roll was terminal, or
    /// `on_playing(true)` if the round stays open.
    ///
    /// [`continue_game`]: ObservedPlayer::continue_game
    pub fn start_game(&self) -> Result<Outcome, GameError> {
        let staked_bank = self.player.borrow_mut().stake()?;
        self.on_bank.publish(&staked_bank);

        let outcome = self.roll_observed()?;
        if matches!(outcome, Outcome::Ongoing) {
            self.on_playing.publish(&true);
        }
        Ok(outcome)
    }

    /// Roll again on the active round, publishing every step.
    ///
    /// Publish order: dice; then on a terminal roll the settlement set —
    /// bank (won rounds only), bet (now 0), playing (now false), and the
    /// round result, which drives the win/loss counter channels.
    pub fn continue_game(&self) -> Result<Outcome, GameError> {
        self.player.borrow().ensure_midround()?;
        self.roll_observed()
    }

    /// Discard the active round and clear the bet, publishing bet and
    /// playing state.
    pub fn reset_game(&self) {
        let (bet, playing) = {
            let mut player = self.player.borrow_mut();
            player.reset_game();
            (player.bet(), player.is_playing())
        };
        self.on_bet.publish(&bet);
        self.on_playing.publish(&playing);
    }

    /// Reset the whole player and publish the full snapshot (wins, losses,
    /// bet, bank, playing) so a freshly attached observer set is
    /// consistent.
    pub fn reset_player(&self) {
        self.player.borrow_mut().reset_player();
        self.publish_snapshot();
    }

    /// Reset the player, seed a fresh bank, and publish the full snapshot.
    ///
    /// Fails with [`GameError::RoundInProgress`] while a round is active.
    pub fn reinitialize(&self, bank_amount: i64) -> Result<(), GameError> {
        self.player.borrow_mut().reinitialize(bank_amount)?;
        self.publish_snapshot();
        Ok(())
    }

    /// Publish wins, losses, bet, bank, and playing from current state.
    fn publish_snapshot(&self) {
        let (wins, losses, bet, bank, playing) = {
            let player = self.player.borrow();
            (
                player.wins(),
                player.losses(),
                player.bet(),
                player.bank(),
                player.is_playing(),
            )
        };
        self.on_wins.publish(&wins);
        self.on_losses.publish(&losses);
        self.on_bet.publish(&bet);
        self.on_bank.publish(&bank);
        self.on_playing.publish(&playing);
    }

    /// Roll the active round, publishing dice/point, then settle,
    /// publishing the settlement set on a terminal outcome.
    fn roll_observed(&self) -> Result<Outcome, GameError> {
        let delta = self.player.borrow_mut().roll_round()?;
        self.on_dice.publish(&delta.roll);
        if delta.first_turn {
            self.on_point.publish(&delta.point);
        }

        if delta.outcome.is_terminal() {
            let (bank, bet, playing) = {
                let mut player = self.player.borrow_mut();
                player.settle(delta.outcome);
                (player.bank(), player.bet(), player.is_playing())
            };
            if delta.outcome == Outcome::Won {
                self.on_bank.publish(&bank);
            }
            self.on_bet.publish(&bet);
            self.on_playing.publish(&playing);
            self.on_round_result.publish(&delta.outcome);
            debug!(outcome = %delta.outcome, bank, "round settled");
        }
        Ok(delta.outcome)
    }
}

impl Default for ObservedPlayer {
    fn default() -> Self {
        Self::new()
    }
}
