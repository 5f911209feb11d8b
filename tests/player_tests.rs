//! Player ledger integration tests.
//!
//! Property tests for the clamp-on-write setters, invariant checks over
//! long seeded sessions, and the betting arithmetic across full rounds.

use craps_engine::{CrapsPlayer, FixedRolls, GameError, Outcome};
use proptest::prelude::*;

fn scripted(faces: &[u8]) -> CrapsPlayer {
    CrapsPlayer::with_source(Box::new(FixedRolls::new(faces.to_vec())))
}

// =============================================================================
// Clamp Properties
// =============================================================================

proptest! {
    /// set_bank clamps any amount to max(amount, 0).
    #[test]
    fn prop_set_bank_clamps(amount in any::<i64>()) {
        let mut player = CrapsPlayer::with_seed(0);
        player.set_bank(amount);
        prop_assert_eq!(player.bank(), amount.max(0));
    }

    /// After set_bank then set_bet, the bet lands in 0..=bank.
    #[test]
    fn prop_set_bet_stays_within_bank(bank in 0i64..1_000_000, bet in -1_000_000i64..2_000_000) {
        let mut player = CrapsPlayer::with_seed(0);
        player.set_bank(bank);
        player.set_bet(bet);
        prop_assert!(player.bet() >= 0);
        prop_assert!(player.bet() <= bank);
        prop_assert_eq!(player.bet(), bet.clamp(0, bank));
    }

    /// increment_bet(delta) matches set_bet(bet + delta).
    #[test]
    fn prop_increment_bet_matches_set_bet(
        bank in 0i64..100_000,
        bet in 0i64..100_000,
        delta in -100_000i64..100_000,
    ) {
        let mut incremented = CrapsPlayer::with_seed(0);
        incremented.set_bank(bank);
        incremented.set_bet(bet);
        let mut set_directly = CrapsPlayer::with_seed(0);
        set_directly.set_bank(bank);
        set_directly.set_bet(bet);

        incremented.increment_bet(delta);
        let base = set_directly.bet();
        set_directly.set_bet(base + delta);

        prop_assert_eq!(incremented.bet(), set_directly.bet());
    }

    /// A zero bet is always rejected at start_game, whatever the bank.
    #[test]
    fn prop_zero_bet_never_starts(bank in 0i64..1_000_000) {
        let mut player = CrapsPlayer::with_seed(0);
        player.set_bank(bank);
        prop_assert_eq!(
            player.start_game(),
            Err(GameError::IllegalBet { bet: 0, bank })
        );
    }
}

// =============================================================================
// Session Invariants
// =============================================================================

/// Play many seeded rounds at a unit bet and check the ledger invariants
/// plus the accounting identity: each win nets +1, each loss nets -1.
#[test]
fn test_long_session_accounting() {
    const ROUNDS: i64 = 500;
    const INITIAL_BANK: i64 = ROUNDS;

    let mut player = CrapsPlayer::with_seed(7);
    player.set_bank(INITIAL_BANK);

    for _ in 0..ROUNDS {
        player.set_bet(1);
        let mut outcome = player.start_game().unwrap();
        while outcome == Outcome::Ongoing {
            assert!(player.is_playing());
            assert!(player.point().is_some());
            outcome = player.continue_game().unwrap();
        }
        assert!(!player.is_playing());
        assert_eq!(player.bet(), 0);
        assert_eq!(player.last_bet(), 1);
        assert!(player.bank() >= 0);
    }

    assert_eq!(player.wins() + player.losses(), ROUNDS);
    assert_eq!(
        player.bank(),
        INITIAL_BANK + player.wins() - player.losses()
    );
}

/// Each round visits at least one roll, and rounds with a point never
/// report the come-out-only sums as their point.
#[test]
fn test_points_are_never_resolved_sums() {
    let mut player = CrapsPlayer::with_seed(99);
    player.set_bank(1_000);

    for _ in 0..200 {
        player.set_bet(1);
        let outcome = player.start_game().unwrap();
        if outcome == Outcome::Ongoing {
            let point = player.point().unwrap();
            assert!(
                ![2, 3, 7, 11, 12].contains(&point),
                "point {point} should have resolved the come-out roll"
            );
            player.reset_game();
        }
    }
}

// =============================================================================
// Betting Arithmetic
// =============================================================================

/// A won round credits exactly twice the bet relative to the staked bank.
#[test]
fn test_win_credits_twice_the_bet() {
    // Point 8 (4+4), then hit it (5+3)
    let mut player = scripted(&[4, 4, 5, 3]);
    player.set_bank(100);
    player.set_bet(30);

    assert_eq!(player.start_game(), Ok(Outcome::Ongoing));
    assert_eq!(player.bank(), 70);
    assert_eq!(player.continue_game(), Ok(Outcome::Won));
    assert_eq!(player.bank(), 130); // 70 + 2 * 30
    assert_eq!(player.wins(), 1);
    assert_eq!(player.losses(), 0);
}

/// A lost round leaves the bank at its staked value.
#[test]
fn test_loss_keeps_staked_bank() {
    // Point 9 (5+4), then seven out (6+1)
    let mut player = scripted(&[5, 4, 6, 1]);
    player.set_bank(100);
    player.set_bet(30);

    assert_eq!(player.start_game(), Ok(Outcome::Ongoing));
    assert_eq!(player.continue_game(), Ok(Outcome::Loss));
    assert_eq!(player.bank(), 70);
    assert_eq!(player.wins(), 0);
    assert_eq!(player.losses(), 1);
}

/// Back-to-back rounds re-stake from the post-settlement bank.
#[test]
fn test_consecutive_rounds() {
    // Round 1: natural 7. Round 2: craps 3.
    let mut player = scripted(&[3, 4, 1, 2]);
    player.set_bank(10);

    player.set_bet(10);
    assert_eq!(player.start_game(), Ok(Outcome::Won));
    assert_eq!(player.bank(), 20);

    player.set_bet(4);
    assert_eq!(player.start_game(), Ok(Outcome::Loss));
    assert_eq!(player.bank(), 16);
    assert_eq!(player.wins(), 1);
    assert_eq!(player.losses(), 1);
}
