//! Game engine and round management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;
use crate::result::{Outcome, SessionStats};

mod actions;
pub mod intent;
pub mod snapshot;
pub mod state;

pub use intent::{Intent, Step};
pub use snapshot::{CardView, RenderSnapshot};
pub use state::{Phase, RoundState};

/// A single-player blackjack engine.
///
/// The game owns the current round and the session's win/loss counters.
/// Every round is dealt from a fresh deck shuffled by the game's seeded RNG,
/// so two games built with the same seed play out identically.
#[derive(Debug, Clone)]
pub struct Game {
    /// The round in progress.
    round: RoundState,
    /// Win/loss counters kept across rounds.
    stats: SessionStats,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// No cards are dealt until [`start_round`](Self::start_round) is called.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::{Game, Phase};
    ///
    /// let mut game = Game::new(42);
    /// game.start_round().unwrap();
    /// assert_eq!(game.phase(), Phase::PlayerTurn);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);

        Self {
            round: RoundState::undealt(deck),
            stats: SessionStats::new(),
            rng,
        }
    }

    /// Deals a new round from a freshly shuffled deck.
    ///
    /// Session counters are kept.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckExhausted`] if the deck cannot cover the
    /// initial deal; this cannot happen with a full deck.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        let deck = Deck::new(&mut self.rng);
        self.start_round_with(deck)
    }

    /// Deals a new round from the given deck.
    ///
    /// Cards go player, dealer, player, dealer. The previous round is only
    /// replaced once the deal succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckExhausted`] if the deck holds fewer than four
    /// cards.
    pub fn start_round_with(&mut self, mut deck: Deck) -> Result<(), GameError> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();

        for _ in 0..2 {
            player.add_card(deck.draw()?);
            dealer.add_card(deck.draw()?);
        }

        log::debug!(
            "dealt new round: player total {}, dealer shows {}, {} cards left",
            player.total(),
            dealer.up_card_value(),
            deck.len()
        );

        self.round = RoundState {
            player,
            dealer,
            deck,
            phase: Phase::PlayerTurn,
            outcome: None,
        };

        Ok(())
    }

    /// Starts over with a new round. Counters persist.
    ///
    /// Accepted in every phase.
    ///
    /// # Errors
    ///
    /// See [`start_round`](Self::start_round).
    pub fn restart(&mut self) -> Result<(), GameError> {
        log::info!(
            "restarting round (wins {}, losses {})",
            self.stats.wins,
            self.stats.losses
        );
        self.start_round()
    }

    /// Closes the round with `outcome` and counts it.
    fn finish(&mut self, outcome: Outcome) {
        self.round.outcome = Some(outcome);
        self.round.phase = Phase::Finished;
        self.stats.record(outcome);

        log::info!(
            "round finished: {outcome:?} (player {}, dealer {})",
            self.round.player.total(),
            self.round.dealer.total()
        );
    }

    /// Returns the current round.
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.round.phase
    }

    /// Returns the outcome of the round, if it is finished.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.round.outcome
    }

    /// Returns the session counters.
    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.round.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.round.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.round.deck.len()
    }

    /// Captures what the front end should draw.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.round, self.stats.wins, self.stats.losses)
    }
}
