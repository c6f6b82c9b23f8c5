//! Round state types.

use crate::deck::Deck;
use crate::hand::Hand;
use crate::result::Outcome;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial cards are being dealt, or no round has started yet.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome is known.
    Finished,
}

/// Everything that belongs to a single round.
///
/// Replaced wholesale when a new round starts.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub(crate) player: Hand,
    pub(crate) dealer: Hand,
    pub(crate) deck: Deck,
    pub(crate) phase: Phase,
    pub(crate) outcome: Option<Outcome>,
}

impl RoundState {
    /// A round that has not been dealt yet.
    pub(crate) fn undealt(deck: Deck) -> Self {
        Self {
            player: Hand::new(),
            dealer: Hand::new(),
            deck,
            phase: Phase::Dealing,
            outcome: None,
        }
    }

    /// The player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// The dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// The deck the round draws from.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Outcome, once the round is finished.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns whether the dealer's hole card is still hidden.
    #[must_use]
    pub const fn hole_card_hidden(&self) -> bool {
        matches!(self.phase, Phase::PlayerTurn)
    }
}
