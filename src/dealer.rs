//! The dealer's fixed drawing policy.

use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;

/// Total at which the dealer always stops drawing.
pub const DEALER_STAND_TOTAL: u8 = 17;

/// Returns whether the dealer takes another card.
///
/// The dealer draws only while it is not ahead of the player and still
/// under 17. It stops as soon as it passes the player's total, even below 17.
#[must_use]
pub const fn dealer_should_draw(dealer_total: u8, player_total: u8) -> bool {
    dealer_total <= player_total && dealer_total < DEALER_STAND_TOTAL
}

/// Plays out the dealer's hand against `player_total`, drawing from `deck`.
///
/// Returns the dealer's final total.
///
/// # Errors
///
/// Returns [`GameError::DeckExhausted`] if the dealer must draw from an
/// empty deck. Cards drawn before that stay in the hand.
pub fn dealer_play(
    dealer: &mut Hand,
    deck: &mut Deck,
    player_total: u8,
) -> Result<u8, GameError> {
    while dealer_should_draw(dealer.total(), player_total) {
        let card = deck.draw()?;
        log::debug!("dealer draws {card}");
        dealer.add_card(card);
    }

    Ok(dealer.total())
}
