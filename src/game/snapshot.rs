//! Read-only views handed to the presentation layer.

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::Outcome;

use super::state::{Phase, RoundState};

/// A card as the player may see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardView {
    /// Card showing its suit and rank.
    FaceUp(Card),
    /// Card lying face down.
    FaceDown,
}

impl CardView {
    /// Returns the card if it is face up.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::FaceUp(card) => Some(*card),
            Self::FaceDown => None,
        }
    }
}

/// Everything a front end needs to draw the table after an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    /// Dealer cards; the hole card is [`CardView::FaceDown`] while hidden.
    pub dealer_cards: Vec<CardView>,
    /// Player cards.
    pub player_cards: Vec<CardView>,
    /// Player's ace-adjusted total.
    pub player_total: u8,
    /// Dealer total; only the up card counts while the hole card is hidden.
    pub dealer_total: u8,
    /// Current phase.
    pub phase: Phase,
    /// Outcome once the round is finished.
    pub outcome: Option<Outcome>,
    /// Session wins.
    pub wins: u32,
    /// Session losses.
    pub losses: u32,
    /// Whether the dealer's hole card is hidden.
    pub hide_dealer_hole_card: bool,
    /// Whether a hit would be accepted.
    pub can_hit: bool,
    /// Whether a stand would be accepted.
    pub can_stand: bool,
    /// Whether the front end should offer a new round.
    pub can_restart: bool,
}

impl RenderSnapshot {
    pub(crate) fn capture(round: &RoundState, wins: u32, losses: u32) -> Self {
        let hidden = round.hole_card_hidden();

        let dealer_cards = round
            .dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if hidden && index == 1 {
                    CardView::FaceDown
                } else {
                    CardView::FaceUp(*card)
                }
            })
            .collect();
        let player_cards = round
            .player
            .cards()
            .iter()
            .copied()
            .map(CardView::FaceUp)
            .collect();

        let dealer_total = if hidden {
            round.dealer.up_card_value()
        } else {
            round.dealer.total()
        };
        let player_turn = round.phase == Phase::PlayerTurn;

        Self {
            dealer_cards,
            player_cards,
            player_total: round.player.total(),
            dealer_total,
            phase: round.phase,
            outcome: round.outcome,
            wins,
            losses,
            hide_dealer_hole_card: hidden,
            can_hit: player_turn,
            can_stand: player_turn,
            can_restart: !player_turn,
        }
    }

    /// Result line for a finished round.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.outcome.map(Outcome::message)
    }
}
