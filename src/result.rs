//! Round outcomes and session counters.

use crate::hand::BLACKJACK;

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has the higher total.
    PlayerWins,
    /// Dealer has the higher total.
    DealerWins,
    /// Tie.
    Push,
}

impl Outcome {
    /// Returns whether the round counts as a win for the player.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }

    /// Returns whether the round counts as a loss for the player.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerWins)
    }

    /// Result line shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::DealerBust | Self::PlayerWins => "You win!",
            Self::PlayerBust | Self::DealerWins => "You lose!",
            Self::Push => "Push!",
        }
    }
}

/// Decides a round from the final totals.
///
/// The first matching rule wins: player bust, dealer bust, higher total,
/// then push.
#[must_use]
pub const fn evaluate_outcome(player_total: u8, dealer_total: u8) -> Outcome {
    if player_total > BLACKJACK {
        Outcome::PlayerBust
    } else if dealer_total > BLACKJACK {
        Outcome::DealerBust
    } else if player_total > dealer_total {
        Outcome::PlayerWins
    } else if dealer_total > player_total {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}

/// Win and loss counters kept across rounds for the life of a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Rounds won by the player.
    pub wins: u32,
    /// Rounds lost by the player.
    pub losses: u32,
}

impl SessionStats {
    /// Creates zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self { wins: 0, losses: 0 }
    }

    /// Counts a finished round. Pushes leave both counters unchanged.
    pub const fn record(&mut self, outcome: Outcome) {
        if outcome.is_win() {
            self.wins += 1;
        } else if outcome.is_loss() {
            self.losses += 1;
        }
    }
}
