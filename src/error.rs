//! Error types for game operations.

use thiserror::Error;

/// Errors surfaced to the caller by deck and round operations.
///
/// Both kinds are recoverable: the engine is left in a consistent state and
/// a [`restart`](crate::Game::restart) always starts a playable round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
    /// The intent is not allowed in the current phase.
    #[error("invalid game state for this action")]
    InvalidStateTransition,
}
