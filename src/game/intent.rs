//! User intents delivered by a front end.

use super::snapshot::RenderSnapshot;

/// A discrete request from the presentation layer.
///
/// Front ends map their raw input (clicks, keys, typed commands) to one of
/// these; the engine never sees input devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Take another card.
    Hit,
    /// Keep the current hand and let the dealer play.
    Stand,
    /// Throw away the current round and deal a new one.
    Restart,
    /// Leave the game.
    Quit,
}

/// What the front end should do after an intent was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Redraw from this snapshot.
    Render(RenderSnapshot),
    /// Shut down.
    Quit,
}
