//! Round state types.

/// Round state.
///
/// A round is either in play or finished. `Complete` also covers a fresh
/// game before the first deal; [`Game::start_round`](super::Game::start_round)
/// is the only transition back to `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// The player may hit or stand.
    InProgress,
    /// The round is resolved (or not yet started); hit and stand are no-ops.
    Complete,
}
