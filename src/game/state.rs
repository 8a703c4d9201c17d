//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to join.
    WaitingForPlayers,
    /// Dealing opening hands.
    Dealing,
    /// Hands dealt; the starter card has yet to be drawn.
    PickingStarter,
    /// Turns are being played.
    InProgress,
}
