//! Result types reported back after a turn's input is processed.

use crate::stage::Placement;

/// What a single recognized command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The player drew this many cards from the pack.
    Picked(usize),
    /// The player attempted a placement and got this verdict.
    Placed(Placement),
}

impl ActionOutcome {
    /// Returns whether this outcome on its own uses up the turn.
    ///
    /// Drawing always does; a placement only when it was accepted.
    #[must_use]
    pub const fn consumes_turn(self) -> bool {
        matches!(self, Self::Picked(_) | Self::Placed(Placement::Accepted))
    }
}

/// Everything a single line of input did, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    /// Outcome of each recognized command, left to right.
    pub outcomes: Vec<ActionOutcome>,
    /// Whether the turn passed to the next player.
    pub consumed: bool,
}
