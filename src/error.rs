//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when parsing a card code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The code's rank prefix is not a rank.
    #[error("unknown rank code")]
    UnknownRank,
    /// The code does not end in a suit letter.
    #[error("unknown suit letter")]
    UnknownSuit,
}

/// Errors that can occur when building or drawing from a pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackError {
    /// The requested pack size is not supported.
    #[error("unsupported pack size")]
    InvalidSize,
    /// The pack has no cards left.
    #[error("the pack is empty")]
    Empty,
    /// The card is not in the pack.
    #[error("card not found in the pack")]
    NotFound,
}

/// Errors that can occur when placing a card on the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StageError {
    /// The stage has no starter card yet.
    #[error("the stage is empty")]
    Empty,
    /// The card is not in the player's hand.
    #[error("card not in the player's hand")]
    NotInHand,
}

/// Errors that can occur when taking a card from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card is not in the hand.
    #[error("card not in hand")]
    NotInHand,
}

/// Errors that can occur while setting a game up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Invalid game state for this step.
    #[error("invalid game state for this step")]
    InvalidState,
    /// Every numbered seat is taken.
    #[error("no seats left at the table")]
    TableFull,
    /// No players have joined.
    #[error("no players have joined")]
    NoPlayers,
    /// Not enough cards in the pack to deal every player a full hand.
    #[error("not enough cards in the pack")]
    NotEnoughCards,
    /// No card left in the pack can start the discard pile.
    #[error("no starter candidate in the pack")]
    NoStarterCandidate,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// No part of the input was a recognizable command.
    #[error("input not recognized")]
    Unrecognized,
    /// The pack ran out of cards mid-draw.
    #[error("the pack ran out after {drawn} of {requested} cards")]
    PackExhausted {
        /// Cards actually drawn before the pack ran out.
        drawn: usize,
        /// Cards the player asked for.
        requested: usize,
    },
}
