//! The face-up discard pile that placements are judged against.

use crate::card::{Card, Rank};
use crate::error::StageError;
use crate::player::Player;

/// Verdict of a placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// The card matched the top of the stage and now sits above it.
    Accepted,
    /// The card did not match; hand and stage are unchanged.
    Rejected,
}

/// The discard pile. Cards only ever arrive; nothing is removed until the
/// game is torn down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stage {
    cards: Vec<Card>,
}

impl Stage {
    /// Creates an empty stage.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Places the starter card. The engine calls this once, before any
    /// placement attempts.
    pub fn seed_starter(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the card placements are judged against.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::Empty`] before the starter has been placed.
    pub fn top_card(&self) -> Result<Card, StageError> {
        self.cards.last().copied().ok_or(StageError::Empty)
    }

    /// Attempts to move `card` from `player`'s hand onto the stage.
    ///
    /// A card is accepted when it is a joker, an ace, or shares suit or rank
    /// with the top card. On [`Placement::Rejected`] both the hand and the
    /// stage are left exactly as they were.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::Empty`] before the starter has been placed, and
    /// [`StageError::NotInHand`] when the player does not hold `card`.
    pub fn try_place(&mut self, card: Card, player: &mut Player) -> Result<Placement, StageError> {
        let top = self.top_card()?;
        if !player.cards().contains(&card) {
            return Err(StageError::NotInHand);
        }
        let matches = card.is_joker()
            || card.rank() == Some(Rank::Ace)
            || card.suit() == top.suit()
            || card.rank() == top.rank();
        if !matches {
            return Ok(Placement::Rejected);
        }
        let taken = player.give(card).map_err(|_| StageError::NotInHand)?;
        self.cards.push(taken);
        Ok(Placement::Accepted)
    }

    /// Returns the number of cards placed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the starter has yet to be placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns every placed card, starter first, top of the pile last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
