//! Players and the hands they hold.

use crate::card::Card;
use crate::error::{HandError, PackError};
use crate::pack::Pack;

/// A seated player and the cards in their hand.
///
/// Hands are kept in arrival order, so two equal cards (the jokers) are told
/// apart by position alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: u8,
    name: String,
    cards: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(id: u8, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Adds a card to the back of the hand.
    pub fn receive(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the first card equal to `card`, keeping the rest
    /// in order.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::NotInHand`] if the player does not hold `card`.
    pub fn give(&mut self, card: Card) -> Result<Card, HandError> {
        let index = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(HandError::NotInHand)?;
        Ok(self.cards.remove(index))
    }

    /// Looks up a held card by its code, case-insensitively.
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<Card> {
        self.cards
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .copied()
    }

    /// Draws `count` cards off the top of `pack` into the hand.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Empty`] if the pack runs out mid-draw. Cards
    /// drawn before that point stay in the hand.
    pub fn draw_from(&mut self, pack: &mut Pack, count: usize) -> Result<(), PackError> {
        for _ in 0..count {
            let card = pack.draw_top()?;
            self.receive(card);
        }
        Ok(())
    }

    /// Returns the player's seat number.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hand, in the order the cards arrived.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
