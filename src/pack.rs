//! The pack of cards a game draws from.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};
use crate::error::PackError;

/// Number of cards in a pack without jokers.
pub const STANDARD_PACK: usize = 52;

/// Number of cards in a pack with both jokers.
pub const JOKER_PACK: usize = 54;

/// An ordered pile of cards, drawn down over the course of a game.
///
/// A freshly built pack is in construction order; call [`Pack::shuffle`]
/// before dealing from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    cards: Vec<Card>,
    size: usize,
}

impl Pack {
    /// Builds an unshuffled pack of the given size.
    ///
    /// The only supported sizes are [`STANDARD_PACK`] and [`JOKER_PACK`];
    /// the latter appends the two jokers after the fifty-two standard cards.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidSize`] for any other size.
    pub fn build(size: usize) -> Result<Self, PackError> {
        if size != STANDARD_PACK && size != JOKER_PACK {
            return Err(PackError::InvalidSize);
        }
        let mut cards = Vec::with_capacity(size);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        if size == JOKER_PACK {
            cards.push(Card::Joker);
            cards.push(Card::Joker);
        }
        Ok(Self { cards, size })
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Empty`] if no cards are left.
    pub fn draw_top(&mut self) -> Result<Card, PackError> {
        self.cards.pop().ok_or(PackError::Empty)
    }

    /// Draws a card from a uniformly random position.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Empty`] if no cards are left.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, PackError> {
        if self.cards.is_empty() {
            return Err(PackError::Empty);
        }
        let index = rng.random_range(0..self.cards.len());
        Ok(self.cards.remove(index))
    }

    /// Removes the first card equal to `card`, preserving the order of the
    /// rest.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::NotFound`] if no such card remains.
    pub fn remove(&mut self, card: Card) -> Result<Card, PackError> {
        let index = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(PackError::NotFound)?;
        Ok(self.cards.remove(index))
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pack has been drawn down to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the size the pack was built with, regardless of how many
    /// cards have since been drawn.
    #[must_use]
    pub const fn declared_size(&self) -> usize {
        self.size
    }

    /// Returns the remaining cards, top of the pack last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
