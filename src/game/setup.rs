use log::debug;
use rand::Rng;

use crate::card::Card;
use crate::error::SetupError;

use super::{Game, GameState};

/// Random peeks at the pack before starter selection falls back to a scan.
const STARTER_SAMPLE_BUDGET: usize = 64;

impl Game {
    /// Deals opening hands: four passes around the table, one random card
    /// to each player per pass.
    ///
    /// # Errors
    ///
    /// Returns an error if dealing has already happened, nobody has joined,
    /// or the pack cannot cover a full hand for every seat.
    #[expect(
        clippy::missing_panics_doc,
        reason = "internal expects are guaranteed to succeed"
    )]
    pub fn deal(&mut self) -> Result<(), SetupError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(SetupError::InvalidState);
        }
        if self.players.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        if self.pack.count() < Self::DEAL_ROUNDS * self.players.len() {
            return Err(SetupError::NotEnoughCards);
        }

        self.state = GameState::Dealing;
        for _ in 0..Self::DEAL_ROUNDS {
            for player in &mut self.players {
                let card = self
                    .pack
                    .draw_random(&mut self.rng)
                    .expect("pack size was validated above");
                player.receive(card);
            }
        }
        self.state = GameState::PickingStarter;

        debug!(
            "dealt {} cards each to {} players, {} left in the pack",
            Self::DEAL_ROUNDS,
            self.players.len(),
            self.pack.count(),
        );
        Ok(())
    }

    /// Draws the starter card from the pack, places it on the stage, and
    /// opens play.
    ///
    /// The starter is sampled at random from the pack; cards outside
    /// [`Game::STARTER_RANKS`] are peeked and left in place, never drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if hands have not been dealt yet, or if no card of
    /// a starter rank remains in the pack.
    pub fn pick_starter(&mut self) -> Result<Card, SetupError> {
        if self.state != GameState::PickingStarter {
            return Err(SetupError::InvalidState);
        }

        let starter = self.take_starter()?;
        self.stage.seed_starter(starter);
        self.state = GameState::InProgress;

        debug!("starter {starter} opens play");
        Ok(starter)
    }

    /// Finds a starter-rank card in the pack and removes it. Sampling is
    /// bounded; if the budget runs out, the first candidate in pack order
    /// is taken instead.
    fn take_starter(&mut self) -> Result<Card, SetupError> {
        if self.pack.is_empty() {
            return Err(SetupError::NoStarterCandidate);
        }
        for _ in 0..STARTER_SAMPLE_BUDGET {
            let index = self.rng.random_range(0..self.pack.count());
            let card = self.pack.cards()[index];
            if Self::is_starter(card) {
                return Ok(self
                    .pack
                    .remove(card)
                    .expect("card was just peeked in the pack"));
            }
        }
        let fallback = self
            .pack
            .cards()
            .iter()
            .copied()
            .find(|&card| Self::is_starter(card))
            .ok_or(SetupError::NoStarterCandidate)?;
        Ok(self
            .pack
            .remove(fallback)
            .expect("card was just found in the pack"))
    }

    fn is_starter(card: Card) -> bool {
        card.rank()
            .is_some_and(|rank| Self::STARTER_RANKS.contains(&rank))
    }
}
