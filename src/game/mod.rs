//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Rank;
use crate::error::SetupError;
use crate::pack::{JOKER_PACK, Pack};
use crate::player::Player;
use crate::stage::Stage;

mod actions;
mod setup;
pub mod state;

pub use state::GameState;

/// A shedding game engine that manages the pack, the stage, and turn flow.
///
/// The engine owns all card state. Seating, dealing, and turns are driven
/// through its methods; the `pack`, `stage`, and `players` fields stay public
/// so callers can inspect the table directly.
pub struct Game {
    /// Cards left to draw from.
    pub pack: Pack,
    /// The shared discard pile.
    pub stage: Stage,
    /// Seated players, in join order.
    pub players: Vec<Player>,
    /// Current game state.
    pub state: GameState,
    /// Index into `players` of the seat whose turn it is.
    current: usize,
    /// Completed turns so far.
    round: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Ranks a starter card may have.
    pub const STARTER_RANKS: [Rank; 6] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Nine,
        Rank::Ten,
    ];

    /// Passes around the table when dealing opening hands.
    pub const DEAL_ROUNDS: usize = 4;

    /// Creates a new game with the given seed.
    ///
    /// The pack always includes both jokers and is shuffled up front, so a
    /// fixed seed replays the same game.
    ///
    /// # Example
    ///
    /// ```
    /// use eights::Game;
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.pack.count(), 54);
    /// ```
    #[expect(
        clippy::missing_panics_doc,
        reason = "the joker pack size is always supported"
    )]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut pack = Pack::build(JOKER_PACK).expect("JOKER_PACK is a supported size");
        pack.shuffle(&mut rng);

        Self {
            pack,
            stage: Stage::new(),
            players: Vec::new(),
            state: GameState::WaitingForPlayers,
            current: 0,
            round: 0,
            rng,
        }
    }

    /// Seats a player and returns their seat number. Seats are numbered
    /// from 1 in join order.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidState`] once dealing has begun, and
    /// [`SetupError::TableFull`] when all 255 seat numbers are taken.
    pub fn join(&mut self, name: impl Into<String>) -> Result<u8, SetupError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(SetupError::InvalidState);
        }
        if self.players.len() >= usize::from(u8::MAX) {
            return Err(SetupError::TableFull);
        }
        let id = self.players.len() as u8 + 1;
        self.players.push(Player::new(id, name));
        Ok(id)
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the player in the given seat.
    #[must_use]
    pub fn player(&self, id: u8) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` until the game is in progress.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.state == GameState::InProgress {
            self.players.get(self.current)
        } else {
            None
        }
    }

    /// Returns the number of completed turns.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }
}
