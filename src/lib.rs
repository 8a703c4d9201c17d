//! A shedding card game engine for the terminal.
//!
//! The crate provides a [`Game`] type that manages the full flow of a
//! Crazy-Eights-style game: seating players, dealing from a 54-card pack,
//! drawing a starter, and judging placements against the stage as turns go
//! around the table.
//!
//! # Example
//!
//! ```
//! use eights::{Game, GameState};
//!
//! let mut game = Game::new(42);
//! game.join("Ada")?;
//! game.join("Grace")?;
//! game.deal()?;
//! let starter = game.pick_starter()?;
//!
//! assert_eq!(game.state, GameState::InProgress);
//! assert_eq!(game.stage.top_card()?, starter);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod card;
pub mod error;
pub mod game;
pub mod pack;
pub mod player;
pub mod result;
pub mod stage;

// Re-export main types
pub use card::{Card, JOKER_CODE, Rank, Suit};
pub use error::{ActionError, CardError, HandError, PackError, SetupError, StageError};
pub use game::{Game, GameState};
pub use pack::{JOKER_PACK, Pack, STANDARD_PACK};
pub use player::Player;
pub use result::{ActionOutcome, ActionReport};
pub use stage::{Placement, Stage};
