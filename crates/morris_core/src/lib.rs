//! Three Men's Morris game logic.
//!
//! Each side places three pieces on a 3x3 board, then relocates them along
//! the drawn board lines; three own pieces in a row, column, or diagonal
//! win. The crate provides the pure rules (adjacency and win detection), a
//! heuristic opponent, and a small game engine that ties them together. It
//! has no UI, storage, or networking; callers own all of that.
//!
//! # Example
//!
//! ```
//! use morris_core::{Action, Bot, Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! let mut bot = Bot::seeded(Player::Two, 7);
//!
//! // Human opens in the center, bot answers.
//! game.apply(Action::Place { at: Position::Center })?;
//! let reply = bot.choose_placement(game.board(), game.remaining(Player::One))?;
//! game.apply(Action::Place { at: reply })?;
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod bot;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Action, MoveError};
pub use bot::{Bot, BotError};
pub use game::{Game, GameStatus};
pub use position::Position;
pub use types::{Board, Phase, Player, Square};
