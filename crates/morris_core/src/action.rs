//! First-class action types.
//!
//! Half-moves are domain events, not side effects: they can be validated
//! before application, serialized for game records, and replayed.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A half-move: placing a new piece or shifting a placed one along an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place a new piece on an empty cell (placing phase).
    Place {
        /// Destination cell.
        at: Position,
    },
    /// Shift an already placed piece along a board edge (moving phase).
    Shift {
        /// Cell currently holding the piece.
        from: Position,
        /// Destination cell.
        to: Position,
    },
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place { at } => write!(f, "{}", at.coord()),
            Action::Shift { from, to } => write!(f, "{}->{}", from.coord(), to.coord()),
        }
    }
}

/// Error raised when validating or applying an action.
///
/// These are routine rejections communicated back to the caller, who is
/// expected to re-prompt; none of them aborts the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game is already over.
    #[display("game is already over")]
    GameOver,
    /// The destination cell is occupied.
    #[display("{_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),
    /// The source cell does not hold the acting player's piece.
    #[display("{at} does not hold a piece of player {player}")]
    NotYourPiece {
        /// The acting player.
        player: Player,
        /// The offending source cell.
        at: Position,
    },
    /// The two cells are not connected by a board line.
    #[display("{from} and {to} are not connected")]
    NotAdjacent {
        /// Source cell.
        from: Position,
        /// Destination cell.
        to: Position,
    },
    /// The player has already placed all three pieces.
    #[display("player {_0} has already placed all pieces")]
    PlacementExhausted(#[error(not(source))] Player),
    /// The player must place remaining pieces before moving any.
    #[display("player {_0} must place remaining pieces before moving")]
    MustPlaceRemaining(#[error(not(source))] Player),
}
