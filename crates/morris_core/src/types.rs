//! Core domain types for Three Men's Morris.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (moves first by default).
    One,
    /// Second player.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Board mark used when rendering this player's pieces.
    pub fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// A cell on the morris board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's piece.
    Occupied(Player),
}

/// Per-side game phase, derived from the remaining-piece counter.
///
/// Phase is never stored; a side is placing exactly while it still has
/// unplaced pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The side still has pieces to place.
    Placing,
    /// All pieces are placed; the side relocates them along board edges.
    Moving,
}

impl Phase {
    /// Phase implied by how many unplaced pieces a side has left.
    pub fn of(remaining: u8) -> Self {
        if remaining > 0 {
            Phase::Placing
        } else {
            Phase::Moving
        }
    }
}

/// The 3x3 morris board, cells in row-major order.
///
/// Cloning copies 9 cells; speculative evaluations run on a cloned board,
/// never on the caller's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks whether a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Positions currently holding `player`'s pieces.
    pub fn positions_of(&self, player: Player) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos) == Square::Occupied(player))
            .collect()
    }

    /// Currently empty positions.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Formats the board as a human-readable grid with coordinate axes.
    pub fn display(&self) -> String {
        let mut result = String::from("  a b c");
        for row in 0..3 {
            result.push('\n');
            result.push_str(&(row + 1).to_string());
            for col in 0..3 {
                result.push(' ');
                let mark = match self.get(Position::ALL[row * 3 + col]) {
                    Square::Empty => '.',
                    Square::Occupied(player) => player.mark(),
                };
                result.push(mark);
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn test_phase_of_remaining() {
        assert_eq!(Phase::of(3), Phase::Placing);
        assert_eq!(Phase::of(1), Phase::Placing);
        assert_eq!(Phase::of(0), Phase::Moving);
    }

    #[test]
    fn test_board_set_get() {
        let mut board = Board::new();
        assert!(board.is_empty(Position::Center));
        board.set(Position::Center, Square::Occupied(Player::One));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::One));
        assert!(!board.is_empty(Position::Center));
    }

    #[test]
    fn test_positions_of() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::One));
        board.set(Position::Center, Square::Occupied(Player::Two));
        board.set(Position::BottomRight, Square::Occupied(Player::One));
        assert_eq!(
            board.positions_of(Player::One),
            vec![Position::TopLeft, Position::BottomRight]
        );
        assert_eq!(board.positions_of(Player::Two), vec![Position::Center]);
        assert_eq!(board.empty_positions().len(), 6);
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::One));
        board.set(Position::Center, Square::Occupied(Player::Two));
        assert_eq!(board.display(), "  a b c\n1 X . .\n2 . O .\n3 . . .");
    }
}
