//! Adjacency rules: which cells are connected by a drawn board line.

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// The 16 unordered edges of the morris board.
///
/// Only orthogonal neighbours plus the two main diagonals are connected.
/// Corner-skip pairs such as top-center/middle-left share no drawn line and
/// are absent, so this table is authoritative; deriving adjacency from
/// row/col distance instead would wrongly connect cells across undrawn
/// corners.
pub const EDGES: [(Position, Position); 16] = [
    (Position::TopLeft, Position::TopCenter),
    (Position::TopLeft, Position::MiddleLeft),
    (Position::TopLeft, Position::Center),
    (Position::TopCenter, Position::TopRight),
    (Position::TopCenter, Position::Center),
    (Position::TopRight, Position::Center),
    (Position::TopRight, Position::MiddleRight),
    (Position::MiddleLeft, Position::Center),
    (Position::MiddleLeft, Position::BottomLeft),
    (Position::Center, Position::MiddleRight),
    (Position::Center, Position::BottomLeft),
    (Position::Center, Position::BottomCenter),
    (Position::Center, Position::BottomRight),
    (Position::MiddleRight, Position::BottomRight),
    (Position::BottomLeft, Position::BottomCenter),
    (Position::BottomCenter, Position::BottomRight),
];

/// Checks whether a piece may move between two cells.
///
/// Symmetric and pure: true iff the unordered pair is an edge of the board.
pub fn is_valid_move(from: Position, to: Position) -> bool {
    EDGES
        .iter()
        .any(|&(a, b)| (a == from && b == to) || (a == to && b == from))
}

/// Composite legality check for relocating one of `player`'s pieces.
///
/// The source must hold the player's piece, the target must be empty, and
/// the two cells must be adjacent. No side effects.
pub fn check_move_possible(board: &Board, player: Player, from: Position, to: Position) -> bool {
    board.get(from) == Square::Occupied(player) && board.is_empty(to) && is_valid_move(from, to)
}

/// All of `player`'s pieces that sit adjacent to `target`.
///
/// Used for blocking and reachability questions: which pieces could move
/// onto the target cell if it is (or becomes) empty.
pub fn sources_into(board: &Board, player: Player, target: Position) -> Vec<Position> {
    board
        .positions_of(player)
        .into_iter()
        .filter(|&from| is_valid_move(from, target))
        .collect()
}

/// Every legal (source, destination) relocation for `player`.
pub fn legal_moves(board: &Board, player: Player) -> Vec<(Position, Position)> {
    let mut moves = Vec::new();
    for from in board.positions_of(player) {
        for to in board.empty_positions() {
            if is_valid_move(from, to) {
                moves.push((from, to));
            }
        }
    }
    moves
}
