//! Win detection for Three Men's Morris.

use crate::position::Position;
use crate::rules::adjacency;
use crate::types::{Board, Player, Square};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// True iff `player` owns all three cells of some line.
///
/// O(8) per call; cheap enough for every half-move and every speculative
/// evaluation.
pub fn is_winning_for(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == Square::Occupied(player)))
}

/// Returns the winner, if either side has completed a line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::One, Player::Two]
        .into_iter()
        .find(|&player| is_winning_for(board, player))
}

/// Completion cells for `player`: the empty third cell of every line where
/// the player already holds the other two.
pub fn winning_vacancies(board: &Board, player: Player) -> Vec<Position> {
    let mut vacancies = Vec::new();
    for line in LINES {
        let own = line
            .iter()
            .filter(|&&pos| board.get(pos) == Square::Occupied(player))
            .count();
        if own != 2 {
            continue;
        }
        if let Some(&vacant) = line.iter().find(|&&pos| board.is_empty(pos))
            && !vacancies.contains(&vacant)
        {
            vacancies.push(vacant);
        }
    }
    vacancies
}

/// Placing-phase helper: a completion cell for `player`, uniform among ties.
#[instrument(skip(board, rng))]
pub fn find_winning_index<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Option<Position> {
    winning_vacancies(board, player).choose(rng).copied()
}

/// Moving-phase helper: every (source, destination) that completes a line
/// for `player`.
///
/// A piece already on the threatened line can never complete it, so sources
/// are restricted to pieces outside the line that sit adjacent to the vacant
/// cell. A completion cell no piece can reach is not a winning move.
pub fn winning_moves(board: &Board, player: Player) -> Vec<(Position, Position)> {
    let mut moves = Vec::new();
    for line in LINES {
        let own = line
            .iter()
            .filter(|&&pos| board.get(pos) == Square::Occupied(player))
            .count();
        if own != 2 {
            continue;
        }
        let Some(&vacant) = line.iter().find(|&&pos| board.is_empty(pos)) else {
            continue;
        };
        for from in board.positions_of(player) {
            if line.contains(&from) {
                continue;
            }
            if adjacency::is_valid_move(from, vacant) && !moves.contains(&(from, vacant)) {
                moves.push((from, vacant));
            }
        }
    }
    moves
}

/// Moving-phase helper: a winning move for `player`, uniform among ties.
#[instrument(skip(board, rng))]
pub fn find_winning_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Option<(Position, Position)> {
    winning_moves(board, player).choose(rng).copied()
}
