//! Game engine: turn state, piece counters, and outcome tracking.
//!
//! The engine owns the board and the per-side remaining-piece counters and
//! orchestrates calls into [`crate::rules`]; the rules themselves stay pure.

use crate::action::{Action, MoveError};
use crate::rules;
use crate::types::{Board, Phase, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended: a side completed a line, or its opponent had no legal
    /// move left.
    Won(Player),
}

/// Three Men's Morris game engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Player,
    remaining: [u8; 2],
    status: GameStatus,
    history: Vec<Action>,
}

impl Game {
    /// Pieces each side gets to place.
    pub const PIECES_PER_SIDE: u8 = 3;

    /// Creates a new game with an empty board; player one moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::One,
            remaining: [Self::PIECES_PER_SIDE; 2],
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns every half-move applied so far, in order.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Unplaced pieces left for `player`.
    pub fn remaining(&self, player: Player) -> u8 {
        self.remaining[Self::side_index(player)]
    }

    /// Phase `player` is in, derived from its remaining-piece counter.
    pub fn phase(&self, player: Player) -> Phase {
        Phase::of(self.remaining(player))
    }

    /// Validates and applies a half-move for the current player.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        let player = self.current_player;
        match action {
            Action::Place { at } => {
                if self.remaining(player) == 0 {
                    return Err(MoveError::PlacementExhausted(player));
                }
                if !self.board.is_empty(at) {
                    return Err(MoveError::SquareOccupied(at));
                }
                self.board.set(at, Square::Occupied(player));
                self.remaining[Self::side_index(player)] -= 1;
            }
            Action::Shift { from, to } => {
                if self.remaining(player) > 0 {
                    return Err(MoveError::MustPlaceRemaining(player));
                }
                if self.board.get(from) != Square::Occupied(player) {
                    return Err(MoveError::NotYourPiece { player, at: from });
                }
                if !self.board.is_empty(to) {
                    return Err(MoveError::SquareOccupied(to));
                }
                if !rules::is_valid_move(from, to) {
                    return Err(MoveError::NotAdjacent { from, to });
                }
                self.board.set(from, Square::Empty);
                self.board.set(to, Square::Occupied(player));
            }
        }
        self.history.push(action);
        self.update_status();
        if self.status == GameStatus::InProgress {
            self.current_player = player.opponent();
        }
        Ok(())
    }

    /// Re-evaluates the status after a half-move by the current player.
    ///
    /// Only the mover can have completed a line; a mover whose opponent is
    /// left in the moving phase with no legal relocation also wins.
    fn update_status(&mut self) {
        let mover = self.current_player;
        if rules::is_winning_for(&self.board, mover) {
            self.status = GameStatus::Won(mover);
            return;
        }
        let next = mover.opponent();
        if Phase::of(self.remaining(next)) == Phase::Moving
            && rules::legal_moves(&self.board, next).is_empty()
        {
            self.status = GameStatus::Won(mover);
        }
    }

    fn side_index(player: Player) -> usize {
        match player {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn place(game: &mut Game, at: Position) {
        game.apply(Action::Place { at }).unwrap();
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.remaining(Player::One), 3);
        assert_eq!(game.phase(Player::One), Phase::Placing);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_placement_alternates_turns() {
        let mut game = Game::new();
        place(&mut game, Position::Center);
        assert_eq!(game.current_player(), Player::Two);
        assert_eq!(game.remaining(Player::One), 2);
        place(&mut game, Position::TopLeft);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.remaining(Player::Two), 2);
    }

    #[test]
    fn test_place_on_occupied_cell_rejected() {
        let mut game = Game::new();
        place(&mut game, Position::Center);
        assert_eq!(
            game.apply(Action::Place {
                at: Position::Center
            }),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        // The rejection consumed neither the turn nor a piece.
        assert_eq!(game.current_player(), Player::Two);
        assert_eq!(game.remaining(Player::Two), 3);
    }

    #[test]
    fn test_shift_before_placing_done_rejected() {
        let mut game = Game::new();
        place(&mut game, Position::Center);
        place(&mut game, Position::TopLeft);
        assert_eq!(
            game.apply(Action::Shift {
                from: Position::Center,
                to: Position::MiddleRight
            }),
            Err(MoveError::MustPlaceRemaining(Player::One))
        );
    }

    #[test]
    fn test_win_by_placement_ends_game() {
        let mut game = Game::new();
        place(&mut game, Position::TopLeft); // X
        place(&mut game, Position::BottomLeft); // O
        place(&mut game, Position::TopCenter); // X
        place(&mut game, Position::BottomCenter); // O
        place(&mut game, Position::TopRight); // X completes the top row
        assert_eq!(game.status(), GameStatus::Won(Player::One));
        assert_eq!(
            game.apply(Action::Place {
                at: Position::Center
            }),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_moving_phase_validation() {
        let mut game = Game::new();
        // X: a1 b1 c3 / O: b2 a3 c2 -- no line, both sides placed out.
        place(&mut game, Position::TopLeft);
        place(&mut game, Position::Center);
        place(&mut game, Position::TopCenter);
        place(&mut game, Position::BottomLeft);
        place(&mut game, Position::BottomRight);
        place(&mut game, Position::MiddleRight);
        assert_eq!(game.phase(Player::One), Phase::Moving);
        assert_eq!(game.phase(Player::Two), Phase::Moving);

        assert_eq!(
            game.apply(Action::Place {
                at: Position::MiddleLeft
            }),
            Err(MoveError::PlacementExhausted(Player::One))
        );
        assert_eq!(
            game.apply(Action::Shift {
                from: Position::Center,
                to: Position::MiddleLeft
            }),
            Err(MoveError::NotYourPiece {
                player: Player::One,
                at: Position::Center
            })
        );
        assert_eq!(
            game.apply(Action::Shift {
                from: Position::TopLeft,
                to: Position::TopRight
            }),
            Err(MoveError::NotAdjacent {
                from: Position::TopLeft,
                to: Position::TopRight
            })
        );
        assert_eq!(
            game.apply(Action::Shift {
                from: Position::TopLeft,
                to: Position::Center
            }),
            Err(MoveError::SquareOccupied(Position::Center))
        );

        // A legal shift goes through and hands the turn over.
        game.apply(Action::Shift {
            from: Position::TopLeft,
            to: Position::MiddleLeft,
        })
        .unwrap();
        assert_eq!(game.current_player(), Player::Two);
    }

    #[test]
    fn test_stalled_opponent_loses() {
        // O's last piece shifts to the center, leaving X's lone piece in the
        // top-left corner with every neighbour occupied.
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::One));
        board.set(Position::TopCenter, Square::Occupied(Player::Two));
        board.set(Position::MiddleLeft, Square::Occupied(Player::Two));
        board.set(Position::MiddleRight, Square::Occupied(Player::Two));
        let mut game = Game {
            board,
            current_player: Player::Two,
            remaining: [0, 0],
            status: GameStatus::InProgress,
            history: Vec::new(),
        };
        game.apply(Action::Shift {
            from: Position::MiddleRight,
            to: Position::Center,
        })
        .unwrap();
        assert_eq!(game.status(), GameStatus::Won(Player::Two));
    }
}
