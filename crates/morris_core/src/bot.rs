//! Heuristic opponent.
//!
//! Fixed priority per call: win > block > build > random, evaluated
//! top-to-bottom with uniform random tie-breaking. The bot looks exactly
//! one ply ahead: it never detects multi-move forced losses, and a
//! constructed double threat will beat it.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Error raised by the bot's decision procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BotError {
    /// No empty cell left to place into; the caller violated the
    /// remaining-piece contract.
    #[display("no vacant cell to place into")]
    NoVacantCell,
    /// The bot has no legal relocation: it is stalled, which is a terminal
    /// outcome for its side rather than a recoverable error.
    #[display("no legal move available")]
    NoMoveAvailable,
}

/// Heuristic opponent for one side.
///
/// Holds only the piece it plays as (fixed at construction) and an injected
/// random source for tie-breaking. Every decision is recomputed from the
/// board snapshot passed in; speculative evaluations run on cloned boards.
#[derive(Debug, Clone)]
pub struct Bot<R = StdRng> {
    piece: Player,
    rng: R,
}

impl Bot<StdRng> {
    /// Creates a bot playing `piece` with an entropy-seeded random source.
    pub fn new(piece: Player) -> Self {
        Self::with_rng(piece, StdRng::from_os_rng())
    }

    /// Creates a bot with a fixed seed, for reproducible games.
    pub fn seeded(piece: Player, seed: u64) -> Self {
        Self::with_rng(piece, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Bot<R> {
    /// Creates a bot with a caller-supplied random source.
    pub fn with_rng(piece: Player, rng: R) -> Self {
        Self { piece, rng }
    }

    /// The piece this bot plays as.
    pub fn piece(&self) -> Player {
        self.piece
    }

    /// Picks a cell to place a new piece into.
    ///
    /// `opponent_remaining` is the opponent's unplaced-piece counter. While
    /// the opponent can still place, every completion threat must be
    /// blocked; once it cannot, a threat is only real if one of its pieces
    /// could execute the completion as a move.
    #[instrument(skip(self, board), fields(piece = ?self.piece))]
    pub fn choose_placement(
        &mut self,
        board: &Board,
        opponent_remaining: u8,
    ) -> Result<Position, BotError> {
        if let Some(at) = rules::find_winning_index(board, self.piece, &mut self.rng) {
            debug!(%at, "placing to win");
            return Ok(at);
        }

        let opponent = self.piece.opponent();
        let threats = rules::winning_vacancies(board, opponent);
        let blockable: Vec<Position> = if opponent_remaining > 0 {
            threats
        } else {
            let executable: Vec<Position> = rules::winning_moves(board, opponent)
                .into_iter()
                .map(|(_, to)| to)
                .collect();
            threats
                .into_iter()
                .filter(|at| executable.contains(at))
                .collect()
        };
        if let Some(&at) = blockable.choose(&mut self.rng) {
            debug!(%at, "blocking opponent threat");
            return Ok(at);
        }

        let builds = self.cohesive_placements(board);
        if let Some(&at) = builds.choose(&mut self.rng) {
            debug!(%at, "building two in a line");
            return Ok(at);
        }

        let empty = board.empty_positions();
        let at = empty.choose(&mut self.rng).copied();
        if let Some(at) = &at {
            debug!(%at, "placing at random");
        }
        at.ok_or(BotError::NoVacantCell)
    }

    /// Picks a relocation for the moving phase.
    #[instrument(skip(self, board), fields(piece = ?self.piece))]
    pub fn choose_shift(&mut self, board: &Board) -> Result<(Position, Position), BotError> {
        if let Some((from, to)) = rules::find_winning_move(board, self.piece, &mut self.rng) {
            debug!(%from, %to, "moving to win");
            return Ok((from, to));
        }

        // Block: move one of our own pieces into a cell the opponent could
        // complete a line through. If none of our pieces can reach any
        // threatened cell, fall through rather than fabricate a move.
        let opponent = self.piece.opponent();
        let mut blocks: Vec<(Position, Position)> = Vec::new();
        for (_, at) in rules::winning_moves(board, opponent) {
            for from in rules::sources_into(board, self.piece, at) {
                if !blocks.contains(&(from, at)) {
                    blocks.push((from, at));
                }
            }
        }
        if let Some(&(from, to)) = blocks.choose(&mut self.rng) {
            debug!(%from, %to, "blocking opponent completion");
            return Ok((from, to));
        }

        let moves = rules::legal_moves(board, self.piece);
        let chosen = moves.choose(&mut self.rng).copied();
        if let Some((from, to)) = &chosen {
            debug!(%from, %to, "moving at random");
        }
        chosen.ok_or(BotError::NoMoveAvailable)
    }

    /// Empty cells whose occupation would leave the bot one cell short of a
    /// line: the "cohesive" build tier.
    ///
    /// Evaluated on cloned boards; the caller's board is never touched.
    fn cohesive_placements(&self, board: &Board) -> Vec<Position> {
        board
            .empty_positions()
            .into_iter()
            .filter(|&at| {
                let mut speculative = board.clone();
                speculative.set(at, Square::Occupied(self.piece));
                !rules::winning_vacancies(&speculative, self.piece).is_empty()
            })
            .collect()
    }
}
