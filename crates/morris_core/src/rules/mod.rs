//! Pure rules for Three Men's Morris: adjacency and win detection.
//!
//! Everything here is a pure function of the board passed in; callers own
//! all mutation.

pub mod adjacency;
pub mod win;

pub use adjacency::{EDGES, check_move_possible, is_valid_move, legal_moves, sources_into};
pub use win::{
    LINES, check_winner, find_winning_index, find_winning_move, is_winning_for, winning_moves,
    winning_vacancies,
};
