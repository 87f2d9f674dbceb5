//! A computer opponent for the board game 'Connect 4'
//!
//! The bot picks its move with a depth-limited minimax search using
//! alpha-beta pruning, scoring cutoff positions with a window-counting
//! heuristic. Immediate wins and same-column blocks are played without
//! searching.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::{Board, Player}, solver::find_best_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::from_moves("4455")?;
//! let before = board;
//! let best_move = find_best_move(&mut board, Player::One);
//!
//! assert_eq!(best_move, Some(2));
//! assert_eq!(board, before);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod evaluation;

pub mod solver;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of pieces in a row needed to win
pub const CONNECT: usize = 4;

/// The middle column, favoured by the evaluation and played on an empty board
pub const CENTER_COLUMN: usize = WIDTH / 2;

/// The number of plies searched below each candidate move
pub const MAX_DEPTH: usize = 6;

/// The score of a win found at ply 0, reduced by one for every ply deeper
pub const WIN_SCORE: i32 = 100;

/// The bonus for every bot piece in the center column
pub const CENTER_BONUS: i32 = 3;

/// Bias added to each candidate column's search score, favouring the center
pub const COLUMN_BIAS: [i32; WIDTH] = [3, 4, 5, 7, 5, 4, 3];

// ensure every direction has room for at least one window
const_assert!(WIDTH >= CONNECT && HEIGHT >= CONNECT);
// a depth-adjusted win must never reach zero
const_assert!(MAX_DEPTH < WIN_SCORE as usize);
