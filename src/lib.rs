//! An engine for playing the board game 'Connect N', a generalised 'Connect 4'
//!
//! Boards of any size can be played with any winning line length. Computer
//! players range from a deliberately weak one to a time-bounded game tree
//! search.
//!
//! # Basic Usage
//!
//! ```
//! use connectn::{board::Board, search::Searcher};
//! use std::time::Duration;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // red has three in a row along the bottom, yellow must block column 4
//! let board = Board::from_moves(7, 6, "17273")?;
//! let mut searcher = Searcher::new(Duration::from_millis(500));
//! let best_move = searcher.choose_move(&board, 4, connectn::board::Player::Two);
//!
//! assert_eq!(best_move, Some(4));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod rules;

pub mod heuristic;

pub mod search;

pub mod player;

pub mod config;

pub mod game;


pub use board::{Board, Cell, GameState, Player};

/// The default width of the game board in columns
pub const DEFAULT_COLUMNS: usize = 7;

/// The default height of the game board in levels
pub const DEFAULT_LEVELS: usize = 6;

/// The default number of checkers in a row needed to win
pub const DEFAULT_CONNECT: usize = 4;

// ensure the default game can actually be won
const_assert!(DEFAULT_CONNECT <= DEFAULT_COLUMNS && DEFAULT_CONNECT <= DEFAULT_LEVELS);
