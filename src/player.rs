//! The different kinds of players that can take part in a game

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::time::Duration;

use crate::board::{Board, Player};
use crate::search::Searcher;

/// Anything that can pick a column to play
pub trait Agent {
    /// Picks a 1-based column for `player` to drop a checker into
    ///
    /// Returns `None` only when the agent has no move to offer, such as on a
    /// full board.
    fn choose_move(&mut self, board: &Board, n: usize, player: Player) -> Option<usize>;

    /// Whether moves come from a person rather than from the program
    fn is_interactive(&self) -> bool;

    fn name(&self) -> &str;
}

/// Always plays the lowest column with room left
pub struct WeakPlayer {
    name: String,
}

impl WeakPlayer {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

impl Agent for WeakPlayer {
    fn choose_move(&mut self, board: &Board, _n: usize, _player: Player) -> Option<usize> {
        (1..=board.columns()).find(|&column| board.playable(column))
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Picks moves with a time-bounded [`Searcher`]
pub struct StrongPlayer {
    name: String,
    searcher: Searcher,
}

impl StrongPlayer {
    pub fn new<S: Into<String>>(name: S, think_time: Duration) -> Self {
        Self {
            name: name.into(),
            searcher: Searcher::new(think_time),
        }
    }

    pub fn with_searcher<S: Into<String>>(name: S, searcher: Searcher) -> Self {
        Self {
            name: name.into(),
            searcher,
        }
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

impl Agent for StrongPlayer {
    fn choose_move(&mut self, board: &Board, n: usize, player: Player) -> Option<usize> {
        self.searcher.choose_move(board, n, player)
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Reads column choices from a person
///
/// Input that is not a number, is out of range or names a full column is
/// rejected and the prompt repeated. Two people at one terminal must share a
/// single reader (see [`HumanPlayer::with_shared_input`]), otherwise the first
/// reader's buffer swallows lines meant for the second.
pub struct HumanPlayer<R, W> {
    name: String,
    input: Rc<RefCell<R>>,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new<S: Into<String>>(name: S, input: R, output: W) -> Self {
        Self::with_shared_input(name, Rc::new(RefCell::new(input)), output)
    }

    /// Creates a player reading from an input other players may also read from
    pub fn with_shared_input<S: Into<String>>(name: S, input: Rc<RefCell<R>>, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Agent for HumanPlayer<R, W> {
    fn choose_move(&mut self, board: &Board, _n: usize, _player: Player) -> Option<usize> {
        if board.is_full() {
            return None;
        }
        loop {
            write!(
                self.output,
                "[{}] Select column (1-{}): ",
                self.name,
                board.columns()
            )
            .ok()?;
            self.output.flush().ok()?;

            let mut buffer = String::new();
            // treat closed input as giving up the move
            if self.input.borrow_mut().read_line(&mut buffer).ok()? == 0 {
                return None;
            }

            match buffer.trim().parse::<usize>() {
                Ok(column) if board.playable(column) => return Some(column),
                _ => writeln!(self.output, "Invalid. Try again.").ok()?,
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}
