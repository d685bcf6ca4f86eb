use anyhow::{anyhow, Result};

use std::fmt;

/// One of the two sides in a game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The cell value this player's checkers occupy
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The owner of the checker in this cell, if any
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Win(Player),
    Draw,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// A vertical grid of `columns` x `levels` cells that checkers are dropped into
///
/// Columns and levels are 1-based: column 1 is the leftmost column and level 1
/// the bottom of each column. Every placed checker is recorded so moves can be
/// taken back in reverse order with [`Board::undo_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    levels: usize,
    cells: Vec<Cell>, // cells are stored left-to-right, bottom-to-top
    heights: Vec<usize>,
    moves: Vec<usize>,
}

impl Board {
    /// Creates an empty board, failing if either dimension is zero
    pub fn new(columns: usize, levels: usize) -> Result<Self> {
        if columns == 0 || levels == 0 {
            return Err(anyhow!(
                "Invalid board size {}x{}, both dimensions must be positive",
                columns,
                levels
            ));
        }
        Ok(Self {
            columns,
            levels,
            cells: vec![Cell::Empty; columns * levels],
            heights: vec![0; columns],
            moves: Vec::with_capacity(columns * levels),
        })
    }

    /// Replays a string of 1-based column digits, alternating players starting
    /// with player one
    pub fn from_moves<S: AsRef<str>>(columns: usize, levels: usize, moves: S) -> Result<Self> {
        let mut board = Self::new(columns, levels)?;
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    if !board.make_move(column as usize, player) {
                        return Err(anyhow!(
                            "Invalid move, column {} is full or out of range",
                            column
                        ));
                    }
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Same as [`Board::from_moves`] for boards wider than nine columns
    pub fn from_slice(columns: usize, levels: usize, moves: &[usize]) -> Result<Self> {
        let mut board = Self::new(columns, levels)?;
        let mut player = Player::One;
        for &column in moves {
            if !board.make_move(column, player) {
                return Err(anyhow!(
                    "Invalid move, column {} is full or out of range",
                    column
                ));
            }
            player = player.opponent();
        }
        Ok(board)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Number of checkers in `column`, 0 for columns outside the board
    pub fn height(&self, column: usize) -> usize {
        if column < 1 || column > self.columns {
            return 0;
        }
        self.heights[column - 1]
    }

    pub fn playable(&self, column: usize) -> bool {
        column >= 1 && column <= self.columns && self.heights[column - 1] < self.levels
    }

    /// Drops a checker for `player` into `column`
    ///
    /// Returns false and leaves the board untouched if the column is out of
    /// range or already full.
    pub fn make_move(&mut self, column: usize, player: Player) -> bool {
        if !self.playable(column) {
            return false;
        }
        let index = column - 1;
        self.cells[index + self.columns * self.heights[index]] = player.cell();
        self.heights[index] += 1;
        self.moves.push(column);
        true
    }

    /// Removes the most recently placed checker, returning its column
    pub fn undo_move(&mut self) -> Option<usize> {
        let column = self.moves.pop()?;
        let index = column - 1;
        self.heights[index] -= 1;
        self.cells[index + self.columns * self.heights[index]] = Cell::Empty;
        Some(column)
    }

    /// The contents of a cell, `Cell::Empty` for coordinates off the board
    pub fn cell_at(&self, column: i32, level: i32) -> Cell {
        if column < 1 || column > self.columns as i32 || level < 1 || level > self.levels as i32 {
            return Cell::Empty;
        }
        self.cells[(column - 1) as usize + self.columns * (level - 1) as usize]
    }

    pub fn empty_count(&self) -> usize {
        self.columns * self.levels - self.moves.len()
    }

    pub fn num_moves(&self) -> usize {
        self.moves.len()
    }

    /// Columns played so far, oldest first
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn is_full(&self) -> bool {
        self.moves.len() == self.columns * self.levels
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in (1..=self.levels as i32).rev() {
            for column in 1..=self.columns as i32 {
                let symbol = match self.cell_at(column, level) {
                    Cell::PlayerOne => 'R',
                    Cell::PlayerTwo => 'Y',
                    Cell::Empty => '.',
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        for column in 1..=self.columns {
            // only the last digit fits under each cell on wide boards
            write!(f, "{} ", column % 10)?;
        }
        writeln!(f)
    }
}
