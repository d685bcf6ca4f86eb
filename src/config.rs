use anyhow::{anyhow, Result};
use log::warn;

use std::time::Duration;

use crate::search::{Searcher, DEFAULT_THINK_TIME};
use crate::{DEFAULT_COLUMNS, DEFAULT_CONNECT, DEFAULT_LEVELS};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PlayerKind {
    Human,
    Weak,
    Strong,
}

/// Settings for a single game
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub columns: usize,
    pub levels: usize,
    /// Number of checkers in a row needed to win
    pub connect: usize,
    /// Time a strong player may spend on each move
    pub think_time: Duration,
    /// Optional cap on the search horizon of strong players
    pub max_depth: Option<usize>,
    /// Player one moves first
    pub players: [PlayerKind; 2],
}

impl GameConfig {
    /// Checks the settings describe a playable game
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.levels == 0 {
            return Err(anyhow!(
                "Invalid board size {}x{}, both dimensions must be positive",
                self.columns,
                self.levels
            ));
        }
        if self.connect == 0 {
            return Err(anyhow!("Invalid line length 0, must be at least 1"));
        }
        if self.think_time == Duration::from_secs(0) {
            return Err(anyhow!("Invalid think time, must be positive"));
        }
        if self.max_depth == Some(0) {
            return Err(anyhow!("Invalid search depth 0, must be at least 1"));
        }
        if self.connect > self.columns.max(self.levels) {
            warn!(
                "a line of {} cannot fit on a {}x{} board, the game can only be drawn",
                self.connect, self.columns, self.levels
            );
        }
        Ok(())
    }

    /// A searcher configured for this game's strong players
    pub fn searcher(&self) -> Searcher {
        let searcher = Searcher::new(self.think_time);
        match self.max_depth {
            Some(depth) => searcher.with_max_depth(depth),
            None => searcher,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            levels: DEFAULT_LEVELS,
            connect: DEFAULT_CONNECT,
            think_time: DEFAULT_THINK_TIME,
            max_depth: None,
            players: [PlayerKind::Human, PlayerKind::Strong],
        }
    }
}
