//! A time-bounded game tree search for connect-N

use log::{debug, warn};

use std::time::{Duration, Instant};

use crate::board::{Board, GameState, Player};
use crate::{heuristic, rules};

/// Score of a won position, reduced by the number of plies needed to reach it
pub const WIN_SCORE: i32 = 100_000;

const INFINITY: i32 = i32::MAX / 2;

/// Default time allowed for one move, leaving headroom under a ten second limit
pub const DEFAULT_THINK_TIME: Duration = Duration::from_millis(8750);

/// A fixed point in time after which the search stops expanding positions
#[derive(Copy, Clone, Debug)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
        }
    }

    pub fn passed(&self) -> bool {
        Instant::now() > self.at
    }
}

/// The outcome of a call to [`Searcher::search`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen column, `None` only when no column is playable
    pub column: Option<usize>,
    /// Score of the chosen column from the searching player's view
    pub score: i32,
    /// Ply horizon of the last fully completed pass, 0 if none completed
    pub depth: usize,
}

/// State shared by every node of a single search pass
struct SearchContext<'a> {
    board: &'a mut Board,
    n: usize,
    deadline: Deadline,
    horizon: usize,
    nodes: usize,
    timed_out: bool,
}

impl<'a> SearchContext<'a> {
    /// Negamax with alpha-beta pruning
    ///
    /// Returns the score of the position for `to_move`. A passed deadline
    /// scores 0 for every unexpanded position, so a pass that ran out of time
    /// can misjudge a forced result and must not be trusted.
    fn negamax(&mut self, to_move: Player, depth: usize, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if self.deadline.passed() {
            self.timed_out = true;
            return 0;
        }

        match rules::classify(self.board, self.n) {
            GameState::Win(winner) if winner == to_move => return WIN_SCORE - depth as i32,
            GameState::Win(_) => return -WIN_SCORE + depth as i32,
            GameState::Draw => return 0,
            GameState::Playing => {}
        }

        if depth >= self.horizon {
            return heuristic::score(self.board, self.n, to_move);
        }

        let mut best = -INFINITY;
        for column in 1..=self.board.columns() {
            if !self.board.make_move(column, to_move) {
                continue;
            }
            // the search window is flipped for the other player
            let score = -self.negamax(to_move.opponent(), depth + 1, -beta, -alpha);
            self.board.undo_move();

            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta || self.timed_out {
                break;
            }
        }

        if best == -INFINITY {
            0
        } else {
            best
        }
    }

    /// Scores every playable column for `player` and returns the lowest column
    /// among the best scoring ones, its score and whether the pass completed
    fn root(&mut self, player: Player) -> (Option<usize>, i32, bool) {
        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best_score = -INFINITY;
        let mut best_columns: Vec<usize> = Vec::new();

        for column in 1..=self.board.columns() {
            if self.deadline.passed() {
                return (best_columns.first().copied(), best_score, false);
            }
            if !self.board.make_move(column, player) {
                continue;
            }
            let score = -self.negamax(player.opponent(), 1, -beta, -alpha);
            // the board must be restored even if the deadline fired below
            self.board.undo_move();

            if self.timed_out {
                return (best_columns.first().copied(), best_score, false);
            }

            if score > best_score {
                best_score = score;
                best_columns.clear();
                best_columns.push(column);
            } else if score == best_score {
                best_columns.push(column);
            }
            alpha = alpha.max(best_score);
        }

        (best_columns.first().copied(), best_score, true)
    }
}

/// A move picker using iterative deepening negamax under a wall-clock budget
///
/// # Notes
/// Each pass searches every line to a fixed ply horizon, checking for a
/// finished game at every node and falling back to the static evaluation in
/// [`heuristic::score`] at the horizon. Passes deepen by one ply until the
/// think time runs out, the remaining game tree is covered, a forced result is
/// found or the optional depth cap is reached. The last completed pass decides
/// the move.
///
/// The search works on a single private copy of the caller's board, making and
/// undoing moves in place; the caller's board is never touched.
#[derive(Clone, Debug)]
pub struct Searcher {
    think_time: Duration,
    max_depth: Option<usize>,

    /// The number of nodes visited by the last search (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    pub fn new(think_time: Duration) -> Self {
        Self {
            think_time,
            max_depth: None,
            node_count: 0,
        }
    }

    /// Caps the ply horizon of the deepest pass
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth.max(1));
        self
    }

    pub fn think_time(&self) -> Duration {
        self.think_time
    }

    pub fn choose_move(&mut self, board: &Board, n: usize, player: Player) -> Option<usize> {
        self.search(board, n, player).column
    }

    /// Searches the position for `player`, returning the chosen move and score
    pub fn search(&mut self, board: &Board, n: usize, player: Player) -> SearchResult {
        let deadline = Deadline::after(self.think_time);
        self.node_count = 0;

        let first_playable = (1..=board.columns()).find(|&column| board.playable(column));
        if first_playable.is_none() {
            return SearchResult {
                column: None,
                score: 0,
                depth: 0,
            };
        }

        let mut scratch = board.clone();
        let full_depth = board.empty_count();
        let max_depth = self.max_depth.map_or(full_depth, |cap| cap.min(full_depth));

        let mut result = SearchResult {
            column: None,
            score: 0,
            depth: 0,
        };

        for horizon in 1..=max_depth {
            let mut context = SearchContext {
                board: &mut scratch,
                n,
                deadline,
                horizon,
                nodes: 0,
                timed_out: false,
            };
            let (column, score, complete) = context.root(player);
            self.node_count += context.nodes;

            if !complete {
                // a partial first pass is still better than nothing
                if result.column.is_none() && column.is_some() {
                    result.column = column;
                    result.score = score;
                }
                break;
            }

            result = SearchResult {
                column,
                score,
                depth: horizon,
            };
            debug!(
                "depth {}: best column {:?}, score {}, {} nodes",
                horizon, column, score, self.node_count
            );

            // no deeper pass can change a forced result
            if score.abs() >= WIN_SCORE - horizon as i32 {
                break;
            }
        }

        if result.column.is_none() {
            warn!(
                "no search pass completed within {:?}, playing the first open column",
                self.think_time
            );
            result.column = first_playable;
        }
        debug_assert_eq!(&scratch, board);
        result
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_THINK_TIME)
    }
}
