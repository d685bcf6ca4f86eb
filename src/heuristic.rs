use crate::board::{Board, Player};
use crate::rules::DIRECTIONS;
use crate::search::WIN_SCORE;

/// Bound on the magnitude of [`score`], keeping evaluations clear of win scores
pub const SCORE_LIMIT: i32 = WIN_SCORE / 2;

/// Scores a single window of `n` cells for `player`
///
/// Windows that leave the board, contain an opposing checker or contain a gap
/// more than one cell above its column's stack score nothing.
fn window_score(
    board: &Board,
    n: usize,
    column: i32,
    level: i32,
    step: (i32, i32),
    player: Player,
) -> i32 {
    let (dc, dl) = step;
    let (mut filled, mut open) = (0, 0);

    for i in 0..n as i32 {
        let (c, l) = (column + i * dc, level + i * dl);
        if c < 1 || c > board.columns() as i32 || l < 1 || l > board.levels() as i32 {
            return 0;
        }
        let cell = board.cell_at(c, l);
        if cell == player.cell() {
            filled += 1;
        } else if cell.is_empty() {
            if l > board.height(c as usize) as i32 + 1 {
                return 0;
            }
            open += 1;
        } else {
            return 0;
        }
    }

    if filled == 0 {
        0
    } else {
        filled * filled + open
    }
}

/// Static evaluation of a position from `player`'s point of view
///
/// Sums the potential of every window of `n` cells that `player` could still
/// complete and subtracts the same sum for the opponent, so
/// `score(b, n, p) == -score(b, n, p.opponent())`. The result is clamped to
/// `±SCORE_LIMIT` so that no evaluation on a large board passes for a win.
pub fn score(board: &Board, n: usize, player: Player) -> i32 {
    let opponent = player.opponent();
    let mut total = 0;

    for column in 1..=board.columns() as i32 {
        for level in 1..=board.levels() as i32 {
            for &step in DIRECTIONS.iter() {
                total += window_score(board, n, column, level, step, player);
                total -= window_score(board, n, column, level, step, opponent);
            }
        }
    }
    total.clamp(-SCORE_LIMIT, SCORE_LIMIT)
}
