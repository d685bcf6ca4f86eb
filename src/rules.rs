//! Terminal state detection for connect-N

use crate::board::{Board, GameState};

/// Line orientations as (column step, level step): horizontal, vertical,
/// diagonal up and diagonal down
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Classifies a board as still playing, won by one side or drawn
///
/// Every occupied cell is treated as the start of a run in each of the four
/// directions. The first run of at least `n` checkers found decides the game,
/// so a board where both sides have a line reports whichever is found first.
pub fn classify(board: &Board, n: usize) -> GameState {
    let columns = board.columns() as i32;
    let levels = board.levels() as i32;

    for column in 1..=columns {
        for level in 1..=levels {
            let cell = board.cell_at(column, level);
            let player = match cell.player() {
                Some(player) => player,
                None => continue,
            };
            for &(dc, dl) in DIRECTIONS.iter() {
                let mut run = 1;
                let (mut c, mut l) = (column + dc, level + dl);
                // cell_at is Empty off the board, which ends the run
                while run < n && board.cell_at(c, l) == cell {
                    run += 1;
                    c += dc;
                    l += dl;
                }
                if run >= n {
                    return GameState::Win(player);
                }
            }
        }
    }

    if board.empty_count() == 0 {
        GameState::Draw
    } else {
        GameState::Playing
    }
}
