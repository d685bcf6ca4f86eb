use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connectn::{Board, Cell};

/// Screen position of a cell given the position of column 1, level 1
///
/// `None` when the cell would land outside the terminal.
fn cell_position(origin: (u16, u16), column: usize, level: usize) -> Option<(u16, u16)> {
    let (origin_x, origin_y) = origin;
    let pos_x = u16::try_from(column - 1).ok()?;
    let pos_y = u16::try_from(level - 1).ok()?;
    Some((origin_x.checked_add(pos_x)?, origin_y.checked_sub(pos_y)?))
}

/// Draws the board in colour below the cursor, column numbers on top
///
/// Boards that don't fit in the terminal are printed as plain text instead.
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=board.columns()).map(|x| (x % 10).to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..board.levels() {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    // the cursor now sits on the row of the bottom level
    let origin = crossterm::cursor::position()?;
    // the top right cell is the furthest from the origin
    let end_x = match cell_position(origin, board.columns() + 1, board.levels()) {
        Some((end_x, _)) => end_x,
        None => {
            println!("{}", board);
            return Ok(());
        }
    };

    for level in 1..=board.levels() {
        for column in 1..=board.columns() {
            let (pos_x, pos_y) = match cell_position(origin, column, level) {
                Some(position) => position,
                None => continue,
            };

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match board.cell_at(column as i32, level as i32) {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(end_x, origin.1))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
