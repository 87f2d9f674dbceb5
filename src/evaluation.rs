//! Static evaluation of positions at search cutoffs

use crate::{board::*, CENTER_BONUS, CENTER_COLUMN, CONNECT, HEIGHT};

/// Score of a window holding four bot pieces
pub const FOUR_SCORE: i32 = 100;
/// Score of a window holding three bot pieces and an empty cell
pub const THREE_SCORE: i32 = 5;
/// Score of a window holding two bot pieces and two empty cells
pub const TWO_SCORE: i32 = 2;
/// Score of a window holding three opponent pieces and an empty cell
pub const OPPONENT_THREE_SCORE: i32 = -5;

/// Scores a single window of cells from the point of view of `bot`
///
/// Only the combinations listed by the score constants count, every other
/// window (mixed, empty, or two opponent pieces) scores 0.
pub fn score_window(window: &[Cell; CONNECT], bot: Player) -> i32 {
    let bot_cell = bot.cell();
    let (mut bot_count, mut opponent_count, mut empty_count) = (0, 0, 0);

    for &cell in window.iter() {
        if cell.is_empty() {
            empty_count += 1;
        } else if cell == bot_cell {
            bot_count += 1;
        } else {
            opponent_count += 1;
        }
    }

    match (bot_count, opponent_count, empty_count) {
        (4, _, _) => FOUR_SCORE,
        (3, _, 1) => THREE_SCORE,
        (2, _, 2) => TWO_SCORE,
        (_, 3, 1) => OPPONENT_THREE_SCORE,
        _ => 0,
    }
}

/// Heuristic value of `board` for `bot`: the sum over every window plus a
/// bonus for each bot piece in the center column
pub fn evaluate(board: &Board, bot: Player) -> i32 {
    let windows: i32 = board
        .windows()
        .map(|window| score_window(&window, bot))
        .sum();

    let center_pieces = (0..HEIGHT)
        .filter(|&row| board.get(row, CENTER_COLUMN) == bot.cell())
        .count() as i32;

    windows + center_pieces * CENTER_BONUS
}
