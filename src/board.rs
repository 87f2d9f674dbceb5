use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use crate::{CONNECT, HEIGHT, WIDTH};

const HORIZONTAL: (isize, isize) = (0, 1);
const VERTICAL: (isize, isize) = (1, 0);
const DOWN_RIGHT: (isize, isize) = (1, 1);
const UP_RIGHT: (isize, isize) = (-1, 1);

/// One of the two sides of a game, `One` always moves first
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
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

    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    pub fn symbol(self) -> char {
        self.cell().symbol()
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
            Cell::Empty => '.',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' => Some(Cell::PlayerOne),
            'O' | 'o' => Some(Cell::PlayerTwo),
            '.' | '_' | ' ' => Some(Cell::Empty),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Win(Player),
    Draw,
}

/// A Connect 4 board under gravity
///
/// Cells are stored row-major with row 0 at the top, so a piece dropped into
/// a column lands on the highest-indexed empty row.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Parses a board from its rows, top row first
    ///
    /// `X` and `O` are the pieces of `Player::One` and `Player::Two`, any of
    /// `.`, `_` or a space is an empty cell.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != HEIGHT {
            return Err(anyhow!("expected {} rows, found {}", HEIGHT, rows.len()));
        }
        let mut board = Self::new();

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != WIDTH {
                return Err(anyhow!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    WIDTH
                ));
            }
            for (column, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol)
                    .ok_or_else(|| anyhow!("could not parse '{}' as a cell", symbol))?;
                board.set(row, column, cell);
            }
        }

        // pieces must rest on the bottom or on another piece
        for column in 0..WIDTH {
            for row in 0..HEIGHT - 1 {
                if !board.get(row, column).is_empty() && board.get(row + 1, column).is_empty() {
                    return Err(anyhow!(
                        "Invalid position, floating piece in column {}",
                        column + 1
                    ));
                }
            }
        }
        Ok(board)
    }

    /// Replays a game given as 1-indexed column digits, starting with `Player::One`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is won at any point
                    if board.check_win(player.opponent()) {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    if board.place(column - 1, player).is_none() {
                        return Err(anyhow!("Invalid move, column {} full", column));
                    }
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row * WIDTH + column]
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, cell: Cell) {
        self.cells[row * WIDTH + column] = cell;
    }

    /// Whether `column` is on the board and its top cell is empty
    pub fn is_valid_move(&self, column: usize) -> bool {
        column < WIDTH && self.get(0, column).is_empty()
    }

    /// The row a piece dropped into `column` would land on, `None` if the column is full
    pub fn next_empty_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        (0..HEIGHT).rev().find(|&row| self.get(row, column).is_empty())
    }

    /// Drops a piece for `player` into `column`, returning the landing row
    pub fn place(&mut self, column: usize, player: Player) -> Option<usize> {
        let row = self.next_empty_row(column)?;
        self.set(row, column, player.cell());
        Some(row)
    }

    /// Takes back a piece put down by [`place`](Self::place)
    pub(crate) fn undo(&mut self, row: usize, column: usize) {
        self.set(row, column, Cell::Empty);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.get(0, column).is_empty())
    }

    /// Whether `player` has four in a row in any direction
    pub fn check_win(&self, player: Player) -> bool {
        let cell = player.cell();
        self.windows()
            .any(|window| window.iter().all(|&c| c == cell))
    }

    fn window(
        &self,
        row: usize,
        column: usize,
        (d_row, d_column): (isize, isize),
    ) -> [Cell; CONNECT] {
        let mut window = [Cell::Empty; CONNECT];
        for (i, cell) in window.iter_mut().enumerate() {
            let r = row as isize + d_row * i as isize;
            let c = column as isize + d_column * i as isize;
            *cell = self.get(r as usize, c as usize);
        }
        window
    }

    /// Every run of `CONNECT` cells on the board: horizontal, vertical,
    /// down-right diagonal, then up-right diagonal
    pub fn windows(&self) -> impl Iterator<Item = [Cell; CONNECT]> + '_ {
        let span = CONNECT - 1;

        let horizontal = (0..HEIGHT)
            .flat_map(move |row| (0..WIDTH - span).map(move |column| (row, column, HORIZONTAL)));
        let vertical = (0..HEIGHT - span)
            .flat_map(move |row| (0..WIDTH).map(move |column| (row, column, VERTICAL)));
        let down_right = (0..HEIGHT - span)
            .flat_map(move |row| (0..WIDTH - span).map(move |column| (row, column, DOWN_RIGHT)));
        let up_right = (span..HEIGHT)
            .flat_map(move |row| (0..WIDTH - span).map(move |column| (row, column, UP_RIGHT)));

        horizontal
            .chain(vertical)
            .chain(down_right)
            .chain(up_right)
            .map(move |(row, column, direction)| self.window(row, column, direction))
    }

    pub fn play_checked(&mut self, column_one_indexed: usize, player: Player) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        if self.place(column_one_indexed - 1, player).is_none() {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        let state = if self.check_win(player) {
            GameState::Win(player)
        } else if self.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        Ok(state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| format!(" {}", x)).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n").with(Color::Cyan)))?;

        for row in 0..HEIGHT {
            stdout.queue(PrintStyledContent(style("|").with(Color::Cyan)))?;
            for column in 0..WIDTH {
                let cell = self.get(row, column);
                stdout.queue(PrintStyledContent(
                    style(format!("{} ", cell.symbol()))
                        .attribute(Attribute::Bold)
                        .with(match cell {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkGrey,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("|\n").with(Color::Cyan)))?;
        }
        stdout.flush()?;
        Ok(())
    }
}
