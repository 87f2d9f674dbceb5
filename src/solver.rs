//! An agent to choose moves in Connect 4

use tracing::{debug, trace};

use crate::{
    board::*, evaluation::evaluate, CENTER_COLUMN, COLUMN_BIAS, MAX_DEPTH, WIDTH, WIN_SCORE,
};

/// An agent choosing moves for the `bot` player on a borrowed board
///
/// # Notes
/// Every candidate move is tried directly on the board and taken back before
/// the next one, so the board is always handed back exactly as it was lent.
///
/// # Position Scoring
/// A win for the bot found `depth` plies below the candidate move scores
/// `WIN_SCORE - depth`, a win for the opponent scores `depth - WIN_SCORE`, so
/// quick wins are preferred and unavoidable losses are delayed. Positions
/// at the depth limit (or on a full board) are scored by [`evaluate`].
pub struct Solver<'a> {
    board: &'a mut Board,
    bot: Player,
    pruning: bool,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl<'a> Solver<'a> {
    /// Creates a new `Solver` choosing moves for `bot`
    pub fn new(board: &'a mut Board, bot: Player) -> Self {
        Self {
            board,
            bot,
            pruning: true,
            node_count: 0,
        }
    }

    /// Disables alpha-beta pruning, searching every node of the tree
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    /// Performs game tree search
    ///
    /// Returns the score of the position (see [Position Scoring])
    ///
    /// [Position Scoring]: #position-scoring
    pub fn minimax(&mut self, depth: usize, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.node_count += 1;
        let opponent = self.bot.opponent();

        if self.board.check_win(self.bot) {
            return WIN_SCORE - depth as i32;
        }
        if self.board.check_win(opponent) {
            return depth as i32 - WIN_SCORE;
        }
        if self.board.is_full() || depth >= MAX_DEPTH {
            return evaluate(self.board, self.bot);
        }

        let mover = if maximizing { self.bot } else { opponent };
        let mut best: Option<i32> = None;

        // columns are searched left to right so cutoffs are reproducible
        for column in 0..WIDTH {
            let row = match self.board.place(column, mover) {
                Some(row) => row,
                None => continue,
            };
            let score = self.minimax(depth + 1, !maximizing, alpha, beta);
            self.board.undo(row, column);

            if maximizing {
                best = Some(best.map_or(score, |best| best.max(score)));
                alpha = alpha.max(score);
            } else {
                best = Some(best.map_or(score, |best| best.min(score)));
                beta = beta.min(score);
            }

            if self.pruning && beta <= alpha {
                break;
            }
        }

        // no playable column, score the position as it stands
        best.unwrap_or_else(|| evaluate(self.board, self.bot))
    }

    /// Chooses the column to play, `None` if every column is full
    pub fn best_move(&mut self) -> Option<usize> {
        if self.board.is_empty() {
            return Some(CENTER_COLUMN);
        }
        let opponent = self.bot.opponent();

        // best total score and its column
        let mut best: Option<(i32, usize)> = None;

        for column in 0..WIDTH {
            let row = match self.board.place(column, self.bot) {
                Some(row) => row,
                None => continue,
            };

            // take an immediate win
            if self.board.check_win(self.bot) {
                self.board.undo(row, column);
                debug!(column, "playing winning move");
                return Some(column);
            }

            // block the opponent if they would win on this same square
            self.board.set(row, column, opponent.cell());
            if self.board.check_win(opponent) {
                self.board.undo(row, column);
                debug!(column, "blocking opponent win");
                return Some(column);
            }

            self.board.set(row, column, self.bot.cell());
            let score = self.minimax(0, false, i32::MIN, i32::MAX);
            self.board.undo(row, column);

            let total = score + COLUMN_BIAS[column];
            debug!(column, score, total, "scored candidate column");

            // strict comparison, the leftmost column wins ties
            if best.map_or(true, |(best_total, _)| total > best_total) {
                best = Some((total, column));
            }
        }
        trace!(nodes = self.node_count, "search finished");

        match best {
            Some((_, column)) => Some(column),
            None => (0..WIDTH).find(|&column| self.board.is_valid_move(column)),
        }
    }
}

impl std::ops::Deref for Solver<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &*self.board
    }
}

/// Chooses the column `bot` should play on `board`, `None` if every column is full
///
/// The board is returned unchanged, applying the move is left to the caller.
pub fn find_best_move(board: &mut Board, bot: Player) -> Option<usize> {
    Solver::new(board, bot).best_move()
}
