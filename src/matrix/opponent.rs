use crate::*;

/// Player 2's payoffs: the negated transpose of [`PayoffMatrix`].
///
/// `opponent[c][r] == -payoff[r][c]`, so row `c` holds what player 2
/// earns against every player 1 action when it plays column `c`.
/// Built once per solve and never mutated. Cells are widened to [`Score`]
/// so that negating `Payoff::MIN` stays exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentMatrix {
    rows: usize,
    cols: usize,
    values: Vec<Score>,
}

impl From<&PayoffMatrix> for OpponentMatrix {
    fn from(payoff: &PayoffMatrix) -> Self {
        let (rows, cols) = (payoff.cols(), payoff.rows());
        let mut values = vec![0; rows * cols];
        for r in 0..payoff.rows() {
            for c in 0..payoff.cols() {
                values[c * cols + r] = -(payoff.get(r, c) as Score);
            }
        }
        Self { rows, cols, values }
    }
}

impl OpponentMatrix {
    /// Number of player 2 actions.
    pub fn rows(&self) -> usize {
        self.rows
    }
    /// Number of player 1 actions.
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn get(&self, row: usize, col: usize) -> Score {
        self.values[row * self.cols + col]
    }
    pub fn row(&self, row: usize) -> &[Score] {
        &self.values[row * self.cols..(row + 1) * self.cols]
    }
}
