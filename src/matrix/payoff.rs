use crate::*;

/// Player 1's payoffs, `rows × cols`, stored row-major.
///
/// Construction guarantees the matrix is non-empty and rectangular.
/// Size limits are a solve-time concern, checked against [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PayoffMatrix {
    rows: usize,
    cols: usize,
    values: Vec<Payoff>,
}

impl PayoffMatrix {
    pub fn new(grid: Vec<Vec<Payoff>>) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map(Vec::len).unwrap_or_default();
        if rows == 0 || cols == 0 {
            return Err(Error::input("payoff matrix must have at least one row and column"));
        }
        if let Some(r) = grid.iter().position(|row| row.len() != cols) {
            return Err(Error::input(format!(
                "row {} has {} entries, expected {}",
                r,
                grid[r].len(),
                cols
            )));
        }
        Ok(Self {
            rows,
            cols,
            values: grid.into_iter().flatten().collect(),
        })
    }

    /// Three-action demo game.
    pub fn example() -> Self {
        Self {
            rows: 3,
            cols: 3,
            values: vec![1, -3, 7, 0, 2, 5, 5, 5, 3],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn get(&self, row: usize, col: usize) -> Payoff {
        self.values[row * self.cols + col]
    }
    /// Player 1's payoffs for one of its actions, across every column.
    pub fn row(&self, row: usize) -> &[Payoff] {
        &self.values[row * self.cols..(row + 1) * self.cols]
    }
    pub fn iter(&self) -> impl Iterator<Item = &[Payoff]> {
        self.values.chunks_exact(self.cols)
    }
}

impl TryFrom<Vec<Vec<Payoff>>> for PayoffMatrix {
    type Error = Error;
    fn try_from(grid: Vec<Vec<Payoff>>) -> Result<Self> {
        Self::new(grid)
    }
}

/// Rows split on `;` or newlines, cells on commas or whitespace.
impl TryFrom<&str> for PayoffMatrix {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> anyhow::Result<Self> {
        let grid = s
            .split(|c: char| c == ';' || c == '\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|cell| !cell.is_empty())
                    .map(|cell| {
                        cell.parse::<Payoff>()
                            .map_err(|e| anyhow::anyhow!("invalid payoff {:?}: {}", cell, e))
                    })
                    .collect::<anyhow::Result<Vec<_>>>()
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self::new(grid)?)
    }
}

impl std::fmt::Display for PayoffMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.iter() {
            for cell in row {
                write!(f, " {:>4}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
