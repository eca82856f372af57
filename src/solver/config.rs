use crate::*;

/// How player 1 picks its very first action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub enum Start {
    /// Uniformly at random from the session generator.
    #[default]
    Random,
    /// A caller-chosen row, for reproducible traces.
    Fixed(usize),
}

/// Solve parameters. Defaults mirror the crate constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Config {
    pub trials: usize,
    pub max_rows: usize,
    pub max_cols: usize,
    pub start: Start,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: TOTAL_TRIALS,
            max_rows: MAX_ROWS,
            max_cols: MAX_COLS,
            start: Start::Random,
        }
    }
}

impl Config {
    pub fn with_trials(self, trials: usize) -> Self {
        Self { trials, ..self }
    }
    pub fn with_start(self, start: Start) -> Self {
        Self { start, ..self }
    }

    /// Reject anything that would make the solve meaningless before it begins.
    ///
    /// Trial 1 never contributes a bound, so at least two trials are needed
    /// to produce an estimate.
    pub fn validate(&self, matrix: &PayoffMatrix) -> Result<()> {
        if self.trials < 2 || self.trials > Count::MAX as usize {
            return Err(Error::input(format!(
                "trial count {} outside 2..={}",
                self.trials,
                Count::MAX
            )));
        }
        if matrix.rows() > self.max_rows || matrix.cols() > self.max_cols {
            return Err(Error::input(format!(
                "{}x{} matrix exceeds the {}x{} limit",
                matrix.rows(),
                matrix.cols(),
                self.max_rows,
                self.max_cols
            )));
        }
        if let Start::Fixed(row) = self.start {
            if row >= matrix.rows() {
                return Err(Error::input(format!(
                    "starting row {} out of range for {} rows",
                    row,
                    matrix.rows()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.trials, 100);
        assert_eq!((config.max_rows, config.max_cols), (20, 20));
        assert_eq!(config.start, Start::Random);
        assert!(config.validate(&PayoffMatrix::example()).is_ok());
    }

    #[test]
    fn too_few_trials() {
        let matrix = PayoffMatrix::example();
        assert!(Config::default().with_trials(0).validate(&matrix).is_err());
        assert!(Config::default().with_trials(1).validate(&matrix).is_err());
        assert!(Config::default().with_trials(2).validate(&matrix).is_ok());
    }

    #[test]
    fn oversized_matrix() {
        let wide = PayoffMatrix::new(vec![vec![0; MAX_COLS + 1]]).unwrap();
        let tall = PayoffMatrix::new(vec![vec![0]; MAX_ROWS + 1]).unwrap();
        let edge = PayoffMatrix::new(vec![vec![0; MAX_COLS]; MAX_ROWS]).unwrap();
        assert!(matches!(Config::default().validate(&wide), Err(Error::InvalidInput(_))));
        assert!(matches!(Config::default().validate(&tall), Err(Error::InvalidInput(_))));
        assert!(Config::default().validate(&edge).is_ok());
    }

    #[test]
    fn raised_limits() {
        let wide = PayoffMatrix::new(vec![vec![0; 30]]).unwrap();
        let config = Config {
            max_cols: 32,
            ..Config::default()
        };
        assert!(config.validate(&wide).is_ok());
    }

    #[test]
    fn fixed_start_in_range() {
        let matrix = PayoffMatrix::example();
        let config = Config::default();
        assert!(config.with_start(Start::Fixed(2)).validate(&matrix).is_ok());
        assert!(config.with_start(Start::Fixed(3)).validate(&matrix).is_err());
    }
}
