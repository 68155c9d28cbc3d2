use super::LowerBound;
use crate::matrix::SparseBooleanMatrix;

/// The maximum of several lower bounds, which is again a lower bound.
#[derive(Debug, Default)]
pub struct MaximumOf {
    bounds: Vec<Box<dyn LowerBound>>,
}

impl MaximumOf {
    pub fn new(bounds: Vec<Box<dyn LowerBound>>) -> Self {
        MaximumOf { bounds }
    }
}

impl LowerBound for MaximumOf {
    fn calculate(&mut self, matrix: &SparseBooleanMatrix) -> u64 {
        self.bounds
            .iter_mut()
            .map(|bound| bound.calculate(matrix))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lower_bounds::ColumnSplitting;
    use crate::lower_bounds::IndependentRows;

    #[test]
    fn strongest_bound_is_returned() {
        // A triangle of rows where every pair shares a column: the independent rows only find one
        // row, while splitting the columns charges each row one half.
        let matrix = SparseBooleanMatrix::new(3, 3, [(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (2, 0)]);
        let mut maximum = MaximumOf::new(vec![
            Box::new(IndependentRows::default()),
            Box::new(ColumnSplitting),
        ]);

        assert_eq!(2, maximum.calculate(&matrix));
    }

    #[test]
    fn no_bounds_give_zero() {
        let matrix = SparseBooleanMatrix::new(1, 1, [(0, 0)]);

        assert_eq!(0, MaximumOf::default().calculate(&matrix));
    }
}
