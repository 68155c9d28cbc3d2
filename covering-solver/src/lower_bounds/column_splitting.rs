use super::LowerBound;
use crate::matrix::SparseBooleanMatrix;

/// Slack for the rounding of the fractional bound, so that a sum which is integral up to floating
/// point error is not rounded up to the next integer.
const ROUNDING_TOLERANCE: f64 = 1e-9;

/// Spreads the cost of every column evenly over the rows it covers and charges each row the
/// cheapest share among its columns.
///
/// Any cover pays the full cost of each of its columns, which is at least the sum of the shares
/// of the rows it covers, so the sum of the cheapest shares (rounded up) is a lower bound.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColumnSplitting;

impl ColumnSplitting {
    /// The cost share of each row of `column`.
    pub(crate) fn share(matrix: &SparseBooleanMatrix, column: usize) -> f64 {
        matrix.col_cost(column) as f64 / matrix.col_elem_count(column) as f64
    }

    /// The cheapest share among the columns of `row`, or [`None`] if the row has no columns.
    pub(crate) fn cheapest_share(matrix: &SparseBooleanMatrix, row: usize) -> Option<f64> {
        matrix
            .row_list(row)
            .map(|column| ColumnSplitting::share(matrix, column))
            .min_by(f64::total_cmp)
    }

    pub(crate) fn round_up(fractional_bound: f64) -> u64 {
        (fractional_bound - ROUNDING_TOLERANCE).ceil().max(0.0) as u64
    }
}

impl LowerBound for ColumnSplitting {
    fn calculate(&mut self, matrix: &SparseBooleanMatrix) -> u64 {
        let fractional_bound = matrix
            .active_rows()
            .filter_map(|row| ColumnSplitting::cheapest_share(matrix, row))
            .sum::<f64>();
        ColumnSplitting::round_up(fractional_bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_of_uniform_columns_add_up() {
        // Three rows which pairwise share a column; every column covers two rows.
        let matrix = SparseBooleanMatrix::new(3, 3, [(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (2, 0)]);

        assert_eq!(2, ColumnSplitting.calculate(&matrix));
    }

    #[test]
    fn integral_sums_are_not_rounded_up() {
        // Every row is charged 1/3.
        let matrix = SparseBooleanMatrix::new(3, 1, [(0, 0), (1, 0), (2, 0)]);

        assert_eq!(1, ColumnSplitting.calculate(&matrix));
    }

    #[test]
    fn weighted_columns_are_split_by_cost() {
        // column 0 costs 4 for two rows, column 1 costs 3 for one row
        let matrix = SparseBooleanMatrix::with_costs(2, vec![4, 3], [(0, 0), (1, 0), (1, 1)]);

        assert_eq!(4, ColumnSplitting.calculate(&matrix));
    }

    #[test]
    fn empty_matrix_has_bound_zero() {
        let matrix = SparseBooleanMatrix::new(0, 0, []);

        assert_eq!(0, ColumnSplitting.calculate(&matrix));
    }
}
