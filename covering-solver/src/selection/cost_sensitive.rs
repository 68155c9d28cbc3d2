use super::candidate_columns;
use super::ColumnSelector;
use super::Direction;
use super::InOrderTieBreaker;
use crate::lower_bounds::ColumnSplitting;
use crate::matrix::SparseBooleanMatrix;

/// Selects the column whose cost is best paid for by the column-splitting lower bound.
///
/// The column-splitting bound charges every row the cheapest cost share among its columns. For a
/// column `c` this selector computes `cost(c) - sum of the charges of the rows of c`, which is the
/// amount by which selecting `c` exceeds what the bound already accounts for, and selects the
/// column minimising it. Columns which the bound fully charges are the ones whose selection keeps
/// the bound tight.
#[derive(Debug, Default)]
pub struct CostSensitive {
    row_charges: Vec<f64>,
}

impl ColumnSelector for CostSensitive {
    fn select_column(&mut self, matrix: &SparseBooleanMatrix) -> Option<usize> {
        self.row_charges.clear();
        self.row_charges.resize(matrix.num_rows(), 0.0);
        for row in matrix.active_rows() {
            self.row_charges[row] = ColumnSplitting::cheapest_share(matrix, row).unwrap_or(0.0);
        }

        let mut tie_breaker = InOrderTieBreaker::new(Direction::Minimum);
        for column in candidate_columns(matrix) {
            let charged = matrix
                .col_list(column)
                .map(|row| self.row_charges[row])
                .sum::<f64>();
            tie_breaker.consider(column, matrix.col_cost(column) as f64 - charged);
        }
        tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_charged_column_is_selected() {
        // Column 0 (cost 2) is the cheapest way to cover rows 0 and 1; the singleton columns cost
        // 3 each.
        let matrix = SparseBooleanMatrix::with_costs(
            3,
            vec![2, 3, 3, 1],
            [(0, 0), (1, 0), (0, 1), (1, 2), (2, 3)],
        );

        assert_eq!(Some(0), CostSensitive::default().select_column(&matrix));
    }

    #[test]
    fn overpriced_column_is_avoided() {
        // Column 2 covers both rows but costs more than the two singletons together.
        let matrix =
            SparseBooleanMatrix::with_costs(2, vec![1, 1, 5], [(0, 0), (1, 1), (0, 2), (1, 2)]);

        assert_eq!(Some(0), CostSensitive::default().select_column(&matrix));
    }
}
