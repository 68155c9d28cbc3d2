use super::candidate_columns;
use super::ColumnSelector;
use super::Direction;
use super::InOrderTieBreaker;
use crate::matrix::SparseBooleanMatrix;

/// Selects the column covering the most active rows, ignoring costs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Naive;

impl ColumnSelector for Naive {
    fn select_column(&mut self, matrix: &SparseBooleanMatrix) -> Option<usize> {
        let mut tie_breaker = InOrderTieBreaker::new(Direction::Maximum);
        for column in candidate_columns(matrix) {
            tie_breaker.consider(column, matrix.col_elem_count(column));
        }
        tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_with_most_rows_is_selected() {
        let matrix = SparseBooleanMatrix::new(3, 3, [(0, 0), (1, 1), (2, 1), (0, 2), (1, 2)]);

        // columns 1 and 2 both cover two rows
        assert_eq!(Some(1), Naive.select_column(&matrix));
    }

    #[test]
    fn deleted_and_empty_columns_are_never_selected() {
        let mut matrix = SparseBooleanMatrix::new(3, 3, [(0, 0), (1, 0), (2, 1)]);
        matrix.delete_col(0);

        assert_eq!(Some(1), Naive.select_column(&matrix));

        matrix.delete_row(2);

        assert_eq!(None, Naive.select_column(&matrix));
    }
}
