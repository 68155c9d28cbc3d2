use super::candidate_columns;
use super::ColumnSelector;
use super::Direction;
use super::InOrderTieBreaker;
use crate::matrix::SparseBooleanMatrix;

/// The weight of a row which has a single remaining column. Such rows are normally removed by the
/// reduction; the weight only has to exceed that of a row with two columns.
const SINGLE_COLUMN_ROW_WEIGHT: f64 = 2.0;

/// Selects the column with the highest weight per unit of cost, where each row weighs
/// `1 / (number of columns of the row - 1)`.
///
/// Rows which are close to being covered by a single column weigh the most, so columns covering
/// them are preferred. A column of cost zero has an infinite score.
#[derive(Debug, Default)]
pub struct Weighted {
    row_weights: Vec<f64>,
}

impl Weighted {
    fn row_weight(matrix: &SparseBooleanMatrix, row: usize) -> f64 {
        match matrix.row_elem_count(row) {
            0 | 1 => SINGLE_COLUMN_ROW_WEIGHT,
            count => 1.0 / (count - 1) as f64,
        }
    }
}

impl ColumnSelector for Weighted {
    fn select_column(&mut self, matrix: &SparseBooleanMatrix) -> Option<usize> {
        self.row_weights.clear();
        self.row_weights.resize(matrix.num_rows(), 0.0);
        for row in matrix.active_rows() {
            self.row_weights[row] = Weighted::row_weight(matrix, row);
        }

        let mut tie_breaker = InOrderTieBreaker::new(Direction::Maximum);
        for column in candidate_columns(matrix) {
            let weight = matrix
                .col_list(column)
                .map(|row| self.row_weights[row])
                .sum::<f64>();
            let score = match matrix.col_cost(column) {
                0 => f64::INFINITY,
                cost => weight / cost as f64,
            };
            tie_breaker.consider(column, score);
        }
        tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_with_few_columns_weigh_more() {
        // Row 0 can be covered by columns 0 and 1, rows 1 and 2 by every column.
        let matrix = SparseBooleanMatrix::new(
            3,
            4,
            [
                (0, 0),
                (0, 1),
                (1, 1),
                (1, 2),
                (1, 3),
                (2, 1),
                (2, 2),
                (2, 3),
            ],
        );

        // column 1: 1 + 1/2 + 1/2 beats the 1/2 + 1/2 of columns 2 and 3
        assert_eq!(Some(1), Weighted::default().select_column(&matrix));
    }

    #[test]
    fn weight_is_divided_by_cost() {
        let matrix = SparseBooleanMatrix::with_costs(
            3,
            vec![4, 1, 1],
            [(0, 0), (1, 0), (2, 0), (0, 1), (1, 2), (2, 1), (2, 2)],
        );

        let selected = Weighted::default().select_column(&matrix);

        assert_eq!(Some(1), selected);
    }

    #[test]
    fn free_columns_are_selected_first() {
        let matrix = SparseBooleanMatrix::with_costs(2, vec![1, 0], [(0, 0), (1, 0), (1, 1)]);

        assert_eq!(Some(1), Weighted::default().select_column(&matrix));
    }
}
