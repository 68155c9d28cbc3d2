use log::trace;

use super::GreedyStatistics;
use crate::covering_assert_eq_simple;
use crate::matrix::DominanceKind;
use crate::matrix::SparseBooleanMatrix;
use crate::selection::ColumnSelector;

/// Covers a matrix by repeatedly selecting the column preferred by a [`ColumnSelector`] and
/// reducing the matrix after every selection.
///
/// The resulting cover is always valid but in general not of minimum cost.
#[derive(Debug)]
pub struct Greedy {
    selector: Box<dyn ColumnSelector>,
    dominance: DominanceKind,
    statistics: GreedyStatistics,
}

impl Greedy {
    pub fn new(selector: Box<dyn ColumnSelector>, dominance: DominanceKind) -> Self {
        Greedy {
            selector,
            dominance,
            statistics: GreedyStatistics::default(),
        }
    }

    pub fn statistics(&self) -> GreedyStatistics {
        self.statistics
    }

    /// Selects columns until no active row remains and returns them in the order in which they
    /// were selected.
    ///
    /// The matrix is left with all rows deleted; bracket the call with
    /// [`SparseBooleanMatrix::save`] and [`SparseBooleanMatrix::restore`] to keep it.
    pub fn solve(&mut self, matrix: &mut SparseBooleanMatrix) -> Vec<usize> {
        let mut solution = vec![];
        let mut deleted_cols = vec![];
        self.reduce(matrix, &mut solution, &mut deleted_cols);

        while let Some(column) = self.selector.select_column(matrix) {
            trace!("greedily selecting column {column}");
            matrix.select_col(column);
            solution.push(column);
            self.statistics.num_selected_columns += 1;

            self.reduce(matrix, &mut solution, &mut deleted_cols);
        }

        covering_assert_eq_simple!(
            0,
            matrix.num_active_rows(),
            "active rows remain which no column covers"
        );
        solution
    }

    fn reduce(
        &mut self,
        matrix: &mut SparseBooleanMatrix,
        solution: &mut Vec<usize>,
        deleted_cols: &mut Vec<usize>,
    ) {
        let num_selected = solution.len();
        matrix.reduce_loop(solution, deleted_cols, &self.dominance);
        self.statistics.num_forced_columns += (solution.len() - num_selected) as u64;
        deleted_cols.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Naive;
    use crate::selection::SelectorKind;

    #[test]
    fn greedy_cover_is_valid() {
        let mut matrix = SparseBooleanMatrix::new(
            3,
            4,
            [(0, 0), (0, 2), (1, 1), (1, 2), (2, 0), (2, 3)],
        );
        let mut greedy = Greedy::new(SelectorKind::Simple.create(), DominanceKind::CostAware);

        let solution = greedy.solve(&mut matrix);

        assert!(matrix.verify(&solution));
        assert!(matrix.cost(&solution) >= 2);
        assert_eq!(0, matrix.num_active_rows());
    }

    #[test]
    fn forced_columns_are_counted() {
        // Every row has a single column.
        let mut matrix = SparseBooleanMatrix::new(2, 2, [(0, 0), (1, 1)]);
        let mut greedy = Greedy::new(Box::new(Naive), DominanceKind::CostAware);

        let mut solution = greedy.solve(&mut matrix);
        solution.sort_unstable();

        assert_eq!(vec![0, 1], solution);
        assert_eq!(2, greedy.statistics().num_forced_columns);
        assert_eq!(0, greedy.statistics().num_selected_columns);
    }

    #[test]
    fn greedy_on_empty_matrix_selects_nothing() {
        let mut matrix = SparseBooleanMatrix::new(0, 3, []);
        let mut greedy = Greedy::new(Box::new(Naive), DominanceKind::CostAware);

        assert!(greedy.solve(&mut matrix).is_empty());
    }
}
