//! Reduction of the matrix by dominance and essential columns.
//!
//! Each step only deletes rows and columns which cannot be needed for a minimum cover (given the
//! [`DominanceComparator`] in use), so a minimum cover of the reduced matrix together with the
//! selected essential columns is a minimum cover of the original matrix.
use std::fmt::Display;
use std::str::FromStr;

use log::trace;

use super::Dimension;
use super::SparseBooleanMatrix;
use crate::basic_types::ConfigurationError;
use crate::covering_assert_advanced;
use crate::covering_assert_moderate;

/// Decides whether a column may be dropped in favour of a column which covers all of its rows.
pub trait DominanceComparator {
    /// Called for columns where `dominating` covers every row that `dominated` covers; returns
    /// whether deleting `dominated` keeps the cost of a minimum cover unchanged.
    fn may_drop(&self, matrix: &SparseBooleanMatrix, dominated: usize, dominating: usize) -> bool;
}

impl<F: Fn(&SparseBooleanMatrix, usize, usize) -> bool> DominanceComparator for F {
    fn may_drop(&self, matrix: &SparseBooleanMatrix, dominated: usize, dominating: usize) -> bool {
        self(matrix, dominated, dominating)
    }
}

/// The built-in column dominance rules.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DominanceKind {
    /// A column is only dropped in favour of a column which costs at most as much. This is exact
    /// for weighted and unweighted matrices alike.
    #[default]
    CostAware,
    /// A column is dropped in favour of any column covering its rows, regardless of cost. This is
    /// only exact when all columns have the same cost.
    IgnoreCost,
}

impl DominanceComparator for DominanceKind {
    fn may_drop(&self, matrix: &SparseBooleanMatrix, dominated: usize, dominating: usize) -> bool {
        match self {
            DominanceKind::CostAware => matrix.col_cost(dominated) >= matrix.col_cost(dominating),
            DominanceKind::IgnoreCost => true,
        }
    }
}

impl Display for DominanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DominanceKind::CostAware => write!(f, "cost-aware"),
            DominanceKind::IgnoreCost => write!(f, "ignore-cost"),
        }
    }
}

impl FromStr for DominanceKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cost-aware" => Ok(DominanceKind::CostAware),
            "ignore-cost" => Ok(DominanceKind::IgnoreCost),
            _ => Err(ConfigurationError::UnknownDominance(s.to_owned())),
        }
    }
}

impl SparseBooleanMatrix {
    /// Applies column dominance, essential columns and row dominance once each.
    ///
    /// Selected essential columns are appended to `selected_cols` and columns deleted by dominance
    /// (or for being empty) to `deleted_cols`. Returns whether anything changed.
    ///
    /// Pairs of rows which were already compared and have not changed since are skipped. Column
    /// pairs are always compared, since their outcome depends on the comparator of the call.
    pub fn reduce(
        &mut self,
        selected_cols: &mut Vec<usize>,
        deleted_cols: &mut Vec<usize>,
        comparator: &impl DominanceComparator,
    ) -> bool {
        covering_assert_moderate!(self.marks_are_clear(), "marks are set before reduction");

        let mut changed = self.eliminate_dominated_columns(deleted_cols, comparator);
        changed |= self.select_essential_columns(selected_cols);
        changed |= self.eliminate_dominated_rows();

        covering_assert_moderate!(self.marks_are_clear(), "marks are set after reduction");
        covering_assert_advanced!(self.is_consistent());
        changed
    }

    /// Calls [`SparseBooleanMatrix::reduce`] until the matrix does not change anymore.
    pub fn reduce_loop(
        &mut self,
        selected_cols: &mut Vec<usize>,
        deleted_cols: &mut Vec<usize>,
        comparator: &impl DominanceComparator,
    ) {
        while self.reduce(selected_cols, deleted_cols, comparator) {}
    }

    fn marks_are_clear(&self) -> bool {
        self.marks.values().all(|marks| marks.is_clear())
    }

    /// Deletes every empty column and every column whose rows are all covered by another column
    /// which the comparator allows it to be dropped for.
    pub(crate) fn eliminate_dominated_columns(
        &mut self,
        deleted_cols: &mut Vec<usize>,
        comparator: &impl DominanceComparator,
    ) -> bool {
        let mut changed = false;

        let empty = self
            .active_columns()
            .filter(|&column| self.col_elem_count(column) == 0)
            .collect::<Vec<_>>();
        for column in empty {
            self.delete_col(column);
            deleted_cols.push(column);
            changed = true;
        }

        let mut current = self.header_list(Dimension::Column).first();
        while let Some(column) = current {
            if !self.marks[Dimension::Column].is_marked(column)
                && self.find_dominating_column(column, comparator).is_some()
            {
                trace!("column {column} is dominated");
                let _ = self.marks[Dimension::Column].mark(column);
                self.delete_col(column);
                deleted_cols.push(column);
                changed = true;
            }
            // An excluded header still points to the successor it had, which is active.
            current = self.header_list(Dimension::Column).next_of(column);
        }

        self.marks[Dimension::Column].clear();
        changed
    }

    fn find_dominating_column(
        &self,
        column: usize,
        comparator: &impl DominanceComparator,
    ) -> Option<usize> {
        let count = self.col_elem_count(column);

        // Any dominating column has to cover the row of `column` with the fewest columns.
        let pivot = self
            .col_list(column)
            .min_by_key(|&row| self.row_elem_count(row))?;

        self.row_list(pivot).find(|&candidate| {
            candidate != column
                && !self.marks[Dimension::Column].is_marked(candidate)
                && self.col_elem_count(candidate) >= count
                && comparator.may_drop(self, column, candidate)
                && self.is_contained_in(Dimension::Column, column, candidate)
        })
    }

    /// Selects every column which is the only remaining column of one of its rows.
    pub(crate) fn select_essential_columns(&mut self, selected_cols: &mut Vec<usize>) -> bool {
        let singleton_rows = self
            .active_rows()
            .filter(|&row| self.row_elem_count(row) == 1)
            .collect::<Vec<_>>();

        let mut changed = false;
        for row in singleton_rows {
            // Selecting an earlier column may have deleted this row already.
            if self.row_deleted(row) {
                continue;
            }
            let Some(column) = self.row_list(row).next() else {
                continue;
            };
            if !self.marks[Dimension::Column].mark(column) {
                continue;
            }

            trace!("column {column} is essential for row {row}");
            self.select_col(column);
            selected_cols.push(column);
            changed = true;
        }

        self.marks[Dimension::Column].clear();
        changed
    }

    /// Deletes every row which contains all columns of another row; covering the smaller row
    /// covers the larger one.
    pub(crate) fn eliminate_dominated_rows(&mut self) -> bool {
        let mut changed = false;

        let mut current = self.header_list(Dimension::Row).first();
        while let Some(row) = current {
            if !self.marks[Dimension::Row].is_marked(row) {
                for dominated in self.find_dominated_rows(row) {
                    trace!("row {dominated} is dominated by row {row}");
                    let _ = self.marks[Dimension::Row].mark(dominated);
                    self.delete_row(dominated);
                    changed = true;
                }
            }
            current = self.header_list(Dimension::Row).next_of(row);
        }

        self.marks[Dimension::Row].clear();
        self.clear_dirty_rows();
        changed
    }

    fn find_dominated_rows(&self, row: usize) -> Vec<usize> {
        let count = self.row_elem_count(row);
        let dirty = self.header_list(Dimension::Row).get(row).dirty;

        // Every row containing all columns of `row` also contains its sparsest column.
        let Some(pivot) = self
            .row_list(row)
            .min_by_key(|&column| self.col_elem_count(column))
        else {
            return vec![];
        };

        self.col_list(pivot)
            .filter(|&candidate| {
                candidate != row
                    && !self.marks[Dimension::Row].is_marked(candidate)
                    && self.row_elem_count(candidate) >= count
                    && (dirty || self.header_list(Dimension::Row).get(candidate).dirty)
                    && self.is_contained_in(Dimension::Row, row, candidate)
            })
            .collect()
    }

    /// Returns whether the ring of `smaller` is a subset of the ring of `larger`, by merging the
    /// two sorted rings.
    fn is_contained_in(&self, dimension: Dimension, smaller: usize, larger: usize) -> bool {
        let mut larger_positions = self.positions(dimension, larger).peekable();
        self.positions(dimension, smaller).all(|position| {
            while larger_positions.next_if(|&other| other < position).is_some() {}
            larger_positions.next_if_eq(&position).is_some()
        })
    }

    fn clear_dirty_rows(&mut self) {
        let active = self.header_list(Dimension::Row).iter().collect::<Vec<_>>();
        let list = self.header_list_mut(Dimension::Row);
        for index in active {
            list.get_mut(index).dirty = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_once(matrix: &mut SparseBooleanMatrix) -> (bool, Vec<usize>, Vec<usize>) {
        let mut selected = vec![];
        let mut deleted = vec![];
        let changed = matrix.reduce(&mut selected, &mut deleted, &DominanceKind::CostAware);
        (changed, selected, deleted)
    }

    #[test]
    fn superset_rows_are_deleted() {
        // row 0 -> {0, 1}, row 1 -> {0, 1, 2}, row 2 -> {2, 3}
        let mut matrix =
            SparseBooleanMatrix::new(3, 4, [(0, 0), (0, 1), (1, 0), (1, 1), (1, 2), (2, 2), (2, 3)]);

        assert!(matrix.eliminate_dominated_rows());

        assert_eq!(vec![0, 2], matrix.active_rows().collect::<Vec<_>>());
        assert!(matrix.is_consistent());
    }

    #[test]
    fn only_one_of_two_identical_rows_is_deleted() {
        let mut matrix = SparseBooleanMatrix::new(2, 2, [(0, 0), (0, 1), (1, 0), (1, 1)]);

        assert!(matrix.eliminate_dominated_rows());

        assert_eq!(1, matrix.num_active_rows());
    }

    #[test]
    fn subset_columns_are_deleted_when_not_cheaper() {
        // column 0 -> {0}, column 1 -> {0, 1}, column 2 -> {1}
        let mut matrix = SparseBooleanMatrix::with_costs(2, vec![1, 1, 1], [(0, 0), (0, 1), (1, 1), (1, 2)]);
        let mut deleted = vec![];

        assert!(matrix.eliminate_dominated_columns(&mut deleted, &DominanceKind::CostAware));

        assert_eq!(vec![0, 2], deleted);
        assert_eq!(vec![1], matrix.active_columns().collect::<Vec<_>>());
    }

    #[test]
    fn cheaper_subset_columns_are_kept_by_the_cost_aware_comparator() {
        let mut matrix = SparseBooleanMatrix::with_costs(2, vec![1, 5, 1], [(0, 0), (0, 1), (1, 1), (1, 2)]);
        let mut deleted = vec![];

        assert!(!matrix.eliminate_dominated_columns(&mut deleted, &DominanceKind::CostAware));
        assert_eq!(3, matrix.num_active_columns());

        let mut matrix = SparseBooleanMatrix::with_costs(2, vec![1, 5, 1], [(0, 0), (0, 1), (1, 1), (1, 2)]);
        assert!(matrix.eliminate_dominated_columns(&mut deleted, &DominanceKind::IgnoreCost));
        assert_eq!(vec![1], matrix.active_columns().collect::<Vec<_>>());
    }

    #[test]
    fn closures_can_be_used_as_comparator() {
        let mut matrix = SparseBooleanMatrix::new(2, 3, [(0, 0), (0, 1), (1, 1), (1, 2)]);
        let mut deleted = vec![];
        let never = |_: &SparseBooleanMatrix, _: usize, _: usize| false;

        assert!(!matrix.eliminate_dominated_columns(&mut deleted, &never));
        assert!(deleted.is_empty());
    }

    #[test]
    fn empty_columns_are_deleted() {
        let mut matrix = SparseBooleanMatrix::new(2, 3, [(0, 0), (1, 1), (1, 2)]);
        matrix.delete_row(0);
        let mut deleted = vec![];

        assert!(matrix.eliminate_dominated_columns(&mut deleted, &DominanceKind::CostAware));

        assert_eq!(0, deleted[0]);
        assert!(matrix.col_deleted(0));
    }

    #[test]
    fn essential_columns_are_selected_once() {
        // rows 0 and 1 both only have column 2
        let mut matrix = SparseBooleanMatrix::new(3, 3, [(0, 2), (1, 2), (2, 0), (2, 1)]);
        let mut selected = vec![];

        assert!(matrix.select_essential_columns(&mut selected));

        assert_eq!(vec![2], selected);
        assert_eq!(vec![2], matrix.active_rows().collect::<Vec<_>>());
    }

    #[test]
    fn reduction_solves_a_chain_of_essential_columns() {
        // row 0 -> {0}, row 1 -> {0, 1}, row 2 -> {1, 2}, row 3 -> {2}
        let mut matrix =
            SparseBooleanMatrix::new(4, 3, [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 2)]);
        let mut selected = vec![];
        let mut deleted = vec![];

        matrix.reduce_loop(&mut selected, &mut deleted, &DominanceKind::CostAware);

        assert_eq!(0, matrix.num_active_rows());
        selected.sort();
        assert_eq!(vec![0, 2], selected);
        assert!(matrix.verify(&selected));
    }

    #[test]
    fn reduction_reaches_a_fixpoint() {
        // A cycle of rows over pairs of columns cannot be reduced.
        let mut matrix =
            SparseBooleanMatrix::new(3, 3, [(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (2, 0)]);

        let (changed, selected, deleted) = reduce_once(&mut matrix);

        assert!(!changed);
        assert!(selected.is_empty() && deleted.is_empty());
    }

    #[test]
    fn clean_headers_are_compared_again_after_restoration() {
        // row 1 contains row 0 once column 2 is deleted
        let mut matrix = SparseBooleanMatrix::new(2, 3, [(0, 0), (0, 2), (1, 0), (1, 1)]);
        assert!(!matrix.eliminate_dominated_rows());

        matrix.save();
        matrix.delete_col(2);
        assert!(matrix.eliminate_dominated_rows());
        assert_eq!(vec![0], matrix.active_rows().collect::<Vec<_>>());
        matrix.restore();

        assert!(!matrix.eliminate_dominated_rows());
        assert_eq!(vec![0, 1], matrix.active_rows().collect::<Vec<_>>());
    }

    #[test]
    fn marks_are_clear_after_reduction() {
        let mut matrix =
            SparseBooleanMatrix::new(3, 4, [(0, 0), (0, 1), (1, 0), (1, 1), (1, 2), (2, 2), (2, 3)]);

        let _ = reduce_once(&mut matrix);

        assert!(matrix.marks_are_clear());
    }

    #[test]
    fn column_dominance_does_not_depend_on_earlier_comparators() {
        // column 0 -> {0}, column 1 -> {0, 1}, column 2 -> {1}
        let mut matrix = SparseBooleanMatrix::new(2, 3, [(0, 0), (0, 1), (1, 1), (1, 2)]);
        let never = |_: &SparseBooleanMatrix, _: usize, _: usize| false;
        let mut selected = vec![];
        let mut deleted = vec![];

        assert!(!matrix.reduce(&mut selected, &mut deleted, &never));
        assert!(matrix.reduce(&mut selected, &mut deleted, &DominanceKind::CostAware));

        assert_eq!(vec![0, 2], deleted);
        assert_eq!(vec![1], selected);
    }
}
