use enum_map::EnumMap;
use log::trace;

use super::Cell;
use super::CellId;
use super::Dimension;
use super::HeaderList;
use super::HeaderRef;
use super::Journal;
use super::Link;
use super::Marks;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::covering_assert_advanced;
use crate::covering_assert_eq_simple;
use crate::covering_assert_simple;

/// A boolean matrix of which only the present entries are stored.
///
/// Rows and columns can be deleted and restored; deletions are recorded on a journal, and
/// [`SparseBooleanMatrix::restore`] undoes all deletions since the matching
/// [`SparseBooleanMatrix::save`]. Queries only observe the cells of which neither the row nor the
/// column is deleted, with the exception of the rings of deleted headers themselves, which keep
/// the cells they had at the moment of deletion.
///
/// # Example
/// ```
/// # use covering_solver::SparseBooleanMatrix;
/// let mut matrix = SparseBooleanMatrix::new(2, 3, [(0, 0), (0, 2), (1, 1), (1, 2)]);
///
/// matrix.save();
/// matrix.select_col(2);
/// assert_eq!(0, matrix.num_active_rows());
///
/// matrix.restore();
/// assert_eq!(vec![1, 2], matrix.row_list(1).collect::<Vec<_>>());
/// ```
#[derive(Clone, Debug)]
pub struct SparseBooleanMatrix {
    /// The first `num_rows` cells are the row sentinels, the next `num_columns` cells the column
    /// sentinels; the remaining cells are the present entries.
    cells: KeyedVec<CellId, Cell>,
    headers: EnumMap<Dimension, HeaderList>,
    costs: Vec<u64>,
    journal: Journal,
    pub(super) marks: EnumMap<Dimension, Marks>,
}

impl SparseBooleanMatrix {
    /// Creates a matrix in which every column has cost 1.
    pub fn new(
        num_rows: usize,
        num_columns: usize,
        elements: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        SparseBooleanMatrix::with_costs(num_rows, vec![1; num_columns], elements)
    }

    /// Creates a matrix with `costs.len()` columns, where column `c` has cost `costs[c]`.
    ///
    /// Duplicate elements are ignored and the elements do not need to be sorted.
    pub fn with_costs(
        num_rows: usize,
        costs: Vec<u64>,
        elements: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let num_columns = costs.len();
        let mut cells = KeyedVec::with_capacity(num_rows + num_columns);
        for row in 0..num_rows {
            let id = CellId::create_from_index(cells.len());
            let _ = cells.push(Cell::sentinel(id, Dimension::Row, row));
        }
        for column in 0..num_columns {
            let id = CellId::create_from_index(cells.len());
            let _ = cells.push(Cell::sentinel(id, Dimension::Column, column));
        }

        let headers = EnumMap::from_array([
            HeaderList::new(Dimension::Row, (0..num_rows).map(CellId::create_from_index)),
            HeaderList::new(
                Dimension::Column,
                (num_rows..num_rows + num_columns).map(CellId::create_from_index),
            ),
        ]);

        let mut matrix = SparseBooleanMatrix {
            cells,
            headers,
            costs,
            journal: Journal::default(),
            marks: EnumMap::from_array([Marks::new(num_rows), Marks::new(num_columns)]),
        };

        let _ = matrix.add_elements(elements);
        matrix
    }

    /// Adds all `elements` to the matrix and returns how many of them were not present yet.
    ///
    /// The rows and columns which become non-empty are merged into the active lists in a single
    /// pass. The same restrictions as for [`SparseBooleanMatrix::add_element`] apply.
    pub fn add_elements(&mut self, elements: impl IntoIterator<Item = (usize, usize)>) -> usize {
        covering_assert_simple!(
            self.journal.is_empty(),
            "elements cannot be added while deletions are recorded"
        );

        let mut num_added = 0;
        for (row, column) in elements {
            if self.insert_cell(row, column) {
                num_added += 1;
            }
        }

        for dimension in [Dimension::Row, Dimension::Column] {
            let headers = &self.headers[dimension];
            let mut activated = HeaderList::new(
                dimension,
                std::iter::repeat(CellId::DETACHED).take(headers.len()),
            );
            activated.initialise(
                headers
                    .headers()
                    .filter(|header| header.deleted && header.element_count > 0)
                    .map(|header| header.index),
            );
            self.headers[dimension].merge(&activated);
        }

        covering_assert_advanced!(self.is_consistent());
        num_added
    }

    /// Adds the element `(row, column)` to the matrix; returns `false` if it was already present.
    ///
    /// Elements can only be added while no deletions are recorded, i.e. before the matrix is
    /// reduced or solved, or after everything has been restored.
    pub fn add_element(&mut self, row: usize, column: usize) -> bool {
        covering_assert_simple!(
            self.journal.is_empty(),
            "elements cannot be added while deletions are recorded"
        );

        if !self.insert_cell(row, column) {
            return false;
        }

        for (dimension, index) in [(Dimension::Row, row), (Dimension::Column, column)] {
            if self.headers[dimension].get(index).deleted {
                self.headers[dimension].insert(index);
            }
        }

        covering_assert_advanced!(self.is_consistent());
        true
    }

    /// Links a new cell into its row and column ring, keeping both rings sorted.
    fn insert_cell(&mut self, row: usize, column: usize) -> bool {
        covering_assert_simple!(
            row < self.num_rows() && column < self.num_columns(),
            "element ({row}, {column}) is out of range for a {}x{} matrix",
            self.num_rows(),
            self.num_columns()
        );

        let row_previous = self.find_insertion_point(Dimension::Row, row, column);
        if row_previous != self.sentinel(Dimension::Row, row)
            && self.cells[row_previous].index_in(Dimension::Column) == column
        {
            return false;
        }
        let column_previous = self.find_insertion_point(Dimension::Column, column, row);

        let id = CellId::create_from_index(self.cells.len());
        let mut cell = Cell::new(id, row, column);
        cell.links[Dimension::Row] = Link {
            previous: row_previous,
            next: self.cells[row_previous].links[Dimension::Row].next,
        };
        cell.links[Dimension::Column] = Link {
            previous: column_previous,
            next: self.cells[column_previous].links[Dimension::Column].next,
        };
        let _ = self.cells.push(cell);

        self.relink(id, Dimension::Row);
        self.relink(id, Dimension::Column);
        self.headers[Dimension::Row].increment_count(row);
        self.headers[Dimension::Column].increment_count(column);
        true
    }

    /// Finds the last cell in the ring of `index` which lies before `position`, scanning backwards
    /// from the end of the ring.
    fn find_insertion_point(&self, dimension: Dimension, index: usize, position: usize) -> CellId {
        let sentinel = self.sentinel(dimension, index);
        let mut previous = self.cells[sentinel].links[dimension].previous;
        while previous != sentinel && self.cells[previous].index_in(dimension.other()) > position {
            previous = self.cells[previous].links[dimension].previous;
        }
        previous
    }

    pub fn num_rows(&self) -> usize {
        self.headers[Dimension::Row].len()
    }

    pub fn num_columns(&self) -> usize {
        self.headers[Dimension::Column].len()
    }

    pub fn num_active_rows(&self) -> usize {
        self.headers[Dimension::Row].num_active()
    }

    pub fn num_active_columns(&self) -> usize {
        self.headers[Dimension::Column].num_active()
    }

    /// The rows which are not deleted, in ascending order.
    pub fn active_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.headers[Dimension::Row].iter()
    }

    /// The columns which are not deleted, in ascending order.
    pub fn active_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.headers[Dimension::Column].iter()
    }

    /// The columns of the non-deleted cells of `row`, in ascending order.
    pub fn row_list(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.positions(Dimension::Row, row)
    }

    /// The rows of the non-deleted cells of `column`, in ascending order.
    pub fn col_list(&self, column: usize) -> impl Iterator<Item = usize> + '_ {
        self.positions(Dimension::Column, column)
    }

    pub fn row_elem_count(&self, row: usize) -> usize {
        self.headers[Dimension::Row].get(row).element_count
    }

    pub fn col_elem_count(&self, column: usize) -> usize {
        self.headers[Dimension::Column].get(column).element_count
    }

    pub fn row_deleted(&self, row: usize) -> bool {
        self.headers[Dimension::Row].get(row).deleted
    }

    pub fn col_deleted(&self, column: usize) -> bool {
        self.headers[Dimension::Column].get(column).deleted
    }

    pub fn col_cost(&self, column: usize) -> u64 {
        self.costs[column]
    }

    /// The sum of the costs of `columns`.
    pub fn cost(&self, columns: &[usize]) -> u64 {
        columns.iter().map(|&column| self.col_cost(column)).sum()
    }

    /// Returns whether every row which has an element in the matrix is covered by one of
    /// `columns`.
    ///
    /// This considers all elements the matrix was built with, regardless of which rows and
    /// columns are currently deleted.
    pub fn verify(&self, columns: &[usize]) -> bool {
        let mut selected = vec![false; self.num_columns()];
        for &column in columns {
            covering_assert_simple!(column < self.num_columns(), "unknown column {column}");
            selected[column] = true;
        }

        let mut has_element = vec![false; self.num_rows()];
        let mut covered = vec![false; self.num_rows()];
        for cell in self.cells.iter().skip(self.num_rows() + self.num_columns()) {
            let row = cell.index_in(Dimension::Row);
            has_element[row] = true;
            covered[row] |= selected[cell.index_in(Dimension::Column)];
        }

        has_element
            .into_iter()
            .zip(covered)
            .all(|(has_element, covered)| !has_element || covered)
    }

    /// Returns whether `column` is the only remaining column of one of its rows.
    pub fn is_column_essential(&self, column: usize) -> bool {
        self.col_list(column)
            .any(|row| self.row_elem_count(row) == 1)
    }

    /// Selects `column`: every row it covers is deleted, after which the column itself is
    /// deleted.
    ///
    /// Columns which lose all their elements because of this are not deleted here; that is left
    /// to the reduction.
    pub fn select_col(&mut self, column: usize) {
        covering_assert_simple!(
            !self.col_deleted(column),
            "cannot select deleted column {column}"
        );
        trace!("selecting column {column}");

        let sentinel = self.sentinel(Dimension::Column, column);
        let mut cell = self.cells[sentinel].links[Dimension::Column].next;
        while cell != sentinel {
            // Deleting the row unlinks `cell` from this ring but leaves its own links intact.
            let next = self.cells[cell].links[Dimension::Column].next;
            self.delete_row(self.cells[cell].index_in(Dimension::Row));
            cell = next;
        }

        covering_assert_eq_simple!(0, self.col_elem_count(column));
        self.delete_col(column);
    }

    pub fn delete_row(&mut self, row: usize) {
        self.delete_header(Dimension::Row, row);
    }

    pub fn delete_col(&mut self, column: usize) {
        self.delete_header(Dimension::Column, column);
    }

    pub(crate) fn restore_row(&mut self, row: usize) {
        self.restore_header(Dimension::Row, row);
    }

    pub(crate) fn restore_col(&mut self, column: usize) {
        self.restore_header(Dimension::Column, column);
    }

    /// Records a checkpoint to which [`SparseBooleanMatrix::restore`] returns.
    pub fn save(&mut self) {
        self.journal.new_checkpoint();
    }

    /// Undoes every deletion since the most recent [`SparseBooleanMatrix::save`] and removes that
    /// checkpoint.
    pub fn restore(&mut self) {
        let mut journal = std::mem::take(&mut self.journal);
        for HeaderRef { dimension, index } in journal.rollback() {
            match dimension {
                Dimension::Row => self.restore_row(index),
                Dimension::Column => self.restore_col(index),
            }
        }
        self.journal = journal;

        covering_assert_advanced!(self.is_consistent());
    }

    /// The number of checkpoints which have not been restored yet.
    pub fn num_checkpoints(&self) -> usize {
        self.journal.num_checkpoints()
    }

    /// Excludes the header and unlinks each of its cells from the ring of the other dimension.
    ///
    /// The ring of the header itself is left untouched.
    fn delete_header(&mut self, dimension: Dimension, index: usize) {
        self.headers[dimension].exclude(index);
        self.journal.record(HeaderRef { dimension, index });

        let other = dimension.other();
        let sentinel = self.sentinel(dimension, index);
        let mut cell = self.cells[sentinel].links[dimension].next;
        while cell != sentinel {
            self.unlink(cell, other);
            self.headers[other].decrement_count(self.cells[cell].index_in(other));
            cell = self.cells[cell].links[dimension].next;
        }
    }

    fn restore_header(&mut self, dimension: Dimension, index: usize) {
        self.headers[dimension].restore(index);

        let other = dimension.other();
        let sentinel = self.sentinel(dimension, index);
        let mut cell = self.cells[sentinel].links[dimension].next;
        while cell != sentinel {
            self.relink(cell, other);
            self.headers[other].increment_count(self.cells[cell].index_in(other));
            cell = self.cells[cell].links[dimension].next;
        }
    }

    fn unlink(&mut self, cell: CellId, dimension: Dimension) {
        let Link { previous, next } = self.cells[cell].links[dimension];
        self.cells[previous].links[dimension].next = next;
        self.cells[next].links[dimension].previous = previous;
    }

    /// Puts `cell` back between the neighbours it was unlinked from.
    fn relink(&mut self, cell: CellId, dimension: Dimension) {
        let Link { previous, next } = self.cells[cell].links[dimension];
        self.cells[previous].links[dimension].next = cell;
        self.cells[next].links[dimension].previous = cell;
    }

    fn sentinel(&self, dimension: Dimension, index: usize) -> CellId {
        self.headers[dimension].get(index).sentinel
    }

    pub(crate) fn header_list(&self, dimension: Dimension) -> &HeaderList {
        &self.headers[dimension]
    }

    pub(super) fn header_list_mut(&mut self, dimension: Dimension) -> &mut HeaderList {
        &mut self.headers[dimension]
    }

    /// The indices in the other dimension of the cells in the ring of `index`.
    pub(crate) fn positions(
        &self,
        dimension: Dimension,
        index: usize,
    ) -> impl Iterator<Item = usize> + '_ {
        let sentinel = self.sentinel(dimension, index);
        let other = dimension.other();
        std::iter::successors(Some(sentinel), move |&cell| {
            Some(self.cells[cell].links[dimension].next)
        })
        .skip(1)
        .take_while(move |&cell| cell != sentinel)
        .map(move |cell| self.cells[cell].index_in(other))
    }

    /// Checks every structural invariant of the matrix: the rings are symmetric, sorted and
    /// contain exactly the cells of which neither header is deleted (the rings of deleted headers
    /// keep their cells), the element counts match the rings, and the active lists contain
    /// exactly the non-deleted headers in ascending order.
    pub fn is_consistent(&self) -> bool {
        for dimension in [Dimension::Row, Dimension::Column] {
            let other = dimension.other();
            let list = &self.headers[dimension];

            let active = list.iter().collect::<Vec<_>>();
            if active.len() != list.num_active() || active.windows(2).any(|pair| pair[0] >= pair[1])
            {
                return false;
            }
            let expected_active = list
                .headers()
                .filter(|header| !header.deleted)
                .map(|header| header.index)
                .collect::<Vec<_>>();
            if active != expected_active {
                return false;
            }

            for header in list.headers() {
                let sentinel = header.sentinel;
                let mut count = 0;
                let mut last_position = None;
                let mut cell = sentinel;
                loop {
                    let Link { next, .. } = self.cells[cell].links[dimension];
                    if self.cells[next].links[dimension].previous != cell {
                        return false;
                    }
                    cell = next;
                    if cell == sentinel {
                        break;
                    }

                    let position = self.cells[cell].index_in(other);
                    if last_position.is_some_and(|last| last >= position) {
                        return false;
                    }
                    last_position = Some(position);
                    count += 1;

                    // The ring of an active header only holds cells of active headers, which
                    // are linked in the other dimension as well.
                    if !header.deleted {
                        if self.headers[other].get(position).deleted {
                            return false;
                        }
                        let Link { previous, next } = self.cells[cell].links[other];
                        if self.cells[previous].links[other].next != cell
                            || self.cells[next].links[other].previous != cell
                        {
                            return false;
                        }
                    }
                }
                if count != header.element_count {
                    return false;
                }
            }
        }

        // Every present entry of two active headers has to be reachable from both of them.
        let reachable = self
            .active_rows()
            .flat_map(|row| self.row_list(row).map(move |column| (row, column)))
            .filter(|&(_, column)| !self.col_deleted(column))
            .collect::<HashSet<_>>();
        let expected = self
            .cells
            .iter()
            .skip(self.num_rows() + self.num_columns())
            .map(|cell| {
                (
                    cell.index_in(Dimension::Row),
                    cell.index_in(Dimension::Column),
                )
            })
            .filter(|&(row, column)| !self.row_deleted(row) && !self.col_deleted(column))
            .collect::<HashSet<_>>();
        reachable == expected
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> Snapshot {
        let rings = |dimension: Dimension| {
            (0..self.headers[dimension].len())
                .map(|index| self.positions(dimension, index).collect::<Vec<_>>())
                .collect::<Vec<_>>()
        };
        let counts = |dimension: Dimension| {
            self.headers[dimension]
                .headers()
                .map(|header| (header.element_count, header.deleted))
                .collect::<Vec<_>>()
        };

        Snapshot {
            active_rows: self.active_rows().collect(),
            active_columns: self.active_columns().collect(),
            row_rings: rings(Dimension::Row),
            column_rings: rings(Dimension::Column),
            row_counts: counts(Dimension::Row),
            column_counts: counts(Dimension::Column),
        }
    }
}

/// Everything a query on the matrix can observe.
#[cfg(test)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Snapshot {
    active_rows: Vec<usize>,
    active_columns: Vec<usize>,
    row_rings: Vec<Vec<usize>>,
    column_rings: Vec<Vec<usize>>,
    row_counts: Vec<(usize, bool)>,
    column_counts: Vec<(usize, bool)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// rows: 0 -> {0, 2}, 1 -> {1, 2}, 2 -> {0, 3}
    fn small_matrix() -> SparseBooleanMatrix {
        SparseBooleanMatrix::new(3, 4, [(0, 0), (0, 2), (1, 1), (1, 2), (2, 0), (2, 3)])
    }

    #[test]
    fn rows_and_columns_are_traversed_in_ascending_order() {
        let matrix = small_matrix();

        assert_eq!(vec![0, 2], matrix.row_list(0).collect::<Vec<_>>());
        assert_eq!(vec![1, 2], matrix.row_list(1).collect::<Vec<_>>());
        assert_eq!(vec![0, 3], matrix.row_list(2).collect::<Vec<_>>());
        assert_eq!(vec![0, 2], matrix.col_list(0).collect::<Vec<_>>());
        assert_eq!(vec![0, 1], matrix.col_list(2).collect::<Vec<_>>());
        assert_eq!(2, matrix.col_elem_count(2));
        assert!(matrix.is_consistent());
    }

    #[test]
    fn unsorted_and_duplicate_elements_are_normalised() {
        let matrix = SparseBooleanMatrix::new(2, 3, [(1, 2), (0, 2), (1, 0), (0, 2), (1, 2)]);

        assert_eq!(vec![0, 2], matrix.row_list(1).collect::<Vec<_>>());
        assert_eq!(vec![0, 1], matrix.col_list(2).collect::<Vec<_>>());
        assert_eq!(2, matrix.row_elem_count(1));
        assert!(matrix.is_consistent());
    }

    #[test]
    fn empty_headers_are_not_active() {
        let matrix = SparseBooleanMatrix::new(3, 3, [(0, 0), (2, 0)]);

        assert_eq!(vec![0, 2], matrix.active_rows().collect::<Vec<_>>());
        assert_eq!(vec![0], matrix.active_columns().collect::<Vec<_>>());
        assert!(matrix.row_deleted(1));
        assert_eq!(0, matrix.row_list(1).count());
    }

    #[test]
    fn deleting_a_row_removes_it_from_the_columns() {
        let mut matrix = small_matrix();

        matrix.delete_row(0);

        assert_eq!(vec![2], matrix.col_list(0).collect::<Vec<_>>());
        assert_eq!(vec![1], matrix.col_list(2).collect::<Vec<_>>());
        assert_eq!(vec![0, 2], matrix.row_list(0).collect::<Vec<_>>());
        assert_eq!(vec![1, 2], matrix.active_rows().collect::<Vec<_>>());
        assert!(matrix.is_consistent());
    }

    #[test]
    fn selecting_a_column_deletes_the_rows_it_covers() {
        let mut matrix = small_matrix();

        matrix.select_col(2);

        assert_eq!(vec![2], matrix.active_rows().collect::<Vec<_>>());
        assert!(matrix.col_deleted(2));
        assert_eq!(0, matrix.col_elem_count(1));
        assert!(!matrix.col_deleted(1));
        assert_eq!(1, matrix.col_elem_count(0));
        assert!(matrix.is_consistent());
    }

    #[test]
    fn restore_undoes_everything_since_the_checkpoint() {
        let mut matrix = small_matrix();
        let initial = matrix.snapshot();

        matrix.save();
        matrix.delete_col(0);
        let after_first = matrix.snapshot();

        matrix.save();
        matrix.select_col(2);
        matrix.delete_row(2);
        matrix.delete_col(3);
        matrix.restore();
        assert_eq!(after_first, matrix.snapshot());

        matrix.restore();
        assert_eq!(initial, matrix.snapshot());
        assert_eq!(0, matrix.num_checkpoints());
    }

    #[test]
    fn add_element_activates_empty_headers() {
        let mut matrix = SparseBooleanMatrix::new(3, 3, [(0, 0)]);

        assert!(matrix.add_element(2, 1));
        assert!(!matrix.add_element(2, 1));

        assert_eq!(vec![0, 2], matrix.active_rows().collect::<Vec<_>>());
        assert_eq!(vec![0, 1], matrix.active_columns().collect::<Vec<_>>());
        assert!(matrix.is_consistent());
    }

    #[test]
    fn added_elements_are_merged_into_the_active_lists() {
        let mut matrix = SparseBooleanMatrix::new(5, 4, [(1, 1), (3, 3)]);

        let num_added = matrix.add_elements([(4, 0), (0, 2), (1, 1), (2, 2), (0, 0)]);

        assert_eq!(4, num_added);
        assert_eq!(vec![0, 1, 2, 3, 4], matrix.active_rows().collect::<Vec<_>>());
        assert_eq!(vec![0, 1, 2, 3], matrix.active_columns().collect::<Vec<_>>());
        assert_eq!(vec![0, 4], matrix.col_list(0).collect::<Vec<_>>());
        assert_eq!(vec![0, 2], matrix.row_list(0).collect::<Vec<_>>());
        assert!(matrix.is_consistent());
    }

    #[test]
    #[should_panic]
    fn elements_cannot_be_added_after_deletions() {
        let mut matrix = small_matrix();
        matrix.delete_row(0);

        let _ = matrix.add_elements([(0, 1)]);
    }

    #[test]
    fn verify_accepts_exactly_the_covers() {
        let matrix = small_matrix();

        assert!(matrix.verify(&[2, 3]));
        assert!(matrix.verify(&[0, 1]));
        assert!(matrix.verify(&[0, 2]));
        assert!(!matrix.verify(&[2]));
        assert!(!matrix.verify(&[]));
        assert_eq!(2, matrix.cost(&[2, 3]));
    }

    #[test]
    fn verify_ignores_deletions() {
        let mut matrix = small_matrix();
        matrix.select_col(3);

        assert!(!matrix.verify(&[2]));
        assert!(matrix.verify(&[2, 3]));
    }

    #[test]
    fn essential_columns_are_detected() {
        let mut matrix = small_matrix();
        assert!(!matrix.is_column_essential(3));

        matrix.delete_col(0);

        assert!(matrix.is_column_essential(3));
        assert!(!matrix.is_column_essential(1));
    }

    #[test]
    #[should_panic]
    fn selecting_a_deleted_column_is_a_precondition_violation() {
        let mut matrix = small_matrix();
        matrix.delete_col(1);
        matrix.select_col(1);
    }

    #[test]
    #[should_panic]
    fn out_of_range_elements_are_a_precondition_violation() {
        let _ = SparseBooleanMatrix::new(2, 2, [(0, 2)]);
    }

    #[test]
    #[should_panic]
    fn restore_without_save_is_a_precondition_violation() {
        let mut matrix = small_matrix();
        matrix.delete_row(0);
        matrix.restore();
    }
}
