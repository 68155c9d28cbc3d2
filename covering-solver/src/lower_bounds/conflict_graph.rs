use crate::covering_assert_moderate;
use crate::matrix::SparseBooleanMatrix;

/// The conflict graph of the active rows: two rows are adjacent when some active column covers
/// both of them.
///
/// Rows are renumbered densely in ascending order; `rows[id]` is the matrix row of dense row `id`.
/// A set of pairwise non-adjacent rows needs a distinct column for each of its rows, so the sum of
/// their cheapest columns is a lower bound on the cost of a cover.
#[derive(Debug, Default)]
pub(super) struct ConflictGraph {
    pub(super) rows: Vec<usize>,
    pub(super) neighbours: Vec<Vec<usize>>,
    /// The cost of the cheapest active column of each row.
    pub(super) cheapest_costs: Vec<u64>,
    /// Maps matrix rows to dense ids; only valid for active rows.
    dense_ids: Vec<usize>,
    /// `last_seen[id]` is the last row for which `id` was added as a neighbour.
    last_seen: Vec<usize>,
}

impl ConflictGraph {
    /// Rebuilds the graph for the current state of `matrix`, reusing the allocated buffers.
    pub(super) fn rebuild(&mut self, matrix: &SparseBooleanMatrix) {
        self.rows.clear();
        self.rows.extend(matrix.active_rows());
        let num_vertices = self.rows.len();

        self.dense_ids.clear();
        self.dense_ids.resize(matrix.num_rows(), usize::MAX);
        for (id, &row) in self.rows.iter().enumerate() {
            self.dense_ids[row] = id;
        }

        self.last_seen.clear();
        self.last_seen.resize(num_vertices, usize::MAX);
        self.neighbours.iter_mut().for_each(Vec::clear);
        self.neighbours.resize_with(num_vertices, Vec::new);
        self.cheapest_costs.clear();

        for (id, &row) in self.rows.iter().enumerate() {
            for column in matrix.row_list(row) {
                for other_row in matrix.col_list(column) {
                    let other = self.dense_ids[other_row];
                    covering_assert_moderate!(
                        other != usize::MAX,
                        "active column {column} contains deleted row {other_row}"
                    );
                    if other != id && self.last_seen[other] != id {
                        self.last_seen[other] = id;
                        self.neighbours[id].push(other);
                    }
                }
            }

            self.cheapest_costs.push(
                matrix
                    .row_list(row)
                    .map(|column| matrix.col_cost(column))
                    .min()
                    .unwrap_or(0),
            );
        }
    }

    pub(super) fn num_vertices(&self) -> usize {
        self.rows.len()
    }

    pub(super) fn degree(&self, id: usize) -> usize {
        self.neighbours[id].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_sharing_a_column_are_adjacent_once() {
        // rows 0 and 1 share two columns, row 2 only shares column 2 with row 1
        let matrix = SparseBooleanMatrix::new(
            3,
            3,
            [(0, 0), (0, 1), (1, 0), (1, 1), (1, 2), (2, 2)],
        );

        let mut graph = ConflictGraph::default();
        graph.rebuild(&matrix);

        assert_eq!(vec![0, 1, 2], graph.rows);
        assert_eq!(vec![1], graph.neighbours[0]);
        assert_eq!(2, graph.degree(1));
        assert_eq!(vec![1], graph.neighbours[2]);
    }

    #[test]
    fn deleted_rows_are_not_vertices() {
        let mut matrix = SparseBooleanMatrix::with_costs(
            3,
            vec![5, 2],
            [(0, 0), (1, 0), (1, 1), (2, 1)],
        );
        matrix.delete_row(1);

        let mut graph = ConflictGraph::default();
        graph.rebuild(&matrix);

        assert_eq!(vec![0, 2], graph.rows);
        assert_eq!(0, graph.degree(0));
        assert_eq!(0, graph.degree(1));
        assert_eq!(vec![5, 2], graph.cheapest_costs);
    }
}
