use super::conflict_graph::ConflictGraph;
use super::LowerBound;
use crate::containers::KeyValueHeap;
use crate::matrix::SparseBooleanMatrix;

/// The independent-row bound of [`IndependentRows`] with the rows of the conflict graph kept in a
/// heap keyed on their remaining degree, so that the row of minimum degree is found in O(log n).
///
/// The heap is a max-heap, so rows are stored with their negated degree and a degree decrement is
/// an increment by one. Ties between rows of equal degree may be broken differently than by the
/// linear scan, so the two variants can return different (but equally valid) bounds.
///
/// [`IndependentRows`]: super::IndependentRows
#[derive(Debug, Default)]
pub struct IndependentRowsHeap {
    graph: ConflictGraph,
    heap: KeyValueHeap<usize, i64>,
    newly_removed: Vec<usize>,
}

impl LowerBound for IndependentRowsHeap {
    fn calculate(&mut self, matrix: &SparseBooleanMatrix) -> u64 {
        self.graph.rebuild(matrix);

        self.heap.clear();
        for id in 0..self.graph.num_vertices() {
            self.heap.grow(id, -(self.graph.degree(id) as i64));
        }

        let mut bound = 0;
        while let Some(chosen) = self.heap.pop_max() {
            bound += self.graph.cheapest_costs[chosen];

            self.newly_removed.clear();
            self.newly_removed.push(chosen);
            for &neighbour in &self.graph.neighbours[chosen] {
                if self.heap.is_key_present(neighbour) {
                    self.heap.delete_key(neighbour);
                    self.newly_removed.push(neighbour);
                }
            }

            for &id in &self.newly_removed {
                for &neighbour in &self.graph.neighbours[id] {
                    if self.heap.is_key_present(neighbour) {
                        self.heap.increment(neighbour, 1);
                    }
                }
            }
        }

        bound
    }
}
