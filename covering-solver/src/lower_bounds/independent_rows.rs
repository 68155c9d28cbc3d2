use super::conflict_graph::ConflictGraph;
use super::LowerBound;
use crate::matrix::SparseBooleanMatrix;

/// Greedily builds a set of pairwise independent rows (no column covers two of them) and sums the
/// cost of the cheapest column of each row in the set.
///
/// The row of minimum remaining degree in the conflict graph is added to the set, after which it
/// and its neighbours are removed from the graph; this repeats until the graph is empty. The row
/// of minimum degree is found by a linear scan; see [`IndependentRowsHeap`] for a variant which
/// keeps the rows in a heap.
///
/// [`IndependentRowsHeap`]: super::IndependentRowsHeap
#[derive(Debug, Default)]
pub struct IndependentRows {
    graph: ConflictGraph,
    degrees: Vec<usize>,
    removed: Vec<bool>,
    remaining: Vec<usize>,
    newly_removed: Vec<usize>,
}

impl LowerBound for IndependentRows {
    fn calculate(&mut self, matrix: &SparseBooleanMatrix) -> u64 {
        self.graph.rebuild(matrix);
        let num_vertices = self.graph.num_vertices();

        self.degrees.clear();
        self.degrees
            .extend((0..num_vertices).map(|id| self.graph.degree(id)));
        self.removed.clear();
        self.removed.resize(num_vertices, false);
        self.remaining.clear();
        self.remaining.extend(0..num_vertices);

        let mut bound = 0;
        loop {
            let removed = &self.removed;
            self.remaining.retain(|&id| !removed[id]);
            let degrees = &self.degrees;
            let Some(&chosen) = self.remaining.iter().min_by_key(|&&id| degrees[id]) else {
                break;
            };
            bound += self.graph.cheapest_costs[chosen];

            self.newly_removed.clear();
            self.newly_removed.push(chosen);
            self.removed[chosen] = true;
            for &neighbour in &self.graph.neighbours[chosen] {
                if !self.removed[neighbour] {
                    self.removed[neighbour] = true;
                    self.newly_removed.push(neighbour);
                }
            }

            for &id in &self.newly_removed {
                for &neighbour in &self.graph.neighbours[id] {
                    if !self.removed[neighbour] {
                        self.degrees[neighbour] -= 1;
                    }
                }
            }
        }

        bound
    }
}
