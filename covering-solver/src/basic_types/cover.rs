use std::fmt::Display;

use itertools::Itertools;

use crate::matrix::SparseBooleanMatrix;

/// A set of selected columns together with their total cost.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cover {
    columns: Vec<usize>,
    cost: u64,
}

impl Cover {
    /// Creates a cover from the given columns, taking the costs from `matrix`.
    pub fn new(matrix: &SparseBooleanMatrix, columns: Vec<usize>) -> Self {
        let cost = matrix.cost(&columns);
        Cover { columns, cost }
    }

    /// The selected columns, in the order in which they were selected.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn into_columns(self) -> Vec<usize> {
        self.columns
    }
}

impl Display for Cover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cost {} [{}]", self.cost, self.columns.iter().join(", "))
    }
}

/// The outcome of solving a covering problem.
///
/// A solve always produces a cover which is valid for the matrix; the variant indicates whether
/// it was proven to be of minimum cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoverResult {
    /// The search space was exhausted; no cover of lower cost exists.
    Optimal(Cover),
    /// A valid cover for which no optimality claim is made, e.g. produced by the greedy solver or
    /// by the exact solver when its termination condition triggered.
    Feasible(Cover),
}

impl CoverResult {
    pub fn cover(&self) -> &Cover {
        match self {
            CoverResult::Optimal(cover) | CoverResult::Feasible(cover) => cover,
        }
    }

    pub fn into_cover(self) -> Cover {
        match self {
            CoverResult::Optimal(cover) | CoverResult::Feasible(cover) => cover,
        }
    }

    pub fn cost(&self) -> u64 {
        self.cover().cost()
    }

    pub fn columns(&self) -> &[usize] {
        self.cover().columns()
    }

    pub fn is_optimal(&self) -> bool {
        matches!(self, CoverResult::Optimal(_))
    }
}
