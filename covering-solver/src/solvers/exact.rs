use std::time::Instant;

use log::debug;
use log::trace;

use super::Greedy;
use super::SearchStatistics;
use super::SolveOptions;
use crate::basic_types::ConfigurationError;
use crate::basic_types::Cover;
use crate::basic_types::CoverResult;
use crate::covering_assert_moderate;
use crate::lower_bounds::LowerBound;
use crate::matrix::DominanceKind;
use crate::matrix::SparseBooleanMatrix;
use crate::selection::ColumnSelector;
use crate::termination::TerminationCondition;

/// Finds a cover of minimum cost by branch-and-bound.
///
/// At every node of the search tree the matrix is reduced to a fixpoint and a lower bound on the
/// cost of covering the remaining rows is computed. The node is pruned when the lower bound plus
/// the cost of the columns selected so far reaches the cost of the best cover found so far (the
/// incumbent). Otherwise the search branches on a column chosen by the selector: first the column
/// is selected, then (unless the incumbent already rules it out) the column is rejected, i.e.
/// deleted without being selected.
#[derive(Debug)]
pub struct BranchAndBound {
    lower_bound: Box<dyn LowerBound>,
    selector: Box<dyn ColumnSelector>,
    dominance: DominanceKind,
    /// Provides the initial incumbent and the cover of last resort.
    greedy: Greedy,
    warm_start: bool,
    incumbent: Option<Vec<usize>>,
    incumbent_cost: u64,
    stopped: bool,
    deleted_cols: Vec<usize>,
    statistics: SearchStatistics,
}

impl BranchAndBound {
    pub fn new(options: &SolveOptions) -> Result<Self, ConfigurationError> {
        Ok(BranchAndBound {
            lower_bound: options.create_lower_bound()?,
            selector: options.selector.create(),
            dominance: options.dominance,
            greedy: Greedy::new(options.selector.create(), options.dominance),
            warm_start: options.warm_start,
            incumbent: None,
            incumbent_cost: u64::MAX,
            stopped: false,
            deleted_cols: vec![],
            statistics: SearchStatistics::default(),
        })
    }

    pub fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    /// Searches for a minimum cover of `matrix` until the search space is exhausted or
    /// `termination` triggers.
    ///
    /// The matrix is restored to its state before the call. If the search is stopped before any
    /// cover was found, the greedy solver provides one, so a valid cover is always returned.
    ///
    /// Every call starts from scratch; the incumbent and statistics of earlier calls are discarded.
    pub fn solve(
        &mut self,
        matrix: &mut SparseBooleanMatrix,
        mut termination: impl TerminationCondition,
    ) -> CoverResult {
        let started_at = Instant::now();
        self.incumbent = None;
        self.incumbent_cost = u64::MAX;
        self.stopped = false;
        self.statistics = SearchStatistics::default();

        if self.warm_start {
            let columns = self.solve_greedily(matrix);
            self.update_incumbent(matrix.cost(&columns), &columns);
        }

        matrix.save();
        let mut partial = vec![];
        let _ = self.explore(matrix, &mut partial, 0, 0, &mut termination);
        matrix.restore();

        self.statistics.time_spent_in_solver =
            u64::try_from(started_at.elapsed().as_millis()).unwrap_or(u64::MAX);

        let incumbent = match self.incumbent.take() {
            Some(incumbent) => incumbent,
            None => {
                debug!("search stopped without a cover, falling back to the greedy solver");
                self.solve_greedily(matrix)
            }
        };

        let cover = Cover::new(matrix, incumbent);
        if self.stopped {
            debug!("search stopped with a cover of {}", cover.cost());
            CoverResult::Feasible(cover)
        } else {
            debug!("proved a cover of {} to be optimal", cover.cost());
            CoverResult::Optimal(cover)
        }
    }

    fn solve_greedily(&mut self, matrix: &mut SparseBooleanMatrix) -> Vec<usize> {
        matrix.save();
        let columns = self.greedy.solve(matrix);
        matrix.restore();
        columns
    }

    /// Explores the subtree rooted at the current state of `matrix`, in which the columns of
    /// `partial` are already selected and `lower_bound` is a known bound on the cost of any cover
    /// in the subtree. Returns whether a new incumbent was found in the subtree.
    ///
    /// The reductions made at this node are not undone; the caller brackets the call with a
    /// checkpoint. On return `partial` is as it was on entry.
    fn explore(
        &mut self,
        matrix: &mut SparseBooleanMatrix,
        partial: &mut Vec<usize>,
        lower_bound: u64,
        depth: u64,
        termination: &mut impl TerminationCondition,
    ) -> bool {
        if termination.should_stop() {
            self.stopped = true;
            return false;
        }
        self.statistics.num_nodes += 1;
        self.statistics.peak_depth = self.statistics.peak_depth.max(depth);

        let num_selected = partial.len();
        matrix.reduce_loop(partial, &mut self.deleted_cols, &self.dominance);
        self.deleted_cols.clear();
        self.statistics.num_forced_columns += (partial.len() - num_selected) as u64;

        let partial_cost = matrix.cost(partial);
        let lower_bound = lower_bound.max(self.lower_bound.calculate(matrix) + partial_cost);
        if lower_bound >= self.incumbent_cost {
            trace!("pruning at depth {depth} with bound {lower_bound}");
            self.statistics.num_prunes += 1;
            partial.truncate(num_selected);
            return false;
        }

        if matrix.num_active_rows() == 0 {
            self.update_incumbent(partial_cost, partial);
            partial.truncate(num_selected);
            return true;
        }

        let Some(column) = self.selector.select_column(matrix) else {
            partial.truncate(num_selected);
            return false;
        };
        termination.branch_has_been_made();
        self.statistics.num_branches += 1;

        trace!("branching on column {column} at depth {depth}");
        matrix.save();
        matrix.select_col(column);
        partial.push(column);
        let mut found = self.explore(matrix, partial, lower_bound, depth + 1, termination);
        let _ = partial.pop();
        matrix.restore();

        // The node is reduced to a fixpoint, so no row depends on `column` alone.
        covering_assert_moderate!(!matrix.is_column_essential(column));
        if !self.stopped && lower_bound < self.incumbent_cost {
            trace!("rejecting column {column} at depth {depth}");
            matrix.save();
            matrix.delete_col(column);
            found |= self.explore(matrix, partial, lower_bound, depth + 1, termination);
            matrix.restore();
        }

        partial.truncate(num_selected);
        found
    }

    fn update_incumbent(&mut self, cost: u64, columns: &[usize]) {
        if cost < self.incumbent_cost {
            debug!("new incumbent with cost {cost}");
            self.statistics.num_incumbents += 1;
            self.incumbent_cost = cost;
            self.incumbent = Some(columns.to_vec());
        }
    }
}
