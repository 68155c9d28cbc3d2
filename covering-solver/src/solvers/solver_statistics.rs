use crate::create_statistics_struct;

create_statistics_struct!(
    /// Statistics of a run of the [`BranchAndBound`](super::BranchAndBound) solver.
    SearchStatistics {
        /// The number of nodes of the search tree which were visited
        num_nodes: u64,
        /// The number of times the search branched on a column
        num_branches: u64,
        /// The number of nodes at which the lower bound reached the cost of the incumbent
        num_prunes: u64,
        /// The number of times a cheaper cover was found
        num_incumbents: u64,
        /// The number of columns selected by the reduction rather than by branching
        num_forced_columns: u64,
        /// The deepest level of the search tree which was reached
        peak_depth: u64,
        /// The time spent searching, in milliseconds
        time_spent_in_solver: u64,
});

create_statistics_struct!(
    /// Statistics of a run of the [`Greedy`](super::Greedy) solver.
    GreedyStatistics {
        /// The number of columns chosen by the selector
        num_selected_columns: u64,
        /// The number of columns selected by the reduction
        num_forced_columns: u64,
});
