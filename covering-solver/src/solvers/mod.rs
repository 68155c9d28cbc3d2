//! The greedy and exact covering solvers and the [`solve`] entry point which configures them from
//! [`SolveOptions`].
mod exact;
mod greedy;
mod options;
mod solver_statistics;

pub use exact::BranchAndBound;
pub use greedy::Greedy;
use log::debug;
use log::warn;
pub use options::Algorithm;
pub use options::SolveOptions;
pub use solver_statistics::GreedyStatistics;
pub use solver_statistics::SearchStatistics;

use crate::basic_types::ConfigurationError;
use crate::basic_types::Cover;
use crate::basic_types::CoverResult;
use crate::covering_assert_simple;
use crate::matrix::SparseBooleanMatrix;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// Finds a cover of `matrix` with the algorithm and strategies given by `options`.
///
/// The options are checked before any work is done. The matrix is left as it was before the call
/// and the returned cover is valid for it. If statistic logging is configured, the statistics of
/// the run are logged afterwards.
///
/// ```
/// # use covering_solver::matrix::SparseBooleanMatrix;
/// # use covering_solver::solvers::solve;
/// # use covering_solver::solvers::SolveOptions;
/// let mut matrix = SparseBooleanMatrix::new(2, 3, [(0, 0), (0, 2), (1, 1), (1, 2)]);
///
/// let result = solve(&mut matrix, &SolveOptions::default()).unwrap();
///
/// assert!(result.is_optimal());
/// assert_eq!(&[2], result.columns());
/// ```
pub fn solve(
    matrix: &mut SparseBooleanMatrix,
    options: &SolveOptions,
) -> Result<CoverResult, ConfigurationError> {
    options.validate()?;
    if options.partition {
        warn!("partitioning into independent blocks is not supported, solving the matrix as a whole");
    }
    debug!(
        "solving a {}x{} matrix with the {} algorithm",
        matrix.num_active_rows(),
        matrix.num_active_columns(),
        options.algorithm
    );

    let result = match options.algorithm {
        Algorithm::Greedy => {
            let mut greedy = Greedy::new(options.selector.create(), options.dominance);
            matrix.save();
            let columns = greedy.solve(matrix);
            matrix.restore();
            log_statistics(greedy.statistics(), options.algorithm);
            CoverResult::Feasible(Cover::new(matrix, columns))
        }
        Algorithm::Exact => {
            let mut solver = BranchAndBound::new(options)?;
            let result = solver.solve(matrix, options.termination());
            log_statistics(solver.statistics(), options.algorithm);
            result
        }
    };

    covering_assert_simple!(
        matrix.verify(result.columns()),
        "the cover {} does not cover the matrix",
        result.cover()
    );
    Ok(result)
}

fn log_statistics(statistics: impl Statistic, algorithm: Algorithm) {
    if should_log_statistics() {
        statistics.log(StatisticLogger::new([algorithm]));
        log_statistic_postfix();
    }
}
