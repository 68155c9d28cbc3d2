use thiserror::Error;

#[cfg(doc)]
use crate::solvers::SolveOptions;

/// Errors related to building [`SolveOptions`] from user-provided names.
///
/// These are reported before any computation begins; an unknown name is never silently replaced
/// by a default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The algorithm family is neither `exact` nor `greedy`.
    #[error("Unknown algorithm '{0}', expected one of: exact, greedy")]
    UnknownAlgorithm(String),
    /// The name does not identify a lower-bound estimator.
    #[error("Unknown lower bound '{0}', expected one of: split, mis, mis-heap")]
    UnknownLowerBound(String),
    /// The name does not identify a column selector.
    #[error("Unknown column selector '{0}', expected one of: naive, simple, cs")]
    UnknownSelector(String),
    /// The name does not identify a column dominance rule.
    #[error("Unknown dominance rule '{0}', expected one of: cost-aware, ignore-cost")]
    UnknownDominance(String),
    /// A lower-bound list was given but it did not contain any estimator.
    #[error("The list of lower bounds is empty")]
    EmptyLowerBoundList,
}
