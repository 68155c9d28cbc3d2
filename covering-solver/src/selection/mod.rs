//! Strategies for choosing the column which the greedy solver selects next, or on which the exact
//! solver branches.
mod cost_sensitive;
mod naive;
mod tie_breaking;
mod weighted;

use std::fmt::Debug;
use std::fmt::Display;
use std::str::FromStr;

pub use cost_sensitive::CostSensitive;
pub use naive::Naive;
pub use tie_breaking::Direction;
pub use tie_breaking::InOrderTieBreaker;
pub use weighted::Weighted;

use crate::basic_types::ConfigurationError;
use crate::matrix::SparseBooleanMatrix;

/// Chooses an active column of a matrix.
pub trait ColumnSelector: Debug {
    /// Returns an active column with at least one element, or [`None`] if there is no such
    /// column. Only active columns are ever returned.
    fn select_column(&mut self, matrix: &SparseBooleanMatrix) -> Option<usize>;
}

impl<T: ColumnSelector + ?Sized> ColumnSelector for Box<T> {
    fn select_column(&mut self, matrix: &SparseBooleanMatrix) -> Option<usize> {
        (**self).select_column(matrix)
    }
}

/// The active columns which cover at least one row; these are the candidates of every selector.
pub(crate) fn candidate_columns(matrix: &SparseBooleanMatrix) -> impl Iterator<Item = usize> + '_ {
    matrix
        .active_columns()
        .filter(|&column| matrix.col_elem_count(column) > 0)
}

/// Identifies one of the built-in selectors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SelectorKind {
    /// See [`Naive`].
    Naive,
    /// See [`Weighted`].
    #[default]
    Simple,
    /// See [`CostSensitive`].
    Cs,
}

impl SelectorKind {
    pub fn create(self) -> Box<dyn ColumnSelector> {
        match self {
            SelectorKind::Naive => Box::new(Naive),
            SelectorKind::Simple => Box::new(Weighted::default()),
            SelectorKind::Cs => Box::new(CostSensitive::default()),
        }
    }
}

impl Display for SelectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectorKind::Naive => write!(f, "naive"),
            SelectorKind::Simple => write!(f, "simple"),
            SelectorKind::Cs => write!(f, "cs"),
        }
    }
}

impl FromStr for SelectorKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(SelectorKind::Naive),
            "simple" => Ok(SelectorKind::Simple),
            "cs" => Ok(SelectorKind::Cs),
            _ => Err(ConfigurationError::UnknownSelector(s.to_owned())),
        }
    }
}
