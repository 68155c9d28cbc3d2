//! Admissible estimates of the cost which is still needed to cover the active rows of a matrix.
//!
//! The exact solver prunes a node when the cost of its partial solution plus such an estimate
//! reaches the cost of the best known cover. An estimate has to be a lower bound: it may never
//! exceed the cost of a minimum cover of the active rows.
mod column_splitting;
mod conflict_graph;
mod independent_rows;
mod independent_rows_heap;
mod maximum;

use std::fmt::Debug;
use std::fmt::Display;
use std::str::FromStr;

pub use column_splitting::ColumnSplitting;
pub use independent_rows::IndependentRows;
pub use independent_rows_heap::IndependentRowsHeap;
pub use maximum::MaximumOf;

use crate::basic_types::ConfigurationError;
use crate::matrix::SparseBooleanMatrix;

/// A lower bound on the cost needed to cover the active rows of a matrix.
///
/// Implementations may keep scratch buffers between calls but may not modify the matrix.
pub trait LowerBound: Debug {
    fn calculate(&mut self, matrix: &SparseBooleanMatrix) -> u64;
}

impl<T: LowerBound + ?Sized> LowerBound for Box<T> {
    fn calculate(&mut self, matrix: &SparseBooleanMatrix) -> u64 {
        (**self).calculate(matrix)
    }
}

/// Identifies one of the built-in lower bounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LowerBoundKind {
    /// See [`ColumnSplitting`].
    #[default]
    Split,
    /// See [`IndependentRows`].
    Mis,
    /// See [`IndependentRowsHeap`].
    MisHeap,
}

impl LowerBoundKind {
    pub fn create(self) -> Box<dyn LowerBound> {
        match self {
            LowerBoundKind::Split => Box::new(ColumnSplitting),
            LowerBoundKind::Mis => Box::new(IndependentRows::default()),
            LowerBoundKind::MisHeap => Box::new(IndependentRowsHeap::default()),
        }
    }
}

impl Display for LowerBoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LowerBoundKind::Split => write!(f, "split"),
            LowerBoundKind::Mis => write!(f, "mis"),
            LowerBoundKind::MisHeap => write!(f, "mis-heap"),
        }
    }
}

impl FromStr for LowerBoundKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "split" => Ok(LowerBoundKind::Split),
            "mis" => Ok(LowerBoundKind::Mis),
            "mis-heap" => Ok(LowerBoundKind::MisHeap),
            _ => Err(ConfigurationError::UnknownLowerBound(s.to_owned())),
        }
    }
}

/// Creates the lower bound for the given kinds; several kinds are combined with [`MaximumOf`].
pub fn create_lower_bound(kinds: &[LowerBoundKind]) -> Box<dyn LowerBound> {
    match kinds {
        [kind] => kind.create(),
        _ => Box::new(MaximumOf::new(
            kinds.iter().map(|kind| kind.create()).collect(),
        )),
    }
}
