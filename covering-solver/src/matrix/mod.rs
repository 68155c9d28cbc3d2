//! The sparse boolean matrix at the core of the covering engine.
//!
//! Only the entries which are present are materialised, as [`Cell`]s in an arena owned by the
//! matrix. Every cell is part of two circular rings (one for its row and one for its column) which
//! are terminated by a sentinel cell owned by the corresponding header. Deleting a row unlinks its
//! cells from their column rings while leaving the row ring itself untouched; this is what allows
//! [`SparseBooleanMatrix::restore`] to undo deletions exactly, in the style of dancing links.
mod cell;
mod header;
mod journal;
mod marks;
mod reduction;
mod sparse_boolean_matrix;

pub(crate) use cell::*;
use enum_map::Enum;
pub(crate) use header::*;
pub(crate) use journal::*;
pub(crate) use marks::*;
pub use reduction::DominanceComparator;
pub use reduction::DominanceKind;
pub use sparse_boolean_matrix::SparseBooleanMatrix;

/// The two dimensions of the matrix; headers, rings and marks exist once per dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enum)]
pub enum Dimension {
    Row,
    Column,
}

impl Dimension {
    /// The dimension which is not `self`.
    pub fn other(self) -> Dimension {
        match self {
            Dimension::Row => Dimension::Column,
            Dimension::Column => Dimension::Row,
        }
    }
}
