use std::iter::Rev;
use std::vec::Drain;

use super::Dimension;
use crate::covering_assert_simple;

/// Refers to the header of a row or column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct HeaderRef {
    pub(crate) dimension: Dimension,
    pub(crate) index: usize,
}

/// The LIFO record of header deletions.
///
/// Checkpoints are stored as positions into the entries rather than as marker entries; a rollback
/// yields the headers deleted since the most recent checkpoint, most recent first.
#[derive(Clone, Debug, Default)]
pub(crate) struct Journal {
    /// At index i is the position where the entries after the i-th checkpoint start.
    checkpoints: Vec<usize>,
    entries: Vec<HeaderRef>,
}

impl Journal {
    pub(crate) fn new_checkpoint(&mut self) {
        self.checkpoints.push(self.entries.len());
    }

    pub(crate) fn num_checkpoints(&self) -> usize {
        self.checkpoints.len()
    }

    pub(crate) fn record(&mut self, header: HeaderRef) {
        self.entries.push(header);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.checkpoints.is_empty()
    }

    /// Removes the most recent checkpoint and returns the deletions recorded after it, in the
    /// reverse order in which they were recorded.
    pub(crate) fn rollback(&mut self) -> Rev<Drain<'_, HeaderRef>> {
        covering_assert_simple!(
            !self.checkpoints.is_empty(),
            "cannot restore the matrix without a saved checkpoint"
        );

        let start = self.checkpoints.pop().unwrap_or_default();
        self.entries.drain(start..).rev()
    }
}
