use enum_map::EnumMap;

use super::Dimension;
use crate::containers::StorageKey;

/// The position stored in the dimension a sentinel cell does not belong to.
pub(crate) const NO_POSITION: u32 = u32::MAX;

/// Identifies a [`Cell`] in the arena of a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct CellId(u32);

impl CellId {
    /// Used by nodes which do not own a ring, such as the head of an active-header list.
    pub(crate) const DETACHED: CellId = CellId(u32::MAX);
}

impl StorageKey for CellId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        CellId(u32::try_from(index).expect("the number of cells fits in a u32"))
    }
}

/// The predecessor and successor of a cell in one of its rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Link {
    pub(crate) previous: CellId,
    pub(crate) next: CellId,
}

/// A single present entry of the matrix, or the sentinel of a row or column ring.
///
/// `position[Row]` is the row of the cell and `position[Column]` its column. `links[Row]` are the
/// links within the row ring and `links[Column]` within the column ring.
#[derive(Clone, Debug)]
pub(crate) struct Cell {
    pub(crate) position: EnumMap<Dimension, u32>,
    pub(crate) links: EnumMap<Dimension, Link>,
}

impl Cell {
    pub(crate) fn new(id: CellId, row: usize, column: usize) -> Self {
        Cell {
            position: EnumMap::from_array([to_position(row), to_position(column)]),
            links: EnumMap::from_fn(|_| Link {
                previous: id,
                next: id,
            }),
        }
    }

    /// Creates the sentinel of the ring of header `index` in `dimension`; both of its rings only
    /// contain itself.
    pub(crate) fn sentinel(id: CellId, dimension: Dimension, index: usize) -> Self {
        let mut position = EnumMap::from_array([NO_POSITION, NO_POSITION]);
        position[dimension] = to_position(index);
        Cell {
            position,
            links: EnumMap::from_fn(|_| Link {
                previous: id,
                next: id,
            }),
        }
    }

    pub(crate) fn index_in(&self, dimension: Dimension) -> usize {
        self.position[dimension] as usize
    }
}

fn to_position(index: usize) -> u32 {
    let position = u32::try_from(index).expect("matrix indices fit in a u32");
    assert!(position != NO_POSITION, "matrix index {index} is reserved");
    position
}
