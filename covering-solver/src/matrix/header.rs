use super::CellId;
use super::Dimension;
use crate::covering_assert_simple;

/// The header of a single row or column.
///
/// Besides the bookkeeping of its ring (the sentinel and the number of cells in it), a header is a
/// node in the active-header list of its dimension. An excluded header keeps its `previous` and
/// `next` links, which is what allows it to be restored in O(1).
#[derive(Clone, Debug)]
pub(crate) struct Header {
    pub(crate) index: usize,
    /// The number of cells reachable from `sentinel`.
    pub(crate) element_count: usize,
    pub(crate) deleted: bool,
    /// Set whenever `element_count` changes or the header is restored; the row dominance check
    /// clears it once the row has been compared in its current state.
    pub(crate) dirty: bool,
    pub(crate) sentinel: CellId,
    previous: usize,
    next: usize,
}

/// The headers of one dimension together with the doubly-linked list of the active ones.
///
/// The list is ordered by header index and terminated by a head node stored after the last
/// header, so `headers[len]` is never a real row or column.
#[derive(Clone, Debug)]
pub(crate) struct HeaderList {
    dimension: Dimension,
    headers: Vec<Header>,
    num_active: usize,
}

impl HeaderList {
    /// Creates a list with one header per sentinel; all headers start out excluded.
    pub(crate) fn new(dimension: Dimension, sentinels: impl IntoIterator<Item = CellId>) -> Self {
        let mut headers = sentinels
            .into_iter()
            .enumerate()
            .map(|(index, sentinel)| Header {
                index,
                element_count: 0,
                deleted: true,
                dirty: true,
                sentinel,
                previous: 0,
                next: 0,
            })
            .collect::<Vec<_>>();

        let head = headers.len();
        headers.push(Header {
            index: head,
            element_count: 0,
            deleted: false,
            dirty: false,
            sentinel: CellId::DETACHED,
            previous: head,
            next: head,
        });
        for header in headers.iter_mut().take(head) {
            header.previous = head;
            header.next = head;
        }

        HeaderList {
            dimension,
            headers,
            num_active: 0,
        }
    }

    /// The number of headers (active or not).
    pub(crate) fn len(&self) -> usize {
        self.headers.len() - 1
    }

    pub(crate) fn num_active(&self) -> usize {
        self.num_active
    }

    fn head(&self) -> usize {
        self.headers.len() - 1
    }

    pub(crate) fn get(&self, index: usize) -> &Header {
        covering_assert_simple!(
            index < self.len(),
            "{:?} index {index} is out of range for a matrix with {} {:?}s",
            self.dimension,
            self.len(),
            self.dimension,
        );
        &self.headers[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut Header {
        covering_assert_simple!(
            index < self.len(),
            "{:?} index {index} is out of range for a matrix with {} {:?}s",
            self.dimension,
            self.len(),
            self.dimension,
        );
        &mut self.headers[index]
    }

    pub(crate) fn increment_count(&mut self, index: usize) {
        let header = &mut self.headers[index];
        header.element_count += 1;
        header.dirty = true;
    }

    pub(crate) fn decrement_count(&mut self, index: usize) {
        let header = &mut self.headers[index];
        covering_assert_simple!(header.element_count > 0);
        header.element_count -= 1;
        header.dirty = true;
    }

    /// Links the given headers, which have to be in ascending order, as the active list. The list
    /// has to be empty.
    pub(crate) fn initialise(&mut self, active: impl IntoIterator<Item = usize>) {
        covering_assert_simple!(self.num_active == 0, "the active list is already initialised");

        let head = self.head();
        let mut last = head;
        for index in active {
            covering_assert_simple!(
                last == head || last < index,
                "active headers have to be given in ascending order"
            );
            let header = self.get_mut(index);
            header.deleted = false;
            header.previous = last;
            header.next = head;
            self.headers[last].next = index;
            last = index;
            self.num_active += 1;
        }
        self.headers[head].previous = last;
    }

    /// Inserts an excluded header into the active list at the position given by its index.
    ///
    /// The search starts at the tail of the list since headers are usually added in ascending
    /// order.
    pub(crate) fn insert(&mut self, index: usize) {
        covering_assert_simple!(self.get(index).deleted, "{index} is already active");

        let head = self.head();
        let mut previous = self.headers[head].previous;
        while previous != head && previous > index {
            previous = self.headers[previous].previous;
        }
        self.link_after(previous, index);
    }

    /// Unlinks an active header from the list and marks it as deleted.
    pub(crate) fn exclude(&mut self, index: usize) {
        covering_assert_simple!(
            !self.get(index).deleted,
            "{:?} {index} is already deleted",
            self.dimension
        );

        let Header { previous, next, .. } = self.headers[index];
        self.headers[previous].next = next;
        self.headers[next].previous = previous;
        self.headers[index].deleted = true;
        self.num_active -= 1;
    }

    /// Relinks an excluded header using the links it had when it was excluded. Headers have to be
    /// restored in the reverse order of their exclusion.
    pub(crate) fn restore(&mut self, index: usize) {
        covering_assert_simple!(
            self.get(index).deleted,
            "{:?} {index} is not deleted",
            self.dimension
        );

        let Header { previous, next, .. } = self.headers[index];
        covering_assert_simple!(
            self.headers[previous].next == next && self.headers[next].previous == previous,
            "{:?} {index} is restored out of order",
            self.dimension
        );
        self.headers[previous].next = index;
        self.headers[next].previous = index;
        let header = &mut self.headers[index];
        header.deleted = false;
        header.dirty = true;
        self.num_active += 1;
    }

    /// Merges the active headers of `other` into this list, keeping the list ordered.
    ///
    /// Both lists have to describe the same dimension and size, and the active headers of `other`
    /// have to be excluded in `self`. Only the list links are merged; the headers of `self` keep
    /// their element counts and sentinels.
    pub(crate) fn merge(&mut self, other: &HeaderList) {
        covering_assert_simple!(self.dimension == other.dimension && self.len() == other.len());

        let head = self.head();
        let mut cursor = head;
        for index in other.iter() {
            covering_assert_simple!(
                self.get(index).deleted,
                "{:?} {index} is active in both lists",
                self.dimension
            );
            while self.headers[cursor].next != head && self.headers[cursor].next < index {
                cursor = self.headers[cursor].next;
            }
            self.link_after(cursor, index);
            cursor = index;
        }
    }

    fn link_after(&mut self, previous: usize, index: usize) {
        let next = self.headers[previous].next;
        let header = &mut self.headers[index];
        header.previous = previous;
        header.next = next;
        header.deleted = false;
        header.dirty = true;
        self.headers[previous].next = index;
        self.headers[next].previous = index;
        self.num_active += 1;
    }

    pub(crate) fn first(&self) -> Option<usize> {
        self.next_of(self.head())
    }

    /// The successor of `index` in the active list.
    ///
    /// For a header which has just been excluded this is the successor it had before its
    /// exclusion, so a traversal can continue after excluding its current element.
    pub(crate) fn next_of(&self, index: usize) -> Option<usize> {
        let next = self.headers[index].next;
        (next != self.head()).then_some(next)
    }

    /// Iterates over the indices of the active headers in ascending order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.first(), |&index| self.next_of(index))
    }

    /// Iterates over all headers, including the excluded ones.
    pub(crate) fn headers(&self) -> impl Iterator<Item = &Header> + '_ {
        self.headers.iter().take(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::StorageKey;

    fn list(len: usize) -> HeaderList {
        HeaderList::new(Dimension::Row, (0..len).map(CellId::create_from_index))
    }

    #[test]
    fn initialised_list_is_traversed_in_order() {
        let mut headers = list(5);
        headers.initialise([0, 2, 3]);

        assert_eq!(vec![0, 2, 3], headers.iter().collect::<Vec<_>>());
        assert_eq!(3, headers.num_active());
        assert!(headers.get(1).deleted);
        assert!(!headers.get(2).deleted);
    }

    #[test]
    fn insertion_keeps_the_list_ordered() {
        let mut headers = list(6);
        headers.insert(3);
        headers.insert(5);
        headers.insert(0);
        headers.insert(4);

        assert_eq!(vec![0, 3, 4, 5], headers.iter().collect::<Vec<_>>());
    }

    #[test]
    fn restoring_in_reverse_order_recovers_the_list() {
        let mut headers = list(5);
        headers.initialise(0..5);

        headers.exclude(2);
        headers.exclude(3);
        headers.exclude(0);
        assert_eq!(vec![1, 4], headers.iter().collect::<Vec<_>>());

        headers.restore(0);
        headers.restore(3);
        headers.restore(2);
        assert_eq!(vec![0, 1, 2, 3, 4], headers.iter().collect::<Vec<_>>());
        assert_eq!(5, headers.num_active());
    }

    #[test]
    fn traversal_continues_after_excluding_the_current_element() {
        let mut headers = list(4);
        headers.initialise(0..4);

        let mut visited = vec![];
        let mut current = headers.first();
        while let Some(index) = current {
            visited.push(index);
            if index % 2 == 1 {
                headers.exclude(index);
            }
            current = headers.next_of(index);
        }

        assert_eq!(vec![0, 1, 2, 3], visited);
        assert_eq!(vec![0, 2], headers.iter().collect::<Vec<_>>());
    }

    #[test]
    fn merge_interleaves_disjoint_lists() {
        let mut left = list(7);
        left.initialise([0, 3, 6]);
        left.increment_count(4);
        let mut right = list(7);
        right.initialise([1, 2, 4]);

        left.merge(&right);

        assert_eq!(vec![0, 1, 2, 3, 4, 6], left.iter().collect::<Vec<_>>());
        assert_eq!(6, left.num_active());
        assert_eq!(1, left.get(4).element_count);
        assert!(!left.get(4).deleted);
    }

    #[test]
    #[should_panic]
    fn excluding_twice_is_a_precondition_violation() {
        let mut headers = list(2);
        headers.initialise(0..2);
        headers.exclude(1);
        headers.exclude(1);
    }

    #[test]
    #[should_panic]
    fn restoring_an_active_header_is_a_precondition_violation() {
        let mut headers = list(2);
        headers.initialise(0..2);
        headers.restore(0);
    }
}
