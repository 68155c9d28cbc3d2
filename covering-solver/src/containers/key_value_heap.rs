//! A max-heap over the keys `[0, ..., n - 1]` which supports changing the value of a key in place
//! and removing a key without popping it.
//!
//! The independent-row lower bound keys this heap on the dense index of a row and uses the negated
//! conflict degree as the value, so that [`KeyValueHeap::pop_max`] yields the row of minimum
//! remaining degree and a degree decrement becomes an [`KeyValueHeap::increment`] by one.
use std::ops::AddAssign;

use super::KeyedVec;
use super::StorageKey;
use crate::covering_assert_moderate;

/// A max-heap which allows for generalised `Key`s (required to implement [`StorageKey`]) and
/// ordered `Value`s.
#[derive(Debug, Clone)]
pub(crate) struct KeyValueHeap<Key, Value> {
    /// Contains the values stored as a heap; the value of key `i` is at index
    /// [`KeyValueHeap::map_key_to_position\[i\]`][KeyValueHeap::map_key_to_position]
    values: Vec<Value>,
    /// `map_key_to_position[i]` is the index of the value of the key `i` in
    /// [`KeyValueHeap::values`]
    map_key_to_position: KeyedVec<Key, usize>,
    /// `map_position_to_key[i]` is the key which is associated with `i` in
    /// [`KeyValueHeap::values`]
    map_position_to_key: Vec<Key>,
    /// Positions `[0, end_position)` form the heap; the removed keys are stored behind it.
    end_position: usize,
}

impl<Key: StorageKey, Value> Default for KeyValueHeap<Key, Value> {
    fn default() -> Self {
        Self {
            values: Vec::default(),
            map_key_to_position: KeyedVec::default(),
            map_position_to_key: Vec::default(),
            end_position: 0,
        }
    }
}

impl<Key, Value> KeyValueHeap<Key, Value>
where
    Key: StorageKey + Copy,
    Value: AddAssign<Value> + Ord + Copy,
{
    /// Return the key with maximum value from the heap together with its value, or [`None`] if
    /// the heap is empty.
    pub(crate) fn peek_max(&self) -> Option<(Key, Value)> {
        if self.is_empty() {
            None
        } else {
            Some((self.map_position_to_key[0], self.values[0]))
        }
    }

    /// Deletes the key with maximum value from the heap and returns it, or [`None`] if the heap
    /// is empty.
    ///
    /// The time-complexity of this operation is O(log n).
    pub(crate) fn pop_max(&mut self) -> Option<Key> {
        let (best_key, _) = self.peek_max()?;
        self.delete_key(best_key);
        Some(best_key)
    }

    /// Adds `increment` to the value of `key`.
    ///
    /// The increment may also be applied to removed keys, in which case the heap is left as is.
    pub(crate) fn increment(&mut self, key: Key, increment: Value) {
        let position = self.map_key_to_position[key];
        self.values[position] += increment;
        if self.is_key_present(key) {
            self.sift_up(position);
        }
    }

    /// Removes `key` from the heap if it is present. Its value remains recorded internally.
    ///
    /// The time-complexity of this operation is O(log n).
    pub(crate) fn delete_key(&mut self, key: Key) {
        if !self.is_key_present(key) {
            return;
        }

        let position = self.map_key_to_position[key];
        self.swap_positions(position, self.end_position - 1);
        self.end_position -= 1;
        if position < self.end_position {
            // The element moved into `position` may be smaller than its children or larger than
            // its parent, depending on where in the heap it came from.
            self.sift_down(position);
            self.sift_up(position);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.end_position == 0
    }

    pub(crate) fn is_key_present(&self, key: Key) -> bool {
        key.index() < self.map_key_to_position.len()
            && self.map_key_to_position[key] < self.end_position
    }

    /// Adds the next key to the heap. Keys have to be added in the order `0, 1, 2, ...`.
    pub(crate) fn grow(&mut self, key: Key, value: Value) {
        covering_assert_moderate!(key.index() == self.map_key_to_position.len());

        let last_position = self.values.len();
        self.values.push(value);
        let _ = self.map_key_to_position.push(last_position);
        self.map_position_to_key.push(key);

        // Removed keys live behind the heap, so the new key is moved to the end of the heap part
        // before it is sifted into place.
        self.swap_positions(self.end_position, last_position);
        self.end_position += 1;
        self.sift_up(self.end_position - 1);
    }

    pub(crate) fn clear(&mut self) {
        self.values.clear();
        self.map_key_to_position.clear();
        self.map_position_to_key.clear();
        self.end_position = 0;
    }

    fn swap_positions(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }

        let key_a = self.map_position_to_key[a];
        let key_b = self.map_position_to_key[b];

        self.values.swap(a, b);
        self.map_position_to_key.swap(a, b);
        self.map_key_to_position.swap(key_a.index(), key_b.index());

        covering_assert_moderate!(
            self.map_key_to_position[key_a] == b && self.map_key_to_position[key_b] == a
        );
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.values[parent] >= self.values[position] {
                break;
            }
            self.swap_positions(parent, position);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            let right = left + 1;

            let mut largest = position;
            if left < self.end_position && self.values[left] > self.values[largest] {
                largest = left;
            }
            if right < self.end_position && self.values[right] > self.values[largest] {
                largest = right;
            }

            if largest == position {
                break;
            }
            self.swap_positions(position, largest);
            position = largest;
        }
    }
}
