use std::fmt::Debug;

use crate::data_structures::Frontier;

/// Binary min-heap keyed by priority, stored as a flat array.
///
/// Entries sharing the minimum priority come out in no particular order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P>
where
    P: Ord + Copy + Debug,
{
    /// Heap-ordered `(priority, value)` pairs
    entries: Vec<(P, T)>,
}

impl<T, P> PriorityQueue<T, P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        PriorityQueue {
            entries: Vec::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends the entry and sifts it up to its place
    pub fn push(&mut self, value: T, priority: P) {
        self.entries.push((priority, value));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(P, T)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Smallest priority currently queued
    pub fn peek_priority(&self) -> Option<P> {
        self.entries.first().map(|(priority, _)| *priority)
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].0 >= self.entries[parent].0 {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T, P> Default for PriorityQueue<T, P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Frontier<T, P> for PriorityQueue<T, P>
where
    P: Ord + Copy + Debug,
{
    fn enqueue(&mut self, value: T, priority: P) {
        self.push(value, priority);
    }

    fn dequeue(&mut self) -> Option<(P, T)> {
        self.pop()
    }

    fn size(&self) -> usize {
        self.len()
    }
}
