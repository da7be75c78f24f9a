use std::collections::VecDeque;

use crate::data_structures::Frontier;

/// First-in first-out frontier.
///
/// Only valid for the search loop when every edge has the same weight: the
/// insertion order is then also nondecreasing distance order.
#[derive(Debug, Clone)]
pub struct FifoQueue<T, P> {
    entries: VecDeque<(P, T)>,
}

impl<T, P> FifoQueue<T, P> {
    pub fn new() -> Self {
        FifoQueue {
            entries: VecDeque::new(),
        }
    }
}

impl<T, P> Default for FifoQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Frontier<T, P> for FifoQueue<T, P> {
    fn enqueue(&mut self, value: T, priority: P) {
        self.entries.push_back((priority, value));
    }

    fn dequeue(&mut self) -> Option<(P, T)> {
        self.entries.pop_front()
    }

    fn size(&self) -> usize {
        self.entries.len()
    }
}
