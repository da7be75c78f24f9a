pub mod fifo_queue;
pub mod priority_queue;

pub use fifo_queue::FifoQueue;
pub use priority_queue::PriorityQueue;

/// Queue of candidate nodes consumed by the search loop.
///
/// `dequeue` hands back `(priority, value)` so the loop can compare the
/// popped distance against the best one recorded for that node.
pub trait Frontier<T, P> {
    /// Inserts a value with the given priority
    fn enqueue(&mut self, value: T, priority: P);

    /// Removes the next value, or `None` when the frontier is exhausted
    fn dequeue(&mut self) -> Option<(P, T)>;

    /// Number of queued entries, stale duplicates included
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
