use std::fmt::Debug;

use crate::algorithm::codec::NodeCodec;
use crate::algorithm::engine;
use crate::algorithm::goal::Goal;
use crate::algorithm::traits::{SearchConfig, ShortestPath, Steps};
use crate::data_structures::FifoQueue;
use crate::Result;

/// Breadth-first search: Dijkstra where every edge costs one step.
///
/// Runs on a FIFO frontier, since with unit weights insertion order already
/// is distance order.
#[derive(Debug, Clone, Default)]
pub struct Bfs {
    config: SearchConfig,
    max_distance: Option<Steps>,
}

impl Bfs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Never enqueue nodes more than `limit` steps from the start
    pub fn with_max_distance(mut self, limit: Steps) -> Self {
        self.max_distance = Some(limit);
        self
    }

    pub fn name(&self) -> &'static str {
        "BFS"
    }

    /// Fewest steps from `start` to a node satisfying `goal`, with one path.
    pub fn find<N, C, F, I>(
        &self,
        start: N,
        goal: Goal<'_, N>,
        mut neighbors: F,
        codec: &C,
    ) -> Result<Option<ShortestPath<N, Steps>>>
    where
        N: PartialEq + Debug,
        C: NodeCodec<N>,
        F: FnMut(&N) -> I,
        I: IntoIterator<Item = N>,
    {
        let outcome = engine::search(
            start,
            goal,
            |node: &N| neighbors(node).into_iter().map(|next| (next, 1)),
            codec,
            FifoQueue::new(),
            self.max_distance,
            &self.config,
        )?;
        outcome.into_shortest_path(codec)
    }

    /// Every node reachable from `start`, with its step count, nearest first.
    pub fn flood<N, C, F, I>(&self, start: N, mut neighbors: F, codec: &C) -> Result<Vec<(Steps, N)>>
    where
        N: PartialEq + Debug,
        C: NodeCodec<N>,
        F: FnMut(&N) -> I,
        I: IntoIterator<Item = N>,
    {
        let outcome = engine::search(
            start,
            Goal::Never,
            |node: &N| neighbors(node).into_iter().map(|next| (next, 1)),
            codec,
            FifoQueue::new(),
            self.max_distance,
            &self.config,
        )?;
        outcome.into_reached(codec)
    }
}

/// Fewest-steps path from `start` to `goal` with default settings.
pub fn bfs<N, C, F, I>(
    start: N,
    goal: Goal<'_, N>,
    neighbors: F,
    codec: &C,
) -> Result<Option<ShortestPath<N, Steps>>>
where
    N: PartialEq + Debug,
    C: NodeCodec<N>,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    Bfs::new().find(start, goal, neighbors, codec)
}
