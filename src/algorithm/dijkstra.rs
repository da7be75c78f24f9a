use std::fmt::Debug;

use crate::algorithm::codec::NodeCodec;
use crate::algorithm::engine;
use crate::algorithm::goal::Goal;
use crate::algorithm::traits::{SearchConfig, ShortestPath, Weight};
use crate::data_structures::PriorityQueue;
use crate::Result;

/// Classic Dijkstra's algorithm over caller-defined nodes
#[derive(Debug, Clone)]
pub struct Dijkstra<W> {
    config: SearchConfig,
    max_distance: Option<W>,
}

impl<W: Weight> Dijkstra<W> {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            config: SearchConfig::default(),
            max_distance: None,
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Never enqueue nodes farther than `limit` from the start
    pub fn with_max_distance(mut self, limit: W) -> Self {
        self.max_distance = Some(limit);
        self
    }

    pub fn name(&self) -> &'static str {
        "Dijkstra"
    }

    /// Finds the distance to the nearest node satisfying `goal` and one
    /// shortest path to it.
    ///
    /// `neighbors` yields `(node, weight)` pairs and may be called on any
    /// node more than once. Returns `Ok(None)` when the frontier runs dry
    /// before the goal is reached.
    pub fn shortest_path<N, C, F, I>(
        &self,
        start: N,
        goal: Goal<'_, N>,
        neighbors: F,
        codec: &C,
    ) -> Result<Option<ShortestPath<N, W>>>
    where
        N: PartialEq + Debug,
        C: NodeCodec<N>,
        F: FnMut(&N) -> I,
        I: IntoIterator<Item = (N, W)>,
    {
        let outcome = engine::search(
            start,
            goal,
            neighbors,
            codec,
            PriorityQueue::new(),
            self.max_distance,
            &self.config,
        )?;
        outcome.into_shortest_path(codec)
    }

    /// Distance to every node reachable from `start` (within the configured
    /// maximum, if any), nearest first.
    pub fn distances_from<N, C, F, I>(&self, start: N, neighbors: F, codec: &C) -> Result<Vec<(W, N)>>
    where
        N: PartialEq + Debug,
        C: NodeCodec<N>,
        F: FnMut(&N) -> I,
        I: IntoIterator<Item = (N, W)>,
    {
        let outcome = engine::search(
            start,
            Goal::Never,
            neighbors,
            codec,
            PriorityQueue::new(),
            self.max_distance,
            &self.config,
        )?;
        outcome.into_reached(codec)
    }
}

impl<W: Weight> Default for Dijkstra<W> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shortest path from `start` to `goal` with default settings.
///
/// ```
/// use puzzle_search::{shortest_path, Goal, IdentityCodec};
///
/// // 0 -> 1 costs 5, 0 -> 2 -> 1 costs 1 + 1
/// let edges = |n: &u32| -> Vec<(u32, u64)> {
///     match n {
///         0 => vec![(1, 5), (2, 1)],
///         2 => vec![(1, 1)],
///         _ => vec![],
///     }
/// };
/// let found = shortest_path(0u32, Goal::node(1), edges, &IdentityCodec).unwrap().unwrap();
/// assert_eq!(found.distance, 2);
/// assert_eq!(found.path, vec![0, 2, 1]);
/// ```
pub fn shortest_path<N, W, C, F, I>(
    start: N,
    goal: Goal<'_, N>,
    neighbors: F,
    codec: &C,
) -> Result<Option<ShortestPath<N, W>>>
where
    N: PartialEq + Debug,
    W: Weight,
    C: NodeCodec<N>,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, W)>,
{
    Dijkstra::new().shortest_path(start, goal, neighbors, codec)
}
