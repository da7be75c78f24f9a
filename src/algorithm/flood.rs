use std::fmt::Debug;

use crate::algorithm::bfs::Bfs;
use crate::algorithm::codec::NodeCodec;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::traits::{Steps, Weight};
use crate::Result;

/// Flood fill from `start` over unit-weight neighbors.
///
/// Returns every reached node with its step count, sorted ascending. With
/// `max_distance`, nodes farther away are never enqueued, which also bounds
/// the search on unbounded graphs.
pub fn flood<N, C, F, I>(
    start: N,
    neighbors: F,
    codec: &C,
    max_distance: Option<Steps>,
) -> Result<Vec<(Steps, N)>>
where
    N: PartialEq + Debug,
    C: NodeCodec<N>,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut bfs = Bfs::new();
    if let Some(limit) = max_distance {
        bfs = bfs.with_max_distance(limit);
    }
    bfs.flood(start, neighbors, codec)
}

/// Flood fill with weighted edges; see [`flood`].
pub fn flood_with_distance<N, W, C, F, I>(
    start: N,
    neighbors: F,
    codec: &C,
    max_distance: Option<W>,
) -> Result<Vec<(W, N)>>
where
    N: PartialEq + Debug,
    W: Weight,
    C: NodeCodec<N>,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, W)>,
{
    let mut dijkstra = Dijkstra::new();
    if let Some(limit) = max_distance {
        dijkstra = dijkstra.with_max_distance(limit);
    }
    dijkstra.distances_from(start, neighbors, codec)
}
