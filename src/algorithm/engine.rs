use std::fmt::Debug;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::algorithm::codec::NodeCodec;
use crate::algorithm::goal::Goal;
use crate::algorithm::traits::{SearchConfig, SearchStats, ShortestPath, Weight};
use crate::data_structures::Frontier;
use crate::{Error, Result};

/// Everything one run of the label-correcting loop leaves behind
pub(crate) struct SearchOutcome<N, W, K> {
    /// Best known distance per key; final for every expanded key
    pub distances: FxHashMap<K, W>,

    /// Key each node's best distance was reached from
    pub parents: FxHashMap<K, K>,

    /// Goal node, its key and distance, if the goal was reached
    pub reached: Option<(K, N, W)>,

    pub stats: SearchStats,
}

/// Fails with `CodecRoundTrip` when `start` does not survive serialization
pub(crate) fn check_codec<N, C>(start: &N, codec: &C) -> Result<()>
where
    N: PartialEq + Debug,
    C: NodeCodec<N>,
{
    let roundtrip = codec.deserialize(&codec.serialize(start))?;
    if &roundtrip != start {
        return Err(Error::CodecRoundTrip {
            start: format!("{:?}", start),
            roundtrip: format!("{:?}", roundtrip),
        });
    }
    Ok(())
}

/// Dijkstra with lazy deletion, shared by every search flavour.
///
/// Relaxations exceeding `max_distance` are dropped before they reach the
/// frontier. The frontier decides pop order; it must yield entries in
/// nondecreasing distance for the result to be optimal.
pub(crate) fn search<N, W, C, F, I, Q>(
    start: N,
    goal: Goal<'_, N>,
    mut neighbors: F,
    codec: &C,
    mut frontier: Q,
    max_distance: Option<W>,
    config: &SearchConfig,
) -> Result<SearchOutcome<N, W, C::Key>>
where
    N: PartialEq + Debug,
    W: Weight,
    C: NodeCodec<N>,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, W)>,
    Q: Frontier<N, W>,
{
    if config.check_codec {
        check_codec(&start, codec)?;
    }

    let mut goal = goal.matcher(codec);
    let mut distances: FxHashMap<C::Key, W> = FxHashMap::default();
    let mut parents: FxHashMap<C::Key, C::Key> = FxHashMap::default();
    let mut stats = SearchStats::default();

    distances.insert(codec.serialize(&start), W::zero());
    frontier.enqueue(start, W::zero());

    while let Some((dist, node)) = frontier.dequeue() {
        let key = codec.serialize(&node);

        // Strictly greater only: an entry equal to the best distance is the
        // live one, which zero-weight edges must not suppress.
        if let Some(&best) = distances.get(&key) {
            if dist > best {
                stats.stale += 1;
                trace!("skipping stale entry {:?} at {:?} (best {:?})", key, dist, best);
                continue;
            }
        }
        distances.insert(key.clone(), dist);
        stats.expanded += 1;

        if goal.is_reached(&node, &key) {
            debug!(
                "goal {:?} reached at distance {:?} after {} expansions",
                key, dist, stats.expanded
            );
            return Ok(SearchOutcome {
                distances,
                parents,
                reached: Some((key, node, dist)),
                stats,
            });
        }

        for (next, weight) in neighbors(&node) {
            if weight < W::zero() {
                return Err(Error::NegativeWeight(format!("{:?}", weight)));
            }
            let candidate = dist.checked_sum(weight).ok_or(Error::DistanceOverflow)?;
            if let Some(limit) = max_distance {
                if candidate > limit {
                    continue;
                }
            }

            let next_key = codec.serialize(&next);
            let improves = match distances.get(&next_key) {
                None => true,
                Some(&current) => candidate < current,
            };
            if improves {
                distances.insert(next_key.clone(), candidate);
                parents.insert(next_key, key.clone());
                frontier.enqueue(next, candidate);
                stats.relaxed += 1;
            }
        }

        stats.max_frontier = stats.max_frontier.max(frontier.size());
        if let Some(every) = config.progress_interval {
            if every > 0 && stats.expanded % every == 0 {
                debug!("{} expanded, frontier size {}", stats.expanded, frontier.size());
            }
        }
    }

    debug!(
        "frontier exhausted: {} expanded, {} keys reached, {} stale pops",
        stats.expanded,
        distances.len(),
        stats.stale
    );
    Ok(SearchOutcome {
        distances,
        parents,
        reached: None,
        stats,
    })
}

impl<N, W, K> SearchOutcome<N, W, K>
where
    W: Weight,
    K: std::hash::Hash + Eq + Clone + Debug,
{
    /// Distance and start-to-goal path, or `None` if the goal was never reached
    pub(crate) fn into_shortest_path<C>(self, codec: &C) -> Result<Option<ShortestPath<N, W>>>
    where
        C: NodeCodec<N, Key = K>,
    {
        let Some((goal_key, goal_node, distance)) = self.reached else {
            return Ok(None);
        };

        // The start has no parent entry, which ends the walk
        let mut ancestors = Vec::new();
        let mut current = &goal_key;
        while let Some(parent) = self.parents.get(current) {
            ancestors.push(codec.deserialize(parent)?);
            current = parent;
        }

        let mut path = Vec::with_capacity(ancestors.len() + 1);
        path.extend(ancestors.into_iter().rev());
        path.push(goal_node);

        Ok(Some(ShortestPath {
            distance,
            path,
            stats: self.stats,
        }))
    }

    /// Every reached node with its distance, nearest first
    pub(crate) fn into_reached<C>(self, codec: &C) -> Result<Vec<(W, N)>>
    where
        C: NodeCodec<N, Key = K>,
    {
        let mut reached = Vec::with_capacity(self.distances.len());
        for (key, dist) in self.distances {
            reached.push((dist, codec.deserialize(&key)?));
        }
        reached.sort_by_key(|(dist, _)| *dist);
        Ok(reached)
    }
}
