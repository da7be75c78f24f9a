use std::fmt::Debug;
use std::hash::Hash;

use crate::grid::Coord;
use crate::{Error, Result};

/// Maps search nodes to hashable keys and back.
///
/// The engine only ever hashes keys, so compound nodes (position, elapsed
/// time, carried state, ...) need no `Hash` impl of their own. For every node
/// the search can reach, `deserialize(serialize(n))` must behave like `n`.
pub trait NodeCodec<N> {
    /// Canonical identity of a node
    type Key: Hash + Eq + Clone + Debug;

    fn serialize(&self, node: &N) -> Self::Key;

    fn deserialize(&self, key: &Self::Key) -> Result<N>;
}

/// Codec built from an explicit serialize / deserialize closure pair
///
/// ```
/// use puzzle_search::FnCodec;
///
/// // (x, y, minute) packed into a string key
/// let codec = FnCodec::new(
///     |&(x, y, t): &(i32, i32, u32)| format!("{x},{y},{t}"),
///     |key: &String| {
///         let parts: Vec<i64> = key.split(',').map(|p| p.parse().unwrap()).collect();
///         (parts[0] as i32, parts[1] as i32, parts[2] as u32)
///     },
/// );
/// # let _ = codec;
/// ```
#[derive(Clone, Copy)]
pub struct FnCodec<S, D> {
    serialize: S,
    deserialize: D,
}

impl<S, D> FnCodec<S, D> {
    pub fn new(serialize: S, deserialize: D) -> Self {
        FnCodec {
            serialize,
            deserialize,
        }
    }
}

impl<S, D> Debug for FnCodec<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnCodec")
    }
}

impl<N, K, S, D> NodeCodec<N> for FnCodec<S, D>
where
    K: Hash + Eq + Clone + Debug,
    S: Fn(&N) -> K,
    D: Fn(&K) -> N,
{
    type Key = K;

    fn serialize(&self, node: &N) -> K {
        (self.serialize)(node)
    }

    fn deserialize(&self, key: &K) -> Result<N> {
        Ok((self.deserialize)(key))
    }
}

/// Codec whose deserialize closure can reject a key.
///
/// Use this when keys are parsed from strings, so a bad key surfaces as an
/// error instead of being silently mapped to some default node.
#[derive(Clone, Copy)]
pub struct TryFnCodec<S, D> {
    serialize: S,
    deserialize: D,
}

impl<S, D> TryFnCodec<S, D> {
    pub fn new(serialize: S, deserialize: D) -> Self {
        TryFnCodec {
            serialize,
            deserialize,
        }
    }
}

impl<S, D> Debug for TryFnCodec<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TryFnCodec")
    }
}

impl<N, K, S, D> NodeCodec<N> for TryFnCodec<S, D>
where
    K: Hash + Eq + Clone + Debug,
    S: Fn(&N) -> K,
    D: Fn(&K) -> Result<N>,
{
    type Key = K;

    fn serialize(&self, node: &N) -> K {
        (self.serialize)(node)
    }

    fn deserialize(&self, key: &K) -> Result<N> {
        (self.deserialize)(key)
    }
}

/// Uses the node itself as its key.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityCodec;

impl<N> NodeCodec<N> for IdentityCodec
where
    N: Hash + Eq + Clone + Debug,
{
    type Key = N;

    fn serialize(&self, node: &N) -> N {
        node.clone()
    }

    fn deserialize(&self, key: &N) -> Result<N> {
        Ok(key.clone())
    }
}

/// `"x,y"` string keys for grid coordinates
#[derive(Debug, Default, Clone, Copy)]
pub struct CoordCodec;

impl NodeCodec<Coord> for CoordCodec {
    type Key = String;

    fn serialize(&self, &(x, y): &Coord) -> String {
        format!("{},{}", x, y)
    }

    fn deserialize(&self, key: &String) -> Result<Coord> {
        let (x, y) = key
            .split_once(',')
            .ok_or_else(|| Error::MalformedKey(key.clone()))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| Error::MalformedKey(key.clone()))
        };
        Ok((parse(x)?, parse(y)?))
    }
}
