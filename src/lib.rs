//! Puzzle Search - generic shortest-path engine for puzzle state spaces
//!
//! The engine runs Dijkstra over an implicit graph: the caller supplies a
//! start node, a goal (fixed node or predicate), a neighbor function yielding
//! `(node, weight)` pairs, and a codec that maps nodes to hashable keys.
//! BFS and flood fill are thin adapters over the same label-correcting loop.
//!
//! A sparse 2-D [`Grid`](grid::Grid) and line-based input loading are included
//! as the usual sources of neighbor functions for maze-style puzzles.

pub mod algorithm;
pub mod data_structures;
pub mod grid;
pub mod input;

pub use algorithm::{
    bfs::{bfs, Bfs},
    codec::{CoordCodec, FnCodec, IdentityCodec, NodeCodec, TryFnCodec},
    dijkstra::{shortest_path, Dijkstra},
    flood::{flood, flood_with_distance},
    Goal, SearchConfig, SearchStats, ShortestPath, Steps, Weight,
};
/// Re-export main types for convenient use
pub use grid::{Coord, Grid};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Codec round-trip failed: start {start} deserialized as {roundtrip}")]
    CodecRoundTrip { start: String, roundtrip: String },

    #[error("Malformed node key: {0}")]
    MalformedKey(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),

    #[error("Distance overflowed the weight type")]
    DistanceOverflow,

    #[error("No input path given on the command line")]
    MissingInputPath,

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
