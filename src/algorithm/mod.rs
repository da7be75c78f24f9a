pub mod bfs;
pub mod codec;
mod engine;
pub mod dijkstra;
pub mod flood;
pub mod goal;
pub mod traits;

pub use goal::Goal;
pub use traits::{SearchConfig, SearchStats, ShortestPath, Steps, Weight};
