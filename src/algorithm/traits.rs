use std::fmt::Debug;

use num_traits::Zero;
use ordered_float::OrderedFloat;
use serde::Serialize;

/// Distance type for unit-weight searches (BFS, flood fill)
pub type Steps = u64;

/// Edge weight / path distance.
///
/// Integer widths add with overflow detection; floats reject non-finite sums.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// `self + rhs`, or `None` if the result is not representable
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )*
    };
}

int_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Weight for OrderedFloat<f64> {
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        let sum = self.0 + rhs.0;
        sum.is_finite().then_some(OrderedFloat(sum))
    }
}

impl Weight for OrderedFloat<f32> {
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        let sum = self.0 + rhs.0;
        sum.is_finite().then_some(OrderedFloat(sum))
    }
}

/// Engine settings shared by every search flavour
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Check `deserialize(serialize(start)) == start` before searching
    pub check_codec: bool,
    /// Log frontier size every this many expansions (`None` disables)
    pub progress_interval: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            check_codec: true,
            progress_interval: Some(10_000),
        }
    }
}

/// Counters collected during one search call
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes popped and expanded
    pub expanded: usize,
    /// Successful relaxations (frontier pushes)
    pub relaxed: usize,
    /// Stale duplicate entries discarded on pop
    pub stale: usize,
    /// Largest frontier size observed
    pub max_frontier: usize,
}

/// A successful search: the optimal distance and one path achieving it
#[derive(Debug, Clone)]
pub struct ShortestPath<N, W> {
    /// Distance from the start to the goal node
    pub distance: W,

    /// Nodes from start to goal, both inclusive
    pub path: Vec<N>,

    pub stats: SearchStats,
}

impl<N, W> ShortestPath<N, W> {
    pub fn start(&self) -> Option<&N> {
        self.path.first()
    }

    /// The node that satisfied the goal
    pub fn end(&self) -> Option<&N> {
        self.path.last()
    }

    /// Number of edges along the path
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
