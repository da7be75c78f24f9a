//! Sparse two-dimensional grid, the usual source of `neighbors` closures.

pub mod coords;

use std::collections::HashMap;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::{Error, Result};

pub use coords::{manhattan, neighbors4, neighbors8, range2d, Coord};

/// Largest bounding box area [`Grid::format`] will lay out
pub const MAX_RENDERED_CELLS: u64 = 1 << 32;

/// Inclusive `[min, max]` ranges along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: (i64, i64),
    pub y: (i64, i64),
}

impl BoundingBox {
    /// Number of columns, `None` when it does not fit in a `u64`
    pub fn width(&self) -> Option<u64> {
        self.x.1.abs_diff(self.x.0).checked_add(1)
    }

    /// Number of rows, `None` when it does not fit in a `u64`
    pub fn height(&self) -> Option<u64> {
        self.y.1.abs_diff(self.y.0).checked_add(1)
    }

    pub fn contains(&self, (x, y): Coord) -> bool {
        (self.x.0..=self.x.1).contains(&x) && (self.y.0..=self.y.1).contains(&y)
    }
}

/// A two dimensional grid stored as a sparse map.
///
/// Cells iterate in insertion order. Coordinates may be negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<V> {
    cells: IndexMap<Coord, V>,
    bounds: Option<BoundingBox>,
}

impl<V> Grid<V> {
    pub fn new() -> Self {
        Grid {
            cells: IndexMap::new(),
            bounds: None,
        }
    }

    pub fn get(&self, c: Coord) -> Option<&V> {
        self.cells.get(&c)
    }

    pub fn get_mut(&mut self, c: Coord) -> Option<&mut V> {
        self.cells.get_mut(&c)
    }

    /// Stores `v` at `c`, returning the previous value
    pub fn set(&mut self, c: Coord, v: V) -> Option<V> {
        let (x, y) = c;
        self.bounds = Some(match self.bounds {
            None => BoundingBox { x: (x, x), y: (y, y) },
            Some(b) => BoundingBox {
                x: (b.x.0.min(x), b.x.1.max(x)),
                y: (b.y.0.min(y), b.y.1.max(y)),
            },
        });
        self.cells.insert(c, v)
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Smallest box covering every cell ever set; `None` for an empty grid
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounds
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &V)> + '_ {
        self.cells.iter().map(|(&c, v)| (c, v))
    }

    pub fn map_values<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(&V, Coord) -> U,
    {
        let mut out = Grid::new();
        for (c, v) in self.iter() {
            out.set(c, f(v, c));
        }
        out
    }

    /// First coordinate (in insertion order) whose cell matches `pred`
    pub fn find<F>(&self, mut pred: F) -> Option<Coord>
    where
        F: FnMut(&V, Coord) -> bool,
    {
        self.iter().find(|&(c, v)| pred(v, c)).map(|(c, _)| c)
    }

    pub fn find_all<F>(&self, mut pred: F) -> Vec<Coord>
    where
        F: FnMut(&V, Coord) -> bool,
    {
        self.iter()
            .filter(|&(c, v)| pred(v, c))
            .map(|(c, _)| c)
            .collect()
    }

    /// The 4-neighbors of `c` present in the grid for which `pred(from, to)` holds.
    ///
    /// This is the typical body of a search `neighbors` closure:
    ///
    /// ```
    /// use puzzle_search::{bfs, Coord, CoordCodec, Goal, Grid};
    ///
    /// let grid = Grid::from_lines(&["..#", "..#", "..."]);
    /// let open = |_: &char, to: &char| *to != '#';
    /// let (start, end): (Coord, Coord) = ((0, 0), (2, 2));
    /// let found = bfs(start, Goal::node(end), |c: &Coord| grid.neighbors4_where(*c, open), &CoordCodec)
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(found.distance, 4);
    /// ```
    pub fn neighbors4_where<F>(&self, c: Coord, mut pred: F) -> Vec<Coord>
    where
        F: FnMut(&V, &V) -> bool,
    {
        let Some(from) = self.get(c) else {
            return Vec::new();
        };
        neighbors4(c)
            .into_iter()
            .filter(|&n| self.get(n).map_or(false, |to| pred(from, to)))
            .collect()
    }

    /// Renders the bounding box row by row, `blank` where no cell is set.
    ///
    /// Fails with [`Error::InvalidGrid`] when the box covers more than
    /// [`MAX_RENDERED_CELLS`] cells.
    pub fn format<F>(&self, mut f: F, blank: char) -> Result<String>
    where
        F: FnMut(&V, Coord) -> char,
    {
        let Some(bounds) = self.bounds else {
            return Ok(String::new());
        };
        let too_large = || Error::InvalidGrid(format!("bounding box {:?} is too large to render", bounds));
        let (width, height) = bounds
            .width()
            .zip(bounds.height())
            .filter(|&(w, h)| w.checked_mul(h).map_or(false, |cells| cells <= MAX_RENDERED_CELLS))
            .and_then(|(w, h)| Some((usize::try_from(w).ok()?, usize::try_from(h).ok()?)))
            .ok_or_else(too_large)?;

        let mut rows = vec![vec![blank; width]; height];
        for (c, v) in self.iter() {
            let (x, y) = c;
            // Offsets are below width/height, which were checked to fit
            let row = y.abs_diff(bounds.y.0) as usize;
            let col = x.abs_diff(bounds.x.0) as usize;
            rows[row][col] = f(v, c);
        }
        Ok(rows
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

impl<V: Eq + Hash + Clone> Grid<V> {
    /// Number of cells holding each distinct value
    pub fn counts(&self) -> HashMap<V, usize> {
        let mut out = HashMap::new();
        for v in self.cells.values() {
            *out.entry(v.clone()).or_insert(0) += 1;
        }
        out
    }
}

impl Grid<char> {
    /// Parses text rows, `x` along a row and `y` down the rows.
    ///
    /// Spaces are left unset, so ragged or padded input stays sparse.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Grid<char> {
        let mut grid = Grid::new();
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.as_ref().chars().enumerate() {
                if ch != ' ' {
                    grid.set((x as i64, y as i64), ch);
                }
            }
        }
        grid
    }
}

impl<V> Default for Grid<V> {
    fn default() -> Self {
        Self::new()
    }
}
