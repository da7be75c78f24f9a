/// `(x, y)` grid position; `y` grows downward
pub type Coord = (i64, i64);

pub fn neighbors4((x, y): Coord) -> [Coord; 4] {
    [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
}

pub fn neighbors8((x, y): Coord) -> [Coord; 8] {
    [
        (x - 1, y - 1),
        (x - 1, y),
        (x - 1, y + 1),
        (x, y - 1),
        (x, y + 1),
        (x + 1, y - 1),
        (x + 1, y),
        (x + 1, y + 1),
    ]
}

/// Manhattan distance aka L1
pub fn manhattan(a: Coord, b: Coord) -> i64 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// Every coordinate in the rectangle, both corners inclusive, column by column
pub fn range2d(top_left: Coord, bottom_right: Coord) -> impl Iterator<Item = Coord> {
    let (x1, y1) = top_left;
    let (x2, y2) = bottom_right;
    (x1..=x2).flat_map(move |x| (y1..=y2).map(move |y| (x, y)))
}
