use std::fs;

use puzzle_search::grid::{manhattan, neighbors4, neighbors8, range2d, BoundingBox};
use puzzle_search::input::{read_lines, split_lines};
use puzzle_search::{Error, Grid};

#[test]
fn test_iterates_in_insertion_order() {
    let mut g = Grid::new();
    g.set((0, 0), 'o');
    g.set((1, 1), 'x');
    g.set((-1, 10), 'y');

    let cells: Vec<_> = g.iter().map(|(c, &v)| (c, v)).collect();
    assert_eq!(cells, vec![((0, 0), 'o'), ((1, 1), 'x'), ((-1, 10), 'y')]);
}

#[test]
fn test_bounding_box() {
    let mut g = Grid::new();
    assert_eq!(g.bounding_box(), None);

    g.set((0, 0), 'o');
    g.set((1, 1), 'x');
    g.set((-1, 10), 'y');
    let bounds = g.bounding_box().unwrap();
    assert_eq!(bounds, BoundingBox { x: (-1, 1), y: (0, 10) });
    assert_eq!(bounds.width(), Some(3));
    assert_eq!(bounds.height(), Some(11));
    assert!(bounds.contains((0, 5)));
    assert!(!bounds.contains((2, 5)));
}

#[test]
fn test_set_overwrites_and_reports_previous() {
    let mut g = Grid::new();
    assert_eq!(g.set((2, 3), 1), None);
    assert_eq!(g.set((2, 3), 5), Some(1));
    assert_eq!(g.get((2, 3)), Some(&5));
    assert_eq!(g.len(), 1);

    if let Some(v) = g.get_mut((2, 3)) {
        *v += 1;
    }
    assert_eq!(g.get((2, 3)), Some(&6));
    assert!(g.contains((2, 3)));
    assert!(!g.contains((3, 2)));
}

#[test]
fn test_from_lines_skips_spaces() {
    let g = Grid::from_lines(&["ab ", " #c"]);
    assert_eq!(g.len(), 4);
    assert_eq!(g.get((0, 0)), Some(&'a'));
    assert_eq!(g.get((2, 0)), None);
    assert_eq!(g.get((0, 1)), None);
    assert_eq!(g.get((2, 1)), Some(&'c'));
    assert_eq!(g.format(|&v, _| v, '.').unwrap(), "ab.\n.#c");
}

#[test]
fn test_far_apart_cells_do_not_overflow() {
    let mut g = Grid::new();
    g.set((i64::MIN, 0), 'a');
    g.set((i64::MAX, 0), 'b');

    let bounds = g.bounding_box().unwrap();
    assert_eq!(bounds.width(), None);
    assert_eq!(bounds.height(), Some(1));
    assert!(matches!(g.format(|&v, _| v, '.'), Err(Error::InvalidGrid(_))));

    let mut tall = Grid::new();
    tall.set((0, -1), 'a');
    tall.set((0, i64::MAX - 1), 'b');
    assert_eq!(tall.bounding_box().unwrap().height(), Some(1u64 << 63));
    assert!(matches!(tall.format(|&v, _| v, '.'), Err(Error::InvalidGrid(_))));

    let mut sparse = Grid::new();
    sparse.set((-2, -1), '#');
    sparse.set((1, 0), '#');
    assert_eq!(sparse.format(|&v, _| v, ' ').unwrap(), "#   \n   #");

    assert_eq!(Grid::<char>::new().format(|&v, _| v, '.').unwrap(), "");
}

#[test]
fn test_map_values_counts_and_find() {
    let g = Grid::from_lines(&["a#b", "##a"]);
    let walls = g.map_values(|&v, _| v == '#');
    assert_eq!(walls.get((1, 0)), Some(&true));
    assert_eq!(walls.get((0, 0)), Some(&false));

    let counts = g.counts();
    assert_eq!(counts[&'#'], 3);
    assert_eq!(counts[&'a'], 2);
    assert_eq!(counts[&'b'], 1);

    assert_eq!(g.find(|&v, _| v == 'a'), Some((0, 0)));
    assert_eq!(g.find(|&v, _| v == 'z'), None);
    assert_eq!(g.find_all(|&v, _| v == 'a'), vec![(0, 0), (2, 1)]);
    assert_eq!(g.find_all(|_, (x, _)| x == 1), vec![(1, 0), (1, 1)]);
}

#[test]
fn test_neighbors4_where_respects_predicate_and_bounds() {
    // Heights: may climb at most one step
    let g = Grid::from_lines(&["abc", "adz"]).map_values(|&v, _| v as i32 - 'a' as i32);
    let mut climb = g.neighbors4_where((1, 0), |from, to| to - from <= 1);
    climb.sort();
    assert_eq!(climb, vec![(0, 0), (2, 0)]);

    assert!(g.neighbors4_where((5, 5), |_, _| true).is_empty());
}

#[test]
fn test_coordinate_helpers() {
    assert_eq!(manhattan((1, -2), (-3, 4)), 10);
    assert_eq!(neighbors4((0, 0)).len(), 4);
    assert!(!neighbors8((0, 0)).contains(&(0, 0)));
    assert!(neighbors8((0, 0)).contains(&(1, -1)));

    let cells: Vec<_> = range2d((0, 0), (1, 2)).collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    assert_eq!(range2d((3, 3), (2, 2)).count(), 0);
}

#[test]
fn test_split_lines_drops_single_trailing_newline() {
    assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
    assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    assert_eq!(split_lines("a\n\nb\n\n"), vec!["a", "", "b", ""]);
    assert!(split_lines("").is_empty());
}

#[test]
fn test_read_lines_from_file() {
    let path = std::env::temp_dir().join(format!("puzzle_search_input_{}.txt", std::process::id()));
    fs::write(&path, "S.#\n..E\n").unwrap();

    let lines = read_lines(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(lines, vec!["S.#", "..E"]);

    let grid = Grid::from_lines(&lines);
    assert_eq!(grid.find(|&v, _| v == 'E'), Some((2, 1)));
}

#[test]
fn test_read_lines_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("puzzle_search_definitely_missing.txt");
    assert!(matches!(read_lines(path), Err(Error::Io(_))));
}
