use std::collections::HashSet;

use puzzle_search::input::read_lines_from_args;
use puzzle_search::{bfs, flood, Coord, CoordCodec, Error, Goal, Grid};

// Reads a maze ('#' wall, 'S' start, 'E' end, anything else open) and
// reports how far the end is and how much of the maze is reachable.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let lines = read_lines_from_args()?;
    let grid = Grid::from_lines(&lines);
    let start = grid
        .find(|&v, _| v == 'S')
        .ok_or_else(|| Error::InvalidGrid("no start cell 'S'".to_string()))?;
    let open = |_: &char, to: &char| *to != '#';

    let reached = flood(
        start,
        |c: &Coord| grid.neighbors4_where(*c, open),
        &CoordCodec,
        None,
    )?;
    println!("Reachable cells: {}", reached.len());
    if let Some((steps, farthest)) = reached.last() {
        println!("Farthest cell: {:?} at {} steps", farthest, steps);
    }

    let Some(end) = grid.find(|&v, _| v == 'E') else {
        println!("No end cell 'E'");
        return Ok(());
    };

    match bfs(
        start,
        Goal::node(end),
        |c: &Coord| grid.neighbors4_where(*c, open),
        &CoordCodec,
    )? {
        Some(found) => {
            println!("Shortest path: {} steps", found.distance);
            let on_path: HashSet<Coord> = found.path.iter().copied().collect();
            let overlay = grid.format(
                |&v, c| if v == '.' && on_path.contains(&c) { 'o' } else { v },
                ' ',
            )?;
            println!("{}", overlay);
        }
        None => println!("No path from S to E"),
    }

    Ok(())
}
