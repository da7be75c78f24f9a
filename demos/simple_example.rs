use puzzle_search::{flood_with_distance, shortest_path, Error, Goal, TryFnCodec};

// A walker crosses a 5-wide corridor while a blocker sweeps back and forth
// along column 2 with period 4. The search state is (column, minute mod 4),
// so the node is a compound value that needs an explicit codec.
fn main() {
    env_logger::init();

    type State = (i32, u32);
    let period = 4;
    let width = 5;
    let blocked = move |col: i32, minute: u32| col == 2 && minute % period < 2;

    let neighbors = move |&(col, minute): &State| -> Vec<(State, u64)> {
        let next_minute = (minute + 1) % period;
        [col - 1, col, col + 1]
            .into_iter()
            .filter(|&c| (0..width).contains(&c) && !blocked(c, next_minute))
            .map(|c| ((c, next_minute), 1))
            .collect()
    };

    let codec = TryFnCodec::new(
        |&(col, minute): &State| format!("{}@{}", col, minute),
        |key: &String| -> puzzle_search::Result<State> {
            let malformed = || Error::MalformedKey(key.clone());
            let (col, minute) = key.split_once('@').ok_or_else(malformed)?;
            Ok((
                col.parse().map_err(|_| malformed())?,
                minute.parse().map_err(|_| malformed())?,
            ))
        },
    );

    let found = shortest_path(
        (0, 0),
        Goal::when(|&(col, _): &State| col == width - 1),
        neighbors,
        &codec,
    )
    .expect("codec round-trips");

    match found {
        Some(found) => {
            println!("Crossed in {} minutes", found.distance);
            for (minute, (col, _)) in found.path.iter().enumerate() {
                println!("  minute {:>2}: column {}", minute, col);
            }
        }
        None => println!("No way across"),
    }

    let reach = flood_with_distance((0, 0), neighbors, &codec, Some(3u64)).expect("codec round-trips");
    println!("{} states reachable within 3 minutes", reach.len());
}
