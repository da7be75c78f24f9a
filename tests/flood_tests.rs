use std::collections::{HashMap, HashSet, VecDeque};

use puzzle_search::grid::neighbors4;
use puzzle_search::{
    bfs, flood, flood_with_distance, shortest_path, Bfs, Coord, CoordCodec, Goal, Grid, IdentityCodec,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_unit_graph(rng: &mut StdRng, nodes: u32, edge_chance: f64) -> HashMap<u32, Vec<u32>> {
    (0..nodes)
        .map(|from| {
            let targets = (0..nodes).filter(|_| rng.gen_bool(edge_chance)).collect();
            (from, targets)
        })
        .collect()
}

// Plain queue-based BFS used as the reference answer
fn reference_steps(graph: &HashMap<u32, Vec<u32>>, start: u32) -> HashMap<u32, u64> {
    let mut steps = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        let d = steps[&node];
        for &next in &graph[&node] {
            if !steps.contains_key(&next) {
                steps.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    steps
}

#[test]
fn test_flood_matches_reference_bfs() {
    let mut rng = StdRng::seed_from_u64(2022);
    for _ in 0..50 {
        let nodes = rng.gen_range(1..20);
        let graph = random_unit_graph(&mut rng, nodes, 0.15);
        let expected = reference_steps(&graph, 0);

        let reached = flood(0u32, |n: &u32| graph[n].clone(), &IdentityCodec, None).unwrap();
        let got: HashMap<u32, u64> = reached.iter().map(|&(d, n)| (n, d)).collect();

        assert_eq!(reached.len(), got.len(), "each node reported once");
        assert_eq!(got, expected);
    }
}

#[test]
fn test_flood_is_sorted_by_distance() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = random_unit_graph(&mut rng, 20, 0.2);
    let reached = flood(0u32, |n: &u32| graph[n].clone(), &IdentityCodec, None).unwrap();

    assert_eq!(reached.first(), Some(&(0, 0)));
    assert!(reached.windows(2).all(|pair| pair[0].0 <= pair[1].0));
}

#[test]
fn test_flood_with_max_distance_on_unbounded_grid() {
    // Every cell of the infinite plane is open; only the ceiling bounds the fill
    let open = |c: &Coord| neighbors4(*c);

    let reached = flood((0, 0), open, &CoordCodec, Some(2)).unwrap();
    assert_eq!(reached.len(), 1 + 4 + 8);
    assert!(reached.iter().all(|&(d, (x, y))| d == (x.abs() + y.abs()) as u64));
    assert_eq!(reached.iter().filter(|(d, _)| *d == 2).count(), 8);

    let origin_only = flood((0, 0), open, &CoordCodec, Some(0)).unwrap();
    assert_eq!(origin_only, vec![(0, (0, 0))]);
}

#[test]
fn test_flood_with_max_distance_matches_reference_subset() {
    let mut rng = StdRng::seed_from_u64(7);
    for limit in 0..5u64 {
        let graph = random_unit_graph(&mut rng, 18, 0.12);
        let expected: HashMap<u32, u64> = reference_steps(&graph, 0)
            .into_iter()
            .filter(|&(_, d)| d <= limit)
            .collect();

        let reached = flood(0u32, |n: &u32| graph[n].clone(), &IdentityCodec, Some(limit)).unwrap();
        let got: HashMap<u32, u64> = reached.into_iter().map(|(d, n)| (n, d)).collect();
        assert_eq!(got, expected, "limit {}", limit);
    }
}

#[test]
fn test_isolated_start_floods_to_itself() {
    let reached = flood(5u32, |_: &u32| Vec::new(), &IdentityCodec, None).unwrap();
    assert_eq!(reached, vec![(0, 5)]);

    let weighted = flood_with_distance(5u32, |_: &u32| Vec::<(u32, u64)>::new(), &IdentityCodec, None).unwrap();
    assert_eq!(weighted, vec![(0, 5)]);
}

#[test]
fn test_weighted_flood_distances() {
    let edges: HashMap<char, Vec<(char, u64)>> = HashMap::from([
        ('a', vec![('b', 4), ('c', 1)]),
        ('b', vec![('d', 1)]),
        ('c', vec![('b', 2), ('d', 7)]),
        ('d', vec![('a', 0)]),
        ('e', vec![('a', 1)]),
    ]);
    let neighbors = |n: &char| edges[n].clone();

    let reached = flood_with_distance('a', neighbors, &IdentityCodec, None).unwrap();
    assert_eq!(reached, vec![(0, 'a'), (1, 'c'), (3, 'b'), (4, 'd')]);

    let bounded = flood_with_distance('a', neighbors, &IdentityCodec, Some(3)).unwrap();
    assert_eq!(bounded, vec![(0, 'a'), (1, 'c'), (3, 'b')]);
}

#[test]
fn test_bfs_and_dijkstra_agree_on_unit_graphs() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..40 {
        let nodes = rng.gen_range(2..16);
        let graph = random_unit_graph(&mut rng, nodes, 0.2);
        for target in 0..nodes {
            let by_steps = bfs(0u32, Goal::node(target), |n: &u32| graph[n].clone(), &IdentityCodec)
                .unwrap()
                .map(|found| found.distance);
            let by_weight = shortest_path(
                0u32,
                Goal::node(target),
                |n: &u32| graph[n].iter().map(|&m| (m, 1u64)).collect::<Vec<_>>(),
                &IdentityCodec,
            )
            .unwrap()
            .map(|found| found.distance);
            assert_eq!(by_steps, by_weight, "target {}", target);
        }
    }
}

#[test]
fn test_bfs_path_is_a_valid_walk() {
    let grid = Grid::from_lines(&[
        "S.#.....",
        ".##.###.",
        "....#...",
        "##.##.#E",
    ]);
    let start = grid.find(|&v, _| v == 'S').unwrap();
    let end = grid.find(|&v, _| v == 'E').unwrap();

    let found = Bfs::new()
        .find(start, Goal::node(end), |c: &Coord| grid.neighbors4_where(*c, |_, to| *to != '#'), &CoordCodec)
        .unwrap()
        .unwrap();

    assert_eq!(found.path.len() as u64, found.distance + 1);
    let cells: HashSet<Coord> = found.path.iter().copied().collect();
    assert_eq!(cells.len(), found.path.len(), "a shortest path never revisits a cell");
    for pair in found.path.windows(2) {
        assert!(neighbors4(pair[0]).contains(&pair[1]));
    }
    // S(0,0) -> (0,2) -> (3,2) -> (3,0) -> (7,0) -> (7,3)
    assert_eq!(found.distance, 2 + 3 + 2 + 4 + 3);
}

#[test]
fn test_bfs_max_distance() {
    let line = |n: &i32| vec![n - 1, n + 1];
    let bounded = Bfs::new().with_max_distance(3);

    assert_eq!(
        bounded.find(0, Goal::node(3), line, &IdentityCodec).unwrap().map(|f| f.distance),
        Some(3)
    );
    assert!(bounded.find(0, Goal::node(4), line, &IdentityCodec).unwrap().is_none());
    assert_eq!(bounded.flood(0, line, &IdentityCodec).unwrap().len(), 7);
}
