//! Shortest routes through a maze where turning on the spot costs 1000 and a step costs 1.

use std::collections::HashSet;

use weighted_paths::graph::{MutableGraph, WeightedGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    fn step(self, (x, y): (i32, i32)) -> (i32, i32) {
        match self {
            Direction::North => (x, y - 1),
            Direction::East => (x + 1, y),
            Direction::South => (x, y + 1),
            Direction::West => (x - 1, y),
        }
    }
}

type Pose = ((i32, i32), Direction);

struct Maze {
    start: (i32, i32),
    end: (i32, i32),
    graph: WeightedGraph<Pose>,
}

impl Maze {
    fn parse(text: &str) -> Self {
        let mut open = HashSet::new();
        let mut start = (0, 0);
        let mut end = (0, 0);

        for (y, line) in text.lines().enumerate() {
            for (x, c) in line.trim().chars().enumerate() {
                let cell = (x as i32, y as i32);
                match c {
                    '#' => continue,
                    'S' => start = cell,
                    'E' => end = cell,
                    _ => {}
                }
                open.insert(cell);
            }
        }

        let mut graph = WeightedGraph::new();
        for &cell in &open {
            for facing in Direction::ALL {
                let pose = (cell, facing);
                if open.contains(&facing.step(cell)) {
                    graph.add_edge(pose, (facing.step(cell), facing), 1).unwrap();
                }
                for turned in [facing.left(), facing.right()] {
                    if open.contains(&turned.step(cell)) {
                        graph.add_edge(pose, (cell, turned), 1000).unwrap();
                    }
                }
            }
        }

        Maze { start, end, graph }
    }

    /// Lowest score and the number of tiles on any lowest-score route
    fn solve(&self) -> (u64, usize) {
        let result = self
            .graph
            .shortest_paths_from((self.start, Direction::East))
            .unwrap();

        let endings: Vec<Pose> = Direction::ALL
            .iter()
            .map(|&d| (self.end, d))
            .filter(|pose| result.is_reachable(pose))
            .collect();
        let best = endings
            .iter()
            .filter_map(|pose| result.distance(pose))
            .min()
            .unwrap();
        let best_endings: Vec<&Pose> = endings
            .iter()
            .filter(|pose| result.distance(pose) == Some(best))
            .collect();

        let tiles: HashSet<(i32, i32)> = result
            .vertices_on_shortest_paths(best_endings.iter().copied())
            .into_iter()
            .map(|(cell, _)| cell)
            .collect();

        // Enumerating every route must cover exactly the same tiles
        let enumerated: HashSet<(i32, i32)> = best_endings
            .iter()
            .flat_map(|pose| result.paths_to(pose))
            .flatten()
            .map(|(cell, _)| cell)
            .collect();
        assert_eq!(tiles, enumerated);

        (best, tiles.len())
    }
}

const SMALL: &str = "
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

const LARGER: &str = "
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

#[test]
fn test_small_maze() {
    let maze = Maze::parse(SMALL);
    assert_eq!(maze.solve(), (7036, 45));
}

#[test]
fn test_larger_maze() {
    let maze = Maze::parse(LARGER);
    assert_eq!(maze.solve(), (11048, 64));
}
