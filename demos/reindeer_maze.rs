//! Finds every cheapest route through a maze where a step costs 1 and a quarter
//! turn costs 1000, then draws the tiles those routes use.

use colored::Colorize;
use std::collections::HashSet;
use weighted_paths::graph::MutableGraph;
use weighted_paths::WeightedGraph;

const MAZE: &str = "\
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
###############";

/// Unit vectors for north, east, south and west; turning is +/-1 mod 4
const HEADINGS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

type Cell = (i32, i32);
type Pose = (Cell, usize);

fn ahead((x, y): Cell, heading: usize) -> Cell {
    let (dx, dy) = HEADINGS[heading];
    (x + dx, y + dy)
}

fn main() -> weighted_paths::Result<()> {
    env_logger::init();

    let rows: Vec<Vec<char>> = MAZE.lines().map(|line| line.chars().collect()).collect();
    let mut open = HashSet::new();
    let mut start = (0, 0);
    let mut end = (0, 0);

    for (y, row) in rows.iter().enumerate() {
        for (x, &c) in row.iter().enumerate() {
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

    let mut graph: WeightedGraph<Pose> = WeightedGraph::new();
    for &cell in &open {
        for heading in 0..4 {
            if open.contains(&ahead(cell, heading)) {
                graph.add_edge((cell, heading), (ahead(cell, heading), heading), 1)?;
            }
            for turned in [(heading + 3) % 4, (heading + 1) % 4] {
                if open.contains(&ahead(cell, turned)) {
                    graph.add_edge((cell, heading), (cell, turned), 1000)?;
                }
            }
        }
    }

    // Facing east at the start
    let result = graph.shortest_paths_from((start, 1))?;

    let endings: Vec<Pose> = (0..4).map(|h| (end, h)).collect();
    let Some(best) = endings.iter().filter_map(|pose| result.distance(pose)).min() else {
        println!("{}", "The end cannot be reached".red());
        return Ok(());
    };
    let best_endings: Vec<&Pose> = endings
        .iter()
        .filter(|pose| result.distance(pose) == Some(best))
        .collect();

    let route_count: usize = best_endings
        .iter()
        .map(|pose| result.paths_to(pose).count())
        .sum();
    let tiles: HashSet<Cell> = result
        .vertices_on_shortest_paths(best_endings.iter().copied())
        .into_iter()
        .map(|(cell, _)| cell)
        .collect();

    for (y, row) in rows.iter().enumerate() {
        let line: String = row
            .iter()
            .enumerate()
            .map(|(x, &c)| {
                let cell = (x as i32, y as i32);
                if c == '#' {
                    "#".dimmed().to_string()
                } else if tiles.contains(&cell) {
                    "O".green().bold().to_string()
                } else {
                    ".".to_string()
                }
            })
            .collect();
        println!("{}", line);
    }

    println!("\nLowest score: {}", best.to_string().yellow());
    println!("Cheapest routes: {}", route_count);
    println!("Tiles on a cheapest route: {}", tiles.len().to_string().cyan());

    Ok(())
}
