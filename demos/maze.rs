//! Random cave demo: carve open space with a drunk walk, pick two far-apart
//! cells, solve with Manhattan A*, and print the map with the path overlaid.

use std::collections::HashSet;

use bestfirst::{Candidate, Search, manhattan};
use rand::RngExt;

const WIDTH: i32 = 48;
const HEIGHT: i32 = 18;

fn main() {
    let mut rng = rand::rng();
    let mut floor: HashSet<(i32, i32)> = HashSet::new();

    // Carve from the center until ~45% of the map is open.
    let target = (WIDTH * HEIGHT) as usize * 45 / 100;
    let mut pos = (WIDTH / 2, HEIGHT / 2);
    floor.insert(pos);
    while floor.len() < target {
        match rng.random_range(0..4u32) {
            0 => pos.0 = (pos.0 + 1).min(WIDTH - 1),
            1 => pos.0 = (pos.0 - 1).max(0),
            2 => pos.1 = (pos.1 + 1).min(HEIGHT - 1),
            _ => pos.1 = (pos.1 - 1).max(0),
        }
        floor.insert(pos);
    }

    // Endpoints: the carved cells nearest the top-left and bottom-right.
    let start = *floor.iter().min_by_key(|&&(x, y)| (x + y, x)).unwrap();
    let goal = *floor.iter().max_by_key(|&&(x, y)| (x + y, x)).unwrap();

    let mut search = Search::new();
    let path = search.path(
        Candidate::new(start, 0.0, manhattan(start, goal)),
        |node| {
            let (x, y) = node.id;
            [(x - 1, y), (x, y - 1), (x + 1, y), (x, y + 1)]
                .into_iter()
                .filter(|p| floor.contains(p))
                .map(|p| Candidate::new(p, node.cost + 1.0, manhattan(p, goal)))
                .collect::<Vec<_>>()
        },
    );

    let on_path: HashSet<(i32, i32)> = path.iter().map(|n| n.id).collect();
    for y in 0..HEIGHT {
        let mut row = String::with_capacity(WIDTH as usize);
        for x in 0..WIDTH {
            let cell = (x, y);
            row.push(if cell == start {
                'S'
            } else if cell == goal {
                'G'
            } else if on_path.contains(&cell) {
                '*'
            } else if floor.contains(&cell) {
                '.'
            } else {
                '#'
            });
        }
        println!("{row}");
    }

    if path.is_empty() {
        println!("no path from {start:?} to {goal:?}");
    } else {
        println!("{} steps from {start:?} to {goal:?}", path.len() - 1);
    }
}
