use grid_astar::{AStar, Error};

// The end is walled in, so no path exists and asking for the result is an error.
// S....
// .###.
// .#E#.
// .###.

fn main() {
    let mut astar = AStar::new(&[
        [1, 0, 0, 0, 0],
        [0, 3, 3, 3, 0],
        [0, 3, 2, 3, 0],
        [0, 3, 3, 3, 0u32],
    ])
    .unwrap();
    let found = astar.search();
    println!("Path found: {found}");
    match astar.get_result() {
        Ok(path) => println!("{:?}", path),
        Err(Error::PathNotFound) => println!("No path to report"),
        Err(e) => println!("{e}"),
    }
    // Without start or end the layout is rejected outright.
    if let Err(e) = AStar::new(&[[0u32, 0], [0, 2]]) {
        println!("{e}");
    }
}
