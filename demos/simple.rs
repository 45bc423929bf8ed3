use grid_astar::AStar;

// In this example a path is found on a 5x7 layout with shape
// .......
// ...#...
// .S.#.E.
// ...#...
// .......
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Cells have an 8-neighbourhood

fn main() {
    let mut astar = AStar::new(&[
        [0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 3, 0, 0, 0],
        [0, 1, 0, 3, 0, 2, 0],
        [0, 0, 0, 3, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0u32],
    ])
    .unwrap();
    println!("{}", astar.layout());
    if astar.search() {
        println!("Path:");
        for p in astar.get_result().unwrap() {
            println!("{:?}", p);
        }
        println!("Cost: {}", astar.path_cost().unwrap());
        println!("{}", astar.render_path().unwrap());
    }
}
