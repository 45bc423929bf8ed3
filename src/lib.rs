//! # grid_astar
//!
//! Shortest paths on a grid of blank and obstacle cells between one start and one end cell, using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [euclidean distance](https://en.wikipedia.org/wiki/Euclidean_distance) to the end as
//! heuristic. Moves go to any of the 8 neighbours; orthogonal steps cost [ORTHOGONAL_COST] and
//! diagonal steps [DIAGONAL_COST]. [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! are computed when the layout is built so an unreachable end is reported without flood-filling.
//!
//! Layouts are given as rows of codes: 0 blank, 1 start, 2 end, 3 obstacle. Codes above 3 are
//! obstacles.
pub mod astar;
pub mod cell;
pub mod edge;
pub mod error;
pub mod layout;
mod search;

pub use astar::AStar;
pub use cell::{Cell, CellKind};
pub use edge::PathEdge;
pub use error::{Error, LayoutError, Result};
pub use grid_util::point::Point;
pub use layout::Layout;
pub use search::euclidean_distance;

/// Cost of a step to an orthogonal neighbour.
pub const ORTHOGONAL_COST: f64 = 10.0;
/// Cost of a step to a diagonal neighbour, approximately `ORTHOGONAL_COST * sqrt(2)`.
pub const DIAGONAL_COST: f64 = 14.0;
