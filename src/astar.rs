use crate::cell::CellKind;
use crate::edge::PathEdge;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::search::SearchContext;
use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, info};

/// Searches a path from the start to the end of a [Layout] without crossing obstacles, using A*
/// with the euclidean distance as heuristic.
///
/// ```
/// use grid_astar::AStar;
///
/// let mut astar = AStar::new(&[
///     [0, 0, 0, 0, 0, 0, 0],
///     [0, 0, 0, 3, 0, 0, 0],
///     [0, 1, 0, 3, 0, 2, 0],
///     [0, 0, 0, 3, 0, 0, 0],
///     [0, 0, 0, 0, 0, 0, 0u32],
/// ])
/// .unwrap();
/// assert!(astar.search());
/// let path = astar.get_result().unwrap();
/// assert_eq!(path.last(), Some(&(2, 5)));
/// ```
#[derive(Clone, Debug)]
pub struct AStar {
    /// Scales the heuristic. Values above 1.0 give weighted A*, which expands fewer cells but may
    /// return longer paths.
    pub heuristic_factor: f64,
    /// Skips the search when the layout's connected components show the end cannot be reached.
    pub use_components: bool,
    layout: Layout,
    context: SearchContext,
}

impl AStar {
    /// Builds the layout from rows of cell codes, see [Layout::from_rows].
    pub fn new<R: AsRef<[u32]>>(rows: &[R]) -> Result<AStar> {
        Ok(AStar::from_layout(Layout::from_rows(rows)?))
    }

    pub fn from_layout(layout: Layout) -> AStar {
        AStar {
            heuristic_factor: 1.0,
            use_components: true,
            layout,
            context: SearchContext::new(),
        }
    }

    /// Runs a complete search, discarding the state of any earlier one. Returns whether a path
    /// from start to end exists.
    pub fn search(&mut self) -> bool {
        let start = self.layout.start();
        let end = self.layout.end();
        if self.use_components && !self.layout.reachable(&start, &end) {
            self.context.clear();
            info!("{} is not reachable from {}", end, start);
            return false;
        }
        let found = self.context.run(&self.layout, self.heuristic_factor);
        if found {
            info!("Found path from {} to {}", start, end);
        } else {
            info!("No path from {} to {}", start, end);
        }
        debug!("Expanded {} cells", self.context.expanded());
        found
    }

    /// The path found by the last [search](Self::search) as `(x, y)` pairs, from the cell after
    /// the start up to and including the end.
    pub fn get_result(&self) -> Result<Vec<(i32, i32)>> {
        Ok(self.get_path()?.into_iter().map(|p| (p.x, p.y)).collect())
    }

    /// Same as [get_result](Self::get_result) but as [Point]s.
    pub fn get_path(&self) -> Result<Vec<Point>> {
        self.context.reverse_path().ok_or(Error::PathNotFound)
    }

    /// Cost of the found path, with orthogonal steps costing
    /// [ORTHOGONAL_COST](crate::ORTHOGONAL_COST) and diagonal steps
    /// [DIAGONAL_COST](crate::DIAGONAL_COST).
    pub fn path_cost(&self) -> Result<f64> {
        self.context
            .end_edge()
            .map(|edge| edge.g)
            .ok_or(Error::PathNotFound)
    }

    /// The best edge the last search recorded for a cell, if it was discovered.
    pub fn edge(&self, x: i32, y: i32) -> Option<&PathEdge> {
        self.context.edge(&Point::new(x, y))
    }

    /// Number of cells taken off the frontier by the last search.
    pub fn expanded(&self) -> usize {
        self.context.expanded()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn get_len_x(&self) -> usize {
        self.layout.len_x()
    }

    pub fn get_len_y(&self) -> usize {
        self.layout.len_y()
    }

    /// Draws the layout one row per line with `S` start, `E` end, `#` obstacles, `*` the path
    /// and `.` everything else.
    pub fn render_path(&self) -> Result<String> {
        let path = self.get_path()?;
        let rendered = (0..self.get_len_x() as i32)
            .map(|x| {
                (0..self.get_len_y() as i32)
                    .map(|y| match self.layout.get(x, y).map(|c| c.kind) {
                        Some(CellKind::Start) => 'S',
                        Some(CellKind::End) => 'E',
                        Some(CellKind::Obstacle) => '#',
                        _ if path.contains(&Point::new(x, y)) => '*',
                        _ => '.',
                    })
                    .collect::<String>()
            })
            .join("\n");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;

    fn example() -> AStar {
        AStar::new(&[
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 3, 0, 0, 0],
            [0, 1, 0, 3, 0, 2, 0],
            [0, 0, 0, 3, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0u32],
        ])
        .unwrap()
    }

    /// Asserts that the path around the obstacle column is found and is optimal.
    #[test]
    fn solve_example() {
        let mut astar = example();
        assert!(astar.search());
        let path = astar.get_result().unwrap();
        assert_eq!(path, vec![(1, 2), (0, 3), (1, 4), (2, 5)]);
        assert_eq!(astar.path_cost().unwrap(), 4.0 * crate::DIAGONAL_COST);
        assert_eq!((astar.get_len_x(), astar.get_len_y()), (5, 7));
    }

    #[test]
    fn result_before_search_is_an_error() {
        let astar = example();
        assert_eq!(astar.get_result(), Err(Error::PathNotFound));
        assert_eq!(astar.path_cost(), Err(Error::PathNotFound));
    }

    #[test]
    fn missing_end_is_invalid_layout() {
        let err = AStar::new(&[[1u32, 0], [0, 0]]).unwrap_err();
        assert_eq!(err, Error::InvalidLayout(LayoutError::NoEnd));
    }

    /// An enclosed end is reported as no path, both with and without the component check.
    #[test]
    fn enclosed_end() {
        for use_components in [true, false] {
            let mut astar = AStar::new(&[
                [1, 0, 0, 0, 0],
                [0, 0, 3, 3, 3],
                [0, 0, 3, 2, 3],
                [0, 0, 3, 3, 3u32],
            ])
            .unwrap();
            astar.use_components = use_components;
            assert!(!astar.search());
            assert_eq!(astar.get_result(), Err(Error::PathNotFound));
            if use_components {
                assert_eq!(astar.expanded(), 0);
            } else {
                assert_eq!(astar.expanded(), 11);
            }
        }
    }

    /// A failed search clears the result of an earlier successful one.
    #[test]
    fn failed_search_clears_result() {
        let mut astar = example();
        assert!(astar.search());
        assert!(astar.get_result().is_ok());
        astar.layout = Layout::from_rows(&[[1u32, 3, 2]]).unwrap();
        assert!(!astar.search());
        assert!(astar.get_result().is_err());
    }

    #[test]
    fn edges_are_recorded() {
        let mut astar = AStar::new(&[[1u32, 0], [0, 2]]).unwrap();
        assert!(astar.search());
        let edge = astar.edge(1, 1).unwrap();
        assert_eq!(edge.target, Point::new(0, 0));
        assert!(edge.diagonal);
        assert!(astar.edge(0, 0).is_none());
        assert_eq!(astar.get_result().unwrap(), vec![(1, 1)]);
    }

    #[test]
    fn render_marks_path() {
        let mut astar = AStar::new(&[[1u32, 0, 0], [0, 3, 0], [0, 0, 2]]).unwrap();
        assert!(astar.search());
        assert_eq!(astar.render_path().unwrap(), "S*.\n.#*\n..E");
    }
}
