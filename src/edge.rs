use grid_util::point::Point;

/// How a cell was reached: the neighbour it was reached from, the cost so far and the estimate of
/// the remaining distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathEdge {
    /// The parent cell.
    pub target: Point,
    /// Accumulated cost from the start through `target` to the owner of this edge.
    pub g: f64,
    /// Estimated distance from the owner of this edge to the end.
    pub h: f64,
    /// Whether the step from `target` is diagonal.
    pub diagonal: bool,
}

impl PathEdge {
    pub fn new(target: Point, g: f64, h: f64, diagonal: bool) -> PathEdge {
        PathEdge {
            target,
            g,
            h,
            diagonal,
        }
    }

    /// The overall score, lower is better.
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}
