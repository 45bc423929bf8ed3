use grid_util::point::Point;

/// What occupies a position of the layout. The discriminants are the codes used in the input grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellKind {
    Blank = 0,
    Start = 1,
    End = 2,
    Obstacle = 3,
}

impl CellKind {
    /// Decodes an input code. Codes above the highest known kind clamp to [CellKind::Obstacle].
    pub fn from_code(code: u32) -> CellKind {
        match code {
            0 => CellKind::Blank,
            1 => CellKind::Start,
            2 => CellKind::End,
            _ => CellKind::Obstacle,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn is_passable(self) -> bool {
        self != CellKind::Obstacle
    }
}

/// A position of the layout together with its kind. Neither changes after the layout is built;
/// search annotations live in the search state, keyed by [Point].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub point: Point,
    pub kind: CellKind,
}

impl Cell {
    pub fn new(x: i32, y: i32, kind: CellKind) -> Cell {
        Cell {
            point: Point::new(x, y),
            kind,
        }
    }
    pub fn x(&self) -> i32 {
        self.point.x
    }
    pub fn y(&self) -> i32 {
        self.point.y
    }
    pub fn is_start(&self) -> bool {
        self.kind == CellKind::Start
    }
    pub fn is_end(&self) -> bool {
        self.kind == CellKind::End
    }
    pub fn is_obstacle(&self) -> bool {
        self.kind == CellKind::Obstacle
    }
}
