use crate::cell::{Cell, CellKind};
use crate::error::LayoutError;
use core::fmt;
use grid_util::point::Point;
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Offsets of the 8-neighbourhood together with whether the step is diagonal. The order is
/// top-left, top-centre, top-right, centre-right, bottom-right, bottom-centre, bottom-left,
/// centre-left and is the order in which neighbours are discovered during search.
const NEIGHBOURHOOD: [(i32, i32, bool); 8] = [
    (-1, 1, true),
    (0, 1, false),
    (1, 1, true),
    (1, 0, false),
    (1, -1, true),
    (0, -1, false),
    (-1, -1, true),
    (-1, 0, false),
];

/// The grid model: a fixed rectangle of [Cell]s indexed `[x][y]` with `x` the row and `y` the
/// column of the input, plus the identified start and end cells. Connected components over the
/// passable cells are computed once at construction so unreachable ends can be detected without
/// searching.
#[derive(Clone, Debug)]
pub struct Layout {
    cells: Vec<Cell>,
    len_x: usize,
    len_y: usize,
    start: Point,
    end: Point,
    components: UnionFind<usize>,
}

impl Layout {
    /// Builds a layout from rows of cell codes (0 blank, 1 start, 2 end, 3 obstacle; higher codes
    /// are obstacles). If several start or end cells exist, the last one in row-major order is
    /// used.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Layout, LayoutError> {
        let len_x = rows.len();
        let len_y = rows.first().map_or(0, |row| row.as_ref().len());
        if len_x == 0 || len_y == 0 {
            return Err(LayoutError::Empty);
        }
        let mut cells = Vec::with_capacity(len_x * len_y);
        let mut start = None;
        let mut end = None;
        for (x, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != len_y {
                return Err(LayoutError::Ragged {
                    row: x,
                    expected: len_y,
                    found: row.len(),
                });
            }
            for (y, &code) in row.iter().enumerate() {
                let cell = Cell::new(x as i32, y as i32, CellKind::from_code(code));
                match cell.kind {
                    CellKind::Start => {
                        if let Some(previous) = start.replace(cell.point) {
                            warn!("Multiple starts, {} replaces {}", cell.point, previous);
                        }
                    }
                    CellKind::End => {
                        if let Some(previous) = end.replace(cell.point) {
                            warn!("Multiple ends, {} replaces {}", cell.point, previous);
                        }
                    }
                    _ => {}
                }
                cells.push(cell);
            }
        }
        let start = start.ok_or(LayoutError::NoStart)?;
        let end = end.ok_or(LayoutError::NoEnd)?;
        let mut layout = Layout {
            cells,
            len_x,
            len_y,
            start,
            end,
            components: UnionFind::new(len_x * len_y),
        };
        layout.generate_components();
        Ok(layout)
    }

    pub fn len_x(&self) -> usize {
        self.len_x
    }
    pub fn len_y(&self) -> usize {
        self.len_y
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.len_x && (y as usize) < self.len_y
    }

    fn ix(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(x as usize * self.len_y + y as usize)
        } else {
            None
        }
    }

    /// Bounds-checked lookup; [None] outside the layout.
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.ix(x, y).map(|ix| &self.cells[ix])
    }
    pub fn get_point(&self, point: Point) -> Option<&Cell> {
        self.get(point.x, point.y)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The in-bounds 8-neighbourhood of a point, each with a flag telling whether the step to it is
    /// diagonal. Obstacles are included.
    pub fn neighbourhood(&self, point: &Point) -> SmallVec<[(&Cell, bool); 8]> {
        NEIGHBOURHOOD
            .iter()
            .filter_map(|&(dx, dy, diagonal)| {
                self.get(point.x + dx, point.y + dy)
                    .map(|cell| (cell, diagonal))
            })
            .collect()
    }

    /// Checks if both points are passable and on the same connected component.
    pub fn reachable(&self, a: &Point, b: &Point) -> bool {
        match (self.ix(a.x, a.y), self.ix(b.x, b.y)) {
            (Some(a_ix), Some(b_ix)) => {
                self.cells[a_ix].kind.is_passable()
                    && self.cells[b_ix].kind.is_passable()
                    && self.components.equiv(a_ix, b_ix)
            }
            _ => false,
        }
    }

    /// Links every passable cell with its passable neighbours in a fresh [UnionFind].
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.cells.len());
        for (ix, cell) in self.cells.iter().enumerate() {
            if !cell.kind.is_passable() {
                continue;
            }
            // Links forward only, the backward links are made from the other side.
            for &(dx, dy, _) in &NEIGHBOURHOOD[1..5] {
                if let Some(n_ix) = self.ix(cell.x() + dx, cell.y() + dy) {
                    if self.cells[n_ix].kind.is_passable() {
                        components.union(ix, n_ix);
                    }
                }
            }
        }
        self.components = components;
        info!(
            "Generated connected components for {}x{} layout",
            self.len_x, self.len_y
        );
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.len_y) {
            let values = row.iter().map(|c| c.kind.code()).collect::<Vec<u32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
