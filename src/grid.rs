use crate::color::Rgb;
use crate::config::Resolution;

/// Position of a cell on the sheet. Row-major, zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub row: usize,
    pub col: usize,
}

impl CellIndex {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single square of the sheet. Only the fill is stored; the outline is
/// derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    fill: Rgb,
}

impl Cell {
    pub fn new(fill: Rgb) -> Self {
        Self { fill }
    }

    pub fn fill(&self) -> Rgb {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Rgb) {
        self.fill = fill;
    }

    pub fn has_border(&self) -> bool {
        self.fill.needs_border()
    }
}

/// The N×N cells of the sheet, stored row-major.
///
/// A grid never changes shape: resizing or resetting the sheet builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    resolution: Resolution,
    cell_size: f32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid of blank cells spanning `surface_size` points per side.
    pub fn new(resolution: Resolution, surface_size: f32, blank: Rgb) -> Self {
        Self {
            resolution,
            cell_size: surface_size / resolution.get() as f32,
            cells: vec![Cell::new(blank); resolution.cell_count()],
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Edge length of every cell
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn surface_size(&self) -> f32 {
        self.cell_size * self.resolution.get() as f32
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Arena slot of `index`, or `None` if it lies outside the grid.
    pub fn slot(&self, index: CellIndex) -> Option<usize> {
        let n = self.resolution.get() as usize;
        (index.row < n && index.col < n).then(|| index.row * n + index.col)
    }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        self.slot(index).map(|slot| &self.cells[slot])
    }

    pub fn cell_mut(&mut self, index: CellIndex) -> Option<&mut Cell> {
        self.slot(index).map(move |slot| &mut self.cells[slot])
    }

    /// All cells with their positions, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &Cell)> + '_ {
        let n = self.resolution.get() as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(slot, cell)| (CellIndex::new(slot / n, slot % n), cell))
    }
}
