use crate::config::Resolution;
use crate::grid::Grid;

/// Lifecycle of the drawing sheet.
///
/// ```text
///                  build(N)
/// ┌───────────────┐        ┌──────────┐
/// │ Uninitialized ├───────►│ Built(N) ├──┐ build(M) / reset
/// └───────────────┘        └────▲─────┘  │
///                               └────────┘
/// ```
///
/// Every `build` replaces the whole grid; there is no way back to
/// `Uninitialized`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SheetState {
    /// No grid has been built yet
    #[default]
    Uninitialized,
    /// A grid of the contained resolution is live
    Built(Grid),
}

impl SheetState {
    pub fn is_built(&self) -> bool {
        matches!(self, SheetState::Built(_))
    }

    /// Resolution of the live grid, if any
    pub fn resolution(&self) -> Option<Resolution> {
        self.grid().map(Grid::resolution)
    }

    pub fn grid(&self) -> Option<&Grid> {
        match self {
            SheetState::Built(grid) => Some(grid),
            SheetState::Uninitialized => None,
        }
    }

    pub fn grid_mut(&mut self) -> Option<&mut Grid> {
        match self {
            SheetState::Built(grid) => Some(grid),
            SheetState::Uninitialized => None,
        }
    }
}
