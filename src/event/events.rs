use crate::color::Rgb;
use crate::config::Resolution;
use crate::grid::CellIndex;
use crate::state::PaintMode;

/// Observable changes made by the sheet controller
#[derive(Debug, Clone, PartialEq)]
pub enum SheetEvent {
    ModeChanged {
        old: PaintMode,
        new: PaintMode,
    },
    /// The active color was (re)committed, which also repaints the swatch
    ColorSelected(Rgb),
    /// The grid was thrown away and rebuilt with blank cells
    GridBuilt {
        resolution: Resolution,
    },
    CellPainted {
        cell: CellIndex,
        fill: Rgb,
    },
}
