use egui::{PointerButton, Rect};

use crate::geometry::cell_at;
use crate::grid::CellIndex;

mod router;
mod state;

pub use router::route_event;
pub use state::PointerSnapshot;

/// Pointer activity expressed in terms of sheet cells
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The pointer moved onto a cell it was not over in the previous frame
    CellEntered {
        cell: CellIndex,
        /// Buttons that were already held when the pointer arrived
        held_buttons: Vec<PointerButton>,
    },
    /// A button was pressed while over a cell
    PointerDown {
        cell: CellIndex,
        button: PointerButton,
    },
    /// The pointer left the sheet
    PointerLeft {
        last_cell: CellIndex,
    },
}

/// Turns per-frame pointer snapshots into cell events.
///
/// Only transitions are reported: moving around inside one cell produces
/// nothing, so a drag paints each cell once per entry.
#[derive(Debug, Default)]
pub struct InputHandler {
    hovered: Option<CellIndex>,
    resolution: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell under the pointer as of the last processed frame
    pub fn hovered_cell(&self) -> Option<CellIndex> {
        self.hovered
    }

    /// Process one frame of pointer input over a sheet drawn in `surface`
    /// with `resolution` cells per side.
    pub fn process(
        &mut self,
        snapshot: &PointerSnapshot,
        surface: Rect,
        resolution: u32,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        // a rebuilt grid has new cells, even where the indices repeat
        if resolution != self.resolution {
            self.resolution = resolution;
            self.hovered = None;
        }

        let hit = snapshot
            .hover_pos
            .and_then(|pos| cell_at(surface, resolution, pos));

        if hit != self.hovered {
            if let (Some(last_cell), None) = (self.hovered, hit) {
                events.push(InputEvent::PointerLeft { last_cell });
            }
            if let Some(cell) = hit {
                // entering happens before a press landing in the same frame
                let held_buttons = snapshot
                    .held
                    .iter()
                    .copied()
                    .filter(|button| !snapshot.pressed.contains(button))
                    .collect();
                events.push(InputEvent::CellEntered { cell, held_buttons });
            }
            self.hovered = hit;
        }

        if let Some(cell) = hit {
            for &button in &snapshot.pressed {
                events.push(InputEvent::PointerDown { cell, button });
            }
        }

        events
    }
}
