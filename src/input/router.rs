use egui::PointerButton;

use super::InputEvent;
use crate::color::Rgb;
use crate::state::SheetController;

/// Applies one input event to the sheet and returns the fill it painted.
///
/// A primary press paints the cell under the pointer. Entering a cell paints
/// it only while the primary button, and nothing else, is held. Everything
/// else is ignored.
pub fn route_event(event: &InputEvent, sheet: &mut SheetController) -> Option<Rgb> {
    match event {
        InputEvent::PointerDown {
            cell,
            button: PointerButton::Primary,
        } => sheet.paint(*cell),
        InputEvent::CellEntered { cell, held_buttons }
            if held_buttons.as_slice() == [PointerButton::Primary] =>
        {
            sheet.paint(*cell)
        }
        _ => None,
    }
}
