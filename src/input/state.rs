use egui::{Context, PointerButton, Pos2};

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// The pointer as seen in one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Pointer position, `None` when it is not over the sheet
    pub hover_pos: Option<Pos2>,
    /// Buttons held down this frame
    pub held: Vec<PointerButton>,
    /// Buttons that went down this frame
    pub pressed: Vec<PointerButton>,
}

impl PointerSnapshot {
    /// Reads the pointer state of the current egui frame.
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|i| Self {
            hover_pos: i.pointer.hover_pos(),
            held: BUTTONS
                .into_iter()
                .filter(|&button| i.pointer.button_down(button))
                .collect(),
            pressed: BUTTONS
                .into_iter()
                .filter(|&button| i.pointer.button_pressed(button))
                .collect(),
        })
    }

    /// Drops the position when the pointer is over something other than the
    /// sheet (another window, a panel).
    pub fn hidden_unless(mut self, over_sheet: bool) -> Self {
        if !over_sheet {
            self.hover_pos = None;
        }
        self
    }
}
