mod controller;
mod mode;
mod sheet_state;

pub use controller::SheetController;
pub use mode::{ModeController, PaintMode, Swatch};
pub use sheet_state::SheetState;
