mod swatch;
mod tool_button;

pub use swatch::swatch_button;
pub use tool_button::ToggleButton;
