#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;

pub use app::{PixelSheetApp, Preferences};
pub use color::Rgb;
pub use config::{Resolution, SheetConfig};
pub use error::{SheetError, SheetResult};
pub use event::{EventBus, EventHandler, SheetEvent};
pub use grid::{Cell, CellIndex, Grid};
pub use input::{InputEvent, InputHandler, PointerSnapshot};
pub use renderer::SheetRenderer;
pub use state::{PaintMode, SheetController, SheetState};
