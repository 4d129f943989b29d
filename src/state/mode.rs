use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// How a paint action colors a cell. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaintMode {
    /// Paint with the active color
    #[default]
    Normal,
    /// Paint every cell with its own random color
    Rainbow,
    /// Paint with the blank color
    Eraser,
}

/// Preview square next to the picker showing the active color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub fill: Rgb,
    pub bordered: bool,
}

impl Swatch {
    fn of(fill: Rgb) -> Self {
        Self {
            fill,
            bordered: fill.needs_border(),
        }
    }
}

/// Owns the active paint mode and the active color.
///
/// # Mode transitions
///
/// ```text
///            toggle_rainbow            toggle_eraser
///  Normal ──────────────────► Rainbow ──────────────► Eraser
///    ▲  ◄──────────────────    │   ◄──────────────    │
///    │     toggle_rainbow      │    toggle_rainbow    │
///    │                         │                      │
///    └──── select_color / randomize (from any mode) ──┘
/// ```
///
/// Leaving Rainbow or Eraser by toggling it again re-commits the active color,
/// exactly as if the user had picked it.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeController {
    mode: PaintMode,
    active_color: Rgb,
    swatch: Swatch,
}

impl ModeController {
    pub fn new(initial_color: Rgb) -> Self {
        Self {
            mode: PaintMode::Normal,
            active_color: initial_color,
            swatch: Swatch::of(initial_color),
        }
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn active_color(&self) -> Rgb {
        self.active_color
    }

    pub fn swatch(&self) -> Swatch {
        self.swatch
    }

    pub fn is_rainbow(&self) -> bool {
        self.mode == PaintMode::Rainbow
    }

    pub fn is_eraser(&self) -> bool {
        self.mode == PaintMode::Eraser
    }

    /// Commits `color` as the active color and returns to normal painting.
    pub fn select_color(&mut self, color: Rgb) {
        self.mode = PaintMode::Normal;
        self.active_color = color;
        self.swatch = Swatch::of(color);
    }

    pub fn toggle_rainbow(&mut self) {
        if self.is_rainbow() {
            self.select_color(self.active_color);
        } else {
            self.mode = PaintMode::Rainbow;
        }
    }

    pub fn toggle_eraser(&mut self) {
        if self.is_eraser() {
            self.select_color(self.active_color);
        } else {
            self.mode = PaintMode::Eraser;
        }
    }

    /// Commits a uniformly random color and returns it.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Rgb {
        let color = Rgb::random(rng);
        self.select_color(color);
        color
    }

    /// Drops back to normal painting without touching the active color or
    /// the swatch.
    pub fn exit_special_modes(&mut self) {
        self.mode = PaintMode::Normal;
    }
}
