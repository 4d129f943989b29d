//! The sheet controller: one object holding everything the painter mutates.
//!
//! UI handlers receive `&mut SheetController` and call exactly one operation
//! per event. Each operation runs to completion and publishes what it changed
//! on the controller's [`EventBus`].

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::mode::{ModeController, PaintMode, Swatch};
use super::sheet_state::SheetState;
use crate::color::Rgb;
use crate::config::{Resolution, SheetConfig};
use crate::event::{EventBus, EventHandler, LogHandler, SheetEvent};
use crate::grid::{Cell, CellIndex, Grid};

#[derive(Debug)]
pub struct SheetController {
    config: SheetConfig,
    modes: ModeController,
    resolution: Resolution,
    state: SheetState,
    rng: StdRng,
    events: EventBus,
}

impl SheetController {
    /// Creates a controller and builds the grid at the configured default
    /// resolution.
    pub fn new(config: SheetConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Like [`SheetController::new`] with a caller-provided random source.
    pub fn with_rng(config: SheetConfig, rng: StdRng) -> Self {
        let mut controller = Self::uninitialized(config, rng);
        controller.build(controller.resolution);
        controller
    }

    /// A controller with no grid yet. Call [`SheetController::build`] before
    /// painting. An invalid config is replaced by the defaults.
    pub fn uninitialized(config: SheetConfig, rng: StdRng) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("Ignoring sheet config: {}", err);
                SheetConfig::default()
            }
        };
        let events = EventBus::new();
        events.subscribe(Box::new(LogHandler));

        Self {
            modes: ModeController::new(config.initial_color),
            resolution: config.default_resolution(),
            state: SheetState::Uninitialized,
            rng,
            events,
            config,
        }
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn state(&self) -> &SheetState {
        &self.state
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.state.grid()
    }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        self.grid().and_then(|grid| grid.cell(index))
    }

    pub fn mode(&self) -> PaintMode {
        self.modes.mode()
    }

    pub fn active_color(&self) -> Rgb {
        self.modes.active_color()
    }

    pub fn swatch(&self) -> Swatch {
        self.modes.swatch()
    }

    pub fn is_rainbow(&self) -> bool {
        self.modes.is_rainbow()
    }

    pub fn is_eraser(&self) -> bool {
        self.modes.is_eraser()
    }

    /// Stored resolution; this is what the slider and its label show.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn resolution_label(&self) -> String {
        self.resolution.to_string()
    }

    pub fn select_color(&mut self, color: Rgb) {
        let old = self.modes.mode();
        self.modes.select_color(color);
        self.emit_mode_change(old);
        self.events.emit(SheetEvent::ColorSelected(color));
    }

    pub fn toggle_rainbow(&mut self) {
        let old = self.modes.mode();
        self.modes.toggle_rainbow();
        self.emit_mode_change(old);
        if old == PaintMode::Rainbow {
            self.events.emit(SheetEvent::ColorSelected(self.modes.active_color()));
        }
    }

    pub fn toggle_eraser(&mut self) {
        let old = self.modes.mode();
        self.modes.toggle_eraser();
        self.emit_mode_change(old);
        if old == PaintMode::Eraser {
            self.events.emit(SheetEvent::ColorSelected(self.modes.active_color()));
        }
    }

    /// Commits a random color, leaving any special mode.
    pub fn randomize(&mut self) -> Rgb {
        let old = self.modes.mode();
        let color = self.modes.randomize(&mut self.rng);
        self.emit_mode_change(old);
        self.events.emit(SheetEvent::ColorSelected(color));
        color
    }

    /// Colors one cell according to the current mode and returns the new fill.
    ///
    /// Rainbow fills are drawn fresh for every call and never become the
    /// active color. Returns `None` without side effects when no grid is built
    /// or `index` is off the grid.
    pub fn paint(&mut self, index: CellIndex) -> Option<Rgb> {
        let fill = match self.modes.mode() {
            PaintMode::Normal => self.modes.active_color(),
            PaintMode::Eraser => self.config.blank_color,
            PaintMode::Rainbow => {
                // off-grid targets must not consume randomness
                self.grid().and_then(|grid| grid.cell(index))?;
                Rgb::random(&mut self.rng)
            }
        };

        let cell = self.state.grid_mut()?.cell_mut(index)?;
        cell.set_fill(fill);
        self.events.emit(SheetEvent::CellPainted { cell: index, fill });
        Some(fill)
    }

    /// Replaces the grid with `resolution` × `resolution` blank cells and
    /// returns to normal painting. The active color is kept, and
    /// `resolution` becomes the one `reset` rebuilds at.
    pub fn build(&mut self, resolution: Resolution) {
        self.resolution = resolution;
        let old = self.modes.mode();
        self.modes.exit_special_modes();
        self.emit_mode_change(old);

        self.state = SheetState::Built(Grid::new(
            resolution,
            self.config.surface_size,
            self.config.blank_color,
        ));
        log::info!("Built {}x{} sheet", resolution, resolution);
        self.events.emit(SheetEvent::GridBuilt { resolution });
    }

    /// Clears the sheet at the current resolution.
    pub fn reset(&mut self) {
        self.build(self.resolution);
    }

    /// Stores the new resolution and rebuilds the grid with it. Values outside
    /// the configured bounds are clamped.
    pub fn resize(&mut self, value: u32) {
        self.build(Resolution::new(value, &self.config));
    }

    fn emit_mode_change(&self, old: PaintMode) {
        let new = self.modes.mode();
        if old != new {
            self.events.emit(SheetEvent::ModeChanged { old, new });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventRecorder;

    const SLATE: Rgb = Rgb::new(0x33, 0x66, 0x99);

    fn controller() -> SheetController {
        SheetController::with_rng(SheetConfig::default(), StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_starts_built_at_default_resolution() {
        let sheet = controller();
        assert!(sheet.state().is_built());
        assert_eq!(sheet.resolution().get(), 16);
        assert_eq!(sheet.grid().unwrap().len(), 256);
        assert_eq!(sheet.resolution_label(), "16");
        assert_eq!(sheet.mode(), PaintMode::Normal);
    }

    #[test]
    fn test_uninitialized_paint_is_noop() {
        let mut sheet = SheetController::uninitialized(SheetConfig::default(), StdRng::seed_from_u64(1));
        assert!(!sheet.state().is_built());
        assert_eq!(sheet.paint(CellIndex::new(0, 0)), None);

        sheet.reset();
        assert!(sheet.state().is_built());
        assert_eq!(sheet.grid().unwrap().len(), 256);
    }

    #[test]
    fn test_off_grid_paint_is_noop() {
        let mut sheet = controller();
        let recorder = EventRecorder::new();
        sheet.subscribe(Box::new(recorder.clone()));
        sheet.toggle_rainbow();
        recorder.take();

        assert_eq!(sheet.paint(CellIndex::new(16, 0)), None);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_reset_after_build_keeps_built_resolution() {
        let mut sheet = controller();
        let eight = Resolution::new(8, sheet.config());
        sheet.build(eight);
        assert_eq!(sheet.resolution(), eight);
        assert_eq!(sheet.resolution_label(), "8");

        sheet.reset();
        assert_eq!(sheet.grid().unwrap().resolution().get(), 8);
        assert_eq!(sheet.grid().unwrap().len(), 64);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = SheetConfig {
            min_resolution: 10,
            max_resolution: 5,
            ..SheetConfig::default()
        };
        let mut sheet = SheetController::with_rng(config, StdRng::seed_from_u64(1));
        assert_eq!(sheet.config(), &SheetConfig::default());
        assert_eq!(sheet.grid().unwrap().len(), 256);

        sheet.resize(7);
        assert_eq!(sheet.grid().unwrap().len(), 49);
    }

    #[test]
    fn test_build_exits_modes_but_keeps_color() {
        let mut sheet = controller();
        sheet.select_color(SLATE);
        sheet.toggle_eraser();
        sheet.resize(8);
        assert_eq!(sheet.mode(), PaintMode::Normal);
        assert_eq!(sheet.active_color(), SLATE);
    }

    #[test]
    fn test_events_describe_changes() {
        let mut sheet = controller();
        let recorder = EventRecorder::new();
        sheet.subscribe(Box::new(recorder.clone()));

        sheet.toggle_rainbow();
        sheet.select_color(SLATE);
        sheet.paint(CellIndex::new(2, 3));
        sheet.resize(4);

        let resolution = Resolution::new(4, sheet.config());
        assert_eq!(
            recorder.events(),
            vec![
                SheetEvent::ModeChanged { old: PaintMode::Normal, new: PaintMode::Rainbow },
                SheetEvent::ModeChanged { old: PaintMode::Rainbow, new: PaintMode::Normal },
                SheetEvent::ColorSelected(SLATE),
                SheetEvent::CellPainted { cell: CellIndex::new(2, 3), fill: SLATE },
                SheetEvent::GridBuilt { resolution },
            ]
        );
    }

    #[test]
    fn test_leaving_eraser_by_toggle_recommits_color() {
        let mut sheet = controller();
        let recorder = EventRecorder::new();
        sheet.select_color(SLATE);
        sheet.subscribe(Box::new(recorder.clone()));

        sheet.toggle_eraser();
        sheet.toggle_eraser();
        assert_eq!(
            recorder.events(),
            vec![
                SheetEvent::ModeChanged { old: PaintMode::Normal, new: PaintMode::Eraser },
                SheetEvent::ModeChanged { old: PaintMode::Eraser, new: PaintMode::Normal },
                SheetEvent::ColorSelected(SLATE),
            ]
        );
    }
}
