use crate::color::Rgb;
use crate::config::SheetConfig;
use crate::input::{InputHandler, PointerSnapshot, route_event};
use crate::panels::{central_panel, color_picker_window, tools_panel};
use crate::renderer::SheetRenderer;
use crate::state::SheetController;

/// What survives a restart. Cell contents are deliberately not part of it.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Preferences {
    pub active_color: Rgb,
    pub resolution: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        let config = SheetConfig::default();
        Self {
            active_color: config.initial_color,
            resolution: config.default_resolution,
        }
    }
}

impl Preferences {
    pub fn capture(sheet: &SheetController) -> Self {
        Self {
            active_color: sheet.active_color(),
            resolution: sheet.resolution().get(),
        }
    }

    /// Applies the saved color and resolution to a freshly built sheet.
    pub fn apply(&self, sheet: &mut SheetController) {
        sheet.select_color(self.active_color);
        if self.resolution != sheet.resolution().get() {
            sheet.resize(self.resolution);
        }
    }
}

pub struct PixelSheetApp {
    sheet: SheetController,
    input: InputHandler,
    renderer: SheetRenderer,
    picker_open: bool,
}

impl PixelSheetApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SheetConfig) -> Self {
        let mut app = Self::with_config(config);

        if let Some(storage) = cc.storage {
            if let Some(preferences) = eframe::get_value::<Preferences>(storage, eframe::APP_KEY) {
                log::info!(
                    "Restoring preferences: color {}, resolution {}",
                    preferences.active_color,
                    preferences.resolution
                );
                preferences.apply(&mut app.sheet);
            }
        }

        app
    }

    /// An app without any platform context, as used on startup before
    /// preferences are restored.
    pub fn with_config(config: SheetConfig) -> Self {
        Self {
            sheet: SheetController::new(config),
            input: InputHandler::new(),
            renderer: SheetRenderer::new(),
            picker_open: false,
        }
    }

    pub fn sheet(&self) -> &SheetController {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut SheetController {
        &mut self.sheet
    }

    pub fn renderer(&self) -> &SheetRenderer {
        &self.renderer
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn set_picker_open(&mut self, open: bool) {
        self.picker_open = open;
    }

    /// Feeds one frame of pointer input over the sheet drawn at `surface`.
    pub fn handle_input(&mut self, snapshot: &PointerSnapshot, surface: egui::Rect) {
        let Some(resolution) = self.sheet.state().resolution() else {
            return;
        };

        for event in self.input.process(snapshot, surface, resolution.get()) {
            route_event(&event, &mut self.sheet);
        }
    }
}

impl eframe::App for PixelSheetApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &Preferences::capture(&self.sheet));
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
        color_picker_window(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellIndex;
    use egui::{PointerButton, Pos2, Vec2, pos2};

    #[test]
    fn test_preferences_round_trip_through_json() {
        let preferences = Preferences {
            active_color: Rgb::new(0x33, 0x66, 0x99),
            resolution: 32,
        };
        let json = serde_json::to_string(&preferences).unwrap();
        assert_eq!(serde_json::from_str::<Preferences>(&json).unwrap(), preferences);
        assert_eq!(serde_json::from_str::<Preferences>("{}").unwrap(), Preferences::default());
    }

    #[test]
    fn test_preferences_apply_to_sheet() {
        let mut app = PixelSheetApp::with_config(SheetConfig::default());
        Preferences {
            active_color: Rgb::WHITE,
            resolution: 8,
        }
        .apply(app.sheet_mut());

        assert_eq!(app.sheet().active_color(), Rgb::WHITE);
        assert_eq!(app.sheet().grid().unwrap().len(), 64);
        assert_eq!(Preferences::capture(app.sheet()).resolution, 8);
    }

    #[test]
    fn test_drag_paints_each_entered_cell() {
        let mut app = PixelSheetApp::with_config(SheetConfig::default());
        app.sheet_mut().select_color(Rgb::BLACK);
        let surface = egui::Rect::from_min_size(Pos2::ZERO, Vec2::splat(640.0));

        let press = PointerSnapshot {
            hover_pos: Some(pos2(5.0, 5.0)),
            held: vec![PointerButton::Primary],
            pressed: vec![PointerButton::Primary],
        };
        app.handle_input(&press, surface);
        for x in [20.0, 45.0, 60.0, 85.0] {
            let drag = PointerSnapshot {
                hover_pos: Some(pos2(x, 5.0)),
                held: vec![PointerButton::Primary],
                pressed: vec![],
            };
            app.handle_input(&drag, surface);
        }

        for col in 0..3 {
            assert_eq!(app.sheet().cell(CellIndex::new(0, col)).unwrap().fill(), Rgb::BLACK);
        }
        assert_eq!(app.sheet().cell(CellIndex::new(0, 3)).unwrap().fill(), Rgb::WHITE);
        assert_eq!(app.sheet().cell(CellIndex::new(1, 0)).unwrap().fill(), Rgb::WHITE);
    }
}
