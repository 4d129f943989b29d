use eframe::egui;

use crate::PixelSheetApp;
use crate::color::Rgb;
use crate::components::{ToggleButton, swatch_button};

pub fn tools_panel(app: &mut PixelSheetApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Pixel Sheet");
            ui.separator();

            // Swatch stands in for the picker: clicking it opens the picker window
            let swatch = app.sheet().swatch();
            ui.horizontal(|ui| {
                if swatch_button(ui, app.renderer(), swatch).clicked() {
                    app.set_picker_open(true);
                }
                ui.monospace(swatch.fill.to_hex());
            });

            ui.add_space(8.0);

            if ui.button("Random color").clicked() {
                let color = app.sheet_mut().randomize();
                log::info!("Random color {}", color);
            }

            if ToggleButton::new("Rainbow", app.sheet().is_rainbow()).show(ui).clicked() {
                app.sheet_mut().toggle_rainbow();
            }
            if ToggleButton::new("Eraser", app.sheet().is_eraser()).show(ui).clicked() {
                app.sheet_mut().toggle_eraser();
            }

            ui.separator();

            if ui.button("Reset").clicked() {
                log::info!("Resetting sheet");
                app.sheet_mut().reset();
            }

            ui.separator();

            let (min, max) = {
                let config = app.sheet().config();
                (config.min_resolution, config.max_resolution)
            };
            let mut value = app.sheet().resolution().get();
            ui.label("Resolution");
            ui.horizontal(|ui| {
                let slider = egui::Slider::new(&mut value, min..=max).show_value(false);
                if ui.add(slider).changed() {
                    app.sheet_mut().resize(value);
                }
                ui.label(app.sheet().resolution_label());
            });
        });
}

/// The color picker behind the swatch. Every change is committed as the
/// active color.
pub fn color_picker_window(app: &mut PixelSheetApp, ctx: &egui::Context) {
    if !app.is_picker_open() {
        return;
    }

    let mut open = true;
    egui::Window::new("Pick a color")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let mut color = egui::Color32::from(app.sheet().active_color());
            if egui::color_picker::color_picker_color32(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            ) {
                app.sheet_mut().select_color(Rgb::from(color));
            }
        });
    app.set_picker_open(open);
}
