use eframe::egui;

use crate::renderer::SheetRenderer;
use crate::state::Swatch;

/// Clickable preview of the active color.
pub fn swatch_button(ui: &mut egui::Ui, renderer: &SheetRenderer, swatch: Swatch) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(48.0, 48.0), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        renderer.render_swatch(ui.painter(), rect, swatch);
    }
    response.on_hover_text(format!("{} (click to pick)", swatch.fill))
}
