use eframe::egui;

/// A labelled button that stays highlighted while its mode is active.
pub struct ToggleButton {
    pub label: &'static str,
    pub active: bool,
}

impl ToggleButton {
    pub fn new(label: &'static str, active: bool) -> Self {
        Self { label, active }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(ui.available_width().min(160.0), 28.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.active {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when active
            } else if response.hovered() {
                egui::Color32::from_gray(70)
            } else {
                egui::Color32::from_gray(50)
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.active {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(15.0),
                text_color,
            );

            if self.active {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}
