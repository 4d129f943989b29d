use eframe::egui;

use crate::PixelSheetApp;
use crate::input::PointerSnapshot;

pub fn central_panel(app: &mut PixelSheetApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let size = app.sheet().config().surface_size;
            let (response, painter) =
                ui.allocate_painter(egui::vec2(size, size), egui::Sense::click_and_drag());
            let surface = response.rect;

            // Only the topmost layer gets the pointer; a window over the sheet
            // hides it.
            let snapshot = PointerSnapshot::from_egui(ctx).hidden_unless(response.contains_pointer());
            app.handle_input(&snapshot, surface);

            if let Some(grid) = app.sheet().grid() {
                app.renderer().render(&painter, grid, surface);
            }
        });
    });
}
