use eframe::egui::{self, Color32, Rect, Shape, Stroke};

use crate::geometry::cell_rect;
use crate::grid::Grid;
use crate::state::Swatch;

#[derive(Debug, Clone)]
pub struct SheetRenderer {
    /// Outline drawn around light cells and a light swatch
    border: Stroke,
}

impl Default for SheetRenderer {
    fn default() -> Self {
        Self {
            border: Stroke::new(1.0, Color32::BLACK),
        }
    }
}

impl SheetRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the shapes for every cell of `grid` laid out over `surface`.
    ///
    /// Each cell gets a filled rectangle; cells whose fill needs a border get
    /// an outline inset by half a stroke so neighbours don't overdraw it.
    pub fn cell_shapes(&self, grid: &Grid, surface: Rect) -> Vec<Shape> {
        let resolution = grid.resolution().get();
        let mut shapes = Vec::with_capacity(grid.len() * 2);

        for (index, cell) in grid.iter() {
            let rect = cell_rect(surface, resolution, index);
            shapes.push(Shape::rect_filled(rect, 0.0, Color32::from(cell.fill())));
            if cell.has_border() {
                shapes.push(Shape::rect_stroke(
                    rect.shrink(self.border.width / 2.0),
                    0.0,
                    self.border,
                ));
            }
        }

        shapes
    }

    /// Draws the sheet into `surface`
    pub fn render(&self, painter: &egui::Painter, grid: &Grid, surface: Rect) {
        painter.extend(self.cell_shapes(grid, surface));
    }

    /// Draws the active color preview
    pub fn render_swatch(&self, painter: &egui::Painter, rect: Rect, swatch: Swatch) {
        painter.rect_filled(rect, 4.0, Color32::from(swatch.fill));
        if swatch.bordered {
            painter.rect_stroke(rect.shrink(self.border.width / 2.0), 4.0, self.border);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::config::{Resolution, SheetConfig};
    use crate::grid::CellIndex;

    fn grid(n: u32) -> Grid {
        let config = SheetConfig::default();
        Grid::new(Resolution::new(n, &config), config.surface_size, config.blank_color)
    }

    fn surface() -> Rect {
        Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(640.0, 640.0))
    }

    #[test]
    fn test_blank_cells_are_outlined() {
        let renderer = SheetRenderer::new();
        let shapes = renderer.cell_shapes(&grid(4), surface());
        // white fill is above the luma threshold: fill + outline per cell
        assert_eq!(shapes.len(), 32);
    }

    #[test]
    fn test_dark_cells_have_no_outline() {
        let renderer = SheetRenderer::new();
        let mut grid = grid(2);
        grid.cell_mut(CellIndex::new(0, 0)).unwrap().set_fill(Rgb::BLACK);
        grid.cell_mut(CellIndex::new(1, 1)).unwrap().set_fill(Rgb::new(0x33, 0x66, 0x99));

        let shapes = renderer.cell_shapes(&grid, surface());
        assert_eq!(shapes.len(), 6);

        match &shapes[0] {
            Shape::Rect(rect) => {
                assert_eq!(rect.fill, Color32::BLACK);
                assert_eq!(rect.rect.size(), egui::vec2(320.0, 320.0));
            }
            other => panic!("expected a rect, got {other:?}"),
        }
    }

    #[test]
    fn test_render_basics() {
        let renderer = SheetRenderer::new();
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let painter = egui::Painter::new(ctx.clone(), layer_id, surface());

        renderer.render(&painter, &grid(16), surface());
        renderer.render_swatch(
            &painter,
            Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(32.0, 32.0)),
            Swatch { fill: Rgb::WHITE, bordered: true },
        );
    }
}
