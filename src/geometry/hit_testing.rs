use egui::{Pos2, Rect, Vec2};

use crate::grid::CellIndex;

/// Screen rectangle of `cell` on a square surface split into
/// `resolution` × `resolution` cells.
pub fn cell_rect(surface: Rect, resolution: u32, cell: CellIndex) -> Rect {
    let edge = surface.width() / resolution.max(1) as f32;
    let min = surface.min + Vec2::new(cell.col as f32 * edge, cell.row as f32 * edge);
    Rect::from_min_size(min, Vec2::splat(edge))
}

/// The cell under `pos`, or `None` when `pos` lies outside the surface.
///
/// The right and bottom edges belong to the last column and row so a pointer
/// resting exactly on the border still hits a cell.
pub fn cell_at(surface: Rect, resolution: u32, pos: Pos2) -> Option<CellIndex> {
    if resolution == 0 || !surface.contains(pos) || surface.width() <= 0.0 {
        return None;
    }

    let edge = surface.width() / resolution as f32;
    let last = resolution as usize - 1;
    let col = (((pos.x - surface.min.x) / edge) as usize).min(last);
    let row = (((pos.y - surface.min.y) / edge) as usize).min(last);
    Some(CellIndex::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn surface() -> Rect {
        Rect::from_min_size(pos2(10.0, 20.0), Vec2::splat(640.0))
    }

    #[test]
    fn test_cell_rect_layout() {
        let rect = cell_rect(surface(), 4, CellIndex::new(1, 2));
        assert_eq!(rect.min, pos2(10.0 + 320.0, 20.0 + 160.0));
        assert_eq!(rect.size(), Vec2::splat(160.0));
    }

    #[test]
    fn test_hit_inside_and_outside() {
        assert_eq!(cell_at(surface(), 16, pos2(10.0, 20.0)), Some(CellIndex::new(0, 0)));
        assert_eq!(cell_at(surface(), 16, pos2(10.0 + 45.0, 20.0 + 1.0)), Some(CellIndex::new(0, 1)));
        assert_eq!(cell_at(surface(), 16, pos2(650.0, 660.0)), Some(CellIndex::new(15, 15)));
        assert_eq!(cell_at(surface(), 16, pos2(5.0, 30.0)), None);
        assert_eq!(cell_at(surface(), 16, pos2(100.0, 700.0)), None);
    }

    #[test]
    fn test_hit_matches_cell_rect() {
        let resolution = 7;
        for row in 0..7 {
            for col in 0..7 {
                let cell = CellIndex::new(row, col);
                let center = cell_rect(surface(), resolution, cell).center();
                assert_eq!(cell_at(surface(), resolution, center), Some(cell));
            }
        }
    }
}
