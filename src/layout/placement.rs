use super::geometry::is_position_valid;
use crate::config::CanvasConfig;
use crate::ir::{Point, Size, StorageModule};

/// First-fit origin for a new rectangle.
///
/// Origins are visited on the grid in raster order (rows top to bottom,
/// columns left to right). Returns `None` once the grid is exhausted, which
/// callers report as "no space available".
pub fn find_best_canvas_position(
    size: Size,
    existing: &[StorageModule],
    canvas: &CanvasConfig,
) -> Option<Point> {
    let step = canvas.grid_size;
    if !(step > 0.0) {
        return None;
    }
    let rows = ((canvas.height - size.height()) / step).floor();
    let cols = ((canvas.width - size.width()) / step).floor();
    if rows < 0.0 || cols < 0.0 {
        return None;
    }

    // Integer steps avoid accumulating float error across the scan.
    for row in 0..=rows as u32 {
        let y = row as f32 * step;
        for col in 0..=cols as u32 {
            let candidate = Point::new(col as f32 * step, y);
            if is_position_valid(candidate, size, existing, canvas) {
                return Some(candidate);
            }
        }
    }
    None
}
