// Pure rectangle math for the closet canvas: bounds, overlap and snapping.
// Nothing here allocates or fails; callers decide what to do with a `false`.

use crate::config::CanvasConfig;
use crate::ir::{Point, Rect, Size, StorageModule};

pub const DEFAULT_GRID_SIZE: f32 = 20.0;

/// Round to the nearest multiple of `grid_size`; halves round toward +inf.
pub fn snap_to_grid(value: f32, grid_size: f32) -> f32 {
    if !(grid_size > 0.0) {
        return value;
    }
    (value / grid_size + 0.5).floor() * grid_size
}

pub fn snap_point_to_grid(point: Point, grid_size: f32) -> Point {
    Point::new(
        snap_to_grid(point.x, grid_size),
        snap_to_grid(point.y, grid_size),
    )
}

pub fn within_canvas(rect: &Rect, canvas: &CanvasConfig) -> bool {
    rect.left() >= 0.0
        && rect.top() >= 0.0
        && rect.right() <= canvas.width
        && rect.bottom() <= canvas.height
}

pub fn is_position_valid(
    position: Point,
    size: Size,
    existing: &[StorageModule],
    canvas: &CanvasConfig,
) -> bool {
    let candidate = Rect::new(position, size);
    within_canvas(&candidate, canvas)
        && !existing
            .iter()
            .any(|module| module.rect().overlaps(&candidate))
}

/// Clamp an origin so the rectangle stays on the canvas. A rectangle larger
/// than the canvas is pinned to 0 on that axis.
pub fn clamp_to_canvas(position: Point, size: Size, canvas: &CanvasConfig) -> Point {
    let max_x = (canvas.width - size.width()).max(0.0);
    let max_y = (canvas.height - size.height()).max(0.0);
    Point::new(position.x.clamp(0.0, max_x), position.y.clamp(0.0, max_y))
}

/// Nearest candidate within `snap_distance` of `current`, first seen on ties.
fn nearest_edge(
    current: f32,
    candidates: impl Iterator<Item = f32>,
    snap_distance: f32,
) -> f32 {
    let mut best: Option<(f32, f32)> = None;
    for candidate in candidates {
        let delta = (candidate - current).abs();
        if best.is_none_or(|(_, best_delta)| delta < best_delta) {
            best = Some((candidate, delta));
        }
    }
    match best {
        Some((candidate, delta)) if delta <= snap_distance => candidate,
        _ => current,
    }
}

/// Align a rectangle with neighbouring modules.
///
/// Each axis is handled independently: the candidate's right edge may meet a
/// module's left or right edge (`module.left - width`, `module.right - width`),
/// and its bottom edge a module's top or bottom edge. The closest such
/// coordinate within `snap_distance` wins. The result is always clamped onto
/// the canvas.
pub fn snap_to_modules(
    position: Point,
    size: Size,
    existing: &[StorageModule],
    snap_distance: f32,
    canvas: &CanvasConfig,
) -> Point {
    let x = nearest_edge(
        position.x,
        existing.iter().flat_map(|module| {
            let rect = module.rect();
            [rect.left() - size.width(), rect.right() - size.width()]
        }),
        snap_distance,
    );
    let y = nearest_edge(
        position.y,
        existing.iter().flat_map(|module| {
            let rect = module.rect();
            [rect.top() - size.height(), rect.bottom() - size.height()]
        }),
        snap_distance,
    );
    clamp_to_canvas(Point::new(x, y), size, canvas)
}
