//! Closet canvas geometry: validation, snapping, first-fit placement and the
//! layout score, plus the session type that owns a module list.

pub mod geometry;
pub mod placement;
pub mod score;
pub mod session;

use crate::assign::{self, AssignmentEngine, AssignmentOutcome};
use crate::config::CanvasConfig;
use crate::ir::{Garment, Point, Size, StorageModule};

pub use geometry::{DEFAULT_GRID_SIZE, is_position_valid, snap_to_grid, snap_to_modules};
pub use placement::find_best_canvas_position;
pub use score::{compute_layout_score, utilization};
pub use session::ClosetLayout;

pub fn validate_placement(
    position: Point,
    size: Size,
    modules: &[StorageModule],
    canvas: &CanvasConfig,
) -> bool {
    is_position_valid(position, size, modules, canvas)
}

pub fn snap_position(
    position: Point,
    size: Size,
    modules: &[StorageModule],
    snap_distance: f32,
    canvas: &CanvasConfig,
) -> Point {
    snap_to_modules(position, size, modules, snap_distance, canvas)
}

pub fn find_free_position(
    size: Size,
    modules: &[StorageModule],
    canvas: &CanvasConfig,
) -> Option<Point> {
    find_best_canvas_position(size, modules, canvas)
}

pub fn run_auto_assignment(
    engine: &AssignmentEngine,
    garments: &[Garment],
    modules: Vec<StorageModule>,
) -> AssignmentOutcome {
    engine.run(garments, modules)
}

pub fn clear_auto_assignments(modules: Vec<StorageModule>) -> Vec<StorageModule> {
    assign::clear_auto_assignments(modules)
}
