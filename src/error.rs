use thiserror::Error;

use crate::ir::{ModuleKind, Point};

/// Failures surfaced by layout session operations.
///
/// The geometry kernel and the assignment engine are total and never produce
/// these; they come from session operations that must refuse a change.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A rectangle with a zero, negative or non-finite dimension.
    #[error("invalid geometry: {width}x{height} (both dimensions must be positive)")]
    InvalidGeometry { width: f32, height: f32 },

    /// The first-fit scan found no free origin for a new module.
    #[error("no space available on the canvas for a {kind:?} module")]
    NoSpaceAvailable { kind: ModuleKind },

    #[error("module not found: {0}")]
    ModuleNotFound(String),

    /// The requested position overlaps another module or leaves the canvas.
    #[error("module {id} cannot be placed at {position:?}")]
    PlacementRejected { id: String, position: Point },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
