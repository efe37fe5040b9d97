use tracing::{debug, info, warn};

use super::geometry::{is_position_valid, snap_point_to_grid, snap_to_grid, snap_to_modules};
use super::placement::find_best_canvas_position;
use super::score::{compute_layout_score, utilization};
use crate::assign::{AssignmentEngine, AssignmentOutcome, clear_auto_assignments};
use crate::config::CanvasConfig;
use crate::error::{LayoutError, Result};
use crate::ir::{AssignedItem, Garment, ModuleKind, Point, Size, StorageModule};
use crate::registry::module_spec;

/// The module list being edited on one closet canvas.
///
/// Every mutation is validated against the other modules, so the
/// no-overlap invariant holds between calls.
#[derive(Debug, Clone)]
pub struct ClosetLayout {
    canvas: CanvasConfig,
    modules: Vec<StorageModule>,
    next_id: usize,
}

impl ClosetLayout {
    pub fn new(canvas: CanvasConfig) -> Self {
        Self {
            canvas,
            modules: Vec::new(),
            next_id: 1,
        }
    }

    /// Adopt an existing module list. Modules that overlap an earlier one or
    /// leave the canvas are rejected.
    pub fn with_modules(canvas: CanvasConfig, modules: Vec<StorageModule>) -> Result<Self> {
        let mut layout = Self::new(canvas);
        for module in modules {
            if !is_position_valid(module.position, module.size, &layout.modules, &canvas) {
                return Err(LayoutError::PlacementRejected {
                    id: module.id,
                    position: module.position,
                });
            }
            layout.modules.push(module);
        }
        layout.next_id = layout.modules.len() + 1;
        Ok(layout)
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn modules(&self) -> &[StorageModule] {
        &self.modules
    }

    pub fn module(&self, id: &str) -> Option<&StorageModule> {
        self.modules.iter().find(|module| module.id == id)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.modules
            .iter()
            .position(|module| module.id == id)
            .ok_or_else(|| LayoutError::ModuleNotFound(id.to_string()))
    }

    fn allocate_id(&mut self) -> String {
        loop {
            let id = format!("module-{}", self.next_id);
            self.next_id += 1;
            if self.module(&id).is_none() {
                return id;
            }
        }
    }

    /// Modules other than the one at `skip`, in insertion order.
    fn others(&self, skip: usize) -> Vec<StorageModule> {
        self.modules
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != skip)
            .map(|(_, module)| module.clone())
            .collect()
    }

    /// Add a module of `kind` at its default size in the first free spot.
    pub fn add_module(&mut self, kind: ModuleKind) -> Result<&StorageModule> {
        let spec = module_spec(kind);
        let size = spec.default_size();
        let Some(position) = find_best_canvas_position(size, &self.modules, &self.canvas) else {
            warn!(?kind, "no space left on canvas");
            return Err(LayoutError::NoSpaceAvailable { kind });
        };
        let id = self.allocate_id();
        debug!(%id, ?kind, x = position.x, y = position.y, "module added");
        self.modules
            .push(StorageModule::new(id, kind, position, size, spec.capacity));
        Ok(&self.modules[self.modules.len() - 1])
    }

    /// Add a module at a requested position, snapped to the grid.
    pub fn add_module_at(
        &mut self,
        kind: ModuleKind,
        position: Point,
        size: Size,
    ) -> Result<&StorageModule> {
        let position = snap_point_to_grid(position, self.canvas.grid_size);
        if !is_position_valid(position, size, &self.modules, &self.canvas) {
            warn!(?kind, x = position.x, y = position.y, "placement rejected");
            return Err(LayoutError::PlacementRejected {
                id: format!("new {kind:?}"),
                position,
            });
        }
        let id = self.allocate_id();
        let capacity = module_spec(kind).capacity;
        self.modules
            .push(StorageModule::new(id, kind, position, size, capacity));
        Ok(&self.modules[self.modules.len() - 1])
    }

    /// Move a module. The target is snapped to the grid, then pulled flush
    /// against neighbours; an invalid result leaves the module where it was.
    pub fn move_module(&mut self, id: &str, position: Point) -> Result<Point> {
        let idx = self.index_of(id)?;
        let size = self.modules[idx].size;
        let others = self.others(idx);
        let snapped = snap_to_modules(
            snap_point_to_grid(position, self.canvas.grid_size),
            size,
            &others,
            self.canvas.snap_distance,
            &self.canvas,
        );
        if !is_position_valid(snapped, size, &others, &self.canvas) {
            warn!(%id, x = snapped.x, y = snapped.y, "move rejected");
            return Err(LayoutError::PlacementRejected {
                id: id.to_string(),
                position: snapped,
            });
        }
        debug!(%id, x = snapped.x, y = snapped.y, "module moved");
        self.modules[idx].position = snapped;
        Ok(snapped)
    }

    /// Resize a module in place. Dimensions never drop below the kind's
    /// default footprint.
    pub fn resize_module(&mut self, id: &str, size: Size) -> Result<Size> {
        let idx = self.index_of(id)?;
        let module = &self.modules[idx];
        let min = module_spec(module.kind).default_size();
        let grid = self.canvas.grid_size;
        let width = snap_to_grid(size.width(), grid).max(min.width());
        let height = snap_to_grid(size.height(), grid).max(min.height());
        let resized = Size::new(width, height)?;
        let position = module.position;
        if !is_position_valid(position, resized, &self.others(idx), &self.canvas) {
            warn!(%id, width, height, "resize rejected");
            return Err(LayoutError::PlacementRejected {
                id: id.to_string(),
                position,
            });
        }
        debug!(%id, width, height, "module resized");
        self.modules[idx].size = resized;
        Ok(resized)
    }

    pub fn remove_module(&mut self, id: &str) -> Result<StorageModule> {
        let idx = self.index_of(id)?;
        debug!(%id, "module removed");
        Ok(self.modules.remove(idx))
    }

    pub fn reset(&mut self) {
        info!(count = self.modules.len(), "layout reset");
        self.modules.clear();
        self.next_id = 1;
    }

    /// Put a garment into a module by hand. Manual placement ignores capacity.
    pub fn place_item(&mut self, module_id: &str, garment: &Garment) -> Result<()> {
        let idx = self.index_of(module_id)?;
        self.modules[idx]
            .items
            .push(AssignedItem::from_garment(garment, false));
        Ok(())
    }

    /// Remove a garment from a module; returns whether it was present.
    pub fn remove_item(&mut self, module_id: &str, garment_id: &str) -> Result<bool> {
        let idx = self.index_of(module_id)?;
        let items = &mut self.modules[idx].items;
        let before = items.len();
        items.retain(|item| item.garment_id != garment_id);
        Ok(items.len() != before)
    }

    pub fn auto_assign(&mut self, engine: &AssignmentEngine, garments: &[Garment]) -> AssignmentOutcome {
        let modules = std::mem::take(&mut self.modules);
        let outcome = engine.run(garments, modules);
        self.modules = outcome.updated_modules.clone();
        outcome
    }

    pub fn clear_auto_assignments(&mut self) {
        let modules = std::mem::take(&mut self.modules);
        self.modules = clear_auto_assignments(modules);
    }

    pub fn rebalance(&mut self, engine: &AssignmentEngine, garments: &[Garment]) -> AssignmentOutcome {
        self.clear_auto_assignments();
        self.auto_assign(engine, garments)
    }

    pub fn utilization(&self) -> f32 {
        utilization(&self.modules, self.canvas.area())
    }

    pub fn layout_score(&self) -> u32 {
        compute_layout_score(&self.modules, self.canvas.area())
    }
}

impl Default for ClosetLayout {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}
