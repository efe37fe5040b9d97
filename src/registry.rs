//! Static catalog of storage module kinds.

use crate::ir::{ModuleKind, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleSpec {
    pub kind: ModuleKind,
    pub display_name: &'static str,
    pub default_width: f32,
    pub default_height: f32,
    pub capacity: usize,
}

impl ModuleSpec {
    /// Default footprint, which doubles as the minimum size on resize.
    pub fn default_size(&self) -> Size {
        Size::fixed(self.default_width, self.default_height)
    }
}

pub fn module_spec(kind: ModuleKind) -> ModuleSpec {
    let (display_name, default_width, default_height, capacity) = match kind {
        ModuleKind::HangingRod => ("Hanging Rod", 200.0, 60.0, 20),
        ModuleKind::Shelf => ("Shelf", 120.0, 40.0, 10),
        ModuleKind::Drawer => ("Drawer", 100.0, 60.0, 8),
        ModuleKind::ShoeRack => ("Shoe Rack", 140.0, 60.0, 6),
        ModuleKind::AccessoryHooks => ("Accessory Hooks", 80.0, 40.0, 12),
        ModuleKind::StorageBin => ("Storage Bin", 80.0, 80.0, 15),
    };
    ModuleSpec {
        kind,
        display_name,
        default_width,
        default_height,
        capacity,
    }
}

pub fn display_name(kind: ModuleKind) -> &'static str {
    module_spec(kind).display_name
}

pub fn catalog() -> Vec<ModuleSpec> {
    ModuleKind::ALL.iter().map(|kind| module_spec(*kind)).collect()
}
