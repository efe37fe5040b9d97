use crate::layout::ClosetLayout;
use crate::registry::display_name;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub grid_size: f32,
    pub layout_score: u32,
    pub utilization: f32,
    pub modules: Vec<ModuleDump>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDump {
    pub id: String,
    pub kind: String,
    pub display_name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub capacity: usize,
    pub used: usize,
    pub items: Vec<ItemDump>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDump {
    pub garment_id: String,
    pub color: String,
    pub category: String,
    pub auto: bool,
}

impl LayoutDump {
    pub fn from_layout(layout: &ClosetLayout) -> Self {
        let modules = layout
            .modules()
            .iter()
            .map(|module| ModuleDump {
                id: module.id.clone(),
                kind: format!("{:?}", module.kind),
                display_name: display_name(module.kind).to_string(),
                x: module.position.x,
                y: module.position.y,
                width: module.size.width(),
                height: module.size.height(),
                capacity: module.capacity,
                used: module.items.len(),
                items: module
                    .items
                    .iter()
                    .map(|item| ItemDump {
                        garment_id: item.garment_id.clone(),
                        color: item.display_color.clone(),
                        category: item.category_for_icon.to_string(),
                        auto: item.is_auto_assigned,
                    })
                    .collect(),
            })
            .collect();

        let canvas = layout.canvas();
        LayoutDump {
            canvas_width: canvas.width,
            canvas_height: canvas.height,
            grid_size: canvas.grid_size,
            layout_score: layout.layout_score(),
            utilization: layout.utilization(),
            modules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::ModuleKind;

    #[test]
    fn dump_reflects_modules_and_score() {
        let mut layout = ClosetLayout::default();
        layout.add_module(ModuleKind::ShoeRack).unwrap();
        let dump = LayoutDump::from_layout(&layout);
        assert_eq!(dump.modules.len(), 1);
        assert_eq!(dump.modules[0].display_name, "Shoe Rack");
        assert_eq!(dump.layout_score, layout.layout_score());
        let json = serde_json::to_value(&dump).unwrap();
        assert_eq!(json["modules"][0]["capacity"], 6);
    }
}
