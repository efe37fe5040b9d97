use crate::ir::{Garment, GarmentType, ModuleKind};
use crate::registry::display_name;

/// Human-readable explanation for an assignment.
pub fn assignment_reason(garment: &Garment, kind: ModuleKind) -> String {
    if kind == ModuleKind::HangingRod {
        if garment.has_tag("silk") || garment.has_tag("delicate") {
            return format!(
                "Delicate {} hung on the {} to avoid crushing the fabric.",
                garment.garment_type.as_str().to_lowercase(),
                display_name(kind)
            );
        }
        if garment.has_tag("formal") {
            return format!(
                "Formal {} hung to stay crease-free.",
                garment.garment_type.as_str().to_lowercase()
            );
        }
    }

    let canned = match (garment.garment_type, kind) {
        (GarmentType::Outerwear, ModuleKind::HangingRod) => {
            Some("Outerwear hung to preserve its shape.")
        }
        (GarmentType::Dresses, ModuleKind::HangingRod) => Some("Dresses hung to prevent wrinkles."),
        (GarmentType::Shoes, ModuleKind::ShoeRack) => Some("Shoes paired on the shoe rack."),
        (GarmentType::Accessories, ModuleKind::AccessoryHooks) => {
            Some("Accessories kept visible on hooks.")
        }
        (GarmentType::Tops, ModuleKind::Shelf) if garment.has_tag("casual") => {
            Some("Casual tops folded on the shelf for quick access.")
        }
        (GarmentType::Bottoms, ModuleKind::Drawer) => Some("Bottoms folded into the drawer."),
        _ => None,
    };

    match canned {
        Some(text) => text.to_string(),
        None => format!(
            "{} assigned to {} based on type compatibility.",
            garment.garment_type,
            display_name(kind)
        ),
    }
}
