use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a rectangle. Both are strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSize")]
pub struct Size {
    width: f32,
    height: f32,
}

#[derive(Deserialize)]
struct RawSize {
    width: f32,
    height: f32,
}

impl TryFrom<RawSize> for Size {
    type Error = LayoutError;

    fn try_from(raw: RawSize) -> Result<Self, Self::Error> {
        Size::new(raw.width, raw.height)
    }
}

impl Size {
    pub fn new(width: f32, height: f32) -> Result<Self, LayoutError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(LayoutError::InvalidGeometry { width, height });
        }
        Ok(Self { width, height })
    }

    /// Infallible constructor for compile-time constants.
    pub(crate) const fn fixed(width: f32, height: f32) -> Self {
        assert!(width > 0.0 && height > 0.0);
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Positive-area intersection. Rectangles that only share an edge do not
    /// overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() <= other.left()
            || other.right() <= self.left()
            || self.bottom() <= other.top()
            || other.bottom() <= self.top())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GarmentType {
    Tops,
    Bottoms,
    Outerwear,
    Dresses,
    Shoes,
    Accessories,
}

impl GarmentType {
    pub const ALL: [GarmentType; 6] = [
        GarmentType::Tops,
        GarmentType::Bottoms,
        GarmentType::Outerwear,
        GarmentType::Dresses,
        GarmentType::Shoes,
        GarmentType::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentType::Tops => "Tops",
            GarmentType::Bottoms => "Bottoms",
            GarmentType::Outerwear => "Outerwear",
            GarmentType::Dresses => "Dresses",
            GarmentType::Shoes => "Shoes",
            GarmentType::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for GarmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry consumed read-only by the assignment engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Garment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "type")]
    pub garment_type: GarmentType,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Garment {
    pub fn new(id: impl Into<String>, garment_type: GarmentType) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            color: String::new(),
            garment_type,
            tags: BTreeSet::new(),
            is_favorite: false,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    /// Tags compare case-insensitively.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.trim().eq_ignore_ascii_case(tag))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleKind {
    HangingRod,
    Shelf,
    Drawer,
    ShoeRack,
    AccessoryHooks,
    StorageBin,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 6] = [
        ModuleKind::HangingRod,
        ModuleKind::Shelf,
        ModuleKind::Drawer,
        ModuleKind::ShoeRack,
        ModuleKind::AccessoryHooks,
        ModuleKind::StorageBin,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "hanging-rod" | "hanging" => Some(Self::HangingRod),
            "shelf" => Some(Self::Shelf),
            "drawer" => Some(Self::Drawer),
            "shoe-rack" => Some(Self::ShoeRack),
            "accessory-hooks" | "hooks" => Some(Self::AccessoryHooks),
            "storage-bin" | "bin" => Some(Self::StorageBin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedItem {
    pub garment_id: String,
    pub display_color: String,
    pub category_for_icon: GarmentType,
    #[serde(default)]
    pub is_auto_assigned: bool,
}

impl AssignedItem {
    pub fn from_garment(garment: &Garment, is_auto_assigned: bool) -> Self {
        Self {
            garment_id: garment.id.clone(),
            display_color: garment.color.clone(),
            category_for_icon: garment.garment_type,
            is_auto_assigned,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageModule {
    pub id: String,
    pub kind: ModuleKind,
    pub position: Point,
    pub size: Size,
    pub capacity: usize,
    #[serde(default)]
    pub items: Vec<AssignedItem>,
}

impl StorageModule {
    pub fn new(
        id: impl Into<String>,
        kind: ModuleKind,
        position: Point,
        size: Size,
        capacity: usize,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            size,
            capacity,
            items: Vec::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.items.len())
    }

    pub fn occupancy(&self) -> f32 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.items.len() as f32 / self.capacity as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_rejects_degenerate_dimensions() {
        assert!(Size::new(0.0, 10.0).is_err());
        assert!(Size::new(10.0, -1.0).is_err());
        assert!(Size::new(f32::NAN, 10.0).is_err());
        assert!(Size::new(10.0, 10.0).is_ok());
    }

    #[test]
    fn size_deserialization_is_validated() {
        let bad = serde_json::from_str::<Size>(r#"{"width":0,"height":10}"#);
        assert!(bad.is_err());
        let good: Size = serde_json::from_str(r#"{"width":20,"height":10}"#).unwrap();
        assert_eq!(good.width(), 20.0);
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let size = Size::new(100.0, 100.0).unwrap();
        let a = Rect::new(Point::new(0.0, 0.0), size);
        let b = Rect::new(Point::new(100.0, 0.0), size);
        let c = Rect::new(Point::new(50.0, 50.0), size);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn garment_deserializes_from_camel_case() {
        let json = r#"{"id":"g1","name":"Blazer","color":"Navy","type":"Outerwear","tags":["formal"],"isFavorite":true}"#;
        let garment: Garment = serde_json::from_str(json).unwrap();
        assert_eq!(garment.garment_type, GarmentType::Outerwear);
        assert!(garment.is_favorite);
        assert!(garment.has_tag("Formal"));
    }

    #[test]
    fn module_kind_tokens() {
        assert_eq!(ModuleKind::from_token("shoe-rack"), Some(ModuleKind::ShoeRack));
        assert_eq!(ModuleKind::from_token("Hanging"), Some(ModuleKind::HangingRod));
        assert_eq!(ModuleKind::from_token("closet"), None);
        let json = serde_json::to_string(&ModuleKind::AccessoryHooks).unwrap();
        assert_eq!(json, "\"accessory-hooks\"");
    }
}
