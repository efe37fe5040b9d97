// Candidate scoring for the assignment pass. The weights are empirical and
// must stay as they are; saved layouts depend on the resulting choices.

use super::rules::AssignmentRule;
use crate::ir::{Garment, GarmentType, ModuleKind, StorageModule};

const PRIORITY_WEIGHT: f32 = 10.0;
const EXACT_MATCH_WEIGHT: f32 = 20.0;
const CROWDING_WEIGHT: f32 = 15.0;
const COLOR_MATCH_POINTS: f32 = 2.0;
const COLOR_MATCH_CAP: usize = 5;
const FORMAL_HANGING_BONUS: f32 = 5.0;
const CASUAL_SHELF_BONUS: f32 = 3.0;
const DELICATE_HANGING_BONUS: f32 = 8.0;

/// The module kind each garment type pairs with best.
pub fn perfect_pairing(garment_type: GarmentType) -> ModuleKind {
    match garment_type {
        GarmentType::Tops => ModuleKind::Shelf,
        GarmentType::Bottoms => ModuleKind::Drawer,
        GarmentType::Outerwear => ModuleKind::HangingRod,
        GarmentType::Dresses => ModuleKind::HangingRod,
        GarmentType::Shoes => ModuleKind::ShoeRack,
        GarmentType::Accessories => ModuleKind::AccessoryHooks,
    }
}

pub fn exact_type_match_bonus(garment_type: GarmentType, kind: ModuleKind) -> f32 {
    if perfect_pairing(garment_type) == kind {
        1.0
    } else {
        0.0
    }
}

fn normalize_color(color: &str) -> String {
    color
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case- and whitespace-insensitive equality or substring containment.
///
/// This is a string heuristic, not a perceptual color distance: "red" is
/// similar to "dark red" but not to "crimson".
///
/// Deliberate deviation from plain containment: an empty color never
/// matches, otherwise an uncolored garment would pick up the color bonus
/// from every item in a module.
pub fn colors_similar(a: &str, b: &str) -> bool {
    let a = normalize_color(a);
    let b = normalize_color(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || a.contains(&b) || b.contains(&a)
}

pub fn color_coordination_bonus(garment: &Garment, module: &StorageModule) -> f32 {
    let matches = module
        .items
        .iter()
        .filter(|item| colors_similar(&item.display_color, &garment.color))
        .take(COLOR_MATCH_CAP)
        .count();
    matches as f32 * COLOR_MATCH_POINTS
}

pub fn tag_bonus(garment: &Garment, kind: ModuleKind) -> f32 {
    let mut bonus = 0.0;
    if kind == ModuleKind::HangingRod && garment.has_tag("formal") {
        bonus += FORMAL_HANGING_BONUS;
    }
    if kind == ModuleKind::Shelf && garment.has_tag("casual") {
        bonus += CASUAL_SHELF_BONUS;
    }
    if kind == ModuleKind::HangingRod && (garment.has_tag("silk") || garment.has_tag("delicate")) {
        bonus += DELICATE_HANGING_BONUS;
    }
    bonus
}

/// Score of placing `garment` in `module` under `rule`; never negative.
pub fn score_candidate(garment: &Garment, module: &StorageModule, rule: &AssignmentRule) -> f32 {
    let crowding = if module.capacity == 0 {
        1.0
    } else {
        module.items.len() as f32 / module.capacity as f32
    };
    let score = PRIORITY_WEIGHT * rule.priority as f32
        + EXACT_MATCH_WEIGHT * exact_type_match_bonus(garment.garment_type, module.kind)
        - CROWDING_WEIGHT * crowding
        + color_coordination_bonus(garment, module)
        + tag_bonus(garment, module.kind);
    score.max(0.0)
}

pub fn confidence(score: f32) -> f32 {
    (score / 100.0).clamp(0.0, 1.0)
}
