use std::collections::BTreeSet;

use crate::ir::StorageModule;

const VARIETY_POINTS: f32 = 5.0;

/// Share of the canvas covered by modules, in `[0, 1]` for valid layouts.
pub fn utilization(modules: &[StorageModule], canvas_area: f32) -> f32 {
    if !(canvas_area > 0.0) {
        return 0.0;
    }
    let covered: f32 = modules.iter().map(|module| module.size.area()).sum();
    covered / canvas_area
}

/// `min(100, round(100 * utilization + 5 * distinct kinds))`.
pub fn compute_layout_score(modules: &[StorageModule], canvas_area: f32) -> u32 {
    if modules.is_empty() {
        return 0;
    }
    let kinds: BTreeSet<_> = modules.iter().map(|module| module.kind).collect();
    let raw = 100.0 * utilization(modules, canvas_area) + VARIETY_POINTS * kinds.len() as f32;
    raw.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ModuleKind, Point, Size};

    fn module(kind: ModuleKind, w: f32, h: f32) -> StorageModule {
        StorageModule::new("m", kind, Point::ORIGIN, Size::new(w, h).unwrap(), 1)
    }

    #[test]
    fn empty_layout_scores_zero() {
        assert_eq!(compute_layout_score(&[], 480_000.0), 0);
    }

    #[test]
    fn combines_coverage_and_variety() {
        // 48_000 / 480_000 = 10%, two kinds = 10 points.
        let modules = vec![
            module(ModuleKind::Shelf, 200.0, 120.0),
            module(ModuleKind::Drawer, 200.0, 120.0),
        ];
        assert_eq!(compute_layout_score(&modules, 480_000.0), 20);
    }

    #[test]
    fn repeated_kinds_count_once() {
        let modules = vec![
            module(ModuleKind::Shelf, 10.0, 10.0),
            module(ModuleKind::Shelf, 10.0, 10.0),
        ];
        // 200 / 480_000 rounds away; only variety remains.
        assert_eq!(compute_layout_score(&modules, 480_000.0), 5);
    }

    #[test]
    fn score_saturates_at_one_hundred() {
        let modules = vec![
            module(ModuleKind::Shelf, 800.0, 600.0),
            module(ModuleKind::ShoeRack, 20.0, 20.0),
        ];
        assert_eq!(compute_layout_score(&modules, 480_000.0), 100);
    }

    #[test]
    fn degenerate_canvas_counts_variety_only() {
        let modules = vec![module(ModuleKind::Shelf, 10.0, 10.0)];
        assert_eq!(compute_layout_score(&modules, 0.0), 5);
    }
}
