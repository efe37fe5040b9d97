//! Rule-driven auto-assignment of garments to storage modules.
//!
//! A pass visits garments favorites-first and greedily binds each one to the
//! best-scoring module that still has room. Occupancy is threaded forward
//! through the pass, so a garment sees the items placed before it.

mod reason;
mod rules;
mod scoring;

use serde::Serialize;
use tracing::{debug, info};

use crate::ir::{AssignedItem, Garment, StorageModule};

pub use reason::assignment_reason;
pub use rules::{AssignmentRule, RuleCondition, RuleTable};
pub use scoring::{
    colors_similar, confidence, exact_type_match_bonus, perfect_pairing, score_candidate,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResult {
    pub module_id: String,
    pub garment_id: String,
    pub confidence: f32,
    pub reason: String,
    pub is_auto_assigned: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentOutcome {
    pub assignments: Vec<AssignmentResult>,
    pub updated_modules: Vec<StorageModule>,
    pub considered: usize,
    /// Garments no module had room (or a rule) for.
    pub skipped: Vec<String>,
}

impl AssignmentOutcome {
    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} of {} garments assigned",
            self.assigned_count(),
            self.considered
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    rule_idx: usize,
    module_idx: usize,
    score: f32,
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentEngine {
    rules: RuleTable,
}

impl AssignmentEngine {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Best (rule, module) pair for one garment. Ties keep the first pair seen
    /// in rule-table order, then module order.
    fn best_candidate(&self, garment: &Garment, modules: &[StorageModule]) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;
        for (rule_idx, rule) in self.rules.rules().iter().enumerate() {
            if !rule.matches(garment) {
                continue;
            }
            for (module_idx, module) in modules.iter().enumerate() {
                if !rule.accepts(module.kind) || module.remaining_capacity() == 0 {
                    continue;
                }
                let score = score_candidate(garment, module, rule);
                if best.is_none_or(|b| score > b.score) {
                    best = Some(Candidate {
                        rule_idx,
                        module_idx,
                        score,
                    });
                }
            }
        }
        best
    }

    /// Run a full pass. Modules come back with the new items appended; items
    /// already present (manual or auto) are kept and count against capacity.
    pub fn run(&self, garments: &[Garment], modules: Vec<StorageModule>) -> AssignmentOutcome {
        let initial = AssignmentOutcome {
            assignments: Vec::new(),
            updated_modules: modules,
            considered: garments.len(),
            skipped: Vec::new(),
        };

        let outcome = priority_order(garments)
            .into_iter()
            .fold(initial, |mut acc, garment| {
                match self.best_candidate(garment, &acc.updated_modules) {
                    Some(candidate) => {
                        let module = &mut acc.updated_modules[candidate.module_idx];
                        module
                            .items
                            .push(AssignedItem::from_garment(garment, true));
                        debug!(
                            garment = %garment.id,
                            module = %module.id,
                            rule = candidate.rule_idx,
                            score = candidate.score,
                            "assigned garment"
                        );
                        acc.assignments.push(AssignmentResult {
                            module_id: module.id.clone(),
                            garment_id: garment.id.clone(),
                            confidence: confidence(candidate.score),
                            reason: assignment_reason(garment, module.kind),
                            is_auto_assigned: true,
                        });
                    }
                    None => {
                        debug!(garment = %garment.id, "no module with capacity");
                        acc.skipped.push(garment.id.clone());
                    }
                }
                acc
            });

        info!("{}", outcome.summary());
        outcome
    }

    /// Drop every auto-assigned item and run a fresh pass.
    pub fn rebalance(&self, garments: &[Garment], modules: Vec<StorageModule>) -> AssignmentOutcome {
        self.run(garments, clear_auto_assignments(modules))
    }
}

/// Favorites first; original order is preserved within each group.
fn priority_order(garments: &[Garment]) -> Vec<&Garment> {
    let mut ordered: Vec<&Garment> = garments.iter().collect();
    ordered.sort_by_key(|garment| !garment.is_favorite);
    ordered
}

pub fn clear_auto_assignments(modules: Vec<StorageModule>) -> Vec<StorageModule> {
    modules
        .into_iter()
        .map(|mut module| {
            module.items.retain(|item| !item.is_auto_assigned);
            module
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{GarmentType, ModuleKind, Point, Size};

    fn module(id: &str, kind: ModuleKind, capacity: usize) -> StorageModule {
        StorageModule::new(
            id,
            kind,
            Point::ORIGIN,
            Size::new(100.0, 60.0).unwrap(),
            capacity,
        )
    }

    #[test]
    fn favorites_go_first_and_keep_relative_order() {
        let garments = vec![
            Garment::new("a", GarmentType::Tops),
            Garment::new("b", GarmentType::Tops).favorite(),
            Garment::new("c", GarmentType::Tops),
            Garment::new("d", GarmentType::Tops).favorite(),
        ];
        let ids: Vec<&str> = priority_order(&garments)
            .iter()
            .map(|g| g.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn favorite_wins_contested_shoe_rack() {
        let engine = AssignmentEngine::default();
        let garments = vec![
            Garment::new("sneakers", GarmentType::Shoes),
            Garment::new("loafers", GarmentType::Shoes).favorite(),
        ];
        let outcome = engine.run(&garments, vec![module("rack", ModuleKind::ShoeRack, 1)]);
        assert_eq!(outcome.assignments.len(), 1);
        assert_eq!(outcome.assignments[0].garment_id, "loafers");
        assert_eq!(outcome.skipped, vec!["sneakers".to_string()]);
        assert_eq!(outcome.summary(), "1 of 2 garments assigned");
    }

    #[test]
    fn occupancy_is_visible_to_later_garments() {
        let rules = RuleTable::new(vec![AssignmentRule::new(
            &[GarmentType::Tops],
            &[ModuleKind::Shelf],
            5,
        )]);
        let engine = AssignmentEngine::new(rules);
        let garments = vec![
            Garment::new("t1", GarmentType::Tops),
            Garment::new("t2", GarmentType::Tops),
        ];
        let modules = vec![
            module("left", ModuleKind::Shelf, 4),
            module("right", ModuleKind::Shelf, 4),
        ];
        let outcome = engine.run(&garments, modules);
        // t1 takes the first shelf on the tie; crowding then pushes t2 right.
        assert_eq!(outcome.assignments[0].module_id, "left");
        assert_eq!(outcome.assignments[1].module_id, "right");
    }

    #[test]
    fn garments_without_rules_are_skipped() {
        let engine = AssignmentEngine::new(RuleTable::new(Vec::new()));
        let outcome = engine.run(
            &[Garment::new("g", GarmentType::Dresses)],
            vec![module("rod", ModuleKind::HangingRod, 5)],
        );
        assert!(outcome.assignments.is_empty());
        assert_eq!(outcome.updated_modules[0].items.len(), 0);
    }

    #[test]
    fn manual_items_survive_clearing() {
        let mut shelf = module("shelf", ModuleKind::Shelf, 5);
        let manual = Garment::new("manual", GarmentType::Tops);
        shelf.items.push(AssignedItem::from_garment(&manual, false));
        let engine = AssignmentEngine::default();
        let outcome = engine.run(&[Garment::new("auto", GarmentType::Tops)], vec![shelf]);
        assert_eq!(outcome.updated_modules[0].items.len(), 2);

        let cleared = clear_auto_assignments(outcome.updated_modules);
        assert_eq!(cleared[0].items.len(), 1);
        assert_eq!(cleared[0].items[0].garment_id, "manual");
    }

    #[test]
    fn rebalance_does_not_double_count() {
        let engine = AssignmentEngine::default();
        let garments = vec![
            Garment::new("coat", GarmentType::Outerwear),
            Garment::new("dress", GarmentType::Dresses),
        ];
        let first = engine.run(&garments, vec![module("rod", ModuleKind::HangingRod, 5)]);
        let second = engine.rebalance(&garments, first.updated_modules.clone());
        assert_eq!(first, second);
    }

    #[test]
    fn zero_capacity_modules_are_never_chosen() {
        let engine = AssignmentEngine::default();
        let outcome = engine.run(
            &[Garment::new("coat", GarmentType::Outerwear)],
            vec![module("rod", ModuleKind::HangingRod, 0)],
        );
        assert!(outcome.assignments.is_empty());
    }
}
