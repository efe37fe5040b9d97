use serde::{Deserialize, Serialize};

use crate::ir::{Garment, GarmentType, ModuleKind};

/// Predicate over a garment, kept declarative so rule tables can live in
/// config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleCondition {
    HasTag(String),
    HasAnyTag(Vec<String>),
    LacksTag(String),
    IsFavorite,
    All(Vec<RuleCondition>),
    Any(Vec<RuleCondition>),
    Not(Box<RuleCondition>),
}

impl RuleCondition {
    pub fn evaluate(&self, garment: &Garment) -> bool {
        match self {
            RuleCondition::HasTag(tag) => garment.has_tag(tag),
            RuleCondition::HasAnyTag(tags) => tags.iter().any(|tag| garment.has_tag(tag)),
            RuleCondition::LacksTag(tag) => !garment.has_tag(tag),
            RuleCondition::IsFavorite => garment.is_favorite,
            RuleCondition::All(conditions) => conditions.iter().all(|c| c.evaluate(garment)),
            RuleCondition::Any(conditions) => conditions.iter().any(|c| c.evaluate(garment)),
            RuleCondition::Not(inner) => !inner.evaluate(garment),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRule {
    pub garment_types: Vec<GarmentType>,
    pub module_kinds: Vec<ModuleKind>,
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<RuleCondition>,
}

impl AssignmentRule {
    pub fn new(garment_types: &[GarmentType], module_kinds: &[ModuleKind], priority: i32) -> Self {
        Self {
            garment_types: garment_types.to_vec(),
            module_kinds: module_kinds.to_vec(),
            priority,
            condition: None,
        }
    }

    pub fn when(mut self, condition: RuleCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn matches(&self, garment: &Garment) -> bool {
        self.garment_types.contains(&garment.garment_type)
            && self
                .condition
                .as_ref()
                .is_none_or(|condition| condition.evaluate(garment))
    }

    pub fn accepts(&self, kind: ModuleKind) -> bool {
        self.module_kinds.contains(&kind)
    }
}

/// Ordered rule table. Order matters: it is the first tie-break when two
/// candidates score the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: Vec<AssignmentRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<AssignmentRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[AssignmentRule] {
        &self.rules
    }

    pub fn matching<'a>(&'a self, garment: &'a Garment) -> impl Iterator<Item = &'a AssignmentRule> + 'a {
        self.rules.iter().filter(move |rule| rule.matches(garment))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        use GarmentType::*;
        use ModuleKind::*;

        let hang_worthy = RuleCondition::HasAnyTag(vec![
            "formal".to_string(),
            "silk".to_string(),
            "delicate".to_string(),
        ]);

        Self::new(vec![
            AssignmentRule::new(&[Outerwear, Dresses], &[HangingRod], 10),
            AssignmentRule::new(&[Shoes], &[ShoeRack], 10),
            AssignmentRule::new(&[Tops, Bottoms], &[HangingRod], 9).when(hang_worthy),
            AssignmentRule::new(&[Accessories], &[AccessoryHooks], 8),
            AssignmentRule::new(&[Tops], &[Shelf, Drawer], 7),
            AssignmentRule::new(&[Bottoms], &[Drawer, Shelf], 7),
            AssignmentRule::new(&[Accessories], &[Drawer], 6),
            AssignmentRule::new(&[Tops, Bottoms], &[HangingRod], 5)
                .when(RuleCondition::LacksTag("casual".to_string())),
            AssignmentRule::new(&[Shoes], &[Shelf, StorageBin], 3),
            AssignmentRule::new(&[Outerwear, Dresses], &[StorageBin], 2),
            AssignmentRule::new(
                &[Tops, Bottoms, Accessories],
                &[StorageBin],
                1,
            ),
        ])
    }
}
