//! Scene files: a canvas, its modules and the garments to assign, in JSON5.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::assign::RuleTable;
use crate::config::{CanvasConfigFile, Config, validate_canvas};
use crate::ir::{Garment, StorageModule};
use crate::layout::ClosetLayout;

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SceneFile {
    canvas: Option<CanvasConfigFile>,
    #[serde(default)]
    modules: Vec<StorageModule>,
    #[serde(default)]
    garments: Vec<Garment>,
    rules: Option<RuleTable>,
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub layout: ClosetLayout,
    pub garments: Vec<Garment>,
    pub rules: RuleTable,
}

/// Parse a scene on top of `config`. Scene-level canvas and rules override
/// the config.
pub fn parse_scene(input: &str, config: &Config) -> anyhow::Result<Scene> {
    let parsed: SceneFile = json5::from_str(input).context("malformed scene")?;
    let mut canvas = config.canvas;
    if let Some(overrides) = parsed.canvas {
        overrides.apply(&mut canvas);
    }
    validate_canvas(&canvas).context("invalid scene canvas")?;
    let layout = ClosetLayout::with_modules(canvas, parsed.modules)?;
    Ok(Scene {
        layout,
        garments: parsed.garments,
        rules: parsed.rules.unwrap_or_else(|| config.rules.clone()),
    })
}

pub fn load_scene(path: &Path, config: &Config) -> anyhow::Result<Scene> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scene {}", path.display()))?;
    parse_scene(&contents, config).with_context(|| format!("in scene {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::ModuleKind;

    const SCENE: &str = r#"
    {
      // trailing commas and comments are fine
      canvas: { width: 400, height: 300 },
      modules: [
        { id: "rod", kind: "hanging-rod", position: { x: 0, y: 0 },
          size: { width: 200, height: 60 }, capacity: 3 },
      ],
      garments: [
        { id: "g1", name: "Blazer", color: "navy", "type": "Outerwear", tags: ["formal"] },
      ],
    }
    "#;

    #[test]
    fn parses_json5_scene() {
        let scene = parse_scene(SCENE, &Config::default()).unwrap();
        assert_eq!(scene.layout.canvas().width, 400.0);
        assert_eq!(scene.layout.canvas().grid_size, 20.0);
        assert_eq!(scene.layout.modules()[0].kind, ModuleKind::HangingRod);
        assert_eq!(scene.garments.len(), 1);
        assert_eq!(scene.rules, Config::default().rules);
    }

    #[test]
    fn rejects_degenerate_module_size() {
        let input = r#"{ modules: [ { id: "x", kind: "shelf", position: {x:0,y:0},
            size: {width: 0, height: 10}, capacity: 1 } ] }"#;
        assert!(parse_scene(input, &Config::default()).is_err());
    }

    #[test]
    fn rejects_invalid_canvas_overrides() {
        let zero_grid = r#"{ canvas: { gridSize: 0 } }"#;
        assert!(parse_scene(zero_grid, &Config::default()).is_err());
        let negative = r#"{ canvas: { width: -5, gridSize: 20 } }"#;
        assert!(parse_scene(negative, &Config::default()).is_err());
    }
}
