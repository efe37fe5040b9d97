use crate::assign::RuleTable;
use crate::layout::DEFAULT_GRID_SIZE;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
    pub grid_size: f32,
    pub snap_distance: f32,
}

impl CanvasConfig {
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            grid_size: DEFAULT_GRID_SIZE,
            snap_distance: 15.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub rules: RuleTable,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CanvasConfigFile {
    pub(crate) width: Option<f32>,
    pub(crate) height: Option<f32>,
    pub(crate) grid_size: Option<f32>,
    pub(crate) snap_distance: Option<f32>,
}

impl CanvasConfigFile {
    pub(crate) fn apply(self, canvas: &mut CanvasConfig) {
        if let Some(v) = self.width {
            canvas.width = v;
        }
        if let Some(v) = self.height {
            canvas.height = v;
        }
        if let Some(v) = self.grid_size {
            canvas.grid_size = v;
        }
        if let Some(v) = self.snap_distance {
            canvas.snap_distance = v;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    canvas: Option<CanvasConfigFile>,
    rules: Option<RuleTable>,
}

pub(crate) fn validate_canvas(canvas: &CanvasConfig) -> anyhow::Result<()> {
    if !(canvas.width > 0.0 && canvas.height > 0.0) {
        anyhow::bail!(
            "canvas must have a positive size, got {}x{}",
            canvas.width,
            canvas.height
        );
    }
    if !(canvas.grid_size > 0.0) {
        anyhow::bail!("grid size must be positive, got {}", canvas.grid_size);
    }
    if canvas.snap_distance < 0.0 {
        anyhow::bail!("snap distance cannot be negative, got {}", canvas.snap_distance);
    }
    Ok(())
}

pub(crate) fn apply_config_str(mut config: Config, contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = serde_json::from_str(contents)?;
    if let Some(canvas) = parsed.canvas {
        canvas.apply(&mut config.canvas);
    }
    if let Some(rules) = parsed.rules {
        config.rules = rules;
    }
    validate_canvas(&config.canvas)?;
    Ok(config)
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    apply_config_str(config, &contents)
        .with_context(|| format!("invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_closet_canvas() {
        let config = Config::default();
        assert_eq!(config.canvas.width, 800.0);
        assert_eq!(config.canvas.height, 600.0);
        assert_eq!(config.canvas.grid_size, 20.0);
        assert!(!config.rules.is_empty());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config =
            apply_config_str(Config::default(), r#"{"canvas":{"gridSize":10}}"#).unwrap();
        assert_eq!(config.canvas.grid_size, 10.0);
        assert_eq!(config.canvas.width, 800.0);
    }

    #[test]
    fn rules_can_be_replaced() {
        let json = r#"{"rules":[{"garmentTypes":["Tops"],"moduleKinds":["storage-bin"],"priority":1}]}"#;
        let config = apply_config_str(Config::default(), json).unwrap();
        assert_eq!(config.rules.len(), 1);
    }

    #[test]
    fn rejects_non_positive_grid() {
        let err = apply_config_str(Config::default(), r#"{"canvas":{"gridSize":0}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn missing_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.canvas, CanvasConfig::default());
    }
}
