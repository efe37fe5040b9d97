use crate::assign::{AssignmentEngine, AssignmentOutcome, AssignmentResult};
use crate::config::load_config;
use crate::ir::{ModuleKind, Point, Size};
use crate::layout::{ClosetLayout, snap_position, validate_placement};
use crate::layout_dump::LayoutDump;
use crate::scene::{Scene, load_scene};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "closetctl", version, about = "Closet canvas layout and garment assignment")]
pub struct Args {
    /// Scene file (.json / .json5)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (canvas overrides, rule table)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a module of the given kind at the first free position
    Place {
        #[arg(long, value_parser = parse_kind)]
        kind: ModuleKind,
    },
    /// Check whether a rectangle fits without overlap
    Validate(RectArgs),
    /// Snap a rectangle against the existing modules
    Snap(RectArgs),
    /// Run an auto-assignment pass on top of the current contents
    Assign,
    /// Clear auto-assigned items and assign again from scratch
    Rebalance,
    /// Remove every auto-assigned item
    Clear,
    /// Print the layout score
    Score,
}

#[derive(clap::Args, Debug, Clone, Copy)]
pub struct RectArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub x: f32,
    #[arg(long, allow_negative_numbers = true)]
    pub y: f32,
    #[arg(long)]
    pub width: f32,
    #[arg(long)]
    pub height: f32,
}

impl RectArgs {
    fn split(self) -> Result<(Point, Size)> {
        Ok((Point::new(self.x, self.y), Size::new(self.width, self.height)?))
    }
}

fn parse_kind(token: &str) -> std::result::Result<ModuleKind, String> {
    ModuleKind::from_token(token).ok_or_else(|| format!("unknown module kind '{token}'"))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateReport {
    valid: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapReport {
    position: Point,
    valid: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignReport {
    summary: String,
    assignments: Vec<AssignmentResult>,
    skipped: Vec<String>,
    layout: LayoutDump,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreReport {
    layout_score: u32,
    utilization: f32,
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    // A second init (e.g. in tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    let scene = load_scene(&args.input, &config)?;
    let json = execute(args.command, scene)?;
    write_output(&json, args.output.as_deref())
}

/// Run one command against a loaded scene and render the JSON report.
pub fn execute(command: Command, scene: Scene) -> Result<String> {
    let Scene {
        mut layout,
        garments,
        rules,
    } = scene;
    let engine = AssignmentEngine::new(rules);

    let value = match command {
        Command::Place { kind } => {
            let module = layout.add_module(kind)?;
            info!(id = %module.id, "placed module");
            serde_json::to_value(LayoutDump::from_layout(&layout))?
        }
        Command::Validate(rect) => {
            let (position, size) = rect.split()?;
            let valid = validate_placement(position, size, layout.modules(), layout.canvas());
            serde_json::to_value(ValidateReport { valid })?
        }
        Command::Snap(rect) => {
            let (position, size) = rect.split()?;
            let canvas = layout.canvas();
            let snapped = snap_position(
                position,
                size,
                layout.modules(),
                canvas.snap_distance,
                canvas,
            );
            let valid = validate_placement(snapped, size, layout.modules(), canvas);
            serde_json::to_value(SnapReport {
                position: snapped,
                valid,
            })?
        }
        Command::Assign => {
            let outcome = layout.auto_assign(&engine, &garments);
            assign_report(outcome, &layout)?
        }
        Command::Rebalance => {
            let outcome = layout.rebalance(&engine, &garments);
            assign_report(outcome, &layout)?
        }
        Command::Clear => {
            layout.clear_auto_assignments();
            serde_json::to_value(LayoutDump::from_layout(&layout))?
        }
        Command::Score => serde_json::to_value(ScoreReport {
            layout_score: layout.layout_score(),
            utilization: layout.utilization(),
        })?,
    };

    Ok(serde_json::to_string_pretty(&value)?)
}

fn assign_report(outcome: AssignmentOutcome, layout: &ClosetLayout) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(AssignReport {
        summary: outcome.summary(),
        assignments: outcome.assignments,
        skipped: outcome.skipped,
        layout: LayoutDump::from_layout(layout),
    })?)
}

fn write_output(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, format!("{json}\n"))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
            Ok(())
        }
    }
}
