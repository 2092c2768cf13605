use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use regions::{Coordinate, Recorder, Region, Shape, TessCfg};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod manifest;
mod table;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Inspect, tessellate and render annotation regions")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Report kind, area, center and bounds for every region in a JSON file
    Inspect {
        #[arg(long)]
        input: PathBuf,
    },
    /// List the regions that contain a normalized point
    Contains {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
    },
    /// Write every region's border as a vertex table (.csv, .parquet or .json)
    Tessellate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Longest chord between ellipse samples, in normalized units
        #[arg(long, default_value_t = TessCfg::default().max_chord)]
        max_chord: f64,
    },
    /// Read a .csv or .parquet border table back and report each region's area
    Borders {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print the draw commands issued for an image of the given pixel size
    Draw {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
    },
    /// Print the engine version, code revision and default tessellation settings
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = match cmd.action {
        Action::Inspect { input } => inspect(&load_regions(&input)?),
        Action::Contains { input, x, y } => contains(&load_regions(&input)?, Coordinate::new(x, y)),
        Action::Tessellate {
            input,
            out,
            max_chord,
        } => tessellate(&input, &out, max_chord)?,
        Action::Borders { input } => borders(&input)?,
        Action::Draw {
            input,
            width,
            height,
        } => draw(&load_regions(&input)?, width, height),
        Action::Report => report(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn load_regions(path: &Path) -> Result<Vec<Region>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let regions: Vec<Region> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing regions from {}", path.display()))?;
    tracing::info!(path = %path.display(), count = regions.len(), "loaded regions");
    Ok(regions)
}

fn inspect(regions: &[Region]) -> Value {
    let rows: Vec<Value> = regions
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let area = r.area();
            if area == 0.0 {
                tracing::warn!(index = i, kind = %r.kind(), "degenerate region");
            }
            json!({
                "index": i,
                "kind": r.kind(),
                "area": area,
                "center": r.center(),
                "bounds": r.bounds(),
                "vertices": r.vertices().len(),
            })
        })
        .collect();
    Value::Array(rows)
}

fn contains(regions: &[Region], p: Coordinate) -> Value {
    let hits: Vec<usize> = regions
        .iter()
        .enumerate()
        .filter(|(_, r)| r.contains(p))
        .map(|(i, _)| i)
        .collect();
    tracing::info!(x = p.x, y = p.y, hits = hits.len(), "contains");
    json!({ "point": p, "regions": hits })
}

fn tessellate(input: &Path, out: &Path, max_chord: f64) -> Result<Value> {
    let regions = load_regions(input)?;
    let cfg = TessCfg::with_max_chord(max_chord);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let is_json = out.extension().and_then(|e| e.to_str()) == Some("json");
    let rows: usize = if is_json {
        let borders: Vec<Vec<Coordinate>> = regions.iter().map(|r| r.border_with(cfg)).collect();
        std::fs::write(out, serde_json::to_vec_pretty(&borders)?)
            .with_context(|| format!("writing {}", out.display()))?;
        borders.iter().map(Vec::len).sum()
    } else {
        let mut df = table::border_frame(&regions, cfg)?;
        table::write_frame(&mut df, out)?;
        df.height()
    };
    tracing::info!(out = %out.display(), regions = regions.len(), rows, max_chord, "tessellated");

    let manifest = manifest::Manifest::describe(input, &regions, cfg)
        .for_output(out, rows)
        .write_beside(out)?;
    Ok(json!({
        "out": out.to_string_lossy(),
        "manifest": manifest.to_string_lossy(),
        "regions": regions.len(),
        "vertices": rows,
    }))
}

fn borders(input: &Path) -> Result<Value> {
    let rings = table::read_borders(input)?;
    let rows = rings
        .into_iter()
        .map(|(id, ring)| {
            let r = Region::from_border(ring);
            json!({
                "region": id,
                "vertices": r.vertices().len(),
                "area": r.area(),
                "center": r.center(),
            })
        })
        .collect();
    Ok(Value::Array(rows))
}

fn draw(regions: &[Region], width: f64, height: f64) -> Value {
    let mut surface = Recorder::new();
    let rows = regions
        .iter()
        .enumerate()
        .map(|(i, r)| {
            r.draw(width, height, &mut surface);
            json!({ "index": i, "commands": surface.take() })
        })
        .collect();
    Value::Array(rows)
}

fn report() -> Value {
    json!({
        "code_rev": manifest::code_rev(),
        "engine_version": regions::VERSION,
        "tess": TessCfg::default(),
    })
}
