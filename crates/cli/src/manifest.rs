//! Export manifests.
//!
//! Every tessellated table gets a `<stem>.manifest.json` next to it, recording
//! which regions file produced it, how many regions of each kind went in and
//! the tessellation settings used. Re-running with the same manifest values
//! reproduces the table byte for byte.

use anyhow::{Context, Result};
use regions::{Region, RegionKind, TessCfg};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub code_rev: String,
    pub engine_version: &'static str,
    pub input: String,
    pub regions: usize,
    /// Region count per kind; kinds with no regions are omitted.
    pub kinds: BTreeMap<RegionKind, usize>,
    pub tess: TessCfg,
    pub output: String,
    pub rows: usize,
}

impl Manifest {
    pub fn describe(input: &Path, regions: &[Region], tess: TessCfg) -> Self {
        let mut kinds = BTreeMap::new();
        for r in regions {
            *kinds.entry(r.kind()).or_insert(0) += 1;
        }
        Self {
            code_rev: code_rev(),
            engine_version: regions::VERSION,
            input: input.display().to_string(),
            regions: regions.len(),
            kinds,
            tess,
            output: String::new(),
            rows: 0,
        }
    }

    pub fn for_output(mut self, output: &Path, rows: usize) -> Self {
        self.output = output.display().to_string();
        self.rows = rows;
        self
    }

    /// Write the manifest beside `output` and return its path.
    pub fn write_beside(&self, output: &Path) -> Result<PathBuf> {
        let path = manifest_path(output);
        let body = serde_json::to_vec_pretty(self)?;
        std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "manifest written");
        Ok(path)
    }
}

/// `dir/borders.csv` -> `dir/borders.manifest.json`.
fn manifest_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("borders");
    output.with_file_name(format!("{stem}.manifest.json"))
}

/// Commit hash from `REGIONS_REV`, falling back to `git describe`, then "unknown".
pub fn code_rev() -> String {
    std::env::var("REGIONS_REV")
        .ok()
        .filter(|rev| !rev.trim().is_empty())
        .or_else(|| {
            let out = Command::new("git")
                .args(["describe", "--always", "--dirty"])
                .output()
                .ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".into())
}
