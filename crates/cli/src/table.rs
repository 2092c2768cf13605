//! Border tables: one row per persisted vertex.
//!
//! Columns: `region` (index in the input), `kind`, `vertex` (position in the
//! ring), `x`, `y`. Rows are ordered by region, then vertex.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use regions::{Coordinate, Region, TessCfg};
use std::fs::File;
use std::path::Path;

pub fn border_frame(regions: &[Region], cfg: TessCfg) -> Result<DataFrame> {
    let mut region_col: Vec<u32> = Vec::new();
    let mut kind_col: Vec<String> = Vec::new();
    let mut vertex_col: Vec<u32> = Vec::new();
    let mut x_col: Vec<f64> = Vec::new();
    let mut y_col: Vec<f64> = Vec::new();
    for (i, r) in regions.iter().enumerate() {
        let id = u32::try_from(i).context("region index exceeds u32")?;
        for (k, v) in r.border_with(cfg).into_iter().enumerate() {
            region_col.push(id);
            kind_col.push(r.kind().as_str().to_string());
            vertex_col.push(u32::try_from(k).context("vertex index exceeds u32")?);
            x_col.push(v.x);
            y_col.push(v.y);
        }
    }
    let df = df!(
        "region" => region_col,
        "kind" => kind_col,
        "vertex" => vertex_col,
        "x" => x_col,
        "y" => y_col
    )?;
    Ok(df)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TableFormat {
    Csv,
    Parquet,
}

fn table_format(path: &Path) -> Result<TableFormat> {
    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "csv" => Ok(TableFormat::Csv),
        "parquet" => Ok(TableFormat::Parquet),
        other => bail!("unsupported table extension {other:?} (use .csv or .parquet)"),
    }
}

fn create(out: &Path) -> Result<File> {
    File::create(out).with_context(|| format!("creating {}", out.display()))
}

/// Write by extension: `.csv` or `.parquet`. Nothing is created for any other
/// extension.
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    match table_format(out)? {
        TableFormat::Csv => {
            let mut file = create(out)?;
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
        TableFormat::Parquet => {
            ParquetWriter::new(create(out)?).finish(df)?;
        }
    }
    Ok(())
}

/// Read a `.csv` or `.parquet` border table back into one vertex list per
/// region.
pub fn read_borders(path: &Path) -> Result<Vec<(i64, Vec<Coordinate>)>> {
    let lf = match table_format(path)? {
        TableFormat::Csv => LazyCsvReader::new(path).with_has_header(true).finish(),
        TableFormat::Parquet => LazyFrame::scan_parquet(path, ScanArgsParquet::default()),
    };
    let df = lf
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading border table {}", path.display()))?;
    let region = df.column("region")?.cast(&DataType::Int64)?;
    let x = df.column("x")?.cast(&DataType::Float64)?;
    let y = df.column("y")?.cast(&DataType::Float64)?;
    let mut out: Vec<(i64, Vec<Coordinate>)> = Vec::new();
    for ((r, x), y) in region.i64()?.into_iter().zip(x.f64()?).zip(y.f64()?) {
        let (Some(r), Some(x), Some(y)) = (r, x, y) else {
            bail!("border table has null cells");
        };
        match out.last_mut() {
            Some((id, ring)) if *id == r => ring.push(Coordinate::new(x, y)),
            _ => out.push((r, vec![Coordinate::new(x, y)])),
        }
    }
    Ok(out)
}
