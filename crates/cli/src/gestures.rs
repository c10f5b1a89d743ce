//! Gesture scripts on disk.
//!
//! - JSON: an array of gestures, each an array of `[x, y]` pairs.
//! - CSV / Parquet: a table with columns `gesture`, `x`, `y`; rows are grouped
//!   by `gesture` in first-seen order and keep their row order within a group.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use symrec::Point;

pub type Gesture = Vec<Point>;

/// Reads a gesture script, choosing the format from the file extension.
pub fn read_gestures(path: &Path) -> Result<Vec<Gesture>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => read_json(path),
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            read_table(lf).with_context(|| format!("reading {}", path.display()))
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            read_table(lf).with_context(|| format!("reading {}", path.display()))
        }
        _ => bail!(
            "unsupported gesture file {} (expected .json, .csv or .parquet)",
            path.display()
        ),
    }
}

fn read_json(path: &Path) -> Result<Vec<Gesture>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<Vec<[f64; 2]>> =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(raw
        .into_iter()
        .map(|g| g.into_iter().map(|[x, y]| Point::new(x, y)).collect())
        .collect())
}

fn read_table(lf: LazyFrame) -> Result<Vec<Gesture>> {
    let df = lf
        .select([
            col("gesture").cast(DataType::Int64),
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    tracing::debug!(rows = df.height(), cols = df.width(), "gesture table");

    let ids = df.column("gesture")?.i64()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;

    let mut order: HashMap<i64, usize> = HashMap::new();
    let mut out: Vec<Gesture> = Vec::new();
    for (row, ((id, x), y)) in ids.into_iter().zip(xs).zip(ys).enumerate() {
        let (Some(id), Some(x), Some(y)) = (id, x, y) else {
            return Err(anyhow!("row {row}: gesture, x and y must all be present"));
        };
        let slot = *order.entry(id).or_insert_with(|| {
            out.push(Vec::new());
            out.len() - 1
        });
        out[slot].push(Point::new(x, y));
    }
    Ok(out)
}

/// Writes gestures as a JSON script.
pub fn write_gestures(path: &Path, gestures: &[Gesture]) -> Result<()> {
    let raw: Vec<Vec<[f64; 2]>> = gestures
        .iter()
        .map(|g| g.iter().map(|p| [p.x, p.y]).collect())
        .collect();
    crate::ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(&raw)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
