//! Boundary parsing: files and flags into validated library values.

use anyhow::{bail, Context, Result};
use discreta::complex::{c64, Complex, Point2};
use discreta::geom2::Polygon;
use discreta::relation::RelationPairSet;
use discreta::roots::Polynomial;
use polars::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Element universe plus pair list, as read from `{"elements": [...], "pairs": [[a, b], ...]}`.
///
/// Elements may be JSON strings or any other scalar; non-strings are labelled
/// by their JSON text (`1` becomes `"1"`).
#[derive(Debug)]
pub struct RelationInput {
    pub elements: Vec<String>,
    pub pairs: RelationPairSet<String>,
}

#[derive(Deserialize)]
struct RawRelation {
    elements: Vec<Value>,
    #[serde(default)]
    pairs: Vec<(Value, Value)>,
}

#[derive(Deserialize)]
struct RawPolynomial {
    coeffs: Polynomial,
}

fn label(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing JSON in {}", path.display()))
}

pub fn load_relation(path: &Path) -> Result<RelationInput> {
    let raw: RawRelation = read_json(path)?;
    Ok(RelationInput {
        elements: raw.elements.iter().map(label).collect(),
        pairs: raw.pairs.iter().map(|(a, b)| (label(a), label(b))).collect(),
    })
}

pub fn load_polynomial(path: &Path) -> Result<Polynomial> {
    let raw: RawPolynomial = read_json(path)?;
    Ok(raw.coeffs)
}

/// Parse `"1,0,-1"`; an entry `re:im` is a complex coefficient.
pub fn parse_coeffs(text: &str) -> Result<Polynomial> {
    let coeffs = text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(k, item)| parse_complex(item).with_context(|| format!("coefficient {k}: '{item}'")))
        .collect::<Result<Vec<Complex>>>()?;
    Ok(Polynomial::new(coeffs)?)
}

fn parse_complex(item: &str) -> Result<Complex> {
    let z = match item.split_once(':') {
        Some((re, im)) => c64(re.trim().parse()?, im.trim().parse()?),
        None => c64(item.parse()?, 0.0),
    };
    Ok(z)
}

/// Read a polygon from `.csv` (columns `x`, `y`) or JSON (`[[x, y], ...]`).
pub fn load_polygon(path: &Path) -> Result<Polygon> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        load_polygon_csv(path)
    } else {
        read_json(path)
    }
}

fn load_polygon_csv(path: &Path) -> Result<Polygon> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening CSV {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), path = %path.display(), "polygon_csv");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut vertices = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => vertices.push(Point2::new(x, y)),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        }
    }
    Polygon::new(vertices).with_context(|| format!("polygon in {}", path.display()))
}
