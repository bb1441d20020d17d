use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use discreta::geom2::{apply, BoolOp};
use discreta::order::{hasse_covers, layer};
use discreta::relation::analyze;
use discreta::roots::{solve_with, SolveCfg};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "discreta")]
#[command(about = "Polynomial roots, relation checks, order layering and polygon clipping")]
struct Cmd {
    /// Write the JSON result here (plus a provenance sidecar) instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Free-form run label; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// All complex roots of a polynomial (coefficients highest degree first)
    Roots {
        /// Comma-separated coefficients; `re:im` for complex entries
        #[arg(long, allow_hyphen_values = true, conflicts_with = "input")]
        coeffs: Option<String>,
        /// JSON file `{"coeffs": [[re, im], ...]}`
        #[arg(long, required_unless_present = "coeffs")]
        input: Option<PathBuf>,
        #[arg(long, default_value_t = 200)]
        max_iter: u32,
        #[arg(long, default_value_t = 1e-8)]
        tol: f64,
    },
    /// Reflexive/symmetric/transitive flags and equivalence classes
    Relation {
        /// JSON file `{"elements": [...], "pairs": [[a, b], ...]}`
        #[arg(long)]
        input: PathBuf,
    },
    /// Longest-path ranks of a partial order
    Layer {
        /// JSON file `{"elements": [...], "pairs": [[a, b], ...]}`
        #[arg(long)]
        input: PathBuf,
        /// Also emit the Hasse cover pairs
        #[arg(long)]
        covers: bool,
    },
    /// Boolean operation on two polygons (`.json` `[[x, y], ...]` or `.csv` with x,y columns)
    Clip {
        #[arg(long)]
        a: PathBuf,
        #[arg(long)]
        b: PathBuf,
        /// union | intersection | difference | xor
        #[arg(long, default_value = "union")]
        op: BoolOp,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let tag = cmd.tag.clone();
    let (command, params, result) = match cmd.action {
        Action::Roots {
            coeffs,
            input,
            max_iter,
            tol,
        } => roots(coeffs, input, max_iter, tol)?,
        Action::Relation { input } => relation(&input)?,
        Action::Layer { input, covers } => layers(&input, covers)?,
        Action::Clip { a, b, op } => clip(&a, &b, op)?,
        Action::Report => ("report", json!({}), provenance::block(tag.as_deref())),
    };
    tracing::info!(command, tag = ?tag, out = ?cmd.out, "done");
    emit(command, params, &result, cmd.out.as_deref(), tag)
}

type Outcome = (&'static str, Value, Value);

fn roots(
    coeffs: Option<String>,
    input: Option<PathBuf>,
    max_iter: u32,
    tol: f64,
) -> Result<Outcome> {
    let poly = match (&coeffs, &input) {
        (Some(text), _) => input::parse_coeffs(text).context("parsing --coeffs")?,
        (None, Some(path)) => input::load_polynomial(path)?,
        (None, None) => anyhow::bail!("either --coeffs or --input is required"),
    };
    let cfg = SolveCfg {
        max_iter,
        tol,
        ..SolveCfg::default()
    };
    let report = solve_with(&poly, cfg).context("solving for roots")?;
    tracing::info!(
        degree = poly.degree(),
        iterations = report.iterations,
        converged = report.converged,
        "roots"
    );
    let mut result = serde_json::to_value(&report)?;
    result["degree"] = json!(poly.degree());
    let params = json!({
        "coeffs": coeffs,
        "input": input,
        "max_iter": max_iter,
        "tol": tol,
    });
    Ok(("roots", params, result))
}

fn relation(path: &Path) -> Result<Outcome> {
    let rel = input::load_relation(path)?;
    let report = analyze(&rel.elements, &rel.pairs);
    tracing::info!(
        elements = rel.elements.len(),
        pairs = rel.pairs.len(),
        equivalence = report.is_equivalence(),
        "relation"
    );
    let mut result = serde_json::to_value(&report)?;
    result["is_equivalence"] = json!(report.is_equivalence());
    result["is_partial_order"] = json!(report.is_partial_order());
    Ok(("relation", json!({ "input": path }), result))
}

fn layers(path: &Path, covers: bool) -> Result<Outcome> {
    let rel = input::load_relation(path)?;
    let ranks = layer(&rel.elements, &rel.pairs)
        .with_context(|| format!("layering {}", path.display()))?;
    tracing::info!(elements = ranks.len(), height = ranks.height(), "layer");
    let by_element: BTreeMap<&String, usize> = ranks.iter().collect();
    let mut result = json!({
        "ranks": by_element,
        "height": ranks.height(),
        "layers": ranks.layers(),
    });
    if covers {
        result["covers"] = serde_json::to_value(hasse_covers(&rel.elements, &rel.pairs)?)?;
    }
    Ok((
        "layer",
        json!({ "input": path, "covers": covers }),
        result,
    ))
}

fn clip(a: &Path, b: &Path, op: BoolOp) -> Result<Outcome> {
    let pa = input::load_polygon(a).with_context(|| format!("loading polygon --a {}", a.display()))?;
    let pb = input::load_polygon(b).with_context(|| format!("loading polygon --b {}", b.display()))?;
    let set = apply(&pa, &pb, op);
    tracing::info!(%op, rings = set.len(), area = set.area(), "clip");
    let result = json!({
        "op": op,
        "area": set.area(),
        "polygons": set,
    });
    Ok(("clip", json!({ "a": a, "b": b, "op": op }), result))
}

/// Print to stdout, or write `out` and its provenance sidecar.
fn emit(
    command: &'static str,
    params: Value,
    result: &Value,
    out: Option<&Path>,
    tag: Option<String>,
) -> Result<()> {
    let Some(out_path) = out else {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out_path, serde_json::to_vec_pretty(result)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    let payload = provenance::Payload::new(command, params).with_tag(tag);
    let prov = provenance::write_sidecar(out_path, payload)?;
    tracing::info!(out = %out_path.display(), provenance = %prov.display(), "wrote");
    Ok(())
}
