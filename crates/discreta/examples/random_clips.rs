//! Show boolean operations on random star polygons for quick sanity on areas.
//!
//! Usage:
//!   cargo run -p discreta --example random_clips -- areas
//!   cargo run -p discreta --example random_clips -- rings
//!
//! - areas mode: prints |A|, |B| and the four result areas, plus the
//!   inclusion–exclusion residual |A∪B| + |A∩B| − |A| − |B|.
//! - rings mode: prints ring counts and orientations per operation.

use discreta::complex::Point2;
use discreta::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use discreta::geom2::{apply, BoolOp, Polygon};

const OPS: [BoolOp; 4] = [
    BoolOp::Union,
    BoolOp::Intersection,
    BoolOp::Difference,
    BoolOp::SymmetricDifference,
];

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "areas".to_string());
    match mode.as_str() {
        "areas" => show_areas(),
        "rings" => show_rings(),
        _ => {
            eprintln!("usage: random_clips [areas|rings]");
        }
    }
}

fn sample(index: u64) -> (Polygon, Polygon) {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 25 },
        radial_jitter: 0.5,
        ..RadialCfg::default()
    };
    let a = draw_polygon_radial(cfg, ReplayToken { seed: 2025, index: 2 * index }).unwrap();
    let b = draw_polygon_radial(
        RadialCfg {
            center: Point2::new(0.7, 0.1),
            ..cfg
        },
        ReplayToken {
            seed: 2025,
            index: 2 * index + 1,
        },
    )
    .unwrap();
    (a, b)
}

fn show_areas() {
    for i in 0..5 {
        let (a, b) = sample(i);
        let areas: Vec<f64> = OPS.iter().map(|&op| apply(&a, &b, op).area()).collect();
        let residual = areas[0] + areas[1] - a.area() - b.area();
        println!(
            "sample {i}: |A|={:.4} |B|={:.4} union={:.4} inter={:.4} diff={:.4} xor={:.4} residual={residual:.2e}",
            a.area(),
            b.area(),
            areas[0],
            areas[1],
            areas[2],
            areas[3],
        );
    }
}

fn show_rings() {
    for i in 0..5 {
        let (a, b) = sample(i);
        for op in OPS {
            let set = apply(&a, &b, op);
            let holes = set.iter().filter(|p| !p.is_ccw()).count();
            println!(
                "sample {i} {op}: rings={} holes={holes} vertices={}",
                set.len(),
                set.iter().map(Polygon::len).sum::<usize>()
            );
        }
    }
}
