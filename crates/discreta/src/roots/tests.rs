use super::*;
use crate::complex::{approx_eq, c64, Complex};
use crate::error::Error;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Every expected root is matched by a distinct returned root within `eps`.
fn same_root_set(got: &[Complex], expected: &[Complex], eps: f64) -> bool {
    if got.len() != expected.len() {
        return false;
    }
    let mut used = vec![false; got.len()];
    expected.iter().all(|e| {
        let hit = got
            .iter()
            .enumerate()
            .find(|(k, g)| !used[*k] && approx_eq(**g, *e, eps));
        match hit {
            Some((k, _)) => {
                used[k] = true;
                true
            }
            None => false,
        }
    })
}

fn vieta_holds(coeffs: &[Complex], roots: &[Complex], eps: f64) -> bool {
    let n = roots.len();
    let sum: Complex = roots.iter().sum();
    let prod: Complex = roots.iter().product();
    let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
    let scale = coeffs.iter().map(|c| c.norm()).fold(1.0, f64::max);
    approx_eq(sum, -coeffs[1], eps * scale) && approx_eq(prod, coeffs[n] * sign, eps * scale)
}

#[test]
fn difference_of_squares() {
    let p = Polynomial::from_real(&[1.0, 0.0, -1.0]).unwrap();
    let roots = solve(&p, 200, 1e-8).unwrap();
    assert!(same_root_set(&roots, &[c64(1.0, 0.0), c64(-1.0, 0.0)], 1e-8));
}

#[test]
fn purely_imaginary_pair_from_real_coefficients() {
    // x² + 1: the rotated start keeps the iterates off the real axis.
    let p = Polynomial::from_real(&[1.0, 0.0, 1.0]).unwrap();
    let report = solve_with(&p, SolveCfg::default()).unwrap();
    assert!(report.converged);
    assert!(same_root_set(
        &report.roots,
        &[c64(0.0, 1.0), c64(0.0, -1.0)],
        1e-8
    ));
}

#[test]
fn constant_polynomial_has_no_roots() {
    let p = Polynomial::from_real(&[5.0]).unwrap();
    assert!(solve(&p, 200, 1e-8).unwrap().is_empty());
    // Degree 0 is checked before the leading coefficient.
    let zero = Polynomial::from_real(&[0.0]).unwrap();
    assert!(solve(&zero, 200, 1e-8).unwrap().is_empty());
}

#[test]
fn linear_polynomial_solves_in_one_pass() {
    let p = Polynomial::new(vec![c64(2.0, 0.0), c64(-4.0, 2.0)]).unwrap();
    let report = solve_with(&p, SolveCfg::default()).unwrap();
    assert!(approx_eq(report.roots[0], c64(2.0, -1.0), 1e-12));
    assert!(report.iterations <= 2);
}

#[test]
fn zero_leading_coefficient_is_rejected() {
    let p = Polynomial::from_real(&[0.0, 1.0, 2.0]).unwrap();
    match solve(&p, 200, 1e-8) {
        Err(Error::DegenerateLeadingCoefficient { re, im }) => {
            assert_eq!((re, im), (0.0, 0.0));
        }
        other => panic!("expected DegenerateLeadingCoefficient, got {other:?}"),
    }
}

#[test]
fn tiny_but_uniform_coefficients_are_solved() {
    // 1e-15·(x + 1)²
    let p = Polynomial::from_real(&[1e-15, 2e-15, 1e-15]).unwrap();
    let roots = solve(&p, 500, 1e-10).unwrap();
    assert!(roots.iter().all(|r| approx_eq(*r, c64(-1.0, 0.0), 1e-4)));

    // 1e-15·(x − 1)(x − 2)
    let q = Polynomial::from_real(&[1e-15, -3e-15, 2e-15]).unwrap();
    let roots = solve(&q, 200, 1e-10).unwrap();
    assert!(same_root_set(&roots, &[c64(1.0, 0.0), c64(2.0, 0.0)], 1e-8));
}

#[test]
fn leading_coefficient_negligible_against_the_rest_is_rejected() {
    let p = Polynomial::from_real(&[1e-20, 1.0, 2.0]).unwrap();
    assert!(matches!(
        p.monic(),
        Err(Error::DegenerateLeadingCoefficient { .. })
    ));
}

#[test]
fn complex_leading_coefficient_uses_full_division() {
    // i·(x − 2)(x + 3) = i x² + i x − 6i
    let i = c64(0.0, 1.0);
    let p = Polynomial::new(vec![i, i, c64(0.0, -6.0)]).unwrap();
    let roots = solve(&p, 200, 1e-10).unwrap();
    assert!(same_root_set(&roots, &[c64(2.0, 0.0), c64(-3.0, 0.0)], 1e-8));
}

#[test]
fn double_root_surfaces_as_coincident_candidates() {
    let p = Polynomial::from_real(&[1.0, -2.0, 1.0]).unwrap();
    let report = solve_with(&p, SolveCfg::default()).unwrap();
    assert_eq!(report.roots.len(), 2);
    for r in &report.roots {
        assert!(approx_eq(*r, c64(1.0, 0.0), 1e-4), "root {r} far from 1");
    }
}

#[test]
fn zero_budget_returns_starting_points() {
    let p = Polynomial::from_real(&[1.0, 0.0, -1.0]).unwrap();
    let cfg = SolveCfg {
        max_iter: 0,
        ..SolveCfg::default()
    };
    let report = solve_with(&p, cfg).unwrap();
    assert_eq!(report.iterations, 0);
    assert!(!report.converged);
    assert_eq!(report.roots.len(), 2);
}

#[test]
fn validation_rejects_empty_and_non_finite() {
    assert_eq!(Polynomial::new(vec![]), Err(Error::EmptyPolynomial));
    assert_eq!(
        Polynomial::from_real(&[1.0, f64::NAN]),
        Err(Error::NonFiniteCoefficient { index: 1 })
    );
}

#[test]
fn horner_and_from_roots_agree() {
    let roots = [c64(1.0, 1.0), c64(-2.0, 0.0), c64(0.5, -3.0)];
    let p = Polynomial::from_roots(&roots).unwrap();
    assert_eq!(p.degree(), 3);
    assert_eq!(p.leading(), c64(1.0, 0.0));
    for r in roots {
        assert!(p.eval(r).norm() < 1e-12);
    }
    assert_eq!(p.eval(c64(0.0, 0.0)), p.coeffs()[3]);
}

#[test]
fn vieta_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..25 {
        let degree = rng.gen_range(1..=7);
        let mut coeffs = vec![c64(1.0, 0.0)];
        for _ in 0..degree {
            coeffs.push(c64(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)));
        }
        let p = Polynomial::new(coeffs.clone()).unwrap();
        let roots = solve(&p, 500, 1e-10).unwrap();
        assert_eq!(roots.len(), degree);
        if degree >= 1 {
            assert!(vieta_holds(&coeffs, &roots, 1e-4), "coeffs {coeffs:?}");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn vieta_sum_and_product(parts in prop::collection::vec((-3.0f64..3.0, -3.0f64..3.0), 1..6)) {
        let mut coeffs = vec![c64(1.0, 0.0)];
        coeffs.extend(parts.iter().map(|&(re, im)| c64(re, im)));
        let p = Polynomial::new(coeffs.clone()).unwrap();
        let roots = solve(&p, 500, 1e-10).unwrap();
        prop_assert_eq!(roots.len(), coeffs.len() - 1);
        prop_assert!(vieta_holds(&coeffs, &roots, 1e-4));
    }
}
