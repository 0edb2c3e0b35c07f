// Timing and sign-invariance tests for the secret-dependent coefficient paths
//
// The wall-clock comparisons depend on the host and are ignored by default;
// run them with `cargo test -p latticesig-tests -- --ignored`.

use latticesig_algorithms::poly::prelude::*;
use latticesig_common::ct;
use latticesig_params::Q;
use latticesig_tests::suites::constant_time::{TestConfig, TimingTester};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;

fn poly_with(mut f: impl FnMut(usize) -> i32) -> Polynomial {
    let mut p = Polynomial::zero();
    for (i, c) in p.coeffs.iter_mut().enumerate() {
        *c = f(i);
    }
    p
}

#[test]
#[ignore = "wall-clock measurement"]
fn test_caddq_timing_is_sign_independent() {
    let config = TestConfig::for_polynomial_ops();
    let negative = poly_with(|i| -(i as i32) - 1);
    let positive = poly_with(|i| i as i32 + 1);

    let tester = TimingTester::from_config(&config);
    let analysis = tester
        .compare(
            &config,
            || {
                let mut p = black_box(negative.clone());
                p.caddq();
                black_box(p);
            },
            || {
                let mut p = black_box(positive.clone());
                p.caddq();
                black_box(p);
            },
        )
        .unwrap_or_else(|e| panic!("analysis error: {}", e));

    println!("{}", analysis.summary("caddq"));
    assert!(analysis.is_constant_time, "{}", analysis.summary("caddq"));
}

#[test]
#[ignore = "wall-clock measurement"]
fn test_check_norm_timing_is_sign_independent() {
    let config = TestConfig::for_polynomial_ops();
    let bound = 1 << 17;
    let negative = poly_with(|i| -((i as i32 * 97) % bound));
    let positive = poly_with(|i| (i as i32 * 97) % bound);

    let tester = TimingTester::from_config(&config);
    let analysis = tester
        .compare(
            &config,
            || {
                black_box(black_box(&negative).check_norm(bound));
            },
            || {
                black_box(black_box(&positive).check_norm(bound));
            },
        )
        .unwrap_or_else(|e| panic!("analysis error: {}", e));

    println!("{}", analysis.summary("check_norm"));
    assert!(analysis.is_constant_time, "{}", analysis.summary("check_norm"));
}

#[test]
#[ignore = "wall-clock measurement"]
fn test_mask_abs_timing_is_sign_independent() {
    let config = TestConfig::for_coefficient_ops();
    let tester = TimingTester::from_config(&config);
    let analysis = tester
        .compare(
            &config,
            || {
                black_box(ct::abs(black_box(-123_456)));
            },
            || {
                black_box(ct::abs(black_box(123_456)));
            },
        )
        .unwrap_or_else(|e| panic!("analysis error: {}", e));

    println!("{}", analysis.summary("ct::abs"));
    assert!(analysis.is_constant_time, "{}", analysis.summary("ct::abs"));
}

#[test]
fn test_check_norm_verdict_ignores_sign() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    for _ in 0..200 {
        let bound = rng.gen_range(1..=(Q - 1) / 8);
        let p = poly_with(|_| rng.gen_range(-bound - 2..=bound + 2));
        let neg = poly_with(|i| -p.coeffs[i]);
        assert_eq!(p.check_norm(bound), neg.check_norm(bound));
    }
}

#[test]
fn test_check_norm_edges() {
    let mut p = Polynomial::zero();
    p.coeffs[200] = -99;
    assert_eq!(p.check_norm(100), NormCheck::Within);
    assert_eq!(p.check_norm(99), NormCheck::Exceeds);
    assert!(p.check_norm((Q - 1) / 8 + 1).exceeds());
    assert!(!Polynomial::zero().check_norm((Q - 1) / 8).exceeds());
}

#[test]
fn test_mask_helpers_match_branching_versions() {
    let mut rng = ChaCha20Rng::seed_from_u64(12);
    for _ in 0..10_000 {
        let x = rng.gen_range(-Q..Q);
        assert_eq!(ct::abs(x), x.abs());
        assert_eq!(caddq(x), if x < 0 { x + Q } else { x });
    }
}
