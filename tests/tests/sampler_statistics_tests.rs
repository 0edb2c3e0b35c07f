// Goodness-of-fit tests for the samplers
//
// Seeds are fixed, so every verdict is deterministic; the thresholds are
// far enough out that a correct sampler passes them.

use latticesig_algorithms::poly::prelude::*;
use latticesig_params::{ParameterSet, CRH_BYTES, N, Q, SEED_BYTES};
use latticesig_tests::suites::statistics::{chi_square, chi_square_uniform};

const P_MIN: f64 = 1e-4;

fn seed(tag: u8, i: u32) -> [u8; CRH_BYTES] {
    let mut s = [tag; CRH_BYTES];
    s[..4].copy_from_slice(&i.to_le_bytes());
    s
}

#[test]
fn test_uniform_sampler_covers_zq_evenly() {
    let mut counts = [0u64; 32];
    let mut p = Polynomial::zero();
    for i in 0..200 {
        sample_uniform(&mut p, &seed(1, i)[..SEED_BYTES], 0);
        for &c in p.coeffs.iter() {
            counts[(c as i64 * 32 / Q as i64) as usize] += 1;
        }
    }
    let (stat, p_value) = chi_square_uniform(&counts);
    assert!(p_value > P_MIN, "chi2 = {}, p = {}", stat, p_value);
}

#[test]
fn test_eta_sampler_is_uniform_over_its_range() {
    for params in [ParameterSet::ML_DSA_44, ParameterSet::ML_DSA_65] {
        let eta = params.eta.value();
        let mut counts = vec![0u64; (2 * eta + 1) as usize];
        let mut p = Polynomial::zero();
        for i in 0..200 {
            sample_eta(&mut p, &params, &seed(2, i), i as u16);
            for &c in p.coeffs.iter() {
                counts[(c + eta) as usize] += 1;
            }
        }
        let (stat, p_value) = chi_square_uniform(&counts);
        assert!(p_value > P_MIN, "eta {}: chi2 = {}, p = {}", eta, stat, p_value);
    }
}

#[test]
fn test_gamma1_sampler_is_uniform_over_its_range() {
    let params = ParameterSet::ML_DSA_44;
    let g1 = params.gamma1.value() as i64;
    let mut counts = [0u64; 16];
    let mut p = Polynomial::zero();
    for i in 0..200 {
        sample_gamma1(&mut p, &params, &seed(3, i), 0);
        for &c in p.coeffs.iter() {
            // shift (-g1, g1] onto [0, 2*g1)
            let u = c as i64 + g1 - 1;
            counts[(u * 16 / (2 * g1)) as usize] += 1;
        }
    }
    let (stat, p_value) = chi_square_uniform(&counts);
    assert!(p_value > P_MIN, "chi2 = {}, p = {}", stat, p_value);
}

#[test]
fn test_challenge_positions_and_signs_are_balanced() {
    let params = ParameterSet::ML_DSA_87;
    let mut positions = [0u64; 16];
    let mut signs = [0u64; 2];
    let mut c = Polynomial::zero();
    for i in 0..2000 {
        sample_challenge(&mut c, &params, &seed(4, i)[..params.challenge_seed_bytes]);
        for (j, &x) in c.coeffs.iter().enumerate() {
            if x != 0 {
                positions[j * 16 / N] += 1;
                signs[(x > 0) as usize] += 1;
            }
        }
    }

    let (stat, p_value) = chi_square_uniform(&positions);
    assert!(p_value > P_MIN, "positions: chi2 = {}, p = {}", stat, p_value);
    let (stat, p_value) = chi_square_uniform(&signs);
    assert!(p_value > P_MIN, "signs: chi2 = {}, p = {}", stat, p_value);
}

#[test]
fn test_neighbouring_nonces_are_independent() {
    // joint distribution of the same coefficient under nonces n and n + 1
    let params = ParameterSet::ML_DSA_44;
    let mut joint = [0u64; 25];
    let mut a = Polynomial::zero();
    let mut b = Polynomial::zero();
    let s = seed(5, 0);
    for nonce in 0..100u16 {
        sample_eta(&mut a, &params, &s, nonce);
        sample_eta(&mut b, &params, &s, nonce + 1);
        for (&x, &y) in a.coeffs.iter().zip(&b.coeffs) {
            joint[((x + 2) * 5 + (y + 2)) as usize] += 1;
        }
    }
    let (stat, p_value) = chi_square(&joint, &[1.0 / 25.0; 25]);
    assert!(p_value > P_MIN, "chi2 = {}, p = {}", stat, p_value);
}
