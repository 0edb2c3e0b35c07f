// Independent polynomials may be processed on separate threads

use latticesig_algorithms::poly::prelude::*;
use latticesig_params::{ParameterSet, CRH_BYTES, SEED_BYTES};
use std::thread;

fn expand(params: &ParameterSet, nonce: u16) -> (Polynomial, Polynomial, Polynomial) {
    let mut a = Polynomial::zero();
    let mut s = Polynomial::zero();
    let mut y = Polynomial::zero();
    sample_uniform(&mut a, &[0xA5; SEED_BYTES], nonce);
    sample_eta(&mut s, params, &[0x5A; CRH_BYTES], nonce);
    sample_gamma1(&mut y, params, &[0x3C; CRH_BYTES], nonce);
    a.ntt();
    (a, s, y)
}

#[test]
fn test_parallel_expansion_matches_sequential() {
    let params = ParameterSet::ML_DSA_87;
    let sequential: Vec<_> = (0..16u16).map(|n| expand(&params, n)).collect();

    let parallel: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..16u16)
            .map(|n| scope.spawn(move || expand(&params, n)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn test_shared_parameter_set_across_threads() {
    let params = ParameterSet::ML_DSA_65;
    let counts: Vec<usize> = thread::scope(|scope| {
        let params = &params;
        let handles: Vec<_> = (0..8u8)
            .map(|i| {
                scope.spawn(move || {
                    let mut c = Polynomial::zero();
                    sample_challenge(&mut c, params, &[i; 48]);
                    c.coeffs.iter().filter(|&&x| x != 0).count()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(counts.iter().all(|&n| n == params.tau));
}
