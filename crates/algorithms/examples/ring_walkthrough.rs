// Walks one polynomial of each kind through the ring layer: sample, transform,
// round, hint and pack, printing the packed sizes along the way.

use latticesig_algorithms::poly::prelude::*;
use latticesig_algorithms::poly::serialize::{try_pack_t1, try_pack_w1, try_pack_z};
use latticesig_algorithms::{params::ParameterSet, Result};

fn main() -> Result<()> {
    let params: ParameterSet = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("ML-DSA-65")
        .parse()?;
    println!("{}", params);

    let rho = [1u8; 32];
    let rhoprime = [2u8; 64];

    let mut a = Polynomial::zero();
    let mut y = Polynomial::zero();
    sample_uniform(&mut a, &rho, 0);
    sample_gamma1(&mut y, &params, &rhoprime, 0);

    let mut y_hat = y.clone();
    a.ntt();
    y_hat.ntt();
    let mut w = a.pointwise_montgomery(&y_hat);
    w.invntt_tomont();
    w.freeze();

    let mut w1 = Polynomial::zero();
    let mut w0 = Polynomial::zero();
    w.decompose(&params, &mut w1, &mut w0);
    let mut w1_bytes = vec![0u8; params.gamma2.w1_packed_bytes()];
    try_pack_w1(&params, &mut w1_bytes, &w1)?;
    println!("w1: {} bytes", w1_bytes.len());

    let mut z_bytes = vec![0u8; params.gamma1.packed_bytes()];
    try_pack_z(&params, &mut z_bytes, &y)?;
    println!("z: {} bytes", z_bytes.len());

    let mut t1 = Polynomial::zero();
    let mut t0 = Polynomial::zero();
    w.power2round(&mut t1, &mut t0);
    let mut t1_bytes = [0u8; 320];
    try_pack_t1(&mut t1_bytes, &t1)?;
    println!("t1: {} bytes", t1_bytes.len());

    let mut c = Polynomial::zero();
    sample_challenge(&mut c, &params, &rhoprime[..params.challenge_seed_bytes]);
    println!(
        "challenge weight {} (tau = {})",
        c.coeffs.iter().filter(|&&x| x != 0).count(),
        params.tau
    );
    Ok(())
}
