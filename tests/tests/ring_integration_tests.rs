// End-to-end flows through the ring layer the way a signer drives it

use latticesig_algorithms::poly::prelude::*;
use latticesig_algorithms::poly::serialize::{
    pack_eta, pack_t0, pack_t1, pack_w1, pack_z, try_unpack_eta, try_unpack_t0, try_unpack_t1,
    try_unpack_w1, try_unpack_z,
};
use latticesig_algorithms::Error;
use latticesig_params::{
    ParamError, ParameterSet, CRH_BYTES, N, Q, SEED_BYTES, T0_PACKED_BYTES, T1_PACKED_BYTES,
};

fn negacyclic(a: &Polynomial, b: &Polynomial) -> Polynomial {
    let q = Q as i64;
    let mut acc = [0i64; N];
    for i in 0..N {
        for j in 0..N {
            let prod = a.coeffs[i] as i64 * b.coeffs[j] as i64 % q;
            if i + j < N {
                acc[i + j] += prod;
            } else {
                acc[i + j - N] -= prod;
            }
        }
    }
    let mut out = Polynomial::zero();
    for (o, v) in out.coeffs.iter_mut().zip(acc) {
        *o = v.rem_euclid(q) as i32;
    }
    out
}

/// `a * y` through the transform, returned as standard representatives
fn ntt_product(a: &Polynomial, y: &Polynomial) -> Polynomial {
    let (mut ah, mut yh) = (a.clone(), y.clone());
    ah.ntt();
    yh.ntt();
    let mut w = ah.pointwise_montgomery(&yh);
    w.invntt_tomont();
    w.freeze();
    w
}

#[test]
fn test_commitment_product_matches_schoolbook() {
    let rho = [0x21u8; SEED_BYTES];
    let rhoprime = [0x42u8; CRH_BYTES];
    for params in ParameterSet::PRESETS {
        let mut a = Polynomial::zero();
        let mut y = Polynomial::zero();
        sample_uniform(&mut a, &rho, 0x0102);
        sample_gamma1(&mut y, &params, &rhoprime, 3);

        let mut y_std = y.clone();
        y_std.freeze();
        assert_eq!(ntt_product(&a, &y), negacyclic(&a, &y_std), "{}", params);
    }
}

#[test]
fn test_hint_recovers_commitment_high_bits() {
    let rho = [7u8; SEED_BYTES];
    let rhoprime = [9u8; CRH_BYTES];
    for params in ParameterSet::PRESETS {
        let g2 = params.gamma2.value();
        let mut a = Polynomial::zero();
        let mut y = Polynomial::zero();
        sample_uniform(&mut a, &rho, 1);
        sample_gamma1(&mut y, &params, &rhoprime, 1);
        let w = ntt_product(&a, &y);

        let mut w1 = Polynomial::zero();
        let mut w0 = Polynomial::zero();
        w.decompose(&params, &mut w1, &mut w0);

        // small perturbation, as -c*t0 is in a real signer
        let mut z = Polynomial::zero();
        sample_gamma1(&mut z, &params, &rhoprime, 2);
        for c in z.coeffs.iter_mut() {
            *c = *c % (g2 / 2);
        }

        let low = &w0 + &z;
        let mut hint = Polynomial::zero();
        let hints = hint.make_hint(&params, &low, &w1);
        assert_eq!(hints, hint.coeffs.iter().filter(|&&h| h != 0).count());
        assert!(hints > 0, "{}", params);

        let mut shifted = &w + &z;
        shifted.freeze();
        let mut recovered = Polynomial::zero();
        shifted.use_hint(&params, &hint, &mut recovered);
        assert_eq!(recovered, w1, "{}", params);

        let mut packed = vec![0u8; params.gamma2.w1_packed_bytes()];
        pack_w1(&params, &mut packed, &recovered);
        assert_eq!(try_unpack_w1(&params, &packed).unwrap(), w1);
    }
}

#[test]
fn test_public_key_split_round_trips() {
    let mut t = Polynomial::zero();
    sample_uniform(&mut t, &[3u8; SEED_BYTES], 5);

    let mut t1 = Polynomial::zero();
    let mut t0 = Polynomial::zero();
    t.power2round(&mut t1, &mut t0);

    let mut b1 = [0u8; T1_PACKED_BYTES];
    let mut b0 = [0u8; T0_PACKED_BYTES];
    pack_t1(&mut b1, &t1);
    pack_t0(&mut b0, &t0);

    let mut r1 = try_unpack_t1(&b1).unwrap();
    let r0 = try_unpack_t0(&b0).unwrap();
    r1.shiftl();
    assert_eq!(&r1 + &r0, t);
}

#[test]
fn test_secret_and_response_round_trip() {
    for params in ParameterSet::PRESETS {
        let mut s = Polynomial::zero();
        sample_eta(&mut s, &params, &[1u8; CRH_BYTES], 0);
        let mut buf = vec![0u8; params.eta.packed_bytes()];
        pack_eta(&params, &mut buf, &s);
        assert_eq!(try_unpack_eta(&params, &buf).unwrap(), s);

        let mut z = Polynomial::zero();
        sample_gamma1(&mut z, &params, &[2u8; CRH_BYTES], 0);
        let mut buf = vec![0u8; params.gamma1.packed_bytes()];
        pack_z(&params, &mut buf, &z);
        assert_eq!(try_unpack_z(&params, &buf).unwrap(), z);
        assert!(!z.check_norm(params.gamma1.value() + 1).exceeds());
    }
}

#[test]
fn test_challenge_times_secret_stays_within_beta() {
    for params in ParameterSet::PRESETS {
        let mut c = Polynomial::zero();
        let mut s = Polynomial::zero();
        sample_challenge(&mut c, &params, &vec![5u8; params.challenge_seed_bytes]);
        sample_eta(&mut s, &params, &[6u8; CRH_BYTES], 0);

        let mut cs = ntt_product(&c, &s);
        // back to centered form for the norm check
        for x in cs.coeffs.iter_mut() {
            if *x > Q / 2 {
                *x -= Q;
            }
        }
        assert!(!cs.check_norm(params.beta() as i32 + 1).exceeds(), "{}", params);
    }
}

#[test]
fn test_parameter_selection() {
    let gamma2 = (Q as u32 - 1) / 32;
    assert_eq!(
        ParameterSet::try_new(4, 1 << 19, gamma2, 49, 48).unwrap(),
        ParameterSet::ML_DSA_65
    );
    assert_eq!(
        ParameterSet::try_new(3, 1 << 17, 95232, 39, 32),
        Err(ParamError::UnsupportedEta(3))
    );
    let err: Error = ParameterSet::try_new(2, 1 << 18, 95232, 39, 32).unwrap_err().into();
    assert!(matches!(err, Error::Params(ParamError::UnsupportedGamma1(_))));
    assert_eq!("ml-dsa-87".parse::<ParameterSet>().unwrap(), ParameterSet::ML_DSA_87);
}
