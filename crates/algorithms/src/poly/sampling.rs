//! Deterministic polynomial samplers
//!
//! Every sampler keys its own stream from the seed (and nonce), squeezes the
//! number of blocks that usually suffices and keeps squeezing the same stream
//! if rejection leaves coefficients unfilled. Byte windows live in
//! [`SecretBuffer`]s and the stream reader wipes itself, so nothing
//! seed-derived outlives the call.
//!
//! Seeds of the wrong length are caller bugs; they are only caught by
//! `debug_assert!`.

use latticesig_common::{EphemeralSecret, SecretBuffer};
use latticesig_params::{Eta, ParameterSet, CRH_BYTES, N, Q, SEED_BYTES};

use super::polynomial::Polynomial;
use super::serialize;
use crate::xof::{
    self, ExtendableOutputFunction, ShakeXof256, XofReader, SHAKE128_RATE, SHAKE256_RATE,
};

/// Blocks that cover 256 uniform candidates with high probability
const UNIFORM_NBLOCKS: usize = (768 + SHAKE128_RATE - 1) / SHAKE128_RATE;
const UNIFORM_BUFLEN: usize = UNIFORM_NBLOCKS * SHAKE128_RATE;
// room for the bytes of a split candidate carried into the next block
const UNIFORM_BUF_BYTES: usize = UNIFORM_BUFLEN + 2;

const ETA_MAX_NBLOCKS: usize = 2;
const GAMMA1_MAX_NBLOCKS: usize = (640 + SHAKE256_RATE - 1) / SHAKE256_RATE;

/// Stream blocks squeezed up front by the narrow sampler
const fn eta_nblocks(eta: Eta) -> usize {
    match eta {
        Eta::Two => (136 + SHAKE256_RATE - 1) / SHAKE256_RATE,
        Eta::Four => (227 + SHAKE256_RATE - 1) / SHAKE256_RATE,
    }
}

/// Uniform polynomial with coefficients in `[0, q)`
///
/// Rejection-samples 23-bit little-endian candidates from
/// SHAKE-128(`seed || nonce`).
pub fn sample_uniform(out: &mut Polynomial, seed: &[u8], nonce: u16) {
    debug_assert_eq!(seed.len(), SEED_BYTES);

    let mut stream = xof::stream128(seed, nonce);
    fill_uniform(out, &mut stream);
}

/// Rejection loop of [`sample_uniform`] over an already keyed stream
///
/// Squeezes [`UNIFORM_NBLOCKS`] blocks, then one block at a time until all
/// coefficients are filled. A candidate split across the end of the window is
/// carried to the front of the next one.
fn fill_uniform<R: XofReader>(out: &mut Polynomial, stream: &mut R) {
    debug_assert_eq!(R::RATE, SHAKE128_RATE);

    let mut buf = SecretBuffer::<UNIFORM_BUF_BYTES>::zeroed();
    stream.squeeze_blocks(&mut buf.as_mut_slice()[..UNIFORM_BUFLEN]);

    let mut buflen = UNIFORM_BUFLEN;
    let mut ctr = rej_uniform(&mut out.coeffs, &buf.as_slice()[..buflen]);
    while ctr < N {
        trace_event!(ctr, "uniform sampler squeezing another block");
        let off = buflen % 3;
        buf.as_mut_slice().copy_within(buflen - off..buflen, 0);
        stream.squeeze_blocks(&mut buf.as_mut_slice()[off..off + SHAKE128_RATE]);
        buflen = SHAKE128_RATE + off;
        ctr += rej_uniform(&mut out.coeffs[ctr..], &buf.as_slice()[..buflen]);
    }
}

/// Fill `a` from 3-byte candidates in `buf`; returns how many were accepted
fn rej_uniform(a: &mut [i32], buf: &[u8]) -> usize {
    let mut ctr = 0;
    for chunk in buf.chunks_exact(3) {
        if ctr == a.len() {
            break;
        }
        let t = (chunk[0] as u32 | (chunk[1] as u32) << 8 | (chunk[2] as u32) << 16) & 0x7F_FFFF;
        if t < Q as u32 {
            a[ctr] = t as i32;
            ctr += 1;
        }
    }
    ctr
}

/// Narrow polynomial with coefficients in `[-eta, eta]`
///
/// Each byte of SHAKE-256(`seed || nonce`) yields two 4-bit candidates, low
/// nibble first. The seed is usually the 64-byte `rhoprime`; any length is
/// absorbed as is.
pub fn sample_eta(out: &mut Polynomial, params: &ParameterSet, seed: &[u8], nonce: u16) {
    let eta = params.eta;
    let rej: fn(&mut [i32], &[u8]) -> usize = match eta {
        Eta::Two => rej_eta2,
        Eta::Four => rej_eta4,
    };

    let buflen = eta_nblocks(eta) * SHAKE256_RATE;
    let mut buf = SecretBuffer::<{ ETA_MAX_NBLOCKS * SHAKE256_RATE }>::zeroed();
    let mut stream = xof::stream256(seed, nonce);
    stream.squeeze_blocks(&mut buf.as_mut_slice()[..buflen]);

    let mut ctr = rej(&mut out.coeffs, &buf.as_slice()[..buflen]);
    while ctr < N {
        trace_event!(nonce, ctr, "eta sampler squeezing another block");
        stream.squeeze_blocks(&mut buf.as_mut_slice()[..SHAKE256_RATE]);
        ctr += rej(&mut out.coeffs[ctr..], &buf.as_slice()[..SHAKE256_RATE]);
    }
}

fn rej_eta2(a: &mut [i32], buf: &[u8]) -> usize {
    let mut ctr = 0;
    for &byte in buf {
        if ctr == a.len() {
            break;
        }
        for t in [(byte & 0x0F) as i32, (byte >> 4) as i32] {
            if t < 15 && ctr < a.len() {
                // t mod 5, with (205 * t) >> 10 == t / 5 for t < 15
                let t = t - ((205 * t) >> 10) * 5;
                a[ctr] = 2 - t;
                ctr += 1;
            }
        }
    }
    ctr
}

fn rej_eta4(a: &mut [i32], buf: &[u8]) -> usize {
    let mut ctr = 0;
    for &byte in buf {
        if ctr == a.len() {
            break;
        }
        for t in [(byte & 0x0F) as i32, (byte >> 4) as i32] {
            if t < 9 && ctr < a.len() {
                a[ctr] = 4 - t;
                ctr += 1;
            }
        }
    }
    ctr
}

/// Masking polynomial with coefficients in `[-(gamma1 - 1), gamma1]`
///
/// No rejection: the first `params.gamma1.packed_bytes()` bytes of
/// SHAKE-256(`seed || nonce`) are read as a packed z polynomial.
pub fn sample_gamma1(out: &mut Polynomial, params: &ParameterSet, seed: &[u8], nonce: u16) {
    debug_assert_eq!(seed.len(), CRH_BYTES);

    let packed = params.gamma1.packed_bytes();
    let nblocks = (packed + SHAKE256_RATE - 1) / SHAKE256_RATE;
    let mut buf = SecretBuffer::<{ GAMMA1_MAX_NBLOCKS * SHAKE256_RATE }>::zeroed();
    let mut stream = xof::stream256(seed, nonce);
    stream.squeeze_blocks(&mut buf.as_mut_slice()[..nblocks * SHAKE256_RATE]);

    serialize::unpack_z(params, out, &buf.as_slice()[..packed]);
}

/// Challenge polynomial with exactly `params.tau` coefficients in `{-1, 1}`
///
/// SHAKE-256(`seed`) supplies 64 sign bits followed by position bytes; each
/// target index `i` from `256 - tau` upward swaps in a position `b <= i`.
pub fn sample_challenge(out: &mut Polynomial, params: &ParameterSet, seed: &[u8]) {
    debug_assert_eq!(seed.len(), params.challenge_seed_bytes);
    debug_assert!(params.tau >= 1 && params.tau <= 64);

    let mut xof = ShakeXof256::new();
    xof.update(seed);
    let mut stream = xof.finalize_xof();
    fill_challenge(out, params.tau, &mut stream);
}

/// Sign extraction and position loop of [`sample_challenge`]
///
/// Position bytes are read from the current block and a new block is
/// squeezed from the same stream once it is used up.
fn fill_challenge<R: XofReader>(out: &mut Polynomial, tau: usize, stream: &mut R) {
    debug_assert_eq!(R::RATE, SHAKE256_RATE);

    let mut buf = SecretBuffer::<SHAKE256_RATE>::zeroed();
    stream.squeeze_blocks(buf.as_mut_slice());

    let mut sign_bytes = [0u8; 8];
    sign_bytes.copy_from_slice(&buf.as_slice()[..8]);
    let mut signs = EphemeralSecret::new(u64::from_le_bytes(sign_bytes));
    latticesig_common::secure_zero(&mut sign_bytes);
    let mut pos = 8;

    out.coeffs = [0; N];
    for i in N - tau..N {
        let b = loop {
            if pos >= SHAKE256_RATE {
                trace_event!(i, "challenge sampler squeezing another block");
                stream.squeeze_blocks(buf.as_mut_slice());
                pos = 0;
            }
            let b = buf.as_slice()[pos] as usize;
            pos += 1;
            if b <= i {
                break b;
            }
        };

        out.coeffs[i] = out.coeffs[b];
        out.coeffs[b] = 1 - 2 * (*signs & 1) as i32;
        *signs >>= 1;
    }
}
