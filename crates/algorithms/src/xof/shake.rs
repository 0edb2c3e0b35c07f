//! SHAKE extendable output functions
//!
//! Keccak-f[1600] sponge with the SHAKE domain byte, as specified in
//! FIPS PUB 202. Both the absorbing state and the reader are wiped on drop.

use core::fmt;

use latticesig_common::secure_zero;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{ExtendableOutputFunction, XofReader};

const KECCAK_ROUNDS: usize = 24;
const KECCAK_STATE_SIZE: usize = 25; // 5x5 of 64-bit words
const KECCAK_STATE_BYTES: usize = KECCAK_STATE_SIZE * 8;

/// SHAKE-128 rate in bytes, 1600 - 2*128 bits
pub const SHAKE128_RATE: usize = 168;

/// SHAKE-256 rate in bytes, 1600 - 2*256 bits
pub const SHAKE256_RATE: usize = 136;

const SHAKE_DOMAIN: u64 = 0x1F;

// Round constants for Keccak
const RC: [u64; KECCAK_ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808A, 0x8000000080008000,
    0x000000000000808B, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008A, 0x0000000000000088, 0x0000000080008009, 0x000000008000000A,
    0x000000008000808B, 0x800000000000008B, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800A, 0x800000008000000A,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

// Rotation offsets, in the order the rho/pi walk visits the lanes
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14,
    27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

// Lane visited at each step of the rho/pi walk, starting from lane 1
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4,
    15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Performs a full Keccak-f[1600] permutation on the state
fn keccak_f1600(state: &mut [u64; KECCAK_STATE_SIZE]) {
    for &rc in RC.iter() {
        // Theta
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }

        // Rho and Pi
        let mut last = state[1];
        for (&lane, &rot) in PI.iter().zip(RHO.iter()) {
            let next = state[lane];
            state[lane] = last.rotate_left(rot);
            last = next;
        }

        // Chi
        for y in 0..5 {
            let mut row = [0u64; 5];
            row.copy_from_slice(&state[5 * y..5 * y + 5]);
            for x in 0..5 {
                state[x + 5 * y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
            secure_zero(&mut row);
        }

        // Iota
        state[0] ^= rc;
        secure_zero(&mut c);
    }
}

#[inline(always)]
fn xor_byte(state: &mut [u64; KECCAK_STATE_SIZE], pos: usize, byte: u64) {
    state[pos / 8] ^= byte << (8 * (pos % 8));
}

#[inline(always)]
fn read_byte(state: &[u64; KECCAK_STATE_SIZE], pos: usize) -> u8 {
    (state[pos / 8] >> (8 * (pos % 8))) as u8
}

/// SHAKE sponge in the absorbing phase, parameterized by its rate in bytes
pub struct ShakeXof<const RATE: usize> {
    state: [u64; KECCAK_STATE_SIZE],
    pos: usize,
}

/// SHAKE-128 extendable output function
pub type ShakeXof128 = ShakeXof<SHAKE128_RATE>;

/// SHAKE-256 extendable output function
pub type ShakeXof256 = ShakeXof<SHAKE256_RATE>;

impl<const RATE: usize> ExtendableOutputFunction for ShakeXof<RATE> {
    type Reader = ShakeReader<RATE>;

    const SECURITY_LEVEL: usize = (KECCAK_STATE_BYTES - RATE) * 4;

    fn new() -> Self {
        Self {
            state: [0u64; KECCAK_STATE_SIZE],
            pos: 0,
        }
    }

    fn update(&mut self, data: &[u8]) {
        for &byte in data {
            xor_byte(&mut self.state, self.pos, byte as u64);
            self.pos += 1;
            if self.pos == RATE {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
        }
    }

    fn finalize_xof(self) -> ShakeReader<RATE> {
        let mut state = self.state;
        xor_byte(&mut state, self.pos, SHAKE_DOMAIN);
        xor_byte(&mut state, RATE - 1, 0x80);
        keccak_f1600(&mut state);

        let reader = ShakeReader { state, pos: 0 };
        secure_zero(&mut state);
        reader
    }
}

impl<const RATE: usize> Zeroize for ShakeXof<RATE> {
    fn zeroize(&mut self) {
        secure_zero(&mut self.state);
        self.pos = 0;
    }
}

impl<const RATE: usize> Drop for ShakeXof<RATE> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<const RATE: usize> ZeroizeOnDrop for ShakeXof<RATE> {}

impl<const RATE: usize> fmt::Debug for ShakeXof<RATE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShakeXof<{}>([REDACTED])", RATE)
    }
}

/// Resumable squeezing side of a SHAKE sponge
///
/// `pos` counts the bytes of the current block already handed out; the next
/// permutation runs only when the block is exhausted.
pub struct ShakeReader<const RATE: usize> {
    state: [u64; KECCAK_STATE_SIZE],
    pos: usize,
}

impl<const R: usize> XofReader for ShakeReader<R> {
    const RATE: usize = R;

    fn squeeze(&mut self, output: &mut [u8]) {
        for byte in output.iter_mut() {
            if self.pos == R {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
            *byte = read_byte(&self.state, self.pos);
            self.pos += 1;
        }
    }

    fn squeeze_blocks(&mut self, output: &mut [u8]) {
        debug_assert_eq!(output.len() % R, 0);
        debug_assert!(self.pos == 0 || self.pos == R);
        self.squeeze(output);
    }
}

impl<const RATE: usize> Zeroize for ShakeReader<RATE> {
    fn zeroize(&mut self) {
        secure_zero(&mut self.state);
        self.pos = 0;
    }
}

impl<const RATE: usize> Drop for ShakeReader<RATE> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<const RATE: usize> ZeroizeOnDrop for ShakeReader<RATE> {}

impl<const RATE: usize> fmt::Debug for ShakeReader<RATE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShakeReader<{}>([REDACTED])", RATE)
    }
}
