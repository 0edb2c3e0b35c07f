//! Extendable Output Functions (XOF)
//!
//! Byte-stream engine for the samplers. An XOF is split into two typestates:
//! the absorbing side ([`ExtendableOutputFunction`]) and the resumable
//! squeezing side ([`XofReader`]). Once absorption is finalized the reader
//! keeps its position, so a rejection loop that runs out of bytes simply
//! squeezes again and continues the same stream.

pub mod shake;

pub use shake::{ShakeReader, ShakeXof, ShakeXof128, ShakeXof256, SHAKE128_RATE, SHAKE256_RATE};

use zeroize::Zeroize;

/// Stream keyed for the uniform sampler (SHAKE-128)
pub type Stream128 = ShakeReader<SHAKE128_RATE>;

/// Stream keyed for the narrow, wide and challenge samplers (SHAKE-256)
pub type Stream256 = ShakeReader<SHAKE256_RATE>;

/// Trait for extendable output functions in the absorbing phase
pub trait ExtendableOutputFunction: Sized {
    /// Reader produced once absorption is finished
    type Reader: XofReader;

    /// Security level in bits
    const SECURITY_LEVEL: usize;

    /// Creates a new instance of the XOF
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]);

    /// Pads the input and switches to squeezing
    fn finalize_xof(self) -> Self::Reader;

    /// Convenience method to absorb `data` and fill `output` in a single call
    fn generate(data: &[u8], output: &mut [u8]) {
        let mut xof = Self::new();
        xof.update(data);
        xof.finalize_xof().squeeze(output);
    }
}

/// Squeezing side of an XOF
pub trait XofReader: Zeroize {
    /// Bytes produced per permutation
    const RATE: usize;

    /// Fills `output` with the next bytes of the stream
    fn squeeze(&mut self, output: &mut [u8]);

    /// Fills `output` with whole blocks; `output.len()` must be a multiple
    /// of [`Self::RATE`] and the reader must sit on a block boundary
    fn squeeze_blocks(&mut self, output: &mut [u8]);
}

/// Key a SHAKE-128 stream with `seed || nonce` (nonce little-endian)
pub fn stream128(seed: &[u8], nonce: u16) -> Stream128 {
    let mut xof = ShakeXof128::new();
    xof.update(seed);
    xof.update(&nonce.to_le_bytes());
    xof.finalize_xof()
}

/// Key a SHAKE-256 stream with `seed || nonce` (nonce little-endian)
pub fn stream256(seed: &[u8], nonce: u16) -> Stream256 {
    let mut xof = ShakeXof256::new();
    xof.update(seed);
    xof.update(&nonce.to_le_bytes());
    xof.finalize_xof()
}
