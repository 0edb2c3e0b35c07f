//! Polynomial coefficient packing and unpacking
//!
//! Every wire field is a little-endian bit stream: coefficient `i` occupies
//! bits `[i * bits, (i + 1) * bits)` and bit 0 of a byte comes first. Fields
//! are processed `group` coefficients at a time so that each group fills a
//! whole number of bytes.
//!
//! | Field | Range | Bits | Group | Bytes |
//! |---|---|---|---|---|
//! | eta = 2 | `[-2, 2]` | 3 | 8 | 96 |
//! | eta = 4 | `[-4, 4]` | 4 | 2 | 128 |
//! | t1 | `[0, 1023]` | 10 | 4 | 320 |
//! | t0 | `(-2^12, 2^12]` | 13 | 8 | 416 |
//! | z, gamma1 = 2^17 | `[-(gamma1-1), gamma1]` | 18 | 4 | 576 |
//! | z, gamma1 = 2^19 | `[-(gamma1-1), gamma1]` | 20 | 2 | 640 |
//! | w1, gamma2 = (q-1)/88 | `[0, 43]` | 6 | 4 | 192 |
//! | w1, gamma2 = (q-1)/32 | `[0, 15]` | 4 | 2 | 128 |
//!
//! Symmetric ranges are stored as `offset - coefficient`.
//!
//! The plain `pack_*`/`unpack_*` functions trust their inputs; lengths are
//! checked by `debug_assert!` only. The `try_*` variants validate buffer
//! lengths and coefficient ranges and report [`Error`]s.

use latticesig_params::{Eta, Gamma1, Gamma2, ParameterSet, D, N, T0_PACKED_BYTES, T1_PACKED_BYTES};

use super::polynomial::Polynomial;
use crate::error::{validate, Error, Result};

/// Bits of a t1 coefficient, the 23-bit modulus minus the dropped bits
const T1_BITS: usize = 23 - D as usize;

/// Offset t0 coefficients are stored against
const T0_OFFSET: i32 = 1 << (D - 1);

/// Writes values of up to 32 bits into a byte buffer, least significant bit
/// first
pub struct BitWriter<'a> {
    buf: &'a mut [u8],
    bit_pos: usize,
}

impl<'a> BitWriter<'a> {
    /// Start writing at bit 0 of `buf`, which is cleared first
    pub fn new(buf: &'a mut [u8]) -> Self {
        buf.fill(0);
        Self { buf, bit_pos: 0 }
    }

    /// Append the low `bits` bits of `value`
    pub fn write(&mut self, value: u32, bits: usize) {
        debug_assert!(bits <= 32);
        debug_assert!(self.bit_pos + bits <= self.buf.len() * 8);

        let mut value = value as u64 & ((1u64 << bits) - 1);
        let mut remaining = bits;
        while remaining > 0 {
            let offset = self.bit_pos % 8;
            let take = (8 - offset).min(remaining);
            self.buf[self.bit_pos / 8] |= ((value & ((1 << take) - 1)) << offset) as u8;
            value >>= take;
            remaining -= take;
            self.bit_pos += take;
        }
    }

    /// Number of bits written so far
    pub fn bit_position(&self) -> usize {
        self.bit_pos
    }
}

/// Reads values of up to 32 bits from a byte buffer, least significant bit
/// first
pub struct BitReader<'a> {
    buf: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Start reading at bit 0 of `buf`
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, bit_pos: 0 }
    }

    /// Take the next `bits` bits
    pub fn read(&mut self, bits: usize) -> u32 {
        debug_assert!(bits <= 32);
        debug_assert!(self.bit_pos + bits <= self.buf.len() * 8);

        let mut value = 0u64;
        let mut filled = 0;
        while filled < bits {
            let offset = self.bit_pos % 8;
            let take = (8 - offset).min(bits - filled);
            let chunk = (self.buf[self.bit_pos / 8] >> offset) as u64 & ((1 << take) - 1);
            value |= chunk << filled;
            filled += take;
            self.bit_pos += take;
        }
        value as u32
    }

    /// Number of bits consumed so far
    pub fn bit_position(&self) -> usize {
        self.bit_pos
    }
}

/// Bit width and byte-aligned grouping of a packed field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Bits per coefficient
    pub bits: usize,
    /// Coefficients per byte-aligned group
    pub group: usize,
}

impl FieldLayout {
    /// Layout whose group is the fewest coefficients filling whole bytes
    pub const fn for_bits(bits: usize) -> Self {
        let group = if bits % 8 == 0 {
            1
        } else if bits % 4 == 0 {
            2
        } else if bits % 2 == 0 {
            4
        } else {
            8
        };
        Self { bits, group }
    }

    /// Bytes holding one group
    pub const fn group_bytes(&self) -> usize {
        self.bits * self.group / 8
    }

    /// Bytes holding a whole polynomial
    pub const fn packed_bytes(&self) -> usize {
        N * self.bits / 8
    }
}

/// The packed wire fields, with their width variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Narrow secret polynomials s1, s2
    Eta(Eta),
    /// High bits of t
    T1,
    /// Low bits of t
    T0,
    /// Masked response z
    Z(Gamma1),
    /// High bits of the commitment w
    W1(Gamma2),
}

impl Field {
    /// Bit width and grouping
    pub const fn layout(self) -> FieldLayout {
        let bits = match self {
            Field::Eta(eta) => eta.bits(),
            Field::T1 => T1_BITS,
            Field::T0 => D as usize,
            Field::Z(gamma1) => gamma1.bits(),
            Field::W1(gamma2) => gamma2.w1_bits(),
        };
        FieldLayout::for_bits(bits)
    }

    /// Size of one packed polynomial
    pub const fn packed_bytes(self) -> usize {
        self.layout().packed_bytes()
    }

    /// Inclusive range of legal coefficients
    pub const fn coeff_range(self) -> (i32, i32) {
        match self {
            Field::Eta(eta) => (-eta.value(), eta.value()),
            Field::T1 => (0, (1 << T1_BITS) - 1),
            Field::T0 => (-T0_OFFSET + 1, T0_OFFSET),
            Field::Z(gamma1) => (-gamma1.value() + 1, gamma1.value()),
            Field::W1(gamma2) => (0, gamma2.buckets() - 1),
        }
    }

    fn context(self, packing: bool) -> &'static str {
        match (self, packing) {
            (Field::Eta(_), true) => "eta pack",
            (Field::Eta(_), false) => "eta unpack",
            (Field::T1, true) => "t1 pack",
            (Field::T1, false) => "t1 unpack",
            (Field::T0, true) => "t0 pack",
            (Field::T0, false) => "t0 unpack",
            (Field::Z(_), true) => "z pack",
            (Field::Z(_), false) => "z unpack",
            (Field::W1(_), true) => "w1 pack",
            (Field::W1(_), false) => "w1 unpack",
        }
    }

    /// Pack `a` into `out`, which must be exactly [`Self::packed_bytes`] long
    pub fn pack(self, out: &mut [u8], a: &Polynomial) {
        let layout = self.layout();
        match self {
            Field::Eta(eta) => {
                let offset = eta.value();
                pack_with(layout, out, a, |c| (offset - c) as u32)
            }
            Field::T1 | Field::W1(_) => pack_with(layout, out, a, |c| c as u32),
            Field::T0 => pack_with(layout, out, a, |c| (T0_OFFSET - c) as u32),
            Field::Z(gamma1) => {
                let offset = gamma1.value();
                pack_with(layout, out, a, |c| (offset - c) as u32)
            }
        }
    }

    /// Unpack `bytes`, exactly [`Self::packed_bytes`] long, into `a`
    pub fn unpack(self, a: &mut Polynomial, bytes: &[u8]) {
        let layout = self.layout();
        match self {
            Field::Eta(eta) => {
                let offset = eta.value();
                unpack_with(layout, a, bytes, |v| offset - v as i32)
            }
            Field::T1 | Field::W1(_) => unpack_with(layout, a, bytes, |v| v as i32),
            Field::T0 => unpack_with(layout, a, bytes, |v| T0_OFFSET - v as i32),
            Field::Z(gamma1) => {
                let offset = gamma1.value();
                unpack_with(layout, a, bytes, |v| offset - v as i32)
            }
        }
    }

    /// Checked [`Self::pack`]: rejects a wrong buffer length or a coefficient
    /// outside [`Self::coeff_range`]
    pub fn try_pack(self, out: &mut [u8], a: &Polynomial) -> Result<()> {
        validate::length(self.context(true), out.len(), self.packed_bytes())?;
        self.check_range(a)?;
        self.pack(out, a);
        Ok(())
    }

    /// Checked [`Self::unpack`]: rejects a wrong buffer length or an encoding
    /// that decodes outside [`Self::coeff_range`]
    pub fn try_unpack(self, bytes: &[u8]) -> Result<Polynomial> {
        validate::length(self.context(false), bytes.len(), self.packed_bytes())?;
        let mut a = Polynomial::zero();
        self.unpack(&mut a, bytes);
        self.check_range(&a)?;
        Ok(a)
    }

    fn check_range(self, a: &Polynomial) -> Result<()> {
        let (lo, hi) = self.coeff_range();
        if a.coeffs.iter().any(|&c| c < lo || c > hi) {
            debug_event!(field = ?self, "coefficient outside packed field range");
            return Err(Error::param("coefficient", "outside the packed field range"));
        }
        Ok(())
    }
}

fn pack_with(layout: FieldLayout, out: &mut [u8], a: &Polynomial, encode: impl Fn(i32) -> u32) {
    debug_assert_eq!(out.len(), layout.packed_bytes());
    for (bytes, coeffs) in out
        .chunks_exact_mut(layout.group_bytes())
        .zip(a.coeffs.chunks_exact(layout.group))
    {
        let mut writer = BitWriter::new(bytes);
        for &c in coeffs {
            writer.write(encode(c), layout.bits);
        }
    }
}

fn unpack_with(layout: FieldLayout, a: &mut Polynomial, bytes: &[u8], decode: impl Fn(u32) -> i32) {
    debug_assert_eq!(bytes.len(), layout.packed_bytes());
    for (group, coeffs) in bytes
        .chunks_exact(layout.group_bytes())
        .zip(a.coeffs.chunks_exact_mut(layout.group))
    {
        let mut reader = BitReader::new(group);
        for c in coeffs.iter_mut() {
            *c = decode(reader.read(layout.bits));
        }
    }
}

/// Pack a narrow polynomial with coefficients in `[-eta, eta]`
pub fn pack_eta(params: &ParameterSet, out: &mut [u8], a: &Polynomial) {
    Field::Eta(params.eta).pack(out, a);
}

/// Unpack a narrow polynomial
pub fn unpack_eta(params: &ParameterSet, a: &mut Polynomial, bytes: &[u8]) {
    Field::Eta(params.eta).unpack(a, bytes);
}

/// Pack t1 with coefficients in `[0, 1023]`
pub fn pack_t1(out: &mut [u8], a: &Polynomial) {
    debug_assert_eq!(out.len(), T1_PACKED_BYTES);
    Field::T1.pack(out, a);
}

/// Unpack t1; every coefficient is masked to 10 bits
pub fn unpack_t1(a: &mut Polynomial, bytes: &[u8]) {
    Field::T1.unpack(a, bytes);
}

/// Pack t0 with coefficients in `(-2^12, 2^12]`
pub fn pack_t0(out: &mut [u8], a: &Polynomial) {
    debug_assert_eq!(out.len(), T0_PACKED_BYTES);
    Field::T0.pack(out, a);
}

/// Unpack t0
pub fn unpack_t0(a: &mut Polynomial, bytes: &[u8]) {
    Field::T0.unpack(a, bytes);
}

/// Pack z with coefficients in `[-(gamma1 - 1), gamma1]`
pub fn pack_z(params: &ParameterSet, out: &mut [u8], a: &Polynomial) {
    Field::Z(params.gamma1).pack(out, a);
}

/// Unpack z
pub fn unpack_z(params: &ParameterSet, a: &mut Polynomial, bytes: &[u8]) {
    Field::Z(params.gamma1).unpack(a, bytes);
}

/// Pack w1 with coefficients in `[0, (q-1)/(2*gamma2))`
pub fn pack_w1(params: &ParameterSet, out: &mut [u8], a: &Polynomial) {
    Field::W1(params.gamma2).pack(out, a);
}

/// Unpack w1
pub fn unpack_w1(params: &ParameterSet, a: &mut Polynomial, bytes: &[u8]) {
    Field::W1(params.gamma2).unpack(a, bytes);
}

/// Checked [`pack_eta`]
pub fn try_pack_eta(params: &ParameterSet, out: &mut [u8], a: &Polynomial) -> Result<()> {
    Field::Eta(params.eta).try_pack(out, a)
}

/// Checked [`unpack_eta`]
pub fn try_unpack_eta(params: &ParameterSet, bytes: &[u8]) -> Result<Polynomial> {
    Field::Eta(params.eta).try_unpack(bytes)
}

/// Checked [`pack_t1`]
pub fn try_pack_t1(out: &mut [u8], a: &Polynomial) -> Result<()> {
    Field::T1.try_pack(out, a)
}

/// Checked [`unpack_t1`]
pub fn try_unpack_t1(bytes: &[u8]) -> Result<Polynomial> {
    Field::T1.try_unpack(bytes)
}

/// Checked [`pack_t0`]
pub fn try_pack_t0(out: &mut [u8], a: &Polynomial) -> Result<()> {
    Field::T0.try_pack(out, a)
}

/// Checked [`unpack_t0`]
pub fn try_unpack_t0(bytes: &[u8]) -> Result<Polynomial> {
    Field::T0.try_unpack(bytes)
}

/// Checked [`pack_z`]
pub fn try_pack_z(params: &ParameterSet, out: &mut [u8], a: &Polynomial) -> Result<()> {
    Field::Z(params.gamma1).try_pack(out, a)
}

/// Checked [`unpack_z`]
pub fn try_unpack_z(params: &ParameterSet, bytes: &[u8]) -> Result<Polynomial> {
    Field::Z(params.gamma1).try_unpack(bytes)
}

/// Checked [`pack_w1`]
pub fn try_pack_w1(params: &ParameterSet, out: &mut [u8], a: &Polynomial) -> Result<()> {
    Field::W1(params.gamma2).try_pack(out, a)
}

/// Checked [`unpack_w1`]
pub fn try_unpack_w1(params: &ParameterSet, bytes: &[u8]) -> Result<Polynomial> {
    Field::W1(params.gamma2).try_unpack(bytes)
}
