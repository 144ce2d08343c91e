/*
Copyright 2025

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Append-only bit buffer and the integer packing primitives built on it.
//!
//! AIS is a bit-oriented protocol: fields seldom align with byte boundaries
//! and whole payloads are rarely a multiple of eight bits. `BitBuffer` keeps
//! the unarmored payload as a plain bit sequence, indexed from the first
//! transmitted bit. Bit 0 is the most significant bit of the first 6-bit
//! character of the armored form.

use alloc::string::String;
use bitvec::prelude::*;
use num_traits::float::FloatCore;

use crate::error::BitsError;

/// An ordered, growable sequence of bits with big-endian integer views.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct BitBuffer {
    bits: BitVec<u8, Msb0>,
}

impl BitBuffer {
    /// Construct an empty buffer.
    pub fn new() -> BitBuffer {
        BitBuffer {
            bits: BitVec::new(),
        }
    }

    /// Construct from a text of '0'/'1' characters.
    pub fn from_bits(s: &str) -> Result<BitBuffer, BitsError> {
        let mut bv = BitBuffer::new();
        for (position, ch) in s.chars().enumerate() {
            match ch {
                '0' => bv.bits.push(false),
                '1' => bv.bits.push(true),
                _ => return Err(BitsError::InvalidBitChar { ch, position }),
            }
        }
        Ok(bv)
    }

    /// Construct the `width`-bit big-endian representation of `value`.
    pub fn from_uint(value: u64, width: usize) -> Result<BitBuffer, BitsError> {
        let mut bv = BitBuffer::new();
        pack_uint(&mut bv, value, width)?;
        Ok(bv)
    }

    /// Number of bits in the buffer.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the buffer holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Return the bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|b| *b)
    }

    /// Concatenate another buffer onto this one.
    pub fn append(&mut self, other: &BitBuffer) {
        self.bits.extend_from_bitslice(&other.bits);
    }

    /// Copy out bits `[lo, hi)` as a new buffer.
    pub fn slice(&self, lo: usize, hi: usize) -> Result<BitBuffer, BitsError> {
        if hi < lo || hi > self.len() {
            return Err(BitsError::OutOfBounds {
                offset: lo,
                need: hi.saturating_sub(lo),
                have: self.len().saturating_sub(lo),
            });
        }
        Ok(BitBuffer {
            bits: self.bits[lo..hi].to_bitvec(),
        })
    }

    /// Drop all bits from `len` onwards.
    pub fn truncate(&mut self, len: usize) {
        self.bits.truncate(len);
    }

    /// Interpret bits `[lo, hi)` as a big-endian unsigned integer.
    pub fn as_uint(&self, lo: usize, hi: usize) -> Result<u64, BitsError> {
        let width = hi.checked_sub(lo).ok_or(BitsError::OutOfBounds {
            offset: lo,
            need: 0,
            have: self.len().saturating_sub(lo),
        })?;
        if width > 64 {
            return Err(BitsError::WidthTooWide { width });
        }
        if hi > self.len() {
            return Err(BitsError::OutOfBounds {
                offset: lo,
                need: width,
                have: self.len().saturating_sub(lo),
            });
        }
        let mut value = 0u64;
        for i in lo..hi {
            value = (value << 1) | (self.bits[i] as u64);
        }
        Ok(value)
    }

    /// Interpret bits `[lo, hi)` as a two's-complement signed integer of
    /// width `hi - lo`. Zero-width reads are refused.
    pub fn as_int(&self, lo: usize, hi: usize) -> Result<i64, BitsError> {
        if hi == lo {
            return Err(BitsError::ZeroWidth);
        }
        let raw = self.as_uint(lo, hi)?;
        Ok(sign_extend(raw, hi - lo))
    }

    /// Render the buffer as a '0'/'1' text, the inverse of [`from_bits`].
    ///
    /// [`from_bits`]: BitBuffer::from_bits
    pub fn to_bin_string(&self) -> String {
        self.bits
            .iter()
            .map(|b| if *b { '1' } else { '0' })
            .collect()
    }
}

/// Append `width` bits of `value` in big-endian order.
pub fn pack_uint(bv: &mut BitBuffer, value: u64, width: usize) -> Result<(), BitsError> {
    if width > 64 {
        return Err(BitsError::WidthTooWide { width });
    }
    if width < 64 && (value >> width) != 0 {
        return Err(BitsError::OutOfRange {
            value: clamp_i64(value),
            width,
        });
    }
    for i in (0..width).rev() {
        bv.push((value >> i) & 1 == 1);
    }
    Ok(())
}

/// Append `width` bits of `value` in two's-complement representation.
pub fn pack_int(bv: &mut BitBuffer, value: i64, width: usize) -> Result<(), BitsError> {
    if width == 0 {
        return Err(BitsError::ZeroWidth);
    }
    if width > 64 {
        return Err(BitsError::WidthTooWide { width });
    }
    if width < 64 {
        let bound = 1i64 << (width - 1);
        if value < -bound || value >= bound {
            return Err(BitsError::OutOfRange { value, width });
        }
    }
    let mask = if width == 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    };
    let raw = (value as u64) & mask;
    for i in (0..width).rev() {
        bv.push((raw >> i) & 1 == 1);
    }
    Ok(())
}

/// Scale a decimal value, round half to even, and append the integer.
pub fn pack_decimal(
    bv: &mut BitBuffer,
    value: f64,
    width: usize,
    scale: u32,
    signed: bool,
) -> Result<(), BitsError> {
    let scaled = round_ties_even(value * scale as f64);
    if signed {
        pack_int(bv, scaled, width)
    } else {
        if scaled < 0 {
            return Err(BitsError::OutOfRange {
                value: scaled,
                width,
            });
        }
        pack_uint(bv, scaled as u64, width)
    }
}

/// Propagate the sign bit of a `width`-bit value across an `i64`.
pub(crate) fn sign_extend(raw: u64, width: usize) -> i64 {
    if width >= 64 {
        return raw as i64;
    }
    let sign_bit = 1u64 << (width - 1);
    if raw & sign_bit != 0 {
        (raw | (u64::MAX << width)) as i64
    } else {
        raw as i64
    }
}

/// Banker's rounding on the scaled value, usable without `std`.
pub(crate) fn round_ties_even(x: f64) -> i64 {
    let floor = FloatCore::floor(x);
    let base = floor as i64;
    let diff = x - floor;
    if diff > 0.5 {
        base + 1
    } else if diff < 0.5 {
        base
    } else if base % 2 == 0 {
        base
    } else {
        base + 1
    }
}

fn clamp_i64(value: u64) -> i64 {
    if value > i64::MAX as u64 {
        i64::MAX
    } else {
        value as i64
    }
}

// -------------------------------------------------------------------------------------------------
