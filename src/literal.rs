// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Sized fixed-point literals


use std::fmt;

use num_bigint::BigInt;
use num_traits::{Float, Signed, ToPrimitive};

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

use crate::error::Error;
use crate::params::OverflowPolicy;


/// A sized hardware literal
///
/// A `Literal` holds a fixed-point value as a plain integer together with the
/// bit-width it is declared with. It is displayed in the form `32'h6487ED51`,
/// with as many hex digits as are needed to cover the full width.
#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    width: u32,
    value: BigInt,
}

impl Literal {
    /// Create a new literal from a raw value
    pub fn new(width: u32, value: impl Into<BigInt>) -> Self {
        Self {width, value: value.into()}
    }

    /// Quantize a real value with the given number of fractional bits
    ///
    /// The result is `real * 2^scale_bits`, truncated toward zero. The
    /// conversion is exact: the scaled value is computed from the mantissa and
    /// exponent of `real` rather than by floating point multiplication, hence
    /// it never overflows regardless of `scale_bits`.
    pub fn quantize(real: f64, scale_bits: u32, width: u32) -> Self {
        let (mantissa, exponent, sign) = Float::integer_decode(real);
        let shift = i64::from(exponent) + i64::from(scale_bits);
        let magnitude = if shift >= 0 {
            BigInt::from(mantissa) << shift as usize
        } else {
            BigInt::from(mantissa) >> (-shift) as usize
        };

        let value = if sign < 0 { -magnitude } else { magnitude };
        Self::new(width, value)
    }

    /// Retrieve the declared width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Retrieve the raw integer value
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Decode the literal as a fixed-point value with `scale_bits` fractional bits
    pub fn decode(&self, scale_bits: u32) -> f64 {
        let raw = self.value.to_f64().unwrap_or(f64::NAN);
        (0..scale_bits).fold(raw, |v, _| v * 0.5)
    }

    /// Check whether the value fits into the declared width
    ///
    /// The literal is a bit pattern: it fits if it is non-negative and needs no
    /// more than `width` bits.
    pub fn fits(&self) -> bool {
        !self.value.is_negative() && self.value.bits() <= u64::from(self.width)
    }

    /// Apply an overflow policy to this literal
    ///
    /// Under `OverflowPolicy::Strict`, a literal which does not fit results in
    /// an `Error::OutOfRange`. Under `OverflowPolicy::Permissive`, the
    /// condition is only logged.
    pub fn check(&self, name: &str, policy: OverflowPolicy) -> Result<(), Error> {
        if self.fits() {
            return Ok(())
        }

        match policy {
            OverflowPolicy::Strict => Err(Error::OutOfRange{
                name: name.to_string(),
                value: self.value.clone(),
                width: self.width,
            }),
            OverflowPolicy::Permissive => {
                log::warn!("{} = {} exceeds {} bits, emitting as is", name, self.value, self.width);
                Ok(())
            },
        }
    }

    /// Number of hex digits needed to cover the declared width
    pub fn digits(&self) -> usize {
        ((self.width + 3) / 4) as usize
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'h{:0digits$X}", self.width, self.value, digits = self.digits())
    }
}

#[cfg(test)]
impl Arbitrary for Literal {
    fn arbitrary(g: &mut Gen) -> Self {
        let width = u32::from(u8::arbitrary(g) % 128) + 1;
        let value = u128::arbitrary(g) & (u128::MAX >> (128 - width));
        Self::new(width, value)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let width = self.width;
        let value = self.value.to_u128().unwrap_or_default();
        Box::new(value.shrink().map(move |v| Self::new(width, v)))
    }
}
