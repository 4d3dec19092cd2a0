//! Precision selection


use num_bigint::BigInt;

use crate::params::Params;


/// Number of integer bits reserved in angle representations
pub const ANGLE_INTEGER_BITS: u32 = 3;

/// Lower bound for the number of fractional bits of angles
pub const MIN_FRACTIONAL_BITS: u32 = 5;


/// Fixed-point precision profile
///
/// Angles are represented with `fractional_bits` bits below the binary point,
/// i.e. scaled by `2^fractional_bits`. Coordinates are scaled by
/// `2^(data_width - 2)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Precision {
    fractional_bits: u32,
    coord_bits: u32,
}

impl Precision {
    /// Select the precision for the given parameters
    ///
    /// Three integer bits are reserved for angles, but no fewer than
    /// `MIN_FRACTIONAL_BITS` fractional bits are chosen, even if the angle
    /// width can't hold them.
    pub fn new(params: &Params) -> Self {
        let fractional_bits = params
            .angle_width()
            .saturating_sub(ANGLE_INTEGER_BITS)
            .max(MIN_FRACTIONAL_BITS);
        let coord_bits = params.data_width().saturating_sub(2);
        Self {fractional_bits, coord_bits}
    }

    /// Retrieve the number of fractional bits of angles
    pub fn fractional_bits(&self) -> u32 {
        self.fractional_bits
    }

    /// Retrieve the angle scale factor, `2^fractional_bits`
    pub fn angle_scale(&self) -> BigInt {
        BigInt::from(1u8) << self.fractional_bits as usize
    }

    /// Retrieve the number of fractional bits of coordinates
    pub fn coord_bits(&self) -> u32 {
        self.coord_bits
    }

    /// Retrieve the coordinate scale factor, `2^(data_width - 2)`
    pub fn coord_scale(&self) -> BigInt {
        BigInt::from(1u8) << self.coord_bits as usize
    }

    /// Retrieve the angle resolution in radians
    pub fn resolution(&self) -> f64 {
        (0..self.fractional_bits).fold(1.0, |r, _| r * 0.5)
    }
}
