// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Generation parameters

use std::fmt;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

use crate::error::Error;


/// Smallest supported angle width
pub const MIN_ANGLE_WIDTH: u32 = 4;

/// Smallest supported data width
///
/// The coordinate scale is `2^(data_width - 2)`.
pub const MIN_DATA_WIDTH: u32 = 2;


/// Parameters of a single generation run
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Params {
    angle_width: u32,
    iterations: u32,
    data_width: u32,
    overflow: OverflowPolicy,
}

impl Params {
    /// Create a new set of parameters
    ///
    /// The parameters will be created with an `OverflowPolicy::Strict`.
    pub fn new(angle_width: u32, iterations: u32, data_width: u32) -> Self {
        Self {angle_width, iterations, data_width, overflow: Default::default()}
    }

    /// Set the policy for literals exceeding their declared width
    pub fn with_overflow(self, overflow: OverflowPolicy) -> Self {
        Self {overflow, ..self}
    }

    /// Retrieve the bit-width of angles
    pub fn angle_width(&self) -> u32 {
        self.angle_width
    }

    /// Retrieve the number of CORDIC iterations
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Retrieve the bit-width of coordinates
    pub fn data_width(&self) -> u32 {
        self.data_width
    }

    /// Retrieve the overflow policy
    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Check the parameters
    ///
    /// Parameters are never adjusted. Values the derivation can't express are
    /// rejected with an `Error::InvalidParameter`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.angle_width < MIN_ANGLE_WIDTH {
            return Err(Error::InvalidParameter{
                name: "angle width",
                value: self.angle_width,
                reason: "must be at least 4",
            })
        }
        if self.iterations == 0 {
            return Err(Error::InvalidParameter{
                name: "iteration count",
                value: self.iterations,
                reason: "must be positive",
            })
        }
        if self.data_width < MIN_DATA_WIDTH {
            return Err(Error::InvalidParameter{
                name: "data width",
                value: self.data_width,
                reason: "must be at least 2",
            })
        }
        Ok(())
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-bit angles, {} iterations, {}-bit data",
            self.angle_width,
            self.iterations,
            self.data_width,
        )
    }
}

#[cfg(test)]
impl Arbitrary for Params {
    fn arbitrary(g: &mut Gen) -> Self {
        // Widths beyond a few hundred bits don't exercise anything new.
        let angle_width = MIN_ANGLE_WIDTH + u32::from(u8::arbitrary(g) % 125);
        let iterations = 1 + u32::from(u8::arbitrary(g) % 40);
        let data_width = MIN_DATA_WIDTH + u32::from(u8::arbitrary(g) % 63);
        Self::new(angle_width, iterations, data_width).with_overflow(Arbitrary::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let s = *self;
        let angle = (MIN_ANGLE_WIDTH..s.angle_width).rev().take(4).map(move |w| Self {angle_width: w, ..s});
        let iter = (1..s.iterations).rev().take(4).map(move |i| Self {iterations: i, ..s});
        Box::new(angle.chain(iter))
    }
}


/// Treatment of literals which exceed their declared width
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OverflowPolicy {
    /// Reject the parameters with an `Error::OutOfRange`
    Strict,
    /// Emit the literal regardless, logging a warning
    Permissive,
}

impl Default for OverflowPolicy {
    fn default() -> Self {
        Self::Strict
    }
}

#[cfg(test)]
impl Arbitrary for OverflowPolicy {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Self::Strict, Self::Permissive]).unwrap()
    }
}
