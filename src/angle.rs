//! Fixed-point angle constants


use std::f64::consts::PI;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

use crate::error::Error;
use crate::literal::Literal;
use crate::params::OverflowPolicy;
use crate::precision::Precision;


/// A named angle constant
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AngleConstant {
    /// π
    Pi,
    /// π/2
    HalfPi,
    /// 3π/2
    ThreeHalvesPi,
    /// 2π
    TwoPi,
}

impl AngleConstant {
    /// All angle constants, in declaration order
    pub const ALL: [Self; 4] = [Self::Pi, Self::HalfPi, Self::ThreeHalvesPi, Self::TwoPi];

    /// Retrieve the name under which the constant is declared
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pi            => "PI",
            Self::HalfPi        => "PI_2",
            Self::ThreeHalvesPi => "PI_3_2",
            Self::TwoPi         => "TWO_PI",
        }
    }

    /// Retrieve the real value of the constant in radians
    pub fn real(&self) -> f64 {
        match self {
            Self::Pi            => PI,
            Self::HalfPi        => PI / 2.0,
            Self::ThreeHalvesPi => 3.0 * PI / 2.0,
            Self::TwoPi         => 2.0 * PI,
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Pi            => 0,
            Self::HalfPi        => 1,
            Self::ThreeHalvesPi => 2,
            Self::TwoPi         => 3,
        }
    }
}

#[cfg(test)]
impl Arbitrary for AngleConstant {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Self::ALL).unwrap()
    }
}


/// Fixed-point encodings of all `AngleConstant`s
#[derive(Clone, Debug, PartialEq)]
pub struct AngleConstants {
    values: [Literal; 4],
}

impl AngleConstants {
    /// Quantize the angle constants
    ///
    /// Each constant is scaled by the angle scale and truncated toward zero.
    pub fn derive(precision: &Precision, angle_width: u32) -> Self {
        let bits = precision.fractional_bits();
        let values = [
            Literal::quantize(AngleConstant::Pi.real(), bits, angle_width),
            Literal::quantize(AngleConstant::HalfPi.real(), bits, angle_width),
            Literal::quantize(AngleConstant::ThreeHalvesPi.real(), bits, angle_width),
            Literal::quantize(AngleConstant::TwoPi.real(), bits, angle_width),
        ];
        Self {values}
    }

    /// Retrieve the encoding of a specific constant
    pub fn get(&self, constant: AngleConstant) -> &Literal {
        &self.values[constant.index()]
    }

    /// Iterate over all constants and their encodings
    pub fn iter(&self) -> impl Iterator<Item = (AngleConstant, &Literal)> {
        let constants: &'static [AngleConstant; 4] = &AngleConstant::ALL;
        constants.iter().copied().zip(self.values.iter())
    }

    /// Apply an overflow policy to all encodings
    pub fn check(&self, policy: OverflowPolicy) -> Result<(), Error> {
        self.iter().try_for_each(|(c, l)| l.check(c.name(), policy))
    }
}
