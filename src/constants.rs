//! Derived constant set

#[cfg(test)]
mod tests;

use crate::angle::{AngleConstant, AngleConstants};
use crate::atan::AtanTable;
use crate::error::Error;
use crate::gain;
use crate::ladder::Ladder;
use crate::listing::Listing;
use crate::literal::Literal;
use crate::params::Params;
use crate::precision::Precision;


/// All quantities derived from a set of `Params`
///
/// A `Constants` is computed once via `derive` and then only read, usually
/// for rendering a `Listing`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constants {
    params: Params,
    precision: Precision,
    angles: AngleConstants,
    gain: Literal,
    atan: AtanTable,
    ladder: Ladder,
}

impl Constants {
    /// Derive all constants for the given parameters
    ///
    /// This function fails if the parameters are invalid or if, under
    /// `OverflowPolicy::Strict`, a literal does not fit its declared width.
    pub fn derive(params: &Params) -> Result<Self, Error> {
        params.validate()?;
        let policy = params.overflow();

        let precision = Precision::new(params);
        log::debug!(
            "{}: {} fractional bits, coordinate scale 2^{}",
            params,
            precision.fractional_bits(),
            precision.coord_bits(),
        );

        let angles = AngleConstants::derive(&precision, params.angle_width());
        angles.check(policy)?;

        let gain = gain::derive(&precision, params.iterations(), params.data_width());
        gain.check(gain::GAIN_NAME, policy)?;

        let atan = AtanTable::derive(&precision, params.iterations(), params.angle_width());
        atan.check(policy)?;
        if !atan.is_non_increasing() {
            log::warn!("arctangent table for {} is not monotonic, precision is insufficient", params);
        }

        let ladder = Ladder::derive(params.angle_width(), angles.get(AngleConstant::TwoPi));
        log::debug!("{}: {} reduction levels", params, ladder.len());

        Ok(Self {params: *params, precision, angles, gain, atan, ladder})
    }

    /// Retrieve the parameters the constants were derived from
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Retrieve the precision profile
    pub fn precision(&self) -> &Precision {
        &self.precision
    }

    /// Retrieve the angle constants
    pub fn angles(&self) -> &AngleConstants {
        &self.angles
    }

    /// Retrieve the gain compensation
    pub fn gain(&self) -> &Literal {
        &self.gain
    }

    /// Retrieve the arctangent table
    pub fn atan(&self) -> &AtanTable {
        &self.atan
    }

    /// Retrieve the reduction ladder
    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    /// Retrieve a formatter rendering all constants
    pub fn listing(&self) -> Listing<'_> {
        Listing::new(self)
    }
}
