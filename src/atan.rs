//! Arctangent lookup table


use crate::error::Error;
use crate::literal::Literal;
use crate::params::OverflowPolicy;
use crate::precision::Precision;


/// Name under which the table is declared
pub const TABLE_NAME: &str = "ATAN_TABLE";


/// Table of elementary rotation angles
///
/// Entry `i` holds `atan(2^-i)`, quantized with the angle precision. The index
/// corresponds to the CORDIC iteration the angle is used in.
#[derive(Clone, Debug, PartialEq)]
pub struct AtanTable {
    entries: Vec<Literal>,
}

impl AtanTable {
    /// Compute the table for the given number of iterations
    pub fn derive(precision: &Precision, iterations: u32, angle_width: u32) -> Self {
        let bits = precision.fractional_bits();
        let mut shift: f64 = 1.0;
        let entries = (0..iterations)
            .map(|_| {
                let entry = Literal::quantize(shift.atan(), bits, angle_width);
                shift *= 0.5;
                entry
            })
            .collect();
        Self {entries}
    }

    /// Retrieve the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retrieve the entry for a specific iteration
    pub fn get(&self, index: usize) -> Option<&Literal> {
        self.entries.get(index)
    }

    /// Iterate over all entries in iteration order
    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.entries.iter()
    }

    /// Check whether entries never grow with the iteration index
    ///
    /// A table violating this property was computed with insufficient
    /// precision. The table itself is never adjusted.
    pub fn is_non_increasing(&self) -> bool {
        self.entries.windows(2).all(|w| w[1].value() <= w[0].value())
    }

    /// Apply an overflow policy to all entries
    pub fn check(&self, policy: OverflowPolicy) -> Result<(), Error> {
        self.entries
            .iter()
            .enumerate()
            .try_for_each(|(i, e)| e.check(&format!("{}[{}]", TABLE_NAME, i), policy))
    }
}
