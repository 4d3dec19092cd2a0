// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Angle range reduction ladder
//!
//! Before the CORDIC iterations start, an input angle is folded into a
//! canonical range by conditionally subtracting or adding multiples of 2π. The
//! multiples are powers of two, so each amount is a left-shifted `TWO_PI`.

#[cfg(test)]
mod tests;

use std::fmt;

use num_bigint::BigInt;

use crate::angle::AngleConstant;
use crate::indentation::{DisplayIndented, Indentation};
use crate::literal::Literal;


/// Upper bound for the highest reduction power
pub const MAX_POWER_LIMIT: u32 = 10;

/// Name of the signal reduced by the generated template
pub const REDUCTION_SIGNAL: &str = "temp_angle";


/// A single reduction step, folding by `2π * 2^power`
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    power: u32,
    amount: BigInt,
}

impl Level {
    /// Retrieve the power of two by which `TWO_PI` is scaled
    pub fn power(&self) -> u32 {
        self.power
    }

    /// Retrieve the fixed-point amount folded by this level
    pub fn amount(&self) -> &BigInt {
        &self.amount
    }

    /// Retrieve the amount in multiples of π
    pub fn half_turns(&self) -> u64 {
        1 << (self.power + 1)
    }

    /// Retrieve the amount in degrees
    pub fn degrees(&self) -> u64 {
        self.half_turns() * 180
    }

    /// Check whether this is the last level of a ladder
    pub fn is_terminal(&self) -> bool {
        self.power == 0
    }

    /// Retrieve a formatter for the symbolic amount, e.g. `(TWO_PI << 3)`
    pub fn symbol(&self) -> Shifted {
        Shifted(self.power)
    }
}


/// Symbolic left-shift of `TWO_PI`
#[derive(Copy, Clone, Debug)]
pub struct Shifted(u32);

impl fmt::Display for Shifted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = AngleConstant::TwoPi.name();
        match self.0 {
            0 => fmt::Display::fmt(name, f),
            p => write!(f, "({} << {})", name, p),
        }
    }
}


/// Sequence of reduction levels, from the highest power down to zero
#[derive(Clone, Debug, PartialEq)]
pub struct Ladder {
    levels: Vec<Level>,
}

impl Ladder {
    /// Derive the ladder for the given angle width
    ///
    /// The highest power is `min(angle_width - 4, MAX_POWER_LIMIT)`. Amounts are
    /// folded at generation time from the given `TWO_PI` encoding.
    pub fn derive(angle_width: u32, two_pi: &Literal) -> Self {
        let max_power = angle_width.saturating_sub(4).min(MAX_POWER_LIMIT);
        let levels = (0..=max_power)
            .rev()
            .map(|power| Level {power, amount: two_pi.value() << power as usize})
            .collect();
        Self {levels}
    }

    /// Retrieve the highest reduction power
    pub fn max_power(&self) -> u32 {
        self.levels.first().map(Level::power).unwrap_or_default()
    }

    /// Retrieve the number of levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check whether the ladder has no levels
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate over the levels, highest power first
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    /// Retrieve the largest reducible angle in multiples of π
    pub fn reducible_half_turns(&self) -> u64 {
        self.levels.first().map(Level::half_turns).unwrap_or_default()
    }

    /// Retrieve the largest reducible angle in degrees
    pub fn reducible_degrees(&self) -> u64 {
        self.reducible_half_turns() * 180
    }

    /// Retrieve the maximum number of cycles spent normalizing an angle
    pub fn max_cycles(&self) -> u32 {
        self.max_power() + 3
    }

    /// Retrieve a template rendering the ladder as nested conditionals
    pub fn template<'a>(&'a self, signal: &'a str) -> Template<'a> {
        Template {ladder: self, signal}
    }
}


/// Conditional reduction logic for a `Ladder`
///
/// Every level yields an `if`/`else if` pair, chained to the next lower level.
/// The final `else` branch is left for quadrant correction.
pub struct Template<'a> {
    ladder: &'a Ladder,
    signal: &'a str,
}

impl DisplayIndented for Template<'_> {
    fn fmt<W: fmt::Write>(&self, indentation: &mut Indentation, f: &mut W) -> fmt::Result {
        let outer = indentation.lock();
        let inner = outer.sub().lock();
        let signal = self.signal;

        write!(f, "{}", outer)?;
        self.ladder.iter().try_for_each(|level| {
            let amount = level.symbol();
            writeln!(f, "if ({} >= {}) begin  // >= {}°", signal, amount, level.degrees())?;
            writeln!(f, "{}{} <= {} - {};", inner, signal, signal, amount)?;
            writeln!(f, "{}end else if ({} <= -{}) begin", outer, signal, amount)?;
            writeln!(f, "{}{} <= {} + {};", inner, signal, signal, amount)?;
            write!(f, "{}end else ", outer)
        })?;
        writeln!(f, "begin")?;
        writeln!(f, "{}// Proceed to quadrant correction", inner)?;
        writeln!(f, "{}// ... (quadrant correction logic)", inner)?;
        writeln!(f, "{}end", outer)
    }
}
