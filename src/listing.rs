//! Rendering of derived constants
//!
//! A `Listing` is emitted in two stages: first all constants are rendered as
//! `localparam` declarations, then the reduction ladder is rendered as a
//! template for the normalization logic, followed by a summary.


use std::fmt;

use crate::atan::TABLE_NAME;
use crate::constants::Constants;
use crate::display::{Declaration, Scientific};
use crate::gain::GAIN_NAME;
use crate::indentation::{DisplayIndented, Indentation};
use crate::ladder::REDUCTION_SIGNAL;


/// Range of angle constants
const ANGLE_RANGE: &str = "ANGLE_WIDTH-1:0";

/// Range of coordinate constants
const DATA_RANGE: &str = "WIDTH-1:0";


/// Formatter for a complete set of constants
pub struct Listing<'a> {
    constants: &'a Constants,
}

impl<'a> Listing<'a> {
    /// Create a listing for the given constants
    pub fn new(constants: &'a Constants) -> Self {
        Self {constants}
    }

    /// Write the listing to some output
    pub fn write_to(&self, out: &mut impl std::io::Write) -> std::io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stage = Some(Stage::Declarations);
        while let Some(current) = stage {
            current.render(self.constants, f)?;
            stage = current.next();
        }
        Ok(())
    }
}


/// Stage of a `Listing`
#[derive(Copy, Clone, Debug, PartialEq)]
enum Stage {
    Declarations,
    Ladder,
}

impl Stage {
    /// Retrieve the stage following this one
    fn next(self) -> Option<Self> {
        match self {
            Self::Declarations  => Some(Self::Ladder),
            Self::Ladder        => None,
        }
    }

    fn render(self, constants: &Constants, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declarations  => declarations(constants, f),
            Self::Ladder        => ladder(constants, f),
        }
    }
}


fn declarations(constants: &Constants, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let params = constants.params();
    let precision = constants.precision();
    let ladder = constants.ladder();

    writeln!(f, "// Generated CORDIC constants for ANGLE_WIDTH={}", params.angle_width())?;
    writeln!(
        f,
        "// Fractional bits: {}, Angle scale: {}",
        precision.fractional_bits(),
        precision.angle_scale(),
    )?;
    writeln!(f)?;

    writeln!(f, "// Angle constants")?;
    constants.angles().iter().try_for_each(|(c, l)| {
        writeln!(f, "{}", Declaration::new(c.name(), l).with_range(ANGLE_RANGE).signed())
    })?;
    writeln!(f)?;

    writeln!(f, "// CORDIC gain compensation")?;
    writeln!(f, "{}", Declaration::new(GAIN_NAME, constants.gain()).with_range(DATA_RANGE).signed())?;
    writeln!(f)?;

    writeln!(
        f,
        "// Maximum efficiently reducible angle: ±{}° (±{}π)",
        ladder.reducible_degrees(),
        ladder.reducible_half_turns(),
    )?;
    writeln!(f, "localparam MAX_REDUCTION_POWER = {};", ladder.max_power())?;
    writeln!(f)?;

    writeln!(f, "// Arctangent lookup table")?;
    writeln!(f, "localparam [{}] {} [0:ITERATIONS-1] = {{", ANGLE_RANGE, TABLE_NAME)?;
    let last = constants.atan().len().saturating_sub(1);
    let mut indentation = Indentation::root().sub();
    let entry = indentation.lock();
    constants.atan().iter().enumerate().try_for_each(|(i, e)| {
        let separator = if i == last { "   " } else { ",  " };
        writeln!(f, "{}{}{}// atan(2^-{})", entry, e, separator, i)
    })?;
    writeln!(f, "}};")?;
    writeln!(f)
}


fn ladder(constants: &Constants, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let precision = constants.precision();
    let ladder = constants.ladder();

    writeln!(f, "// Parameterizable angle reduction logic")?;
    writeln!(f, "// Insert this in your NORMALIZE state:")?;
    writeln!(f)?;
    DisplayIndented::fmt(&ladder.template(REDUCTION_SIGNAL), &mut Indentation::root(), f)?;
    writeln!(f)?;

    writeln!(f, "// Performance characteristics:")?;
    writeln!(f, "// - Angle range: ±{}° efficiently", ladder.reducible_degrees())?;
    writeln!(f, "// - Reduction levels: {}", ladder.len())?;
    writeln!(f, "// - Max normalization cycles: {}", ladder.max_cycles())?;
    writeln!(f, "// - Fractional precision: {} bits", precision.fractional_bits())?;
    writeln!(f, "// - Angle resolution: {} radians", Scientific::new(precision.resolution(), 2))
}
