//! General display utilities


use std::fmt;

use crate::literal::Literal;


/// Utility for formatting a constant declaration
///
/// A declaration is rendered as
/// `localparam signed [<range>] <name> = <literal>;`, with the `signed` keyword
/// and the range being optional.
pub struct Declaration<'a> {
    name: &'a str,
    value: &'a Literal,
    range: Option<&'a str>,
    signed: bool,
}

impl<'a> Declaration<'a> {
    /// Create a new, unsigned declaration without a range
    pub fn new(name: &'a str, value: &'a Literal) -> Self {
        Self {name, value, range: None, signed: false}
    }

    /// Declare the constant with the given range, e.g. `ANGLE_WIDTH-1:0`
    pub fn with_range(self, range: &'a str) -> Self {
        Self {range: Some(range), ..self}
    }

    /// Declare the constant as signed
    pub fn signed(self) -> Self {
        Self {signed: true, ..self}
    }
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "localparam")?;
        if self.signed {
            write!(f, " signed")?;
        }
        if let Some(range) = self.range {
            write!(f, " [{}]", range)?;
        }
        write!(f, " {} = {};", self.name, self.value)
    }
}


/// Utility for formatting numbers in scientific notation
///
/// Unlike `{:e}`, the exponent always carries a sign and at least two digits,
/// e.g. `1.86e-09`.
pub struct Scientific {
    value: f64,
    precision: usize,
}

impl Scientific {
    /// Create a formatter with the given number of fractional mantissa digits
    pub fn new(value: f64, precision: usize) -> Self {
        Self {value, precision}
    }
}

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = format!("{:.*e}", self.precision, self.value);
        match s.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
            },
            None => fmt::Display::fmt(&s, f),
        }
    }
}
