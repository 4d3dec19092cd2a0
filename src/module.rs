//! Module skeletons for generated constants


use std::fmt;

use crate::indentation::{DisplayIndented, Indentation};


/// Default data width of a generated module
pub const DEFAULT_WIDTH: u32 = 16;

/// Default iteration count of a generated module
pub const DEFAULT_ITERATIONS: u32 = 15;


/// A CORDIC module skeleton
///
/// The skeleton declares the interface of a CORDIC rotator for a specific
/// angle width. Constants and implementation are left as placeholders.
#[derive(Clone, Debug)]
pub struct Module {
    angle_width: u32,
    params: Vec<(&'static str, u32)>,
    ports: Vec<Port>,
}

impl Module {
    /// Create a skeleton for the given angle width
    pub fn new(angle_width: u32) -> Self {
        let data = Range::Param("WIDTH");
        let angle = Range::Fixed(angle_width);
        let ports = vec![
            Port::new("clock", Direction::Input),
            Port::new("reset", Direction::Input),
            Port::new("start", Direction::Input),
            Port::new("x_start", Direction::Input).with_range(data).signed(),
            Port::new("y_start", Direction::Input).with_range(data).signed(),
            Port::new("angle", Direction::Input).with_range(angle).signed(),
            Port::new("cosine", Direction::Output).with_range(data).signed(),
            Port::new("sine", Direction::Output).with_range(data).signed(),
            Port::new("done", Direction::Output),
        ];

        Self {
            angle_width,
            params: vec![("WIDTH", DEFAULT_WIDTH), ("ITERATIONS", DEFAULT_ITERATIONS)],
            ports,
        }
    }

    /// Retrieve the module's name
    pub fn name(&self) -> String {
        format!("CORDIC_{}bit", self.angle_width)
    }

    /// Retrieve the module's parameters and their default values
    pub fn params(&self) -> impl Iterator<Item = &(&'static str, u32)> {
        self.params.iter()
    }

    /// Retrieve the module's I/O ports
    pub fn ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter()
    }

    /// Retrieve a specific port by its name
    pub fn port_by_name(&self, name: &impl AsRef<str>) -> Option<&Port> {
        self.ports.iter().find(|p| p.name() == name.as_ref())
    }
}

impl DisplayIndented for Module {
    fn fmt<W: fmt::Write>(&self, indentation: &mut Indentation, f: &mut W) -> fmt::Result {
        let outer = indentation.lock();
        let mut inner = indentation.sub();

        writeln!(f, "{}// Auto-generated CORDIC module for {}-bit angles", outer, self.angle_width)?;
        writeln!(f, "{}module {} #(", outer, self.name())?;
        let last = self.params.len().saturating_sub(1);
        self.params().enumerate().try_for_each(|(i, (name, value))| {
            let separator = if i == last { "" } else { "," };
            writeln!(f, "{}parameter {} = {}{}", inner.lock(), name, value, separator)
        })?;
        writeln!(f, "{})(", outer)?;
        let last = self.ports.len().saturating_sub(1);
        self.ports().enumerate().try_for_each(|(i, port)| {
            let separator = if i == last { "" } else { "," };
            writeln!(f, "{}{}{}", inner.lock(), port, separator)
        })?;
        writeln!(f, "{});", outer)?;
        writeln!(f)?;
        writeln!(f, "{}// Include the generated constants above", outer)?;
        writeln!(f, "{}// ... (insert generated constants here)", outer)?;
        writeln!(f)?;
        writeln!(f, "{}// Standard CORDIC implementation with the generated constants", outer)?;
        writeln!(f, "{}// ... (rest of implementation)", outer)?;
        writeln!(f)?;
        writeln!(f, "{}endmodule", outer)
    }
}


/// An I/O port of a module
#[derive(Clone, Debug)]
pub struct Port {
    name: &'static str,
    direction: Direction,
    range: Option<Range>,
    signed: bool,
}

impl Port {
    fn new(name: &'static str, direction: Direction) -> Self {
        Self {name, direction, range: None, signed: false}
    }

    fn with_range(self, range: Range) -> Self {
        Self {range: Some(range), ..self}
    }

    fn signed(self) -> Self {
        Self {signed: true, ..self}
    }

    /// Retrieve the I/O port's name
    pub fn name(&self) -> &str {
        self.name
    }

    /// Retrieve the I/O port's direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Retrieve the I/O port's width, if it is fixed
    ///
    /// Ports without a range are a single bit wide. For ports with a
    /// parametrized range, this function returns `None`.
    pub fn width(&self) -> Option<u32> {
        match self.range {
            None                        => Some(1),
            Some(Range::Fixed(w))       => Some(w),
            Some(Range::Param(_))       => None,
        }
    }

    /// Check whether the port is signed
    pub fn is_signed(&self) -> bool {
        self.signed
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction(), self.direction().net())?;
        if self.signed {
            write!(f, " signed")?;
        }
        if let Some(range) = self.range {
            write!(f, " {}", range)?;
        }
        write!(f, " {}", self.name())
    }
}


/// Direction of an I/O port
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Direction {
    Input,
    Output,
}

impl Direction {
    /// Retrieve the keyword associated with the direction value
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }

    /// Retrieve the kind of net a port with this direction is declared as
    ///
    /// Inputs are wires, outputs are registers driven by the module.
    pub fn net(&self) -> &'static str {
        match self {
            Self::Input => "wire",
            Self::Output => "reg",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.keyword(), f)
    }
}


/// Bit range of a port
#[derive(Copy, Clone, Debug, PartialEq)]
enum Range {
    /// Range with a fixed width
    Fixed(u32),
    /// Range with a width given by a module parameter
    Param(&'static str),
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(w) => write!(f, "[{}:0]", w.saturating_sub(1)),
            Self::Param(p) => write!(f, "[{}-1:0]", p),
        }
    }
}
