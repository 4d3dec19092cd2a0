// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Command line commands

#[cfg(test)]
mod tests;

use std::io;

use nom::Finish;
use nom::combinator::all_consuming;

use crate::constants::Constants;
use crate::error::{Error, convert_error};
use crate::indentation::Indented;
use crate::module::Module;
use crate::params::{OverflowPolicy, Params};
use crate::parsers;


/// Name of the executable, as shown in the usage banner
pub const PROGRAM: &str = "cordic-constgen";

/// Flag selecting `OverflowPolicy::Permissive`
pub const PERMISSIVE_FLAG: &str = "--permissive";

/// Keyword selecting `Command::ModuleTemplate`
pub const MODULE_KEYWORD: &str = "module";

/// Configurations rendered by `Command::DemoSweep`
pub const DEMO_CONFIGS: [(u32, u32, u32); 5] = [
    (16, 12, 16),
    (24, 15, 16),
    (32, 15, 16),
    (40, 18, 20),
    (48, 20, 24),
];


/// A command, selected once from the command line arguments
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Generate constants for a single set of parameters
    Generate(Params),
    /// Generate constants for all `DEMO_CONFIGS`
    DemoSweep,
    /// Generate a module skeleton for the given angle width
    ModuleTemplate(u32),
}

impl Command {
    /// Select a command from command line arguments
    ///
    /// The arguments are expected without the program name. Three arguments
    /// select `Generate`, `module <angle_width>` selects `ModuleTemplate`. Any
    /// other number of arguments selects the `DemoSweep`.
    ///
    /// A `--permissive` flag may appear anywhere. It is not counted and makes
    /// `Generate` emit literals exceeding their width instead of failing.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, Error> {
        let overflow = if args.iter().any(|a| a.as_ref() == PERMISSIVE_FLAG) {
            OverflowPolicy::Permissive
        } else {
            OverflowPolicy::Strict
        };
        let args: Vec<&str> = args.iter().map(|a| a.as_ref()).filter(|a| *a != PERMISSIVE_FLAG).collect();

        match args.as_slice() {
            [angle_width, iterations, data_width] => {
                let params = Params::new(parse_arg(angle_width)?, parse_arg(iterations)?, parse_arg(data_width)?);
                Ok(Self::Generate(params.with_overflow(overflow)))
            },
            [MODULE_KEYWORD, angle_width] => parse_arg(angle_width).map(Self::ModuleTemplate),
            _ => Ok(Self::DemoSweep),
        }
    }

    /// Execute the command, writing the generated text to `out`
    pub fn run(&self, out: &mut impl io::Write) -> Result<(), Error> {
        log::debug!("Running {:?}", self);
        match self {
            Self::Generate(params)          => generate(params, out),
            Self::DemoSweep                 => demo_sweep(out),
            Self::ModuleTemplate(width)     => module_template(*width, out),
        }
    }
}


fn generate(params: &Params, out: &mut impl io::Write) -> Result<(), Error> {
    Constants::derive(params)?.listing().write_to(out).map_err(Into::into)
}


fn demo_sweep(out: &mut impl io::Write) -> Result<(), Error> {
    writeln!(out, "Usage: {} [{}] <angle_width> <iterations> <width>", PROGRAM, PERMISSIVE_FLAG)?;
    writeln!(out, "       {} {} <angle_width>", PROGRAM, MODULE_KEYWORD)?;
    writeln!(out, "Example: {} 32 15 16", PROGRAM)?;
    writeln!(out)?;
    writeln!(out, "Generating examples for common configurations:")?;
    writeln!(out)?;

    DEMO_CONFIGS.iter().try_for_each(|&(angle_width, iterations, data_width)| {
        let params = Params::new(angle_width, iterations, data_width);
        writeln!(out, "=== Configuration: {} ===", params)?;
        generate(&params, out)?;
        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(80))?;
        writeln!(out).map_err(Into::into)
    })
}


fn module_template(angle_width: u32, out: &mut impl io::Write) -> Result<(), Error> {
    write!(out, "{}", Indented(&Module::new(angle_width))).map_err(Into::into)
}


/// Parse a single numeric argument
fn parse_arg(arg: &str) -> Result<u32, Error> {
    all_consuming(parsers::decimal)(arg)
        .finish()
        .map(|(_, value)| value)
        .map_err(|e| convert_error(arg, nom::Err::Error(e)))
}
