//! CORDIC constant generation
//!
//! This library derives the fixed-point constants a hardware CORDIC rotator
//! needs for a given angle width, iteration count and data width: angle
//! constants, the gain compensation, the arctangent lookup table and an angle
//! range reduction ladder. The constants are rendered as `localparam`
//! declarations, ready to be pasted into a hardware description.
//!
//! ```
//! use cordic_constgen::{Constants, Params};
//!
//! let constants = Constants::derive(&Params::new(32, 15, 16)).unwrap();
//! assert_eq!(constants.precision().fractional_bits(), 29);
//! assert!(constants.listing().to_string().contains("PI = 32'h6487ED51;"));
//! ```

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod angle;
pub mod atan;
pub mod command;
pub mod constants;
pub mod display;
pub mod error;
pub mod gain;
pub mod indentation;
pub mod ladder;
pub mod listing;
pub mod literal;
pub mod module;
pub mod params;
pub mod parsers;
pub mod precision;


pub use angle::{AngleConstant, AngleConstants};
pub use atan::AtanTable;
pub use command::Command;
pub use constants::Constants;
pub use error::Error;
pub use ladder::Ladder;
pub use listing::Listing;
pub use literal::Literal;
pub use params::{OverflowPolicy, Params};
pub use precision::Precision;
