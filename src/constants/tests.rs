//! Tests related to the derived constant set

use quickcheck::TestResult;

use crate::error::Error;
use crate::params::{OverflowPolicy, Params};

use super::Constants;


#[quickcheck]
fn deterministic(params: Params) -> TestResult {
    match (Constants::derive(&params), Constants::derive(&params)) {
        (Ok(a), Ok(b))   => TestResult::from_bool(a == b),
        (Err(_), Err(_)) => TestResult::passed(),
        _                => TestResult::failed(),
    }
}


#[quickcheck]
fn permissive_never_out_of_range(params: Params) -> bool {
    Constants::derive(&params.with_overflow(OverflowPolicy::Permissive)).is_ok()
}


#[quickcheck]
fn compliant_widths_fit(params: Params) -> TestResult {
    // Below 8 bits, the minimum precision exceeds the angle width.
    if params.angle_width() < 8 {
        return TestResult::discard()
    }
    TestResult::from_bool(Constants::derive(&params.with_overflow(OverflowPolicy::Strict)).is_ok())
}


#[test]
fn standard_configuration() {
    let constants = Constants::derive(&Params::new(32, 15, 16)).expect("Failed to derive");
    assert_eq!(constants.precision().fractional_bits(), 29);
    assert_eq!(constants.gain().to_string(), "16'h26DD");
    assert_eq!(constants.atan().len(), 15);
    assert_eq!(constants.ladder().len(), 11);
}


#[test]
fn narrow_angles_out_of_range() {
    match Constants::derive(&Params::new(4, 3, 8)) {
        Err(Error::OutOfRange{name, width, ..}) => {
            assert_eq!(name, "PI");
            assert_eq!(width, 4);
        },
        other => panic!("Unexpected result: {:?}", other),
    }

    let constants = Constants::derive(&Params::new(4, 3, 8).with_overflow(OverflowPolicy::Permissive))
        .expect("Failed to derive");
    assert_eq!(constants.precision().fractional_bits(), 5);
    assert_eq!(constants.ladder().len(), 1);
}


#[test]
fn invalid_parameters() {
    assert!(matches!(
        Constants::derive(&Params::new(3, 12, 16)),
        Err(Error::InvalidParameter{name: "angle width", ..})
    ));
    assert!(matches!(
        Constants::derive(&Params::new(16, 0, 16)),
        Err(Error::InvalidParameter{name: "iteration count", ..})
    ));
    assert!(matches!(
        Constants::derive(&Params::new(16, 12, 1)),
        Err(Error::InvalidParameter{name: "data width", ..})
    ));
}
