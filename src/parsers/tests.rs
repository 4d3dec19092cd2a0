//! Tests for parser utilities

use nom::combinator::all_consuming;
use nom::Finish;

use num_bigint::BigInt;

use crate::tests::{Equivalence, Identifier};


#[quickcheck]
fn parse_identifier(original: Identifier) -> Result<Equivalence<Identifier>, String> {
    let s = original.to_string();
    let res = all_consuming(super::identifier)(&s)
        .finish()
        .map(|(_, parsed)| Equivalence::of(original, parsed.into()))
        .map_err(|e| e.to_string());
    res
}


#[quickcheck]
fn parse_decimal(original: i128) -> Result<Equivalence<i128>, String> {
    let s = original.to_string();
    let res = all_consuming(super::decimal)(&s)
        .finish()
        .map(|(_, parsed)| Equivalence::of(original, parsed))
        .map_err(|e| e.to_string());
    res
}


#[test]
fn unsigned_rejects_sign() {
    assert!(all_consuming(super::decimal::<u32>)("-15").finish().is_err());
    assert!(all_consuming(super::decimal::<u32>)("15x").finish().is_err());
    assert!(all_consuming(super::decimal::<u32>)("").finish().is_err());
}


#[test]
fn localparam_variants() {
    let (_, (name, lit)) = all_consuming(super::localparam)("localparam X = 8'h2A;")
        .finish()
        .expect("Failed to parse plain declaration");
    assert_eq!(name, "X");
    assert_eq!(*lit.value(), BigInt::from(42));

    let (_, (name, lit)) = all_consuming(super::localparam)(
        "localparam signed [WIDTH-1:0] CORDIC_GAIN = 16'h26DD;"
    ).finish().expect("Failed to parse declaration");
    assert_eq!(name, "CORDIC_GAIN");
    assert_eq!(lit.width(), 16);
    assert_eq!(*lit.value(), BigInt::from(0x26DD));
}
