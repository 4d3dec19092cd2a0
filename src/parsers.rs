//! Parser utilities

#[cfg(test)]
mod tests;

use nom::bytes::complete::{tag, take_while, take_while1};
use nom::character::complete::{satisfy, space0, space1};
use nom::combinator::{map, not, opt, peek, value};
use nom::error::context;
use nom::sequence::{delimited, preceded, terminated, tuple};

use num_bigint::BigInt;

use crate::literal::Literal;


/// Result type for our (sub)parsers
pub type IResult<'i, O> = nom::IResult<&'i str, O, Error<'i>>;


/// Error type for our (sub)parsers
pub type Error<'i> = nom::error::VerboseError<&'i str>;


/// Parse an identifier
///
/// The parser will consume the longest sequence of alphanumeric characters and
/// '_'. However, the parser will return an error if the first character is a
/// numeric character.
///
/// The returned parser will consume any spaces and tabs preceding the identifier.
pub fn identifier(input: &str) -> IResult<&str> {
    context(
        "expected identifier",
        map(
            tuple((space0, peek(not(satisfy(char::is_numeric))), take_while1(is_identifier_char))),
            |(_, _, s)| s
        )
    )(input)
}


/// Parse a decimal numeral
///
/// The returned parser will consume any spaces preceding the decimal.
pub fn decimal<O>(input: &str) -> IResult<O>
    where O: std::str::FromStr
{
    use nom::combinator::{recognize, success};
    use nom::branch::alt;

    let sign = alt((value((), tag("+")), value((), tag("-")), success(())));

    context(
        "expected decimal numeral",
        nom::combinator::map_res(
            preceded(space0, recognize(tuple((sign, take_while(char::is_numeric))))),
            str::parse
        )
    )(input)
}


/// Parse a sized hexadecimal literal such as `32'h6487ED51`
///
/// The returned parser will consume any spaces preceding the literal.
pub fn literal(input: &str) -> IResult<Literal> {
    let digits = nom::combinator::map_opt(
        take_while1(|c: char| c.is_ascii_hexdigit()),
        |s: &str| BigInt::parse_bytes(s.as_bytes(), 16)
    );

    context(
        "expected sized hex literal",
        map(
            tuple((decimal::<u32>, tag("'h"), digits)),
            |(width, _, value)| Literal::new(width, value)
        )
    )(input)
}


/// Parse a single `localparam` declaration
///
/// The declaration may be signed and may carry a range, e.g.
/// `localparam signed [ANGLE_WIDTH-1:0] PI = 32'h6487ED51;`. Only the name
/// and the literal value are retained.
pub fn localparam(input: &str) -> IResult<(&str, Literal)> {
    let range = delimited(tag("["), take_while(|c| c != ']'), tag("]"));

    context(
        "expected localparam declaration",
        map(
            tuple((
                preceded(space0, tag("localparam")),
                opt(preceded(space1, tag("signed"))),
                opt(preceded(space1, range)),
                identifier,
                preceded(space0, tag("=")),
                preceded(space0, literal),
                terminated(space0, tag(";")),
            )),
            |(_, _, _, name, _, lit, _)| (name, lit)
        )
    )(input)
}


/// Check whether the character is allowed in identifiers
fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
