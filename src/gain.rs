//! CORDIC gain compensation


use crate::literal::Literal;
use crate::precision::Precision;


/// Name under which the gain compensation is declared
pub const GAIN_NAME: &str = "CORDIC_GAIN";

/// Limit of the compensation factor for infinitely many iterations
pub const GAIN_LIMIT: f64 = 0.607_252_935_008_881_3;


/// Compute the vector-length growth after the given number of iterations
///
/// Each iteration `i` grows the vector by `sqrt(1 + 2^(-2i))`. The product is
/// accumulated exactly as the hardware would experience it, without resorting
/// to the asymptotic value.
pub fn growth(iterations: u32) -> f64 {
    let mut product = 1.0;
    let mut shift: f64 = 1.0;
    for _ in 0..iterations {
        product *= (1.0 + shift * shift).sqrt();
        shift *= 0.5;
    }
    product
}

/// Compute the factor compensating the growth after the given number of iterations
pub fn compensation(iterations: u32) -> f64 {
    1.0 / growth(iterations)
}


/// Quantize the gain compensation factor
///
/// The factor is scaled by the coordinate scale and truncated toward zero.
pub fn derive(precision: &Precision, iterations: u32, data_width: u32) -> Literal {
    Literal::quantize(compensation(iterations), precision.coord_bits(), data_width)
}
