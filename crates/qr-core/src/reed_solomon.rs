//! Reed-Solomon error-correction codeword generation over GF(256).
//!
//! The generator polynomial is built by repeatedly multiplying in one
//! root `α^i` at a time, root exponents tracked explicitly as an
//! `ExponentPoly` so the per-root step reads as what it is (multiply by
//! `α^i`, shift, XOR) rather than an opaque call into `galois::multiply`.
//! Encoding a message against the resulting value-form generator is a
//! single pass of shift-then-scalar-multiply-then-XOR, the same shape as
//! long division by hand.

use crate::galois;

/// A polynomial's coefficients as GF(256) discrete logarithms, highest
/// degree first. `None` marks a zero coefficient, which has no logarithm.
pub(crate) struct ExponentPoly(Vec<Option<u8>>);

/// A polynomial's coefficients as GF(256) field values, highest degree
/// first.
pub(crate) struct ValuePoly(pub Vec<u8>);

impl ExponentPoly {
    /// The constant polynomial `1`, as a degree-`len - 1` polynomial with
    /// every coefficient but the lowest held at zero.
    fn one(len: usize) -> Self {
        let mut coefs = vec![None; len];
        *coefs.last_mut().unwrap() = Some(0);
        ExponentPoly(coefs)
    }

    /// Multiplies this polynomial in place by `(x - α^root_exp)`, i.e.
    /// scales every term by `α^root_exp` and adds (XORs) it into the next
    /// higher-degree term. Index `j` is only ever read before it's
    /// written, since `j + 1` is processed in a later iteration.
    fn multiply_by_root(&mut self, root_exp: u8) {
        let root = galois::to_value(root_exp);
        let len = self.0.len();
        for j in 0..len {
            let scaled = galois::multiply(self.0[j].map_or(0, galois::to_value), root);
            let new_value = if j + 1 < len {
                scaled ^ self.0[j + 1].map_or(0, galois::to_value)
            } else {
                scaled
            };
            self.0[j] = if new_value == 0 {
                None
            } else {
                Some(galois::to_exponent(new_value))
            };
        }
    }

    fn to_value_poly(&self) -> ValuePoly {
        ValuePoly(self.0.iter().map(|&e| e.map_or(0, galois::to_value)).collect())
    }
}

/// Builds the degree-`degree` generator polynomial, the product of
/// `(x - α^i)` for `i` in `0..degree`, in value form.
pub(crate) fn generator_polynomial(degree: usize) -> ValuePoly {
    assert!(degree >= 1 && degree <= 255, "degree out of range");

    let mut running = ExponentPoly::one(degree + 1);
    for root_exp in 0..degree as u8 {
        running.multiply_by_root(root_exp);
    }
    // The product of `degree` linear roots has degree `degree`, i.e.
    // `degree + 1` coefficients; the leading one is always 1 and is
    // dropped so callers see exactly `degree` coefficients matching the
    // remainder width used during division.
    let mut value_poly = running.to_value_poly();
    value_poly.0.remove(0);
    value_poly
}

/// Computes the `divisor.0.len()` error-correction codewords for one block
/// of `data` codewords, by polynomial long division modulo the generator
/// `divisor`.
///
/// At each step the leading term of the running remainder is multiplied
/// into every divisor term (shift-and-scalar-multiply) and XORed in,
/// which is exactly long division in a field where subtraction is XOR.
pub(crate) fn compute_ecc_codewords(data: &[u8], divisor: &ValuePoly) -> Vec<u8> {
    let mut remainder = vec![0u8; divisor.0.len()];
    for &b in data {
        let factor = b ^ remainder.remove(0);
        remainder.push(0);
        if factor != 0 {
            for (r, &d) in remainder.iter_mut().zip(divisor.0.iter()) {
                *r ^= galois::multiply(d, factor);
            }
        }
    }
    remainder
}
