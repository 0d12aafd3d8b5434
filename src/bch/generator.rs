//! Minimal and generator polynomials of a binary BCH code.
//!
//! Binary polynomials are `Vec<bool>` with coefficients in ascending degree.

use crate::bch::coset::CyclotomicCosets;
use crate::error::{Error, Result};
use crate::gf::GaloisField;
use std::ops::Range;

/// Minimal polynomial over GF(2) of the field elements `α^j`, `j ∈ coset`.
///
/// Forms `Π (x - α^j)` with field arithmetic; the product of a full
/// cyclotomic coset has binary coefficients.
pub fn minimal_polynomial(field: &GaloisField, coset: &[usize]) -> Result<Vec<bool>> {
    let mut poly = vec![1usize];

    for &j in coset {
        let root = field.alpha_pow(j);
        let mut next = vec![0usize; poly.len() + 1];
        for (i, &c) in poly.iter().enumerate() {
            next[i + 1] ^= c;
            next[i] ^= field.mul(c, root);
        }
        poly = next;
    }

    poly.iter()
        .map(|&c| match c {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidConfiguration(format!(
                "exponents {:?} do not form a cyclotomic coset",
                coset
            ))),
        })
        .collect()
}

/// Multiply two binary polynomials
pub fn binary_poly_multiply(a: &[bool], b: &[bool]) -> Vec<bool> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![false; a.len() + b.len() - 1];
    for (i, &a_bit) in a.iter().enumerate() {
        if !a_bit {
            continue;
        }

        for (j, &b_bit) in b.iter().enumerate() {
            if b_bit {
                result[i + j] ^= true;
            }
        }
    }
    result
}

/// Generator polynomial with roots `α^e` for every `e` in `exponents`.
///
/// The least common multiple of the minimal polynomials is the product of
/// the minimal polynomials of the distinct covering cosets.
pub fn generator_polynomial(
    field: &GaloisField,
    cosets: &CyclotomicCosets,
    exponents: Range<usize>,
) -> Result<Vec<bool>> {
    let mut generator = vec![true];
    for coset in cosets.covering(exponents) {
        let minimal = minimal_polynomial(field, coset)?;
        generator = binary_poly_multiply(&generator, &minimal);
    }
    Ok(generator)
}

/// Degree of a binary polynomial; the zero polynomial reports 0
pub fn degree(poly: &[bool]) -> usize {
    poly.iter().rposition(|&bit| bit).unwrap_or(0)
}
