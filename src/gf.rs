//! Arithmetic in the binary extension field GF(2^m).
//!
//! Elements are stored in their polynomial (bit) representation as `usize`
//! values in `[0, 2^m - 1]`. Addition is XOR; multiplication, division and
//! inversion go through the discrete-log and power (antilog) tables built
//! from a primitive polynomial.
//!
//! The tables are built once and never mutated, so a `GaloisField` can be
//! shared by reference between any number of decoders and threads.

use crate::error::{Error, Result};
use std::fmt::{Display, Formatter};

/// Smallest supported field order (m in GF(2^m))
pub const MIN_FIELD_ORDER: usize = 2;

/// Maximum supported field order (m in GF(2^m))
pub const MAX_FIELD_ORDER: usize = 16;

/// Logarithm table entry for the zero element, which has no logarithm
const LOG_ZERO: usize = usize::MAX;

/// Default primitive polynomials for m = 2..=16, indexed by `m - 2`.
const DEFAULT_PRIMITIVE_POLYS: [u32; 15] = [
    0x7,     // x^2 + x + 1
    0xB,     // x^3 + x + 1
    0x13,    // x^4 + x + 1
    0x25,    // x^5 + x^2 + 1
    0x43,    // x^6 + x + 1
    0x89,    // x^7 + x^3 + 1
    0x11D,   // x^8 + x^4 + x^3 + x^2 + 1
    0x211,   // x^9 + x^4 + 1
    0x409,   // x^10 + x^3 + 1
    0x805,   // x^11 + x^2 + 1
    0x1053,  // x^12 + x^6 + x^4 + x + 1
    0x201B,  // x^13 + x^4 + x^3 + x + 1
    0x4443,  // x^14 + x^10 + x^6 + x + 1
    0x8003,  // x^15 + x + 1
    0x1100B, // x^16 + x^12 + x^3 + x + 1
];

/// Return the default primitive polynomial for the given field order
pub fn default_primitive_poly(field_order: usize) -> Option<u32> {
    if !(MIN_FIELD_ORDER..=MAX_FIELD_ORDER).contains(&field_order) {
        return None;
    }
    Some(DEFAULT_PRIMITIVE_POLYS[field_order - MIN_FIELD_ORDER])
}

/// The field GF(2^m) defined by a primitive polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaloisField {
    /// Field order parameter (m in GF(2^m))
    field_order: usize,
    /// Multiplicative group order (n = 2^m - 1)
    group_order: usize,
    /// Primitive polynomial used to define the field
    primitive_poly: u32,
    /// `power[i] = α^i`; `power[n]` wraps back to 1
    power: Vec<usize>,
    /// `log[x] = i` such that `α^i = x`; `log[0]` holds a sentinel
    log: Vec<usize>,
}

impl GaloisField {
    /// Build the log and power tables for GF(2^m).
    ///
    /// # Arguments
    ///
    /// * `field_order` - Field size parameter m
    /// * `primitive_poly` - Bit pattern of a primitive polynomial of degree m
    ///
    /// # Returns
    ///
    /// The field, or `Error::InvalidConfiguration` if the polynomial does not
    /// have degree m or does not generate all `2^m - 1` nonzero elements.
    pub fn new(field_order: usize, primitive_poly: u32) -> Result<Self> {
        if !(MIN_FIELD_ORDER..=MAX_FIELD_ORDER).contains(&field_order) {
            return Err(Error::InvalidConfiguration(format!(
                "field order must be between {} and {}, got {}",
                MIN_FIELD_ORDER, MAX_FIELD_ORDER, field_order
            )));
        }

        if (primitive_poly as u64) >> field_order != 1 {
            return Err(Error::InvalidConfiguration(format!(
                "primitive polynomial {:#x} does not have degree {}",
                primitive_poly, field_order
            )));
        }

        // Without a constant term the polynomial is divisible by x
        if primitive_poly & 1 == 0 {
            return Err(Error::InvalidConfiguration(format!(
                "primitive polynomial {:#x} is divisible by x",
                primitive_poly
            )));
        }

        let size = 1usize << field_order;
        let group_order = size - 1;
        let mut power = vec![0; size];
        let mut log = vec![LOG_ZERO; size];

        let mut x = 1usize;
        for i in 0..group_order {
            if log[x] != LOG_ZERO {
                return Err(Error::InvalidConfiguration(format!(
                    "polynomial {:#x} is not primitive: alpha has order {}, expected {}",
                    primitive_poly, i, group_order
                )));
            }
            power[i] = x;
            log[x] = i;

            // Multiply by alpha and reduce the degree-m term
            x <<= 1;
            if x & size != 0 {
                x ^= primitive_poly as usize;
            }
        }

        if x != 1 {
            return Err(Error::InvalidConfiguration(format!(
                "polynomial {:#x} is not primitive: alpha^{} != 1",
                primitive_poly, group_order
            )));
        }
        power[group_order] = 1;

        log::debug!(
            "built GF(2^{}) tables from primitive polynomial {:#x}",
            field_order,
            primitive_poly
        );

        Ok(GaloisField {
            field_order,
            group_order,
            primitive_poly,
            power,
            log,
        })
    }

    /// Build GF(2^m) from its default primitive polynomial
    pub fn with_default_poly(field_order: usize) -> Result<Self> {
        let poly = default_primitive_poly(field_order).ok_or_else(|| {
            Error::InvalidConfiguration(format!(
                "no default primitive polynomial for field order {}",
                field_order
            ))
        })?;
        Self::new(field_order, poly)
    }

    /// Field order parameter m
    pub fn field_order(&self) -> usize {
        self.field_order
    }

    /// Number of nonzero elements, `n = 2^m - 1`
    pub fn group_order(&self) -> usize {
        self.group_order
    }

    /// Number of elements, `2^m`
    pub fn size(&self) -> usize {
        self.group_order + 1
    }

    pub fn primitive_poly(&self) -> u32 {
        self.primitive_poly
    }

    /// Whether `x` is an element of this field
    pub fn contains(&self, x: usize) -> bool {
        x <= self.group_order
    }

    /// `α^e`, with `e` reduced modulo `n`
    pub fn alpha_pow(&self, e: usize) -> usize {
        self.power[e % self.group_order]
    }

    /// `α^(-e)`, with `e` reduced modulo `n`
    pub fn alpha_inv_pow(&self, e: usize) -> usize {
        self.power[(self.group_order - e % self.group_order) % self.group_order]
    }

    /// Discrete logarithm of `x`; `None` for zero
    pub fn log(&self, x: usize) -> Option<usize> {
        match self.log[x] {
            LOG_ZERO => None,
            l => Some(l),
        }
    }

    /// Field addition (and subtraction)
    #[inline]
    pub fn add(&self, a: usize, b: usize) -> usize {
        a ^ b
    }

    /// Multiply two elements in the finite field
    #[inline]
    pub fn mul(&self, a: usize, b: usize) -> usize {
        if a == 0 || b == 0 {
            return 0;
        }
        self.power[(self.log[a] + self.log[b]) % self.group_order]
    }

    /// Calculate the multiplicative inverse of a field element
    pub fn inv(&self, a: usize) -> Result<usize> {
        if a == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.power[self.group_order - self.log[a]])
    }

    pub fn div(&self, a: usize, b: usize) -> Result<usize> {
        let b_inv = self.inv(b)?;
        Ok(self.mul(a, b_inv))
    }

    /// `x^e` for an element `x`; `0^0` is taken as 1
    pub fn pow(&self, x: usize, e: usize) -> usize {
        if e == 0 {
            return 1;
        }
        if x == 0 {
            return 0;
        }
        let exponent = (self.log[x] as u128 * e as u128) % self.group_order as u128;
        self.power[exponent as usize]
    }

    #[inline]
    pub fn square(&self, x: usize) -> usize {
        self.mul(x, x)
    }

    /// Field inner product `Σ a[i]·b[i]` over the shorter of the two slices
    pub fn dot(&self, a: &[usize], b: &[usize]) -> usize {
        a.iter()
            .zip(b)
            .fold(0, |acc, (&x, &y)| acc ^ self.mul(x, y))
    }

    /// Evaluate a polynomial (coefficients in ascending degree) at `x`
    pub fn eval_poly(&self, coefficients: &[usize], x: usize) -> usize {
        coefficients
            .iter()
            .rev()
            .fold(0, |acc, &c| self.mul(acc, x) ^ c)
    }
}

impl Display for GaloisField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GF(2^{}) mod {:#x}",
            self.field_order, self.primitive_poly
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_power_round_trip() {
        for m in MIN_FIELD_ORDER..=12 {
            let field = GaloisField::with_default_poly(m).unwrap();
            let n = field.group_order();

            for x in 1..=n {
                let l = field.log(x).unwrap();
                assert_eq!(field.alpha_pow(l), x);
            }
            for i in 0..2 * n {
                assert_eq!(field.log(field.alpha_pow(i)), Some(i % n));
            }
            assert_eq!(field.log(0), None);
        }
    }

    #[test]
    fn test_gf64_known_powers() {
        // x^6 + x + 1
        let field = GaloisField::new(6, 0x43).unwrap();
        assert_eq!(field.group_order(), 63);
        assert_eq!(field.alpha_pow(0), 1);
        assert_eq!(field.alpha_pow(5), 0b100000);
        assert_eq!(field.alpha_pow(6), 0b000011);
        assert_eq!(field.alpha_pow(11), 0b100011);
        assert_eq!(field.alpha_pow(63), 1);
    }

    #[test]
    fn test_finite_field_arithmetic() {
        let field = GaloisField::new(4, 0x13).unwrap();

        for a in 1..16 {
            let a_inv = field.inv(a).unwrap();
            assert_eq!(field.mul(a, a_inv), 1);
            assert_eq!(field.div(a, a).unwrap(), 1);
            assert_eq!(field.mul(a, 0), 0);
            assert_eq!(field.add(a, a), 0);
        }

        // α^3 · α^14 = α^17 = α^2
        assert_eq!(field.mul(field.alpha_pow(3), field.alpha_pow(14)), 4);
        assert_eq!(field.alpha_inv_pow(1), field.alpha_pow(14));
        assert_eq!(field.pow(2, 15), 1);
        assert_eq!(field.pow(0, 3), 0);
        assert_eq!(field.square(field.alpha_pow(3)), field.alpha_pow(6));
    }

    #[test]
    fn test_inverse_of_zero() {
        let field = GaloisField::new(4, 0x13).unwrap();
        assert!(matches!(field.inv(0), Err(Error::DivisionByZero)));
        assert!(matches!(field.div(3, 0), Err(Error::DivisionByZero)));
    }

    #[test]
    fn test_eval_poly_and_dot() {
        let field = GaloisField::new(4, 0x13).unwrap();
        // p(x) = 1 + x^2, so p(1) = 0
        assert_eq!(field.eval_poly(&[1, 0, 1], 1), 0);
        // p(α) = 1 + α^2
        assert_eq!(field.eval_poly(&[1, 0, 1], 2), 1 ^ 4);
        assert_eq!(field.dot(&[1, 2, 3], &[1, 1, 1]), 1 ^ 2 ^ 3);
    }

    #[test]
    fn test_rejects_bad_polynomials() {
        // Wrong degree
        assert!(matches!(
            GaloisField::new(6, 0x13),
            Err(Error::InvalidConfiguration(_))
        ));
        // Divisible by x
        assert!(GaloisField::new(4, 0x12).is_err());
        // x^4 + x^3 + x^2 + x + 1 is irreducible but alpha has order 5
        assert!(GaloisField::new(4, 0x1F).is_err());
        // Reducible: (x^2 + x + 1)^2 = x^4 + x^2 + 1
        assert!(GaloisField::new(4, 0x15).is_err());
        // Unsupported field orders
        assert!(GaloisField::new(1, 0x3).is_err());
        assert!(GaloisField::with_default_poly(17).is_err());
    }

    #[test]
    fn test_default_polynomials_are_primitive() {
        for m in MIN_FIELD_ORDER..=MAX_FIELD_ORDER {
            let field = GaloisField::with_default_poly(m).unwrap();
            assert_eq!(field.size(), 1 << m);
        }
    }
}
