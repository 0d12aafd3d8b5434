//! Syndrome computation for binary BCH codes.
//!
//! The received word is read as a polynomial with the first bit as the
//! coefficient of `x^(n-1)`, and evaluated at `α^b, α^(b+1), ..., α^(b+2t-1)`.

use crate::bch::coset::CyclotomicCosets;
use crate::gf::GaloisField;
use bitvec::prelude::*;

/// The `2t` syndromes of one received word; `values[j] = S_{b+j}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syndromes {
    first_exponent: usize,
    values: Vec<usize>,
}

impl Syndromes {
    pub fn new(first_exponent: usize, values: Vec<usize>) -> Self {
        Syndromes {
            first_exponent,
            values,
        }
    }

    /// True iff any syndrome is nonzero
    pub fn has_error(&self) -> bool {
        self.values.iter().any(|&s| s != 0)
    }

    /// Exponent `b` of the first syndrome
    pub fn first_exponent(&self) -> usize {
        self.first_exponent
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Evaluate the received word at `α^exponent` with Horner's scheme
pub fn evaluate(field: &GaloisField, received: &BitSlice<u8, Msb0>, exponent: usize) -> usize {
    let point = field.alpha_pow(exponent);
    received
        .iter()
        .by_vals()
        .fold(0, |acc, bit| field.mul(acc, point) ^ usize::from(bit))
}

/// Computes the syndrome vector of received words.
///
/// Only coset leaders are evaluated directly; every other target exponent
/// `e = l·2^s` takes `S_e = S_l^(2^s)`.
#[derive(Debug, Clone, Copy)]
pub struct SyndromeCalculator<'a> {
    field: &'a GaloisField,
    cosets: &'a CyclotomicCosets,
    first_exponent: usize,
    count: usize,
}

impl<'a> SyndromeCalculator<'a> {
    /// Calculator for the `count` syndromes starting at exponent `first_exponent`
    pub fn new(
        field: &'a GaloisField,
        cosets: &'a CyclotomicCosets,
        first_exponent: usize,
        count: usize,
    ) -> Self {
        SyndromeCalculator {
            field,
            cosets,
            first_exponent,
            count,
        }
    }

    /// Calculate the syndromes of `received`, which must already have length n
    pub fn compute(&self, received: &BitSlice<u8, Msb0>) -> Syndromes {
        let mut leader_values: Vec<Option<usize>> = vec![None; self.cosets.len()];

        let values = (self.first_exponent..self.first_exponent + self.count)
            .map(|exponent| {
                let index = self.cosets.index_of(exponent);
                let (leader, shift) = self.cosets.leader_of(exponent);
                let base = *leader_values[index]
                    .get_or_insert_with(|| evaluate(self.field, received, leader));
                (0..shift).fold(base, |s, _| self.field.square(s))
            })
            .collect();

        Syndromes::new(self.first_exponent, values)
    }

    /// Calculate each syndrome by its own Horner evaluation
    pub fn compute_direct(&self, received: &BitSlice<u8, Msb0>) -> Syndromes {
        let values = (self.first_exponent..self.first_exponent + self.count)
            .map(|exponent| evaluate(self.field, received, exponent))
            .collect();
        Syndromes::new(self.first_exponent, values)
    }
}
