//! Chien search for the roots of the error-locator polynomial.
//!
//! Evaluates `Λ` at `α^{-i}` for `i = 0..n-1`. A root at `α^{-i}` is the
//! inverse of the error locator `α^i`, i.e. an error in the coefficient of
//! `x^i`, so the sweep index is the error position directly.

use crate::bch::berlekamp_massey::ErrorLocator;
use crate::gf::GaloisField;

/// Precomputed stepping table for one field and capacity `t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChienSearch {
    group_order: usize,
    /// `steps[j] = α^{-j}`; multiplying slot j by it advances `α^{-ij}` to `α^{-(i+1)j}`
    steps: Vec<usize>,
}

impl ChienSearch {
    pub fn new(field: &GaloisField, t: usize) -> Self {
        ChienSearch {
            group_order: field.group_order(),
            steps: (0..=t).map(|j| field.alpha_inv_pow(j)).collect(),
        }
    }

    /// Number of accumulator slots, `t + 1`
    pub fn slots(&self) -> usize {
        self.steps.len()
    }

    /// Every `i` in `0..n` with `Λ(α^{-i}) = 0`, in ascending order.
    ///
    /// All `n` points are visited; there is no early exit once `deg Λ` roots
    /// have been found.
    pub fn roots(&self, field: &GaloisField, locator: &ErrorLocator) -> Vec<usize> {
        let mut accumulator = vec![0usize; self.steps.len()];
        for (slot, &c) in accumulator.iter_mut().zip(locator.coefficients()) {
            *slot = c;
        }

        let mut roots = Vec::new();
        for i in 0..self.group_order {
            // Inner product with the all-ones probe
            let value = accumulator.iter().fold(0, |acc, &a| acc ^ a);
            if value == 0 {
                roots.push(i);
            }

            for (slot, &step) in accumulator.iter_mut().zip(&self.steps) {
                *slot = field.mul(*slot, step);
            }
        }

        roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator_from_positions(field: &GaloisField, positions: &[usize], t: usize) -> ErrorLocator {
        // Π (1 + α^p x)
        let mut coefficients = vec![0usize; t + 1];
        coefficients[0] = 1;
        for &p in positions {
            let x = field.alpha_pow(p);
            for j in (1..=t).rev() {
                coefficients[j] ^= field.mul(coefficients[j - 1], x);
            }
        }
        ErrorLocator::new(coefficients, positions.len())
    }

    #[test]
    fn test_roots_are_positions() {
        let field = GaloisField::new(6, 0x43).unwrap();
        let search = ChienSearch::new(&field, 2);
        assert_eq!(search.slots(), 3);

        let locator = locator_from_positions(&field, &[5, 40], 2);
        assert_eq!(search.roots(&field, &locator), vec![5, 40]);
    }

    #[test]
    fn test_extreme_positions() {
        let field = GaloisField::new(6, 0x43).unwrap();
        let search = ChienSearch::new(&field, 2);
        let locator = locator_from_positions(&field, &[0, 62], 2);
        assert_eq!(search.roots(&field, &locator), vec![0, 62]);
    }

    #[test]
    fn test_scaled_locator_has_same_roots() {
        let field = GaloisField::new(8, 0x11D).unwrap();
        let search = ChienSearch::new(&field, 4);
        let locator = locator_from_positions(&field, &[3, 77, 150, 254], 4);
        let scaled = ErrorLocator::new(
            locator
                .coefficients()
                .iter()
                .map(|&c| field.mul(c, 0x53))
                .collect(),
            4,
        );
        assert_eq!(search.roots(&field, &scaled), vec![3, 77, 150, 254]);
    }

    #[test]
    fn test_irreducible_locator_has_no_roots() {
        let field = GaloisField::new(4, 0x13).unwrap();
        let search = ChienSearch::new(&field, 2);
        // α^3 + x + x^2 has trace-one constant term, so no roots in GF(16)
        let locator = ErrorLocator::new(vec![field.alpha_pow(3), 1, 1], 2);
        assert!(search.roots(&field, &locator).is_empty());

        let locator = ErrorLocator::new(vec![field.alpha_pow(1), 1, 1], 2);
        assert_eq!(search.roots(&field, &locator), vec![6, 8]);
    }
}
