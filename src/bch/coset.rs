//! Cyclotomic cosets of 2 modulo n.
//!
//! The coset of `i` is `{i, 2i, 4i, ...} mod n`. For a binary code the
//! syndromes of conjugate exponents are related by squaring,
//! `S_{2e} = S_e^2`, so one Horner evaluation per coset is enough. The same
//! cosets give the roots of each minimal polynomial used to build the
//! generator polynomial.

use std::ops::Range;

/// Partition of the exponents modulo `n` into cyclotomic cosets.
///
/// Exponent `n` is congruent to `0`, so the partition covers `{0, 1, ..., n-1}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclotomicCosets {
    modulus: usize,
    /// Each coset in generation order; `coset[0]` is its smallest member
    cosets: Vec<Vec<usize>>,
    /// For each exponent: (coset index, s) with `exponent = leader * 2^s mod n`
    membership: Vec<(usize, usize)>,
}

impl CyclotomicCosets {
    pub fn new(modulus: usize) -> Self {
        let mut cosets: Vec<Vec<usize>> = Vec::new();
        let mut membership = vec![(usize::MAX, 0); modulus];

        for i in 0..modulus {
            if membership[i].0 != usize::MAX {
                continue;
            }

            let index = cosets.len();
            let mut coset = Vec::new();
            let mut x = i;

            // Keep multiplying by 2 (mod n) until we cycle back to the start
            while membership[x].0 == usize::MAX {
                membership[x] = (index, coset.len());
                coset.push(x);
                x = (2 * x) % modulus;
            }

            cosets.push(coset);
        }

        CyclotomicCosets {
            modulus,
            cosets,
            membership,
        }
    }

    pub fn modulus(&self) -> usize {
        self.modulus
    }

    /// Number of cosets in the partition
    pub fn len(&self) -> usize {
        self.cosets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cosets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.cosets.iter().map(Vec::as_slice)
    }

    /// Index of the coset containing `exponent`
    pub fn index_of(&self, exponent: usize) -> usize {
        self.membership[exponent % self.modulus].0
    }

    /// The coset containing `exponent`
    pub fn coset_of(&self, exponent: usize) -> &[usize] {
        &self.cosets[self.index_of(exponent)]
    }

    /// The coset leader `l` and squaring count `s` with `exponent ≡ l·2^s (mod n)`
    pub fn leader_of(&self, exponent: usize) -> (usize, usize) {
        let (index, shift) = self.membership[exponent % self.modulus];
        (self.cosets[index][0], shift)
    }

    /// Distinct cosets, in first-seen order, containing the exponents in `range`
    pub fn covering(&self, range: Range<usize>) -> Vec<&[usize]> {
        let mut seen = Vec::new();
        for exponent in range {
            let index = self.index_of(exponent);
            if !seen.contains(&index) {
                seen.push(index);
            }
        }
        seen.into_iter()
            .map(|index| self.cosets[index].as_slice())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosets_mod_15() {
        let cosets = CyclotomicCosets::new(15);
        let all: Vec<&[usize]> = cosets.iter().collect();
        assert_eq!(
            all,
            vec![
                &[0][..],
                &[1, 2, 4, 8][..],
                &[3, 6, 12, 9][..],
                &[5, 10][..],
                &[7, 14, 13, 11][..],
            ]
        );
    }

    #[test]
    fn test_partition_covers_every_exponent_once() {
        for modulus in [7, 15, 31, 63, 255] {
            let cosets = CyclotomicCosets::new(modulus);
            let mut seen = vec![0usize; modulus];
            for coset in cosets.iter() {
                for &e in coset {
                    seen[e] += 1;
                }
            }
            assert!(seen.iter().all(|&count| count == 1));
        }
    }

    #[test]
    fn test_leader_and_shift() {
        let cosets = CyclotomicCosets::new(63);
        for e in 0..63 {
            let (leader, shift) = cosets.leader_of(e);
            assert_eq!((leader << shift) % 63, e);
            assert!(leader <= e);
        }
        // Exponent n wraps to 0
        assert_eq!(cosets.leader_of(63), (0, 0));
        assert_eq!(cosets.coset_of(9), &[9, 18, 36][..]);
    }

    #[test]
    fn test_covering_narrow_sense_t2() {
        let cosets = CyclotomicCosets::new(63);
        // Exponents 1..=4 need only the cosets of 1 and 3
        let covering = cosets.covering(1..5);
        assert_eq!(covering.len(), 2);
        assert_eq!(covering[0][0], 1);
        assert_eq!(covering[1][0], 3);
        assert_eq!(covering[0].len() + covering[1].len(), 12);
    }
}
