//! Inversion-free Berlekamp-Massey algorithm.
//!
//! Derives the error-locator polynomial `Λ(x)` from the `2t` syndromes
//! without any field division. The classical normalisation by the previous
//! discrepancy is replaced by scaling the current locator with `γ`, the last
//! nonzero discrepancy that changed the register length, so the result is
//! the locator up to a nonzero constant factor. Constant factors do not move
//! roots.
//!
//! For `r = 1..=2t`:
//!
//! ```text
//! δ  = Σ_{i=0}^{min(t, r-1)} Λ_i · S_{r-1-i}
//! Λ' = γ·Λ - δ·x·B
//! if δ ≠ 0 and k ≥ 0:  x·B ← x·Λ,  γ ← δ,  k ← -k - 1
//! else:                x·B ← x·(x·B),        k ← k + 1
//! ```

use crate::error::DecodeFailure;
use crate::gf::GaloisField;

/// Error-locator polynomial; coefficients in ascending degree, `t + 1` slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocator {
    coefficients: Vec<usize>,
    /// LFSR length reached by Berlekamp-Massey
    length: usize,
}

impl ErrorLocator {
    pub fn new(coefficients: Vec<usize>, length: usize) -> Self {
        ErrorLocator {
            coefficients,
            length,
        }
    }

    /// True degree: index of the highest nonzero coefficient
    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .rposition(|&c| c != 0)
            .unwrap_or(0)
    }

    /// Register length `L`; equals the degree for a correctable pattern
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn coefficients(&self) -> &[usize] {
        &self.coefficients
    }

    pub fn evaluate(&self, field: &GaloisField, x: usize) -> usize {
        field.eval_poly(&self.coefficients, x)
    }
}

/// Snapshot of one iteration, handed to the trace callback
#[derive(Debug, Clone)]
pub struct BmStep<'s> {
    /// Iteration number, `1..=2t`
    pub r: usize,
    /// Syndromes `S_{r-1}, S_{r-2}, ...` paired with `Λ_0, Λ_1, ...`
    pub window: Vec<usize>,
    pub delta: usize,
    pub gamma: usize,
    pub k: isize,
    pub lambda_before: &'s [usize],
    pub lambda_after: &'s [usize],
    /// `x·B` after the update
    pub aux_after: &'s [usize],
}

/// Berlekamp-Massey state for one decode.
#[derive(Debug)]
pub struct BerlekampMassey<'a> {
    field: &'a GaloisField,
    t: usize,
}

impl<'a> BerlekampMassey<'a> {
    pub fn new(field: &'a GaloisField, t: usize) -> Self {
        BerlekampMassey { field, t }
    }

    /// Run over `2t` syndromes, logging every step at trace level
    pub fn run(&self, syndromes: &[usize]) -> Result<ErrorLocator, DecodeFailure> {
        self.run_with(syndromes, |step| {
            log::trace!(
                "bm r={} window={:?} delta={} gamma={} k={} lambda={:?} -> {:?} b={:?}",
                step.r,
                step.window,
                step.delta,
                step.gamma,
                step.k,
                step.lambda_before,
                step.lambda_after,
                step.aux_after
            );
        })
    }

    /// Run over `2t` syndromes, calling `trace` after every step.
    ///
    /// Stops with `LocatorDegreeExceeded` as soon as the register length
    /// passes `t`; the length never shrinks, so no later step can recover.
    pub fn run_with<F>(&self, syndromes: &[usize], mut trace: F) -> Result<ErrorLocator, DecodeFailure>
    where
        F: FnMut(&BmStep<'_>),
    {
        let t = self.t;
        let field = self.field;

        let mut lambda = vec![0usize; t + 1];
        lambda[0] = 1;
        // Holds x·B, so aux[0] is always zero
        let mut aux = vec![0usize; t + 2];
        aux[1] = 1;
        let mut gamma = 1usize;
        let mut k: isize = 0;
        let mut length = 0usize;

        for r in 1..=syndromes.len() {
            let width = t.min(r - 1) + 1;
            let window: Vec<usize> = (0..width).map(|i| syndromes[r - 1 - i]).collect();
            let delta = field.dot(&window, &lambda);

            let previous = lambda.clone();
            for (i, coefficient) in lambda.iter_mut().enumerate() {
                *coefficient = field.mul(gamma, *coefficient) ^ field.mul(delta, aux[i]);
            }

            let step_gamma = gamma;
            let step_k = k;
            if delta != 0 && k >= 0 {
                aux[1..].copy_from_slice(&previous);
                gamma = delta;
                k = -k - 1;
                length = r - length;
            } else {
                aux.copy_within(0..=t, 1);
                aux[0] = 0;
                k += 1;
            }

            trace(&BmStep {
                r,
                window,
                delta,
                gamma: step_gamma,
                k: step_k,
                lambda_before: &previous,
                lambda_after: &lambda,
                aux_after: &aux,
            });

            if length > t {
                return Err(DecodeFailure::LocatorDegreeExceeded { length, t });
            }
        }

        Ok(ErrorLocator::new(lambda, length))
    }
}
