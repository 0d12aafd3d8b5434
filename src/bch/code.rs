//! Validated BCH code configuration and systematic encoder.

use crate::bch::chien::ChienSearch;
use crate::bch::coset::CyclotomicCosets;
use crate::bch::decoder::BchDecoder;
use crate::bch::generator::{degree, generator_polynomial};
use crate::bch::syndrome::{SyndromeCalculator, Syndromes};
use crate::bch::CodeParameters;
use crate::error::{Error, Result};
use crate::gf::GaloisField;
use bitvec::prelude::*;
use std::fmt::{Display, Formatter};

/// Binary BCH code of length `n = 2^m - 1` correcting up to `t` errors.
///
/// Everything here is computed once and read-only afterwards; decoders
/// borrow the code, so one `BchCode` can serve many threads.
#[derive(Debug, Clone)]
pub struct BchCode {
    field: GaloisField,
    cosets: CyclotomicCosets,
    chien: ChienSearch,
    /// Maximum number of errors that can be corrected (t)
    error_correction_capability: usize,
    /// Exponent of the first syndrome (b)
    first_exponent: usize,
    /// Number of data bits (k) in each code word
    data_length: usize,
    /// Generator polynomial coefficients, ascending degree
    generator_poly: Vec<bool>,
}

impl BchCode {
    /// Create a narrow-sense (`b = 1`) BCH code
    ///
    /// # Arguments
    ///
    /// * `field_order` - Field size parameter m (code works in GF(2^m))
    /// * `error_correction_capability` - Number of errors the code can correct (t)
    /// * `primitive_poly` - Optional primitive polynomial defining the field
    ///
    /// # Returns
    ///
    /// A new `BchCode` instance or an error if invalid parameters
    pub fn new(
        field_order: usize,
        error_correction_capability: usize,
        primitive_poly: Option<u32>,
    ) -> Result<Self> {
        let field = match primitive_poly {
            Some(poly) => GaloisField::new(field_order, poly)?,
            None => GaloisField::with_default_poly(field_order)?,
        };
        Self::with_first_exponent(field, error_correction_capability, 1)
    }

    /// Create a BCH code whose syndromes start at `α^first_exponent`
    pub fn with_first_exponent(
        field: GaloisField,
        error_correction_capability: usize,
        first_exponent: usize,
    ) -> Result<Self> {
        let code_length = field.group_order();

        if error_correction_capability == 0 {
            return Err(Error::InvalidConfiguration(
                "error correction capability must be positive".to_string(),
            ));
        }

        if 2 * error_correction_capability >= code_length {
            return Err(Error::InvalidConfiguration(format!(
                "error correction capability too large: max is {}, got {}",
                (code_length - 1) / 2,
                error_correction_capability
            )));
        }

        let cosets = CyclotomicCosets::new(code_length);
        let generator_poly = generator_polynomial(
            &field,
            &cosets,
            first_exponent..first_exponent + 2 * error_correction_capability,
        )?;

        let generator_degree = degree(&generator_poly);
        if generator_degree >= code_length {
            return Err(Error::InvalidConfiguration(format!(
                "generator polynomial degree ({}) must be less than code length ({})",
                generator_degree, code_length
            )));
        }

        let data_length = code_length - generator_degree;
        let chien = ChienSearch::new(&field, error_correction_capability);

        log::debug!(
            "built BCH({},{},{}) over {} with b = {}",
            code_length,
            data_length,
            error_correction_capability,
            field,
            first_exponent
        );

        Ok(BchCode {
            field,
            cosets,
            chien,
            error_correction_capability,
            first_exponent,
            data_length,
            generator_poly,
        })
    }

    /// Create a standard (n,k,t) narrow-sense BCH code
    ///
    /// # Arguments
    ///
    /// * `n` - Code length (must be 2^m - 1 for some m)
    /// * `k` - Data length (must match the generator polynomial)
    /// * `t` - Error correction capability
    pub fn create_standard(n: usize, k: usize, t: usize) -> Result<Self> {
        let field_order = (n + 1).trailing_zeros() as usize;
        if n == 0 || (n + 1).count_ones() != 1 {
            return Err(Error::InvalidConfiguration(format!(
                "code length must be 2^m - 1 for some m, got {}",
                n
            )));
        }

        let code = Self::new(field_order, t, None)?;
        if k != code.data_length {
            return Err(Error::InvalidConfiguration(format!(
                "data length mismatch: BCH({}, _, {}) has k = {}, but {} was requested",
                n, t, code.data_length, k
            )));
        }

        Ok(code)
    }

    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    pub fn cosets(&self) -> &CyclotomicCosets {
        &self.cosets
    }

    pub fn chien(&self) -> &ChienSearch {
        &self.chien
    }

    /// Field order parameter (m)
    pub fn field_order(&self) -> usize {
        self.field.field_order()
    }

    /// Get the code length (n)
    pub fn code_length(&self) -> usize {
        self.field.group_order()
    }

    /// Get the data length (k)
    pub fn data_length(&self) -> usize {
        self.data_length
    }

    /// Get the error correction capability (t)
    pub fn error_correction_capability(&self) -> usize {
        self.error_correction_capability
    }

    /// Exponent of the first syndrome (b)
    pub fn first_exponent(&self) -> usize {
        self.first_exponent
    }

    pub fn parameters(&self) -> CodeParameters {
        CodeParameters {
            m: self.field_order(),
            n: self.code_length(),
            k: self.data_length,
            t: self.error_correction_capability,
            b: self.first_exponent,
        }
    }

    /// Generator polynomial, ascending degree
    pub fn generator_poly(&self) -> &[bool] {
        &self.generator_poly
    }

    /// Reject a received word whose length is not n
    pub fn check_length(&self, received: &BitSlice<u8, Msb0>) -> Result<()> {
        if received.len() != self.code_length() {
            return Err(Error::LengthMismatch {
                length: received.len(),
                expected: self.code_length(),
            });
        }
        Ok(())
    }

    pub fn syndrome_calculator(&self) -> SyndromeCalculator<'_> {
        SyndromeCalculator::new(
            &self.field,
            &self.cosets,
            self.first_exponent,
            2 * self.error_correction_capability,
        )
    }

    /// The `2t` syndromes of a length-n received word
    pub fn syndromes(&self, received: &BitSlice<u8, Msb0>) -> Result<Syndromes> {
        self.check_length(received)?;
        Ok(self.syndrome_calculator().compute(received))
    }

    /// Systematically encode `k` message bits into an n-bit codeword
    ///
    /// The message fills the first k (highest-degree) positions and the
    /// parity is `m(x)·x^(n-k) mod g(x)`.
    pub fn encode(&self, message: &BitSlice<u8, Msb0>) -> Result<BitVec<u8, Msb0>> {
        if message.len() != self.data_length {
            return Err(Error::LengthMismatch {
                length: message.len(),
                expected: self.data_length,
            });
        }

        let mut codeword = message.to_bitvec();
        codeword.extend_from_bitslice(&self.calculate_parity(message));
        Ok(codeword)
    }

    /// The first k bits of a codeword
    pub fn extract_message(&self, codeword: &BitSlice<u8, Msb0>) -> Result<BitVec<u8, Msb0>> {
        self.check_length(codeword)?;
        Ok(codeword[..self.data_length].to_bitvec())
    }

    pub fn decoder(&self) -> BchDecoder<'_> {
        BchDecoder::new(self)
    }

    /// Calculate parity bits for the given message using polynomial division
    fn calculate_parity(&self, message: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
        let parity_len = self.code_length() - self.data_length;

        // Message followed by n-k zeros, highest degree first
        let mut remainder = message.to_bitvec();
        remainder.resize(self.code_length(), false);

        for i in 0..message.len() {
            if !remainder[i] {
                continue;
            }

            // generator_poly[parity_len - j] is the coefficient aligned with remainder[i + j]
            for j in 0..=parity_len {
                if self.generator_poly[parity_len - j] {
                    let bit = remainder[i + j];
                    remainder.set(i + j, !bit);
                }
            }
        }

        remainder[message.len()..].to_bitvec()
    }
}

impl Display for BchCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BCH({},{},{}) over GF(2^{})",
            self.code_length(),
            self.data_length,
            self.error_correction_capability,
            self.field_order()
        )
    }
}

/// (63,51) code with t = 2 over GF(2^6) mod x^6 + x + 1
pub fn create_bch_63_51_2() -> Result<BchCode> {
    BchCode::create_standard(63, 51, 2)
}

/// (255,239) code with t = 2 over GF(2^8)
pub fn create_bch_255_239_2() -> Result<BchCode> {
    BchCode::create_standard(255, 239, 2)
}

/// (1023,983) code with t = 4 over GF(2^10)
pub fn create_bch_1023_983_4() -> Result<BchCode> {
    BchCode::create_standard(1023, 983, 4)
}
