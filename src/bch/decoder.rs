//! Hard-decision BCH decoding: syndromes, Berlekamp-Massey, Chien search.

use crate::bch::berlekamp_massey::BerlekampMassey;
use crate::bch::code::BchCode;
use crate::bch::positions::{map_positions, PositionOrder};
use crate::error::{DecodeFailure, Result};
use bitvec::prelude::*;
use rayon::prelude::*;

/// Result of decoding one received word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Error positions in the decoder's `PositionOrder`, ascending
    pub positions: Vec<usize>,
    /// The received word with every error flipped back
    pub corrected: BitVec<u8, Msb0>,
    /// The first k bits of `corrected`
    pub message: BitVec<u8, Msb0>,
}

impl Decoded {
    /// True when the received word was already a codeword
    pub fn is_clean(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.positions.len()
    }
}

/// Decoder bound to one `BchCode`. Holds no per-decode state.
#[derive(Debug, Clone, Copy)]
pub struct BchDecoder<'a> {
    code: &'a BchCode,
    order: PositionOrder,
}

impl<'a> BchDecoder<'a> {
    pub fn new(code: &'a BchCode) -> Self {
        BchDecoder {
            code,
            order: PositionOrder::default(),
        }
    }

    /// Report positions in the given convention instead of the default LSB order
    pub fn with_order(mut self, order: PositionOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> PositionOrder {
        self.order
    }

    pub fn code(&self) -> &'a BchCode {
        self.code
    }

    /// Error positions of `received` without building the corrected word.
    ///
    /// An empty vector means every syndrome was zero. More than `t` errors
    /// that the decoder can detect give `Error::Uncorrectable`.
    pub fn error_positions(&self, received: &BitSlice<u8, Msb0>) -> Result<Vec<usize>> {
        let degrees = self.locate(received)?;
        Ok(map_positions(&degrees, self.code.code_length(), self.order))
    }

    /// Decode data and correct errors if possible
    ///
    /// # Returns
    ///
    /// The error positions, corrected codeword and message, or
    /// `Error::LengthMismatch` for a word of the wrong length and
    /// `Error::Uncorrectable` when the syndromes match no pattern of `t`
    /// or fewer errors.
    pub fn decode(&self, received: &BitSlice<u8, Msb0>) -> Result<Decoded> {
        let degrees = self.locate(received)?;
        let n = self.code.code_length();

        let mut corrected = received.to_bitvec();
        for &degree in &degrees {
            let index = n - 1 - degree;
            let bit = corrected[index];
            corrected.set(index, !bit);
        }

        let message = corrected[..self.code.data_length()].to_bitvec();
        Ok(Decoded {
            positions: map_positions(&degrees, n, self.order),
            corrected,
            message,
        })
    }

    /// Decode independent received words in parallel, results in input order
    pub fn decode_all<W>(&self, words: &[W]) -> Vec<Result<Decoded>>
    where
        W: AsRef<BitSlice<u8, Msb0>> + Sync,
    {
        words
            .par_iter()
            .map(|word| self.decode(word.as_ref()))
            .collect()
    }

    /// Exponents `i` of the erroneous coefficients `x^i`, ascending
    fn locate(&self, received: &BitSlice<u8, Msb0>) -> Result<Vec<usize>> {
        let code = self.code;
        code.check_length(received)?;

        let syndromes = code.syndrome_calculator().compute(received);
        if !syndromes.has_error() {
            log::debug!("all {} syndromes zero", syndromes.len());
            return Ok(Vec::new());
        }

        let t = code.error_correction_capability();
        let locator = BerlekampMassey::new(code.field(), t)
            .run(syndromes.as_slice())
            .inspect_err(|failure| log::debug!("uncorrectable: {}", failure))?;

        let degree = locator.degree();
        if degree != locator.length() || degree == 0 {
            let failure = DecodeFailure::DegenerateLocator {
                degree,
                length: locator.length(),
            };
            log::debug!("uncorrectable: {}", failure);
            return Err(failure.into());
        }

        let roots = code.chien().roots(code.field(), &locator);
        if roots.len() != degree {
            let failure = DecodeFailure::RootCountMismatch {
                degree,
                roots: roots.len(),
            };
            log::debug!("uncorrectable: {}", failure);
            return Err(failure.into());
        }

        log::debug!("located {} errors at x^{:?}", roots.len(), roots);
        Ok(roots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bch::code::create_bch_63_51_2;
    use crate::error::Error;

    fn word(text: &str) -> BitVec<u8, Msb0> {
        text.chars().map(|c| c == '1').collect()
    }

    const CODEWORD: &str = "010010100001111110110100101010001110011010111010101110100000011";
    // CODEWORD with errors at x^20 and x^57
    const RECEIVED_A: &str = "010011100001111110110100101010001110011010011010101110100000011";
    // CODEWORD with errors at x^10 and x^40
    const RECEIVED_B: &str = "010010100001111110110110101010001110011010111010101100100000011";

    fn flip(word: &BitSlice<u8, Msb0>, degrees: &[usize]) -> BitVec<u8, Msb0> {
        let n = word.len();
        let mut flipped = word.to_bitvec();
        for &d in degrees {
            let bit = flipped[n - 1 - d];
            flipped.set(n - 1 - d, !bit);
        }
        flipped
    }

    #[test]
    fn test_reference_vectors() {
        let code = create_bch_63_51_2().unwrap();
        let decoder = code.decoder();

        let decoded = decoder.decode(&word(RECEIVED_A)).unwrap();
        assert_eq!(decoded.positions, vec![20, 57]);
        assert_eq!(decoded.corrected, word(CODEWORD));
        assert_eq!(decoded.message, word(&CODEWORD[..51]));

        let decoded = decoder.decode(&word(RECEIVED_B)).unwrap();
        assert_eq!(decoded.positions, vec![10, 40]);
        assert_eq!(decoded.corrected, word(CODEWORD));
    }

    #[test]
    fn test_msb_order() {
        let code = create_bch_63_51_2().unwrap();
        let decoder = code.decoder().with_order(PositionOrder::Msb);
        assert_eq!(decoder.order(), PositionOrder::Msb);

        let positions = decoder.error_positions(&word(RECEIVED_A)).unwrap();
        assert_eq!(positions, vec![5, 42]);
    }

    #[test]
    fn test_clean_codeword() {
        let code = create_bch_63_51_2().unwrap();
        let decoded = code.decoder().decode(&word(CODEWORD)).unwrap();
        assert!(decoded.is_clean());
        assert_eq!(decoded.error_count(), 0);
        assert_eq!(decoded.corrected, word(CODEWORD));
    }

    #[test]
    fn test_all_zero_codeword() {
        let code = create_bch_63_51_2().unwrap();
        let zero = bitvec![u8, Msb0; 0; 63];
        let decoded = code.decoder().decode(&zero).unwrap();
        assert!(decoded.positions.is_empty());
        assert_eq!(decoded.corrected, zero);
        assert!(decoded.message.not_any());
        assert_eq!(decoded.message.len(), 51);
    }

    #[test]
    fn test_flip_5_and_40() {
        let code = create_bch_63_51_2().unwrap();
        let codeword = word(CODEWORD);
        let received = flip(&codeword, &[5, 40]);

        let decoded = code.decoder().decode(&received).unwrap();
        assert_eq!(decoded.positions, vec![5, 40]);
        assert_eq!(decoded.corrected, codeword);
    }

    #[test]
    fn test_extreme_positions() {
        let code = create_bch_63_51_2().unwrap();
        let codeword = word(CODEWORD);
        let received = flip(&codeword, &[0, 62]);

        let decoded = code.decoder().decode(&received).unwrap();
        assert_eq!(decoded.positions, vec![0, 62]);
        assert_eq!(decoded.corrected, codeword);
    }

    #[test]
    fn test_decoding_is_idempotent() {
        let code = create_bch_63_51_2().unwrap();
        let decoder = code.decoder();
        let first = decoder.decode(&word(RECEIVED_A)).unwrap();
        let second = decoder.decode(&first.corrected).unwrap();
        assert!(second.is_clean());
        assert_eq!(second.corrected, first.corrected);
    }

    #[test]
    fn test_three_errors_detected() {
        let code = create_bch_63_51_2().unwrap();
        let codeword = word(CODEWORD);

        for degrees in [[0, 1, 2], [5, 17, 40], [10, 20, 30], [7, 8, 9]] {
            let result = code.decoder().decode(&flip(&codeword, &degrees));
            match result {
                Err(e) => assert!(e.is_uncorrectable(), "{:?}: {}", degrees, e),
                Ok(decoded) => panic!("{:?} decoded to {:?}", degrees, decoded.positions),
            }
        }
    }

    #[test]
    fn test_wrong_length_rejected() {
        let code = create_bch_63_51_2().unwrap();
        let long = bitvec![u8, Msb0; 0; 64];
        let result = code.decoder().decode(&long);
        assert!(matches!(
            result,
            Err(Error::LengthMismatch {
                length: 64,
                expected: 63
            })
        ));
    }

    #[test]
    fn test_decode_all_keeps_order() {
        let code = create_bch_63_51_2().unwrap();
        let words = vec![
            word(RECEIVED_A),
            word(CODEWORD),
            flip(&word(CODEWORD), &[0, 1, 2]),
            word(RECEIVED_B),
        ];

        let results = code.decoder().decode_all(&words);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().positions, vec![20, 57]);
        assert!(results[1].as_ref().unwrap().is_clean());
        assert!(results[2].as_ref().unwrap_err().is_uncorrectable());
        assert_eq!(results[3].as_ref().unwrap().positions, vec![10, 40]);
    }
}
