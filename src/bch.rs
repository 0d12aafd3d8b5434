//! Binary BCH (Bose-Chaudhuri-Hocquenghem) codes.
//!
//! BCH codes are cyclic error-correcting codes over GF(2) whose generator
//! polynomial has `α^b, α^(b+1), ..., α^(b+2t-1)` among its roots, which lets
//! them correct up to `t` bit errors per n-bit block.
//!
//! Decoding a received word runs, in order:
//!
//! - [`SyndromeCalculator`]: evaluates the word at the `2t` roots
//! - [`BerlekampMassey`]: derives the error-locator polynomial from the syndromes
//! - [`ChienSearch`]: finds the locator's roots, which give the error positions
//! - [`BchDecoder`]: checks the results for consistency and flips the bad bits
//!
//! # Examples
//!
//! ```rust
//! use bch_decoder::bch::BchCode;
//! use bitvec::prelude::*;
//!
//! let code = BchCode::create_standard(63, 51, 2).unwrap();
//! let message = bitvec![u8, Msb0; 1; 51];
//! let mut received = code.encode(&message).unwrap();
//!
//! // Corrupt the coefficients of x^5 and x^40
//! for degree in [5, 40] {
//!     let index = 62 - degree;
//!     let bit = received[index];
//!     received.set(index, !bit);
//! }
//!
//! let decoded = code.decoder().decode(&received).unwrap();
//! assert_eq!(decoded.positions, vec![5, 40]);
//! assert_eq!(decoded.message, message);
//! ```

use std::fmt::{Display, Formatter};

pub mod berlekamp_massey;
pub mod chien;
pub mod code;
pub mod coset;
pub mod decoder;
pub mod generator;
pub mod positions;
pub mod syndrome;

pub use berlekamp_massey::{BerlekampMassey, BmStep, ErrorLocator};
pub use chien::ChienSearch;
pub use code::{create_bch_1023_983_4, create_bch_255_239_2, create_bch_63_51_2, BchCode};
pub use coset::CyclotomicCosets;
pub use decoder::{BchDecoder, Decoded};
pub use positions::{map_positions, PositionOrder};
pub use syndrome::{SyndromeCalculator, Syndromes};

/// Summary of a code's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeParameters {
    /// Field order, GF(2^m)
    pub m: usize,
    /// Code length, `2^m - 1`
    pub n: usize,
    /// Message length
    pub k: usize,
    /// Correctable errors
    pub t: usize,
    /// Exponent of the first syndrome
    pub b: usize,
}

impl CodeParameters {
    /// Number of parity bits, `n - k`
    pub fn parity_bits(&self) -> usize {
        self.n - self.k
    }

    /// Designed minimum distance, `2t + 1`
    pub fn designed_distance(&self) -> usize {
        2 * self.t + 1
    }
}

impl Display for CodeParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "m = {}, n = {}, k = {}, t = {}, b = {}",
            self.m, self.n, self.k, self.t, self.b
        )
    }
}
