//! Log-likelihood-ratio test vectors and the hard-decision boundary.
//!
//! Test-vector files carry one row of text per line, each row being 64
//! `'0'`/`'1'` characters: eight signed 8-bit LLRs in two's complement.
//! A codeword of length n takes `ceil((n + 1) / 8)` rows, giving LLR0..LLRn.
//! LLR0 is unused; LLRi is the channel value for the coefficient of
//! `x^(n-i)`, so LLR1 becomes the first (MSB) bit of the received word.
//!
//! Answer files list the expected error positions as one binary number per
//! line, `t` lines per codeword, in LSB (degree) order.

use crate::error::{Error, Result};
use bitvec::prelude::*;

/// Bits per LLR value
pub const LLR_BITS: usize = 8;

/// LLR values per text row
pub const LLRS_PER_ROW: usize = 8;

/// Hard decision for an LLR of exactly zero.
///
/// A positive LLR favours bit 0 and a negative one favours bit 1; a zero
/// LLR carries no information and is decided as bit 0.
pub const ZERO_LLR_BIT: bool = false;

/// Hard decision for one signed LLR
pub fn hard_decision(llr: i8) -> bool {
    match llr {
        0 => ZERO_LLR_BIT,
        l => l < 0,
    }
}

/// Parse eight `'0'`/`'1'` characters as a two's complement `i8`
pub fn parse_llr_byte(bits: &str) -> Result<i8> {
    if bits.len() != LLR_BITS {
        return Err(Error::InvalidInput(format!(
            "LLR must be {} bits, got '{}'",
            LLR_BITS, bits
        )));
    }
    let value = u8::from_str_radix(bits, 2)
        .map_err(|_| Error::InvalidInput(format!("LLR '{}' is not a binary number", bits)))?;
    Ok(value as i8)
}

/// Rows of text needed for one codeword of length n
pub fn rows_per_codeword(n: usize) -> usize {
    (n + 1).div_ceil(LLRS_PER_ROW)
}

/// The n + 1 LLRs of one received codeword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlrFrame {
    llrs: Vec<i8>,
}

impl LlrFrame {
    /// Frame for a code of length `llrs.len() - 1`, LLR0 included
    pub fn new(llrs: Vec<i8>) -> Result<Self> {
        if llrs.len() < 2 {
            return Err(Error::InvalidInput(format!(
                "an LLR frame needs at least 2 values, got {}",
                llrs.len()
            )));
        }
        Ok(LlrFrame { llrs })
    }

    /// Code length covered by this frame
    pub fn code_length(&self) -> usize {
        self.llrs.len() - 1
    }

    /// LLR0..LLRn
    pub fn llrs(&self) -> &[i8] {
        &self.llrs
    }

    /// LLR of the coefficient of `x^degree`
    pub fn llr_for_degree(&self, degree: usize) -> i8 {
        self.llrs[self.code_length() - degree]
    }

    /// Hard-decision received word, MSB (LLR1) first
    pub fn hard_decisions(&self) -> BitVec<u8, Msb0> {
        self.llrs[1..].iter().map(|&llr| hard_decision(llr)).collect()
    }
}

/// Parse every codeword in a test-vector file.
///
/// Blank lines are skipped. The number of codewords is however many whole
/// groups of `rows_per_codeword(n)` rows the file holds; leftover rows are
/// an error.
pub fn parse_llr_rows<S: AsRef<str>>(lines: &[S], n: usize) -> Result<Vec<LlrFrame>> {
    let rows: Vec<&str> = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .collect();

    let group = rows_per_codeword(n);
    if rows.len() % group != 0 {
        return Err(Error::InvalidInput(format!(
            "{} rows is not a whole number of {}-row codewords",
            rows.len(),
            group
        )));
    }

    rows.chunks(group)
        .enumerate()
        .map(|(index, chunk)| {
            let bits: String = chunk.concat();
            let llrs = bits
                .as_bytes()
                .chunks(LLR_BITS)
                .filter(|byte| byte.len() == LLR_BITS)
                .map(|byte| {
                    std::str::from_utf8(byte)
                        .map_err(|_| Error::InvalidInput("LLR row is not ASCII".to_string()))
                        .and_then(parse_llr_byte)
                })
                .collect::<Result<Vec<i8>>>()?;

            if llrs.len() < n + 1 {
                return Err(Error::InvalidInput(format!(
                    "codeword {} has {} LLR values, need {}",
                    index + 1,
                    llrs.len(),
                    n + 1
                )));
            }

            LlrFrame::new(llrs[..=n].to_vec())
        })
        .collect()
}

/// Group answer lines into expected position sets, `t` lines per codeword
pub fn parse_answer_lines<S: AsRef<str>>(lines: &[S], t: usize) -> Result<Vec<Vec<usize>>> {
    if t == 0 {
        return Err(Error::InvalidInput(
            "answers need a positive error capability".to_string(),
        ));
    }

    let positions = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .map(|line| {
            usize::from_str_radix(line, 2).map_err(|_| {
                Error::InvalidInput(format!("answer '{}' is not a binary number", line))
            })
        })
        .collect::<Result<Vec<usize>>>()?;

    Ok(positions.chunks(t).map(<[usize]>::to_vec).collect())
}
