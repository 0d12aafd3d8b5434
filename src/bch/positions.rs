//! Mapping Chien-search indices to reported bit positions.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// Bit-indexing convention for reported error positions.
///
/// Codewords are always stored MSB first: vector index 0 holds the
/// coefficient of `x^(n-1)`. Only the numbers handed to the caller change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PositionOrder {
    /// Position `p` is the coefficient of `x^p`; 0 is the last bit of the vector
    #[default]
    Lsb,
    /// Position `p` is the index into the MSB-first vector
    Msb,
}

impl PositionOrder {
    /// Reported position of the error in the coefficient of `x^degree`
    pub fn position_of(self, degree: usize, n: usize) -> usize {
        match self {
            PositionOrder::Lsb => degree,
            PositionOrder::Msb => n - 1 - degree,
        }
    }

    /// Index into the MSB-first vector of a reported position
    pub fn vector_index(self, position: usize, n: usize) -> usize {
        match self {
            PositionOrder::Lsb => n - 1 - position,
            PositionOrder::Msb => position,
        }
    }
}

impl Display for PositionOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionOrder::Lsb => write!(f, "lsb"),
            PositionOrder::Msb => write!(f, "msb"),
        }
    }
}

impl FromStr for PositionOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lsb" => Ok(PositionOrder::Lsb),
            "msb" => Ok(PositionOrder::Msb),
            other => Err(Error::InvalidInput(format!(
                "unknown position order '{}', expected 'lsb' or 'msb'",
                other
            ))),
        }
    }
}

/// Map Chien-search roots to sorted positions in the given convention
pub fn map_positions(roots: &[usize], n: usize, order: PositionOrder) -> Vec<usize> {
    let mut positions: Vec<usize> = roots
        .iter()
        .map(|&degree| order.position_of(degree, n))
        .collect();
    positions.sort_unstable();
    positions
}
