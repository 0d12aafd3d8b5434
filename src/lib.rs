pub mod bch;
pub mod config;
pub mod error;
pub mod gf;
pub mod llr;

pub use bch::{BchCode, BchDecoder, Decoded, PositionOrder};
pub use error::{DecodeFailure, Error, Result};
pub use gf::GaloisField;
