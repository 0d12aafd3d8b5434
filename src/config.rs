//! Named code configurations for the reference test vectors.

use crate::bch::BchCode;
use crate::error::{Error, Result};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The three codes exercised by the hardware test vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodePreset {
    /// (63, 51) BCH, t = 2
    P100,
    /// (255, 239) BCH, t = 2
    P200,
    /// (1023, 983) BCH, t = 4
    P300,
}

impl CodePreset {
    pub const ALL: [CodePreset; 3] = [CodePreset::P100, CodePreset::P200, CodePreset::P300];

    /// Field order m
    pub fn field_order(self) -> usize {
        match self {
            CodePreset::P100 => 6,
            CodePreset::P200 => 8,
            CodePreset::P300 => 10,
        }
    }

    pub fn code_length(self) -> usize {
        (1 << self.field_order()) - 1
    }

    pub fn data_length(self) -> usize {
        self.code_length() - self.field_order() * self.error_correction_capability()
    }

    pub fn error_correction_capability(self) -> usize {
        match self {
            CodePreset::P100 | CodePreset::P200 => 2,
            CodePreset::P300 => 4,
        }
    }

    /// Human-readable code name, e.g. "(63, 51) BCH"
    pub fn name(self) -> String {
        format!("({}, {}) BCH", self.code_length(), self.data_length())
    }

    /// LLR input file name inside the test-data directory
    pub fn input_file(self) -> String {
        format!("p{}.txt", self)
    }

    /// Expected-answer file name inside the test-data directory
    pub fn answer_file(self) -> String {
        format!("p{}a.txt", self)
    }

    /// Build the code with the default primitive polynomial for m
    pub fn build(self) -> Result<BchCode> {
        BchCode::create_standard(
            self.code_length(),
            self.data_length(),
            self.error_correction_capability(),
        )
    }
}

impl Display for CodePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CodePreset::P100 => "100",
            CodePreset::P200 => "200",
            CodePreset::P300 => "300",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CodePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CodePreset::ALL
            .into_iter()
            .find(|preset| preset.to_string() == s)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unknown code '{}', expected one of 100, 200, 300",
                    s
                ))
            })
    }
}
