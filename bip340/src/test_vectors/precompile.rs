//! Precompile test-vector records.
//!
//! These are the JSON fixtures shared with other virtual machine
//! implementations: an array of objects with the fields `Input`,
//! `Expected`, `Gas`, `Name` and `NoBenchmark`.

use crate::precompile::{Precompile, PrecompileError, OUTPUT_LENGTH};
use alloc::{string::String, vec::Vec};
use core::fmt;
use serde::{Deserialize, Serialize};

/// A single precompile test vector.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestVector {
    /// Hex-encoded call data.
    pub input: String,

    /// Hex-encoded output word. Empty means the all-zero word.
    pub expected: String,

    /// Gas the call is given and must consume.
    pub gas: u64,

    /// Human readable label.
    pub name: String,

    /// Exclude this vector from benchmarks.
    #[serde(default)]
    pub no_benchmark: bool,
}

impl TestVector {
    /// Decode the call data.
    pub fn input_bytes(&self) -> Result<Vec<u8>, VectorError> {
        hex::decode(&self.input).map_err(VectorError::Hex)
    }

    /// Decode the expected output word.
    pub fn expected_output(&self) -> Result<[u8; OUTPUT_LENGTH], VectorError> {
        let mut word = [0u8; OUTPUT_LENGTH];
        if !self.expected.is_empty() {
            hex::decode_to_slice(&self.expected, &mut word).map_err(VectorError::Hex)?;
        }
        Ok(word)
    }

    /// Run the vector against `precompile` with exactly [`Self::gas`] gas.
    pub fn check<P: Precompile>(&self, precompile: &P) -> Result<(), VectorError> {
        let input = self.input_bytes()?;
        let expected = self.expected_output()?;

        let output = precompile
            .run(self.gas, &input)
            .map_err(VectorError::Precompile)?;

        if output.gas_used != self.gas {
            return Err(VectorError::GasMismatch {
                expected: self.gas,
                actual: output.gas_used,
            });
        }

        if output.bytes.as_ref() != &expected[..] {
            return Err(VectorError::OutputMismatch);
        }

        Ok(())
    }
}

/// Reasons a [`TestVector`] fails.
#[derive(Clone, Debug, PartialEq)]
pub enum VectorError {
    /// A hex field did not decode.
    Hex(hex::FromHexError),

    /// The precompile failed fatally.
    Precompile(PrecompileError),

    /// The call consumed a different amount of gas.
    GasMismatch {
        /// Gas recorded in the vector.
        expected: u64,
        /// Gas the precompile reported.
        actual: u64,
    },

    /// The output word differs from the expected one.
    OutputMismatch,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(err) => write!(f, "invalid hex: {err}"),
            Self::Precompile(err) => write!(f, "precompile failed: {err}"),
            Self::GasMismatch { expected, actual } => {
                write!(f, "gas mismatch: expected {expected}, used {actual}")
            }
            Self::OutputMismatch => f.write_str("output mismatch"),
        }
    }
}

impl core::error::Error for VectorError {}

#[cfg(test)]
mod tests {
    use super::{TestVector, VectorError};
    use crate::{
        precompile::{encode_bool, PrecompileError, SchnorrVerify},
        test_vectors::bip340::VERIFY_VECTORS,
    };
    use alloc::string::ToString;

    fn vector(input: &str, expected: &str) -> TestVector {
        TestVector {
            input: input.to_string(),
            expected: expected.to_string(),
            gas: 3000,
            name: "test".to_string(),
            no_benchmark: false,
        }
    }

    #[test]
    fn empty_expected_is_zero_word() {
        assert_eq!(vector("", "").expected_output().unwrap(), [0u8; 32]);
        assert_eq!(
            vector("", &hex::encode(encode_bool(true)))
                .expected_output()
                .unwrap(),
            encode_bool(true)
        );
    }

    #[test]
    fn check_valid_vector() {
        let input = hex::encode(VERIFY_VECTORS[1].to_input());
        let valid = vector(&input, &hex::encode(encode_bool(true)));
        assert_eq!(valid.check(&SchnorrVerify::default()), Ok(()));

        let wrong = vector(&input, "");
        assert_eq!(
            wrong.check(&SchnorrVerify::default()),
            Err(VectorError::OutputMismatch)
        );
    }

    #[test]
    fn check_reports_gas() {
        let mut short = vector("00", "");
        short.gas = 10;
        assert_eq!(
            short.check(&SchnorrVerify::default()),
            Err(VectorError::Precompile(PrecompileError::OutOfGas {
                required: 3000,
                available: 10
            }))
        );

        short.gas = 3001;
        assert_eq!(
            short.check(&SchnorrVerify::default()),
            Err(VectorError::GasMismatch {
                expected: 3001,
                actual: 3000
            })
        );
    }

    #[test]
    fn bad_hex() {
        assert!(matches!(
            vector("zz", "").check(&SchnorrVerify::default()),
            Err(VectorError::Hex(_))
        ));
    }
}
