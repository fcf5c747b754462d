//! Gas-metered precompile interface for BIP340 signature verification.
//!
//! A hosting virtual machine calls [`Precompile::run`] with the gas it has
//! left and the raw call data. The Schnorr precompile takes exactly
//! [`INPUT_LENGTH`] bytes:
//!
//! ```text
//! message hash (32) || signature (64) || x-only public key (32)
//! ```
//!
//! and always answers with a [`OUTPUT_LENGTH`]-byte big-endian integer, `1`
//! for a valid signature and `0` otherwise. Running out of gas is the only
//! failure reported as an error; malformed input is just an invalid
//! signature.

use crate::{schnorr, Error, Result};
use core::fmt;

/// Fixed gas cost of one Schnorr verification.
pub const SCHNORR_VERIFY_GAS: u64 = 3000;

/// Length of the precompile input.
pub const INPUT_LENGTH: usize = 128;

/// Length of the precompile output word.
pub const OUTPUT_LENGTH: usize = 32;

/// A native operation a virtual machine exposes as a contract call.
pub trait Precompile {
    /// Bytes returned by a successful call.
    type Output: AsRef<[u8]>;

    /// Gas charged for a call with the given input.
    fn required_gas(&self, input: &[u8]) -> u64;

    /// Executes the precompile with `gas` units available.
    fn run(&self, gas: u64, input: &[u8])
        -> core::result::Result<PrecompileOutput<Self::Output>, PrecompileError>;
}

/// Result of a successful precompile call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrecompileOutput<T> {
    /// Gas consumed by the call.
    pub gas_used: u64,

    /// Returned bytes.
    pub bytes: T,
}

impl<T> PrecompileOutput<T> {
    /// Create a new output.
    pub fn new(gas_used: u64, bytes: T) -> Self {
        Self { gas_used, bytes }
    }
}

/// Fatal precompile failures, which abort the enclosing call.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PrecompileError {
    /// The caller supplied less gas than the call costs.
    OutOfGas {
        /// Gas the call costs.
        required: u64,
        /// Gas the caller supplied.
        available: u64,
    },
}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfGas {
                required,
                available,
            } => write!(f, "out of gas: required {required}, available {available}"),
        }
    }
}

impl core::error::Error for PrecompileError {}

/// Encodes a boolean as a 32-byte big-endian integer.
pub fn encode_bool(value: bool) -> [u8; OUTPUT_LENGTH] {
    let mut word = [0u8; OUTPUT_LENGTH];
    word[OUTPUT_LENGTH - 1] = u8::from(value);
    word
}

/// Parsed precompile input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerificationInput {
    /// 32-byte message hash.
    pub message: [u8; 32],

    /// 64-byte signature `r || s`.
    pub signature: [u8; 64],

    /// 32-byte x-only public key.
    pub public_key: [u8; 32],
}

impl VerificationInput {
    /// Splits exactly [`INPUT_LENGTH`] bytes into their three fields.
    pub fn parse(input: &[u8]) -> Result<Self> {
        let input: &[u8; INPUT_LENGTH] = input.try_into().map_err(|_| Error::InvalidLength {
            expected: INPUT_LENGTH,
            actual: input.len(),
        })?;

        let mut message = [0u8; 32];
        let mut signature = [0u8; 64];
        let mut public_key = [0u8; 32];
        message.copy_from_slice(&input[..32]);
        signature.copy_from_slice(&input[32..96]);
        public_key.copy_from_slice(&input[96..]);

        Ok(Self {
            message,
            signature,
            public_key,
        })
    }

    /// Serialize back into the precompile input layout.
    pub fn to_bytes(&self) -> [u8; INPUT_LENGTH] {
        let mut out = [0u8; INPUT_LENGTH];
        out[..32].copy_from_slice(&self.message);
        out[32..96].copy_from_slice(&self.signature);
        out[96..].copy_from_slice(&self.public_key);
        out
    }

    /// Checks the signature. Any parse failure counts as invalid.
    pub fn verify(&self) -> bool {
        schnorr::verify(&self.message, &self.signature, &self.public_key)
    }
}

impl TryFrom<&[u8]> for VerificationInput {
    type Error = Error;

    fn try_from(input: &[u8]) -> Result<Self> {
        Self::parse(input)
    }
}

/// The BIP340 Schnorr verification precompile.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SchnorrVerify {
    gas_cost: u64,
}

impl SchnorrVerify {
    /// Create a precompile charging `gas_cost` per call.
    pub const fn new(gas_cost: u64) -> Self {
        Self { gas_cost }
    }

    /// Gas charged per call.
    pub const fn gas_cost(&self) -> u64 {
        self.gas_cost
    }
}

impl Default for SchnorrVerify {
    fn default() -> Self {
        Self::new(SCHNORR_VERIFY_GAS)
    }
}

impl Precompile for SchnorrVerify {
    type Output = [u8; OUTPUT_LENGTH];

    fn required_gas(&self, _input: &[u8]) -> u64 {
        self.gas_cost
    }

    fn run(
        &self,
        gas: u64,
        input: &[u8],
    ) -> core::result::Result<PrecompileOutput<Self::Output>, PrecompileError> {
        let required = self.required_gas(input);
        if gas < required {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                required,
                available = gas,
                "schnorr verification rejected: out of gas"
            );
            return Err(PrecompileError::OutOfGas {
                required,
                available: gas,
            });
        }

        let valid = VerificationInput::parse(input).is_ok_and(|input| input.verify());
        Ok(PrecompileOutput::new(required, encode_bool(valid)))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        encode_bool, Precompile, PrecompileError, SchnorrVerify, VerificationInput, INPUT_LENGTH,
        SCHNORR_VERIFY_GAS,
    };
    use crate::Error;
    use hex_literal::hex;

    extern crate alloc;

    // BIP340 test vector 1: message || signature || public key
    const VALID_INPUT: [u8; INPUT_LENGTH] = hex!(
        "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89
         6896BD60EEAE296DB48A229FF71DFE071BDE413E6D43F917DC8DCF8C78DE3341
         8906D11AC976ABCCB20B091292BFF4EA897EFCB639EA871CFA95F6DE339E4B0A
         DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659"
    );

    #[test]
    fn bool_encoding() {
        assert_eq!(encode_bool(false), [0u8; 32]);
        let mut one = [0u8; 32];
        one[31] = 1;
        assert_eq!(encode_bool(true), one);
    }

    #[test]
    fn valid_call() {
        let output = SchnorrVerify::default().run(3000, &VALID_INPUT).unwrap();
        assert_eq!(output.gas_used, SCHNORR_VERIFY_GAS);
        assert_eq!(output.bytes, encode_bool(true));
    }

    #[test]
    fn invalid_signature_is_not_an_error() {
        let mut input = VALID_INPUT;
        input[32] ^= 0xff;
        let output = SchnorrVerify::default().run(u64::MAX, &input).unwrap();
        assert_eq!(output.bytes, encode_bool(false));
        assert_eq!(output.gas_used, SCHNORR_VERIFY_GAS);
    }

    #[test]
    fn wrong_lengths() {
        let precompile = SchnorrVerify::default();
        for len in [0, 1, 127, 129] {
            let mut input = [0u8; 129];
            input[..INPUT_LENGTH].copy_from_slice(&VALID_INPUT);
            let output = precompile.run(SCHNORR_VERIFY_GAS, &input[..len]).unwrap();
            assert_eq!(output.bytes, [0u8; 32], "length {len}");
        }
    }

    #[test]
    fn out_of_gas() {
        let err = SchnorrVerify::default().run(2999, &VALID_INPUT).unwrap_err();
        assert_eq!(
            err,
            PrecompileError::OutOfGas {
                required: 3000,
                available: 2999
            }
        );

        // Gas is checked before the input is looked at.
        assert!(SchnorrVerify::default().run(0, &[]).is_err());
    }

    #[test]
    fn custom_gas_cost() {
        let precompile = SchnorrVerify::new(50);
        assert_eq!(precompile.gas_cost(), 50);
        assert_eq!(precompile.required_gas(&VALID_INPUT), 50);
        assert_eq!(precompile.run(50, &VALID_INPUT).unwrap().gas_used, 50);
    }

    #[test]
    fn required_gas_ignores_input() {
        let precompile = SchnorrVerify::default();
        for input in [&[][..], &[0u8; 1][..], &VALID_INPUT[..], &[0xffu8; 4096][..]] {
            assert_eq!(precompile.required_gas(input), SCHNORR_VERIFY_GAS);
        }
    }

    #[test]
    fn input_parsing() {
        let parsed = VerificationInput::parse(&VALID_INPUT).unwrap();
        assert_eq!(parsed.message[0], 0x24);
        assert_eq!(parsed.signature[0], 0x68);
        assert_eq!(parsed.public_key[0], 0xDF);
        assert_eq!(parsed.to_bytes(), VALID_INPUT);
        assert!(parsed.verify());

        assert_eq!(
            VerificationInput::try_from(&VALID_INPUT[1..]).unwrap_err(),
            Error::InvalidLength {
                expected: 128,
                actual: 127
            }
        );
    }

    #[test]
    fn error_display() {
        let err = PrecompileError::OutOfGas {
            required: 3000,
            available: 10,
        };
        assert_eq!(
            alloc::format!("{err}"),
            "out of gas: required 3000, available 10"
        );
    }
}
