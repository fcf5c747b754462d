//! BIP340 Schnorr signature verification over secp256k1, packaged as a
//! fixed-gas precompile for virtual machines.
//!
//! Field, scalar and group arithmetic are implemented in this crate; only
//! SHA-256 comes from elsewhere.
//!
//! ## Minimum Supported Rust Version
//!
//! Rust **1.81** or higher.
//!
//! Minimum supported Rust version can be changed in the future, but it will be
//! done with a minor version bump.
//!
//! ## Usage
//!
//! The [`precompile::SchnorrVerify`] adapter is what a virtual machine
//! registers. Library users who only need the boolean verifier can call
//! [`schnorr::verify`] directly:
//!
//! ```
//! use bip340::schnorr;
//! use hex_literal::hex;
//!
//! let public_key = hex!("D69C3509BB99E412E68B0FE8544E72837DFA30746D8BE2AA65975F29D22DC7B9");
//! let message = hex!("4DF3C3F68FCC83B27E9D42C90431A72499F17875C81A599B566C9889B9696703");
//! let signature = hex!(
//!     "00000000000000000000003B78CE563F89A0ED9414F5AA28AD0D96D6795F9C63
//!      76AFB1548AF603B3EB45C9F8207DEE1060CB71C04E80F593060B07D28308D7F4"
//! );
//!
//! assert!(schnorr::verify(&message, &signature, &public_key));
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

#[cfg(feature = "alloc")]
#[allow(unused_extern_crates)]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod arithmetic;
pub mod precompile;
pub mod schnorr;

mod error;

#[cfg(feature = "test-vectors")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-vectors")))]
pub mod test_vectors;

pub use crate::{
    arithmetic::{AffinePoint, FieldElement, ProjectivePoint, Scalar},
    error::{Error, Result},
    precompile::{Precompile, PrecompileError, PrecompileOutput, SchnorrVerify},
};
pub use elliptic_curve::subtle;
pub use sha2;
pub use signature;

/// Big endian-encoded field element or scalar.
pub type FieldBytes = [u8; 32];
