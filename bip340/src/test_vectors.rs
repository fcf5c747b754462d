//! Test vectors for the verifier and the precompile.

pub mod bip340;
pub mod precompile;
