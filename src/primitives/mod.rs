//! Core cryptographic primitives shared by every proof in the crate.
//!
//! - **group**: modulus/order context that all exponentiations run in
//! - **modular**: inverses, signed exponentiation, primality and prime generation
//! - **rng**: secure randomness and big-integer sampling
//! - **transcript**: Fiat-Shamir transform for non-interactive proofs

/// Group arithmetic context.
pub mod group;
/// Modular arithmetic and prime generation.
pub mod modular;
/// Cryptographically secure random number generation.
pub mod rng;
/// Transcript for Fiat-Shamir transform.
pub mod transcript;

pub use group::Group;
pub use rng::SecureRng;
pub use transcript::{hash_commit, Transcript};
