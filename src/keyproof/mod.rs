//! Range proofs over representation statements.
//!
//! A range proof shows that one secret of a [`RepresentationProofStructure`] is small
//! without revealing it. Soundness comes from repetition: each of the
//! [`RANGE_PROOF_ITERS`] rounds has a one-bit challenge, so a cheating prover survives a
//! single round with probability about one half and all rounds with negligible
//! probability.
//!
//! [`RepresentationProofStructure`]: crate::zkproof::RepresentationProofStructure

/// Progress reporting.
pub mod follower;
/// Prover for non-interactive range proofs.
pub mod prover;
/// The range proof structure, responses and simulator.
pub mod range;
/// Verifier for non-interactive range proofs.
pub mod verifier;

pub use follower::{Follower, TracingFollower};
pub use prover::{RangeProofBundle, RangeProver};
pub use range::{RangeCommit, RangeProof, RangeProofStructure};
pub use verifier::RangeVerifier;

/// Number of bit-challenge rounds in a range proof.
pub const RANGE_PROOF_ITERS: usize = 80;

/// Extra bits of randomizer width hiding the range secret (statistical slack ε).
pub const RANGE_PROOF_EPSILON: u32 = 107;
