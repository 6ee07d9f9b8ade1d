//! Representation proofs: zero-knowledge proofs of knowledge of exponents `x_i` with
//! `∏ base_i^x_i = target`, made non-interactive with Fiat-Shamir.
//!
//! The flow is the usual three moves:
//! 1. [`RepresentationProofStructure::commitments_from_secrets`] commits to randomizers
//! 2. the challenge is [`hash_commit`](crate::hash_commit) over context, statement,
//!    commitments and nonce
//! 3. [`Secret::build_proof`] turns each randomizer into a response
//!
//! The verifier runs [`RepresentationProofStructure::commitments_from_proof`] and
//! recomputes the same hash; a proof is accepted only if both challenges agree.

/// Named lookup capabilities.
pub mod lookup;
/// The representation proof structure.
pub mod representation;
/// Secrets and their responses.
pub mod secret;

pub use lookup::{
    BaseLookup, BaseMap, BaseMerge, ProofLookup, ProofMerge, SecretLookup, SecretMerge,
};
pub use representation::{LhsContribution, RepresentationProofStructure, RhsContribution};
pub use secret::{ProofResult, Secret};
