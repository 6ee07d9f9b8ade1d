use num_bigint::BigInt;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use super::{Follower, RangeProof, RangeProofStructure};
use crate::zkproof::{BaseLookup, SecretLookup};
use crate::{hash_commit, Group, Result};

/// A non-interactive range proof: the Fiat-Shamir challenge and the responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeProofBundle {
    /// Challenge whose low bits select each round's response.
    pub challenge: BigInt,
    /// Per-round responses.
    pub proof: RangeProof,
}

/// Prover for range proofs over a fixed structure and set of public bases.
///
/// # Security
///
/// - Always use [`SecureRng`](crate::SecureRng) for randomness generation
/// - Bind proofs to a context and a verifier-chosen nonce to prevent replay
/// - Every call samples fresh randomizers; nothing is cached between proofs
pub struct RangeProver<'a> {
    structure: &'a RangeProofStructure,
    group: &'a Group,
    bases: &'a dyn BaseLookup,
    follower: Option<&'a dyn Follower>,
}

impl<'a> RangeProver<'a> {
    /// Creates a prover for `structure` whose bases resolve through `bases`.
    pub fn new(
        structure: &'a RangeProofStructure,
        group: &'a Group,
        bases: &'a dyn BaseLookup,
    ) -> Self {
        Self {
            structure,
            group,
            bases,
            follower: None,
        }
    }

    /// Reports progress to `follower`.
    pub fn with_follower(mut self, follower: &'a dyn Follower) -> Self {
        self.follower = Some(follower);
        self
    }

    /// Generates a non-interactive range proof.
    ///
    /// The challenge is `hash_commit(context, lhs, commitments.., nonce)`.
    pub fn prove<R: RngCore + CryptoRng>(
        &self,
        secrets: &dyn SecretLookup,
        context: &BigInt,
        nonce: &BigInt,
        rng: &mut R,
    ) -> Result<RangeProofBundle> {
        let lhs = self.structure.base().lhs_value(self.group, self.bases)?;

        let mut list = vec![context.clone(), lhs];
        let commit = self.structure.commitments_from_secrets(
            self.group,
            &mut list,
            self.bases,
            rng,
            self.follower,
        )?;
        list.push(nonce.clone());

        let challenge = hash_commit(&list);
        let proof = self
            .structure
            .build_proof(self.group, &challenge, commit, secrets)?;

        Ok(RangeProofBundle { challenge, proof })
    }
}
