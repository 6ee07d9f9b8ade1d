use num_bigint::BigInt;

use super::{Follower, RangeProofBundle, RangeProofStructure};
use crate::zkproof::BaseLookup;
use crate::{hash_commit, Error, Group, Result};

/// Verifier for range proofs.
///
/// Structural validation always runs first; only a well-formed proof reaches the
/// challenge recomputation.
pub struct RangeVerifier<'a> {
    structure: &'a RangeProofStructure,
    group: &'a Group,
    bases: &'a dyn BaseLookup,
    follower: Option<&'a dyn Follower>,
}

impl<'a> RangeVerifier<'a> {
    /// Creates a verifier for `structure` whose bases resolve through `bases`.
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

    /// Verifies a range proof bound to `context` and `nonce`.
    ///
    /// Returns [`Error::MalformedProof`] for structurally invalid proofs and
    /// [`Error::ProofVerificationFailed`] when the challenge does not match.
    pub fn verify(&self, bundle: &RangeProofBundle, context: &BigInt, nonce: &BigInt) -> Result<()> {
        if !self.structure.verify_proof_structure(&bundle.proof) {
            tracing::debug!(
                secret = self.structure.range_secret(),
                "range proof rejected: malformed structure"
            );
            return Err(Error::MalformedProof(
                "range proof responses are missing or out of bounds".to_string(),
            ));
        }

        let lhs = self.structure.base().lhs_value(self.group, self.bases)?;
        let mut list = vec![context.clone(), lhs];
        self.structure.commitments_from_proof(
            self.group,
            &mut list,
            &bundle.challenge,
            self.bases,
            &bundle.proof,
            self.follower,
        )?;
        list.push(nonce.clone());

        if hash_commit(&list) != bundle.challenge {
            tracing::debug!(
                secret = self.structure.range_secret(),
                "range proof rejected: challenge mismatch"
            );
            return Err(Error::ProofVerificationFailed);
        }

        Ok(())
    }
}
