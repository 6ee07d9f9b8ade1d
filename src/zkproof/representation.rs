use num_bigint::BigInt;
use num_traits::One;
use serde::{Deserialize, Serialize};

use super::{BaseLookup, ProofLookup, SecretLookup};
use crate::{Error, Group, Result};

/// One factor `base^power` of the public left-hand side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LhsContribution {
    /// Name of the base.
    pub base: String,
    /// Public exponent applied to the base.
    pub power: BigInt,
}

/// One factor `base^(power * secret)` of the right-hand side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhsContribution {
    /// Name of the base.
    pub base: String,
    /// Name of the secret exponent.
    pub secret: String,
    /// Public multiplier of the secret.
    pub power: i64,
}

/// The statement `∏ lhs.base^lhs.power = ∏ rhs.base^(rhs.power * rhs.secret)`.
///
/// The structure holds only names and public powers. It is shared read-only between
/// provers and verifiers; all values come in through the lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentationProofStructure {
    /// Public left-hand side factors.
    pub lhs: Vec<LhsContribution>,
    /// Secret right-hand side factors.
    pub rhs: Vec<RhsContribution>,
}

impl RepresentationProofStructure {
    /// Creates a structure from its two sides.
    pub fn new(lhs: Vec<LhsContribution>, rhs: Vec<RhsContribution>) -> Self {
        Self { lhs, rhs }
    }

    /// Number of range proofs embedded in this structure.
    pub fn num_range_proofs(&self) -> usize {
        0
    }

    /// Number of commitments this structure appends to a commitment list.
    pub fn num_commitments(&self) -> usize {
        1
    }

    /// Names of the secrets on the right-hand side, in order of first appearance.
    pub fn secret_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.rhs.len());
        for contribution in &self.rhs {
            if !names.contains(&contribution.secret.as_str()) {
                names.push(&contribution.secret);
            }
        }
        names
    }

    /// Appends the commitment `∏ rhs.base^(rhs.power * randomizer)` to `list`.
    pub fn commitments_from_secrets(
        &self,
        group: &Group,
        list: &mut Vec<BigInt>,
        bases: &dyn BaseLookup,
        secrets: &dyn SecretLookup,
    ) -> Result<()> {
        let mut commitment = BigInt::one();
        for contribution in &self.rhs {
            let base = lookup_base(bases, &contribution.base)?;
            let randomizer = secrets
                .randomizer(&contribution.secret)
                .ok_or_else(|| Error::UnknownSecret(contribution.secret.clone()))?;
            let exponent = randomizer * contribution.power;
            commitment = group.mul(&commitment, &group.exp(base, &exponent)?);
        }
        list.push(commitment);
        Ok(())
    }

    /// Appends the commitment the verifier reconstructs from the responses:
    /// `∏ lhs.base^(lhs.power * challenge) * ∏ rhs.base^(rhs.power * response)`.
    ///
    /// It equals the prover's commitment exactly when every response has the form
    /// `randomizer - challenge * secret` for secrets satisfying the statement.
    pub fn commitments_from_proof(
        &self,
        group: &Group,
        list: &mut Vec<BigInt>,
        challenge: &BigInt,
        bases: &dyn BaseLookup,
        proofs: &dyn ProofLookup,
    ) -> Result<()> {
        let mut commitment = BigInt::one();
        for contribution in &self.lhs {
            let base = lookup_base(bases, &contribution.base)?;
            let exponent = &contribution.power * challenge;
            commitment = group.mul(&commitment, &group.exp(base, &exponent)?);
        }
        for contribution in &self.rhs {
            let base = lookup_base(bases, &contribution.base)?;
            let response = proofs
                .proof_result(&contribution.secret)
                .ok_or_else(|| Error::MissingProofResult(contribution.secret.clone()))?;
            let exponent = response * contribution.power;
            commitment = group.mul(&commitment, &group.exp(base, &exponent)?);
        }
        list.push(commitment);
        Ok(())
    }

    /// Checks that the statement holds for the secrets in `secrets`.
    pub fn is_true(
        &self,
        group: &Group,
        bases: &dyn BaseLookup,
        secrets: &dyn SecretLookup,
    ) -> Result<bool> {
        let mut lhs = BigInt::one();
        for contribution in &self.lhs {
            let base = lookup_base(bases, &contribution.base)?;
            lhs = group.mul(&lhs, &group.exp(base, &contribution.power)?);
        }

        let mut rhs = BigInt::one();
        for contribution in &self.rhs {
            let base = lookup_base(bases, &contribution.base)?;
            let secret = secrets
                .secret(&contribution.secret)
                .ok_or_else(|| Error::UnknownSecret(contribution.secret.clone()))?;
            let exponent = secret * contribution.power;
            rhs = group.mul(&rhs, &group.exp(base, &exponent)?);
        }

        Ok(lhs == rhs)
    }

    /// Multiplies out the public left-hand side.
    pub fn lhs_value(&self, group: &Group, bases: &dyn BaseLookup) -> Result<BigInt> {
        let mut value = BigInt::one();
        for contribution in &self.lhs {
            let base = lookup_base(bases, &contribution.base)?;
            value = group.mul(&value, &group.exp(base, &contribution.power)?);
        }
        Ok(value)
    }
}

fn lookup_base<'a>(bases: &'a dyn BaseLookup, name: &str) -> Result<&'a BigInt> {
    bases
        .base(name)
        .ok_or_else(|| Error::UnknownBase(name.to_string()))
}
