use core::fmt;

use num_bigint::BigInt;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use super::{ProofLookup, SecretLookup};
use crate::{Group, Result};

/// A named secret exponent together with its commitment randomizer.
///
/// A fresh randomizer is drawn every time a `Secret` is created; building two proofs
/// from the same `Secret` would reveal the secret, so [`Secret::build_proof`] consumes it.
pub struct Secret {
    name: String,
    value: BigInt,
    randomizer: BigInt,
}

impl Secret {
    /// Creates a secret whose randomizer is uniform modulo the group order.
    ///
    /// # Errors
    ///
    /// Fails for hidden-order groups; use [`Secret::with_randomizer`] with a bounded
    /// randomizer there instead.
    pub fn new<R: RngCore + CryptoRng>(
        group: &Group,
        name: impl Into<String>,
        value: BigInt,
        rng: &mut R,
    ) -> Result<Self> {
        let randomizer = group.random_exponent(rng)?;
        Ok(Self {
            name: name.into(),
            value,
            randomizer,
        })
    }

    /// Creates a secret with a caller-sampled randomizer.
    pub fn with_randomizer(name: impl Into<String>, value: BigInt, randomizer: BigInt) -> Self {
        Self {
            name: name.into(),
            value,
            randomizer,
        }
    }

    /// Returns the secret's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Computes the response `randomizer - challenge * secret`, reduced modulo the
    /// order when the group has a public one.
    pub fn build_proof(self, group: &Group, challenge: &BigInt) -> ProofResult {
        let result = group.reduce(&self.randomizer - challenge * &self.value);
        ProofResult {
            name: self.name,
            result,
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl SecretLookup for Secret {
    fn secret(&self, name: &str) -> Option<&BigInt> {
        (name == self.name).then_some(&self.value)
    }

    fn randomizer(&self, name: &str) -> Option<&BigInt> {
        (name == self.name).then_some(&self.randomizer)
    }
}

/// The response for one named secret.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofResult {
    name: String,
    result: BigInt,
}

impl ProofResult {
    /// Creates a response for `name`.
    pub fn new(name: impl Into<String>, result: BigInt) -> Self {
        Self {
            name: name.into(),
            result,
        }
    }

    /// Returns the secret name this response belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the response value.
    pub fn result(&self) -> &BigInt {
        &self.result
    }
}

impl ProofLookup for ProofResult {
    fn proof_result(&self, name: &str) -> Option<&BigInt> {
        (name == self.name).then_some(&self.result)
    }
}
