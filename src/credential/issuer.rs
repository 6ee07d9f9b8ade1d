use num_bigint::BigInt;
use rand::{CryptoRng, RngCore};

use super::{
    sign_message_block_and_commitment, IssueCommitmentMessage, IssueSignatureMessage, ProofS,
    PublicKey, SecretKey,
};
use crate::primitives::rng::random_unit;
use crate::{Error, Result};

/// Issues blind CL signatures under one key pair and protocol context.
///
/// The issuer keeps no per-request state; one instance can serve concurrent requests as
/// long as each call gets its own rng.
#[derive(Debug)]
pub struct Issuer {
    sk: SecretKey,
    pk: PublicKey,
    context: BigInt,
}

impl Issuer {
    /// Creates an issuer for key pair `(sk, pk)`, binding every proof to `context`.
    pub fn new(sk: SecretKey, pk: PublicKey, context: BigInt) -> Self {
        Self { sk, pk, context }
    }

    /// The public key holders verify against.
    pub fn public_key(&self) -> &PublicKey {
        &self.pk
    }

    /// The session context shared with the holder.
    pub fn context(&self) -> &BigInt {
        &self.context
    }

    /// Answers a holder's commitment with a signature over it and `attributes`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncorrectCommitment`] if `msg.proof_u` does not verify against
    /// `nonce1`. Attributes wider than `lm` bits or more attributes than the key has
    /// generators are [`Error::InvalidParams`].
    pub fn issue_signature<R: RngCore + CryptoRng>(
        &self,
        msg: &IssueCommitmentMessage,
        attributes: &[BigInt],
        nonce1: &BigInt,
        rng: &mut R,
    ) -> Result<IssueSignatureMessage> {
        if !msg.proof_u.verify(&self.pk, &msg.u, &self.context, nonce1) {
            tracing::warn!("rejecting issuance request: commitment proof does not verify");
            return Err(Error::IncorrectCommitment);
        }

        // R0 is the holder's; attributes start at R1
        let signature = sign_message_block_and_commitment(
            &self.sk,
            &self.pk,
            &msg.u,
            attributes,
            self.pk.r.get(1..).unwrap_or_default(),
            rng,
        )?;
        let proof = ProofS::prove(&self.sk, &self.pk, &signature, &self.context, &msg.nonce2, rng)?;

        tracing::info!(attributes = attributes.len(), "issued signature");
        Ok(IssueSignatureMessage { signature, proof })
    }
}

/// Samples a unit of `Z_modulus^*`, the randomizer domain of `ProofS`.
pub fn random_element_multiplicative_group<R: RngCore + CryptoRng>(
    modulus: &BigInt,
    rng: &mut R,
) -> BigInt {
    random_unit(rng, modulus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::modular::gcd;
    use crate::SecureRng;
    use num_traits::{One, Signed};

    #[test]
    fn multiplicative_group_elements_are_units() {
        let mut rng = SecureRng::new();
        let modulus = BigInt::from(509u32 * 593);
        for _ in 0..100 {
            let r = random_element_multiplicative_group(&modulus, &mut rng);
            assert!(r.is_positive());
            assert!(r < modulus);
            assert!(gcd(&r, &modulus).is_one());
        }
    }
}
