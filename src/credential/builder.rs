use core::fmt;

use num_bigint::BigInt;
use rand::{CryptoRng, RngCore};

use super::{ClSignature, IssueCommitmentMessage, IssueSignatureMessage, ProofU, PublicKey};
use crate::primitives::modular::mod_pow;
use crate::primitives::rng::random_bits;
use crate::{Error, Result};

/// Holder side of issuance.
///
/// Keeps the secret, the blinding `v'` and the nonce the issuer must answer with, for the
/// lifetime of one issuance session.
pub struct CredentialBuilder {
    pk: PublicKey,
    context: BigInt,
    secret: BigInt,
    v_prime: BigInt,
    nonce2: BigInt,
    u: BigInt,
}

impl CredentialBuilder {
    /// Starts a session for `secret` under `pk`.
    ///
    /// # Errors
    ///
    /// Returns an error if the public key has no reserved generator for the secret.
    pub fn new<R: RngCore + CryptoRng>(
        pk: PublicKey,
        context: BigInt,
        secret: BigInt,
        rng: &mut R,
    ) -> Result<Self> {
        let r0 = pk
            .r
            .first()
            .ok_or_else(|| Error::InvalidParams("public key has no generators".to_string()))?;
        let v_prime = random_bits(rng, pk.params.lv_prime);
        let nonce2 = random_bits(rng, pk.params.lstatzk);

        let u = (mod_pow(&pk.s, &v_prime, &pk.n)? * mod_pow(r0, &secret, &pk.n)?) % &pk.n;

        Ok(Self {
            pk,
            context,
            secret,
            v_prime,
            nonce2,
            u,
        })
    }

    /// The commitment `U = S^{v'} * R0^{secret}`.
    pub fn commitment(&self) -> &BigInt {
        &self.u
    }

    /// Builds the first issuance message, proving knowledge of the opening of `U`.
    pub fn commit_to_secret_and_prove<R: RngCore + CryptoRng>(
        &self,
        nonce1: &BigInt,
        rng: &mut R,
    ) -> Result<IssueCommitmentMessage> {
        let proof_u = ProofU::prove(
            &self.pk,
            &self.u,
            &self.secret,
            &self.v_prime,
            &self.context,
            nonce1,
            rng,
        )?;
        Ok(IssueCommitmentMessage {
            u: self.u.clone(),
            proof_u,
            nonce2: self.nonce2.clone(),
        })
    }

    /// Completes the blind signature from the issuer's answer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProofVerificationFailed`] if the issuer's proof does not verify or
    /// the completed signature is not valid over the secret and `attributes`.
    pub fn construct_credential(
        &self,
        msg: &IssueSignatureMessage,
        attributes: &[BigInt],
    ) -> Result<Credential> {
        if !msg
            .proof
            .verify(&self.pk, &msg.signature, &self.context, &self.nonce2)
        {
            tracing::warn!("issuer's signature proof does not verify");
            return Err(Error::ProofVerificationFailed);
        }

        let signature = ClSignature {
            a: msg.signature.a.clone(),
            e: msg.signature.e.clone(),
            v: &self.v_prime + &msg.signature.v,
        };

        let mut messages = Vec::with_capacity(attributes.len() + 1);
        messages.push(self.secret.clone());
        messages.extend_from_slice(attributes);

        let credential = Credential {
            signature,
            pk: self.pk.clone(),
            attributes: messages,
        };
        if !credential.verify() {
            tracing::warn!("completed signature does not verify");
            return Err(Error::ProofVerificationFailed);
        }
        Ok(credential)
    }
}

impl fmt::Debug for CredentialBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialBuilder")
            .field("u", &self.u)
            .finish_non_exhaustive()
    }
}

/// A CL signature over the holder's secret (first) and the cleartext attributes.
#[derive(Clone)]
pub struct Credential {
    signature: ClSignature,
    pk: PublicKey,
    attributes: Vec<BigInt>,
}

impl Credential {
    /// The completed signature, with `v = v' + v''`.
    pub fn signature(&self) -> &ClSignature {
        &self.signature
    }

    /// The issuer's public key the signature verifies under.
    pub fn public_key(&self) -> &PublicKey {
        &self.pk
    }

    /// Cleartext attributes, without the holder's secret.
    pub fn attributes(&self) -> &[BigInt] {
        self.attributes.get(1..).unwrap_or_default()
    }

    /// Checks the signature over the secret and attributes.
    pub fn verify(&self) -> bool {
        self.signature.verify(&self.pk, &self.attributes)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("signature", &self.signature)
            .field("attributes", &self.attributes())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::test_support::small_key;
    use crate::credential::Issuer;
    use crate::SecureRng;

    #[test]
    fn issuance_round_trip() {
        let mut rng = SecureRng::new();
        let (sk, pk) = small_key(&mut rng);
        let context = random_bits(&mut rng, pk.params.lh);
        let secret = random_bits(&mut rng, pk.params.lm);
        let attributes = vec![BigInt::from(10u32), BigInt::from(20u32), BigInt::from(30u32)];

        let builder = CredentialBuilder::new(pk.clone(), context.clone(), secret, &mut rng).unwrap();
        let nonce1 = random_bits(&mut rng, pk.params.lstatzk);
        let commit = builder.commit_to_secret_and_prove(&nonce1, &mut rng).unwrap();

        let issuer = Issuer::new(sk, pk, context);
        let answer = issuer
            .issue_signature(&commit, &attributes, &nonce1, &mut rng)
            .unwrap();
        let credential = builder.construct_credential(&answer, &attributes).unwrap();

        assert!(credential.verify());
        assert_eq!(credential.attributes(), attributes.as_slice());
    }

    #[test]
    fn wrong_attributes_fail_completion() {
        let mut rng = SecureRng::new();
        let (sk, pk) = small_key(&mut rng);
        let context = BigInt::from(77u32);
        let secret = BigInt::from(4242u32);
        let attributes = vec![BigInt::from(1u32), BigInt::from(2u32)];

        let builder = CredentialBuilder::new(pk.clone(), context.clone(), secret, &mut rng).unwrap();
        let nonce1 = BigInt::from(5u32);
        let commit = builder.commit_to_secret_and_prove(&nonce1, &mut rng).unwrap();
        let answer = Issuer::new(sk, pk, context)
            .issue_signature(&commit, &attributes, &nonce1, &mut rng)
            .unwrap();

        let claimed = vec![BigInt::from(1u32), BigInt::from(3u32)];
        assert!(matches!(
            builder.construct_credential(&answer, &claimed),
            Err(Error::ProofVerificationFailed)
        ));
    }
}
