use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use super::{random_element_multiplicative_group, ClSignature, PublicKey, SecretKey};
use crate::primitives::modular::{mod_inverse, mod_pow};
use crate::primitives::rng::random_signed_bits;
use crate::zkproof::{LhsContribution, ProofLookup, RhsContribution, SecretMerge};
use crate::{hash_commit, Error, Group, RepresentationProofStructure, Result, Secret};

const V_PRIME: &str = "v_prime";
const SECRET: &str = "secret";

/// The statement behind [`ProofU`]: `U = S^{v'} * R0^{secret}`.
pub fn commitment_structure() -> RepresentationProofStructure {
    RepresentationProofStructure::new(
        vec![LhsContribution {
            base: "U".to_string(),
            power: BigInt::one(),
        }],
        vec![
            RhsContribution {
                base: "S".to_string(),
                secret: V_PRIME.to_string(),
                power: 1,
            },
            RhsContribution {
                base: "R0".to_string(),
                secret: SECRET.to_string(),
                power: 1,
            },
        ],
    )
}

/// Holder's proof of knowledge of the opening of the commitment `U`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofU {
    /// Fiat-Shamir challenge.
    pub c: BigInt,
    /// Response for the blinding exponent `v'`.
    pub v_prime_response: BigInt,
    /// Response for the holder's secret.
    pub s_response: BigInt,
}

impl ProofU {
    /// Proves knowledge of `v_prime` and `secret` with `U = S^{v_prime} * R0^{secret}`.
    ///
    /// The challenge is `hash_commit(context, U, commitment, nonce1)`.
    pub fn prove<R: RngCore + CryptoRng>(
        pk: &PublicKey,
        u: &BigInt,
        secret: &BigInt,
        v_prime: &BigInt,
        context: &BigInt,
        nonce1: &BigInt,
        rng: &mut R,
    ) -> Result<Self> {
        let params = &pk.params;
        let group = Group::hidden_order(pk.n.clone());
        let bases = pk.bases().with("U", u.clone());

        let v_prime_secret = Secret::with_randomizer(
            V_PRIME,
            v_prime.clone(),
            random_signed_bits(rng, params.lv_prime_commit),
        );
        let s_secret = Secret::with_randomizer(
            SECRET,
            secret.clone(),
            random_signed_bits(rng, params.lm_commit),
        );

        let mut list = vec![context.clone(), u.clone()];
        commitment_structure().commitments_from_secrets(
            &group,
            &mut list,
            &bases,
            &SecretMerge::new(vec![&v_prime_secret, &s_secret]),
        )?;
        list.push(nonce1.clone());
        let c = hash_commit(&list);

        let v_prime_response = v_prime_secret.build_proof(&group, &c).result().clone();
        let s_response = s_secret.build_proof(&group, &c).result().clone();

        Ok(Self {
            c,
            v_prime_response,
            s_response,
        })
    }

    /// Checks that the responses are no wider than an honest prover's.
    pub fn correct_response_sizes(&self, pk: &PublicKey) -> bool {
        let params = &pk.params;
        self.v_prime_response.bits() <= u64::from(params.lv_prime_commit + 1)
            && self.s_response.bits() <= u64::from(params.lm_commit + 1)
    }

    /// Verifies the proof for commitment `u`, bound to `context` and `nonce1`.
    pub fn verify(&self, pk: &PublicKey, u: &BigInt, context: &BigInt, nonce1: &BigInt) -> bool {
        if !self.correct_response_sizes(pk) {
            tracing::debug!("commitment proof rejected: oversized responses");
            return false;
        }

        match self.reconstruct_challenge(pk, u, context, nonce1) {
            Ok(c) => c == self.c,
            Err(err) => {
                tracing::debug!(%err, "commitment proof rejected");
                false
            }
        }
    }

    fn reconstruct_challenge(
        &self,
        pk: &PublicKey,
        u: &BigInt,
        context: &BigInt,
        nonce1: &BigInt,
    ) -> Result<BigInt> {
        let group = Group::hidden_order(pk.n.clone());
        let bases = pk.bases().with("U", u.clone());

        let mut list = vec![context.clone(), u.clone()];
        commitment_structure().commitments_from_proof(&group, &mut list, &self.c, &bases, self)?;
        list.push(nonce1.clone());
        Ok(hash_commit(&list))
    }
}

impl ProofLookup for ProofU {
    fn proof_result(&self, name: &str) -> Option<&BigInt> {
        match name {
            V_PRIME => Some(&self.v_prime_response),
            SECRET => Some(&self.s_response),
            _ => None,
        }
    }
}

/// Issuer's proof that `A` was computed as `Q^{e^{-1}}` with the secret order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofS {
    /// Fiat-Shamir challenge.
    pub c: BigInt,
    /// Response for the inverse of `e` modulo the secret order.
    pub e_response: BigInt,
}

impl ProofS {
    /// Proves knowledge of `d = e^{-1} mod P'Q'` with `A = Q^d`, where `Q = A^e`.
    ///
    /// The challenge is `hash_commit(context, Q, A, nonce2, Q^{e_commit})`.
    pub fn prove<R: RngCore + CryptoRng>(
        sk: &SecretKey,
        pk: &PublicKey,
        signature: &ClSignature,
        context: &BigInt,
        nonce2: &BigInt,
        rng: &mut R,
    ) -> Result<Self> {
        let order = sk.order();
        let q = signature.q(pk)?;
        let d = mod_inverse(&signature.e, &order)
            .ok_or_else(|| Error::Internal("signature exponent is not invertible".to_string()))?;

        let e_commit = random_element_multiplicative_group(&order, rng);
        let a_commit = mod_pow(&q, &e_commit, &pk.n)?;

        let c = hash_commit(&[
            context.clone(),
            q,
            signature.a.clone(),
            nonce2.clone(),
            a_commit,
        ]);
        let e_response = (e_commit - &c * d).mod_floor(&order);

        Ok(Self { c, e_response })
    }

    /// Verifies the proof against `signature`.
    ///
    /// Recomputes `Q = A^e` and `Q^{e_commit} = A^{c + e_response * e}`, then rechecks the
    /// challenge.
    pub fn verify(
        &self,
        pk: &PublicKey,
        signature: &ClSignature,
        context: &BigInt,
        nonce2: &BigInt,
    ) -> bool {
        let recomputed = signature.q(pk).and_then(|q| {
            let exponent = &self.c + &self.e_response * &signature.e;
            let a_commit = mod_pow(&signature.a, &exponent, &pk.n)?;
            Ok(hash_commit(&[
                context.clone(),
                q,
                signature.a.clone(),
                nonce2.clone(),
                a_commit,
            ]))
        });

        match recomputed {
            Ok(c) => c == self.c,
            Err(err) => {
                tracing::debug!(%err, "signature proof rejected");
                false
            }
        }
    }
}
