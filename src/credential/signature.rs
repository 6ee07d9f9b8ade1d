use num_bigint::BigInt;
use num_traits::{One, Signed};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use super::{PublicKey, SecretKey};
use crate::primitives::modular::{mod_inverse, mod_pow, random_prime_in_range};
use crate::primitives::rng::random_bits;
use crate::{Error, Result};

/// A Camenisch-Lysyanskaya signature `(A, e, v)` satisfying
/// `A^e * S^v * ∏ R_i^{m_i} = Z (mod N)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClSignature {
    #[serde(rename = "A")]
    pub a: BigInt,
    #[serde(rename = "e")]
    pub e: BigInt,
    #[serde(rename = "v")]
    pub v: BigInt,
}

impl ClSignature {
    /// Signs `messages` directly, with `messages[i]` placed on `pk.r[i]`.
    pub fn sign<R: RngCore + CryptoRng>(
        sk: &SecretKey,
        pk: &PublicKey,
        messages: &[BigInt],
        rng: &mut R,
    ) -> Result<Self> {
        sign_message_block_and_commitment(sk, pk, &BigInt::one(), messages, &pk.r, rng)
    }

    /// Checks the signature over `messages`, with `messages[i]` placed on `pk.r[i]`.
    pub fn verify(&self, pk: &PublicKey, messages: &[BigInt]) -> bool {
        match self.verify_inner(pk, messages) {
            Ok(valid) => valid,
            Err(err) => {
                tracing::debug!(%err, "signature verification failed");
                false
            }
        }
    }

    fn verify_inner(&self, pk: &PublicKey, messages: &[BigInt]) -> Result<bool> {
        if messages.len() > pk.r.len() {
            return Ok(false);
        }

        let params = &pk.params;
        let start = BigInt::one() << (params.le - 1);
        let end = &start + (BigInt::one() << (params.le_prime - 1));
        if self.e < start || self.e > end {
            return Ok(false);
        }

        let mut product = mod_pow(&self.a, &self.e, &pk.n)?;
        product = (product * mod_pow(&pk.s, &self.v, &pk.n)?) % &pk.n;
        product = (product * represent_to_bases(&pk.r, messages, &pk.n)?) % &pk.n;
        Ok(product == pk.z)
    }

    /// Returns `A^e mod N`, the value `ProofS` speaks about.
    pub fn q(&self, pk: &PublicKey) -> Result<BigInt> {
        mod_pow(&self.a, &self.e, &pk.n)
    }
}

/// Computes `∏ bases[i]^{exponents[i]} mod modulus` over the shorter of the two slices.
pub fn represent_to_bases(bases: &[BigInt], exponents: &[BigInt], modulus: &BigInt) -> Result<BigInt> {
    let mut product = BigInt::one();
    for (base, exponent) in bases.iter().zip(exponents) {
        product = (product * mod_pow(base, exponent, modulus)?) % modulus;
    }
    Ok(product)
}

/// Blind-signs the commitment `u` together with `messages` placed on `bases`.
///
/// Picks `v` with `lv` bits and its top bit set, and a prime `e` in
/// `[2^(le-1), 2^(le-1) + 2^(le_prime-1)]`, then computes
/// `A = (Z * (S^v * U * ∏ bases_i^{m_i})^{-1})^{e^{-1} mod P'Q'} mod N`.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] if there are more messages than bases or a message is
/// wider than `lm` bits.
pub fn sign_message_block_and_commitment<R: RngCore + CryptoRng>(
    sk: &SecretKey,
    pk: &PublicKey,
    u: &BigInt,
    messages: &[BigInt],
    bases: &[BigInt],
    rng: &mut R,
) -> Result<ClSignature> {
    let params = &pk.params;
    if messages.len() > bases.len() {
        return Err(Error::InvalidParams(format!(
            "{} messages but only {} bases",
            messages.len(),
            bases.len()
        )));
    }
    if let Some(i) = messages
        .iter()
        .position(|m| m.is_negative() || m.bits() > u64::from(params.lm))
    {
        return Err(Error::InvalidParams(format!(
            "message {i} does not fit in {} bits",
            params.lm
        )));
    }

    let v = random_bits(rng, params.lv - 1) + (BigInt::one() << (params.lv - 1));
    let e = random_prime_in_range(rng, params.le - 1, params.le_prime - 1)?;

    let n = &pk.n;
    let mut denominator = mod_pow(&pk.s, &v, n)?;
    denominator = (denominator * u) % n;
    denominator = (denominator * represent_to_bases(bases, messages, n)?) % n;
    let inverse = mod_inverse(&denominator, n).ok_or_else(|| {
        Error::InvalidGroupElement("commitment is not invertible modulo N".to_string())
    })?;
    let q = (&pk.z * inverse) % n;

    let order = sk.order();
    let d = mod_inverse(&e, &order)
        .ok_or_else(|| Error::Internal("signature exponent is not invertible".to_string()))?;
    let a = mod_pow(&q, &d, n)?;

    Ok(ClSignature { a, e, v })
}
