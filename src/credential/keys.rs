use core::fmt;

use num_bigint::BigInt;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use super::SystemParameters;
use crate::primitives::modular::{generate_safe_prime, is_safe_prime, mod_pow};
use crate::primitives::rng::{random_below, random_unit};
use crate::zkproof::BaseMap;
use crate::{Error, Result};

/// The issuer's secret factorization `N = P * Q` with `P = 2P' + 1`, `Q = 2Q' + 1`.
///
/// Only the issuer holds it. It is deliberately neither serializable nor printable, and
/// it is used only to invert exponents modulo the secret order `P' * Q'`.
#[derive(Clone)]
pub struct SecretKey {
    p: BigInt,
    q: BigInt,
    p_prime: BigInt,
    q_prime: BigInt,
}

impl SecretKey {
    /// Builds a secret key from two distinct safe primes.
    ///
    /// # Errors
    ///
    /// Returns an error if the primes are equal or either one is not a safe prime.
    pub fn from_safe_primes(p: BigInt, q: BigInt) -> Result<Self> {
        if p == q {
            return Err(Error::InvalidParams(
                "secret key primes must be distinct".to_string(),
            ));
        }

        if !is_safe_prime(&p) || !is_safe_prime(&q) {
            return Err(Error::InvalidParams(
                "secret key primes must be safe primes".to_string(),
            ));
        }

        let p_prime = (&p - 1u32) >> 1u32;
        let q_prime = (&q - 1u32) >> 1u32;

        Ok(Self {
            p,
            q,
            p_prime,
            q_prime,
        })
    }

    /// Generates a fresh secret key for an `ln`-bit modulus.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if `ln / 2` is below the smallest supported prime size.
    pub fn generate<R: RngCore + CryptoRng>(params: &SystemParameters, rng: &mut R) -> Result<Self> {
        let half = params.ln / 2;
        let p = generate_safe_prime(rng, half)?;
        loop {
            let q = generate_safe_prime(rng, half)?;
            if q != p {
                return Self::from_safe_primes(p, q);
            }
        }
    }

    /// The RSA modulus `N = P * Q`.
    pub fn modulus(&self) -> BigInt {
        &self.p * &self.q
    }

    /// The secret order `P' * Q'` of the quadratic residues modulo `N`.
    pub fn order(&self) -> BigInt {
        &self.p_prime * &self.q_prime
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

/// The issuer's public key: modulus, bases `S` and `Z`, and generators `R`.
///
/// `R[0]` is reserved for the holder's committed secret; `R[1..]` carry the cleartext
/// attributes in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    #[serde(rename = "N")]
    pub n: BigInt,
    #[serde(rename = "S")]
    pub s: BigInt,
    #[serde(rename = "Z")]
    pub z: BigInt,
    #[serde(rename = "R")]
    pub r: Vec<BigInt>,
    #[serde(rename = "Params")]
    pub params: SystemParameters,
}

impl PublicKey {
    /// Generates the public key matching `sk`, with room for `num_attributes` cleartext
    /// attributes.
    pub fn generate<R: RngCore + CryptoRng>(
        sk: &SecretKey,
        num_attributes: usize,
        params: &SystemParameters,
        rng: &mut R,
    ) -> Result<Self> {
        let n = sk.modulus();
        let order = sk.order();

        let root = random_unit(rng, &n);
        let s = (&root * &root) % &n;

        // exponents in [2, order)
        let random_power = |rng: &mut R| -> Result<BigInt> {
            let exponent = random_below(rng, &(&order - 2u32)) + 2u32;
            mod_pow(&s, &exponent, &n)
        };

        let z = random_power(rng)?;
        let r = (0..=num_attributes)
            .map(|_| random_power(rng))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            n,
            s,
            z,
            r,
            params: *params,
        })
    }

    /// Number of cleartext attributes the key can sign, excluding the reserved slot.
    pub fn num_attributes(&self) -> usize {
        self.r.len().saturating_sub(1)
    }

    /// Named bases for proofs: `S`, `Z` and `R0`, `R1`, ...
    pub fn bases(&self) -> BaseMap {
        let mut bases = BaseMap::new()
            .with("S", self.s.clone())
            .with("Z", self.z.clone());
        for (i, r) in self.r.iter().enumerate() {
            bases.insert(format!("R{i}"), r.clone());
        }
        bases
    }
}

/// Generates a secret key and its public key.
pub fn generate_key_pair<R: RngCore + CryptoRng>(
    params: &SystemParameters,
    num_attributes: usize,
    rng: &mut R,
) -> Result<(SecretKey, PublicKey)> {
    let sk = SecretKey::generate(params, rng)?;
    let pk = PublicKey::generate(&sk, num_attributes, params, rng)?;
    tracing::debug!(ln = params.ln, num_attributes, "generated issuer key pair");
    Ok((sk, pk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::BaseParameters;
    use num_traits::One;
    use crate::zkproof::BaseLookup;
    use crate::primitives::modular::gcd;
    use crate::SecureRng;

    fn is_unit(x: &BigInt, n: &BigInt) -> bool {
        gcd(x, n).is_one()
    }

    #[test]
    fn rejects_equal_or_unsafe_primes() {
        let p = BigInt::from(23u32);
        assert!(SecretKey::from_safe_primes(p.clone(), p).is_err());
        assert!(SecretKey::from_safe_primes(BigInt::from(23u32), BigInt::from(29u32)).is_err());
    }

    #[test]
    fn small_key_pair_has_expected_shape() {
        let mut rng = SecureRng::new();
        let sk = SecretKey::from_safe_primes(BigInt::from(1019u32), BigInt::from(1187u32)).unwrap();
        assert_eq!(sk.order(), BigInt::from(509u32 * 593));

        let params = SystemParameters::default_for(1024).unwrap();
        let pk = PublicKey::generate(&sk, 3, &params, &mut rng).unwrap();
        assert_eq!(pk.n, BigInt::from(1019u32 * 1187));
        assert_eq!(pk.r.len(), 4);
        assert_eq!(pk.num_attributes(), 3);

        // every base is a quadratic residue, so it has order dividing P'Q'
        for base in pk.r.iter().chain([&pk.s, &pk.z]) {
            assert!(is_unit(base, &pk.n));
            assert_eq!(mod_pow(base, &sk.order(), &pk.n).unwrap(), BigInt::one());
        }

        let bases = pk.bases();
        assert_eq!(bases.base("R3"), Some(&pk.r[3]));
        assert_eq!(bases.base("S"), Some(&pk.s));
    }

    #[test]
    fn debug_hides_factors() {
        let sk = SecretKey::from_safe_primes(BigInt::from(1019u32), BigInt::from(1187u32)).unwrap();
        assert!(!format!("{sk:?}").contains("1019"));
    }

    #[test]
    fn generated_key_pair_is_consistent() {
        let mut rng = SecureRng::new();
        let params = SystemParameters::derive(BaseParameters {
            ln: 256,
            lh: 256,
            lm: 16,
            lstatzk: 8,
        });
        let (sk, pk) = generate_key_pair(&params, 2, &mut rng).unwrap();

        assert_eq!(pk.n, &sk.p * &sk.q);
        assert_eq!(pk.n, sk.modulus());
        assert_ne!(sk.p, sk.q);
        assert_eq!(sk.p.bits(), 128);
        assert_eq!(sk.q.bits(), 128);
        assert!(is_safe_prime(&sk.p) && is_safe_prime(&sk.q));
        assert_eq!(sk.order(), &sk.p_prime * &sk.q_prime);
        assert_eq!(&sk.p, &(&sk.p_prime * 2u32 + 1u32));
        assert_eq!(pk.params, params);
        assert_eq!(pk.num_attributes(), 2);

        for base in pk.r.iter().chain([&pk.s, &pk.z]) {
            assert!(is_unit(base, &pk.n));
            assert_eq!(mod_pow(base, &sk.order(), &pk.n).unwrap(), BigInt::one());
        }
    }

    #[test]
    fn generation_refuses_undersized_modulus() {
        let mut rng = SecureRng::new();
        let params = SystemParameters::derive(BaseParameters {
            ln: 64,
            lh: 256,
            lm: 16,
            lstatzk: 8,
        });
        assert!(matches!(
            generate_key_pair(&params, 1, &mut rng),
            Err(Error::InvalidParams(_))
        ));
    }
}
