use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};
use rand::{CryptoRng, RngCore};

use super::modular::{is_safe_prime, mod_pow};
use super::rng::random_below;
use crate::{Error, Result};

/// Arithmetic context for proofs: a modulus and, when public, the order of the subgroup
/// the proof bases live in.
///
/// All bases handed to [`Group::exp`] are assumed to lie in that subgroup, so exponents
/// may be reduced modulo the order. For RSA-style moduli the order is the issuer's
/// secret and the group is built with [`Group::hidden_order`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    modulus: BigInt,
    order: Option<BigInt>,
}

impl Group {
    /// Builds the quadratic-residue subgroup of `Z_p^*` for a safe prime `p = 2q + 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` or `(p - 1) / 2` is not prime.
    pub fn from_safe_prime(p: BigInt) -> Result<Self> {
        if !is_safe_prime(&p) {
            return Err(Error::InvalidParams(
                "modulus is not a safe prime".to_string(),
            ));
        }
        let order = (&p - 1u32) >> 1u32;
        Ok(Self {
            modulus: p,
            order: Some(order),
        })
    }

    /// Builds a group whose order is not known to the caller.
    pub fn hidden_order(modulus: BigInt) -> Self {
        Self {
            modulus,
            order: None,
        }
    }

    /// Returns the modulus.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Returns the subgroup order, if public.
    pub fn order(&self) -> Option<&BigInt> {
        self.order.as_ref()
    }

    /// Computes `base^exponent` in the group.
    pub fn exp(&self, base: &BigInt, exponent: &BigInt) -> Result<BigInt> {
        match &self.order {
            Some(order) => mod_pow(base, &exponent.mod_floor(order), &self.modulus),
            None => mod_pow(base, exponent, &self.modulus),
        }
    }

    /// Multiplies two elements modulo the group modulus.
    pub fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        (a * b).mod_floor(&self.modulus)
    }

    /// Reduces an exponent modulo the order when the order is public.
    pub fn reduce(&self, x: BigInt) -> BigInt {
        match &self.order {
            Some(order) => x.mod_floor(order),
            None => x,
        }
    }

    /// Samples an exponent uniformly from `[0, order)`.
    ///
    /// # Errors
    ///
    /// Returns an error for hidden-order groups, whose callers must pick a bounded range.
    pub fn random_exponent<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<BigInt> {
        let order = self.order.as_ref().ok_or_else(|| {
            Error::InvalidParams("cannot sample exponents in a hidden-order group".to_string())
        })?;
        Ok(random_below(rng, order))
    }

    /// Samples a random quadratic residue other than one, suitable as a generator.
    pub fn random_element<R: RngCore + CryptoRng>(&self, rng: &mut R) -> BigInt {
        loop {
            let r = random_below(rng, &self.modulus);
            let candidate = (&r * &r).mod_floor(&self.modulus);
            if candidate.is_positive() && !candidate.is_one() {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SecureRng;

    fn small_group() -> Group {
        Group::from_safe_prime(BigInt::from(23u32)).unwrap()
    }

    #[test]
    fn safe_prime_group_order() {
        let group = small_group();
        assert_eq!(group.order(), Some(&BigInt::from(11u32)));
    }

    #[test]
    fn rejects_non_safe_prime() {
        assert!(Group::from_safe_prime(BigInt::from(29u32)).is_err());
    }

    #[test]
    fn negative_exponents_reduce_modulo_order() {
        let group = small_group();
        let base = BigInt::from(4u32);
        let direct = group.exp(&base, &BigInt::from(8u32)).unwrap();
        let negative = group.exp(&base, &BigInt::from(-3)).unwrap();
        assert_eq!(direct, negative);
    }

    #[test]
    fn hidden_order_inverts_for_negative_exponents() {
        let group = Group::hidden_order(BigInt::from(35u32));
        let base = BigInt::from(4u32);
        let pos = group.exp(&base, &BigInt::from(3u32)).unwrap();
        let neg = group.exp(&base, &BigInt::from(-3)).unwrap();
        assert_eq!(group.mul(&pos, &neg), BigInt::one());
        assert!(group.random_exponent(&mut SecureRng::new()).is_err());
    }

    #[test]
    fn random_element_is_residue() {
        let group = small_group();
        let mut rng = SecureRng::new();
        for _ in 0..20 {
            let g = group.random_element(&mut rng);
            assert_eq!(group.exp(&g, &BigInt::from(11u32)).unwrap(), BigInt::one());
        }
    }
}
