//! Cryptographically secure random number generation and big-integer sampling.

use num_bigint::{BigInt, RandBigInt};
use num_traits::{One, Signed, Zero};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::modular::gcd;

/// Cryptographically secure random number generator.
///
/// This is a thin wrapper around `OsRng` that provides a consistent interface
/// for cryptographic randomness throughout the library.
pub struct SecureRng(OsRng);

impl SecureRng {
    /// Creates a new cryptographically secure random number generator.
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRng {}

/// Samples uniformly from `[0, limit)`. Returns zero for a non-positive limit.
pub fn random_below<R: RngCore + CryptoRng>(rng: &mut R, limit: &BigInt) -> BigInt {
    if !limit.is_positive() {
        return BigInt::zero();
    }
    rng.gen_bigint_range(&BigInt::zero(), limit)
}

/// Samples uniformly from `[0, 2^bits)`.
pub fn random_bits<R: RngCore + CryptoRng>(rng: &mut R, bits: u32) -> BigInt {
    BigInt::from(rng.gen_biguint(u64::from(bits)))
}

/// Samples uniformly from `[-2^bits, 2^bits)`.
pub fn random_signed_bits<R: RngCore + CryptoRng>(rng: &mut R, bits: u32) -> BigInt {
    let bound = BigInt::one() << bits;
    rng.gen_bigint_range(&-&bound, &bound)
}

/// Returns a random element of the multiplicative group `Z_modulus^*`.
///
/// Rejection-samples until the candidate is positive and coprime to `modulus`.
pub fn random_unit<R: RngCore + CryptoRng>(rng: &mut R, modulus: &BigInt) -> BigInt {
    loop {
        let r = random_below(rng, modulus);
        if r.is_positive() && gcd(&r, modulus).is_one() {
            return r;
        }
    }
}
