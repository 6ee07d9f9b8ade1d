//! Modular arithmetic and prime generation over arbitrary-precision integers.

use glass_pumpkin::{prime, safe_prime};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed};
use rand::{CryptoRng, RngCore};

use super::rng::random_bits;
use crate::{Error, Result};

/// Smallest prime the generators will produce.
const MIN_PRIME_BITS: u32 = 128;

/// Greatest common divisor of `a` and `b`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    a.gcd(b)
}

/// Inverse of `a` modulo `m`, if it exists.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Option<BigInt> {
    let egcd = a.mod_floor(m).extended_gcd(m);
    if egcd.gcd.is_one() {
        Some(egcd.x.mod_floor(m))
    } else {
        None
    }
}

/// Computes `base^exp mod modulus`, inverting `base` for negative exponents.
pub fn mod_pow(base: &BigInt, exp: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    if !modulus.is_positive() {
        return Err(Error::InvalidParams("modulus must be positive".to_string()));
    }

    if exp.is_negative() {
        let inverse = mod_inverse(base, modulus).ok_or_else(|| {
            Error::InvalidGroupElement("base is not invertible modulo the modulus".to_string())
        })?;
        return Ok(inverse.modpow(&-exp, modulus));
    }

    Ok(base.mod_floor(modulus).modpow(exp, modulus))
}

/// Probabilistic primality test: trial division, then Miller-Rabin.
pub fn is_probable_prime(n: &BigInt) -> bool {
    match n.to_biguint() {
        Some(n) if n == BigUint::from(2u32) => true,
        Some(n) if n > BigUint::one() => prime::check(&n),
        _ => false,
    }
}

/// Whether `p` and `(p - 1) / 2` are both prime.
pub fn is_safe_prime(p: &BigInt) -> bool {
    is_probable_prime(p) && is_probable_prime(&((p - 1u32) >> 1u32))
}

/// Returns a prime in `[2^start_bits, 2^start_bits + 2^length_bits)`.
pub fn random_prime_in_range<R: RngCore + CryptoRng>(
    rng: &mut R,
    start_bits: u32,
    length_bits: u32,
) -> Result<BigInt> {
    if length_bits < 2 || length_bits >= start_bits {
        return Err(Error::InvalidParams(format!(
            "prime range length {length_bits} must be in [2, {start_bits})"
        )));
    }

    let start = BigInt::one() << start_bits;
    loop {
        let candidate = (&start + random_bits(rng, length_bits)) | BigInt::one();
        if is_probable_prime(&candidate) {
            return Ok(candidate);
        }
    }
}

/// Returns a safe prime `p = 2p' + 1` of exactly `bits` bits.
pub fn generate_safe_prime<R: RngCore + CryptoRng>(rng: &mut R, bits: u32) -> Result<BigInt> {
    if bits < MIN_PRIME_BITS {
        return Err(Error::InvalidParams(format!(
            "safe prime of {bits} bits is too small, need at least {MIN_PRIME_BITS}"
        )));
    }

    let p = safe_prime::from_rng(bits as usize, rng)
        .map_err(|e| Error::Internal(format!("safe prime generation failed: {e:?}")))?;
    Ok(BigInt::from(p))
}
