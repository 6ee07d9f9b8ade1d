//! Attribute content as leaves of a Merkle tree.
//!
//! The tree itself lives elsewhere; it only needs to hash content and compare it.

use core::fmt;

use num_bigint::{BigInt, Sign};
use sha2::{Digest, Sha256};

const DIGEST_BITS: u32 = 256;

/// Content a Merkle tree can store.
pub trait Content {
    /// Digest of the content.
    fn calculate_hash(&self) -> Vec<u8>;

    /// Whether two contents are the same.
    fn equals(&self, other: &Self) -> bool;
}

/// Opaque attribute bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    value: Vec<u8>,
}

impl Attribute {
    /// Wraps raw attribute content.
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The raw content.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Maps the content to a signable attribute of at most `lm` bits by taking the top
    /// `lm` bits of its SHA-256 digest.
    pub fn to_message(&self, lm: u32) -> BigInt {
        let digest = BigInt::from_bytes_be(Sign::Plus, &self.calculate_hash());
        if lm >= DIGEST_BITS {
            digest
        } else {
            digest >> (DIGEST_BITS - lm)
        }
    }
}

impl Content for Attribute {
    fn calculate_hash(&self) -> Vec<u8> {
        Sha256::digest(&self.value).to_vec()
    }

    fn equals(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.calculate_hash()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_known_digest() {
        let attribute = Attribute::new("abc");
        assert_eq!(
            attribute.to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn equality_is_bytewise() {
        let a = Attribute::new(b"name=alice".to_vec());
        assert!(a.equals(&Attribute::new("name=alice")));
        assert!(!a.equals(&Attribute::new("name=alice\0")));
    }

    #[test]
    fn message_fits_requested_width() {
        let attribute = Attribute::new("birthdate=1990-01-01");
        for lm in [8, 64, 255, 256, 512] {
            assert!(attribute.to_message(lm).bits() <= u64::from(lm));
        }
        assert_eq!(
            attribute.to_message(512),
            BigInt::from_bytes_be(Sign::Plus, &attribute.calculate_hash())
        );
    }
}
