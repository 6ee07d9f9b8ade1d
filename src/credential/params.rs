use serde::{Deserialize, Serialize};

/// Bit lengths everything else is derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseParameters {
    /// Bit length of the RSA modulus `N`.
    pub ln: u32,
    /// Bit length of Fiat-Shamir challenges.
    pub lh: u32,
    /// Maximum bit length of an attribute.
    pub lm: u32,
    /// Statistical zero-knowledge security parameter.
    pub lstatzk: u32,
}

/// Bit-length configuration of the CL signature scheme and its proofs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemParameters {
    /// Bit length of the RSA modulus `N`.
    pub ln: u32,
    /// Bit length of Fiat-Shamir challenges.
    pub lh: u32,
    /// Maximum bit length of an attribute.
    pub lm: u32,
    /// Statistical zero-knowledge security parameter.
    pub lstatzk: u32,
    /// Bit length of the signature exponent `e`.
    pub le: u32,
    /// Bit length of the interval `e` is drawn from.
    pub le_prime: u32,
    /// Bit length of the randomizer for `e` in signature proofs.
    pub le_commit: u32,
    /// Bit length of attribute randomizers, `lm + lstatzk + lh`.
    pub lm_commit: u32,
    /// Bit length of the signature's blinding exponent `v`.
    pub lv: u32,
    /// Bit length of the holder's blinding `v'`.
    pub lv_prime: u32,
    /// Bit length of the randomizer for `v'`, `ln + 2 * lstatzk + lh`.
    pub lv_prime_commit: u32,
}

impl SystemParameters {
    /// Derives the full parameter set from the base lengths.
    pub fn derive(base: BaseParameters) -> Self {
        let BaseParameters {
            ln,
            lh,
            lm,
            lstatzk,
        } = base;
        let le_prime = 120;
        Self {
            ln,
            lh,
            lm,
            lstatzk,
            le: lstatzk + lh + lm + 5,
            le_prime,
            le_commit: le_prime + lstatzk + lh,
            lm_commit: lm + lstatzk + lh,
            lv: ln + 2 * lstatzk + lh + lm + 4,
            lv_prime: ln + lstatzk,
            lv_prime_commit: ln + 2 * lstatzk + lh,
        }
    }

    /// Returns the preset for a 1024, 2048 or 4096-bit modulus.
    pub fn default_for(ln: u32) -> Option<Self> {
        let base = match ln {
            1024 => BaseParameters {
                ln,
                lh: 256,
                lm: 256,
                lstatzk: 80,
            },
            2048 => BaseParameters {
                ln,
                lh: 256,
                lm: 256,
                lstatzk: 128,
            },
            4096 => BaseParameters {
                ln,
                lh: 256,
                lm: 512,
                lstatzk: 128,
            },
            _ => return None,
        };
        Some(Self::derive(base))
    }
}
