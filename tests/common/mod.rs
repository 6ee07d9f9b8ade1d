//! Common test utilities shared across integration tests.
#![allow(dead_code)]

use cl_anoncreds::credential::{BaseParameters, PublicKey, SecretKey, SystemParameters};
use cl_anoncreds::zkproof::{BaseMap, LhsContribution, RhsContribution};
use cl_anoncreds::{Group, RangeProofStructure, RepresentationProofStructure, SecureRng};
use num_bigint::BigInt;
use num_traits::One;

/// 256-bit safe primes, precomputed so tests do not spend their time in prime search.
pub const SAFE_PRIME_P: &str = "98d08f4c25fe77ed3d9f9b64b3df79bf6bca726784e28b61d284472b36e301d3";
pub const SAFE_PRIME_Q: &str = "89b23bc5cc47e3980de9096f2448f87bbc846d0327c4f19e7986358c29b44393";
pub const SAFE_PRIME_G: &str = "a8b563f16da88a4dcf84e140fb3f49a1a3ddd7d29ce2dce92e0d47986c111663";

/// Initialize test tracing (call once at the beginning of tests).
///
/// Subsequent calls are safe and will be ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("cl_anoncreds=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

pub fn hex_int(hex: &str) -> BigInt {
    BigInt::parse_bytes(hex.as_bytes(), 16).expect("valid hex")
}

/// Parameters for a 512-bit modulus; every other length matches the 1024-bit preset.
pub fn test_params() -> SystemParameters {
    SystemParameters::derive(BaseParameters {
        ln: 512,
        lh: 256,
        lm: 256,
        lstatzk: 80,
    })
}

/// Issuer key pair over the fixed safe primes, with three attribute slots.
pub fn test_key_pair(rng: &mut SecureRng) -> (SecretKey, PublicKey) {
    let params = test_params();
    let sk = SecretKey::from_safe_primes(hex_int(SAFE_PRIME_P), hex_int(SAFE_PRIME_Q))
        .expect("fixed primes are safe primes");
    let pk = PublicKey::generate(&sk, 3, &params, rng).expect("public key generation");
    (sk, pk)
}

/// Prime-order group of quadratic residues modulo a 256-bit safe prime.
pub fn test_group() -> Group {
    Group::from_safe_prime(hex_int(SAFE_PRIME_G)).expect("fixed prime is a safe prime")
}

/// Pedersen commitment `C = g^x * h^r` with a range proof over `x`.
pub struct PedersenRange {
    pub group: Group,
    pub bases: BaseMap,
    pub structure: RangeProofStructure,
}

pub fn pedersen_range(x: &BigInt, r: &BigInt, l1: u32, l2: u32, rng: &mut SecureRng) -> PedersenRange {
    let group = test_group();
    let g = group.random_element(rng);
    let h = group.random_element(rng);
    let commitment = group.mul(
        &group.exp(&g, x).expect("exp"),
        &group.exp(&h, r).expect("exp"),
    );
    let bases = BaseMap::new()
        .with("g", g)
        .with("h", h)
        .with("C", commitment);

    let base = RepresentationProofStructure::new(
        vec![LhsContribution {
            base: "C".to_string(),
            power: BigInt::one(),
        }],
        vec![
            RhsContribution {
                base: "g".to_string(),
                secret: "x".to_string(),
                power: 1,
            },
            RhsContribution {
                base: "h".to_string(),
                secret: "r".to_string(),
                power: 1,
            },
        ],
    );
    let structure = RangeProofStructure::new(base, "x", l1, l2).expect("x is on the rhs");

    PedersenRange {
        group,
        bases,
        structure,
    }
}
