//! # CL anonymous credentials
//!
//! Blind issuance of Camenisch-Lysyanskaya signatures over a committed holder secret and
//! cleartext attributes, together with the zero-knowledge machinery it rests on:
//!
//! - **primitives**: group context, modular arithmetic, secure randomness, Fiat-Shamir transcript
//! - **zkproof**: named lookup capabilities and the representation (Sigma) proof engine
//! - **keyproof**: range proofs built from repeated bit-challenge rounds, plus a simulator
//! - **credential**: system parameters, keys, signatures, `ProofU`/`ProofS`, issuer and holder
//!
//! Two self-contained utilities live next to the core: [`attribute`] adapts attribute
//! content to a Merkle-tree hashing interface, and [`lattice`] packs field elements for a
//! lattice-signature proof backend.
//!
//! # Example
//!
//! ```rust,no_run
//! use cl_anoncreds::credential::{
//!     generate_key_pair, CredentialBuilder, Issuer, SystemParameters,
//! };
//! use cl_anoncreds::primitives::rng::random_bits;
//! use cl_anoncreds::SecureRng;
//! use num_bigint::BigInt;
//!
//! # fn main() -> cl_anoncreds::Result<()> {
//! let mut rng = SecureRng::new();
//! let params = SystemParameters::default_for(1024).expect("preset exists");
//! let (sk, pk) = generate_key_pair(&params, 3, &mut rng)?;
//! let context = random_bits(&mut rng, params.lh);
//!
//! let secret = random_bits(&mut rng, params.lm);
//! let builder = CredentialBuilder::new(pk.clone(), context.clone(), secret, &mut rng)?;
//! let nonce1 = random_bits(&mut rng, params.lstatzk);
//! let commit_msg = builder.commit_to_secret_and_prove(&nonce1, &mut rng)?;
//!
//! let issuer = Issuer::new(sk, pk, context);
//! let attributes = vec![BigInt::from(1), BigInt::from(2), BigInt::from(3)];
//! let sig_msg = issuer.issue_signature(&commit_msg, &attributes, &nonce1, &mut rng)?;
//! let credential = builder.construct_credential(&sig_msg, &attributes)?;
//! assert!(credential.verify());
//! # Ok(())
//! # }
//! ```

pub mod attribute;
pub mod credential;
pub mod error;
pub mod keyproof;
pub mod lattice;
pub mod primitives;
pub mod zkproof;

pub use error::Error;
pub use keyproof::{
    Follower, RangeProof, RangeProofBundle, RangeProofStructure, RangeProver, RangeVerifier,
    TracingFollower,
};
pub use primitives::{hash_commit, Group, SecureRng, Transcript};
pub use zkproof::{
    BaseLookup, BaseMap, LhsContribution, ProofLookup, ProofResult,
    RepresentationProofStructure, RhsContribution, Secret, SecretLookup,
};

/// Result type alias using the library's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
