//! Blind issuance of CL signatures.
//!
//! The holder commits to a secret as `U = S^{v'} * R0^{secret}` and proves knowledge of
//! the opening ([`ProofU`]). The issuer checks that proof, signs `U` together with the
//! cleartext attributes and proves the signature was formed with its secret key
//! ([`ProofS`]). The holder then unblinds by adding `v'` to the signature's `v`.

/// Holder-side session state and the resulting credential.
pub mod builder;
/// Issuer-side protocol.
pub mod issuer;
/// Key material.
pub mod keys;
/// Messages exchanged during issuance.
pub mod messages;
/// Bit-length configuration.
pub mod params;
/// `ProofU` and `ProofS`.
pub mod proofs;
/// CL signing and verification.
pub mod signature;

pub use builder::{Credential, CredentialBuilder};
pub use issuer::{random_element_multiplicative_group, Issuer};
pub use keys::{generate_key_pair, PublicKey, SecretKey};
pub use messages::{IssueCommitmentMessage, IssueSignatureMessage};
pub use params::{BaseParameters, SystemParameters};
pub use proofs::{commitment_structure, ProofS, ProofU};
pub use signature::{represent_to_bases, sign_message_block_and_commitment, ClSignature};
