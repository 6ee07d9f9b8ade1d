//! Error types for CL credential issuance and its zero-knowledge proofs.

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid parameters were provided (key material, bit lengths, attribute sizes).
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// A group element has no inverse or is otherwise unusable.
    #[error("Invalid group element: {0}")]
    InvalidGroupElement(String),

    /// The holder's proof of knowledge of the commitment `U` did not verify.
    #[error("The commitment proof is not correct")]
    IncorrectCommitment,

    /// A recomputed Fiat-Shamir challenge did not match the one in the proof.
    #[error("Proof verification failed")]
    ProofVerificationFailed,

    /// A proof failed structural validation before any algebraic check.
    #[error("Malformed proof: {0}")]
    MalformedProof(String),

    /// A proof structure referenced a secret the lookup does not know.
    #[error("Unknown secret: {0}")]
    UnknownSecret(String),

    /// A proof structure referenced a base the lookup does not know.
    #[error("Unknown base: {0}")]
    UnknownBase(String),

    /// A proof lookup has no response for the named secret.
    #[error("Missing proof result: {0}")]
    MissingProofResult(String),

    /// Byte-level packing or unpacking failed.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// An internal invariant was violated.
    #[error("Internal error: {0}")]
    Internal(String),
}
