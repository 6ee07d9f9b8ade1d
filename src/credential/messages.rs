use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use super::{ClSignature, ProofS, ProofU};

/// Holder to issuer: the blind commitment, its proof and the holder's nonce for `ProofS`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCommitmentMessage {
    #[serde(rename = "U")]
    pub u: BigInt,
    #[serde(rename = "proofU")]
    pub proof_u: ProofU,
    #[serde(rename = "n2")]
    pub nonce2: BigInt,
}

/// Issuer to holder: the blind signature and the proof it was computed correctly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSignatureMessage {
    /// Signature over the commitment and attributes, blinded by the holder's `v'`.
    pub signature: ClSignature,
    pub proof: ProofS,
}
