//! Fiat-Shamir transcript for non-interactive proofs.
//!
//! Provides domain-separated, transcript-based challenge generation using Merlin.

use merlin::Transcript as MerlinTranscript;
use num_bigint::{BigInt, Sign};

/// Protocol label for transcript initialization.
const PROTOCOL_LABEL: &[u8] = b"CL anonymous credentials v1.0.0";

/// Domain separation tag for protocol name.
const PROTOCOL_DST: &[u8] = b"cl-anoncreds";

/// Domain separation tag for challenge generation.
const CHALLENGE_DST: &[u8] = b"challenge";

/// Challenge length in bytes (256-bit challenges).
const CHALLENGE_BYTES: usize = 32;

/// Transcript wrapper for Fiat-Shamir transformation.
///
/// Every value is appended as a length-framed message, so different sequences of
/// integers can never produce the same transcript.
pub struct Transcript(MerlinTranscript);

impl Transcript {
    /// Creates a new transcript for the credential protocols.
    pub fn new() -> Self {
        let mut transcript = MerlinTranscript::new(PROTOCOL_LABEL);
        transcript.append_message(b"protocol", PROTOCOL_DST);
        Self(transcript)
    }

    /// Appends the number of values that will follow.
    pub fn append_len(&mut self, len: usize) {
        self.0.append_u64(b"len", len as u64);
    }

    /// Appends a big integer in signed big-endian form.
    pub fn append_int(&mut self, value: &BigInt) {
        self.0.append_message(b"int", &value.to_signed_bytes_be());
    }

    /// Generates a non-negative 256-bit challenge.
    pub fn challenge_int(&mut self) -> BigInt {
        let mut buf = [0u8; CHALLENGE_BYTES];
        self.0.challenge_bytes(CHALLENGE_DST, &mut buf);
        BigInt::from_bytes_be(Sign::Plus, &buf)
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives the Fiat-Shamir challenge for a list of public values.
///
/// Callers pass the context first and the nonce last, with the statement and the
/// commitments in between. Identical inputs always give the identical challenge.
pub fn hash_commit(values: &[BigInt]) -> BigInt {
    let mut transcript = Transcript::new();
    transcript.append_len(values.len());
    for value in values {
        transcript.append_int(value);
    }
    transcript.challenge_int()
}
