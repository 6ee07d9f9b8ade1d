use std::collections::BTreeMap;

use num_bigint::BigInt;
use num_traits::{One, Signed};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use super::{Follower, RANGE_PROOF_EPSILON, RANGE_PROOF_ITERS};
use crate::primitives::rng::{random_bits, random_signed_bits};
use crate::zkproof::{BaseLookup, ProofLookup, RepresentationProofStructure, SecretLookup};
use crate::{Error, Group, Result};

/// A representation statement with one secret additionally proven to be small.
///
/// Each of the [`RANGE_PROOF_ITERS`] rounds is a copy of the embedded representation
/// proof whose challenge is a single bit. In a round with bit one the range secret's
/// response is `r + 2^l1 - x`, which stays inside `[0, 2^(l2+ε+2))` only when `x` is
/// small. The bound is enforced by [`RangeProofStructure::verify_proof_structure`].
///
/// On its own the check accepts roughly `|x| < 2^(l2+ε+1)`. Every `x` within `2^(l2+ε)`
/// of `2^l1` passes, so `x = 2^l1` is accepted. The tight `[0, 2^l1)` interval comes
/// from the protocol that composes this proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeProofStructure {
    base: RepresentationProofStructure,
    range_secret: String,
    l1: u32,
    l2: u32,
}

/// Responses of a range proof: one list of [`RANGE_PROOF_ITERS`] values per secret.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeProof {
    /// Per-secret response lists, one entry per round.
    #[serde(rename = "Results")]
    pub results: BTreeMap<String, Vec<BigInt>>,
}

/// Randomizers committed to in every round. Consumed by
/// [`RangeProofStructure::build_proof`] so that it can never answer two challenges.
pub struct RangeCommit {
    commits: BTreeMap<String, Vec<BigInt>>,
}

struct RoundCommitLookup<'a> {
    commits: &'a RangeCommit,
    round: usize,
}

impl SecretLookup for RoundCommitLookup<'_> {
    fn secret(&self, _name: &str) -> Option<&BigInt> {
        None
    }

    fn randomizer(&self, name: &str) -> Option<&BigInt> {
        self.commits
            .commits
            .get(name)
            .and_then(|rounds| rounds.get(self.round))
    }
}

struct RoundResultLookup {
    results: BTreeMap<String, BigInt>,
}

impl ProofLookup for RoundResultLookup {
    fn proof_result(&self, name: &str) -> Option<&BigInt> {
        self.results.get(name)
    }
}

impl RangeProofStructure {
    /// Creates a range proof over `base`, bounding the secret `range_secret`.
    ///
    /// `l1` is the bit length of the value and `l2` the statistical slack added to the
    /// range secret's randomizers.
    ///
    /// # Errors
    ///
    /// Returns an error if `range_secret` does not occur on the right-hand side of `base`.
    pub fn new(
        base: RepresentationProofStructure,
        range_secret: impl Into<String>,
        l1: u32,
        l2: u32,
    ) -> Result<Self> {
        let range_secret = range_secret.into();
        if !base.rhs.iter().any(|rhs| rhs.secret == range_secret) {
            return Err(Error::UnknownSecret(range_secret));
        }
        Ok(Self {
            base,
            range_secret,
            l1,
            l2,
        })
    }

    /// Returns the embedded representation structure.
    pub fn base(&self) -> &RepresentationProofStructure {
        &self.base
    }

    /// Returns the name of the bounded secret.
    pub fn range_secret(&self) -> &str {
        &self.range_secret
    }

    /// Number of range proofs in this structure.
    pub fn num_range_proofs(&self) -> usize {
        1
    }

    /// Number of commitments this structure appends to a commitment list.
    pub fn num_commitments(&self) -> usize {
        RANGE_PROOF_ITERS
    }

    /// Bit width of the range secret's randomizers, `l2 + ε`.
    fn slack_bits(&self) -> u32 {
        self.l2 + RANGE_PROOF_EPSILON
    }

    /// Offset `2^(l2+ε+1)` that keeps range secret responses non-negative.
    fn result_offset(&self) -> BigInt {
        BigInt::one() << (self.slack_bits() + 1)
    }

    fn l1_offset(&self) -> BigInt {
        BigInt::one() << self.l1
    }

    /// Samples fresh randomizers for every round and appends one commitment per round.
    pub fn commitments_from_secrets<R: RngCore + CryptoRng>(
        &self,
        group: &Group,
        list: &mut Vec<BigInt>,
        bases: &dyn BaseLookup,
        rng: &mut R,
        follower: Option<&dyn Follower>,
    ) -> Result<RangeCommit> {
        let mut commits = BTreeMap::new();
        for name in self.base.secret_names() {
            let mut rounds = Vec::with_capacity(RANGE_PROOF_ITERS);
            for _ in 0..RANGE_PROOF_ITERS {
                let randomizer = if name == self.range_secret {
                    random_signed_bits(rng, self.slack_bits())
                } else {
                    group.random_exponent(rng)?
                };
                rounds.push(randomizer);
            }
            commits.insert(name.to_string(), rounds);
        }

        let commit = RangeCommit { commits };
        for round in 0..RANGE_PROOF_ITERS {
            let lookup = RoundCommitLookup {
                commits: &commit,
                round,
            };
            self.base
                .commitments_from_secrets(group, list, bases, &lookup)?;
        }

        if let Some(follower) = follower {
            follower.tick();
        }

        Ok(commit)
    }

    /// Answers the challenge: round `i` uses bit `i` of `challenge`.
    pub fn build_proof(
        &self,
        group: &Group,
        challenge: &BigInt,
        commit: RangeCommit,
        secrets: &dyn SecretLookup,
    ) -> Result<RangeProof> {
        let result_offset = self.result_offset();
        let l1_offset = self.l1_offset();

        let mut results: BTreeMap<String, Vec<BigInt>> = BTreeMap::new();
        for (name, rounds) in commit.commits {
            let secret = secrets
                .secret(&name)
                .ok_or_else(|| Error::UnknownSecret(name.clone()))?;

            let responses: Vec<BigInt> = rounds
                .into_iter()
                .enumerate()
                .map(|(i, randomizer)| {
                    let bit = challenge_bit(challenge, i);
                    if name == self.range_secret {
                        let response = if bit {
                            randomizer + &l1_offset - secret
                        } else {
                            randomizer
                        };
                        response + &result_offset
                    } else if bit {
                        group.reduce(randomizer - secret)
                    } else {
                        randomizer
                    }
                })
                .collect();
            results.insert(name, responses);
        }

        Ok(RangeProof { results })
    }

    /// Produces a proof that looks like a genuine one without knowing any secret.
    ///
    /// Only meaningful as the simulated branch of a larger composed proof; on its own it
    /// passes [`RangeProofStructure::verify_proof_structure`] but not the challenge check.
    pub fn fake_proof<R: RngCore + CryptoRng>(
        &self,
        group: &Group,
        rng: &mut R,
    ) -> Result<RangeProof> {
        let mut results = BTreeMap::new();
        for name in self.base.secret_names() {
            let mut rounds = Vec::with_capacity(RANGE_PROOF_ITERS);
            for _ in 0..RANGE_PROOF_ITERS {
                let response = if name == self.range_secret {
                    random_bits(rng, self.slack_bits() + 1)
                } else {
                    group.random_exponent(rng)?
                };
                rounds.push(response);
            }
            results.insert(name.to_string(), rounds);
        }
        Ok(RangeProof { results })
    }

    /// Structural validation that must pass before any algebraic check.
    ///
    /// Every secret needs exactly [`RANGE_PROOF_ITERS`] responses, and every range secret
    /// response must lie in `[0, 2^(l2+ε+2))`. The bound is what enforces the range.
    pub fn verify_proof_structure(&self, proof: &RangeProof) -> bool {
        for name in self.base.secret_names() {
            match proof.results.get(name) {
                Some(rounds) if rounds.len() == RANGE_PROOF_ITERS => {}
                _ => return false,
            }
        }

        let range_limit = BigInt::one() << (self.slack_bits() + 2);
        proof
            .results
            .get(&self.range_secret)
            .is_some_and(|rounds| {
                rounds
                    .iter()
                    .all(|value| !value.is_negative() && *value < range_limit)
            })
    }

    /// Reconstructs every round's commitment from the responses and appends them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedProof`] if the proof fails structural validation.
    pub fn commitments_from_proof(
        &self,
        group: &Group,
        list: &mut Vec<BigInt>,
        challenge: &BigInt,
        bases: &dyn BaseLookup,
        proof: &RangeProof,
        follower: Option<&dyn Follower>,
    ) -> Result<()> {
        if !self.verify_proof_structure(proof) {
            return Err(Error::MalformedProof(
                "range proof responses are missing or out of bounds".to_string(),
            ));
        }

        let result_offset = self.result_offset();
        let l1_offset = self.l1_offset();
        let secret_names = self.base.secret_names();

        for round in 0..RANGE_PROOF_ITERS {
            let bit = challenge_bit(challenge, round);
            let mut results = BTreeMap::new();
            for name in &secret_names {
                let Some(response) = proof.results.get(*name).and_then(|r| r.get(round)) else {
                    return Err(Error::MissingProofResult((*name).to_string()));
                };
                let value = if *name == self.range_secret {
                    let shifted = response - &result_offset;
                    if bit {
                        shifted - &l1_offset
                    } else {
                        shifted
                    }
                } else {
                    response.clone()
                };
                results.insert((*name).to_string(), value);
            }

            let lookup = RoundResultLookup { results };
            self.base.commitments_from_proof(
                group,
                list,
                &BigInt::from(u8::from(bit)),
                bases,
                &lookup,
            )?;
        }

        if let Some(follower) = follower {
            follower.tick();
        }

        Ok(())
    }
}

/// Bit `i` of a non-negative challenge.
fn challenge_bit(challenge: &BigInt, i: usize) -> bool {
    ((challenge >> i) & BigInt::one()).is_one()
}
